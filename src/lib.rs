//! # lsystem-turtle
//!
//! Turns a small L-System grammar (axiom, rewrite rules, angle and step size)
//! into a length-bounded symbol sequence and then into a 2D polyline ready for
//! rendering.
//!
//! The pipeline is `rule text → GrammarTable → derive → interpret → Trace`.
//! Each stage is a pure function of its input; nothing is shared between calls,
//! so independent runs may execute in parallel freely. Rendering is left to the
//! caller.

pub mod config;
pub mod derivation;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod presets;
pub mod runner;
pub mod trace;
pub mod turtle;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logger;

pub use config::*;
pub use derivation::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use presets::*;
pub use runner::*;
pub use trace::*;
pub use turtle::*;
