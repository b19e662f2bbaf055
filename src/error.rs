//! Error taxonomy for grammar parsing, derivation and interpretation.
//!
//! Hard errors abort the operation that raised them. Soft conditions (length
//! truncation, unbalanced brackets) are not errors at all; they travel as
//! metadata on [`Derivation`](crate::Derivation) and [`Trace`](crate::Trace).

use thiserror::Error;

/// The specific way a rule line is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxFault {
    /// The line has no `->` separator.
    MissingSeparator,
    /// The line has more than one `->` separator.
    RepeatedSeparator,
    /// The key is empty after trimming.
    EmptyKey,
    /// The key is longer than a single symbol.
    MultiSymbolKey,
    /// The key or replacement contains the `#` comment marker.
    CommentMarker,
    /// The replacement spans more than one line.
    LineBreak,
}

impl std::fmt::Display for SyntaxFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::MissingSeparator => "missing `->` separator",
            Self::RepeatedSeparator => "more than one `->` separator",
            Self::EmptyKey => "empty symbol before `->`",
            Self::MultiSymbolKey => "key must be a single symbol",
            Self::CommentMarker => "`#` is reserved for comments",
            Self::LineBreak => "rule must fit on one line",
        };
        f.write_str(msg)
    }
}

/// A malformed rule line. Always carries the 1-based line number and the offending text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("rule line {line}: {fault}: `{text}`")]
pub struct GrammarSyntaxError {
    pub line: usize,
    pub text: String,
    pub fault: SyntaxFault,
}

/// Rejected derivation input. Raised before any rewriting happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidDerivationInput {
    #[error("axiom must not be empty")]
    EmptyAxiom,

    #[error("iteration count must not be negative (got {0})")]
    NegativeIterations(i64),
}

/// Rejected geometric parameters. Raised before any interpretation happens.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidGeometryInput {
    #[error("segment length must be a finite positive number (got {0})")]
    InvalidSegmentLength(f64),

    #[error("{field} must be finite (got {value})")]
    NonFiniteAngle { field: &'static str, value: f64 },
}

/// Crate-level error covering every hard failure.
#[derive(Debug, Error)]
pub enum LSystemError {
    #[error("grammar syntax error: {0}")]
    Grammar(#[from] GrammarSyntaxError),

    #[error("invalid derivation input: {0}")]
    Derivation(#[from] InvalidDerivationInput),

    #[error("invalid geometry input: {0}")]
    Geometry(#[from] InvalidGeometryInput),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LSystemError>;
