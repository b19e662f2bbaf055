//! Built-in catalog of classic L-Systems.
//!
//! Presets are plain data. They become configs through [`LSystemConfig::new`]
//! like any user input. All presets follow the interpreter's convention:
//! `+` turns clockwise, `-` turns counter-clockwise.

use crate::config::LSystemConfig;
use crate::error::{LSystemError, Result};
use crate::grammar::GrammarTable;

/// A named, complete L-System description.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    pub iterations: i64,
    pub segment_length: f64,
    pub initial_heading: f64,
    pub angle_increment: f64,
}

impl Preset {
    /// Builds the validated configuration for this preset.
    pub fn config(&self) -> Result<LSystemConfig> {
        LSystemConfig::new(
            self.axiom,
            GrammarTable::from_pairs(self.rules.iter().copied())?,
            self.iterations,
            self.segment_length,
            self.initial_heading,
            self.angle_increment,
        )
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "koch_curve",
        description: "Quadratic Koch curve",
        axiom: "F",
        rules: &[('F', "F+F-F-F+F")],
        iterations: 3,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 90.0,
    },
    Preset {
        name: "koch_snowflake",
        description: "Koch snowflake built on a triangle",
        axiom: "F++F++F",
        rules: &[('F', "F-F++F-F")],
        iterations: 4,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 60.0,
    },
    Preset {
        name: "sierpinski_triangle",
        description: "Sierpinski triangle from two drawing symbols",
        axiom: "F-G-G",
        rules: &[('F', "F-G+F+G-F"), ('G', "GG")],
        iterations: 5,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 120.0,
    },
    Preset {
        name: "sierpinski_arrowhead",
        description: "Sierpinski arrowhead curve",
        axiom: "R",
        rules: &[('R', "L-R-L"), ('L', "R+L+R")],
        iterations: 6,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 60.0,
    },
    Preset {
        name: "dragon_curve",
        description: "Heighway dragon",
        axiom: "FX",
        rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
        iterations: 10,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 90.0,
    },
    Preset {
        name: "levy_c_curve",
        description: "Levy C curve",
        axiom: "F",
        rules: &[('F', "+F--F+")],
        iterations: 10,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 45.0,
    },
    Preset {
        name: "hilbert_curve",
        description: "Space-filling Hilbert curve",
        axiom: "A",
        rules: &[('A', "+BF-AFA-FB+"), ('B', "-AF+BFB-AF+")],
        iterations: 5,
        segment_length: 1.0,
        initial_heading: 0.0,
        angle_increment: 90.0,
    },
    Preset {
        name: "fractal_plant",
        description: "Branching plant using the push/pop stack",
        axiom: "X",
        rules: &[('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")],
        iterations: 5,
        segment_length: 1.0,
        initial_heading: 90.0,
        angle_increment: 25.0,
    },
];

/// Names of all built-in presets, in catalog order.
pub fn list_presets() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Looks up a preset by name.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Returns the validated configuration of the named preset.
///
/// # Errors
///
/// [`LSystemError::UnknownPreset`] if no preset has that name.
pub fn preset_config(name: &str) -> Result<LSystemConfig> {
    find_preset(name)
        .ok_or_else(|| LSystemError::UnknownPreset(name.to_string()))?
        .config()
}
