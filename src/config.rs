//! Validated L-System configuration and its TOML representation.

use crate::error::{InvalidDerivationInput, LSystemError, Result};
use crate::grammar::GrammarTable;
use crate::interpreter::TurtleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete, validated description of one L-System run.
///
/// Construction goes through [`LSystemConfig::new`] (or deserialization, which
/// calls it), so an instance always has a non-empty axiom, a finite positive
/// segment length and finite angles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct LSystemConfig {
    axiom: String,
    iterations: u64,
    segment_length: f64,
    initial_heading: f64,
    angle_increment: f64,
    // Tables serialize after plain values in TOML.
    rules: GrammarTable,
}

/// Unvalidated mirror of [`LSystemConfig`] used as the deserialization target.
#[derive(Deserialize)]
struct RawConfig {
    axiom: String,
    #[serde(default)]
    rules: GrammarTable,
    iterations: i64,
    segment_length: f64,
    #[serde(default)]
    initial_heading: f64,
    angle_increment: f64,
}

impl TryFrom<RawConfig> for LSystemConfig {
    type Error = LSystemError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(
            raw.axiom,
            raw.rules,
            raw.iterations,
            raw.segment_length,
            raw.initial_heading,
            raw.angle_increment,
        )
    }
}

impl LSystemConfig {
    /// Validates and bundles the parameters of a run.
    ///
    /// # Errors
    ///
    /// [`LSystemError::Derivation`] for an empty axiom or a negative iteration
    /// count, [`LSystemError::Geometry`] for a bad segment length or a
    /// non-finite angle.
    pub fn new(
        axiom: impl Into<String>,
        rules: GrammarTable,
        iterations: i64,
        segment_length: f64,
        initial_heading: f64,
        angle_increment: f64,
    ) -> Result<Self> {
        let axiom = axiom.into();
        if axiom.is_empty() {
            return Err(InvalidDerivationInput::EmptyAxiom.into());
        }
        let iterations = u64::try_from(iterations)
            .map_err(|_| InvalidDerivationInput::NegativeIterations(iterations))?;

        let turtle = TurtleConfig {
            segment_length,
            initial_heading,
            angle_increment,
        };
        turtle.validate()?;

        Ok(Self {
            axiom,
            rules,
            iterations,
            segment_length,
            initial_heading,
            angle_increment,
        })
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &GrammarTable {
        &self.rules
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    pub fn initial_heading(&self) -> f64 {
        self.initial_heading
    }

    pub fn angle_increment(&self) -> f64 {
        self.angle_increment
    }

    /// The geometric part of the configuration.
    pub fn turtle(&self) -> TurtleConfig {
        TurtleConfig {
            segment_length: self.segment_length,
            initial_heading: self.initial_heading,
            angle_increment: self.angle_increment,
        }
    }

    /// Returns an editable copy of the parameters, for overriding individual fields.
    pub fn to_builder(&self) -> LSystemConfigBuilder {
        LSystemConfigBuilder {
            axiom: self.axiom.clone(),
            rules: self.rules.clone(),
            iterations: i64::try_from(self.iterations).unwrap_or(i64::MAX),
            segment_length: self.segment_length,
            initial_heading: self.initial_heading,
            angle_increment: self.angle_increment,
        }
    }
}

/// Unvalidated parameters, revalidated by [`LSystemConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct LSystemConfigBuilder {
    pub axiom: String,
    pub rules: GrammarTable,
    pub iterations: i64,
    pub segment_length: f64,
    pub initial_heading: f64,
    pub angle_increment: f64,
}

impl LSystemConfigBuilder {
    pub fn build(self) -> Result<LSystemConfig> {
        LSystemConfig::new(
            self.axiom,
            self.rules,
            self.iterations,
            self.segment_length,
            self.initial_heading,
            self.angle_increment,
        )
    }
}
