//! Command-line argument model and its resolution into an [`LSystemConfig`].

use crate::config::{LSystemConfig, LSystemConfigBuilder};
use crate::derivation::{DEFAULT_MAX_LENGTH, DerivationConfig};
use crate::error::Result;
use crate::grammar::{GrammarTable, parse_rules};
use crate::presets::preset_config;
use crate::runner::DEFAULT_TIMEOUT;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "lsystem-turtle")]
#[command(about = "Derive an L-System and trace it into a 2D polyline")]
pub struct CliArgs {
    /// Start from a built-in preset
    #[arg(short, long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Start from a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Axiom (initial symbol sequence)
    #[arg(short, long)]
    pub axiom: Option<String>,

    /// File with one `symbol -> replacement` rule per line
    #[arg(short, long, conflicts_with = "rule")]
    pub rules: Option<PathBuf>,

    /// Inline rule, e.g. `--rule "F -> F+F"` (repeatable)
    #[arg(long)]
    pub rule: Vec<String>,

    /// Number of rewrite rounds
    #[arg(short, long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Length of one drawn segment
    #[arg(long, allow_negative_numbers = true)]
    pub segment_length: Option<f64>,

    /// Initial heading in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub initial_heading: Option<f64>,

    /// Angle increment for `+` and `-`, in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Maximum derived sequence length, in symbols
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Wall-clock budget for the whole run, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs_f64())]
    pub timeout_secs: f64,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the preset catalog and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Builds the run configuration: preset or config file (or an empty base),
    /// then individual flag overrides, then validation.
    pub fn resolve(&self) -> Result<LSystemConfig> {
        let mut builder = if let Some(name) = &self.preset {
            preset_config(name)?.to_builder()
        } else if let Some(path) = &self.config {
            LSystemConfig::from_toml_file(path)?.to_builder()
        } else {
            LSystemConfigBuilder {
                axiom: String::new(),
                rules: GrammarTable::new(),
                iterations: 1,
                segment_length: 1.0,
                initial_heading: 0.0,
                angle_increment: 90.0,
            }
        };

        if let Some(axiom) = &self.axiom {
            builder.axiom = axiom.clone();
        }
        if let Some(path) = &self.rules {
            builder.rules = parse_rules(&std::fs::read_to_string(path)?)?;
        } else if !self.rule.is_empty() {
            builder.rules = parse_rules(&self.rule.join("\n"))?;
        }
        if let Some(iterations) = self.iterations {
            builder.iterations = iterations;
        }
        if let Some(len) = self.segment_length {
            builder.segment_length = len;
        }
        if let Some(heading) = self.initial_heading {
            builder.initial_heading = heading;
        }
        if let Some(angle) = self.angle {
            builder.angle_increment = angle;
        }

        builder.build()
    }

    pub fn derivation_limits(&self) -> DerivationConfig {
        DerivationConfig {
            max_length: self.max_length,
        }
    }

    /// The time budget; non-finite or negative values fall back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidDerivationInput, LSystemError};

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["lsystem-turtle"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_preset_with_override() {
        let args = parse(&["--preset", "koch_curve", "--iterations", "2", "--angle", "60"]);
        let config = args.resolve().unwrap();
        assert_eq!(config.axiom(), "F");
        assert_eq!(config.iterations(), 2);
        assert_eq!(config.angle_increment(), 60.0);
        assert_eq!(config.rules().get('F'), Some("F+F-F-F+F"));
    }

    #[test]
    fn test_inline_rules() {
        let args = parse(&["--axiom", "F", "--rule", "F -> F+F", "--rule", "G -> GG"]);
        let config = args.resolve().unwrap();
        assert_eq!(config.rules().len(), 2);
        assert_eq!(config.rules().get('G'), Some("GG"));
        assert_eq!(config.iterations(), 1);
    }

    #[test]
    fn test_missing_axiom_is_rejected() {
        let args = parse(&["--rule", "F -> FF"]);
        assert!(matches!(
            args.resolve(),
            Err(LSystemError::Derivation(InvalidDerivationInput::EmptyAxiom))
        ));
    }

    #[test]
    fn test_negative_iterations_are_rejected() {
        let args = parse(&["--axiom", "F", "--iterations", "-3"]);
        assert!(matches!(
            args.resolve(),
            Err(LSystemError::Derivation(
                InvalidDerivationInput::NegativeIterations(-3)
            ))
        ));
    }

    #[test]
    fn test_unknown_preset() {
        let args = parse(&["--preset", "nope"]);
        assert!(matches!(args.resolve(), Err(LSystemError::UnknownPreset(_))));
    }

    #[test]
    fn test_preset_conflicts_with_config() {
        let argv = ["lsystem-turtle", "--preset", "koch_curve", "--config", "x.toml"];
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_timeout_fallback() {
        let mut args = parse(&["--axiom", "F"]);
        assert_eq!(args.timeout(), DEFAULT_TIMEOUT);
        args.timeout_secs = -1.0;
        assert_eq!(args.timeout(), DEFAULT_TIMEOUT);
        args.timeout_secs = 0.5;
        assert_eq!(args.timeout(), Duration::from_millis(500));
    }
}
