//! Derivation engine: iterated, context-free, parallel rewriting of a symbol sequence.
//!
//! The entry point is [`DerivationEngine`]. Configure it with a [`DerivationConfig`]
//! (or use the free [`derive`] function for the default bound) and call
//! [`DerivationEngine::derive`] with an axiom and a [`GrammarTable`].

use crate::error::InvalidDerivationInput;
use crate::grammar::GrammarTable;
use serde::{Deserialize, Serialize};

/// Default safety bound on the derived sequence length, in symbols.
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// Configuration for the derivation engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Maximum number of symbols a derived sequence may hold.
    /// A round that would exceed it is abandoned and the previous round is kept.
    pub max_length: usize,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// The result of a derivation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// The derived symbol sequence.
    pub sequence: String,
    /// Number of rewrite rounds fully applied.
    pub rounds: u64,
    /// `true` when the length bound stopped the derivation before all requested rounds ran.
    pub truncated: bool,
}

impl Derivation {
    /// Length of the sequence in symbols.
    pub fn symbol_count(&self) -> usize {
        self.sequence.chars().count()
    }
}

/// Rewrites axioms through a grammar table under a length bound.
#[derive(Clone, Debug, Default)]
pub struct DerivationEngine {
    config: DerivationConfig,
}

impl DerivationEngine {
    pub fn new(config: DerivationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// Applies `rules` to `axiom` for `iterations` rounds.
    ///
    /// Each round replaces every symbol with its production (or itself when the
    /// table has no entry), preserving order. With `iterations == 0` the axiom is
    /// returned unchanged.
    ///
    /// # Length bound
    ///
    /// A round is built incrementally and abandoned as soon as it would exceed
    /// [`DerivationConfig::max_length`]. The previous round is then returned with
    /// [`Derivation::truncated`] set. This is not an error. An axiom already
    /// longer than the bound is returned as is; it only counts as truncated when
    /// the rules would actually change it.
    ///
    /// # Errors
    ///
    /// [`InvalidDerivationInput::EmptyAxiom`] for an empty axiom and
    /// [`InvalidDerivationInput::NegativeIterations`] for `iterations < 0`.
    pub fn derive(
        &self,
        axiom: &str,
        rules: &GrammarTable,
        iterations: i64,
    ) -> Result<Derivation, InvalidDerivationInput> {
        if axiom.is_empty() {
            return Err(InvalidDerivationInput::EmptyAxiom);
        }
        if iterations < 0 {
            return Err(InvalidDerivationInput::NegativeIterations(iterations));
        }

        let mut current = axiom.to_string();
        let mut rounds = 0u64;

        for round in 1..=iterations {
            match rewrite(&current, rules, self.config.max_length) {
                Some((next, symbols)) => {
                    tracing::debug!(round, symbols, "derivation round complete");
                    if next == current {
                        // Fixed point: every remaining round yields the same sequence.
                        rounds = iterations as u64;
                        break;
                    }
                    current = next;
                    rounds += 1;
                }
                None if is_fixed_point(&current, rules) => {
                    // Nothing would change, so the bound cut nothing.
                    rounds = iterations as u64;
                    break;
                }
                None => {
                    tracing::warn!(
                        round,
                        max_length = self.config.max_length,
                        "derivation truncated: sequence would exceed length bound"
                    );
                    return Ok(Derivation {
                        sequence: current,
                        rounds,
                        truncated: true,
                    });
                }
            }
        }

        Ok(Derivation {
            sequence: current,
            rounds,
            truncated: false,
        })
    }
}

/// Runs one rewrite round. Returns `None` once the output passes `max_length` symbols.
fn rewrite(current: &str, rules: &GrammarTable, max_length: usize) -> Option<(String, usize)> {
    let mut next = String::with_capacity(current.len().min(max_length));
    let mut symbols = 0usize;

    for c in current.chars() {
        match rules.production(c) {
            Some(prod) => {
                symbols += prod.symbol_count();
                if symbols > max_length {
                    return None;
                }
                next.push_str(prod.as_str());
            }
            None => {
                symbols += 1;
                if symbols > max_length {
                    return None;
                }
                next.push(c);
            }
        }
    }

    Some((next, symbols))
}

/// `true` when rewriting `current` reproduces it unchanged.
fn is_fixed_point(current: &str, rules: &GrammarTable) -> bool {
    current.chars().all(|c| {
        rules
            .production(c)
            .is_none_or(|prod| prod.symbol_count() == 1 && prod.as_str().starts_with(c))
    })
}

/// Derives `axiom` through `rules` with the default length bound.
///
/// See [`DerivationEngine::derive`].
pub fn derive(
    axiom: &str,
    rules: &GrammarTable,
    iterations: i64,
) -> Result<Derivation, InvalidDerivationInput> {
    DerivationEngine::default().derive(axiom, rules, iterations)
}
