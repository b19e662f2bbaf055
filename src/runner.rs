//! Full pipeline (rules → sequence → trace) and its bounded-time invocation.
//!
//! The engine itself has no notion of time. [`generate_with_timeout`] runs it on
//! a dedicated worker thread and stops waiting once the budget is spent; the
//! worker is then abandoned and its result discarded.

use crate::config::LSystemConfig;
use crate::derivation::{DerivationConfig, DerivationEngine};
use crate::error::{LSystemError, Result};
use crate::interpreter::TurtleInterpreter;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;

/// Default wall-clock budget for [`generate_with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything produced by one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// The derived symbol sequence.
    pub sequence: String,
    /// Rewrite rounds actually applied.
    pub rounds: u64,
    /// Set when the length bound cut the derivation short.
    pub truncated: bool,
    /// The interpreted polyline.
    pub trace: Trace,
}

impl Generation {
    /// `true` if the run finished without truncation or bracket anomalies.
    pub fn is_clean(&self) -> bool {
        !self.truncated && self.trace.is_well_formed()
    }
}

/// Failure of a bounded-time run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("generation exceeded its time budget of {0:?}")]
    TimedOut(Duration),

    #[error("generation worker terminated without a result")]
    WorkerPanicked,

    #[error("failed to start generation worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Engine(#[from] LSystemError),
}

/// Derives and interprets `config` with the default length bound.
pub fn generate(config: &LSystemConfig) -> Result<Generation> {
    generate_with_limits(config, &DerivationConfig::default())
}

/// Derives and interprets `config` with an explicit derivation bound.
pub fn generate_with_limits(
    config: &LSystemConfig,
    limits: &DerivationConfig,
) -> Result<Generation> {
    let iterations = i64::try_from(config.iterations()).unwrap_or(i64::MAX);
    let derivation = DerivationEngine::new(limits.clone()).derive(
        config.axiom(),
        config.rules(),
        iterations,
    )?;
    let trace = TurtleInterpreter::new(config.turtle())?.interpret(&derivation.sequence);

    tracing::info!(
        symbols = derivation.symbol_count(),
        rounds = derivation.rounds,
        truncated = derivation.truncated,
        points = trace.len(),
        "generation complete"
    );

    Ok(Generation {
        sequence: derivation.sequence,
        rounds: derivation.rounds,
        truncated: derivation.truncated,
        trace,
    })
}

/// Runs [`generate_with_limits`] on a worker thread and waits at most `timeout`.
///
/// On expiry the caller gets [`RunError::TimedOut`] immediately; the worker is
/// left to finish on its own and its output is dropped.
pub async fn generate_with_timeout(
    config: LSystemConfig,
    limits: DerivationConfig,
    timeout: Duration,
) -> std::result::Result<Generation, RunError> {
    let (tx, rx) = oneshot::channel();

    std::thread::Builder::new()
        .name("lsystem-worker".into())
        .spawn(move || {
            // The receiver may already be gone after a timeout.
            let _ = tx.send(generate_with_limits(&config, &limits));
        })
        .map_err(RunError::Spawn)?;

    match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(result)) => Ok(result?),
        Ok(Err(_)) => Err(RunError::WorkerPanicked),
        Err(_) => {
            tracing::warn!(?timeout, "generation exceeded time budget, abandoning worker");
            Err(RunError::TimedOut(timeout))
        }
    }
}
