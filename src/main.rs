use anyhow::Context;
use clap::Parser;
use lsystem_turtle::cli::CliArgs;
use lsystem_turtle::{PRESETS, RunError, generate_with_timeout, logger};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    if args.list_presets {
        for preset in PRESETS {
            println!("{:<22} {}", preset.name, preset.description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid input: {e}");
            eprintln!("error: {e}");
            return Ok(ExitCode::from(1));
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let timeout = args.timeout();
    let generation = match generate_with_timeout(config, args.derivation_limits(), timeout).await
    {
        Ok(generation) => generation,
        Err(RunError::TimedOut(budget)) => {
            eprintln!(
                "error: generation took longer than {budget:?}; reduce iterations or simplify the rules"
            );
            // The abandoned worker must not keep the process alive.
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("generation failed: {e}");
            eprintln!("error: {e}");
            return Ok(ExitCode::from(1));
        }
    };

    if generation.truncated {
        tracing::warn!(
            rounds = generation.rounds,
            "sequence hit the length bound; output is a partial derivation"
        );
    }
    if !generation.trace.is_well_formed() {
        tracing::warn!(
            unmatched_opens = generation.trace.unmatched_opens,
            unmatched_closes = generation.trace.unmatched_closes,
            "unbalanced brackets in derived sequence"
        );
    }

    let report = serde_json::to_string_pretty(&generation)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("report written to {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(ExitCode::SUCCESS)
}
