use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the command-line binary.
///
/// `RUST_LOG` wins when set. Output goes to stderr so that stdout stays
/// machine-readable.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "lsystem_turtle=debug,info"
    } else {
        "lsystem_turtle=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
