use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions onto a default filter directive.
///
/// 0 → `warn`, 1 → `info`, 2 → `debug`, 3+ → `trace`.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Subsequent calls
/// are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    // Already installed (tests, embedding) - keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
