// crates/cli/src/logging.rs
use crate::args::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-q` / `-v` flags to a maximum diagnostic level.
#[must_use]
pub const fn log_level(args: &Args) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, takes precedence over
/// the verbosity flags. Records from the engine's `log` calls are bridged in.
///
/// Stdout carries the frequency table, so diagnostics never go there.
pub fn init(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(args).as_str().to_ascii_lowercase()));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
