//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV: &str = "PYNJECTOR_LOG";

/// The filter directive used when [`LOG_ENV`] is unset.
pub fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "pynjector=debug",
        (false, _) => "pynjector=trace",
    }
}

/// Install a stderr `fmt` subscriber for the given verbosity.
///
/// Calling this twice is harmless: the second installation is ignored.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2)
                .without_time()
                .compact(),
        )
        .try_init();
}
