//! Logging initialization.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber from `RUST_LOG`, defaulting to warnings.
///
/// Logs go to stderr; stdout is reserved for transcoded output.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
