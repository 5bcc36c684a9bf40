//! Logging setup and the user-facing error line.

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `error: <message>` on a single line, with the cause chain joined by `: `.
pub fn error_line(err: &anyhow::Error) -> String {
    let message = format!("{err:#}");
    format!("error: {}", message.replace(['\r', '\n'], " "))
}
