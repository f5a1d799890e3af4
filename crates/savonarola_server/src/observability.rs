//! Tracing initialization for the demo gateway.

use savonarola_error::{ServerError, ServerErrorKind};
use tracing_subscriber::{
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set. With `json_logs`
/// the output is JSON-formatted for production log shippers; otherwise a
/// human-readable format with source locations.
pub fn init_tracing(log_level: &str, json_logs: bool) -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Configuration(format!(
                "Invalid log filter '{}': {}",
                log_level, e
            )))
        })?;

    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
