//! Logging setup
//!
//! Diagnostics go to stderr only and never change the exit status.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: quiet on success, one line per failure
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the global tracing subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `warn`)
/// - `HAVEPOLL_LOG_FORMAT`: `json` for structured output, anything else for compact text
///
/// # Example
///
/// ```text
/// RUST_LOG=debug HAVEPOLL_LOG_FORMAT=json ./have-poll; echo $?
/// ```
pub fn init_logging() -> Result<()> {
    let log_format = std::env::var("HAVEPOLL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
