//! Tracing setup shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. `fallback` adds per-crate
/// directives, e.g. `"tower_http=debug"`.
pub fn init(config: &LoggingConfig, fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = if fallback.is_empty() {
            format!("paradox={}", config.level)
        } else {
            format!("paradox={},{}", config.level, fallback)
        };
        EnvFilter::new(directives)
    });

    let registry = tracing_subscriber::registry().with(filter);

    // stderr keeps stdout clean for command output
    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
