//! Logging initialization
//!
//! The crate logs through the `log` facade. `init_logger` installs a
//! `tracing-subscriber` formatter as the global collector and bridges `log`
//! records into it, so dependencies that use `tracing` (sqlx, reqwest) end up
//! in the same stream.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins, otherwise `default_level` for this crate
/// and warnings for the noisier dependencies
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("{},teloxide=warn,sqlx=warn,hyper=warn", default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Initialize console logger
///
/// # Arguments
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "info", "debug")
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - A global logger was already installed
pub fn init_logger(default_level: &str) -> Result<()> {
    tracing_log::LogTracer::init().map_err(|e| anyhow::anyhow!("Failed to bridge log records: {}", e))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_level() {
        let filter = build_filter("debug");
        let rendered = filter.to_string();
        assert!(rendered.contains("debug") || std::env::var("RUST_LOG").is_ok());
    }

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        let filter = build_filter("definitely=not=a=level");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_init_logger_twice_fails() {
        // Whichever call runs first installs the global `log` bridge, so a
        // second call fails in any test order.
        let _ = init_logger("info");
        assert!(init_logger("info").is_err());
    }
}
