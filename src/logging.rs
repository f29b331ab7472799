use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level used for a given debug setting.
///
/// Quiet by default so only diagnostics reach the terminal.
pub fn level_for(debug_mode: bool) -> &'static str {
    if debug_mode { "debug" } else { "warn" }
}

/// Setup logging to stderr.
///
/// Stdout carries the report, so log lines always go to stderr. The filter is
/// fixed by `debug_mode` and does not read `RUST_LOG`.
///
/// # Arguments
/// * `debug_mode` - If true, use debug level; otherwise use warn level
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn setup_logging(debug_mode: bool) -> Result<()> {
    let env_filter = EnvFilter::new(level_for(debug_mode));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Logging initialized: debug={}", debug_mode);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), "debug");
        assert_eq!(level_for(false), "warn");
    }

    #[test]
    fn test_setup_logging_twice_errors() {
        // The first call may already lose to another test in this process;
        // either way the second one cannot succeed.
        let _ = setup_logging(false);
        assert!(setup_logging(true).is_err());
    }
}
