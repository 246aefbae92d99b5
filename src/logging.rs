//! Diagnostic logging to stderr. The run report itself goes to stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,cdn_migrate=info";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `warn,cdn_migrate=info`. Calling it twice is harmless.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }
}
