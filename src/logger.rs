use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TourConfig;
use crate::error::ConfigError;

/// Install a compact stderr subscriber at the configured level.
/// Stdout stays reserved for tour output. The filter comes from the config
/// only; the environment is not consulted.
///
/// Returns `Ok(false)` when a global subscriber was already installed; the
/// existing one stays in place.
pub fn init_logger(config: &TourConfig) -> Result<bool, ConfigError> {
    let level = config.level_filter()?;
    let filter = EnvFilter::new(level.to_string());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok();

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        let config = TourConfig::default();
        assert!(init_logger(&config).is_ok());
        assert_eq!(init_logger(&config), Ok(false));
    }

    #[test]
    fn invalid_level_is_reported() {
        let config = TourConfig {
            log_level: "chatty".into(),
            ..TourConfig::default()
        };
        assert!(init_logger(&config).is_err());
    }
}
