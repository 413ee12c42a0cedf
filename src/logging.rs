//! Logger setup for the `gradientkit` binary.
//!
//! The library emits through the `log` facade only. Embedding applications
//! keep whatever logger they install; [`init_logging`] never replaces it.

/// Filter and styling for the stderr logger.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"debug"` or `"gradientkit=trace"`.
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// Directives in effect: the explicit filter, then `RUST_LOG`, then `info`.
    pub fn directives(&self) -> String {
        self.filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "info".to_string())
    }
}

/// Install an `env_logger` backend.
///
/// Returns `false` when a global logger was already set; the existing one is
/// left untouched.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let directives = config.directives();
    let installed = env_logger::Builder::new()
        .parse_filters(&directives)
        .write_style(config.write_style)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logger installed with filter {:?}", directives);
    } else {
        log::debug!("global logger already set, keeping it");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig { filter: Some("gradientkit=trace".into()), ..Default::default() };
        assert_eq!(config.directives(), "gradientkit=trace");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        let config = LoggingConfig { filter: Some("warn".into()), ..Default::default() };
        let first = init_logging(&config);
        let second = init_logging(&config);
        assert!(!second);
        // another test may have installed a logger first
        let _ = first;
    }
}
