//! Configuration for the landing site.
//!
//! The landing bundle embeds `availio.toml` at build time; native hosts can
//! load the same file from disk. Every section is optional and falls back to
//! the production defaults.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Storage key holding the last emphasized showcase side.
pub const DEFAULT_STORAGE_KEY: &str = "landing-hover-preference";

/// Google Analytics measurement id of the production property.
pub const DEFAULT_MEASUREMENT_ID: &str = "G-NHLQBBV0K7";

/// Showcase alternation period used when none (or an unusable one) is set.
pub const DEFAULT_INTERVAL_MS: u64 = 7000;

/// Shortest accepted showcase period.
pub const MIN_INTERVAL_MS: u64 = 500;

/// Event name used for clicks without a `data-ga-event` override.
pub const DEFAULT_EVENT_NAME: &str = "button_click";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into [`AvailioConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvailioConfig {
    /// Owner/member showcase behavior
    pub showcase: ShowcaseConfig,
    /// Analytics recorder and sinks
    pub analytics: AnalyticsConfig,
    /// Newsletter and contact forms
    pub forms: FormsConfig,
    /// Console logging
    pub logging: LoggingConfig,
}

/// Showcase controller settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Key under which the emphasized side is persisted.
    pub storage_key: String,
    /// Period of the automatic alternation, in milliseconds.
    pub interval_ms: u64,
    /// Top boundary of the split (percent) before any shift.
    pub base_top: f64,
    /// Bottom boundary of the split (percent) before any shift.
    pub base_bottom: f64,
    /// Shift applied toward the emphasized side (percent).
    pub delta: f64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            base_top: 70.0,
            base_bottom: 30.0,
            delta: 30.0,
        }
    }
}

impl ShowcaseConfig {
    /// Alternation period as a [`Duration`].
    ///
    /// Periods under [`MIN_INTERVAL_MS`] fall back to the default.
    pub fn interval(&self) -> Duration {
        if self.interval_ms < MIN_INTERVAL_MS {
            tracing::warn!(
                interval_ms = self.interval_ms,
                "showcase interval below {MIN_INTERVAL_MS} ms, using {DEFAULT_INTERVAL_MS} ms"
            );
            return Duration::from_millis(DEFAULT_INTERVAL_MS);
        }
        Duration::from_millis(self.interval_ms)
    }
}

/// Analytics settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Master switch; when false the landing app installs no recorder.
    pub enabled: bool,
    /// Measurement id passed to `gtag('config', ...)`.
    pub measurement_id: String,
    /// Event name for clicks without an override attribute.
    pub default_event_name: String,
    /// Maximum label length in characters.
    pub label_max_chars: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            measurement_id: DEFAULT_MEASUREMENT_ID.to_string(),
            default_event_name: DEFAULT_EVENT_NAME.to_string(),
            label_max_chars: 100,
        }
    }
}

/// Simulated submission delays for the forms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Delay before the newsletter form reports success.
    pub newsletter_delay_ms: u64,
    /// Delay before the contact form reports success.
    pub contact_delay_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            newsletter_delay_ms: 450,
            contact_delay_ms: 1500,
        }
    }
}

/// Console logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Max level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AvailioConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a TOML document, returning defaults if it is invalid.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::load_or_default(&content),
            Err(source) => {
                let e = ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                };
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AvailioConfig::default();
        assert_eq!(config.showcase.storage_key, "landing-hover-preference");
        assert_eq!(config.showcase.interval(), Duration::from_millis(7000));
        assert_eq!(config.analytics.measurement_id, "G-NHLQBBV0K7");
        assert_eq!(config.analytics.default_event_name, "button_click");
        assert_eq!(config.analytics.label_max_chars, 100);
        assert!(config.analytics.enabled);
        assert_eq!(config.forms.newsletter_delay_ms, 450);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AvailioConfig::from_toml_str(
            r#"
[showcase]
interval_ms = 5000

[analytics]
enabled = false
"#,
        )
        .expect("parse config");

        assert_eq!(config.showcase.interval_ms, 5000);
        assert_eq!(config.showcase.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.showcase.delta, 30.0);
        assert!(!config.analytics.enabled);
        assert_eq!(config.analytics.measurement_id, DEFAULT_MEASUREMENT_ID);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert!(AvailioConfig::from_toml_str("[showcase]\ninterval_ms = \"soon\"").is_err());
        let config = AvailioConfig::load_or_default("[showcase]\ninterval_ms = \"soon\"");
        assert_eq!(config, AvailioConfig::default());
    }

    #[test]
    fn test_too_short_interval_uses_default() {
        for interval_ms in [0, 1, MIN_INTERVAL_MS - 1] {
            let config = AvailioConfig::from_toml_str(&format!("[showcase]\ninterval_ms = {interval_ms}"))
                .expect("parse config");
            assert_eq!(config.showcase.interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));
        }
        let config = AvailioConfig::from_toml_str(&format!("[showcase]\ninterval_ms = {MIN_INTERVAL_MS}"))
            .expect("parse config");
        assert_eq!(config.showcase.interval(), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = AvailioConfig::load_from_path(&temp.path().join("availio.toml"));
        assert_eq!(config, AvailioConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("availio.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[analytics]
measurement_id = "G-TEST"
label_max_chars = 40

[forms]
contact_delay_ms = 10

[logging]
level = "debug"
"#
        )
        .expect("write config");

        let config = AvailioConfig::load_from_path(&path);
        assert_eq!(config.analytics.measurement_id, "G-TEST");
        assert_eq!(config.analytics.label_max_chars, 40);
        assert_eq!(config.forms.contact_delay_ms, 10);
        assert_eq!(config.forms.newsletter_delay_ms, 450);
        assert_eq!(config.logging.level, "debug");
    }
}
