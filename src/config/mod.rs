use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::EmailValidatorError;
use crate::logging::{is_valid_level, LoggingConfig};
use crate::report::ReportFormat;

/// Longest trimmed input that could ever pass: 64 (local) + 1 ("@") + 255 (domain)
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 320;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub validator: ValidatorConfig,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Trimmed inputs longer than this are rejected before pattern matching
    pub max_input_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub default_format: ReportFormat,
    pub include_valid: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: ReportFormat::Text,
            include_valid: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults
    pub async fn load() -> Result<Self> {
        let config_path = get_config_path();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path).await?
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        };

        ConfigOverrides::apply(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from specific file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| EmailValidatorError::InvalidConfig {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;

        info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Write configuration as TOML
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, self.to_toml()?).await?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.validator.max_input_length == 0 {
            return Err(anyhow::anyhow!("Validator max_input_length must be > 0"));
        }

        if !is_valid_level(&self.logging.level) {
            return Err(anyhow::anyhow!("Invalid logging level: {}", self.logging.level));
        }

        if self.logging.max_files == 0 {
            return Err(anyhow::anyhow!("Logging max_files must be > 0"));
        }

        Ok(())
    }

    /// Settings that are accepted but probably unintended.
    ///
    /// Returned rather than logged so callers can report them once logging is up.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.validator.max_input_length < DEFAULT_MAX_INPUT_LENGTH {
            warnings.push(format!(
                "Validator max_input_length {} is below {}; some valid addresses will be rejected",
                self.validator.max_input_length, DEFAULT_MAX_INPUT_LENGTH
            ));
        }

        warnings
    }
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "email-validator", "email-validator")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("config.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    pub const MAX_INPUT_LENGTH: &'static str = "EMAIL_VALIDATOR_MAX_INPUT_LENGTH";
    pub const LOG_LEVEL: &'static str = "EMAIL_VALIDATOR_LOG_LEVEL";
    pub const REPORT_FORMAT: &'static str = "EMAIL_VALIDATOR_REPORT_FORMAT";

    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut AppConfig) -> Result<()> {
        Self::apply_from(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_from<F>(config: &mut AppConfig, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(Self::MAX_INPUT_LENGTH) {
            config.validator.max_input_length = value.parse::<usize>().map_err(|_| {
                EmailValidatorError::config(format!(
                    "{} is not a number: {}",
                    Self::MAX_INPUT_LENGTH,
                    value
                ))
            })?;
        }

        if let Some(level) = lookup(Self::LOG_LEVEL) {
            config.logging.level = level;
        }

        if let Some(format) = lookup(Self::REPORT_FORMAT) {
            config.report.default_format = format.parse()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validator.max_input_length, 320);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.validator.max_input_length = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.max_files = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_levels() {
        for level in ["verbose", "loud", "email_validator=chatty", ""] {
            let mut config = AppConfig::default();
            config.logging.level = level.to_string();
            assert!(config.validate().is_err(), "accepted level {level:?}");
        }

        for level in ["warn", "DEBUG", "info,email_validator=trace", "off"] {
            let mut config = AppConfig::default();
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "rejected level {level:?}");
        }
    }

    #[test]
    fn test_low_input_cap_is_a_warning() {
        let mut config = AppConfig::default();
        assert!(config.warnings().is_empty());

        config.validator.max_input_length = 100;
        assert!(config.validate().is_ok());
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("below 320"));
    }

    #[test]
    fn test_unknown_report_format_in_toml() {
        let result: Result<AppConfig, _> = toml::from_str("[report]\ndefault_format = \"xml\"\n");
        assert!(result.is_err());

        let config: AppConfig = toml::from_str("[report]\ndefault_format = \"csv\"\n").unwrap();
        assert_eq!(config.report.default_format, ReportFormat::Csv);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ConfigOverrides::MAX_INPUT_LENGTH, "500"),
            (ConfigOverrides::LOG_LEVEL, "debug"),
            (ConfigOverrides::REPORT_FORMAT, "json"),
        ]);

        let mut config = AppConfig::default();
        ConfigOverrides::apply_from(&mut config, |key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.validator.max_input_length, 500);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.report.default_format, ReportFormat::Json);
    }

    #[test]
    fn test_override_rejects_garbage() {
        let mut config = AppConfig::default();
        let result = ConfigOverrides::apply_from(&mut config, |key| {
            (key == ConfigOverrides::MAX_INPUT_LENGTH).then(|| "lots".to_string())
        });
        assert!(result.is_err());
        assert_eq!(config.validator.max_input_length, 320);

        let result = ConfigOverrides::apply_from(&mut config, |key| {
            (key == ConfigOverrides::REPORT_FORMAT).then(|| "xlsx".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[validator]\nmax_input_length = 1000\n").unwrap();
        assert_eq!(config.validator.max_input_length, 1000);
        assert_eq!(config.report.default_format, ReportFormat::Text);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.report.default_format = ReportFormat::Csv;
        config.report.include_valid = false;
        config.save_to_file(&path).await.unwrap();

        let loaded = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(loaded.report.default_format, ReportFormat::Csv);
        assert!(!loaded.report.include_valid);
    }

    #[tokio::test]
    async fn test_load_reports_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[validator\n").await.unwrap();

        let err = AppConfig::load_from_file(&path).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmailValidatorError>(),
            Some(EmailValidatorError::InvalidConfig { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[validator]\nmax_input_length = 0\n").await.unwrap();
        assert!(AppConfig::load_from_file(&path).await.is_err());
    }
}
