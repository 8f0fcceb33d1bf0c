use crate::endpoint::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use crate::types::ChartDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User configuration, stored as config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rapidapi: RapidApiConfig,
    #[serde(default)]
    pub defaults: ChartDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RapidApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Base URL to send requests to, falling back to the public host
    pub fn base_url(&self) -> &str {
        self.rapidapi.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Parse config.toml from a file path
pub fn parse_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse config.toml from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;

    if let Some(base_url) = &config.rapidapi.base_url {
        validate_base_url(base_url)?;
    }
    validate_defaults(&config.defaults)?;

    Ok(config)
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        return Err(Error::ConfigParse(format!(
            "rapidapi.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }
    Ok(())
}

/// Reject default times that can never be a clock reading.
///
/// Request fields themselves are forwarded unchecked; only the configured
/// defaults are held to this.
fn validate_defaults(defaults: &ChartDefaults) -> Result<()> {
    if defaults.hour > 23 {
        return Err(Error::ConfigParse(format!(
            "defaults.hour must be 0-23, got {}",
            defaults.hour
        )));
    }
    if defaults.minute > 59 {
        return Err(Error::ConfigParse(format!(
            "defaults.minute must be 0-59, got {}",
            defaults.minute
        )));
    }
    if defaults.tz.trim().is_empty() {
        return Err(Error::ConfigParse("defaults.tz must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Language, Theme};

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.defaults.hour, 12);
        assert_eq!(config.defaults.tz, "UTC");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
[rapidapi]
api_key = "test-key"
base_url = "http://localhost:9000"

[defaults]
hour = 6
minute = 15
tz = "Europe/Paris"
lang = "FR"
theme = "dark-high-contrast"
        "##;

        let config = parse_config_str(toml).unwrap();
        assert_eq!(config.rapidapi.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.defaults.hour, 6);
        assert_eq!(config.defaults.minute, 15);
        assert_eq!(config.defaults.lang, Language::Fr);
        assert_eq!(config.defaults.theme, Theme::DarkHighContrast);
    }

    #[test]
    fn test_parse_partial_defaults() {
        let toml = r##"
[defaults]
theme = "light"
        "##;

        let config = parse_config_str(toml).unwrap();
        assert_eq!(config.defaults.theme, Theme::Light);
        assert_eq!(config.defaults.lang, Language::En);
        assert_eq!(config.defaults.minute, 0);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let toml = r##"
[rapidapi]
base_url = "ftp://example.com"
        "##;

        let result = parse_config_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("rapidapi.base_url"));
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        let result = parse_config_str("[defaults]\nhour = 24\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("defaults.hour"));
    }

    #[test]
    fn test_rejects_unknown_theme() {
        let result = parse_config_str("[defaults]\ntheme = \"sepia\"\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_key() {
        let config = Config {
            rapidapi: RapidApiConfig {
                api_key: Some("secret".to_string()),
                base_url: None,
            },
            defaults: ChartDefaults::default(),
        };
        let text = config.to_toml_string().unwrap();
        assert!(!text.contains("base_url"));
        assert_eq!(parse_config_str(&text).unwrap(), config);
    }
}
