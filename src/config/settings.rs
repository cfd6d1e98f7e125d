use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::domain::ports::{ConfigProvider, ReadFailurePolicy};
use crate::utils::error::{Result, StudioError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const ENV_API_URL: &str = "NAILD_API_URL";
pub const ENV_TIMEOUT: &str = "NAILD_API_TIMEOUT_SECS";
pub const ENV_READ_FAILURE: &str = "NAILD_ON_READ_FAILURE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub content: ContentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    #[serde(default)]
    pub on_read_failure: ReadFailurePolicy,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl StudioSettings {
    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML, expanding `${VAR}` references from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| StudioError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unknown variables are left as-is so the URL check reports them.
    fn substitute_env_vars(content: &str) -> String {
        static VAR_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

pub fn parse_policy(field: &str, raw: &str) -> Result<ReadFailurePolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fallback" => Ok(ReadFailurePolicy::Fallback),
        "error" => Ok(ReadFailurePolicy::Error),
        _ => Err(StudioError::InvalidConfigValue {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected `fallback` or `error`".to_string(),
        }),
    }
}

impl Validate for StudioSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_positive_number("api.timeout_seconds", self.api.timeout_seconds, 1)?;
        Ok(())
    }
}

impl ConfigProvider for StudioSettings {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    fn read_failure_policy(&self) -> ReadFailurePolicy {
        self.content.on_read_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = StudioSettings::from_toml_str("").unwrap();
        assert_eq!(settings, StudioSettings::default());
        assert_eq!(settings.api_base_url(), "http://localhost:8000/api");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.read_failure_policy(), ReadFailurePolicy::Fallback);
    }

    #[test]
    fn parses_all_sections() {
        let settings = StudioSettings::from_toml_str(
            r#"
[api]
base_url = "https://api.example.com/api"
timeout_seconds = 5

[content]
on_read_failure = "error"
"#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://api.example.com/api");
        assert_eq!(settings.api.timeout_seconds, 5);
        assert_eq!(settings.content.on_read_failure, ReadFailurePolicy::Error);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn substitutes_environment_variables() {
        env::set_var("NAILD_SETTINGS_TEST_HOST", "studio.example.com");
        let settings = StudioSettings::from_toml_str(
            r#"
[api]
base_url = "https://${NAILD_SETTINGS_TEST_HOST}/api"
"#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://studio.example.com/api");
    }

    #[test]
    fn unresolved_variable_fails_validation() {
        let settings = StudioSettings::from_toml_str(
            r#"
[api]
base_url = "${NAILD_SETTINGS_TEST_MISSING}"
"#,
        )
        .unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut settings = StudioSettings::default();
        settings.api.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(parse_policy("x", "Fallback").unwrap(), ReadFailurePolicy::Fallback);
        assert_eq!(parse_policy("x", "error").unwrap(), ReadFailurePolicy::Error);
        assert!(parse_policy("x", "ignore").is_err());
    }
}
