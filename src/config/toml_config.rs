use crate::domain::model::CurrencyCode;
use crate::utils::error::{FxError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://raw.github.com/currencybot/open-exchange-rates/master";
pub const DEFAULT_EXPECTED_BASE: &str = "USD";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FxConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub rates: RatesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub verify_tls: Option<bool>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    #[serde(default = "default_expected_base")]
    pub expected_base: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_expected_base() -> String {
    DEFAULT_EXPECTED_BASE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            verify_tls: None,
            user_agent: None,
        }
    }
}

impl SourceConfig {
    pub fn verify_tls(&self) -> bool {
        self.verify_tls.unwrap_or(true)
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            expected_base: default_expected_base(),
        }
    }
}

impl FxConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FxError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FX_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| FxError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn expected_base(&self) -> Result<CurrencyCode> {
        CurrencyCode::new(&self.rates.expected_base)
    }
}

impl Validate for FxConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;

        if let Some(user_agent) = &self.source.user_agent {
            validation::validate_non_empty_string("source.user_agent", user_agent)?;
        }

        validation::validate_currency_code("rates.expected_base", &self.rates.expected_base)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FxConfig::from_toml_str("").unwrap();

        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert!(config.source.verify_tls());
        assert_eq!(config.rates.expected_base, "USD");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
base_url = "https://mirror.example.com/rates"
verify_tls = false
user_agent = "fx-snapshot/0.1"

[rates]
expected_base = "usd"
"#;

        let config = FxConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.base_url, "https://mirror.example.com/rates");
        assert!(!config.source.verify_tls());
        assert_eq!(config.source.user_agent.as_deref(), Some("fx-snapshot/0.1"));
        assert_eq!(config.expected_base().unwrap().as_str(), "USD");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FX_SNAPSHOT_TEST_BASE_URL", "https://env.example.com");

        let toml_content = r#"
[source]
base_url = "${FX_SNAPSHOT_TEST_BASE_URL}"
"#;

        let config = FxConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.base_url, "https://env.example.com");

        std::env::remove_var("FX_SNAPSHOT_TEST_BASE_URL");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let toml_content = r#"
[source]
base_url = "${FX_SNAPSHOT_TEST_UNSET_VAR}"
"#;

        let config = FxConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.base_url, "${FX_SNAPSHOT_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = FxConfig::from_toml_str(
            r#"
[source]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = FxConfig::from_toml_str(
            r#"
[rates]
expected_base = "DOLLAR"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = FxConfig::from_toml_str("[source\nbase_url = 1").unwrap_err();
        assert!(matches!(err, FxError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
base_url = "https://files.example.com"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FxConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.base_url, "https://files.example.com");
    }
}
