use crate::config::FxConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fx-snapshot")]
#[command(about = "Fetch exchange rates from the open-exchange-rates snapshot tree")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override source.base_url")]
    pub base_url: Option<String>,

    #[arg(long, help = "Disable TLS certificate verification")]
    pub insecure: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the list of known currencies
    Currencies,
    /// Print the most recent rates document
    Latest {
        #[arg(long, help = "List the base currency in rates at 1.0")]
        clean: bool,
    },
    /// Print the rates document for a date (YYYY-MM-DD or YYMMDD)
    Historical {
        date: String,
        #[arg(long, help = "List the base currency in rates at 1.0")]
        clean: bool,
    },
    /// Print one currency's rate against the base currency
    Rate {
        currency: String,
        #[arg(long, help = "YYYY-MM-DD or YYMMDD; latest when omitted")]
        date: Option<String>,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<FxConfig> {
        let mut config = match &self.config {
            Some(path) => FxConfig::from_file(path)?,
            None => FxConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if self.insecure {
            config.source.verify_tls = Some(false);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_rate_command() {
        let cli = CliConfig::parse_from(["fx-snapshot", "rate", "EUR", "--date", "120101"]);
        match cli.command {
            Command::Rate { currency, date } => {
                assert_eq!(currency, "EUR");
                assert_eq!(date.as_deref(), Some("120101"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nbase_url = \"https://file.example.com\"\nverify_tls = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "fx-snapshot",
            "--config",
            &path,
            "--base-url",
            "https://flag.example.com",
            "--insecure",
            "latest",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.source.base_url, "https://flag.example.com");
        assert!(!config.source.verify_tls());
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cli = CliConfig::parse_from(["fx-snapshot", "currencies"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.source.base_url, crate::config::DEFAULT_BASE_URL);
    }
}
