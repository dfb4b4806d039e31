#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::{
    FxConfig, RatesConfig, SourceConfig, DEFAULT_BASE_URL, DEFAULT_EXPECTED_BASE,
};
