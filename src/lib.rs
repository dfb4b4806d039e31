pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::FxConfig;

pub use adapters::http::HttpSource;
pub use core::{endpoint::Endpoint, resolver::RateResolver, snapshot::SnapshotFetcher};
pub use domain::date::DateSpec;
pub use domain::model::{CurrencyCode, CurrencyList, ExchangeRateDocument};
pub use domain::ports::JsonSource;
pub use utils::error::{ErrorCategory, FxError, Result};
