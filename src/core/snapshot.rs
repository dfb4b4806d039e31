use crate::config::FxConfig;
use crate::core::endpoint::Endpoint;
use crate::domain::date::DateSpec;
use crate::domain::model::{CurrencyList, ExchangeRateDocument};
use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use url::Url;

/// Fetches whole documents from the snapshot tree.
pub struct SnapshotFetcher<S: JsonSource> {
    source: S,
    endpoint: Endpoint,
}

impl<S: JsonSource> SnapshotFetcher<S> {
    pub fn new(source: S, endpoint: Endpoint) -> Self {
        Self { source, endpoint }
    }

    pub fn from_config(source: S, config: &FxConfig) -> Result<Self> {
        Ok(Self::new(source, Endpoint::new(&config.source.base_url)?))
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn currencies(&self) -> Result<CurrencyList> {
        let url = self.endpoint.currencies()?;
        self.get_json(url).await
    }

    pub async fn latest(&self) -> Result<ExchangeRateDocument> {
        let url = self.endpoint.latest()?;
        self.get_json(url).await
    }

    /// Rates for one calendar date. The date is validated before any request
    /// is made.
    pub async fn historical(&self, date: impl Into<DateSpec>) -> Result<ExchangeRateDocument> {
        let date = date.into();
        let url = self.endpoint.historical(&date)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.source.fetch(&url).await?;
        tracing::debug!("Decoding {} bytes from {}", body.len(), url);
        Ok(serde_json::from_str(&body)?)
    }
}
