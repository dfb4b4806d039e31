use crate::config::FxConfig;
use crate::core::endpoint::Endpoint;
use crate::domain::date::DateSpec;
use crate::domain::model::{CurrencyCode, ExchangeRateDocument};
use crate::domain::ports::JsonSource;
use crate::utils::error::Result;

/// Looks up a single currency's rate against the expected base currency.
pub struct RateResolver<S: JsonSource> {
    source: S,
    endpoint: Endpoint,
    expected_base: CurrencyCode,
}

impl<S: JsonSource> RateResolver<S> {
    /// Resolver expecting USD-based documents.
    pub fn new(source: S, endpoint: Endpoint) -> Self {
        Self {
            source,
            endpoint,
            expected_base: CurrencyCode::usd(),
        }
    }

    pub fn from_config(source: S, config: &FxConfig) -> Result<Self> {
        let endpoint = Endpoint::new(&config.source.base_url)?;
        Ok(Self::new(source, endpoint).with_expected_base(config.expected_base()?))
    }

    pub fn with_expected_base(mut self, expected_base: CurrencyCode) -> Self {
        self.expected_base = expected_base;
        self
    }

    pub fn expected_base(&self) -> &CurrencyCode {
        &self.expected_base
    }

    /// Rate of `currency` on `date`, or in the latest document when `date`
    /// is `None`. Six-digit text dates are read as `YYMMDD` in 2000-2099.
    pub async fn rate(&self, currency: &str, date: Option<DateSpec>) -> Result<f64> {
        let currency = CurrencyCode::new(currency)?;

        let url = match &date {
            None => self.endpoint.latest()?,
            Some(date) => self.endpoint.historical(date)?,
        };

        let body = self.source.fetch(&url).await?;
        let document: ExchangeRateDocument = serde_json::from_str(&body)?;

        if let Err(e) = document.ensure_base(&self.expected_base) {
            tracing::warn!("Rejecting {}: {}", url, e);
            return Err(e);
        }

        document.rate(&currency).inspect_err(|e| {
            tracing::warn!("{} has no {} rate: {}", url, currency, e);
        })
    }

    pub async fn latest_rate(&self, currency: &str) -> Result<f64> {
        self.rate(currency, None).await
    }

    pub async fn rate_on(&self, currency: &str, date: impl Into<DateSpec>) -> Result<f64> {
        self.rate(currency, Some(date.into())).await
    }
}
