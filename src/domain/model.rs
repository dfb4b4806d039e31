use crate::utils::error::{FxError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Three-letter currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FxError::InvalidCurrencyCode {
                code: code.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn usd() -> Self {
        Self(String::from("USD"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `latest.json` or `historical/<date>.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Unix seconds, UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub base: String,
    pub rates: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExchangeRateDocument {
    pub fn rate(&self, currency: &CurrencyCode) -> Result<f64> {
        self.rates
            .get(currency.as_str())
            .copied()
            .ok_or_else(|| FxError::CurrencyNotFound {
                currency: currency.to_string(),
            })
    }

    pub fn ensure_base(&self, expected: &CurrencyCode) -> Result<()> {
        if self.base != expected.as_str() {
            return Err(FxError::UnexpectedBaseCurrency {
                expected: expected.to_string(),
                actual: self.base.clone(),
            });
        }
        Ok(())
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    /// Copy with the base currency listed in `rates` at 1.0.
    pub fn cleaned(&self) -> Self {
        let mut doc = self.clone();
        doc.rates.insert(doc.base.clone(), 1.0);
        doc
    }
}

/// `currencies.json`: code to display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyList(pub BTreeMap<String, String>);

impl CurrencyList {
    pub fn name_of(&self, code: &CurrencyCode) -> Option<&str> {
        self.0.get(code.as_str()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
