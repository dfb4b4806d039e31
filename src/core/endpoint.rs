use crate::domain::date::DateSpec;
use crate::utils::error::Result;
use url::Url;

/// URL layout of the snapshot tree:
/// `{base}/currencies.json`, `{base}/latest.json`,
/// `{base}/historical/{YYYY-MM-DD}.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn currencies(&self) -> Result<Url> {
        Ok(self.base.join("currencies.json")?)
    }

    pub fn latest(&self) -> Result<Url> {
        Ok(self.base.join("latest.json")?)
    }

    pub fn historical(&self, date: &DateSpec) -> Result<Url> {
        let canonical = date.canonical()?;
        Ok(self.base.join(&format!("historical/{}.json", canonical))?)
    }
}
