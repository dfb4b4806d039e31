use crate::config::SourceConfig;
use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use reqwest::Client;
use url::Url;

/// reqwest-backed [`JsonSource`]. Owns one pooled client that is reused
/// across calls; clone it to share the pool.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if !config.verify_tls() {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps a client the caller already configured.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl JsonSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        tracing::debug!("Response status: {}", response.status());
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}
