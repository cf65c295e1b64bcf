use super::RecordSource;
use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};

/// Reads the record list with a single plain `GET`.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("adt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {e}"))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_records(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "fetching records");
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| eyre!("Request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(eyre!("HTTP {status}"));
        }

        resp.text()
            .await
            .map_err(|e| eyre!("Failed to read response body: {e}"))
    }
}
