use anyhow::{bail, Context, Result};
use gloo::net::http::Request;
use shared::DatasetPayload;

/// Client for the static dataset document
#[derive(Clone, Debug, PartialEq)]
pub struct DataClient {
    data_url: String,
}

impl DataClient {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Fetch and parse the dataset. Called once at startup, never retried.
    pub async fn fetch_dataset(&self) -> Result<DatasetPayload> {
        let response = Request::get(&self.data_url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.data_url))?;

        if !response.ok() {
            bail!(
                "{} answered {} {}",
                self.data_url,
                response.status(),
                response.status_text()
            );
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("could not read body of {}", self.data_url))?;

        DatasetPayload::from_json(&body).with_context(|| format!("{} is not a dataset", self.data_url))
    }
}
