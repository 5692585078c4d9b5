use std::time::Duration;

use anyhow::{ensure, Context};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Body, Client,
};

pub mod chat_completion;
pub mod list_models;

pub static DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Handle to an OpenAI-compatible backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let mut authorization =
            HeaderValue::from_str(format!("Bearer {}", api_key).as_str())
                .context("api key is not a valid header value")?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn post<R: Into<Body>>(
        &self,
        request: R,
        path: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .body(request)
            .send()
            .await
            .with_context(|| format!("failed to send request to {}", path))?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }

    async fn get(&self, path: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .send()
            .await
            .with_context(|| format!("failed to send request to {}", path))?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}
