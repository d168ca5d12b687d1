use crate::domain::ports::PageSource;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the bulletin page over plain HTTP(S). One GET, no retries.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// `None` leaves the request without a deadline.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Requesting observatory page: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Observatory response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // decodes using the charset of the Content-Type header, UTF-8 otherwise
        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
