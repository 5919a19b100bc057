//! Network seam for the generation client.

use async_trait::async_trait;
use reqwest::Client;

/// Status line and content type of a generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Value of the `content-type` header, if present
    pub content_type: Option<String>,
}

/// Abstract transport used by the generation client.
///
/// Implementations issue the GET request and report only what the client
/// needs to classify the outcome. Raw transport errors stay behind this seam;
/// the client normalizes them into its own error taxonomy.
#[async_trait]
pub trait ImageTransport: Send + Sync {
    /// Issues the request and reports status plus content type.
    async fn fetch(&self, url: &str) -> anyhow::Result<TransportReply>;

    /// Fetches the full response body (download flow).
    async fn fetch_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// [`ImageTransport`] implementation over a shared reqwest client.
///
/// No explicit timeout is configured beyond the transport defaults.
#[derive(Clone, Default)]
pub struct HttpImageTransport {
    client: Client,
}

impl HttpImageTransport {
    /// Creates a transport with a fresh reqwest client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ImageTransport for HttpImageTransport {
    async fn fetch(&self, url: &str) -> anyhow::Result<TransportReply> {
        let response = self.client.get(url).send().await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(TransportReply {
            status: response.status().as_u16(),
            content_type,
        })
    }

    async fn fetch_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
