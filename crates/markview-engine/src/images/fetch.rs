use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};

use super::ImageError;

/// Transport for remote images. The resolver only sees this trait, so
/// tests can count or script fetches without a network.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Bytes, ImageError>;
}

/// HTTP(S) fetcher backed by `reqwest`. No timeout is applied.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, ImageError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ImageError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, ImageError> {
        log::debug!("Fetching image {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ImageError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|source| ImageError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
