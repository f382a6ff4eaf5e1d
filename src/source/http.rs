//! HTTP chunk source.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{ChunkSource, chunk_file_name, parse_chunk};
use crate::error::{AppError, Result};
use crate::models::Record;

/// Fetches chunks relative to a base URL.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a source rooted at `base_url`.
    ///
    /// A missing trailing slash is added so chunk names join as children
    /// of the base path instead of replacing its last segment.
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    /// Full URL of the chunk at `index`.
    pub fn chunk_url(&self, index: usize) -> Result<Url> {
        Ok(self.base_url.join(&chunk_file_name(index))?)
    }
}

#[async_trait]
impl ChunkSource for HttpSource {
    async fn fetch_chunk(&self, index: usize) -> Result<Vec<Record>> {
        let url = self.chunk_url(index)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::chunk(index, format!("{url}: {e}")))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::chunk(index, format!("{url}: {e}")))?;

        parse_chunk(index, &bytes)
    }

    fn location(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_url_with_trailing_slash() {
        let source =
            HttpSource::new(Client::new(), "https://cdn.example.com/repo@main/data/").unwrap();
        assert_eq!(
            source.chunk_url(0).unwrap().as_str(),
            "https://cdn.example.com/repo@main/data/chunk_000.json"
        );
    }

    #[test]
    fn test_chunk_url_without_trailing_slash() {
        let source = HttpSource::new(Client::new(), "https://cdn.example.com/data").unwrap();
        assert_eq!(
            source.chunk_url(12).unwrap().as_str(),
            "https://cdn.example.com/data/chunk_012.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpSource::new(Client::new(), "no scheme here").is_err());
    }
}
