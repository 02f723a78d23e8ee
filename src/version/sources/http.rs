//! HTTP source implementation

use tracing::warn;

use crate::version::error::FetchError;
use crate::version::source::VersionSource;

/// Fetches version descriptor files over HTTP(S)
pub struct HttpVersionSource {
    client: reqwest::Client,
}

impl HttpVersionSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("version-checker")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpVersionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let response = self.client.get(path).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            warn!("versions location returned status {}: {}", status, path);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_returns_response_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions/latestversion.xml")
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body("<Version><Id>1.1.0.0</Id></Version>")
            .create_async()
            .await;

        let source = HttpVersionSource::new();
        let path = format!("{}/versions/latestversion.xml", server.url());
        let body = source.fetch(&path).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "<Version><Id>1.1.0.0</Id></Version>");
    }

    #[tokio::test]
    async fn fetch_returns_not_found_for_missing_descriptor() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions/nosuchversion.xml")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpVersionSource::new();
        let path = format!("{}/versions/nosuchversion.xml", server.url());
        let result = source.fetch(&path).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions/latestversion.xml")
            .with_status(500)
            .create_async()
            .await;

        let source = HttpVersionSource::new();
        let path = format!("{}/versions/latestversion.xml", server.url());
        let result = source.fetch(&path).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }
}
