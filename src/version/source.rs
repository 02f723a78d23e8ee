//! Fetch capability for retrieving version descriptor files

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching raw version descriptor text from a versions location
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the resource at `path` and returns its text content
    ///
    /// # Arguments
    /// * `path` - Full path of the descriptor file (e.g., "https://example.com/versions/latestversion.xml")
    ///
    /// # Returns
    /// * `Ok(String)` - Raw text of the descriptor file
    /// * `Err(FetchError)` - If the resource is missing or the fetch fails
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}
