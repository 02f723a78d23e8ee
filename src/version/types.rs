//! Value objects attached to a version descriptor

use crate::version::error::{VersionError, check_non_empty};

/// A titled release note entry
///
/// Both fields are required to be non-empty, checked at construction and on
/// every setter call. Equality and hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNote {
    title: String,
    content: String,
}

impl VersionNote {
    pub fn new(title: &str, content: &str) -> Result<Self, VersionError> {
        check_non_empty(title, "title")?;
        check_non_empty(content, "content")?;

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), VersionError> {
        check_non_empty(title, "title")?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn set_content(&mut self, content: &str) -> Result<(), VersionError> {
        check_non_empty(content, "content")?;
        self.content = content.to_string();
        Ok(())
    }
}

/// A titled reference URL entry
///
/// Same validation and equality contract as [`VersionNote`], over
/// (title, url).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionUrl {
    title: String,
    url: String,
}

impl VersionUrl {
    pub fn new(title: &str, url: &str) -> Result<Self, VersionError> {
        check_non_empty(title, "title")?;
        check_non_empty(url, "url")?;

        Ok(Self {
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), VersionError> {
        check_non_empty(title, "title")?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), VersionError> {
        check_non_empty(url, "url")?;
        self.url = url.to_string();
        Ok(())
    }
}
