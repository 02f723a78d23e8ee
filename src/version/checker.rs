//! Update checks against a remote versions location

use tracing::debug;

use crate::version::descriptor::ApplicationVersion;
use crate::version::error::{CheckerError, VersionError, check_non_empty};
use crate::version::source::VersionSource;

/// Default name (without the `.xml` extension) of the latest-version
/// descriptor file at a versions location
pub const DEFAULT_LATEST_VERSION_NAME: &str = "latestversion";

/// Checks an application's current version against descriptors published at
/// a remote versions location.
///
/// Fetching is delegated to an injected [`VersionSource`]; each check
/// re-fetches, there is no caching across calls. A single checker instance
/// assumes sequential use.
pub struct ApplicationVersionChecker<S> {
    source: S,
    versions_location: String,
    current_version: ApplicationVersion,
    latest_version_name: String,
    latest_version: Option<ApplicationVersion>,
}

impl<S: VersionSource> ApplicationVersionChecker<S> {
    pub fn new(
        source: S,
        versions_location: &str,
        current_version: ApplicationVersion,
    ) -> Result<Self, VersionError> {
        check_non_empty(versions_location, "versions_location")?;

        Ok(Self {
            source,
            versions_location: versions_location.to_string(),
            current_version,
            latest_version_name: DEFAULT_LATEST_VERSION_NAME.to_string(),
            latest_version: None,
        })
    }

    pub fn versions_location(&self) -> &str {
        &self.versions_location
    }

    pub fn current_version(&self) -> &ApplicationVersion {
        &self.current_version
    }

    /// The descriptor fetched by the most recent [`is_up_to_date`] call.
    ///
    /// [`is_up_to_date`]: Self::is_up_to_date
    pub fn latest_version(&self) -> Option<&ApplicationVersion> {
        self.latest_version.as_ref()
    }

    pub fn latest_version_name(&self) -> &str {
        &self.latest_version_name
    }

    pub fn set_latest_version_name(&mut self, name: &str) -> Result<(), VersionError> {
        check_non_empty(name, "latest_version_name")?;
        self.latest_version_name = name.to_string();
        Ok(())
    }

    pub fn reset_latest_version_name(&mut self) {
        self.latest_version_name = DEFAULT_LATEST_VERSION_NAME.to_string();
    }

    /// Fetches and decodes the descriptor named `version_id`.
    ///
    /// Fetch and decode failures propagate unchanged; a well-formed document
    /// that is not a version descriptor surfaces as `Ok(None)`.
    pub async fn get_version(
        &self,
        version_id: &str,
    ) -> Result<Option<ApplicationVersion>, CheckerError> {
        check_non_empty(version_id, "version_id")?;

        let path = format!("{}/{}.xml", self.versions_location, version_id);
        debug!("fetching version descriptor from {}", path);

        let xml = self.source.fetch(&path).await?;
        Ok(ApplicationVersion::from_xml(&xml)?)
    }

    /// Fetches the descriptor named by the current latest-version name.
    pub async fn get_latest_version(&self) -> Result<Option<ApplicationVersion>, CheckerError> {
        self.get_version(&self.latest_version_name).await
    }

    /// Re-fetches the latest descriptor, stores it, and reports whether its
    /// identifier matches the current version's.
    pub async fn is_up_to_date(&mut self) -> Result<bool, CheckerError> {
        let latest = self.get_latest_version().await?;
        let up_to_date = latest
            .as_ref()
            .is_some_and(|version| *version == self.current_version);
        self.latest_version = latest;
        Ok(up_to_date)
    }
}
