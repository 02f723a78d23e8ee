//! Application version descriptors with lossless XML round-tripping and
//! remote update checks.
//!
//! A descriptor carries an identifier, optional descriptions, a release
//! date, ordered release notes and reference URLs, and a copyright line. It
//! converts to and from a fixed XML schema without losing information, and a
//! checker compares the running application's version against the latest
//! descriptor published at a remote location.

pub mod version;

pub use version::checker::{ApplicationVersionChecker, DEFAULT_LATEST_VERSION_NAME};
pub use version::descriptor::ApplicationVersion;
pub use version::error::{CheckerError, FetchError, VersionError};
pub use version::source::VersionSource;
pub use version::sources::HttpVersionSource;
pub use version::types::{VersionNote, VersionUrl};
