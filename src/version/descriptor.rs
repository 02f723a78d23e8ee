//! The application version descriptor

use chrono::NaiveDateTime;

use crate::version::error::{VersionError, check_non_empty};
use crate::version::types::{VersionNote, VersionUrl};
use crate::version::xml;

/// A single application version: identifier, descriptions, release date,
/// release notes, reference URLs and copyright.
///
/// The identifier is normalized at construction: carriage returns, line feeds
/// and spaces are stripped, so `" 1. 1 .0"` becomes `"1.1.0"`.
///
/// `notes` and `urls` are tri-state: `None` means the collection was never
/// supplied (and is omitted from the XML form entirely), `Some(vec![])` means
/// it is present but empty (serialized as an empty wrapper element), and a
/// populated vector keeps its insertion order.
#[derive(Debug, Clone)]
pub struct ApplicationVersion {
    id: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    /// Release date; `None` means no date was supplied.
    pub date: Option<NaiveDateTime>,
    pub notes: Option<Vec<VersionNote>>,
    pub urls: Option<Vec<VersionUrl>>,
    pub copyright: Option<String>,
}

impl ApplicationVersion {
    /// Creates a descriptor carrying only an identifier.
    pub fn new(id: &str) -> Result<Self, VersionError> {
        Self::with_details(id, None, None, None, None, None, None)
    }

    /// Creates a descriptor with all fields. Collection arguments are moved
    /// in, so later changes to the caller's data cannot reach the descriptor.
    pub fn with_details(
        id: &str,
        short_description: Option<&str>,
        long_description: Option<&str>,
        date: Option<NaiveDateTime>,
        notes: Option<Vec<VersionNote>>,
        urls: Option<Vec<VersionUrl>>,
        copyright: Option<&str>,
    ) -> Result<Self, VersionError> {
        check_non_empty(id, "id")?;

        Ok(Self {
            id: normalize_id(id),
            short_description: short_description.map(str::to_string),
            long_description: long_description.map(str::to_string),
            date,
            notes,
            urls,
            copyright: copyright.map(str::to_string),
        })
    }

    /// The normalized version identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the identifier, applying the same validation and
    /// normalization as construction.
    pub fn set_id(&mut self, id: &str) -> Result<(), VersionError> {
        check_non_empty(id, "id")?;
        self.id = normalize_id(id);
        Ok(())
    }

    /// Renders the descriptor as canonical XML text.
    pub fn to_xml(&self) -> String {
        xml::to_xml(self)
    }

    /// Decodes a descriptor from XML text.
    ///
    /// Returns `Ok(None)` when the document is well-formed but carries no
    /// `Version` root or no `Id` child.
    pub fn from_xml(text: &str) -> Result<Option<Self>, VersionError> {
        xml::from_xml(text)
    }
}

/// Descriptor equality is identifier equality. Descriptions, dates, notes,
/// urls and copyright do not participate.
impl PartialEq for ApplicationVersion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ApplicationVersion {}

fn normalize_id(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, '\r' | '\n' | ' '))
        .collect()
}
