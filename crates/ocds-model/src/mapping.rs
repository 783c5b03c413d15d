//! Mapping table records linking the three CSV column vocabularies.

use serde::{Deserialize, Serialize};

use crate::ReleaseType;

/// One row of the declarative mapping table.
///
/// Ties together a Contracts Finder daily export column path, the
/// friendly spreadsheet header publishers see, and the canonical
/// slash-delimited release path the open-data output uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Column path in the raw Contracts Finder daily export, when the
    /// field appears there at all (e.g. `releases/0/buyer/name`).
    pub raw_source_path: Option<String>,
    /// Human-friendly template header (e.g. "Buyer Name").
    pub friendly_title: String,
    /// Canonical release path (e.g. `parties/0/name`).
    pub canonical_path: String,
    /// Release type this entry applies to; `None` applies to all types.
    pub release_type: Option<ReleaseType>,
}

impl MappingEntry {
    /// Whether this entry is in scope for the given release type.
    #[must_use]
    pub fn applies_to(&self, release_type: ReleaseType) -> bool {
        self.release_type.is_none() || self.release_type == Some(release_type)
    }
}
