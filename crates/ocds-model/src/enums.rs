use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseReleaseTypeError;

/// Classification of a procurement disclosure record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Tender,
    Award,
    Spend,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 3] = [Self::Tender, Self::Award, Self::Spend];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tender => "tender",
            Self::Award => "award",
            Self::Spend => "spend",
        }
    }

    /// The release tag value carried by converted tables of this type.
    ///
    /// Spend records describe payments against a live contract, so they
    /// carry the `implementation` tag rather than a `spend` tag (which
    /// does not exist in the releaseTag codelist).
    #[must_use]
    pub fn release_tag(&self) -> &'static str {
        match self {
            Self::Tender => "tender",
            Self::Award => "award",
            Self::Spend => "implementation",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = ParseReleaseTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "tender" => Ok(Self::Tender),
            "award" => Ok(Self::Award),
            "spend" => Ok(Self::Spend),
            _ => Err(ParseReleaseTypeError(raw.to_string())),
        }
    }
}
