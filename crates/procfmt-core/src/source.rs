//! # Source: Data Provenance
//!
//! A `Source` names the agency, author, and kind of process that produced a
//! pick, a location request, or a location result. It is the one value
//! entity shared by both the location and travel-time crates.
//!
//! The `Type` field is stored as its raw wire string so that an unknown
//! value decodes successfully and is reported by validation instead of
//! failing the whole document. [`Source::kind`] gives the typed view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::Entity;
use crate::error::UnknownVariant;
use crate::validation::{Defects, Validate};

/// The closed set of source kinds.
///
/// | Variant | Meaning |
/// |---------|---------|
/// | Unknown | provenance not recorded |
/// | LocalHuman | analyst at the producing center |
/// | LocalAutomatic | automatic system at the producing center |
/// | ContributedHuman | analyst at a contributing network |
/// | ContributedAutomatic | automatic system at a contributing network |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// Provenance not recorded.
    Unknown,
    /// Reviewed by an analyst at the producing center.
    LocalHuman,
    /// Produced automatically at the producing center.
    LocalAutomatic,
    /// Reviewed by an analyst at a contributing network.
    ContributedHuman,
    /// Produced automatically at a contributing network.
    ContributedAutomatic,
}

impl SourceType {
    /// Every source type, in wire order.
    pub fn all() -> &'static [SourceType] {
        &[
            Self::Unknown,
            Self::LocalHuman,
            Self::LocalAutomatic,
            Self::ContributedHuman,
            Self::ContributedAutomatic,
        ]
    }

    /// Wire string for this source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::LocalHuman => "LocalHuman",
            Self::LocalAutomatic => "LocalAutomatic",
            Self::ContributedHuman => "ContributedHuman",
            Self::ContributedAutomatic => "ContributedAutomatic",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = UnknownVariant;

    /// Case-sensitive; accepts exactly the strings of [`SourceType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unknown" => Ok(Self::Unknown),
            "LocalHuman" => Ok(Self::LocalHuman),
            "LocalAutomatic" => Ok(Self::LocalAutomatic),
            "ContributedHuman" => Ok(Self::ContributedHuman),
            "ContributedAutomatic" => Ok(Self::ContributedAutomatic),
            other => Err(UnknownVariant {
                kind: "source type",
                value: other.to_string(),
            }),
        }
    }
}

/// Agency, author, and kind of the process that produced a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Producing agency code (`US`).
    #[serde(rename = "AgencyID", skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    /// Author within the agency.
    #[serde(rename = "Author", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Raw source type string; see [`SourceType`].
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

impl Source {
    /// Fully-populated source.
    pub fn new(agency_id: impl Into<String>, author: impl Into<String>, kind: SourceType) -> Self {
        Self {
            agency_id: Some(agency_id.into()),
            author: Some(author.into()),
            source_type: Some(kind.as_str().to_string()),
        }
    }

    /// Typed source type, or `None` when absent or unrecognized.
    pub fn kind(&self) -> Option<SourceType> {
        self.source_type.as_deref().and_then(|s| s.parse().ok())
    }
}

impl Validate for Source {
    const CLASS: &'static str = "Source";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("AgencyID", &self.agency_id);
        defects.require_text("Author", &self.author);
        defects.require_variant::<SourceType>("Type", &self.source_type);
    }
}

impl Entity for Source {}
