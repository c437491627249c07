//! Metadata Kind Selector
//!
//! The metadata management view edits locations, categories, and tags
//! through one surface; this enum picks the collection.

use serde::{Deserialize, Serialize};

/// Which reference-data collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataType {
    Location,
    Category,
    Tag,
}

impl MetadataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataType::Location => "location",
            MetadataType::Category => "category",
            MetadataType::Tag => "tag",
        }
    }
}
