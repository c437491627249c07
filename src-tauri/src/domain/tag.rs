//! Tag Entity
//!
//! Tags can be attached to products for categorization and filtering.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A user-defined label with a display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Tag name
    pub name: String,
    /// Display color (hex, e.g., "#FF5733")
    pub color: String,
}

impl Tag {
    pub fn new(id: u32, name: String, color: String) -> Self {
        Self { id, name, color }
    }
}

impl Entity for Tag {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
