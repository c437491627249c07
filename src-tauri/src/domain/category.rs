//! Category Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Top-level product classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Category name
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for Category {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
