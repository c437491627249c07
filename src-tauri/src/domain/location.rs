//! Location Entity
//!
//! A free-form storage location label ("Kitchen - Fridge", ...).

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A storage location inventory units can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Location label
    pub name: String,
}

impl Location {
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for Location {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
