//! Barcode Entity
//!
//! Maps a scanned code to a Product. The product link is required;
//! several barcodes may point at the same product.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A scanned code bound to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barcode {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Scanned code as read from the scanner
    pub code: String,
    /// Referenced Product id
    pub product_id: u32,
}

impl Barcode {
    pub fn new(id: u32, code: String, product_id: u32) -> Self {
        Self { id, code, product_id }
    }
}

impl Entity for Barcode {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
