//! Product Entity
//!
//! A catalog entry. References a Category and zero-or-more Tags by id;
//! the references are advisory and never validated by the store.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Product name
    pub name: String,
    /// Referenced Category id, if classified
    pub category_id: Option<u32>,
    /// Referenced Tag ids (duplicates are not rejected)
    #[serde(default)]
    pub tag_ids: Vec<u32>,
}

impl Product {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }
}

impl Entity for Product {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product = Product::new(0, "Milk".to_string());
        assert_eq!(product.id(), 0);
        assert!(product.category_id.is_none());
        assert!(product.tag_ids.is_empty());
    }
}
