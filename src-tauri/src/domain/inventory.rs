//! Inventory Entity
//!
//! A physical unit/batch of a product tracked for expiration. Carries the
//! catalog fields alongside the unit-specific ones so a row is
//! self-contained; `location_id` is an advisory reference like the rest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Ordering for the inventory list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Soonest expiration first
    #[default]
    Date,
    /// Case-insensitive by name
    Name,
    /// Grouped by location, then expiration
    Location,
}

/// A tracked inventory unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Unique identifier (0 = not yet saved)
    #[serde(default)]
    pub id: u32,
    /// Product name
    pub name: String,
    /// Referenced Category id
    pub category_id: Option<u32>,
    /// Referenced Tag ids
    #[serde(default)]
    pub tag_ids: Vec<u32>,
    /// Date the unit was purchased
    pub purchase_date: Option<NaiveDate>,
    /// Date the unit expires
    pub expiration_date: Option<NaiveDate>,
    /// Date the unit was opened
    pub opened_date: Option<NaiveDate>,
    /// Units in this batch
    pub quantity: u32,
    /// Referenced Location id
    pub location_id: Option<u32>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Inventory {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            category_id: None,
            tag_ids: Vec::new(),
            purchase_date: None,
            expiration_date: None,
            opened_date: None,
            quantity: 1,
            location_id: None,
            notes: String::new(),
        }
    }
}

impl Entity for Inventory {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Render-time augmentation of an inventory unit, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryView {
    #[serde(flatten)]
    pub inventory: Inventory,
    /// Signed day offset from today to the expiration date
    pub expire_days: Option<i64>,
}

impl InventoryView {
    /// Compute the view fields for `inventory` as of `today`
    pub fn compute(inventory: Inventory, today: NaiveDate) -> Self {
        let expire_days = inventory
            .expiration_date
            .map(|expiration| expiration.signed_duration_since(today).num_days());
        Self { inventory, expire_days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expire_days_future() {
        let mut inv = Inventory::new(1, "Milk".to_string());
        inv.expiration_date = Some(date(2026, 8, 17));

        let view = InventoryView::compute(inv, date(2026, 8, 7));
        assert_eq!(view.expire_days, Some(10));
    }

    #[test]
    fn test_expire_days_past_is_negative() {
        let mut inv = Inventory::new(1, "Yogurt".to_string());
        inv.expiration_date = Some(date(2026, 8, 1));

        let view = InventoryView::compute(inv, date(2026, 8, 7));
        assert_eq!(view.expire_days, Some(-6));
    }

    #[test]
    fn test_expire_days_absent_without_expiration() {
        let inv = Inventory::new(1, "Rice".to_string());
        let view = InventoryView::compute(inv, date(2026, 8, 7));
        assert_eq!(view.expire_days, None);
    }
}
