//! Dictionary Indexing
//!
//! Turns a list of records into an id -> record map for O(1) lookup when
//! rendering related entities (a product's category name next to an
//! inventory row, tag colors, ...).

use std::collections::HashMap;
use super::entity::Entity;

/// Index records by id; the last record wins on a duplicate id.
///
/// Unsaved records (id 0) all land on key 0 and overwrite each other.
/// Callers are expected to pass saved records only.
pub fn to_dictionary<T>(records: Vec<T>) -> HashMap<u32, T>
where
    T: Entity<Id = u32>,
{
    let mut dict = HashMap::with_capacity(records.len());
    for record in records {
        dict.insert(record.id(), record);
    }
    dict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_indexes_by_id() {
        let dict = to_dictionary(vec![
            Category::new(1, "A".to_string()),
            Category::new(2, "B".to_string()),
        ]);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict[&1].name, "A");
        assert_eq!(dict[&2].name, "B");
    }

    #[test]
    fn test_unsaved_records_collapse_to_zero() {
        let dict = to_dictionary(vec![
            Category::new(0, "A".to_string()),
            Category::new(0, "B".to_string()),
        ]);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict[&0].name, "B");
    }

    #[test]
    fn test_later_record_wins_on_duplicate_id() {
        let dict = to_dictionary(vec![
            Category::new(1, "old".to_string()),
            Category::new(1, "new".to_string()),
        ]);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict[&1].name, "new");
    }
}
