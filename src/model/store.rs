//! Record store - the ordered roster and its one editable field

use super::record::{FieldUpdate, Record, RecordId};
use anyhow::{bail, Result};
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered collection of records with unique identifiers
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Build a store, rejecting lists that repeat an identifier
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(&record.id) {
                bail!("Duplicate record id '{}' in roster", record.id);
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Move the record at `from` so it ends up at `to` in the post-removal sequence
    ///
    /// `to` is clamped into the valid range. An out-of-range `from` or
    /// `from == to` leaves the order untouched.
    pub fn move_record(&mut self, from: usize, to: usize) {
        if from >= self.records.len() {
            debug!("Ignoring move from out-of-range index {}", from);
            return;
        }
        let to = to.min(self.records.len() - 1);
        if from == to {
            return;
        }

        let record = self.records.remove(from);
        info!("Moved record {} from {} to {}", record.id, from, to);
        self.records.insert(to, record);
    }

    /// Replace the editable field of the record with `id`
    ///
    /// Returns `true` if a record matched. Unknown ids are ignored.
    pub fn update_field(&mut self, id: &RecordId, update: FieldUpdate) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                record.apply(update);
                info!("Updated record {}: {:?}", id, update);
                true
            }
            None => {
                debug!("Ignoring update for unknown record {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::record::Gender;

    pub(crate) fn record(id: &str) -> Record {
        Record {
            id: RecordId::new(id),
            name: format!("Student {}", id),
            age: 20,
            mobile: "000-000-0000".to_string(),
            gender: Gender::Male,
            details: format!("Details for {}", id),
        }
    }

    pub(crate) fn store_of(ids: &[&str]) -> RecordStore {
        RecordStore::new(ids.iter().map(|id| record(id)).collect()).unwrap()
    }

    fn ids(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward() {
        let mut store = store_of(&["A", "B", "C", "D", "E"]);
        store.move_record(0, 3);
        assert_eq!(ids(&store), vec!["B", "C", "D", "A", "E"]);
    }

    #[test]
    fn test_move_backward() {
        let mut store = store_of(&["A", "B", "C", "D", "E"]);
        store.move_record(4, 1);
        assert_eq!(ids(&store), vec!["A", "E", "B", "C", "D"]);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let mut store = store_of(&["A", "B", "C"]);
        for i in 0..3 {
            store.move_record(i, i);
            assert_eq!(ids(&store), vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_move_clamps_target() {
        let mut store = store_of(&["A", "B", "C"]);
        store.move_record(0, 99);
        assert_eq!(ids(&store), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_from_out_of_range_is_noop() {
        let mut store = store_of(&["A", "B", "C"]);
        store.move_record(3, 0);
        assert_eq!(ids(&store), vec!["A", "B", "C"]);

        let mut empty = RecordStore::default();
        empty.move_record(0, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_move_and_move_back_restores_order() {
        let mut store = store_of(&["A", "B", "C", "D", "E"]);
        store.move_record(1, 3);
        assert_eq!(ids(&store), vec!["A", "C", "D", "B", "E"]);
        store.move_record(3, 1);
        assert_eq!(ids(&store), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_every_move_preserves_ids() {
        let original = ["A", "B", "C", "D", "E"];
        for from in 0..original.len() {
            for to in 0..original.len() + 2 {
                let mut store = store_of(&original);
                store.move_record(from, to);

                assert_eq!(store.len(), original.len());
                let mut after = ids(&store);
                after.sort();
                assert_eq!(after, original.to_vec());

                // Non-moved records keep their relative order
                let moved = original[from];
                let others: Vec<&str> =
                    ids(&store).into_iter().filter(|id| *id != moved).collect();
                let expected: Vec<&str> =
                    original.iter().copied().filter(|id| *id != moved).collect();
                assert_eq!(others, expected);
            }
        }
    }

    #[test]
    fn test_update_field_changes_only_target() {
        let mut store = store_of(&["rec-1", "rec-2", "rec-3"]);
        let before = store.records().to_vec();

        assert!(store.update_field(&RecordId::new("rec-2"), FieldUpdate::Gender(Gender::Female)));

        assert_eq!(store.get(1).unwrap().gender, Gender::Female);
        assert_eq!(store.position_of(&RecordId::new("rec-2")), Some(1));
        assert_eq!(store.get(0), before.first());
        assert_eq!(store.get(2), before.get(2));

        let mut expected = before[1].clone();
        expected.gender = Gender::Female;
        assert_eq!(store.get(1), Some(&expected));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = store_of(&["rec-1", "rec-2"]);
        let before = store.records().to_vec();
        assert!(!store.update_field(&RecordId::new("rec-9"), FieldUpdate::Gender(Gender::Female)));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = RecordStore::new(vec![record("A"), record("B"), record("A")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("'A'"));
    }
}
