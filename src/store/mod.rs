use indexmap::IndexMap;

use crate::models::InventoryItem;

/// In-memory inventory keyed by item id.
///
/// `IndexMap` gives O(1) lookup while iterating in insertion order, so
/// `list()` always returns items in the order they were seeded.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: IndexMap<i64, InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id. A replaced item keeps its original position.
    pub fn insert(&mut self, item: InventoryItem) {
        self.items.insert(item.id, item);
    }

    pub fn list(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    pub fn find(&self, id: i64) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    /// Callers mutate `quantity`/`reserved` through the returned reference.
    pub fn find_mut(&mut self, id: i64) -> Option<&mut InventoryItem> {
        self.items.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.list().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn total_reserved(&self) -> u64 {
        self.list().map(|i| u64::from(i.reserved)).sum()
    }
}

impl FromIterator<InventoryItem> for InventoryStore {
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        let mut store = Self::new();
        for item in iter {
            store.insert(item);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InventoryStore {
        [
            InventoryItem::new(7, "Zinc Plate", 5, 0),
            InventoryItem::new(2, "Alpha Sheet", 10, 1),
            InventoryItem::new(4, "Mid Roll", 20, 2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn new_store_is_empty() {
        assert_eq!(InventoryStore::new().len(), 0);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let ids: Vec<i64> = store().list().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 2, 4]);
    }

    #[test]
    fn list_order_is_stable_after_mutation() {
        let mut s = store();
        s.find_mut(2).unwrap().quantity = 0;
        let ids: Vec<i64> = s.list().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 2, 4]);
    }

    #[test]
    fn find_hit_and_miss() {
        let s = store();
        assert_eq!(s.find(4).map(|i| i.name.as_str()), Some("Mid Roll"));
        assert!(s.find(99).is_none());
    }

    #[test]
    fn find_mut_writes_through() {
        let mut s = store();
        let item = s.find_mut(7).unwrap();
        item.quantity -= 2;
        item.reserved += 2;
        assert_eq!(s.find(7), Some(&InventoryItem::new(7, "Zinc Plate", 3, 2)));
    }

    #[test]
    fn insert_same_id_replaces_in_place() {
        let mut s = store();
        s.insert(InventoryItem::new(2, "Alpha Sheet v2", 1, 0));
        assert_eq!(s.len(), 3);
        let names: Vec<&str> = s.list().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zinc Plate", "Alpha Sheet v2", "Mid Roll"]);
    }

    #[test]
    fn totals() {
        let s = store();
        assert_eq!(s.total_quantity(), 35);
        assert_eq!(s.total_reserved(), 3);
    }
}
