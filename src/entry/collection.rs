use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Entry, EntryId};
use crate::state::Category;

/// Ids are creation timestamps, so iterating the map yields entries in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: BTreeMap<EntryId, Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, category: Category) -> Option<EntryId> {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        self.add_at(now, text, category)
    }

    pub(crate) fn add_at(
        &mut self,
        now_millis: u64,
        text: impl Into<String>,
        category: Category,
    ) -> Option<EntryId> {
        let entry = Entry::new(text, category).ok()?;
        let id = self.next_id(now_millis)?;

        self.entries.insert(id, entry);
        Some(id)
    }

    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.iter().filter(move |(_, entry)| category.matches(entry))
    }

    // The clock alone repeats within a millisecond (and can go backwards), so
    // the id must also exceed the newest id still present. Past u64::MAX the
    // first free id is used instead, at the cost of insertion order.
    fn next_id(&self, now_millis: u64) -> Option<EntryId> {
        let Some(last) = self.entries.keys().next_back() else {
            return Some(EntryId::new(now_millis));
        };

        match last.value().checked_add(1) {
            Some(floor) => Some(EntryId::new(now_millis.max(floor))),
            None => self.free_id_from(now_millis).or_else(|| self.free_id_from(0)),
        }
    }

    fn free_id_from(&self, start: u64) -> Option<EntryId> {
        let mut candidate = start;

        for id in self.entries.range(EntryId::new(start)..).map(|(id, _)| id.value()) {
            if id != candidate {
                break;
            }
            candidate = candidate.checked_add(1)?;
        }

        Some(EntryId::new(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(collection: &Collection, category: Category) -> Vec<&str> {
        collection
            .in_category(category)
            .map(|(_, entry)| entry.text())
            .collect()
    }

    #[test]
    fn filters_by_category() {
        let mut collection = Collection::new();
        collection.add("Buy milk", Category::Work).unwrap();
        collection.add("Book flight", Category::Travel).unwrap();

        assert_eq!(texts(&collection, Category::Work), vec!["Buy milk"]);
        assert_eq!(texts(&collection, Category::Travel), vec!["Book flight"]);
    }

    #[test]
    fn blank_text_is_a_no_op() {
        let mut collection = Collection::new();
        collection.add("Pack bags", Category::Travel).unwrap();
        let before = collection.clone();

        assert_eq!(collection.add("", Category::Work), None);
        assert_eq!(collection.add("   ", Category::Travel), None);
        assert_eq!(collection, before);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut collection = Collection::new();
        let id = collection.add("Write report", Category::Work).unwrap();
        let before = collection.clone();

        assert!(collection.remove(EntryId::new(id.value() + 1)).is_none());
        assert_eq!(collection, before);
    }

    #[test]
    fn same_millisecond_adds_get_distinct_ids() {
        let mut collection = Collection::new();
        let first = collection.add_at(1_000, "one", Category::Work).unwrap();
        let second = collection.add_at(1_000, "two", Category::Work).unwrap();
        let third = collection.add_at(999, "three", Category::Travel).unwrap();

        assert!(first < second && second < third);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn exhausted_id_range_never_overwrites() {
        let mut collection: Collection = serde_json::from_str(
            r#"{"18446744073709551615": {"text": "old", "working": true}}"#,
        )
        .unwrap();
        let max = EntryId::new(u64::MAX);

        let id = collection.add_at(1_000, "new", Category::Work).unwrap();
        assert_eq!(id, EntryId::new(1_000));

        let wrapped = collection.add_at(u64::MAX, "newer", Category::Travel).unwrap();
        assert_eq!(wrapped, EntryId::new(0));

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(max).map(Entry::text), Some("old"));
        assert_eq!(collection.get(id).map(Entry::text), Some("new"));
    }

    #[test]
    fn free_id_skips_occupied_run() {
        let mut collection = Collection::new();
        collection.add_at(u64::MAX - 1, "a", Category::Work).unwrap();
        collection.add_at(u64::MAX, "b", Category::Work).unwrap();
        collection.add_at(5, "c", Category::Work).unwrap();

        let id = collection.add_at(5, "d", Category::Work).unwrap();
        assert_eq!(id, EntryId::new(6));
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn keeps_insertion_order_within_category() {
        let mut collection = Collection::new();
        for text in ["a", "b", "c"] {
            collection.add(text, Category::Work).unwrap();
        }

        assert_eq!(texts(&collection, Category::Work), vec!["a", "b", "c"]);
    }

    #[test]
    fn serializes_as_map_of_string_ids() {
        let mut collection = Collection::new();
        collection.add_at(1_697_000_000_000, "Buy milk", Category::Work);

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "1697000000000": { "text": "Buy milk", "working": true } })
        );

        let parsed: Collection = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, collection);
    }

    fn category() -> impl Strategy<Value = Category> {
        prop_oneof![Just(Category::Work), Just(Category::Travel)]
    }

    proptest! {
        #[test]
        fn add_then_remove_restores_collection(
            seed in proptest::collection::vec(("[a-z]{1,8}", category()), 0..8),
            text in "[a-zA-Z ]{0,12}[a-z]",
            cat in category(),
        ) {
            let mut collection = Collection::new();
            for (text, cat) in seed {
                collection.add(text, cat);
            }
            let before = collection.clone();

            let id = collection.add(text.clone(), cat).unwrap();
            prop_assert_eq!(collection.get(id).map(Entry::text), Some(text.as_str()));

            collection.remove(id);
            prop_assert_eq!(collection, before);
        }

        #[test]
        fn ids_never_collide(clock in proptest::collection::vec(0u64..5, 1..32)) {
            let mut collection = Collection::new();
            for (i, now) in clock.iter().enumerate() {
                collection.add_at(*now, format!("entry {i}"), Category::Work);
            }

            prop_assert_eq!(collection.len(), clock.len());
        }
    }
}
