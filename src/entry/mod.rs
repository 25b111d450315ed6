pub mod collection;
pub mod view;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use iced::Element;
use uuid::Uuid;

use crate::state::Category;
pub use collection::Collection;
pub use view::EntryMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry", into = "StoredEntry")]
pub struct Entry {
    text: String,
    category: Category,
}

#[derive(Debug, Error)]
#[error("entry text is empty")]
pub struct EmptyText;

// Stored as `{"text": "...", "working": true}`.
#[derive(Serialize, Deserialize)]
struct StoredEntry {
    text: String,
    working: bool,
}

impl TryFrom<StoredEntry> for Entry {
    type Error = EmptyText;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        let category = if stored.working {
            Category::Work
        } else {
            Category::Travel
        };

        Entry::new(stored.text, category)
    }
}

impl From<Entry> for StoredEntry {
    fn from(entry: Entry) -> Self {
        StoredEntry {
            working: entry.category == Category::Work,
            text: entry.text,
        }
    }
}

impl Entry {
    pub fn new(text: impl Into<String>, category: Category) -> Result<Self, EmptyText> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(EmptyText);
        }

        Ok(Entry { text, category })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn view(&self, pending: Option<Uuid>) -> Element<'_, EntryMessage> {
        view::entry_view(self, pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert!(Entry::new("", Category::Work).is_err());
        assert!(Entry::new("  \t\n", Category::Travel).is_err());
    }

    #[test]
    fn keeps_text_verbatim() {
        let entry = Entry::new("  Buy milk ", Category::Work).unwrap();
        assert_eq!(entry.text(), "  Buy milk ");
        assert_eq!(entry.category(), Category::Work);
    }

    #[test]
    fn serializes_category_as_working_flag() {
        let work = Entry::new("Buy milk", Category::Work).unwrap();
        let travel = Entry::new("Book flight", Category::Travel).unwrap();

        assert_eq!(
            serde_json::to_value(&work).unwrap(),
            serde_json::json!({ "text": "Buy milk", "working": true })
        );
        assert_eq!(
            serde_json::to_value(&travel).unwrap(),
            serde_json::json!({ "text": "Book flight", "working": false })
        );
    }

    #[test]
    fn refuses_to_deserialize_empty_text() {
        let result = serde_json::from_str::<Entry>(r#"{"text": " ", "working": true}"#);
        assert!(result.is_err());
    }
}
