pub mod category;
pub mod confirm;
pub mod persistence;

use uuid::Uuid;

use crate::entry::{Collection, Entry, EntryId};
pub use category::Category;
pub use confirm::PendingDelete;

#[derive(Debug, Default)]
pub struct State {
    pub input_value: String,
    pub category: Category,
    pub collection: Collection,
    pub pending_delete: Option<PendingDelete>,
    pub dirty: bool,
    pub saving: bool,
}

impl State {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.pending_delete = None;
    }

    pub fn submit_input(&mut self) -> Option<EntryId> {
        let id = self
            .collection
            .add(self.input_value.clone(), self.category)?;

        self.input_value.clear();
        self.dirty = true;
        Some(id)
    }

    /// Returns the token [`State::confirm_delete`] expects.
    pub fn request_delete(&mut self, id: EntryId) -> Option<Uuid> {
        self.collection.get(id)?;

        let pending = PendingDelete::new(id);
        self.pending_delete = Some(pending);
        Some(pending.token())
    }

    pub fn confirm_delete(&mut self, token: Uuid) -> Option<Entry> {
        let id = self.pending_delete?.redeem(token)?;
        self.pending_delete = None;

        let removed = self.collection.remove(id)?;
        self.dirty = true;
        Some(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_token(&self, id: EntryId) -> Option<Uuid> {
        self.pending_delete
            .filter(|pending| pending.id() == id)
            .map(|pending| pending.token())
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.collection.in_category(self.category)
    }

    // One save at a time; changes made meanwhile go out with the next snapshot.
    pub fn begin_save(&mut self) -> Option<Collection> {
        if !self.dirty || self.saving {
            return None;
        }

        self.dirty = false;
        self.saving = true;
        Some(self.collection.clone())
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}
