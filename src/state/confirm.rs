use uuid::Uuid;

use crate::entry::EntryId;

/// A delete the user asked for but has not confirmed yet.
///
/// The token ties a confirmation to the request that produced it, so a stale
/// confirmation can never remove a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    token: Uuid,
    id: EntryId,
}

impl PendingDelete {
    pub fn new(id: EntryId) -> Self {
        Self {
            token: Uuid::new_v4(),
            id,
        }
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn redeem(self, token: Uuid) -> Option<EntryId> {
        (self.token == token).then_some(self.id)
    }
}
