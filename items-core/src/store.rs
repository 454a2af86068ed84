//! Process-local item store.
//!
//! The collection and the ID counter live behind one `RwLock`, so allocating
//! an ID and inserting the item happen under a single write guard. Nothing
//! is persisted; each process (or replica) has its own independent store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::debug;

use crate::id::ItemId;
use crate::item::{merge_fields, Item, Payload};
use crate::timestamp;

#[derive(Debug)]
struct StoreState {
    next_id: u64,
    items: IndexMap<ItemId, Item>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self { next_id: 1, items: IndexMap::new() }
    }
}

/// Thread-safe, in-memory owner of all items and of ID assignment.
#[derive(Debug, Default)]
pub struct ItemStore {
    state: RwLock<StoreState>,
}

impl ItemStore {
    /// Create an empty store. The first item gets ID 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().expect("item store read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().expect("item store write lock poisoned")
    }

    /// Store a new item built from `payload` and return it.
    ///
    /// Protected keys in the payload are ignored. `createdAt` and `updatedAt`
    /// are both set to the current time.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn create(&self, payload: Payload) -> Item {
        let now = timestamp::now();
        let mut fields = Payload::new();
        merge_fields(&mut fields, payload);

        let mut state = self.write();
        let id = ItemId::new(state.next_id);
        state.next_id += 1;
        let item = Item { id, fields, created_at: now, updated_at: now };
        state.items.insert(id, item.clone());
        drop(state);

        debug!(%id, "item created");
        item
    }

    /// Return every stored item, in insertion order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn find_all(&self) -> Vec<Item> {
        self.read().items.values().cloned().collect()
    }

    /// Look up an item by ID.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.read().items.get(&id).cloned()
    }

    /// Look up an item by its textual ID. Unparsable input is not found.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn find_by_raw_id(&self, raw: &str) -> Option<Item> {
        ItemId::parse_lenient(raw).and_then(|id| self.find_by_id(id))
    }

    /// Merge `payload` into the item with `id` and return the new version.
    ///
    /// Payload fields replace same-named fields; other fields are kept.
    /// `id` and `createdAt` cannot be changed. `updatedAt` never moves
    /// backwards, even if the wall clock does.
    ///
    /// Returns `None` if no item has this ID.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn update(&self, id: ItemId, payload: Payload) -> Option<Item> {
        let now = timestamp::now();
        let mut state = self.write();
        let current = state.items.get_mut(&id)?;

        let mut fields = current.fields.clone();
        merge_fields(&mut fields, payload);
        let updated = Item {
            id: current.id,
            fields,
            created_at: current.created_at,
            updated_at: now.max(current.updated_at),
        };
        *current = updated.clone();
        drop(state);

        debug!(%id, "item updated");
        Some(updated)
    }

    /// Remove the item with `id`. Returns `true` if it existed.
    ///
    /// The ID is never handed out again.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn delete(&self, id: ItemId) -> bool {
        let removed = self.write().items.shift_remove(&id).is_some();
        if removed {
            debug!(%id, "item deleted");
        }
        removed
    }

    /// Number of items currently stored.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    /// Return `true` if the store holds no items.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }
}
