//! Row handles.
//!
//! A [`TreeIter`] names one row of one store. It is a plain `Copy` value:
//! creating or dropping one never touches the store, and resolving one is
//! always checked. Rows live in a generational arena, so the handle of a
//! removed row stays detectably stale even after its slot is reused.

use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::new_key_type;

/// A global counter for generating store identities.
static STORE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl StoreId {
    pub(crate) fn next() -> Self {
        Self(STORE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric id.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

new_key_type! {
    /// Arena key of a row inside its store.
    ///
    /// Keys carry a generation: a key of a removed row never matches the row
    /// that later reuses its slot.
    pub struct RowKey;
}

/// An opaque handle to one row of a [`ListStore`](super::ListStore).
///
/// Two iters are equal when they address the same row of the same store.
/// Handles outlive nothing: if the row is removed, every operation that
/// takes the handle reports [`ModelError::StaleIter`](crate::ModelError::StaleIter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeIter {
    store: StoreId,
    key: RowKey,
}

impl TreeIter {
    pub(crate) fn new(store: StoreId, key: RowKey) -> Self {
        Self { store, key }
    }

    /// Returns the id of the store that produced this iter.
    pub fn store_id(&self) -> StoreId {
        self.store
    }

    pub(crate) fn key(&self) -> RowKey {
        self.key
    }
}
