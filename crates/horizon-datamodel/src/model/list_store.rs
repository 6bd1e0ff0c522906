//! Typed columnar list store.
//!
//! `ListStore` owns an ordered sequence of rows. Every row holds one
//! [`Value`] per column, and every write is checked against the column's
//! declared [`ColumnType`].
//!
//! # Example
//!
//! ```
//! use horizon_datamodel::model::{DataColumnBoolean, DataColumnString, ListStore, TreePath};
//!
//! let name = DataColumnString::new();
//! let done = DataColumnBoolean::new();
//! let model = ListStore::new(&[&name, &done])?;
//!
//! let row = model.append_row();
//! model.set_value(&row, &name, "Buy groceries".to_string())?;
//! model.set_value(&row, &done, true)?;
//!
//! let first = model.iter(&TreePath::parse("0")?).unwrap();
//! assert_eq!(model.value(&first, &name)?, "Buy groceries");
//! # Ok::<(), horizon_datamodel::ModelError>(())
//! ```

use parking_lot::RwLock;
use slotmap::SlotMap;

use horizon_datamodel_core::logging::{span_names, targets};

use super::column::{Column, ColumnDescriptor, DataColumn};
use super::iter::{RowKey, StoreId, TreeIter};
use super::path::TreePath;
use super::traits::{ModelSignals, TreeModel};
use super::value::{ColumnType, ColumnValue, Value};
use crate::error::{ModelError, Result};

/// One row's cells, in column order.
struct Row {
    cells: Vec<Value>,
    /// Index of this row in `StoreState::order`.
    position: usize,
}

impl Row {
    fn new(columns: &[ColumnType], position: usize) -> Self {
        Self {
            cells: columns.iter().map(|&ty| Value::default_for(ty)).collect(),
            position,
        }
    }
}

/// Mutable state behind the store's lock.
struct StoreState {
    /// Row arena. Keys stay unique across removal.
    rows: SlotMap<RowKey, Row>,
    /// Display order.
    order: Vec<RowKey>,
    /// Bumped by every mutation.
    stamp: u64,
}

impl StoreState {
    fn position(&self, key: RowKey) -> Result<usize> {
        self.rows
            .get(key)
            .map(|row| row.position)
            .ok_or(ModelError::StaleIter)
    }

    /// Rewrites cached positions from `start` to the end of `order`.
    fn renumber_from(&mut self, start: usize) {
        for (position, &key) in self.order.iter().enumerate().skip(start) {
            if let Some(row) = self.rows.get_mut(key) {
                row.position = position;
            }
        }
    }
}

/// A flat, typed, columnar row container.
///
/// The column schema is fixed at construction. Rows can be inserted,
/// removed, read, and written through [`TreeIter`] handles.
///
/// # Signals
///
/// Mutations emit the matching [`ModelSignals`] after the store's lock is
/// released, so slots may read from or write to the store.
pub struct ListStore {
    id: StoreId,
    columns: Vec<ColumnType>,
    state: RwLock<StoreState>,
    signals: ModelSignals,
}

static_assertions::assert_impl_all!(ListStore: Send, Sync);

impl ListStore {
    /// Creates a store with the given columns.
    ///
    /// Ordinals `0..n` are assigned in argument order. Nothing is bound if
    /// construction fails.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NoColumns`] if `columns` is empty
    /// - [`ModelError::DuplicateColumn`] if one descriptor appears twice
    /// - [`ModelError::ColumnAlreadyBound`] if a descriptor belongs to another store
    pub fn new(columns: &[&dyn Column]) -> Result<Self> {
        let span = tracing::debug_span!(target: targets::STORE, span_names::STORE_BUILD, columns = columns.len());
        let _enter = span.enter();

        if columns.is_empty() {
            tracing::debug!(target: targets::STORE, "rejected store with no columns");
            return Err(ModelError::NoColumns);
        }

        for (position, column) in columns.iter().enumerate() {
            let descriptor = column.descriptor();
            if let Some(first) = columns[..position]
                .iter()
                .position(|earlier| earlier.descriptor().same_descriptor(descriptor))
            {
                tracing::debug!(target: targets::STORE, first, position, "rejected duplicate column");
                return Err(ModelError::DuplicateColumn { first, position });
            }
        }

        // Claim every descriptor or none of them.
        let id = StoreId::next();
        for (position, column) in columns.iter().enumerate() {
            if !column.descriptor().bind(id, position) {
                for earlier in &columns[..position] {
                    earlier.descriptor().unbind(id);
                }
                tracing::debug!(target: targets::STORE, position, "rejected column bound elsewhere");
                return Err(ModelError::ColumnAlreadyBound { position });
            }
        }

        let column_types: Vec<ColumnType> = columns.iter().map(|c| c.column_type()).collect();
        tracing::debug!(target: targets::STORE, ?id, ?column_types, "created list store");

        Ok(Self {
            id,
            columns: column_types,
            state: RwLock::new(StoreState {
                rows: SlotMap::with_key(),
                order: Vec::new(),
                stamp: 0,
            }),
            signals: ModelSignals::new(),
        })
    }

    /// Starts building a store column by column.
    pub fn builder() -> ListStoreBuilder {
        ListStoreBuilder::new()
    }

    /// Returns this store's identity.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the type of the column at `ordinal`.
    pub fn column_type(&self, ordinal: usize) -> Option<ColumnType> {
        self.columns.get(ordinal).copied()
    }

    /// Returns all column types in ordinal order.
    pub fn column_types(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.state.read().order.len()
    }

    /// Returns `true` if the store has no rows.
    pub fn is_empty(&self) -> bool {
        self.state.read().order.is_empty()
    }

    /// Returns the change counter. Every mutation increases it.
    pub fn generation(&self) -> u64 {
        self.state.read().stamp
    }

    /// Returns the change notification signals.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Appends a row with default cells and returns its handle.
    pub fn append_row(&self) -> TreeIter {
        self.insert_row(usize::MAX)
    }

    /// Inserts a row with default cells at the front.
    pub fn prepend_row(&self) -> TreeIter {
        self.insert_row(0)
    }

    /// Inserts a row with default cells at `position`.
    ///
    /// A position past the end appends.
    pub fn insert_row(&self, position: usize) -> TreeIter {
        let (iter, path) = {
            let mut state = self.state.write();
            let position = position.min(state.order.len());
            let key = state.rows.insert(Row::new(&self.columns, position));
            state.order.insert(position, key);
            state.renumber_from(position + 1);
            state.stamp += 1;
            (TreeIter::new(self.id, key), TreePath::from_index(position))
        };

        tracing::trace!(target: targets::STORE, store = ?self.id, %path, "inserted row");
        self.signals.row_inserted.emit((path, iter));
        iter
    }

    /// Removes the row addressed by `iter`.
    ///
    /// Returns the row that now occupies the removed position, if any. The
    /// removed handle is stale from here on.
    pub fn remove(&self, iter: &TreeIter) -> Result<Option<TreeIter>> {
        let (path, next) = {
            let mut state = self.state.write();
            let key = self.resolve(&state, iter)?;
            let position = state.position(key)?;
            state.order.remove(position);
            state.rows.remove(key);
            state.renumber_from(position);
            state.stamp += 1;
            let next = state.order.get(position).map(|&k| TreeIter::new(self.id, k));
            (TreePath::from_index(position), next)
        };

        tracing::trace!(target: targets::STORE, store = ?self.id, %path, "removed row");
        self.signals.row_deleted.emit(path);
        Ok(next)
    }

    /// Removes every row. All outstanding handles become stale.
    pub fn clear(&self) {
        let removed = {
            let mut state = self.state.write();
            let removed = state.order.len();
            state.rows.clear();
            state.order.clear();
            state.stamp += 1;
            removed
        };

        tracing::debug!(target: targets::STORE, store = ?self.id, removed, "cleared store");
        self.signals.rows_cleared.emit(());
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Returns the first row, or `None` if the store is empty.
    pub fn iter_first(&self) -> Option<TreeIter> {
        self.iter_nth(0)
    }

    /// Returns the row at `position`, or `None` if out of range.
    pub fn iter_nth(&self, position: usize) -> Option<TreeIter> {
        let state = self.state.read();
        state.order.get(position).map(|&key| TreeIter::new(self.id, key))
    }

    /// Resolves `path` to a row.
    ///
    /// Returns `None` when no row lives at that position, including for any
    /// path deeper than one level.
    pub fn iter(&self, path: &TreePath) -> Option<TreeIter> {
        match path.indices() {
            [position] => self.iter_nth(*position),
            _ => None,
        }
    }

    /// Returns the row after `iter`.
    ///
    /// Returns `None` at the end of the store or for an invalid handle.
    pub fn iter_next(&self, iter: &TreeIter) -> Option<TreeIter> {
        let state = self.state.read();
        let key = self.resolve(&state, iter).ok()?;
        let position = state.position(key).ok()?;
        state
            .order
            .get(position + 1)
            .map(|&k| TreeIter::new(self.id, k))
    }

    /// Returns handles to every row, in display order.
    pub fn iters(&self) -> Vec<TreeIter> {
        let state = self.state.read();
        state
            .order
            .iter()
            .map(|&key| TreeIter::new(self.id, key))
            .collect()
    }

    /// Calls `f` for each row in display order until it returns `true`.
    ///
    /// Runs over a snapshot, so `f` may modify the store.
    pub fn foreach<F>(&self, mut f: F)
    where
        F: FnMut(&TreePath, &TreeIter) -> bool,
    {
        for (position, iter) in self.iters().iter().enumerate() {
            if f(&TreePath::from_index(position), iter) {
                break;
            }
        }
    }

    /// Returns the current position of `iter`'s row.
    pub fn path(&self, iter: &TreeIter) -> Result<TreePath> {
        let state = self.state.read();
        let key = self.resolve(&state, iter)?;
        state.position(key).map(TreePath::from_index)
    }

    /// Returns `true` if `iter` addresses a live row of this store.
    pub fn iter_is_valid(&self, iter: &TreeIter) -> bool {
        let state = self.state.read();
        self.resolve(&state, iter).is_ok()
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// Writes a typed value into `column` of the row at `iter`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::ColumnNotBound`] / [`ModelError::ForeignColumn`] if
    ///   `column` was not used to build this store
    /// - [`ModelError::ForeignIter`] / [`ModelError::StaleIter`] for a bad handle
    pub fn set_value<T: ColumnValue>(
        &self,
        iter: &TreeIter,
        column: &DataColumn<T>,
        value: T,
    ) -> Result<()> {
        let ordinal = column.descriptor().ordinal_in(self.id)?;
        self.set(iter, ordinal, value.into_value())
    }

    /// Reads a typed value from `column` of the row at `iter`.
    ///
    /// Reference and pixbuf columns return the same shared instance that was
    /// stored, or `None` if the cell was never set.
    pub fn value<T: ColumnValue>(&self, iter: &TreeIter, column: &DataColumn<T>) -> Result<T::Output> {
        let ordinal = column.descriptor().ordinal_in(self.id)?;
        let value = self.get(iter, ordinal)?;
        let found = value.column_type();
        T::from_value(&value).ok_or(ModelError::TypeMismatch {
            ordinal,
            expected: T::TYPE,
            found,
        })
    }

    /// Writes a value through an untyped descriptor.
    pub fn set_by_descriptor(&self, iter: &TreeIter, column: &ColumnDescriptor, value: Value) -> Result<()> {
        let ordinal = column.ordinal_in(self.id)?;
        self.set(iter, ordinal, value)
    }

    /// Writes a value into the cell at (`iter`, `ordinal`).
    ///
    /// The value's tag must match the column's declared type; on mismatch
    /// the cell is left untouched.
    pub fn set(&self, iter: &TreeIter, ordinal: usize, value: Value) -> Result<()> {
        let expected = self.checked_column(ordinal)?;
        let found = value.column_type();
        if found != expected {
            tracing::debug!(target: targets::STORE, ordinal, %expected, %found, "rejected mistyped value");
            return Err(ModelError::TypeMismatch {
                ordinal,
                expected,
                found,
            });
        }

        let path = {
            let mut state = self.state.write();
            let key = self.resolve(&state, iter)?;
            let position = state.position(key)?;
            if let Some(row) = state.rows.get_mut(key) {
                row.cells[ordinal] = value;
            }
            state.stamp += 1;
            TreePath::from_index(position)
        };

        tracing::trace!(target: targets::STORE, store = ?self.id, %path, ordinal, "set cell");
        self.signals.row_changed.emit((path, *iter));
        Ok(())
    }

    /// Reads the cell at (`iter`, `ordinal`).
    pub fn get(&self, iter: &TreeIter, ordinal: usize) -> Result<Value> {
        self.checked_column(ordinal)?;
        let state = self.state.read();
        let key = self.resolve(&state, iter)?;
        state
            .rows
            .get(key)
            .map(|row| row.cells[ordinal].clone())
            .ok_or(ModelError::StaleIter)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn checked_column(&self, ordinal: usize) -> Result<ColumnType> {
        self.column_type(ordinal).ok_or(ModelError::ColumnOutOfRange {
            ordinal,
            count: self.columns.len(),
        })
    }

    fn resolve(&self, state: &StoreState, iter: &TreeIter) -> Result<RowKey> {
        if iter.store_id() != self.id {
            return Err(ModelError::ForeignIter);
        }
        let key = iter.key();
        if state.rows.contains_key(key) {
            Ok(key)
        } else {
            Err(ModelError::StaleIter)
        }
    }
}

impl TreeModel for ListStore {
    fn n_columns(&self) -> usize {
        ListStore::n_columns(self)
    }

    fn column_type(&self, ordinal: usize) -> Option<ColumnType> {
        ListStore::column_type(self, ordinal)
    }

    fn n_rows(&self) -> usize {
        self.len()
    }

    fn iter_first(&self) -> Option<TreeIter> {
        ListStore::iter_first(self)
    }

    fn iter(&self, path: &TreePath) -> Option<TreeIter> {
        ListStore::iter(self, path)
    }

    fn iter_next(&self, iter: &TreeIter) -> Option<TreeIter> {
        ListStore::iter_next(self, iter)
    }

    fn path(&self, iter: &TreeIter) -> Result<TreePath> {
        ListStore::path(self, iter)
    }

    fn iter_is_valid(&self, iter: &TreeIter) -> bool {
        ListStore::iter_is_valid(self, iter)
    }

    fn get(&self, iter: &TreeIter, ordinal: usize) -> Result<Value> {
        ListStore::get(self, iter, ordinal)
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

impl std::fmt::Debug for ListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ListStore")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("rows", &state.order.len())
            .field("generation", &state.stamp)
            .finish()
    }
}

/// Fluent construction of a [`ListStore`].
///
/// ```
/// use horizon_datamodel::model::{DataColumnInteger, DataColumnString, ListStore};
///
/// let name = DataColumnString::new();
/// let age = DataColumnInteger::new();
/// let model = ListStore::builder().column(&name).column(&age).build()?;
/// assert_eq!(model.n_columns(), 2);
/// # Ok::<(), horizon_datamodel::ModelError>(())
/// ```
#[derive(Debug, Default)]
pub struct ListStoreBuilder {
    columns: Vec<ColumnDescriptor>,
}

impl ListStoreBuilder {
    /// Creates a builder with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column; ordinals follow the order of calls.
    pub fn column<C: Column>(mut self, column: &C) -> Self {
        self.columns.push(column.descriptor().clone());
        self
    }

    /// Builds the store. Fails exactly as [`ListStore::new`] does.
    pub fn build(self) -> Result<ListStore> {
        let columns: Vec<&dyn Column> = self.columns.iter().map(|c| c as &dyn Column).collect();
        ListStore::new(&columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataColumnBoolean, DataColumnInteger, DataColumnString};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn three_rows() -> (ListStore, DataColumnInteger) {
        let column = DataColumnInteger::new();
        let model = ListStore::new(&[&column]).unwrap();
        for n in 0..3 {
            let row = model.append_row();
            model.set_value(&row, &column, n).unwrap();
        }
        (model, column)
    }

    #[test]
    fn test_insert_positions() {
        let (model, column) = three_rows();

        let front = model.prepend_row();
        model.set_value(&front, &column, -1).unwrap();
        let middle = model.insert_row(2);
        model.set_value(&middle, &column, 99).unwrap();
        let back = model.insert_row(1000);
        model.set_value(&back, &column, 100).unwrap();

        let values: Vec<i32> = model
            .iters()
            .iter()
            .map(|row| model.value(row, &column).unwrap())
            .collect();
        assert_eq!(values, vec![-1, 0, 99, 1, 2, 100]);
        assert_eq!(model.path(&middle).unwrap().to_string(), "2");
    }

    #[test]
    fn test_remove_makes_handle_stale() {
        let (model, column) = three_rows();
        let middle = model.iter_nth(1).unwrap();

        let next = model.remove(&middle).unwrap().unwrap();
        assert_eq!(model.value(&next, &column).unwrap(), 2);
        assert_eq!(model.path(&next).unwrap().to_string(), "1");

        assert!(!model.iter_is_valid(&middle));
        assert_eq!(model.value(&middle, &column), Err(ModelError::StaleIter));
        assert_eq!(model.remove(&middle), Err(ModelError::StaleIter));

        // A new row may reuse the slot, but not the handle.
        let fresh = model.append_row();
        assert_ne!(fresh, middle);
        assert!(!model.iter_is_valid(&middle));
    }

    #[test]
    fn test_remove_last_returns_none() {
        let (model, _) = three_rows();
        let last = model.iter_nth(2).unwrap();
        assert_eq!(model.remove(&last).unwrap(), None);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let (model, _) = three_rows();
        let handles = model.iters();
        model.clear();
        assert!(model.is_empty());
        assert!(model.iter_first().is_none());
        assert!(handles.iter().all(|h| !model.iter_is_valid(h)));
    }

    #[test]
    fn test_failed_build_releases_earlier_columns() {
        let taken = DataColumnString::new();
        let _owner = ListStore::new(&[&taken]).unwrap();

        let a = DataColumnInteger::new();
        let b = DataColumnBoolean::new();
        let err = ListStore::new(&[&a, &b, &taken]).unwrap_err();
        assert_eq!(err, ModelError::ColumnAlreadyBound { position: 2 });
        assert!(!a.is_bound());
        assert!(!b.is_bound());
        assert_eq!(taken.ordinal(), Ok(0));

        let model = ListStore::new(&[&b, &a]).unwrap();
        assert_eq!(a.ordinal(), Ok(1));
        assert_eq!(a.store_id(), Some(model.id()));
    }

    #[test]
    fn test_walk_and_write_large_store() {
        const ROWS: i32 = 50_000;
        let column = DataColumnInteger::new();
        let model = ListStore::new(&[&column]).unwrap();
        for _ in 0..ROWS {
            model.append_row();
        }

        let mut n = 0;
        let mut cursor = model.iter_first();
        while let Some(row) = cursor {
            model.set_value(&row, &column, n).unwrap();
            n += 1;
            cursor = model.iter_next(&row);
        }
        assert_eq!(n, ROWS);

        let last = model.iter_nth(ROWS as usize - 1).unwrap();
        assert_eq!(model.value(&last, &column).unwrap(), ROWS - 1);
        assert_eq!(model.path(&last).unwrap().index(), ROWS as usize - 1);
    }

    #[test]
    fn test_paths_track_inserts_and_removals() {
        let (model, _) = three_rows();
        model.insert_row(1);
        model.prepend_row();
        let doomed = model.iter_nth(2).unwrap();
        model.remove(&doomed).unwrap();
        model.insert_row(3);
        model.remove(&model.iter_first().unwrap()).unwrap();

        for (index, row) in model.iters().iter().enumerate() {
            assert_eq!(model.path(row).unwrap().index(), index);
            let next = model.iter_next(row);
            assert_eq!(next, model.iter_nth(index + 1));
        }
    }

    #[test]
    fn test_iter_next_walks_in_order() {
        let (model, column) = three_rows();
        let mut seen = Vec::new();
        let mut cursor = model.iter_first();
        while let Some(row) = cursor {
            seen.push(model.value(&row, &column).unwrap());
            cursor = model.iter_next(&row);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_deep_path_does_not_resolve() {
        let (model, _) = three_rows();
        assert!(model.iter(&TreePath::parse("0:1").unwrap()).is_none());
        assert!(model.iter(&TreePath::parse("3").unwrap()).is_none());
    }

    #[test]
    fn test_untyped_set_checks_tags() {
        let flag = DataColumnBoolean::new();
        let model = ListStore::new(&[&flag]).unwrap();
        let row = model.append_row();

        let err = model.set(&row, 0, Value::from("yes")).unwrap_err();
        assert_eq!(
            err,
            ModelError::TypeMismatch {
                ordinal: 0,
                expected: ColumnType::Boolean,
                found: ColumnType::String,
            }
        );
        assert_eq!(model.get(&row, 0).unwrap(), Value::Boolean(false));

        model.set(&row, 0, Value::from(true)).unwrap();
        assert_eq!(model.value(&row, &flag).unwrap(), true);

        assert_eq!(
            model.get(&row, 1),
            Err(ModelError::ColumnOutOfRange { ordinal: 1, count: 1 })
        );
    }

    #[test]
    fn test_foreign_handles_rejected() {
        let a_col = DataColumnString::new();
        let b_col = DataColumnString::new();
        let a = ListStore::new(&[&a_col]).unwrap();
        let b = ListStore::new(&[&b_col]).unwrap();
        let a_row = a.append_row();
        let b_row = b.append_row();

        assert_eq!(a.value(&b_row, &a_col), Err(ModelError::ForeignIter));
        assert_eq!(a.value(&a_row, &b_col), Err(ModelError::ForeignColumn));
        assert_eq!(
            a.set_value(&a_row, &DataColumnString::new(), String::new()),
            Err(ModelError::ColumnNotBound)
        );
    }

    #[test]
    fn test_generation_advances() {
        let (model, column) = three_rows();
        let before = model.generation();
        let row = model.iter_first().unwrap();
        model.set_value(&row, &column, 5).unwrap();
        assert!(model.generation() > before);
    }

    #[test]
    fn test_signals_fire_after_unlock() {
        let column = DataColumnInteger::new();
        let model = Arc::new(ListStore::new(&[&column]).unwrap());
        let log = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&model);
        let recv = log.clone();
        model.signals().row_inserted.connect(move |(path, iter)| {
            // Reading back inside the slot must not deadlock.
            let len = weak.upgrade().map(|m| m.len()).unwrap_or_default();
            assert!(weak.upgrade().is_some_and(|m| m.iter_is_valid(iter)));
            recv.lock().push(format!("inserted {path} of {len}"));
        });
        let recv = log.clone();
        model.signals().row_changed.connect(move |(path, _)| {
            recv.lock().push(format!("changed {path}"));
        });
        let recv = log.clone();
        model.signals().row_deleted.connect(move |path| {
            recv.lock().push(format!("deleted {path}"));
        });

        let first = model.append_row();
        let second = model.append_row();
        model.set_value(&second, &column, 7).unwrap();
        model.remove(&first).unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                "inserted 0 of 1".to_string(),
                "inserted 1 of 2".to_string(),
                "changed 1".to_string(),
                "deleted 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_foreach_stops_early() {
        let (model, column) = three_rows();
        let mut visited = Vec::new();
        model.foreach(|path, iter| {
            visited.push((path.index(), model.value(iter, &column).unwrap()));
            path.index() == 1
        });
        assert_eq!(visited, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_builder_matches_new() {
        let name = DataColumnString::new();
        let flag = DataColumnBoolean::new();
        let model = ListStore::builder().column(&name).column(&flag).build().unwrap();
        assert_eq!(model.column_types(), &[ColumnType::String, ColumnType::Boolean]);
        assert_eq!(flag.ordinal(), Ok(1));

        let empty = ListStore::builder().build().unwrap_err();
        assert_eq!(empty, ModelError::NoColumns);
    }
}
