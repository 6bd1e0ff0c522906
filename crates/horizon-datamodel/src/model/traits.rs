//! The model seam between stores and the views that display them.
//!
//! Views and selections talk to stores only through [`TreeModel`], so they
//! work with any row container that can hand out [`TreeIter`]s and resolve
//! [`TreePath`]s.

use horizon_datamodel_core::Signal;

use super::iter::TreeIter;
use super::path::TreePath;
use super::value::{ColumnType, Value};
use crate::error::Result;

/// The core trait for row models.
///
/// # Implementation Requirements
///
/// - Iters handed out must resolve until their row is removed, and must
///   report [`ModelError::StaleIter`](crate::ModelError::StaleIter) after.
/// - `iter_first` on an empty model returns `None`, never an error.
/// - Signals must not be emitted while internal locks are held.
pub trait TreeModel: Send + Sync {
    /// Returns the number of columns.
    fn n_columns(&self) -> usize;

    /// Returns the type of the column at `ordinal`.
    fn column_type(&self, ordinal: usize) -> Option<ColumnType>;

    /// Returns the number of top-level rows.
    fn n_rows(&self) -> usize;

    /// Returns the first row, or `None` if the model is empty.
    fn iter_first(&self) -> Option<TreeIter>;

    /// Resolves `path` to a row, or `None` if nothing lives there.
    fn iter(&self, path: &TreePath) -> Option<TreeIter>;

    /// Returns the row after `iter`, or `None` at the end or for a stale iter.
    fn iter_next(&self, iter: &TreeIter) -> Option<TreeIter>;

    /// Returns the current position of `iter`'s row.
    fn path(&self, iter: &TreeIter) -> Result<TreePath>;

    /// Returns `true` if `iter` addresses a live row of this model.
    fn iter_is_valid(&self, iter: &TreeIter) -> bool;

    /// Reads a cell without static typing.
    fn get(&self, iter: &TreeIter, ordinal: usize) -> Result<Value>;

    /// Returns the change notification signals.
    fn signals(&self) -> &ModelSignals;
}

/// Collection of signals emitted by row models.
///
/// All signals fire after the change is complete and the model is readable
/// again.
pub struct ModelSignals {
    /// Emitted after a row has been inserted.
    /// Args: (path of the new row, iter of the new row)
    pub row_inserted: Signal<(TreePath, TreeIter)>,

    /// Emitted after a cell of an existing row changed.
    /// Args: (path of the row, iter of the row)
    pub row_changed: Signal<(TreePath, TreeIter)>,

    /// Emitted after a row has been removed.
    /// Args: (path the row had before removal)
    pub row_deleted: Signal<TreePath>,

    /// Emitted after every row has been removed at once.
    pub rows_cleared: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            row_inserted: Signal::new(),
            row_changed: Signal::new(),
            row_deleted: Signal::new(),
            rows_cleared: Signal::new(),
        }
    }

    /// Blocks or unblocks every signal in the set.
    pub fn set_blocked(&self, blocked: bool) {
        self.row_inserted.set_blocked(blocked);
        self.row_changed.set_blocked(blocked);
        self.row_deleted.set_blocked(blocked);
        self.rows_cleared.set_blocked(blocked);
    }
}

impl std::fmt::Debug for ModelSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSignals")
            .field("row_inserted", &self.row_inserted)
            .field("row_changed", &self.row_changed)
            .field("row_deleted", &self.row_deleted)
            .field("rows_cleared", &self.rows_cleared)
            .finish()
    }
}
