//! Selection tracking for row views.
//!
//! [`TreeSelection`] records which rows of a [`TreeModel`] are selected.
//! Rows are held by [`TreeIter`], so a selected row stays selected when other
//! rows are inserted or removed around it, and drops out of every query once
//! it is itself removed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_datamodel::model::{DataColumnString, ListStore, TreePath, TreeSelection};
//!
//! let name = DataColumnString::new();
//! let model = Arc::new(ListStore::new(&[&name])?);
//! model.append_row();
//! model.append_row();
//!
//! let mut selection = TreeSelection::new(model);
//! selection.changed.connect(|_| println!("selection changed"));
//!
//! selection.select_row(&TreePath::parse("1")?)?;
//! assert_eq!(selection.count_selected_rows(), 1);
//! # Ok::<(), horizon_datamodel::ModelError>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_datamodel_core::logging::targets;
use horizon_datamodel_core::{ConnectionId, Signal};

use super::iter::TreeIter;
use super::path::TreePath;
use super::traits::TreeModel;
use crate::error::{ModelError, Result};

/// How many rows may be selected, and how unselecting behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Nothing can be selected.
    None,
    /// At most one row is selected (default).
    #[default]
    Single,
    /// Exactly one row stays selected once something has been selected.
    Browse,
    /// Any number of rows can be selected.
    Multiple,
}

impl SelectionMode {
    /// Returns `true` for the modes that hold at most one row.
    pub fn is_single(self) -> bool {
        matches!(self, SelectionMode::Single | SelectionMode::Browse)
    }
}

/// Something that names a row of a model: a [`TreePath`] or a [`TreeIter`].
pub trait RowAddress {
    /// Resolves to a live row of `model`.
    fn resolve(&self, model: &dyn TreeModel) -> Result<TreeIter>;
}

impl RowAddress for TreeIter {
    fn resolve(&self, model: &dyn TreeModel) -> Result<TreeIter> {
        // path() validates the store and the row's liveness.
        model.path(self)?;
        Ok(*self)
    }
}

impl RowAddress for TreePath {
    fn resolve(&self, model: &dyn TreeModel) -> Result<TreeIter> {
        model
            .iter(self)
            .ok_or_else(|| ModelError::PathNotFound(self.to_string()))
    }
}

/// The set of selected rows of one model.
///
/// The selection listens to the model's `row_deleted` and `rows_cleared`
/// signals, so rows removed from the model leave the selection right away.
///
/// # Signals
///
/// - `changed`: emitted whenever the set of selected rows actually changes,
///   including when selected rows are removed from the model
pub struct TreeSelection {
    model: Arc<dyn TreeModel>,

    mode: SelectionMode,

    /// Selected rows in selection order; the last entry is the most recent.
    selected: Arc<Mutex<Vec<TreeIter>>>,

    /// Our slots on the model's `row_deleted` and `rows_cleared`.
    watchers: [ConnectionId; 2],

    /// Emitted after the selected set changes.
    pub changed: Arc<Signal<()>>,
}

static_assertions::assert_impl_all!(TreeSelection: Send, Sync);

impl TreeSelection {
    /// Creates an empty selection over `model` in [`SelectionMode::Single`].
    pub fn new(model: Arc<dyn TreeModel>) -> Self {
        let selected = Arc::new(Mutex::new(Vec::new()));
        let changed = Arc::new(Signal::new());
        let watchers = watch(&model, &selected, &changed);
        Self {
            model,
            mode: SelectionMode::default(),
            selected,
            watchers,
            changed,
        }
    }

    /// Returns the model this selection tracks.
    pub fn model(&self) -> &Arc<dyn TreeModel> {
        &self.model
    }

    // =========================================================================
    // Selection Mode
    // =========================================================================

    /// Gets the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Switching to [`SelectionMode::None`] clears the selection. Switching
    /// to a single-row mode keeps only the most recently selected row.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(target: targets::SELECTION, from = ?self.mode, to = ?mode, "selection mode changed");
        self.mode = mode;

        let changed = {
            let mut selected = self.selected.lock();
            let pruned = prune(&mut selected, self.model.as_ref());
            let before = selected.len();
            match mode {
                SelectionMode::None => selected.clear(),
                SelectionMode::Single | SelectionMode::Browse => {
                    if let Some(last) = selected.pop() {
                        selected.clear();
                        selected.push(last);
                    }
                }
                SelectionMode::Multiple => {}
            }
            pruned || selected.len() != before
        };
        if changed {
            self.changed.emit(());
        }
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Selects the row at `row`.
    ///
    /// Single-row modes replace the selection; [`SelectionMode::Multiple`]
    /// adds to it, and re-selecting a row makes it the most recent one;
    /// [`SelectionMode::None`] ignores the request. An address that does not
    /// resolve is an error and leaves the selection unchanged.
    pub fn select_row<R: RowAddress + ?Sized>(&mut self, row: &R) -> Result<()> {
        let iter = row.resolve(self.model.as_ref())?;

        let changed = {
            let mut selected = self.selected.lock();
            let pruned = prune(&mut selected, self.model.as_ref());
            let added = match self.mode {
                SelectionMode::None => {
                    tracing::trace!(target: targets::SELECTION, "ignored select in mode None");
                    false
                }
                SelectionMode::Single | SelectionMode::Browse => {
                    if *selected == [iter] {
                        false
                    } else {
                        selected.clear();
                        selected.push(iter);
                        true
                    }
                }
                SelectionMode::Multiple => match selected.iter().position(|s| *s == iter) {
                    // Already selected: only its recency changes.
                    Some(position) => {
                        let again = selected.remove(position);
                        selected.push(again);
                        false
                    }
                    None => {
                        selected.push(iter);
                        true
                    }
                },
            };
            if added {
                tracing::trace!(target: targets::SELECTION, ?iter, "selected row");
            }
            pruned || added
        };

        if changed {
            self.changed.emit(());
        }
        Ok(())
    }

    /// Unselects the row at `row`.
    ///
    /// In [`SelectionMode::Browse`] the last selected row cannot be
    /// unselected; the request is ignored.
    pub fn unselect_row<R: RowAddress + ?Sized>(&mut self, row: &R) -> Result<()> {
        let iter = row.resolve(self.model.as_ref())?;

        let changed = {
            let mut selected = self.selected.lock();
            let pruned = prune(&mut selected, self.model.as_ref());
            match selected.iter().position(|s| *s == iter) {
                Some(_) if self.mode == SelectionMode::Browse && selected.len() == 1 => {
                    tracing::trace!(target: targets::SELECTION, "kept last row selected in mode Browse");
                    pruned
                }
                Some(position) => {
                    selected.remove(position);
                    tracing::trace!(target: targets::SELECTION, ?iter, "unselected row");
                    true
                }
                None => pruned,
            }
        };

        if changed {
            self.changed.emit(());
        }
        Ok(())
    }

    /// Selects every row. Only has an effect in [`SelectionMode::Multiple`].
    pub fn select_all(&mut self) {
        if self.mode != SelectionMode::Multiple {
            tracing::debug!(target: targets::SELECTION, mode = ?self.mode, "select_all needs mode Multiple");
            return;
        }

        let mut rows = Vec::with_capacity(self.model.n_rows());
        let mut cursor = self.model.iter_first();
        while let Some(iter) = cursor {
            rows.push(iter);
            cursor = self.model.iter_next(&iter);
        }

        let changed = {
            let mut selected = self.selected.lock();
            let pruned = prune(&mut selected, self.model.as_ref());
            let before = selected.len();
            for iter in rows {
                if !selected.contains(&iter) {
                    selected.push(iter);
                }
            }
            pruned || selected.len() != before
        };
        if changed {
            self.changed.emit(());
        }
    }

    /// Clears the selection.
    pub fn unselect_all(&mut self) {
        let changed = {
            let mut selected = self.selected.lock();
            let had_rows = !selected.is_empty();
            selected.clear();
            had_rows
        };
        if changed {
            tracing::trace!(target: targets::SELECTION, "cleared selection");
            self.changed.emit(());
        }
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if the row at `row` is selected. Unresolvable rows are not.
    pub fn is_selected<R: RowAddress + ?Sized>(&self, row: &R) -> bool {
        row.resolve(self.model.as_ref())
            .map(|iter| self.selected.lock().contains(&iter))
            .unwrap_or(false)
    }

    /// Returns the number of selected rows that are still in the model.
    pub fn count_selected_rows(&self) -> usize {
        self.live().len()
    }

    /// Returns the selected row, or the most recently selected one in
    /// [`SelectionMode::Multiple`].
    pub fn selected(&self) -> Option<TreeIter> {
        self.live().last().copied()
    }

    /// Returns the paths of all selected rows, in display order.
    pub fn selected_rows(&self) -> Vec<TreePath> {
        let mut paths: Vec<TreePath> = self
            .live()
            .iter()
            .filter_map(|iter| self.model.path(iter).ok())
            .collect();
        paths.sort();
        paths
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Points the selection at a new model and clears it. Mode and
    /// connections on `changed` are kept.
    pub(crate) fn reset(&mut self, model: Arc<dyn TreeModel>) {
        self.unwatch();
        self.model = model;
        self.watchers = watch(&self.model, &self.selected, &self.changed);

        let had_rows = !std::mem::take(&mut *self.selected.lock()).is_empty();
        if had_rows {
            self.changed.emit(());
        }
    }

    /// Selected rows still in the model. Removal signals can be blocked, so
    /// queries filter too.
    fn live(&self) -> Vec<TreeIter> {
        let mut rows = self.selected.lock().clone();
        rows.retain(|iter| self.model.iter_is_valid(iter));
        rows
    }

    fn unwatch(&self) {
        let signals = self.model.signals();
        let [deleted, cleared] = self.watchers;
        signals.row_deleted.disconnect(deleted);
        signals.rows_cleared.disconnect(cleared);
    }
}

impl Drop for TreeSelection {
    fn drop(&mut self) {
        self.unwatch();
    }
}

impl std::fmt::Debug for TreeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSelection")
            .field("mode", &self.mode)
            .field("selected", &*self.selected.lock())
            .finish_non_exhaustive()
    }
}

/// Drops rows that have been removed from `model`. Returns `true` if any were.
fn prune(selected: &mut Vec<TreeIter>, model: &dyn TreeModel) -> bool {
    let before = selected.len();
    selected.retain(|iter| model.iter_is_valid(iter));
    selected.len() != before
}

/// Connects the slots that drop removed rows from `selected`.
fn watch(
    model: &Arc<dyn TreeModel>,
    selected: &Arc<Mutex<Vec<TreeIter>>>,
    changed: &Arc<Signal<()>>,
) -> [ConnectionId; 2] {
    let sweep = {
        let model = Arc::downgrade(model);
        let selected = Arc::downgrade(selected);
        let changed = Arc::downgrade(changed);
        Arc::new(move || {
            let (Some(model), Some(selected), Some(changed)) =
                (model.upgrade(), selected.upgrade(), changed.upgrade())
            else {
                return;
            };
            if prune(&mut selected.lock(), model.as_ref()) {
                tracing::trace!(target: targets::SELECTION, "removed rows left the selection");
                changed.emit(());
            }
        })
    };

    let signals = model.signals();
    let on_deleted = sweep.clone();
    [
        signals.row_deleted.connect(move |_| on_deleted()),
        signals.rows_cleared.connect(move |_| sweep()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataColumnString, ListStore};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn setup(rows: usize) -> (Arc<ListStore>, TreeSelection) {
        let column = DataColumnString::new();
        let model = Arc::new(ListStore::new(&[&column]).unwrap());
        for _ in 0..rows {
            model.append_row();
        }
        let selection = TreeSelection::new(model.clone());
        (model, selection)
    }

    fn path(text: &str) -> TreePath {
        TreePath::parse(text).unwrap()
    }

    fn count_changes(selection: &TreeSelection) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let recv = count.clone();
        selection.changed.connect(move |_| {
            recv.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_default_mode_is_single() {
        let (_, selection) = setup(0);
        assert_eq!(selection.mode(), SelectionMode::Single);
        assert_eq!(SelectionMode::default(), SelectionMode::Single);
    }

    #[test]
    fn test_single_replaces() {
        let (model, mut selection) = setup(3);
        selection.select_row(&path("0")).unwrap();
        selection.select_row(&path("2")).unwrap();

        assert_eq!(selection.count_selected_rows(), 1);
        assert_eq!(selection.selected(), model.iter_nth(2));
        assert!(!selection.is_selected(&path("0")));
    }

    #[test]
    fn test_multiple_adds_and_reports_display_order() {
        let (model, mut selection) = setup(4);
        selection.set_mode(SelectionMode::Multiple);
        selection.select_row(&path("3")).unwrap();
        selection.select_row(&model.iter_nth(1).unwrap()).unwrap();

        assert_eq!(selection.selected_rows(), vec![path("1"), path("3")]);
        assert_eq!(selection.selected(), model.iter_nth(1));

        selection.select_all();
        assert_eq!(selection.count_selected_rows(), 4);
    }

    #[test]
    fn test_select_all_needs_multiple() {
        let (_, mut selection) = setup(3);
        selection.select_all();
        assert_eq!(selection.count_selected_rows(), 0);
    }

    #[test]
    fn test_mode_none_ignores_and_clears() {
        let (_, mut selection) = setup(2);
        selection.select_row(&path("1")).unwrap();
        selection.set_mode(SelectionMode::None);
        assert_eq!(selection.count_selected_rows(), 0);

        selection.select_row(&path("0")).unwrap();
        assert_eq!(selection.count_selected_rows(), 0);
    }

    #[test]
    fn test_narrowing_mode_keeps_most_recent() {
        let (model, mut selection) = setup(3);
        selection.set_mode(SelectionMode::Multiple);
        selection.select_row(&path("0")).unwrap();
        selection.select_row(&path("2")).unwrap();

        selection.set_mode(SelectionMode::Browse);
        assert_eq!(selection.count_selected_rows(), 1);
        assert_eq!(selection.selected(), model.iter_nth(2));
    }

    #[test]
    fn test_browse_keeps_one_row() {
        let (_, mut selection) = setup(2);
        selection.set_mode(SelectionMode::Browse);
        selection.select_row(&path("1")).unwrap();
        selection.unselect_row(&path("1")).unwrap();
        assert!(selection.is_selected(&path("1")));

        selection.unselect_all();
        assert_eq!(selection.count_selected_rows(), 0);
    }

    #[test]
    fn test_unresolvable_row_is_error() {
        let (_, mut selection) = setup(1);
        selection.select_row(&path("0")).unwrap();

        let err = selection.select_row(&path("5")).unwrap_err();
        assert_eq!(err, ModelError::PathNotFound("5".to_string()));
        assert!(selection.is_selected(&path("0")));
    }

    #[test]
    fn test_removed_rows_drop_out() {
        let (model, mut selection) = setup(3);
        selection.set_mode(SelectionMode::Multiple);
        let first = model.iter_nth(0).unwrap();
        selection.select_row(&first).unwrap();
        selection.select_row(&path("2")).unwrap();

        model.remove(&first).unwrap();
        assert_eq!(selection.count_selected_rows(), 1);
        assert_eq!(selection.selected_rows(), vec![path("1")]);
        assert!(!selection.is_selected(&first));
        assert_eq!(selection.select_row(&first), Err(ModelError::StaleIter));
    }

    #[test]
    fn test_changed_fires_only_on_change() {
        let (_, mut selection) = setup(2);
        let count = count_changes(&selection);

        selection.select_row(&path("0")).unwrap();
        selection.select_row(&path("0")).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        selection.unselect_row(&path("1")).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        selection.unselect_all();
        selection.unselect_all();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reselect_in_multiple_makes_row_most_recent() {
        let (model, mut selection) = setup(2);
        selection.set_mode(SelectionMode::Multiple);
        let count = count_changes(&selection);

        selection.select_row(&path("0")).unwrap();
        selection.select_row(&path("1")).unwrap();
        selection.select_row(&path("0")).unwrap();

        assert_eq!(selection.selected(), model.iter_nth(0));
        assert_eq!(selection.count_selected_rows(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_removing_selected_row_emits_changed() {
        let (model, mut selection) = setup(3);
        selection.select_row(&path("1")).unwrap();
        let count = count_changes(&selection);

        model.remove(&model.iter_nth(0).unwrap()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(selection.selected_rows(), vec![path("0")]);

        model.remove(&model.iter_nth(0).unwrap()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_clearing_model_emits_changed_once() {
        let (model, mut selection) = setup(3);
        selection.set_mode(SelectionMode::Multiple);
        selection.select_all();
        let count = count_changes(&selection);

        model.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(selection.count_selected_rows(), 0);

        model.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_selection_disconnects_from_model() {
        let (model, selection) = setup(1);
        let deleted = model.signals().row_deleted.connection_count();
        let cleared = model.signals().rows_cleared.connection_count();

        drop(selection);
        assert_eq!(model.signals().row_deleted.connection_count(), deleted - 1);
        assert_eq!(model.signals().rows_cleared.connection_count(), cleared - 1);
    }

    #[test]
    fn test_changed_slot_may_remove_rows() {
        let (model, mut selection) = setup(3);
        selection.set_mode(SelectionMode::Multiple);
        let target = model.clone();
        selection.changed.connect(move |_| {
            if let Some(last) = target.iter_nth(2) {
                let _ = target.remove(&last);
            }
        });

        selection.select_row(&path("2")).unwrap();
        assert_eq!(model.n_rows(), 2);
        assert_eq!(selection.count_selected_rows(), 0);
    }
}
