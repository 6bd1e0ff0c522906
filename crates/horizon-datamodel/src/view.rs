//! The view side of the model/view split.
//!
//! [`TreeView`] stands in for a list display widget. It owns the model
//! reference and one [`TreeSelection`]; drawing is left to the embedding
//! toolkit.

use std::sync::Arc;

use horizon_datamodel_core::logging::targets;

use crate::model::{SelectionMode, TreeModel, TreeSelection};

/// A list view over a [`TreeModel`], owning its selection.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_datamodel::model::{DataColumnString, ListStore, SelectionMode};
/// use horizon_datamodel::view::TreeView;
///
/// let name = DataColumnString::new();
/// let model = Arc::new(ListStore::new(&[&name])?);
/// model.append_row();
///
/// let mut view = TreeView::new(model).with_selection_mode(SelectionMode::Browse);
/// let first = view.model().iter_first().unwrap();
/// view.selection_mut().select_row(&first)?;
/// assert!(view.selection().is_selected(&first));
/// # Ok::<(), horizon_datamodel::ModelError>(())
/// ```
pub struct TreeView {
    model: Arc<dyn TreeModel>,
    selection: TreeSelection,
}

static_assertions::assert_impl_all!(TreeView: Send, Sync);

impl TreeView {
    /// Creates a view over `model` with an empty selection.
    pub fn new(model: Arc<dyn TreeModel>) -> Self {
        tracing::debug!(target: targets::VIEW, columns = model.n_columns(), rows = model.n_rows(), "created tree view");
        Self {
            selection: TreeSelection::new(model.clone()),
            model,
        }
    }

    /// Sets the selection mode using builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection.set_mode(mode);
        self
    }

    // =========================================================================
    // Model
    // =========================================================================

    /// Gets the model.
    pub fn model(&self) -> &Arc<dyn TreeModel> {
        &self.model
    }

    /// Sets the model. The selection is cleared; its mode is kept.
    pub fn set_model(&mut self, model: Arc<dyn TreeModel>) {
        tracing::debug!(target: targets::VIEW, rows = model.n_rows(), "replaced view model");
        self.selection.reset(model.clone());
        self.model = model;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Gets a reference to the selection.
    pub fn selection(&self) -> &TreeSelection {
        &self.selection
    }

    /// Gets a mutable reference to the selection.
    pub fn selection_mut(&mut self) -> &mut TreeSelection {
        &mut self.selection
    }
}

impl std::fmt::Debug for TreeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeView")
            .field("rows", &self.model.n_rows())
            .field("selection", &self.selection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataColumnInteger, ListStore, TreePath};

    fn store(rows: usize) -> Arc<ListStore> {
        let column = DataColumnInteger::new();
        let model = Arc::new(ListStore::new(&[&column]).unwrap());
        for _ in 0..rows {
            model.append_row();
        }
        model
    }

    #[test]
    fn test_view_shares_model_with_selection() {
        let view = TreeView::new(store(2));
        assert!(Arc::ptr_eq(view.model(), view.selection().model()));
        assert_eq!(view.selection().mode(), SelectionMode::Single);
    }

    #[test]
    fn test_set_model_resets_selection() {
        let mut view = TreeView::new(store(3)).with_selection_mode(SelectionMode::Multiple);
        view.selection_mut().select_all();
        assert_eq!(view.selection().count_selected_rows(), 3);

        let replacement = store(1);
        view.set_model(replacement.clone());
        assert_eq!(view.selection().count_selected_rows(), 0);
        assert_eq!(view.selection().mode(), SelectionMode::Multiple);
        assert_eq!(view.model().n_rows(), 1);

        view.selection_mut()
            .select_row(&TreePath::new_first())
            .unwrap();
        assert_eq!(view.selection().selected(), replacement.iter_first());
    }
}
