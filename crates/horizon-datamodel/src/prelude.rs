//! Prelude module for Horizon Datamodel.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_datamodel::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use horizon_datamodel_core::{ConnectionId, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{ErrorKind, ModelError};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    Column, ColumnType, ColumnValue, DataColumn, DataColumnBoolean, DataColumnInteger,
    DataColumnPixbuf, DataColumnReference, DataColumnString, ListStore, ModelSignals, Pixbuf,
    Reference, RowAddress, SelectionMode, TreeIter, TreeModel, TreePath, TreeSelection, Value,
};

// ============================================================================
// View
// ============================================================================

pub use crate::view::TreeView;
