//! Typed row storage for list views.
//!
//! This module provides the data layer beneath a list display: a columnar
//! row store, handles and positional addresses for its rows, and a
//! selection tracker.
//!
//! # Core Types
//!
//! - `DataColumn<T>`: A typed column descriptor, bound to one store
//! - `Value` / `ColumnType`: Tagged cell values and their type tags
//! - `ListStore`: Flat, typed, columnar row container
//! - `TreeIter`: Opaque handle to one row; detectably stale after removal
//! - `TreePath`: Positional address, written as text like `"0"` or `"0:2"`
//! - `TreeModel`: The trait views and selections read through
//! - `TreeSelection`: The set of selected rows
//!
//! # Example
//!
//! ```
//! use horizon_datamodel::model::{
//!     DataColumnBoolean, DataColumnInteger, DataColumnString, ListStore, TreePath,
//! };
//!
//! let name = DataColumnString::new();
//! let age = DataColumnInteger::new();
//! let useful = DataColumnBoolean::new();
//! let model = ListStore::new(&[&name, &age, &useful])?;
//!
//! let row = model.append_row();
//! model.set_value(&row, &name, "Ada".to_string())?;
//! model.set_value(&row, &age, 36)?;
//!
//! assert_eq!(model.path(&row)?, TreePath::new_first());
//! assert_eq!(model.value(&row, &useful)?, false);
//! # Ok::<(), horizon_datamodel::ModelError>(())
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  ListStore  │────>│ ModelSignals │────>│ TreeView /    │
//! │ (TreeModel) │     │              │     │ TreeSelection │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!       │                                          │
//!       │          ┌─────────────┐                 │
//!       └─────────>│  TreeIter   │<────────────────┘
//!                  │  TreePath   │
//!                  └─────────────┘
//! ```

mod column;
mod iter;
mod list_store;
mod path;
mod pixbuf;
mod reference;
pub mod selection;
mod traits;
mod value;

pub use column::{
    Column, ColumnDescriptor, DataColumn, DataColumnBoolean, DataColumnInteger, DataColumnPixbuf,
    DataColumnReference, DataColumnString,
};
pub use iter::{RowKey, StoreId, TreeIter};
pub use list_store::{ListStore, ListStoreBuilder};
pub use path::TreePath;
pub use pixbuf::Pixbuf;
pub use reference::Reference;
pub use selection::{RowAddress, SelectionMode, TreeSelection};
pub use traits::{ModelSignals, TreeModel};
pub use value::{ColumnType, ColumnValue, Value};
