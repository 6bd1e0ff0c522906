//! Horizon Datamodel - typed row storage beneath list views.
//!
//! This is the main crate of the workspace. It provides:
//!
//! - **Stores**: [`ListStore`](model::ListStore), a columnar row container
//!   with per-column typing over text, integers, booleans, shared object
//!   references, and image buffers
//! - **Addressing**: [`TreeIter`](model::TreeIter) row handles and
//!   [`TreePath`](model::TreePath) positional addresses
//! - **Selection**: [`TreeSelection`](model::TreeSelection), owned by a
//!   [`TreeView`](view::TreeView)
//! - **Notification**: re-exported [`Signal`] from `horizon-datamodel-core`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_datamodel::prelude::*;
//!
//! let title = DataColumnString::new();
//! let done = DataColumnBoolean::new();
//! let model = Arc::new(ListStore::new(&[&title, &done])?);
//!
//! model.signals().row_inserted.connect(|(path, _)| {
//!     println!("row inserted at {path}");
//! });
//!
//! let row = model.append_row();
//! model.set_value(&row, &title, "Write docs".to_string())?;
//!
//! let mut view = TreeView::new(model.clone());
//! view.selection_mut().select_row(&row)?;
//! assert_eq!(view.selection().selected_rows(), vec![TreePath::new_first()]);
//! # Ok::<(), ModelError>(())
//! ```

pub use horizon_datamodel_core::*;

pub mod error;
pub mod model;
pub mod prelude;
pub mod view;

pub use error::{ErrorKind, ModelError, Result};
