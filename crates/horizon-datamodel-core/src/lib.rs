//! Core plumbing for Horizon Datamodel.
//!
//! This crate holds the pieces the model layer shares with whatever sits on
//! top of it:
//!
//! - **Signals**: a synchronous, type-safe notification primitive that models
//!   use to announce row insertions, changes, and deletions
//! - **Logging**: `tracing` targets and span names for filtering model output
//!
//! # Signal Example
//!
//! ```
//! use horizon_datamodel_core::Signal;
//!
//! let row_count_changed = Signal::<usize>::new();
//!
//! let conn_id = row_count_changed.connect(|count| {
//!     println!("Store now has {} rows", count);
//! });
//!
//! row_count_changed.emit(3);
//! row_count_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
