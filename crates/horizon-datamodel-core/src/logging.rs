//! Logging facilities for Horizon Datamodel.
//!
//! Horizon Datamodel uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_datamodel::store=trace")
//!         .init();
//! }
//! ```

/// Span names used throughout Horizon Datamodel for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL_EMIT: &str = "horizon_datamodel::signal::emit";
    /// Store construction span.
    pub const STORE_BUILD: &str = "horizon_datamodel::store::build";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot plumbing.
    pub const SIGNAL: &str = "horizon_datamodel::signal";
    /// Row store construction and mutation.
    pub const STORE: &str = "horizon_datamodel::store";
    /// Column descriptor binding.
    pub const COLUMN: &str = "horizon_datamodel::column";
    /// Selection tracking.
    pub const SELECTION: &str = "horizon_datamodel::selection";
    /// View/model wiring.
    pub const VIEW: &str = "horizon_datamodel::view";
}
