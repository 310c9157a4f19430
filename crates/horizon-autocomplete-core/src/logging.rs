//! Logging and tracing facilities for Horizon Autocomplete.
//!
//! Horizon Autocomplete uses the `tracing` crate for instrumentation. The
//! library never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_autocomplete::navigation=debug")
//!         .init();
//! }
//! ```

/// Span names used throughout Horizon Autocomplete for tracing.
pub mod span_names {
    /// Full controller render pass.
    pub const RENDER: &str = "horizon_autocomplete::render";
    /// Anchored position computation.
    pub const POSITION: &str = "horizon_autocomplete::position";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_autocomplete_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_autocomplete_core::signal";
    /// Controller wiring target.
    pub const CONTROLLER: &str = "horizon_autocomplete::controller";
    /// Navigation state machine target.
    pub const NAVIGATION: &str = "horizon_autocomplete::navigation";
    /// Query matching and highlighting target.
    pub const MATCHING: &str = "horizon_autocomplete::matching";
    /// Virtualization window target.
    pub const VIRTUAL_LIST: &str = "horizon_autocomplete::virtual_list";
    /// Positioning engine target.
    pub const POSITION: &str = "horizon_autocomplete::position";
    /// Presence (mount/unmount transition) target.
    pub const PRESENCE: &str = "horizon_autocomplete::presence";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_autocomplete::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_autocomplete::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
