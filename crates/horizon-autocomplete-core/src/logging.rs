//! Logging facilities for Horizon Autocomplete.
//!
//! Horizon Autocomplete uses the `tracing` crate for instrumentation. The
//! library never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_autocomplete=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Horizon Autocomplete for tracing.
pub mod span_names {
    /// Event handling span.
    pub const EVENT: &str = "horizon_autocomplete::event";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_autocomplete_core";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_autocomplete_core::signal";
    /// Timer system target.
    pub const TIMER: &str = "horizon_autocomplete_core::timer";
    /// Controller state transitions.
    pub const CONTROLLER: &str = "horizon_autocomplete::controller";
    /// Host input access.
    pub const INPUT: &str = "horizon_autocomplete::input";
    /// Suggestion matching.
    pub const MATCHER: &str = "horizon_autocomplete::matcher";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to bracket a single event dispatch so that everything logged while
/// handling it nests under one span.
#[derive(Debug)]
pub struct EventSpan {
    _span: tracing::span::EnteredSpan,
}

impl EventSpan {
    /// Enter a new span for the named event.
    pub fn new(event: &'static str) -> Self {
        let span = tracing::debug_span!(
            target: "horizon_autocomplete::event",
            span_names::EVENT,
            kind = event
        );
        Self {
            _span: span.entered(),
        }
    }
}
