//! Core systems for Horizon Autocomplete.
//!
//! This crate provides the plumbing shared by Horizon Autocomplete controls:
//!
//! - **Signal/Slot System**: Type-safe outbound notifications
//! - **Timers**: One-shot timers driven by the host event loop
//! - **Errors**: Error types for configuration and timer bookkeeping
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_autocomplete_core::Signal;
//!
//! let opened_changed = Signal::<bool>::new();
//!
//! let conn_id = opened_changed.connect(|opened| {
//!     println!("Popup opened: {}", opened);
//! });
//!
//! opened_changed.emit(true);
//! opened_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use horizon_autocomplete_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let now = Instant::now();
//! let id = timers.start_one_shot_at(now, Duration::from_millis(200)).unwrap();
//!
//! assert!(timers.process_expired_at(now).is_empty());
//! assert_eq!(timers.process_expired_at(now + Duration::from_millis(200)), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{ConfigError, Error, Result, SignalError, TimerError};
pub use logging::EventSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerManager};
