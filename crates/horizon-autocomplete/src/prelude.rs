//! Prelude module for Horizon Autocomplete.
//!
//! ```ignore
//! use horizon_autocomplete::prelude::*;
//! ```

// ============================================================================
// Control
// ============================================================================

pub use crate::{Autocomplete, AutocompleteConfig, AutocompleteMode, CaseSensitivity};

// ============================================================================
// Host Surface
// ============================================================================

pub use crate::events::{AutocompleteEvent, Key};
pub use crate::{HostInput, SuggestionRow, SuggestionView, TextInput};

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionId, Signal};
