//! Horizon Autocomplete - a suggestion control for text inputs.
//!
//! The control watches a host text input, offers up to `max_suggestions`
//! items that start with the typed text, lets the user move a highlight with
//! the arrow keys, and writes the chosen item back into the input on Enter or
//! click. Rendering and the event loop belong to the host; this crate is the
//! state machine between them.
//!
//! # Example
//!
//! ```
//! use horizon_autocomplete::prelude::*;
//!
//! let input = TextInput::new();
//! let mut autocomplete = Autocomplete::new(
//!     AutocompleteConfig::new()
//!         .items(["a1", "a2", "a3", "b1"])
//!         .max_suggestions(2),
//! );
//! autocomplete.attach(input.clone());
//!
//! input.type_text("a");
//! let mut event = AutocompleteEvent::key_release(Key::Character('a'));
//! autocomplete.handle_event(&mut event);
//!
//! let view = autocomplete.view();
//! assert!(view.is_visible());
//! let rows: Vec<_> = view.rows().map(|row| row.text).collect();
//! assert_eq!(rows, ["a1", "a2"]);
//! ```

mod autocomplete;
pub mod config;
pub mod events;
mod host;
pub mod matcher;
pub mod prelude;
mod view;

pub use horizon_autocomplete_core::*;

pub use autocomplete::{Autocomplete, AutocompleteMode};
pub use config::{AutocompleteConfig, DEFAULT_CLOSE_DELAY, DEFAULT_MAX_SUGGESTIONS};
pub use events::{AutocompleteEvent, Key};
pub use host::{HostInput, TextInput};
pub use matcher::CaseSensitivity;
pub use view::{SuggestionRow, SuggestionView};
