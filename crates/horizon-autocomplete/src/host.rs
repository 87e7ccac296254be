//! The host text-input surface.
//!
//! The control never owns the text field a user types into. It reads and
//! writes the field's value through [`HostInput`], implemented by whatever
//! widget the host provides. [`TextInput`] is a ready-made in-memory
//! implementation whose clones share one buffer, so the host can keep typing
//! into a handle while the control holds another.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A text field the control can read from and commit into.
pub trait HostInput: Send {
    /// The current text of the field.
    fn value(&self) -> String;

    /// Replace the text of the field.
    fn set_value(&mut self, value: &str);
}

/// A shared, in-memory text buffer.
///
/// # Example
///
/// ```
/// use horizon_autocomplete::{HostInput, TextInput};
///
/// let input = TextInput::new();
/// let mut handle = input.clone();
/// handle.set_value("dog");
/// assert_eq!(input.value(), "dog");
/// ```
#[derive(Clone, Default)]
pub struct TextInput {
    text: Arc<RwLock<String>>,
}

impl TextInput {
    /// Create an empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.into())),
        }
    }

    /// Append text at the end, as typing would.
    pub fn type_text(&self, text: &str) {
        self.text.write().push_str(text);
    }

    /// Remove the last character, as Backspace would.
    pub fn backspace(&self) {
        self.text.write().pop();
    }

    /// Clear the text.
    pub fn clear(&self) {
        self.text.write().clear();
    }
}

impl HostInput for TextInput {
    fn value(&self) -> String {
        self.text.read().clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut text = self.text.write();
        text.clear();
        text.push_str(value);
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("text", &*self.text.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(TextInput: HostInput, Send, Sync);
