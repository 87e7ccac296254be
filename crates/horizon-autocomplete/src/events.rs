//! Event types delivered to the autocomplete control by its host.
//!
//! The host translates its native keyboard, focus and pointer events into
//! [`AutocompleteEvent`]s and passes them to
//! [`Autocomplete::handle_event`](crate::Autocomplete::handle_event). After
//! dispatch, an accepted event must not have its default effect applied by the
//! host (for example, ArrowUp must not move the text cursor).
//!
//! ```
//! use horizon_autocomplete::events::{AutocompleteEvent, Key, KeyPressEvent};
//!
//! let mut event = AutocompleteEvent::KeyPress(KeyPressEvent::new(Key::ArrowDown));
//! assert!(!event.is_accepted());
//! event.accept();
//! assert!(event.is_accepted());
//! ```

/// Common data for all control events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, suppressing its default effect in the host.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, letting the host apply its default effect.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard keys the control distinguishes.
///
/// Only ArrowUp, ArrowDown and Enter drive navigation and commit; every other
/// key counts as a possible text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    /// A printable character.
    Character(char),

    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Converts a web-style key name (`"ArrowUp"`, `"Enter"`, `"a"`) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Unknown(0),
                }
            }
        }
    }

    /// Check if this key moves the highlight in the suggestion list.
    pub fn is_highlight_navigation(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown)
    }
}

/// Key press (key-down) event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// Key release (key-up) event.
///
/// Delivered after the host has applied the key to its text value, so the
/// control reads the updated text when handling it.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus in event, sent when the host input gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the host input loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// A click on one row of the rendered suggestion list.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// Index of the clicked row in the current suggestion list.
    pub index: usize,
}

impl SuggestionClickEvent {
    /// Create a new click event for the row at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            base: EventBase::new(),
            index,
        }
    }
}

/// All events the control reacts to.
#[derive(Debug, Clone)]
pub enum AutocompleteEvent {
    /// Key pressed in the host input.
    KeyPress(KeyPressEvent),
    /// Key released in the host input.
    KeyRelease(KeyReleaseEvent),
    /// Host input gained focus.
    FocusIn(FocusInEvent),
    /// Host input lost focus.
    FocusOut(FocusOutEvent),
    /// Pointer entered the suggestion list.
    PopupEnter(EventBase),
    /// Pointer left the suggestion list.
    PopupLeave(EventBase),
    /// A suggestion row was clicked.
    SuggestionClick(SuggestionClickEvent),
}

impl AutocompleteEvent {
    /// Short name of the event kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::KeyPress(_) => "key_press",
            Self::KeyRelease(_) => "key_release",
            Self::FocusIn(_) => "focus_in",
            Self::FocusOut(_) => "focus_out",
            Self::PopupEnter(_) => "popup_enter",
            Self::PopupLeave(_) => "popup_leave",
            Self::SuggestionClick(_) => "suggestion_click",
        }
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::PopupEnter(base) | Self::PopupLeave(base) => base,
            Self::SuggestionClick(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::PopupEnter(base) | Self::PopupLeave(base) => base,
            Self::SuggestionClick(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Shorthand for a key press of `key`.
    pub fn key_press(key: Key) -> Self {
        Self::KeyPress(KeyPressEvent::new(key))
    }

    /// Shorthand for a key release of `key`.
    pub fn key_release(key: Key) -> Self {
        Self::KeyRelease(KeyReleaseEvent::new(key))
    }

    /// Shorthand for a focus in event.
    pub fn focus_in() -> Self {
        Self::FocusIn(FocusInEvent::new(FocusReason::Other))
    }

    /// Shorthand for a focus out event.
    pub fn focus_out() -> Self {
        Self::FocusOut(FocusOutEvent::new(FocusReason::Other))
    }

    /// Shorthand for pointer entering the suggestion list.
    pub fn popup_enter() -> Self {
        Self::PopupEnter(EventBase::new())
    }

    /// Shorthand for pointer leaving the suggestion list.
    pub fn popup_leave() -> Self {
        Self::PopupLeave(EventBase::new())
    }

    /// Shorthand for a click on suggestion row `index`.
    pub fn suggestion_click(index: usize) -> Self {
        Self::SuggestionClick(SuggestionClickEvent::new(index))
    }
}
