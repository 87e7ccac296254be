//! The autocomplete controller.
//!
//! [`Autocomplete`] owns the suggestion list, the open flag, the highlighted
//! index and the hover/blur bookkeeping, and moves between two resting modes:
//!
//! - **Idle**: the list is closed and nothing is highlighted.
//! - **Suggesting**: the list is open, non-empty, and exactly one suggestion
//!   is highlighted.
//!
//! Committing a suggestion is a transient step that always ends in Idle.
//!
//! # Event flow
//!
//! The host forwards keyboard, focus and pointer events through
//! [`Autocomplete::handle_event`] (or the matching `on_*` methods), renders
//! [`Autocomplete::view`] afterwards, and calls
//! [`Autocomplete::process_timers`] from its event loop so that deferred
//! closes can fire.
//!
//! # Blur and clicks
//!
//! Clicking a suggestion takes focus away from the input, and hosts may report
//! the blur before the click. Closing on blur right away would remove the row
//! under the pointer before the click lands, so a blur only schedules a close
//! after [`AutocompleteConfig::close_delay`]. When the timer fires the close is
//! skipped if the pointer is over the list at that moment. The delay is a
//! heuristic window: once the list has closed, clicks on its rows are ignored.
//! A delay too large to schedule disables the blur close altogether.
//!
//! # Example
//!
//! ```
//! use horizon_autocomplete::{Autocomplete, AutocompleteConfig, Key, TextInput};
//!
//! let input = TextInput::new();
//! let mut autocomplete =
//!     Autocomplete::new(AutocompleteConfig::new().items(["dog", "cat", "bird"]));
//! autocomplete.attach(input.clone());
//!
//! autocomplete.autocompleted.connect(|text| println!("Selected: {}", text));
//!
//! input.type_text("d");
//! autocomplete.on_key_release(Key::Character('d'));
//! assert!(autocomplete.is_opened());
//! assert_eq!(autocomplete.highlighted_text(), Some("dog"));
//!
//! autocomplete.on_key_release(Key::Enter);
//! assert!(!autocomplete.is_opened());
//! assert_eq!(autocomplete.value().as_deref(), Some("dog"));
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use horizon_autocomplete_core::{EventSpan, Signal, TimerManager};

use crate::config::AutocompleteConfig;
use crate::events::{AutocompleteEvent, Key};
use crate::host::HostInput;
use crate::matcher::{self, CaseSensitivity};
use crate::view::SuggestionView;

/// The resting modes of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteMode {
    /// List closed, nothing highlighted.
    Idle,
    /// List open with a highlighted suggestion.
    Suggesting,
}

/// Autocomplete controller for a single host text input.
///
/// # Signals
///
/// - `autocompleted(String)`: a suggestion was committed into the input
/// - `highlighted(String)`: the highlighted suggestion changed
/// - `opened_changed(bool)`: the list was opened or closed
/// - `suggestions_changed(Vec<String>)`: the suggestion list was replaced
pub struct Autocomplete {
    config: AutocompleteConfig,

    /// The host input, present between `attach` and `detach`.
    input: Option<Box<dyn HostInput>>,

    suggestions: Vec<String>,
    opened: bool,
    highlighted_index: Option<usize>,

    /// Pointer is over the suggestion list.
    hovering: bool,
    /// Input has lost focus and not regained it.
    blurred: bool,

    /// Pending deferred closes.
    timers: TimerManager,

    // Signals
    /// Signal emitted once per committed suggestion.
    pub autocompleted: Signal<String>,

    /// Signal emitted when the highlighted suggestion changes.
    pub highlighted: Signal<String>,

    /// Signal emitted when the list opens or closes.
    pub opened_changed: Signal<bool>,

    /// Signal emitted when the suggestion list is replaced.
    pub suggestions_changed: Signal<Vec<String>>,
}

impl Autocomplete {
    /// Create a controller with the given configuration and no host input.
    pub fn new(config: AutocompleteConfig) -> Self {
        Self {
            config,
            input: None,
            suggestions: Vec::new(),
            opened: false,
            highlighted_index: None,
            hovering: false,
            blurred: false,
            timers: TimerManager::new(),
            autocompleted: Signal::new(),
            highlighted: Signal::new(),
            opened_changed: Signal::new(),
            suggestions_changed: Signal::new(),
        }
    }

    /// Create a controller over `items` with default settings.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AutocompleteConfig::new().items(items))
    }

    // =========================================================================
    // Host Input
    // =========================================================================

    /// Bind the control to a host input, replacing any previous one.
    pub fn attach<I: HostInput + 'static>(&mut self, input: I) {
        if self.input.is_some() {
            self.detach();
        }
        self.input = Some(Box::new(input));
        tracing::debug!(target: "horizon_autocomplete::input", "host input attached");
    }

    /// Unbind the host input and return it.
    ///
    /// Pending deferred closes are cancelled and the control returns to Idle
    /// with its interaction flags cleared.
    pub fn detach(&mut self) -> Option<Box<dyn HostInput>> {
        self.timers.stop_all();
        self.close();
        self.hovering = false;
        self.blurred = false;
        let input = self.input.take();
        if input.is_some() {
            tracing::debug!(target: "horizon_autocomplete::input", "host input detached");
        }
        input
    }

    /// Whether a host input is attached.
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    /// The host input's current text, or `None` when no input is attached.
    pub fn value(&self) -> Option<String> {
        let value = self.input.as_ref().map(|input| input.value());
        if value.is_none() {
            tracing::warn!(
                target: "horizon_autocomplete::input",
                "value read with no host input attached"
            );
        }
        value
    }

    /// Write the host input's text without touching the suggestion state.
    ///
    /// Returns `false` (and does nothing) when no input is attached.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.input.as_mut() {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => {
                tracing::warn!(
                    target: "horizon_autocomplete::input",
                    "set_value ignored: no host input attached"
                );
                false
            }
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// The candidate items.
    pub fn items(&self) -> &[String] {
        &self.config.items
    }

    /// Replace the candidate items.
    ///
    /// Current suggestions are kept until the next text change.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.items = items.into_iter().map(Into::into).collect();
    }

    /// Set the maximum number of suggestions for subsequent matches.
    pub fn set_max_suggestions(&mut self, max: usize) {
        self.config.max_suggestions = max;
    }

    /// Set the delay applied to subsequently scheduled blur closes.
    pub fn set_close_delay(&mut self, delay: Duration) {
        self.config.close_delay = delay;
    }

    /// Set the case sensitivity for subsequent matches.
    pub fn set_case_sensitivity(&mut self, sensitivity: CaseSensitivity) {
        self.config.case_sensitivity = sensitivity;
    }

    // =========================================================================
    // Observable State
    // =========================================================================

    /// Whether the suggestion list is open.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// The current resting mode.
    pub fn mode(&self) -> AutocompleteMode {
        if self.opened {
            AutocompleteMode::Suggesting
        } else {
            AutocompleteMode::Idle
        }
    }

    /// The current suggestions. May be stale while the list is closed.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Text of the highlighted suggestion.
    pub fn highlighted_text(&self) -> Option<&str> {
        self.highlighted_index
            .and_then(|idx| self.suggestions.get(idx))
            .map(String::as_str)
    }

    /// Whether the pointer is over the suggestion list.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the input has lost focus.
    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    /// Snapshot for the rendering layer.
    pub fn view(&self) -> SuggestionView<'_> {
        SuggestionView::new(&self.suggestions, self.highlighted_index, self.opened)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open the suggestion list.
    ///
    /// Silently refused when there are no suggestions. Highlights the first
    /// suggestion if nothing is highlighted yet.
    pub fn open(&mut self) {
        if self.suggestions.is_empty() {
            tracing::trace!(
                target: "horizon_autocomplete::controller",
                "open refused: no suggestions"
            );
            return;
        }

        if !self.opened {
            self.opened = true;
            tracing::debug!(
                target: "horizon_autocomplete::controller",
                count = self.suggestions.len(),
                "opened"
            );
            self.opened_changed.emit(true);
        }

        if self.highlighted_index.is_none() {
            self.set_highlight(0);
        }
    }

    /// Close the suggestion list and clear the highlight.
    pub fn close(&mut self) {
        self.highlighted_index = None;
        if self.opened {
            self.opened = false;
            tracing::debug!(target: "horizon_autocomplete::controller", "closed");
            self.opened_changed.emit(false);
        }
    }

    /// Force a suggestion list, bypassing the matcher.
    ///
    /// Used for suggestions sourced outside the item set. The list is capped
    /// at `max_suggestions`; a non-empty list opens with the first entry
    /// highlighted, an empty one closes.
    pub fn suggest<I, S>(&mut self, suggestions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = suggestions
            .into_iter()
            .take(self.config.max_suggestions)
            .map(Into::into)
            .collect();
        self.replace_suggestions(list);
    }

    /// Commit `value` into the host input.
    ///
    /// Closes the list, clears the hover flag and emits `autocompleted`.
    /// Returns `false` (and changes nothing) when no input is attached.
    pub fn autocomplete(&mut self, value: &str) -> bool {
        let Some(input) = self.input.as_mut() else {
            tracing::warn!(
                target: "horizon_autocomplete::input",
                "commit ignored: no host input attached"
            );
            return false;
        };

        input.set_value(value);
        self.close();
        self.hovering = false;
        tracing::debug!(target: "horizon_autocomplete::controller", value, "committed");
        self.autocompleted.emit(value.to_string());
        true
    }

    /// Commit the highlighted suggestion, if any.
    pub fn commit_highlighted(&mut self) -> bool {
        match self.highlighted_text().map(str::to_owned) {
            Some(text) => self.autocomplete(&text),
            None => false,
        }
    }

    /// Recompute suggestions from the host input's current text.
    ///
    /// Does nothing when no input is attached.
    pub fn update_suggestions(&mut self) {
        let Some(input) = self.input.as_ref() else {
            tracing::warn!(
                target: "horizon_autocomplete::input",
                "text change ignored: no host input attached"
            );
            return;
        };

        let text = input.value();
        let matches = matcher::matches_with(
            &self.config.items,
            &text,
            self.config.max_suggestions,
            self.config.case_sensitivity,
        );
        self.replace_suggestions(matches);
    }

    /// Move the highlight one row up.
    ///
    /// Returns `true` if the highlight moved. No wrap-around.
    pub fn highlight_previous(&mut self) -> bool {
        match self.highlighted_index {
            Some(idx) if idx > 0 => {
                self.set_highlight(idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the highlight one row down.
    ///
    /// Returns `true` if the highlight moved. No wrap-around.
    pub fn highlight_next(&mut self) -> bool {
        match self.highlighted_index {
            Some(idx) if idx + 1 < self.suggestions.len() => {
                self.set_highlight(idx + 1);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch a host event.
    ///
    /// Returns whether the event was accepted, in which case the host must not
    /// apply its default effect.
    pub fn handle_event(&mut self, event: &mut AutocompleteEvent) -> bool {
        let _span = EventSpan::new(event.kind());

        let accepted = match event {
            AutocompleteEvent::KeyPress(e) => self.on_key_press(e.key),
            AutocompleteEvent::KeyRelease(e) => self.on_key_release(e.key),
            AutocompleteEvent::FocusIn(_) => {
                self.on_focus_in();
                false
            }
            AutocompleteEvent::FocusOut(_) => {
                self.on_focus_out();
                false
            }
            AutocompleteEvent::PopupEnter(_) => {
                self.on_popup_enter();
                false
            }
            AutocompleteEvent::PopupLeave(_) => {
                self.on_popup_leave();
                false
            }
            AutocompleteEvent::SuggestionClick(e) => self.on_suggestion_click(e.index),
        };

        if accepted {
            event.accept();
        }
        accepted
    }

    /// Key-down in the host input.
    ///
    /// Arrow up/down are always accepted so the host never moves the cursor or
    /// scrolls for them. Nothing else happens on key-down.
    pub fn on_key_press(&mut self, key: Key) -> bool {
        key.is_highlight_navigation()
    }

    /// Key-up in the host input.
    ///
    /// Returns whether the event was accepted.
    pub fn on_key_release(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowUp => {
                self.highlight_previous();
                true
            }
            Key::ArrowDown => {
                self.highlight_next();
                true
            }
            Key::Enter => self.commit_highlighted(),
            _ => {
                self.update_suggestions();
                false
            }
        }
    }

    /// The host input gained focus.
    pub fn on_focus_in(&mut self) {
        self.blurred = false;
        if !self.suggestions.is_empty() {
            self.open();
        }
    }

    /// The host input lost focus. Schedules a deferred close.
    pub fn on_focus_out(&mut self) {
        self.blurred = true;
        self.schedule_close();
    }

    /// The pointer entered the suggestion list.
    pub fn on_popup_enter(&mut self) {
        self.hovering = true;
    }

    /// The pointer left the suggestion list.
    ///
    /// If the input already lost focus, schedules a deferred close.
    pub fn on_popup_leave(&mut self) {
        self.hovering = false;
        if self.blurred {
            self.schedule_close();
        }
    }

    /// A suggestion row was clicked.
    ///
    /// Ignored while the list is closed or when the row is out of range.
    pub fn on_suggestion_click(&mut self, index: usize) -> bool {
        if !self.opened {
            tracing::trace!(
                target: "horizon_autocomplete::controller",
                index,
                "click on closed list ignored"
            );
            return false;
        }

        match self.suggestions.get(index).cloned() {
            Some(text) => self.autocomplete(&text),
            None => {
                tracing::trace!(
                    target: "horizon_autocomplete::controller",
                    index,
                    "click outside suggestion list ignored"
                );
                false
            }
        }
    }

    // =========================================================================
    // Deferred Close
    // =========================================================================

    /// Run deferred closes that are due now.
    ///
    /// Returns the number of timers that fired.
    pub fn process_timers(&mut self) -> usize {
        self.process_timers_at(Instant::now())
    }

    /// Run deferred closes that are due at `now`.
    pub fn process_timers_at(&mut self, now: Instant) -> usize {
        let fired = self.timers.process_expired_at(now);
        for _ in &fired {
            self.deferred_close();
        }
        fired.len()
    }

    /// How long the host may wait before calling
    /// [`process_timers`](Self::process_timers).
    pub fn time_until_next_timer(&mut self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Whether a deferred close is pending.
    pub fn has_pending_close(&self) -> bool {
        self.timers.active_count() > 0
    }

    fn schedule_close(&mut self) {
        match self.timers.start_one_shot(self.config.close_delay) {
            Ok(id) => tracing::debug!(
                target: "horizon_autocomplete::controller",
                ?id,
                delay_ms = self.config.close_delay.as_millis() as u64,
                "close scheduled"
            ),
            Err(err) => tracing::warn!(
                target: "horizon_autocomplete::controller",
                %err,
                "close not scheduled"
            ),
        }
    }

    /// Fire-time half of a blur close; the hover guard is read now, not when
    /// the close was scheduled.
    fn deferred_close(&mut self) {
        if self.hovering {
            tracing::debug!(
                target: "horizon_autocomplete::controller",
                "deferred close skipped: pointer over list"
            );
            return;
        }
        self.close();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn replace_suggestions(&mut self, suggestions: Vec<String>) {
        self.highlighted_index = None;
        self.suggestions = suggestions;
        self.suggestions_changed.emit(self.suggestions.clone());

        if self.suggestions.is_empty() {
            self.close();
        } else {
            self.open();
        }
    }

    fn set_highlight(&mut self, idx: usize) {
        self.highlighted_index = Some(idx);
        if let Some(text) = self.suggestions.get(idx) {
            self.highlighted.emit(text.clone());
        }
    }
}

impl fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("items_count", &self.config.items.len())
            .field("has_input", &self.input.is_some())
            .field("opened", &self.opened)
            .field("suggestions", &self.suggestions)
            .field("highlighted_index", &self.highlighted_index)
            .field("hovering", &self.hovering)
            .field("blurred", &self.blurred)
            .finish()
    }
}

static_assertions::assert_impl_all!(Autocomplete: Send);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::host::TextInput;

    fn setup(items: &[&str]) -> (Autocomplete, TextInput) {
        let input = TextInput::new();
        let mut autocomplete = Autocomplete::with_items(items.iter().copied());
        autocomplete.attach(input.clone());
        (autocomplete, input)
    }

    fn type_text(autocomplete: &mut Autocomplete, input: &TextInput, text: &str) {
        for c in text.chars() {
            input.type_text(&c.to_string());
            autocomplete.on_key_release(Key::Character(c));
        }
    }

    #[test]
    fn test_typing_opens_with_first_highlighted() {
        let (mut autocomplete, input) = setup(&["dog", "cat", "bird"]);

        type_text(&mut autocomplete, &input, "d");

        assert_eq!(autocomplete.suggestions(), ["dog"]);
        assert!(autocomplete.is_opened());
        assert_eq!(autocomplete.mode(), AutocompleteMode::Suggesting);
        assert_eq!(autocomplete.highlighted_index(), Some(0));
    }

    #[test]
    fn test_no_match_goes_idle() {
        let (mut autocomplete, input) = setup(&["dog", "cat"]);

        type_text(&mut autocomplete, &input, "d");
        assert!(autocomplete.is_opened());

        type_text(&mut autocomplete, &input, "x");
        assert!(!autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), None);
        assert!(autocomplete.suggestions().is_empty());
        assert_eq!(autocomplete.mode(), AutocompleteMode::Idle);
    }

    #[test]
    fn test_clearing_text_closes() {
        let (mut autocomplete, input) = setup(&["dog"]);

        type_text(&mut autocomplete, &input, "d");
        input.backspace();
        autocomplete.on_key_release(Key::Backspace);

        assert!(!autocomplete.is_opened());
        assert!(autocomplete.suggestions().is_empty());
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let (mut autocomplete, input) = setup(&["dog", "doge", "dot"]);
        type_text(&mut autocomplete, &input, "do");

        assert!(!autocomplete.highlight_previous());
        assert_eq!(autocomplete.highlighted_index(), Some(0));

        assert!(autocomplete.highlight_next());
        assert!(autocomplete.highlight_next());
        assert!(!autocomplete.highlight_next());
        assert!(!autocomplete.highlight_next());
        assert_eq!(autocomplete.highlighted_index(), Some(2));
    }

    #[test]
    fn test_navigation_without_highlight_is_noop() {
        let (mut autocomplete, _input) = setup(&["dog"]);

        assert!(!autocomplete.highlight_next());
        assert!(!autocomplete.highlight_previous());
        assert_eq!(autocomplete.highlighted_index(), None);
    }

    #[test]
    fn test_arrow_keys_always_accepted() {
        let (mut autocomplete, _input) = setup(&["dog"]);

        // Nothing to navigate, yet the keys are still consumed.
        assert!(autocomplete.on_key_press(Key::ArrowUp));
        assert!(autocomplete.on_key_press(Key::ArrowDown));
        assert!(autocomplete.on_key_release(Key::ArrowUp));
        assert!(autocomplete.on_key_release(Key::ArrowDown));
        assert!(!autocomplete.on_key_press(Key::Enter));
        assert!(!autocomplete.on_key_press(Key::Character('d')));
    }

    #[test]
    fn test_highlight_resets_on_new_suggestions() {
        let (mut autocomplete, input) = setup(&["dog", "doge", "dot"]);
        type_text(&mut autocomplete, &input, "do");
        autocomplete.highlight_next();
        assert_eq!(autocomplete.highlighted_text(), Some("doge"));

        // "doge" is still a suggestion for "dog", but the highlight restarts.
        type_text(&mut autocomplete, &input, "g");
        assert_eq!(autocomplete.suggestions(), ["doge"]);
        assert_eq!(autocomplete.highlighted_index(), Some(0));
    }

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let (mut autocomplete, input) = setup(&["dog"]);
        let fired = Arc::new(Mutex::new(0));
        let fired_clone = fired.clone();
        autocomplete.autocompleted.connect(move |_| *fired_clone.lock() += 1);

        input.type_text("do");
        assert!(!autocomplete.on_key_release(Key::Enter));
        assert_eq!(input.value(), "do");
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_open_refused_when_empty() {
        let (mut autocomplete, _input) = setup(&["dog"]);
        let opened = Arc::new(Mutex::new(Vec::new()));
        let opened_clone = opened.clone();
        autocomplete
            .opened_changed
            .connect(move |&value| opened_clone.lock().push(value));

        autocomplete.open();
        assert!(!autocomplete.is_opened());
        assert!(opened.lock().is_empty());
    }

    #[test]
    fn test_close_and_reopen() {
        let (mut autocomplete, input) = setup(&["dog", "doge"]);
        type_text(&mut autocomplete, &input, "d");
        autocomplete.highlight_next();

        autocomplete.close();
        assert!(!autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), None);
        assert_eq!(autocomplete.suggestions().len(), 2);

        autocomplete.open();
        assert!(autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), Some(0));
    }

    #[test]
    fn test_suggest_forces_list() {
        let (mut autocomplete, _input) = setup(&[]);
        autocomplete.set_max_suggestions(2);

        autocomplete.suggest(["remote1", "remote2", "remote3"]);
        assert_eq!(autocomplete.suggestions(), ["remote1", "remote2"]);
        assert!(autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), Some(0));

        autocomplete.suggest(Vec::<String>::new());
        assert!(!autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), None);
    }

    #[test]
    fn test_click_commits_value() {
        let (mut autocomplete, input) = setup(&["dog", "doge", "dot"]);
        let committed = Arc::new(Mutex::new(Vec::new()));
        let committed_clone = committed.clone();
        autocomplete
            .autocompleted
            .connect(move |text| committed_clone.lock().push(text.clone()));

        type_text(&mut autocomplete, &input, "do");
        autocomplete.on_popup_enter();
        assert!(autocomplete.on_suggestion_click(2));

        assert_eq!(input.value(), "dot");
        assert!(!autocomplete.is_opened());
        assert!(!autocomplete.is_hovering());
        assert_eq!(*committed.lock(), vec!["dot".to_string()]);
    }

    #[test]
    fn test_click_out_of_range_ignored() {
        let (mut autocomplete, input) = setup(&["dog"]);
        type_text(&mut autocomplete, &input, "d");

        assert!(!autocomplete.on_suggestion_click(5));
        assert!(autocomplete.is_opened());
        assert_eq!(input.value(), "d");
    }

    #[test]
    fn test_focus_reopens_last_suggestions() {
        let (mut autocomplete, input) = setup(&["dog", "doge"]);
        autocomplete.set_close_delay(Duration::ZERO);
        type_text(&mut autocomplete, &input, "d");

        autocomplete.on_focus_out();
        assert!(autocomplete.is_blurred());
        assert_eq!(autocomplete.process_timers_at(Instant::now()), 1);
        assert!(!autocomplete.is_opened());

        autocomplete.on_focus_in();
        assert!(!autocomplete.is_blurred());
        assert!(autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_text(), Some("dog"));
    }

    #[test]
    fn test_focus_without_suggestions_stays_idle() {
        let (mut autocomplete, _input) = setup(&["dog"]);
        autocomplete.on_focus_in();
        assert!(!autocomplete.is_opened());
    }

    #[test]
    fn test_blur_close_waits_for_delay() {
        let (mut autocomplete, input) = setup(&["dog"]);
        type_text(&mut autocomplete, &input, "d");

        autocomplete.on_focus_out();
        assert!(autocomplete.is_opened());
        assert!(autocomplete.has_pending_close());
        assert!(autocomplete.time_until_next_timer().is_some());

        assert_eq!(autocomplete.process_timers_at(Instant::now()), 0);
        assert!(autocomplete.is_opened());

        let later = Instant::now() + autocomplete.config().close_delay;
        assert_eq!(autocomplete.process_timers_at(later), 1);
        assert!(!autocomplete.is_opened());
        assert!(!autocomplete.has_pending_close());
    }

    #[test]
    fn test_hover_guard_read_at_fire_time() {
        let (mut autocomplete, input) = setup(&["dog"]);
        autocomplete.set_close_delay(Duration::ZERO);
        type_text(&mut autocomplete, &input, "d");

        // Blur while not hovering, then hover before the timer fires.
        autocomplete.on_focus_out();
        autocomplete.on_popup_enter();
        autocomplete.process_timers_at(Instant::now());
        assert!(autocomplete.is_opened());

        // Leaving the list after the blur schedules another close.
        autocomplete.on_popup_leave();
        assert!(autocomplete.has_pending_close());
        autocomplete.process_timers_at(Instant::now());
        assert!(!autocomplete.is_opened());
    }

    #[test]
    fn test_unschedulable_delay_keeps_list_open() {
        let (mut autocomplete, input) = setup(&["dog", "doge"]);
        autocomplete.set_close_delay(Duration::MAX);
        type_text(&mut autocomplete, &input, "d");

        autocomplete.on_focus_out();
        assert!(autocomplete.is_blurred());
        assert!(!autocomplete.has_pending_close());
        assert_eq!(autocomplete.time_until_next_timer(), None);

        autocomplete.on_popup_enter();
        autocomplete.on_popup_leave();
        assert!(!autocomplete.has_pending_close());
        assert!(autocomplete.is_opened());

        // The control is still usable.
        assert!(autocomplete.on_suggestion_click(1));
        assert_eq!(input.value(), "doge");
    }

    #[test]
    fn test_click_after_close_ignored() {
        let (mut autocomplete, input) = setup(&["dog"]);
        autocomplete.set_close_delay(Duration::ZERO);
        type_text(&mut autocomplete, &input, "d");

        autocomplete.on_focus_out();
        autocomplete.process_timers_at(Instant::now());
        assert!(!autocomplete.is_opened());
        assert_eq!(autocomplete.suggestions(), ["dog"]);

        assert!(!autocomplete.on_suggestion_click(0));
        assert_eq!(input.value(), "d");
    }

    #[test]
    fn test_popup_leave_while_focused_keeps_open() {
        let (mut autocomplete, input) = setup(&["dog"]);
        type_text(&mut autocomplete, &input, "d");

        autocomplete.on_popup_enter();
        autocomplete.on_popup_leave();
        assert!(!autocomplete.has_pending_close());
        assert!(autocomplete.is_opened());
    }

    #[test]
    fn test_missing_input_degrades_to_noop() {
        let mut autocomplete = Autocomplete::with_items(["dog"]);
        let fired = Arc::new(Mutex::new(0));
        let fired_clone = fired.clone();
        autocomplete.autocompleted.connect(move |_| *fired_clone.lock() += 1);

        autocomplete.on_key_release(Key::Character('d'));
        assert!(autocomplete.suggestions().is_empty());

        autocomplete.suggest(["dog"]);
        assert!(!autocomplete.on_key_release(Key::Enter));
        assert!(!autocomplete.autocomplete("dog"));
        assert!(!autocomplete.set_value("dog"));
        assert_eq!(autocomplete.value(), None);

        // State is preserved rather than torn down.
        assert!(autocomplete.is_opened());
        assert_eq!(autocomplete.highlighted_index(), Some(0));
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_detach_cancels_pending_close() {
        let (mut autocomplete, input) = setup(&["dog"]);
        type_text(&mut autocomplete, &input, "d");
        autocomplete.on_focus_out();

        let detached = autocomplete.detach();
        assert!(detached.is_some());
        assert!(!autocomplete.has_input());
        assert!(!autocomplete.has_pending_close());
        assert!(!autocomplete.is_opened());
        assert!(!autocomplete.is_blurred());
    }

    #[test]
    fn test_signals_track_transitions() {
        let (mut autocomplete, input) = setup(&["dog", "doge"]);
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_clone = log.clone();
        autocomplete
            .highlighted
            .connect(move |text| log_clone.lock().push(format!("highlight {text}")));
        let log_clone = log.clone();
        autocomplete
            .opened_changed
            .connect(move |opened| log_clone.lock().push(format!("opened {opened}")));
        let log_clone = log.clone();
        autocomplete
            .suggestions_changed
            .connect(move |list| log_clone.lock().push(format!("suggestions {}", list.len())));

        type_text(&mut autocomplete, &input, "d");
        autocomplete.highlight_next();
        autocomplete.on_key_release(Key::Enter);

        assert_eq!(
            *log.lock(),
            vec![
                "suggestions 2",
                "opened true",
                "highlight dog",
                "highlight doge",
                "opened false",
            ]
        );
        assert_eq!(input.value(), "doge");
    }

    #[test]
    fn test_handle_event_marks_accepted() {
        let (mut autocomplete, input) = setup(&["dog", "doge"]);
        input.type_text("d");

        let mut event = AutocompleteEvent::key_release(Key::Character('d'));
        assert!(!autocomplete.handle_event(&mut event));
        assert!(!event.is_accepted());

        let mut event = AutocompleteEvent::key_press(Key::ArrowDown);
        assert!(autocomplete.handle_event(&mut event));
        assert!(event.is_accepted());

        let mut event = AutocompleteEvent::key_release(Key::ArrowDown);
        assert!(autocomplete.handle_event(&mut event));
        assert_eq!(autocomplete.highlighted_text(), Some("doge"));

        let mut event = AutocompleteEvent::key_release(Key::Enter);
        assert!(autocomplete.handle_event(&mut event));
        assert!(event.is_accepted());
        assert_eq!(input.value(), "doge");
    }

    #[test]
    fn test_case_sensitivity_setting() {
        let (mut autocomplete, input) = setup(&["Dog", "dot"]);
        autocomplete.set_case_sensitivity(CaseSensitivity::CaseSensitive);

        type_text(&mut autocomplete, &input, "D");
        assert_eq!(autocomplete.suggestions(), ["Dog"]);
    }
}
