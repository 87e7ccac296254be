//! Read-only snapshot of the suggestion list for the rendering layer.
//!
//! Rendering is the host's job. It asks the control for a [`SuggestionView`]
//! after each event and draws the rows, marking the highlighted one. Indices
//! in the view are the indices the host reports back in
//! [`SuggestionClickEvent`](crate::events::SuggestionClickEvent).

/// One row of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRow<'a> {
    /// Position in the suggestion list.
    pub index: usize,
    /// Suggestion text.
    pub text: &'a str,
    /// Whether this row is the highlighted one.
    pub highlighted: bool,
}

/// A borrowed view of the control's current suggestion state.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionView<'a> {
    suggestions: &'a [String],
    highlighted: Option<usize>,
    visible: bool,
}

impl<'a> SuggestionView<'a> {
    pub(crate) fn new(
        suggestions: &'a [String],
        highlighted: Option<usize>,
        visible: bool,
    ) -> Self {
        Self {
            suggestions,
            highlighted,
            visible,
        }
    }

    /// Whether the list should be shown at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Index of the highlighted row, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Iterate over the rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = SuggestionRow<'a>> + 'a {
        let highlighted = self.highlighted;
        self.suggestions
            .iter()
            .enumerate()
            .map(move |(index, text)| SuggestionRow {
                index,
                text,
                highlighted: highlighted == Some(index),
            })
    }
}
