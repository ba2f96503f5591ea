//! Span type for styled regions in rendered text.

use crate::action::ClickAction;
use crate::style::Style;

/// A styled region within rendered text.
///
/// Spans reference byte positions in the plain text and never overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Start byte offset (inclusive) in the plain text.
    pub start: usize,
    /// End byte offset (exclusive) in the plain text.
    pub end: usize,
    /// Style to apply to this region.
    pub style: Style,
    /// Action run when the region is clicked.
    pub action: Option<ClickAction>,
}

impl Span {
    /// Create a new span with just style (no action).
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self {
            start,
            end,
            style,
            action: None,
        }
    }

    /// Create a new span with style and click action.
    pub fn with_action(start: usize, end: usize, style: Style, action: Option<ClickAction>) -> Self {
        Self {
            start,
            end,
            style,
            action,
        }
    }

    /// Returns true if this span has no styling or action.
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.action.is_none()
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether `other` starts where this span ends and looks the same.
    pub(crate) fn continues_into(&self, other: &Span) -> bool {
        self.end == other.start && self.style == other.style && self.action == other.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Modifiers;

    #[test]
    fn span_len() {
        let span = Span::new(5, 10, Style::default());
        assert_eq!(span.len(), 5);

        let empty = Span::new(5, 5, Style::default());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn span_contains() {
        let span = Span::new(5, 10, Style::default());
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn span_is_empty() {
        assert!(Span::new(0, 3, Style::default()).is_empty());
        assert!(!Span::new(0, 3, Style::modifiers(Modifiers::BOLD)).is_empty());
        let link = Span::with_action(
            0,
            3,
            Style::default(),
            Some(ClickAction::ChangePage("2".into())),
        );
        assert!(!link.is_empty());
    }

    #[test]
    fn continuation() {
        let bold = Style::modifiers(Modifiers::BOLD);
        let a = Span::new(0, 3, bold);
        assert!(a.continues_into(&Span::new(3, 5, bold)));
        assert!(!a.continues_into(&Span::new(4, 5, bold)));
        assert!(!a.continues_into(&Span::new(3, 5, Style::default())));
    }
}
