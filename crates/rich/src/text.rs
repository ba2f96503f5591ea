//! RichText result type.
//!
//! This is what [`RichRenderer`](crate::RichRenderer) produces for one line.

use crate::action::ClickAction;
use crate::span::Span;
use crate::style::Style;

/// Rendered text with styled regions.
///
/// Contains the plain text (with markup stripped) and a list of
/// non-overlapping spans, in order, that define styled regions.
///
/// # Examples
///
/// ```
/// use rich::{Modifiers, RichText, Style};
///
/// let mut text = RichText::default();
/// text.push("Hello", Style::modifiers(Modifiers::BOLD), None);
/// text.push(" World", Style::default(), None);
/// assert_eq!(text.text(), "Hello World");
/// assert_eq!(text.spans().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    /// Plain text with all markup stripped.
    text: String,
    /// Style spans referencing positions in `text`.
    spans: Vec<Span>,
}

impl RichText {
    /// Create a RichText from plain text (no spans).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Append text with a style and optional click action.
    ///
    /// Unstyled text gets no span. A span that continues the previous one
    /// with the same look is merged into it.
    pub fn push(&mut self, text: &str, style: Style, action: Option<ClickAction>) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);

        let span = Span::with_action(start, self.text.len(), style, action);
        if span.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.continues_into(&span) => last.end = span.end,
            _ => self.spans.push(span),
        }
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns true if there are no spans (plain text only).
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the style at a specific byte offset.
    pub fn style_at(&self, offset: usize) -> Style {
        self.span_at(offset)
            .map(|span| span.style)
            .unwrap_or_default()
    }

    /// Get the span containing a specific byte offset.
    pub fn span_at(&self, offset: usize) -> Option<&Span> {
        self.spans.iter().find(|span| span.contains(offset))
    }

    /// Iterate over styled segments.
    ///
    /// Yields `(text_slice, style, action)` for each span and for the
    /// unstyled text between spans, in order.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator {
            text: self,
            pos: 0,
            next_span: 0,
        }
    }
}

/// Iterator over styled segments in RichText.
pub struct SegmentIterator<'a> {
    text: &'a RichText,
    pos: usize,
    next_span: usize,
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, Style, Option<&'a ClickAction>);

    fn next(&mut self) -> Option<Self::Item> {
        let text = &self.text.text;
        if self.pos >= text.len() {
            return None;
        }

        match self.text.spans.get(self.next_span) {
            Some(span) if span.start == self.pos => {
                self.next_span += 1;
                self.pos = span.end;
                Some((&text[span.start..span.end], span.style, span.action.as_ref()))
            }
            Some(span) => {
                let start = self.pos;
                self.pos = span.start;
                Some((&text[start..span.start], Style::default(), None))
            }
            None => {
                let start = self.pos;
                self.pos = text.len();
                Some((&text[start..], Style::default(), None))
            }
        }
    }
}
