//! Symmetric delimiter rule.

use crate::error::Result;
use crate::node::{char_len, Node};
use crate::parser::ParseContext;
use crate::rule::MarkupRule;

/// Matches text wrapped in a delimiter, e.g. `*` for `*italic*`.
///
/// The span closes at the next occurrence of the delimiter that is not
/// preceded by a backslash. An inner occurrence of the same delimiter closes
/// the outer span; other delimiters nest freely because the interior is parsed
/// on its own. Empty spans and spans without a closer do not match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketRule {
    delimiter: String,
}

impl BracketRule {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl MarkupRule for BracketRule {
    fn trigger_length(&self) -> usize {
        2 * char_len(&self.delimiter) + 1
    }

    fn parse(&self, input: &str, cx: &ParseContext<'_>) -> Result<Option<Node>> {
        let delimiter = self.delimiter.as_str();
        if delimiter.is_empty() {
            return Ok(None);
        }
        let Some(body) = input.strip_prefix(delimiter) else {
            return Ok(None);
        };
        let Some(end) = find_unescaped(body, delimiter) else {
            return Ok(None);
        };
        if end == 0 {
            return Ok(None);
        }

        let children = cx.parse(&body[..end])?;
        Ok(Some(Node::symbol(delimiter, children)))
    }
}

/// Byte offset of the first `needle` in `haystack` not preceded by `\`.
pub(crate) fn find_unescaped(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(offset, _)| offset)
        .find(|&offset| {
            haystack[offset..].starts_with(needle) && !haystack[..offset].ends_with('\\')
        })
}
