//! `[label](target)` links.

use crate::error::Result;
use crate::node::Node;
use crate::parser::ParseContext;
use crate::rule::MarkupRule;

/// Matches `[label](target)`.
///
/// Brackets inside the label and parentheses inside the target must balance.
/// The label is parsed as markup; the target is kept verbatim for the renderer
/// to interpret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HyperlinkRule;

impl MarkupRule for HyperlinkRule {
    fn trigger_length(&self) -> usize {
        // `[]()`
        4
    }

    fn parse(&self, input: &str, cx: &ParseContext<'_>) -> Result<Option<Node>> {
        let Some(body) = input.strip_prefix('[') else {
            return Ok(None);
        };
        let Some(label_end) = find_closing(body, '[', ']') else {
            return Ok(None);
        };
        let Some(target_body) = body[label_end + 1..].strip_prefix('(') else {
            return Ok(None);
        };
        let Some(target_end) = find_closing(target_body, '(', ')') else {
            return Ok(None);
        };

        let children = cx.parse(&body[..label_end])?;
        Ok(Some(Node::hyperlink(&target_body[..target_end], children)))
    }
}

/// Byte offset of the `close` that balances an already consumed `open`.
pub(crate) fn find_closing(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            if depth == 0 {
                return Some(offset);
            }
            depth -= 1;
        }
    }
    None
}
