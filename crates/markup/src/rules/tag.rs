//! Angle-bracket tags.

use crate::error::Result;
use crate::node::{char_len, Node};
use crate::parser::ParseContext;
use crate::rule::MarkupRule;

/// Matches tags with one specific key.
///
/// Recognised forms, tried in this order:
///
/// | Source | Node |
/// |---|---|
/// | `<key />` | empty tag, space before the closer |
/// | `<key/>` | empty tag |
/// | `<key >...</key>` | tag, space before `>` |
/// | `<key>...</key>` | tag |
/// | `<key attrs>...</key>` | tag with attributes |
/// | `<key attrs\>` | empty tag with attributes |
///
/// Attributes run up to the next `>`. Content ends at the first `</key>` that
/// is not part of a nested match, so nested tags with the same key balance.
/// A tag whose closer never appears does not match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRule {
    key: String,
    closer: String,
}

impl TagRule {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let closer = format!("</{key}>");
        Self { key, closer }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn enclose(
        &self,
        body: &str,
        space_before: bool,
        attributes: Option<&str>,
        cx: &ParseContext<'_>,
    ) -> Result<Option<Node>> {
        if !body.contains(self.closer.as_str()) {
            return Ok(None);
        }
        let Some(children) = cx.parse_until(body, &self.closer)? else {
            return Ok(None);
        };
        Ok(Some(Node::tag(
            self.key.as_str(),
            children,
            space_before,
            attributes.map(str::to_string),
        )))
    }
}

impl MarkupRule for TagRule {
    fn trigger_length(&self) -> usize {
        // `<key/>`
        char_len(&self.key) + 3
    }

    fn parse(&self, input: &str, cx: &ParseContext<'_>) -> Result<Option<Node>> {
        let Some(rest) = input
            .strip_prefix('<')
            .and_then(|rest| rest.strip_prefix(self.key.as_str()))
        else {
            return Ok(None);
        };

        if rest.starts_with(" />") {
            return Ok(Some(Node::empty_tag(self.key.as_str(), true, None)));
        }
        if rest.starts_with("/>") {
            return Ok(Some(Node::empty_tag(self.key.as_str(), false, None)));
        }
        if let Some(body) = rest.strip_prefix(" >") {
            return self.enclose(body, true, None, cx);
        }
        if let Some(body) = rest.strip_prefix('>') {
            return self.enclose(body, false, None, cx);
        }

        let Some(attributed) = rest.strip_prefix(' ') else {
            return Ok(None);
        };
        let Some(end) = attributed.find('>') else {
            return Ok(None);
        };
        let attributes = &attributed[..end];
        if let Some(attributes) = attributes.strip_suffix('\\') {
            return Ok(Some(Node::empty_tag(
                self.key.as_str(),
                true,
                Some(attributes.to_string()),
            )));
        }
        self.enclose(&attributed[end + 1..], true, Some(attributes), cx)
    }
}
