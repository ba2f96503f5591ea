//! The rule engine.
//!
//! A [`RuleSet`] is an ordered list of [`MarkupRule`]s. At each cursor
//! position the parser asks the set for a match; the first rule that returns
//! a node wins.

use std::fmt;

use crate::error::Result;
use crate::node::Node;
use crate::parser::ParseContext;
use crate::rules::{BracketRule, HyperlinkRule, TagRule};

/// A pluggable matcher for one markup construct.
///
/// Rules are stateless. They may call back into the parser through the
/// [`ParseContext`] to parse nested content, and the same rule may be
/// re-entered while it is still matching.
pub trait MarkupRule: fmt::Debug + Send + Sync {
    /// The shortest remaining input, in characters, this rule can match.
    ///
    /// Only used to skip hopeless attempts.
    fn trigger_length(&self) -> usize {
        1
    }

    /// Try to match at the start of `input`.
    ///
    /// Returns `Ok(None)` when the rule does not apply. The returned node's
    /// `true_length` must equal the number of characters it consumed.
    fn parse(&self, input: &str, cx: &ParseContext<'_>) -> Result<Option<Node>>;
}

/// An ordered collection of rules.
///
/// # Examples
///
/// ```
/// use markup::{BracketRule, MarkupParser, ParserConfig, RuleSet};
///
/// let rules = RuleSet::new().with(BracketRule::new("*"));
/// let parser = MarkupParser::new(rules, ParserConfig::default());
/// let root = parser.parse("*hi*").unwrap();
/// assert_eq!(root.children().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn MarkupRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules understood by infobook pages.
    ///
    /// Longer delimiters come before their prefixes so `**` is not read as
    /// two empty `*` spans.
    pub fn infobook() -> Self {
        RuleSet::new()
            .with(BracketRule::new("**")) // Bold
            .with(BracketRule::new("*")) // Italics
            .with(BracketRule::new("__")) // Underline
            .with(BracketRule::new("~~")) // Strikethrough
            .with(BracketRule::new("||")) // Obfuscated
            .with(HyperlinkRule)
            .with(TagRule::new("color"))
            .with(TagRule::new("c"))
            .with(TagRule::new("formatting"))
            .with(TagRule::new("f"))
    }

    /// Append a rule, returning the set.
    pub fn with(mut self, rule: impl MarkupRule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: impl MarkupRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn MarkupRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Return the node produced by the first rule that matches at the start of
    /// `input`, if any.
    pub fn match_at(&self, input: &str, cx: &ParseContext<'_>) -> Result<Option<Node>> {
        for rule in &self.rules {
            if !has_chars(input, rule.trigger_length()) {
                continue;
            }
            if let Some(node) = rule.parse(input, cx)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }
}

/// Whether `input` holds at least `count` characters.
fn has_chars(input: &str, count: usize) -> bool {
    count == 0 || input.chars().nth(count - 1).is_some()
}
