//! The parser driver.
//!
//! [`MarkupParser::parse`] walks the input left to right. At each position it
//! asks the rule set for a match; matched nodes are appended and the cursor
//! jumps past them, everything else accumulates into literal text.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::config::ParserConfig;
use crate::error::{MarkupError, Result};
use crate::node::{char_len, Node};
use crate::rule::RuleSet;

/// A configured markup parser.
///
/// The rule set and limits are fixed at construction, so one parser can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use markup::MarkupParser;
///
/// let parser = MarkupParser::default();
/// let root = parser.parse("**bold** text").unwrap();
/// assert_eq!(root.to_string(), "**bold** text");
/// assert_eq!(root.length(), 9);
/// ```
#[derive(Debug)]
pub struct MarkupParser {
    rules: RuleSet,
    config: ParserConfig,
}

static DEFAULT_PARSER: Lazy<MarkupParser> = Lazy::new(MarkupParser::default);

/// A shared parser with the infobook rules and default limits.
pub fn default_parser() -> &'static MarkupParser {
    &DEFAULT_PARSER
}

impl MarkupParser {
    /// Create a parser from a rule set and limits.
    pub fn new(rules: RuleSet, config: ParserConfig) -> Self {
        Self { rules, config }
    }

    /// Create a parser with the given rules and default limits.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::new(rules, ParserConfig::default())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one line of markup into a [`Node::Root`].
    ///
    /// Malformed constructs come back as literal text. The only errors are
    /// the configured limits being exceeded.
    pub fn parse(&self, input: &str) -> Result<Node> {
        let len = char_len(input);
        if len > self.config.max_input_len {
            log::debug!(
                "rejecting input of {} chars (limit {})",
                len,
                self.config.max_input_len
            );
            return Err(MarkupError::InputTooLarge {
                len,
                limit: self.config.max_input_len,
            });
        }

        let state = ParseState {
            parser: self,
            source: input,
            steps: Cell::new(0),
            unclosed: RefCell::default(),
        };
        let cx = ParseContext {
            state: &state,
            depth: 0,
        };
        let scan = cx.scan(input, None)?;
        Ok(Node::Root(scan.nodes))
    }

    /// Truncate a line returned by [`parse`](Self::parse) to at most
    /// `max_length` rendered characters, such that parsing the rendered
    /// result gives back exactly the truncated tree.
    ///
    /// Starts from [`Node::truncate`] and shortens further while the cut
    /// reads back differently under this parser's rules. Falls back to an
    /// empty root.
    pub fn truncate(&self, root: &Node, max_length: usize) -> Result<Node> {
        let mut budget = max_length.min(root.length());
        loop {
            let cut = root.truncate(budget);
            let expected = match &cut {
                Node::Root(children) => children.as_slice(),
                other => std::slice::from_ref(other),
            };
            if self.parse(&cut.render())?.children() == expected {
                return Ok(cut);
            }
            let Some(shorter) = cut.length().checked_sub(1) else {
                log::debug!("no prefix of {:?} reads back, truncating to nothing", root.render());
                return Ok(Node::root(Vec::new()));
            };
            log::trace!("cut at {} reads back differently, trying {}", budget, shorter);
            budget = shorter;
        }
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new(RuleSet::infobook(), ParserConfig::default())
    }
}

/// Bookkeeping shared by every context of a single parse call.
#[derive(Debug)]
struct ParseState<'p> {
    parser: &'p MarkupParser,
    /// The whole line being parsed.
    source: &'p str,
    steps: Cell<usize>,
    /// Slices of `source`, as `(offset, len)`, already scanned for a closer
    /// without finding it. Keyed by closer.
    unclosed: RefCell<HashMap<String, HashSet<(usize, usize)>>>,
}

impl ParseState<'_> {
    /// Position of `input` within the line, if it is a slice of it.
    fn slice_key(&self, input: &str) -> Option<(usize, usize)> {
        let offset = (input.as_ptr() as usize).checked_sub(self.source.as_ptr() as usize)?;
        (offset + input.len() <= self.source.len()).then_some((offset, input.len()))
    }

    fn is_unclosed(&self, closer: &str, key: (usize, usize)) -> bool {
        self.unclosed
            .borrow()
            .get(closer)
            .is_some_and(|seen| seen.contains(&key))
    }

    fn mark_unclosed(&self, closer: &str, key: (usize, usize)) {
        self.unclosed
            .borrow_mut()
            .entry(closer.to_string())
            .or_default()
            .insert(key);
    }
}

/// Handle through which rules parse nested content.
///
/// Every nested call goes one level deeper; exceeding
/// [`ParserConfig::max_depth`] aborts the whole parse with
/// [`MarkupError::TooDeep`].
#[derive(Clone, Copy, Debug)]
pub struct ParseContext<'p> {
    state: &'p ParseState<'p>,
    depth: usize,
}

/// Result of driving the parser over some input.
struct Scan {
    nodes: Vec<Node>,
    /// Byte offset where the closing sequence was found, if one was requested.
    closed_at: Option<usize>,
}

impl<'p> ParseContext<'p> {
    /// Nesting depth of this context; zero for the top-level line.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parse `input` completely, as the interior of some construct.
    pub fn parse(&self, input: &str) -> Result<Vec<Node>> {
        Ok(self.descend()?.scan(input, None)?.nodes)
    }

    /// Parse `input` up to the first `closer` that is not consumed by a
    /// nested match.
    ///
    /// Nested constructs are skipped whole, so a closer inside them (for
    /// example the `</c>` of an inner `<c>` tag) does not end the scan.
    /// Returns `None` when the input runs out before a closer is found.
    ///
    /// A failed scan is remembered for the rest of the parse, so unclosed
    /// openers cost one scan each instead of one per enclosing attempt.
    pub fn parse_until(&self, input: &str, closer: &str) -> Result<Option<Vec<Node>>> {
        let key = self.state.slice_key(input);
        if key.is_some_and(|key| self.state.is_unclosed(closer, key)) {
            log::trace!("depth {}: {:?} known to be unclosed", self.depth, closer);
            return Ok(None);
        }

        let scan = self.descend()?.scan(input, Some(closer))?;
        if scan.closed_at.is_none() {
            if let Some(key) = key {
                self.state.mark_unclosed(closer, key);
            }
        }
        Ok(scan.closed_at.map(|_| scan.nodes))
    }

    /// Ask the rule set for a match at the start of `input`, one level deeper.
    pub fn match_rules(&self, input: &str) -> Result<Option<Node>> {
        let cx = self.descend()?;
        cx.step()?;
        cx.state.parser.rules.match_at(input, &cx)
    }

    fn descend(&self) -> Result<Self> {
        let depth = self.depth + 1;
        let limit = self.state.parser.config.max_depth;
        if depth > limit {
            log::debug!("nesting depth {} exceeds limit {}", depth, limit);
            return Err(MarkupError::TooDeep { limit });
        }
        Ok(Self {
            state: self.state,
            depth,
        })
    }

    fn step(&self) -> Result<()> {
        let steps = self.state.steps.get() + 1;
        let limit = self.state.parser.config.max_steps;
        if steps > limit {
            log::debug!("rule attempts exceed limit {}", limit);
            return Err(MarkupError::TooManySteps { limit });
        }
        self.state.steps.set(steps);
        Ok(())
    }

    fn scan(&self, input: &str, closer: Option<&str>) -> Result<Scan> {
        let mut nodes = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            if closer.is_some_and(|closer| rest.starts_with(closer)) {
                flush_literal(&mut literal, &mut nodes);
                return Ok(Scan {
                    nodes,
                    closed_at: Some(pos),
                });
            }

            self.step()?;
            match self.state.parser.rules.match_at(rest, self)? {
                Some(node) => {
                    flush_literal(&mut literal, &mut nodes);
                    let advance = node.true_length().max(1);
                    log::trace!(
                        "depth {}: matched {} chars at byte {}",
                        self.depth,
                        advance,
                        pos
                    );
                    pos += byte_offset(rest, advance);
                    nodes.push(node);
                }
                None => {
                    // `pos < input.len()` guarantees a character here
                    if let Some(c) = rest.chars().next() {
                        literal.push(c);
                        pos += c.len_utf8();
                    }
                }
            }
        }

        flush_literal(&mut literal, &mut nodes);
        Ok(Scan {
            nodes,
            closed_at: None,
        })
    }
}

fn flush_literal(literal: &mut String, nodes: &mut Vec<Node>) {
    if !literal.is_empty() {
        nodes.push(Node::Text(std::mem::take(literal)));
    }
}

/// Byte offset of the character `chars` characters into `s`, clamped to the end.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(offset, _)| offset)
}
