//! Rule-based parser for infobook markup.
//!
//! This crate turns one line of infobook markup into a tree of [`Node`]s that
//! a renderer later turns into styled text.
//!
//! # Overview
//!
//! - `**bold**`, `*italic*`, `__underline__`, `~~strike~~`, `||obfuscated||` -
//!   delimited spans
//! - `[label](target)` - links, the target is passed through untouched
//! - `<color ff0000>text</color>`, `<c ...>` - colored text
//! - `<formatting lo>text</formatting>`, `<f ...>` - formatting codes
//! - `<f 3\>` - a self-closing tag carrying attributes
//!
//! Anything that does not form a complete construct stays literal text. The
//! parse is lossless: formatting the returned tree reproduces the input.
//!
//! # Usage
//!
//! ```
//! let root = markup::parse("<c ff0000>red</c> and **bold**").unwrap();
//! assert_eq!(root.to_string(), "<c ff0000>red</c> and **bold**");
//! assert_eq!(root.length(), "red and bold".len());
//!
//! let short = root.truncate(5);
//! assert_eq!(short.to_string(), "<c ff0000>red</c> a");
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod parser;
pub mod rule;
pub mod rules;

// Re-export main types at crate root
pub use config::ParserConfig;
pub use error::{MarkupError, Result};
pub use node::{EmptyTagNode, HyperlinkNode, Node, SymbolNode, TagNode};
pub use parser::{default_parser, MarkupParser, ParseContext};
pub use rule::{MarkupRule, RuleSet};
pub use rules::{BracketRule, HyperlinkRule, TagRule};

/// Parse a line with the default infobook rules.
pub fn parse(input: &str) -> Result<Node> {
    default_parser().parse(input)
}
