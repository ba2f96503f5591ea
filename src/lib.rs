//! Infobook: in-game books written in a small markup language.
//!
//! This crate ties the workspace together:
//!
//! - [`markup`] parses a line of markup into a [`Node`] tree
//! - [`rich`] renders trees into styled text with click actions
//! - [`book`] splits a document into pages and lines
//!
//! # Usage
//!
//! ```
//! use infobook::{Book, RichRenderer};
//!
//! let source = "**Welcome**\n[Next](page:2)\n\nPage two";
//! let book = Book::parse(source, infobook::default_parser()).unwrap();
//! let pages = book.render(&RichRenderer::new());
//!
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[0][0].text(), "Welcome");
//! assert_eq!(pages[0][1].text(), "Next");
//! ```

pub mod book;
pub mod error;

pub use markup;
pub use rich;

pub use book::{book_path, Book, Page, DEFAULT_BOOK, DEFAULT_PAGE};
pub use error::{BookError, Result};
pub use markup::{default_parser, MarkupError, MarkupParser, Node, ParserConfig, RuleSet};
pub use rich::{ClickAction, Renderer, RichRenderer, RichText};
