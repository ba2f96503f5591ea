//! Rich text rendering for infobook markup.
//!
//! This crate turns the node tree produced by the `markup` crate into
//! [`RichText`]: plain text plus styled spans that a chat or terminal
//! frontend can display.
//!
//! # Overview
//!
//! | Markup | Effect |
//! |---|---|
//! | `*text*` | italic |
//! | `**text**` | bold |
//! | `__text__` | underline |
//! | `~~text~~` | strikethrough |
//! | `\|\|text\|\|` | obfuscated |
//! | `[label](target)` | dark blue underlined link with a [`ClickAction`] |
//! | `<color ff0000>text</color>` | RGB color (`<c ...>` also works) |
//! | `<formatting 6l>text</formatting>` | formatting codes (`<f ...>` also works) |
//!
//! # Usage
//!
//! ```
//! use rich::{ClickAction, Renderer, RichRenderer};
//!
//! let root = markup::parse("Go to [page two](page:2)").unwrap();
//! let text = RichRenderer::new().render(&root);
//! assert_eq!(text.text(), "Go to page two");
//!
//! let link = &text.spans()[0];
//! assert_eq!(&text.text()[link.start..link.end], "page two");
//! assert_eq!(link.action, Some(ClickAction::ChangePage("2".to_string())));
//! ```

pub mod action;
pub mod color;
pub mod error;
pub mod formatting;
pub mod render;
pub mod span;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use action::ClickAction;
pub use color::{Color, NamedColor};
pub use error::ColorParseError;
pub use formatting::Formatting;
pub use render::{Renderer, RichRenderer};
pub use span::Span;
pub use style::{Modifiers, Style};
pub use text::{RichText, SegmentIterator};
