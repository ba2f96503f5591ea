//! Built-in markup rules.
//!
//! - [`BracketRule`]: symmetric delimiters such as `**bold**`
//! - [`HyperlinkRule`]: `[label](target)`
//! - [`TagRule`]: angle-bracket tags such as `<color ff0000>red</color>`

mod bracket;
mod hyperlink;
mod tag;

pub use bracket::BracketRule;
pub(crate) use bracket::find_unescaped;
pub use hyperlink::HyperlinkRule;
pub(crate) use hyperlink::find_closing;
pub use tag::TagRule;
