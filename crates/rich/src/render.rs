//! Rendering parsed markup into rich text.
//!
//! [`Renderer`] is the seam between the parser and whatever displays the
//! result. [`RichRenderer`] is the implementation used for books:
//!
//! - symbol delimiters toggle modifiers (`**` bold, `*` italic, ...)
//! - links are dark blue, underlined, and carry a [`ClickAction`]
//! - `color`/`c` tags color their content; a missing or invalid color hides it
//! - `formatting`/`f` tags apply formatting codes; missing codes hide it
//! - tags with any other key show their markup source as plain text
//! - self-closing tags render nothing
//!
//! Styles inherit down the tree: modifiers accumulate and the innermost color
//! wins.

use markup::node::{Node, TagNode};

use crate::action::ClickAction;
use crate::color::{Color, NamedColor};
use crate::formatting::Formatting;
use crate::style::{Modifiers, Style};
use crate::text::RichText;

/// Turns a parsed markup tree into displayable output.
pub trait Renderer {
    type Output;

    /// Render one parsed line.
    fn render(&self, root: &Node) -> Self::Output;
}

/// Renders markup into [`RichText`].
///
/// # Examples
///
/// ```
/// use rich::{Modifiers, Renderer, RichRenderer};
///
/// let root = markup::parse("plain **bold**").unwrap();
/// let text = RichRenderer::new().render(&root);
/// assert_eq!(text.text(), "plain bold");
/// assert_eq!(text.spans()[0].style.modifiers, Modifiers::BOLD);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RichRenderer {
    link_style: Style,
}

impl RichRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the style applied to link labels.
    pub fn with_link_style(mut self, style: Style) -> Self {
        self.link_style = style;
        self
    }

    pub fn link_style(&self) -> &Style {
        &self.link_style
    }

    fn walk(&self, node: &Node, style: &Style, action: Option<&ClickAction>, out: &mut RichText) {
        match node {
            Node::Root(children) => self.walk_all(children, style, action, out),
            Node::Text(value) => out.push(value, *style, action.cloned()),
            Node::Symbol(symbol) => {
                let style = style.apply(&Style::modifiers(Modifiers::for_delimiter(
                    &symbol.delimiter,
                )));
                self.walk_all(&symbol.children, &style, action, out);
            }
            Node::Hyperlink(link) => {
                let style = style.apply(&self.link_style);
                let action = ClickAction::from_target(&link.target);
                self.walk_all(&link.children, &style, Some(&action), out);
            }
            Node::EmptyTag(_) => {}
            Node::Tag(tag) => match self.tag_style(tag, style) {
                TagContent::Styled(style) => self.walk_all(&tag.children, &style, action, out),
                TagContent::Hidden => {}
                TagContent::Source => out.push(&node.to_string(), *style, action.cloned()),
            },
        }
    }

    fn walk_all(
        &self,
        children: &[Node],
        style: &Style,
        action: Option<&ClickAction>,
        out: &mut RichText,
    ) {
        for child in children {
            self.walk(child, style, action, out);
        }
    }

    fn tag_style(&self, tag: &TagNode, inherited: &Style) -> TagContent {
        match tag.key.as_str() {
            "color" | "c" => {
                let Some(attributes) = tag.attributes.as_deref() else {
                    log::debug!("<{}> without a color, hiding content", tag.key);
                    return TagContent::Hidden;
                };
                match Color::parse_attribute(attributes) {
                    Ok(color) => TagContent::Styled(inherited.apply(&Style::color(color))),
                    Err(err) => {
                        log::debug!("<{}> hidden: {}", tag.key, err);
                        TagContent::Hidden
                    }
                }
            }
            "formatting" | "f" => {
                let Some(codes) = tag.attributes.as_deref() else {
                    log::debug!("<{}> without codes, hiding content", tag.key);
                    return TagContent::Hidden;
                };
                TagContent::Styled(inherited.apply(&Formatting::style_for(codes)))
            }
            _ => {
                log::debug!("no style for <{}>, showing its source", tag.key);
                TagContent::Source
            }
        }
    }
}

/// How a tag's content is shown.
enum TagContent {
    Styled(Style),
    Hidden,
    /// Unknown key: the tag's markup is shown verbatim.
    Source,
}

impl Default for RichRenderer {
    fn default() -> Self {
        Self {
            link_style: Style {
                color: Some(Color::Named(NamedColor::DarkBlue)),
                modifiers: Modifiers::UNDERLINE,
            },
        }
    }
}

impl Renderer for RichRenderer {
    type Output = RichText;

    fn render(&self, root: &Node) -> RichText {
        let mut out = RichText::default();
        self.walk(root, &Style::default(), None, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> RichText {
        let root = markup::parse(input).unwrap();
        RichRenderer::new().render(&root)
    }

    #[test]
    fn plain_text() {
        let text = render("Hello World");
        assert_eq!(text.text(), "Hello World");
        assert!(text.is_plain());
    }

    #[test]
    fn empty_tags_render_nothing() {
        let text = render(r"a<c/>b<f 3\>c");
        assert_eq!(text.text(), "abc");
        assert!(text.is_plain());
    }

    #[test]
    fn unknown_delimiter_adds_nothing() {
        let root = Node::root(vec![Node::symbol("++", vec![Node::text("x")])]);
        let text = RichRenderer::new().render(&root);
        assert_eq!(text.text(), "x");
        assert!(text.is_plain());
    }

    #[test]
    fn unknown_tag_shows_its_source() {
        let root = Node::root(vec![
            Node::text("a "),
            Node::tag("b", vec![Node::symbol("*", vec![Node::text("x")])], false, None),
        ]);
        let text = RichRenderer::new().render(&root);
        assert_eq!(text.text(), "a <b>*x*</b>");
        assert!(text.is_plain());
    }

    #[test]
    fn custom_link_style() {
        let renderer = RichRenderer::new().with_link_style(Style::modifiers(Modifiers::BOLD));
        let text = renderer.render(&markup::parse("[x](page:2)").unwrap());
        assert_eq!(text.spans()[0].style, Style::modifiers(Modifiers::BOLD));
        assert_eq!(
            text.spans()[0].action,
            Some(ClickAction::ChangePage("2".into()))
        );
    }
}
