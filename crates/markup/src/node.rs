//! The parsed markup tree.
//!
//! Every construct the parser recognises becomes one [`Node`] variant. Nodes
//! are plain values: each parent owns its children, there are no back
//! references, and a tree is never mutated once built.
//!
//! Two lengths are tracked for every node:
//!
//! - [`Node::length`] counts the characters a reader sees once the markup is
//!   rendered. Delimiters, tag syntax and link targets contribute nothing.
//! - [`Node::true_length`] counts the source characters the node was parsed
//!   from. The parser advances its cursor by exactly this amount.
//!
//! Formatting a node with [`Display`](fmt::Display) reproduces the source it
//! was parsed from.

use std::fmt::{self, Write as _};

use crate::rules::{find_closing, find_unescaped};

/// A node in the parsed markup tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// Top-level container for one parsed line.
    Root(Vec<Node>),
    /// Literal text.
    Text(String),
    /// Delimited span such as `**bold**`.
    Symbol(SymbolNode),
    /// Link such as `[label](target)`.
    Hyperlink(HyperlinkNode),
    /// Self-closing tag such as `<c/>` or `<f 3\>`.
    EmptyTag(EmptyTagNode),
    /// Tag with content such as `<color ff0000>red</color>`.
    Tag(TagNode),
}

/// A span wrapped in a symmetric delimiter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolNode {
    /// The delimiter written on both sides, e.g. `**`.
    pub delimiter: String,
    pub children: Vec<Node>,
}

/// A `[label](target)` link.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HyperlinkNode {
    /// Raw text between the parentheses. Interpreting it is up to the renderer.
    pub target: String,
    /// The parsed label.
    pub children: Vec<Node>,
}

/// A tag without content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmptyTagNode {
    pub key: String,
    /// Whether a space separated the key from the closer (`<key />`).
    pub space_before: bool,
    /// Attribute text, without the trailing escape. `None` when no attributes
    /// were written, which is distinct from `Some("")`.
    pub attributes: Option<String>,
}

/// A tag with content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagNode {
    pub key: String,
    pub children: Vec<Node>,
    /// Whether a space followed the key in the opening tag (`<key >`).
    pub space_before: bool,
    pub attributes: Option<String>,
}

impl Node {
    /// Create a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(children)
    }

    /// Create a literal text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Create a symbol node.
    pub fn symbol(delimiter: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Symbol(SymbolNode {
            delimiter: delimiter.into(),
            children,
        })
    }

    /// Create a hyperlink node.
    pub fn hyperlink(target: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Hyperlink(HyperlinkNode {
            target: target.into(),
            children,
        })
    }

    /// Create a self-closing tag node.
    pub fn empty_tag(key: impl Into<String>, space_before: bool, attributes: Option<String>) -> Self {
        Node::EmptyTag(EmptyTagNode {
            key: key.into(),
            space_before,
            attributes,
        })
    }

    /// Create a tag node.
    pub fn tag(
        key: impl Into<String>,
        children: Vec<Node>,
        space_before: bool,
        attributes: Option<String>,
    ) -> Self {
        Node::Tag(TagNode {
            key: key.into(),
            children,
            space_before,
            attributes,
        })
    }

    /// Child nodes. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children) => children,
            Node::Symbol(node) => &node.children,
            Node::Hyperlink(node) => &node.children,
            Node::Tag(node) => &node.children,
            Node::Text(_) | Node::EmptyTag(_) => &[],
        }
    }

    /// Number of characters this node contributes to rendered output.
    pub fn length(&self) -> usize {
        match self {
            Node::Text(value) => char_len(value),
            Node::EmptyTag(_) => 0,
            _ => self.children().iter().map(Node::length).sum(),
        }
    }

    /// Number of source characters this node was parsed from.
    pub fn true_length(&self) -> usize {
        let children: usize = self.children().iter().map(Node::true_length).sum();
        match self {
            Node::Root(_) => children,
            Node::Text(value) => char_len(value),
            Node::Symbol(node) => 2 * char_len(&node.delimiter) + children,
            // `[` `](` `)`
            Node::Hyperlink(node) => 4 + char_len(&node.target) + children,
            Node::EmptyTag(node) => match &node.attributes {
                // `<key attrs\>`
                Some(attributes) => char_len(&node.key) + char_len(attributes) + 4,
                // `<key />` or `<key/>`
                None => char_len(&node.key) + 3 + usize::from(node.space_before),
            },
            Node::Tag(node) => {
                let open = match &node.attributes {
                    // `<key attrs>`
                    Some(attributes) => char_len(&node.key) + char_len(attributes) + 3,
                    // `<key >` or `<key>`
                    None => char_len(&node.key) + 2 + usize::from(node.space_before),
                };
                // `</key>`
                let close = char_len(&node.key) + 3;
                open + children + close
            }
        }
    }

    /// Reproduce the source this node was parsed from.
    ///
    /// Equivalent to `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render an indented, one node per line dump of the tree.
    ///
    /// `indent` is the nesting level of this node; each level adds two spaces.
    pub fn render_tree(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, indent);
        out.pop();
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize) {
        let line = match self {
            Node::Root(_) => "Root".to_string(),
            Node::Text(value) => format!("Text: {value:?}"),
            Node::Symbol(node) => format!("Symbol: {}", node.delimiter),
            Node::Hyperlink(node) => format!("Hyperlink: {}", node.target),
            Node::EmptyTag(node) => match &node.attributes {
                Some(attributes) => format!("EmptyTag: {} {attributes:?}", node.key),
                None => format!("EmptyTag: {}", node.key),
            },
            Node::Tag(node) => match &node.attributes {
                Some(attributes) => format!("Tag: {} {attributes:?}", node.key),
                None => format!("Tag: {}", node.key),
            },
        };
        out.push_str(&"  ".repeat(indent));
        out.push_str(&line);
        out.push('\n');
        for child in self.children() {
            child.write_tree(out, indent + 1);
        }
    }

    /// Return a copy of this node whose [`length`](Node::length) is at most
    /// `max_length`.
    ///
    /// Children are kept whole while they fit. The first child that does not
    /// fit is itself truncated to the remaining budget and everything after it
    /// is dropped. The wrapping syntax of every kept node is preserved.
    ///
    /// A cut never changes where a construct ends when read back: a span is
    /// shortened further if its remaining text would end in an escape or run
    /// into its own closing delimiter, and a link label is shortened until its
    /// square brackets balance. Spans and links with nothing left are dropped.
    /// [`MarkupParser::truncate`](crate::MarkupParser::truncate) additionally
    /// checks the result against a parser's full rule set.
    pub fn truncate(&self, max_length: usize) -> Node {
        if self.length() <= max_length {
            return self.clone();
        }
        self.cut(max_length).unwrap_or_else(|| self.emptied())
    }

    /// Cut a node longer than `max_length`, or `None` if no shorter version
    /// of it reads back as the same construct.
    fn cut(&self, max_length: usize) -> Option<Node> {
        match self {
            Node::Root(children) => Some(Node::Root(truncate_children(children, max_length))),
            Node::Text(value) => Some(Node::Text(value.chars().take(max_length).collect())),
            Node::Symbol(node) => {
                let children = cut_children(&node.children, max_length, |kept| {
                    let interior = render_all(kept);
                    !interior.is_empty() && closes_at_end(&interior, &node.delimiter)
                })?;
                Some(Node::Symbol(SymbolNode {
                    delimiter: node.delimiter.clone(),
                    children,
                }))
            }
            Node::Hyperlink(node) => {
                let children = cut_children(&node.children, max_length, |kept| {
                    let label = render_all(kept);
                    find_closing(&format!("{label}]"), '[', ']') == Some(label.len())
                })?;
                Some(Node::Hyperlink(HyperlinkNode {
                    target: node.target.clone(),
                    children,
                }))
            }
            Node::EmptyTag(_) => Some(self.clone()),
            Node::Tag(node) => Some(Node::Tag(TagNode {
                key: node.key.clone(),
                children: truncate_children(&node.children, max_length),
                space_before: node.space_before,
                attributes: node.attributes.clone(),
            })),
        }
    }

    /// The same node with all content removed.
    fn emptied(&self) -> Node {
        match self {
            Node::Root(_) => Node::Root(Vec::new()),
            Node::Text(_) => Node::Text(String::new()),
            Node::Symbol(node) => Node::symbol(node.delimiter.as_str(), Vec::new()),
            Node::Hyperlink(node) => Node::hyperlink(node.target.as_str(), Vec::new()),
            Node::EmptyTag(_) => self.clone(),
            Node::Tag(node) => Node::tag(
                node.key.as_str(),
                Vec::new(),
                node.space_before,
                node.attributes.clone(),
            ),
        }
    }
}

fn truncate_children(children: &[Node], max_length: usize) -> Vec<Node> {
    let mut budget = max_length;
    let mut kept = Vec::with_capacity(children.len());

    for child in children {
        let length = child.length();
        if length <= budget {
            kept.push(child.clone());
            budget -= length;
            continue;
        }
        // A cut child with nothing visible left is dropped with the rest.
        if let Some(cut) = child.cut(budget).filter(|cut| cut.length() > 0) {
            kept.push(cut);
        }
        break;
    }

    kept
}

/// Truncate `children` to at most `max_length`, shrinking the budget until
/// `reads_back` accepts the result.
fn cut_children(
    children: &[Node],
    max_length: usize,
    reads_back: impl Fn(&[Node]) -> bool,
) -> Option<Vec<Node>> {
    let mut budget = max_length;
    loop {
        let kept = truncate_children(children, budget);
        if reads_back(&kept) {
            return Some(kept);
        }
        budget = kept.iter().map(Node::length).sum::<usize>().checked_sub(1)?;
    }
}

fn render_all(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_string).collect()
}

/// Whether the first unescaped `delimiter` after `interior` is the one
/// appended to it.
fn closes_at_end(interior: &str, delimiter: &str) -> bool {
    find_unescaped(&format!("{interior}{delimiter}"), delimiter) == Some(interior.len())
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Node]) -> fmt::Result {
    children.iter().try_for_each(|child| write!(f, "{child}"))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Root(children) => write_children(f, children),
            Node::Text(value) => f.write_str(value),
            Node::Symbol(node) => {
                f.write_str(&node.delimiter)?;
                write_children(f, &node.children)?;
                f.write_str(&node.delimiter)
            }
            Node::Hyperlink(node) => {
                f.write_char('[')?;
                write_children(f, &node.children)?;
                write!(f, "]({})", node.target)
            }
            Node::EmptyTag(node) => match &node.attributes {
                Some(attributes) => write!(f, "<{} {attributes}\\>", node.key),
                None if node.space_before => write!(f, "<{} />", node.key),
                None => write!(f, "<{}/>", node.key),
            },
            Node::Tag(node) => {
                match &node.attributes {
                    Some(attributes) => write!(f, "<{} {attributes}>", node.key)?,
                    None if node.space_before => write!(f, "<{} >", node.key)?,
                    None => write!(f, "<{}>", node.key)?,
                }
                write_children(f, &node.children)?;
                write!(f, "</{}>", node.key)
            }
        }
    }
}

/// Length of `s` in characters.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
