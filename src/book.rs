//! Books: markup documents split into pages and lines.
//!
//! A blank line (`"\n\n"`) starts a new page and every other line break
//! starts a new line. Each line is parsed on its own, so markup never spans
//! lines.

use std::path::{Path, PathBuf};

use markup::{MarkupParser, Node};
use rich::Renderer;

use crate::error::Result;

/// Name of the book opened when none is given.
pub const DEFAULT_BOOK: &str = "root";

/// The book written for a fresh install. It shows every construct the
/// standard rules understand.
pub const DEFAULT_PAGE: &str = "\
This is page 1
<c ff0000>red!</c>
[Page 2](page:2)

This is page 2
||obfuscated||
Two line breaks signify a new page
Go to the next page to see all different types of markdown we support
[Page 3](page:3)

*italic*
**bold**
__underline__
~~strikethrough~~
||obfuscated||
<br/>
[link](https://google.com/)
[page](page:1)
[book](book:root)
[command](comm:kill @s)
<color ff0000>color</color>
<c 00ff00>color but short</c>
<formatting 3l>formatting</formatting>
<f 4>formatting but short</f>";

/// Location of the book called `name` inside `dir`.
///
/// An empty name means [`DEFAULT_BOOK`]. Books are stored as `<name>.md`.
pub fn book_path(dir: &Path, name: &str) -> PathBuf {
    let name = if name.is_empty() { DEFAULT_BOOK } else { name };
    dir.join(format!("{name}.md"))
}

/// One page of a book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    lines: Vec<Node>,
}

impl Page {
    /// Parsed lines, each a `Root` node.
    pub fn lines(&self) -> &[Node] {
        &self.lines
    }

    pub fn render<R: Renderer>(&self, renderer: &R) -> Vec<R::Output> {
        self.lines.iter().map(|line| renderer.render(line)).collect()
    }
}

/// A parsed book.
///
/// # Examples
///
/// ```
/// use infobook::{Book, DEFAULT_PAGE};
///
/// let book = Book::parse(DEFAULT_PAGE, markup::default_parser()).unwrap();
/// assert_eq!(book.len(), 3);
/// assert_eq!(book.pages()[0].lines()[0].render(), "This is page 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    /// Split `source` into pages and lines and parse every line.
    ///
    /// Windows line endings are accepted.
    pub fn parse(source: &str, parser: &MarkupParser) -> Result<Self> {
        let source = source.replace("\r\n", "\n");
        let pages = source
            .split("\n\n")
            .map(|page| -> Result<Page> {
                let lines = page
                    .split('\n')
                    .map(|line| parser.parse(line))
                    .collect::<markup::Result<Vec<_>>>()?;
                Ok(Page { lines })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("parsed book with {} pages", pages.len());
        Ok(Self { pages })
    }

    /// Read and parse the book at `path`.
    pub fn read(path: impl AsRef<Path>, parser: &MarkupParser) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading book {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source, parser)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Render every line of every page.
    pub fn render<R: Renderer>(&self, renderer: &R) -> Vec<Vec<R::Output>> {
        self.pages.iter().map(|page| page.render(renderer)).collect()
    }
}
