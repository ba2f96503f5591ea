//! Tests for books built from markup documents.

use infobook::{
    Book, BookError, ClickAction, MarkupError, MarkupParser, ParserConfig, RichRenderer,
    RuleSet, DEFAULT_PAGE, default_parser,
};
use markup::Node;
use rich::{Color, Modifiers, NamedColor, Style};

fn default_book() -> Book {
    Book::parse(DEFAULT_PAGE, default_parser()).unwrap()
}

// ============================================================================
// Default Page
// ============================================================================

#[test]
fn default_page_layout() {
    let book = default_book();
    let lines: Vec<usize> = book.pages().iter().map(|page| page.lines().len()).collect();
    assert_eq!(lines, vec![3, 5, 14]);
}

#[test]
fn default_page_first_page_tree() {
    let book = default_book();
    let dump = book.pages()[0]
        .lines()
        .iter()
        .map(|line| line.render_tree(0))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(dump, @r#"
    Root
      Text: "This is page 1"
    Root
      Tag: c "ff0000"
        Text: "red!"
    Root
      Hyperlink: page:2
        Text: "Page 2"
    "#);
}

#[test]
fn default_page_round_trips() {
    let book = default_book();
    let rendered = book
        .pages()
        .iter()
        .map(|page| {
            page.lines()
                .iter()
                .map(Node::render)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(rendered, DEFAULT_PAGE);
}

#[test]
fn default_page_lengths_match_source() {
    for page in default_book().pages() {
        for line in page.lines() {
            assert_eq!(line.true_length(), line.render().chars().count());
            assert!(line.length() <= line.true_length());
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn default_page_renders_plain_text() {
    let pages = default_book().render(&RichRenderer::new());
    let texts: Vec<&str> = pages[2].iter().map(|line| line.text()).collect();
    assert_eq!(
        texts,
        vec![
            "italic",
            "bold",
            "underline",
            "strikethrough",
            "obfuscated",
            "<br/>",
            "link",
            "page",
            "book",
            "command",
            "color",
            "color but short",
            "formatting",
            "formatting but short",
        ]
    );
}

#[test]
fn default_page_link_actions() {
    let pages = default_book().render(&RichRenderer::new());
    let actions: Vec<ClickAction> = pages[2][6..10]
        .iter()
        .map(|line| line.spans()[0].action.clone().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec![
            ClickAction::OpenUrl("https://google.com/".into()),
            ClickAction::ChangePage("1".into()),
            ClickAction::OpenBook("root".into()),
            ClickAction::RunCommand("kill @s".into()),
        ]
    );
}

#[test]
fn default_page_styles() {
    let pages = default_book().render(&RichRenderer::new());
    let page = &pages[2];

    assert_eq!(page[1].style_at(0), Style::modifiers(Modifiers::BOLD));
    assert_eq!(page[10].style_at(0), Style::color(Color::Rgb(255, 0, 0)));
    assert_eq!(page[11].style_at(0), Style::color(Color::Rgb(0, 255, 0)));
    assert_eq!(
        page[12].style_at(0),
        Style {
            color: Some(Color::Named(NamedColor::DarkAqua)),
            modifiers: Modifiers::BOLD,
        }
    );
    assert_eq!(page[13].style_at(0), Style::color(NamedColor::DarkRed));
}

// ============================================================================
// Reading and Errors
// ============================================================================

#[test]
fn read_book_from_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("book.md");
    std::fs::write(&path, "one\n\ntwo").unwrap();

    let book = Book::read(&path, default_parser()).unwrap();

    assert_eq!(book.len(), 2);
    assert_eq!(book.pages()[1].lines()[0], Node::root(vec![Node::text("two")]));
}

#[test]
fn missing_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing.md");
    let err = Book::read(&path, default_parser()).unwrap_err();
    assert!(matches!(err, BookError::IO(_)));
    assert!(err.to_string().starts_with("Could not read book:"));
}

#[test]
fn oversized_line_fails_the_book() {
    let parser = MarkupParser::new(
        RuleSet::infobook(),
        ParserConfig::default().with_max_input_len(4),
    );
    let err = Book::parse("ok\n\ntoo long", &parser).unwrap_err();
    assert!(matches!(
        err,
        BookError::Markup(MarkupError::InputTooLarge { len: 8, limit: 4 })
    ));
}
