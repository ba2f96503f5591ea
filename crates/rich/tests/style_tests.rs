//! Tests for styles, spans, and rich text.

use rich::{ClickAction, Color, Modifiers, NamedColor, RichText, Span, Style};

// ============================================================================
// Modifiers
// ============================================================================

#[test]
fn delimiter_modifiers() {
    assert_eq!(Modifiers::for_delimiter("*"), Modifiers::ITALIC);
    assert_eq!(Modifiers::for_delimiter("**"), Modifiers::BOLD);
    assert_eq!(Modifiers::for_delimiter("__"), Modifiers::UNDERLINE);
    assert_eq!(Modifiers::for_delimiter("~~"), Modifiers::STRIKETHROUGH);
    assert_eq!(Modifiers::for_delimiter("||"), Modifiers::OBFUSCATED);
}

#[test]
fn unknown_delimiters() {
    assert!(Modifiers::for_delimiter("").is_empty());
    assert!(Modifiers::for_delimiter("***").is_empty());
    assert!(Modifiers::for_delimiter("_").is_empty());
}

// ============================================================================
// Style Inheritance
// ============================================================================

#[test]
fn modifiers_accumulate() {
    let style = Style::new()
        .apply(&Style::modifiers(Modifiers::BOLD))
        .apply(&Style::modifiers(Modifiers::ITALIC))
        .apply(&Style::modifiers(Modifiers::BOLD));
    assert_eq!(style.modifiers, Modifiers::BOLD | Modifiers::ITALIC);
}

#[test]
fn innermost_color_wins() {
    let style = Style::color(NamedColor::Red)
        .apply(&Style::color(Color::Rgb(1, 2, 3)))
        .apply(&Style::modifiers(Modifiers::BOLD));
    assert_eq!(style.color, Some(Color::Rgb(1, 2, 3)));
}

#[test]
fn empty_overlay_changes_nothing() {
    let base = Style {
        color: Some(Color::Named(NamedColor::Aqua)),
        modifiers: Modifiers::STRIKETHROUGH,
    };
    assert_eq!(base.apply(&Style::default()), base);
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn span_defaults() {
    let span = Span::default();
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn span_with_action() {
    let span = Span::with_action(
        2,
        6,
        Style::default(),
        Some(ClickAction::OpenUrl("https://example.com".into())),
    );
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
}

// ============================================================================
// RichText
// ============================================================================

#[test]
fn push_unstyled_text_adds_no_span() {
    let mut text = RichText::default();
    text.push("plain", Style::default(), None);
    text.push("", Style::modifiers(Modifiers::BOLD), None);
    assert_eq!(text.text(), "plain");
    assert!(text.is_plain());
}

#[test]
fn byte_offsets_for_multibyte_text() {
    let bold = Style::modifiers(Modifiers::BOLD);
    let mut text = RichText::default();
    text.push("héllo ", Style::default(), None);
    text.push("wörld", bold, None);

    assert_eq!(text.len(), "héllo wörld".len());
    let span = &text.spans()[0];
    assert_eq!(&text.text()[span.start..span.end], "wörld");
    assert_eq!(text.style_at(span.start), bold);
}

#[test]
fn segments_cover_the_whole_text() {
    let mut text = RichText::default();
    text.push("a", Style::default(), None);
    text.push("b", Style::modifiers(Modifiers::ITALIC), None);
    text.push("c", Style::default(), None);

    let joined: String = text.segments().map(|(segment, _, _)| segment).collect();
    assert_eq!(joined, "abc");
    assert_eq!(text.segments().count(), 3);
}

#[test]
fn plain_text_has_one_segment() {
    let text = RichText::plain("only text");
    let segments: Vec<_> = text.segments().collect();
    assert_eq!(segments, vec![("only text", Style::default(), None)]);
}
