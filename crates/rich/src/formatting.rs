//! Single-character formatting codes.
//!
//! The attribute of a `formatting` tag is a string of codes, each selecting
//! a color or a modifier. `<f 6l>` is gold and bold.

use phf::phf_map;

use crate::color::NamedColor;
use crate::style::{Modifiers, Style};

/// What one formatting code does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formatting {
    Color(NamedColor),
    Modifier(Modifiers),
    /// Discard everything set so far.
    Reset,
}

static CODES: phf::Map<char, Formatting> = phf_map! {
    '0' => Formatting::Color(NamedColor::Black),
    '1' => Formatting::Color(NamedColor::DarkBlue),
    '2' => Formatting::Color(NamedColor::DarkGreen),
    '3' => Formatting::Color(NamedColor::DarkAqua),
    '4' => Formatting::Color(NamedColor::DarkRed),
    '5' => Formatting::Color(NamedColor::DarkPurple),
    '6' => Formatting::Color(NamedColor::Gold),
    '7' => Formatting::Color(NamedColor::Gray),
    '8' => Formatting::Color(NamedColor::DarkGray),
    '9' => Formatting::Color(NamedColor::Blue),
    'a' => Formatting::Color(NamedColor::Green),
    'b' => Formatting::Color(NamedColor::Aqua),
    'c' => Formatting::Color(NamedColor::Red),
    'd' => Formatting::Color(NamedColor::LightPurple),
    'e' => Formatting::Color(NamedColor::Yellow),
    'f' => Formatting::Color(NamedColor::White),
    'k' => Formatting::Modifier(Modifiers::OBFUSCATED),
    'l' => Formatting::Modifier(Modifiers::BOLD),
    'm' => Formatting::Modifier(Modifiers::STRIKETHROUGH),
    'n' => Formatting::Modifier(Modifiers::UNDERLINE),
    'o' => Formatting::Modifier(Modifiers::ITALIC),
    'r' => Formatting::Reset,
};

impl Formatting {
    /// Look up a code, ignoring case.
    pub fn from_code(code: char) -> Option<Formatting> {
        CODES.get(&code.to_ascii_lowercase()).copied()
    }

    /// Apply this formatting on top of `style`.
    pub fn apply_to(self, style: Style) -> Style {
        match self {
            Formatting::Color(color) => Style {
                color: Some(color.into()),
                ..style
            },
            Formatting::Modifier(modifiers) => Style {
                modifiers: style.modifiers | modifiers,
                ..style
            },
            Formatting::Reset => Style::default(),
        }
    }

    /// Build the style selected by a string of codes. Unknown codes are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::{Formatting, Modifiers, NamedColor, Style};
    ///
    /// let style = Formatting::style_for("3l?");
    /// assert_eq!(style.color, Some(NamedColor::DarkAqua.into()));
    /// assert_eq!(style.modifiers, Modifiers::BOLD);
    /// ```
    pub fn style_for(codes: &str) -> Style {
        codes
            .chars()
            .filter_map(Formatting::from_code)
            .fold(Style::default(), |style, formatting| formatting.apply_to(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            Formatting::from_code('L'),
            Some(Formatting::Modifier(Modifiers::BOLD))
        );
        assert_eq!(
            Formatting::from_code('A'),
            Some(Formatting::Color(NamedColor::Green))
        );
        assert_eq!(Formatting::from_code('z'), None);
    }

    #[test]
    fn later_color_wins() {
        let style = Formatting::style_for("46");
        assert_eq!(style.color, Some(Color::Named(NamedColor::Gold)));
    }

    #[test]
    fn reset_discards_earlier_codes() {
        let style = Formatting::style_for("lnr o");
        assert_eq!(style, Style::modifiers(Modifiers::ITALIC));
    }

    #[test]
    fn all_modifiers() {
        let style = Formatting::style_for("klmno");
        assert_eq!(style.modifiers, Modifiers::all());
        assert!(style.color.is_none());
    }
}
