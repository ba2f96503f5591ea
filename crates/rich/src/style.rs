//! Style types for rich text.
//!
//! A Style combines an optional color with a set of text modifiers.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text styling attributes (modifiers).
    ///
    /// # Example
    ///
    /// ```
    /// use rich::Modifiers;
    ///
    /// let both = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(both.contains(Modifiers::BOLD));
    /// assert!(!both.contains(Modifiers::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const BOLD          = 0b0000_0001;
        const ITALIC        = 0b0000_0010;
        const UNDERLINE     = 0b0000_0100;
        const STRIKETHROUGH = 0b0000_1000;
        /// Randomly cycling glyphs.
        const OBFUSCATED    = 0b0001_0000;
    }
}

impl Modifiers {
    /// Modifier toggled by a span delimiter such as `**`.
    pub fn for_delimiter(delimiter: &str) -> Modifiers {
        match delimiter {
            "*" => Modifiers::ITALIC,
            "**" => Modifiers::BOLD,
            "__" => Modifiers::UNDERLINE,
            "~~" => Modifiers::STRIKETHROUGH,
            "||" => Modifiers::OBFUSCATED,
            _ => Modifiers::empty(),
        }
    }
}

/// Complete style specification including color and modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Text style modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style with only a color set.
    pub fn color(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            modifiers: Modifiers::empty(),
        }
    }

    /// Style with only modifiers set.
    pub fn modifiers(modifiers: Modifiers) -> Self {
        Self {
            color: None,
            modifiers,
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.modifiers.is_empty()
    }

    /// Apply another style on top of this one.
    ///
    /// A color in `other` overrides the color in `self`.
    /// Modifiers are OR'd together.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            modifiers: self.modifiers | other.modifiers,
        }
    }
}
