// crates/core/src/symbol.rs
use serde::{Deserialize, Serialize};

/// The three bracket families. Each one pairs exactly one opener with
/// exactly one closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    /// `(` `)`
    Paren,
    /// `{` `}`
    Brace,
    /// `[` `]`
    Square,
}

impl Bracket {
    pub const ALL: [Self; 3] = [Self::Paren, Self::Brace, Self::Square];

    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Brace => '{',
            Self::Square => '[',
        }
    }

    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Brace => '}',
            Self::Square => ']',
        }
    }

    #[must_use]
    pub const fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Square),
            _ => None,
        }
    }

    #[must_use]
    pub const fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Square),
            _ => None,
        }
    }
}

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Opener(Bracket),
    Closer(Bracket),
    Other,
}

/// Map a character to exactly one [`Symbol`] category.
#[must_use]
pub const fn classify(c: char) -> Symbol {
    if let Some(b) = Bracket::from_opener(c) {
        Symbol::Opener(b)
    } else if let Some(b) = Bracket::from_closer(c) {
        Symbol::Closer(b)
    } else {
        Symbol::Other
    }
}
