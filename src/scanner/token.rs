use std::fmt;

use super::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,     // 1, 42, 007
    Plus,       // +
    LeftParen,  // (
    RightParen, // )
    End,        // end of input
    Error,      // any other single char
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Plus => "Plus",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::End => "End",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A token along with the exact text it was scanned from and its
/// start and end locations in the source. The end location is
/// inclusive; for `End`, start and end are the same.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub start: Location,
    pub end: Location,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, start: Location, end: Location) -> Self {
        Self { kind, lexeme: lexeme.to_owned(), start, end }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {} -> {}", self.kind, self.lexeme, self.start, self.end)
    }
}
