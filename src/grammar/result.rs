use std::fmt;

use super::Symbol;

pub type GrammarResult = Result<(), GrammarErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarErr {
    pub kind: GrammarErrKind,
}

impl GrammarErr {
    pub fn new(kind: GrammarErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarErrKind {
    /// Column is past the end of the rule's text (text, col).
    OffsetOutOfRange(&'static str, usize),
    /// Column doesn't point at the expected symbol (text, col, symbol).
    OffsetMismatch(&'static str, usize, Symbol),
}

impl fmt::Display for GrammarErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for GrammarErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GrammarErrKind::*;
        match self {
            OffsetOutOfRange(text, col) => {
                write!(f, "Offset {col} is out of range for rule \"{text}\"")
            }
            OffsetMismatch(text, col, symbol) => {
                write!(f, "Offset {col} in rule \"{text}\" does not point at {symbol}")
            }
        }
    }
}
