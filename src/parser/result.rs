use std::fmt;

use crate::scanner::{Location, TokenKind};

use super::TraceLine;

/// Everything a parse produces: the derivation trace and any errors
/// that were reported along the way. Errors are not fatal, so a trace
/// is always produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub trace: Vec<TraceLine>,
    pub errors: Vec<ParseErr>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
    pub loc: Location,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind, loc: Location) -> Self {
        Self { kind, loc }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrKind {
    /// Expected token kind, lexeme of the token actually found
    Mismatch(TokenKind, String),
    /// Neither a number nor an opening paren where an E was needed
    Unexpected(String),
    /// Max depth
    TooDeeplyNested(usize),
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrKind::*;
        match self {
            Mismatch(expected, got) => {
                write!(f, "parse error: expected {expected} got '{got}'")
            }
            Unexpected(got) => write!(f, "parse error: unexpected '{got}'"),
            TooDeeplyNested(max_depth) => {
                write!(f, "parse error: too deeply nested (max depth {max_depth})")
            }
        }
    }
}
