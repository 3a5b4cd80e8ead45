use std::fmt;

use crate::grammar::GrammarErr;

/// Result type used by top level program driver. The `u8` is the exit
/// code.
pub type DriverResult = Result<u8, DriverErr>;

#[derive(Debug)]
pub struct DriverErr {
    pub kind: DriverErrKind,
}

impl DriverErr {
    pub fn new(kind: DriverErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug)]
pub enum DriverErrKind {
    CouldNotReadSourceFile(String, String), // path, reason
    CouldNotReadStdin(String),
    CouldNotWriteOutput(String),
    Grammar(GrammarErr),
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for DriverErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DriverErrKind::*;
        let msg = match self {
            CouldNotReadSourceFile(path, reason) => {
                format!("Could not read source file: {path}: {reason}")
            }
            CouldNotReadStdin(reason) => format!("Could not read stdin: {reason}"),
            CouldNotWriteOutput(reason) => format!("Could not write output: {reason}"),
            Grammar(err) => format!("Grammar error: {err}"),
        };
        write!(f, "{msg}")
    }
}
