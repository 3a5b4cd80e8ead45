//! # descent
//!
//! A scanner and LL(1) recursive descent parser for the grammar
//!
//! ```text
//! S  -> E S'
//! S' -> + S | ε
//! E  -> NUM | ( S )
//! ```
//!
//! Instead of building a tree, the parser records a derivation trace
//! in which each line is indented to sit under the symbol of the rule
//! that produced it.
pub use config::Config;
pub use driver::{Driver, DriverErr, DriverErrKind, DriverResult};
pub use grammar::{check_rules, GrammarErr, GrammarErrKind};
pub use parser::{parse_text, ParseErr, ParseErrKind, ParseOutput, Parser, TraceLine};
pub use scanner::{scan_text, Location, Scanner, Token, TokenKind};

pub mod config;
pub mod driver;
pub mod grammar;
pub mod parser;
pub mod scanner;

#[cfg(test)]
mod tests;
