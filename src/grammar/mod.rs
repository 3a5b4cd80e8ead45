//! The fixed grammar, along with the text each rule is rendered as in
//! a derivation trace:
//!
//! ```text
//! S  -> E S'
//! S' -> + S | ε
//! E  -> NUM | ( S )
//! ```
pub use result::{GrammarErr, GrammarErrKind, GrammarResult};
pub use rules::{
    check_rule, check_rules, Child, Rule, Symbol, E_PARENS, RULES, S, S_PRIME_EMPTY,
    S_PRIME_PLUS,
};

mod result;
mod rules;
