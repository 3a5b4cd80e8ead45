use std::fmt;

use once_cell::sync::Lazy;

use super::result::{GrammarErr, GrammarErrKind, GrammarResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    S,
    SPrime,
    E,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::SPrime => "S'",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A nonterminal on a rule's right hand side and the column (in chars)
/// where it appears in the rule's rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Child {
    pub symbol: Symbol,
    pub col: usize,
}

/// One alternative of a production along with its rendered text.
#[derive(Debug, PartialEq, Eq)]
pub struct Rule {
    pub lhs: Symbol,
    pub text: &'static str,
    pub children: &'static [Child],
}

impl Rule {
    /// Column of the child at `index`, which is the amount to add to
    /// the current indent before descending into that child.
    pub const fn col(&self, index: usize) -> usize {
        self.children[index].col
    }
}

/// S -> E S'
pub const S: Rule = Rule {
    lhs: Symbol::S,
    text: "S -> ES'",
    children: &[Child { symbol: Symbol::E, col: 5 }, Child { symbol: Symbol::SPrime, col: 6 }],
};

/// S' -> + S
pub const S_PRIME_PLUS: Rule = Rule {
    lhs: Symbol::SPrime,
    text: "S' -> +S",
    children: &[Child { symbol: Symbol::S, col: 7 }],
};

/// S' -> ε
pub const S_PRIME_EMPTY: Rule = Rule { lhs: Symbol::SPrime, text: "S' -> ε", children: &[] };

/// E -> ( S )
///
/// NOTE: E -> NUM has no entry because it's rendered as the number's
///       lexeme.
pub const E_PARENS: Rule = Rule {
    lhs: Symbol::E,
    text: "E -> (S)",
    children: &[Child { symbol: Symbol::S, col: 6 }],
};

pub const RULES: [&Rule; 4] = [&S, &S_PRIME_PLUS, &S_PRIME_EMPTY, &E_PARENS];

static RULES_CHECKED: Lazy<GrammarResult> = Lazy::new(|| {
    log::trace!("BEGIN: checking rule offsets");
    let result = RULES.iter().try_for_each(|rule| check_rule(rule));
    log::trace!("END: checking rule offsets");
    result
});

/// Check every rule in the table. The check only runs once; later
/// calls return the cached result.
pub fn check_rules() -> GrammarResult {
    RULES_CHECKED.clone()
}

/// Check that each of the rule's child columns points at the child's
/// symbol in the rule's text.
pub fn check_rule(rule: &Rule) -> GrammarResult {
    for child in rule.children {
        let rest = match rule.text.char_indices().nth(child.col) {
            Some((i, _)) => &rule.text[i..],
            None => {
                return Err(GrammarErr::new(GrammarErrKind::OffsetOutOfRange(
                    rule.text, child.col,
                )));
            }
        };
        if symbol_at_start(rest) != Some(child.symbol) {
            return Err(GrammarErr::new(GrammarErrKind::OffsetMismatch(
                rule.text,
                child.col,
                child.symbol,
            )));
        }
    }
    Ok(())
}

fn symbol_at_start(text: &str) -> Option<Symbol> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('S'), Some('\'')) => Some(Symbol::SPrime),
        (Some('S'), _) => Some(Symbol::S),
        (Some('E'), _) => Some(Symbol::E),
        _ => None,
    }
}
