use crate::grammar::{self, Rule};
use crate::scanner::{Scanner, TokenKind};

use super::{ParseErr, ParseErrKind, ParseOutput, TraceLine};

/// Create a parser for the specified text, parse it, and return the
/// resulting derivation trace and errors. A `max_depth` of 0 means
/// nesting isn't limited.
pub fn parse_text(text: &str, max_depth: usize) -> ParseOutput {
    let scanner = Scanner::new(text);
    let parser = Parser::new(scanner, max_depth);
    parser.parse()
}

/// LL(1) recursive descent parser that records a derivation trace as
/// it goes. Each grammar procedure takes the column its rule is
/// rendered at and passes `indent + col` down to each child, where
/// `col` is the child's column in the rule's text, so children line up
/// under the symbols that produced them.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    max_depth: usize,
    depth: usize,
    /// Set when the max depth is exceeded. Once set, nothing more is
    /// consumed, recorded, or reported.
    halted: bool,
    trace: Vec<TraceLine>,
    errors: Vec<ParseErr>,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>, max_depth: usize) -> Self {
        Self {
            scanner,
            max_depth,
            depth: 0,
            halted: false,
            trace: vec![],
            errors: vec![],
        }
    }

    pub fn parse(mut self) -> ParseOutput {
        log::trace!("BEGIN: parse");
        self.parse_s(0);
        log::trace!("END: parse");

        // Trailing tokens aren't an error, but note them.
        let remaining = self.scanner.take_while(|t| !t.is(TokenKind::End)).count();
        if remaining > 0 {
            log::debug!("Parse finished with {remaining} unconsumed token(s)");
        }

        ParseOutput { trace: self.trace, errors: self.errors }
    }

    // Grammar ---------------------------------------------------------

    /// S -> E S'
    fn parse_s(&mut self, indent: usize) {
        if self.halted {
            return;
        }

        if self.max_depth > 0 && self.depth >= self.max_depth {
            self.halt();
            return;
        }

        self.depth += 1;
        log::trace!("BEGIN: S @ {indent} (depth {})", self.depth);

        let rule = &grammar::S;
        self.record_rule(indent, rule);
        self.parse_e(indent + rule.col(0));
        self.parse_s_prime(indent + rule.col(1));

        log::trace!("END: S @ {indent}");
        self.depth -= 1;
    }

    /// S' -> + S | ε
    fn parse_s_prime(&mut self, indent: usize) {
        if self.halted {
            return;
        }

        if self.scanner.current().is(TokenKind::Plus) {
            let rule = &grammar::S_PRIME_PLUS;
            self.record_rule(indent, rule);
            self.expect(TokenKind::Plus);
            self.parse_s(indent + rule.col(0));
        } else {
            self.record_rule(indent, &grammar::S_PRIME_EMPTY);
        }
    }

    /// E -> NUM | ( S )
    fn parse_e(&mut self, indent: usize) {
        if self.halted {
            return;
        }

        let token = self.scanner.current();

        match token.kind {
            TokenKind::Number => {
                let line = TraceLine::new(indent, &token.lexeme);
                self.trace.push(line);
                self.expect(TokenKind::Number);
            }
            TokenKind::LeftParen => {
                let rule = &grammar::E_PARENS;
                self.record_rule(indent, rule);
                self.expect(TokenKind::LeftParen);
                self.parse_s(indent + rule.col(0));
                self.expect(TokenKind::RightParen);
            }
            _ => {
                let kind = ParseErrKind::Unexpected(token.lexeme.clone());
                self.err(kind);
            }
        }
    }

    // Utilities -------------------------------------------------------

    /// Report an error if the current token isn't of the expected kind.
    /// The current token is consumed either way.
    fn expect(&mut self, kind: TokenKind) {
        if self.halted {
            return;
        }

        let token = self.scanner.current();

        if !token.is(kind) {
            let kind = ParseErrKind::Mismatch(kind, token.lexeme.clone());
            self.err(kind);
        }

        self.scanner.advance();
    }

    fn record_rule(&mut self, indent: usize, rule: &Rule) {
        self.trace.push(TraceLine::new(indent, rule.text));
    }

    /// Record an error at the location of the current token.
    fn err(&mut self, kind: ParseErrKind) {
        let err = ParseErr::new(kind, self.scanner.current().start);
        log::trace!("ERROR @ {}: {err}", err.loc);
        self.errors.push(err);
    }

    fn halt(&mut self) {
        self.err(ParseErrKind::TooDeeplyNested(self.max_depth));
        self.halted = true;
    }
}
