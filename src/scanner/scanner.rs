use super::{Location, Token, TokenKind};

/// Create a scanner from the specified text, scan the text, and return
/// the resulting tokens. The last token is always `End`.
pub fn scan_text(text: &str) -> Vec<Token> {
    Scanner::new(text).collect()
}

/// Single-token-lookahead scanner over an in-memory buffer.
///
/// The scanner always holds exactly one current token, which is
/// replaced on each call to [`Scanner::advance`]. The cursor only ever
/// moves forward; once a char has been classified it is never
/// re-scanned.
pub struct Scanner<'a> {
    /// This is the source code that's being scanned.
    text: &'a str,
    /// Byte offset of the next unread char in `text`.
    pos: usize,
    /// Location of the next unread char.
    loc: Location,
    /// Location of the most recently consumed char.
    prev_loc: Location,
    /// The lookahead token.
    current: Token,
    /// Set once `End` has been yielded via the iterator.
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner from the specified text and prime it with the
    /// first token.
    pub fn new(text: &'a str) -> Self {
        let start = Location::new(1, 1);
        let mut scanner = Self {
            text,
            pos: 0,
            loc: start,
            prev_loc: start,
            current: Token::new(TokenKind::End, "", start, start),
            exhausted: false,
        };
        scanner.advance();
        scanner
    }

    /// The current (lookahead) token. Does not consume anything.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Scan the next token from the buffer and make it current.
    pub fn advance(&mut self) {
        self.current = self.next_token();
        log::trace!("TOKEN: {}", self.current);
    }

    fn next_token(&mut self) -> Token {
        self.consume_whitespace();

        let start = self.loc;
        let start_pos = self.pos;

        let c = match self.next_char() {
            Some(c) => c,
            None => return Token::new(TokenKind::End, "", start, start),
        };

        let kind = match c {
            '0'..='9' => {
                while self.next_char_if(|c| c.is_ascii_digit()).is_some() {}
                TokenKind::Number
            }
            '+' => TokenKind::Plus,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => TokenKind::Error,
        };

        let lexeme = &self.text[start_pos..self.pos];
        Token::new(kind, lexeme, start, self.prev_loc)
    }

    fn consume_whitespace(&mut self) {
        while self.next_char_if(|c| matches!(c, ' ' | '\t' | '\n' | '\r')).is_some() {}
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Consume the next char, updating the cursor and location.
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.prev_loc = self.loc;
        if c == '\n' {
            self.loc = Location::new(self.loc.line + 1, 1);
        } else {
            self.loc = Location::new(self.loc.line, self.loc.col + 1);
        }
        Some(c)
    }

    /// Consume the next char if it matches the specified condition.
    fn next_char_if(&mut self, func: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if func(c) => self.next_char(),
            _ => None,
        }
    }
}

/// Yields the current token and then advances, stopping after `End`.
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.current.clone();
        if token.is(TokenKind::End) {
            self.exhausted = true;
        } else {
            self.advance();
        }
        Some(token)
    }
}
