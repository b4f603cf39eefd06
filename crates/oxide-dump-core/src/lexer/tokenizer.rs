//! Dump tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};

/// A lexer that splits dump text into lossless tokens.
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    /// Returns true at `--` followed by whitespace or end of input.
    ///
    /// MySQL reads `n--1` as `n - (-1)`, not as `n` and a comment.
    fn at_line_comment(&self) -> bool {
        let mut chars = self.input[self.pos..].chars();
        chars.next() == Some('-')
            && chars.next() == Some('-')
            && chars.next().is_none_or(char::is_whitespace)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn scan_whitespace(&mut self) -> Token {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.make_token(TokenKind::Whitespace)
    }

    fn scan_line_comment(&mut self) -> Token {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        self.make_token(TokenKind::LineComment)
    }

    fn scan_block_comment(&mut self) -> Token {
        self.advance(); // /
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return self.make_token(TokenKind::BlockComment);
                }
                Some(_) => {}
                None => return self.make_token(TokenKind::Error(LexError::UnterminatedComment)),
            }
        }
    }

    /// Scans a `'...'` or `"..."` literal.
    ///
    /// MySQL dumps escape with backslashes (`\'`, `\\`) and sometimes with a
    /// doubled quote (`''`); both are accepted.
    fn scan_string(&mut self, quote: char) -> Token {
        self.advance(); // opening quote
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                    } else {
                        return self.make_token(TokenKind::String);
                    }
                }
                Some(_) => {}
                None => return self.make_token(TokenKind::Error(LexError::UnterminatedString)),
            }
        }
    }

    /// Scans a `` `...` `` identifier. A doubled backtick is an escaped backtick.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // opening backtick
        loop {
            match self.advance() {
                Some('`') => {
                    if self.peek() == Some('`') {
                        self.advance();
                    } else {
                        return self.make_token(TokenKind::QuotedIdentifier);
                    }
                }
                Some(_) => {}
                None => {
                    return self.make_token(TokenKind::Error(LexError::UnterminatedIdentifier));
                }
            }
        }
    }

    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number)
    }

    fn scan_word(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Word),
        }
    }

    /// Scans the next token, or returns `None` at end of input.
    #[must_use]
    pub fn next_token(&mut self) -> Option<Token> {
        self.start = self.pos;
        let c = self.peek()?;

        let token = match c {
            c if c.is_whitespace() => self.scan_whitespace(),
            '-' if self.at_line_comment() => self.scan_line_comment(),
            '/' if self.peek_next() == Some('*') => self.scan_block_comment(),
            '\'' | '"' => self.scan_string(c),
            '`' => self.scan_quoted_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            _ => {
                self.advance();
                let kind = match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    '=' => TokenKind::Eq,
                    _ => TokenKind::Punct,
                };
                self.make_token(kind)
            }
        };
        Some(token)
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}
