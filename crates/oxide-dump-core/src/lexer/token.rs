//! Token types for the dump lexer.

use super::Span;

/// Keywords the rewriter needs to recognize.
///
/// This is intentionally not a full SQL keyword table: only words that decide
/// how a statement is classified or where an annotation starts are listed.
/// Every other word is a [`TokenKind::Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Data Definition Language (DDL)
    Create,
    Alter,
    Table,
    Database,
    Schema,
    Temporary,

    // Session
    Use,
    Set,

    // Data Manipulation Language (DML)
    Insert,
    Replace,
    Update,
    Delete,

    // Annotations
    Comment,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Some(Self::Create),
            "ALTER" => Some(Self::Alter),
            "TABLE" => Some(Self::Table),
            "DATABASE" => Some(Self::Database),
            "SCHEMA" => Some(Self::Schema),
            "TEMPORARY" => Some(Self::Temporary),
            "USE" => Some(Self::Use),
            "SET" => Some(Self::Set),
            "INSERT" => Some(Self::Insert),
            "REPLACE" => Some(Self::Replace),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Why a token could not be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    UnterminatedString,
    UnterminatedIdentifier,
    UnterminatedComment,
}

impl LexError {
    /// Human-readable description.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedIdentifier => "unterminated quoted identifier",
            Self::UnterminatedComment => "unterminated block comment",
        }
    }
}

/// The kind of token.
///
/// Tokens carry no text of their own; use [`Token::text`] with the source
/// they were lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of whitespace, newlines included.
    Whitespace,
    /// `-- ...` up to (not including) the newline.
    LineComment,
    /// `/* ... */`, including MySQL `/*!40101 ... */` conditional comments.
    BlockComment,
    /// `'...'` or `"..."` literal, quotes included.
    String,
    /// `` `...` `` identifier, backticks included.
    QuotedIdentifier,
    /// One of the recognized [`Keyword`]s.
    Keyword(Keyword),
    /// Any other bare word.
    Word,
    /// Numeric literal.
    Number,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// =
    Eq,
    /// Any other single character.
    Punct,
    /// Unterminated construct; the token runs to the end of input.
    Error(LexError),
}

/// A token with its span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the token's text within `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    /// Returns true for whitespace and comments.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Returns true for string literals, terminated or not.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::String | TokenKind::Error(LexError::UnterminatedString)
        )
    }

    /// Returns true for backtick-quoted identifiers, terminated or not.
    #[must_use]
    pub const fn is_quoted_identifier(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::QuotedIdentifier | TokenKind::Error(LexError::UnterminatedIdentifier)
        )
    }

    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}
