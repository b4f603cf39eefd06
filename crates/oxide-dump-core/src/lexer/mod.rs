//! Lossless SQL dump lexer.
//!
//! Unlike a parser-facing lexer, this one keeps whitespace and comments as
//! tokens: concatenating the text of every token reproduces the input
//! byte-for-byte. The rewrite stages rely on this to find statement
//! boundaries and string literals without disturbing anything else.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, LexError, Token, TokenKind};
pub use tokenizer::Lexer;
