//! Stage 8: `COMMENT '...'` annotations.
//!
//! PostgreSQL attaches documentation with separate `COMMENT ON` statements, so
//! the inline annotations are turned into trailing `--` line comments that
//! keep the text for a human reader.
//!
//! Inside the definition list (paren depth > 0) the comment replaces the
//! annotation in place. A following `,` is emitted before the comment and
//! anything else on the same line is pushed to the next one, so the rest of
//! the statement stays live. At depth 0 (table options, `ALTER TABLE`) the
//! annotation is removed and the comment is written after the terminator.
//!
//! Pre: stage 7 has run, so a column named `comment` is a bare word followed
//! by its type, not by a literal, and is not mistaken for an annotation.

use std::borrow::Cow;

use crate::lexer::{Keyword, Lexer, Token, TokenKind};
use crate::script::Script;
use crate::stage::{Scope, Stage};

/// Rewrites inline `COMMENT` annotations in schema statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineComments;

impl InlineComments {
    /// Creates the stage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Stage for InlineComments {
    fn name(&self) -> &'static str {
        "inline-comments"
    }

    fn apply<'a>(&self, document: &'a str) -> Cow<'a, str> {
        Script::parse(document).rewrite(|segment| {
            if Scope::Schema.contains(segment) {
                rewrite_statement(segment.text)
            } else {
                Cow::Borrowed(segment.text)
            }
        })
    }
}

/// A `COMMENT [=] '<text>'` annotation found in a token stream.
struct Annotation {
    /// Decoded comment text, single line.
    text: String,
    /// Index of the first token after the literal.
    end: usize,
}

impl Annotation {
    /// Reads an annotation whose `COMMENT` keyword is at `index`.
    fn read(tokens: &[Token], index: usize, source: &str) -> Option<Self> {
        let mut next = skip_whitespace(tokens, index + 1);
        if tokens.get(next)?.kind == TokenKind::Eq {
            next = skip_whitespace(tokens, next + 1);
        }
        let literal = tokens.get(next)?;
        if literal.kind != TokenKind::String {
            return None;
        }
        Some(Self {
            text: decode_literal(literal.text(source)),
            end: next + 1,
        })
    }
}

fn rewrite_statement(text: &str) -> Cow<'_, str> {
    let tokens = Lexer::new(text).tokenize();
    if !tokens.iter().any(|t| t.is_keyword(Keyword::Comment)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut trailing = Vec::new();
    let mut depth = 0usize;
    let mut changed = false;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth = depth.saturating_sub(1),
            TokenKind::Keyword(Keyword::Comment) => {
                if let Some(annotation) = Annotation::read(&tokens, index, text) {
                    changed = true;
                    trim_blanks(&mut out);
                    index = if depth == 0 {
                        if !annotation.text.is_empty() {
                            trailing.push(annotation.text);
                        }
                        annotation.end
                    } else {
                        emit_column_comment(&mut out, &tokens, annotation, text)
                    };
                    continue;
                }
            }
            _ => {}
        }
        out.push_str(token.text(text));
        index += 1;
    }

    if !changed {
        return Cow::Borrowed(text);
    }
    for note in trailing {
        if !out.is_empty() && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        out.push_str("-- ");
        out.push_str(&note);
    }
    Cow::Owned(out)
}

/// Writes a column-level comment and returns the index to resume from.
fn emit_column_comment(
    out: &mut String,
    tokens: &[Token],
    annotation: Annotation,
    source: &str,
) -> usize {
    let mut next = annotation.end;
    let after_blanks = skip_blanks(tokens, next, source);
    if tokens
        .get(after_blanks)
        .is_some_and(|t| t.kind == TokenKind::Comma)
    {
        out.push(',');
        next = after_blanks + 1;
    }

    if annotation.text.is_empty() {
        return next;
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push(' ');
    }
    out.push_str("-- ");
    out.push_str(&annotation.text);

    // A line comment swallows the rest of its line: make sure one ends here.
    match tokens.get(next) {
        Some(t) if t.kind == TokenKind::Whitespace => {
            let blank = t.text(source);
            match blank.find('\n') {
                Some(newline) => out.push_str(&blank[newline..]),
                None => out.push('\n'),
            }
            next + 1
        }
        Some(_) => {
            out.push('\n');
            next
        }
        None => next,
    }
}

fn skip_whitespace(tokens: &[Token], mut index: usize) -> usize {
    while tokens
        .get(index)
        .is_some_and(|t| t.kind == TokenKind::Whitespace)
    {
        index += 1;
    }
    index
}

/// Skips a whitespace token that does not end the line.
fn skip_blanks(tokens: &[Token], index: usize, source: &str) -> usize {
    match tokens.get(index) {
        Some(t) if t.kind == TokenKind::Whitespace && !t.text(source).contains('\n') => index + 1,
        _ => index,
    }
}

fn trim_blanks(out: &mut String) {
    let len = out.trim_end_matches([' ', '\t']).len();
    out.truncate(len);
}

/// Decodes a MySQL string literal (quotes included) into one line of text.
fn decode_literal(literal: &str) -> String {
    let quote = literal.chars().next();
    let inner = &literal[1..literal.len() - 1];
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n' | 'r' | 't') => text.push(' '),
                Some('0') | None => {}
                Some(escaped) => text.push(escaped),
            },
            c if Some(c) == quote && chars.peek() == Some(&c) => {
                chars.next();
                text.push(c);
            }
            '\r' | '\n' | '\t' => text.push(' '),
            c => text.push(c),
        }
    }
    text.trim().to_string()
}
