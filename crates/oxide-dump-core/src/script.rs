//! Statement segmentation of a dump document.
//!
//! A [`Script`] partitions the document into trivia (whitespace and comments
//! between statements) and statements (first significant token through the
//! terminating `;`). Segments tile the source exactly, so rewriting segment by
//! segment and concatenating the results never loses text.

use std::borrow::Cow;

use serde::Serialize;

use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Coarse classification of a statement by its leading keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// `CREATE DATABASE` / `CREATE SCHEMA`.
    CreateDatabase,
    /// `CREATE [TEMPORARY] TABLE`.
    CreateTable,
    /// `ALTER TABLE`.
    AlterTable,
    /// `USE` and `SET`.
    Session,
    /// `INSERT`, `REPLACE`, `UPDATE`, `DELETE`: statements that carry row data.
    Data,
    /// Everything else (`DROP TABLE`, `LOCK TABLES`, stray `;`, ...).
    Other,
}

impl StatementKind {
    /// Returns true for statements carrying row data.
    #[must_use]
    pub const fn is_data(self) -> bool {
        matches!(self, Self::Data)
    }

    /// Classifies a statement from its tokens.
    #[must_use]
    pub fn classify(tokens: &[Token]) -> Self {
        let mut keywords = tokens
            .iter()
            .filter(|t| !t.is_trivia())
            .map(Token::as_keyword);

        match keywords.next().flatten() {
            Some(Keyword::Create) => {
                for kw in keywords {
                    match kw {
                        Some(Keyword::Database | Keyword::Schema) => return Self::CreateDatabase,
                        Some(Keyword::Table) => return Self::CreateTable,
                        Some(Keyword::Temporary) => {}
                        _ => return Self::Other,
                    }
                }
                Self::Other
            }
            Some(Keyword::Alter) => match keywords.next().flatten() {
                Some(Keyword::Table) => Self::AlterTable,
                _ => Self::Other,
            },
            Some(Keyword::Use | Keyword::Set) => Self::Session,
            Some(Keyword::Insert | Keyword::Replace | Keyword::Update | Keyword::Delete) => {
                Self::Data
            }
            _ => Self::Other,
        }
    }
}

/// What a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Whitespace and comments between statements.
    Trivia,
    /// A statement, terminator included when present.
    Statement(StatementKind),
}

/// A contiguous slice of the document.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub span: Span,
    pub text: &'a str,
}

impl Segment<'_> {
    /// Returns the statement kind, or `None` for trivia.
    #[must_use]
    pub const fn statement_kind(&self) -> Option<StatementKind> {
        match self.kind {
            SegmentKind::Statement(kind) => Some(kind),
            SegmentKind::Trivia => None,
        }
    }
}

/// A document split into segments.
#[derive(Debug)]
pub struct Script<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Script<'a> {
    /// Splits `source` into trivia and statement segments.
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let tokens = Lexer::new(source).tokenize();
        let mut segments = Vec::new();
        let mut segment_start = 0;
        let mut statement_first: Option<usize> = None;

        for (index, token) in tokens.iter().enumerate() {
            let first = match statement_first {
                Some(first) => first,
                None if token.is_trivia() => continue,
                None => {
                    if token.span.start > segment_start {
                        segments.push(Self::segment(
                            source,
                            SegmentKind::Trivia,
                            Span::new(segment_start, token.span.start),
                        ));
                    }
                    segment_start = token.span.start;
                    statement_first = Some(index);
                    index
                }
            };

            if token.kind == TokenKind::Semicolon {
                let kind = StatementKind::classify(&tokens[first..=index]);
                segments.push(Self::segment(
                    source,
                    SegmentKind::Statement(kind),
                    Span::new(segment_start, token.span.end),
                ));
                segment_start = token.span.end;
                statement_first = None;
            }
        }

        if segment_start < source.len() {
            let kind = match statement_first {
                Some(first) => SegmentKind::Statement(StatementKind::classify(&tokens[first..])),
                None => SegmentKind::Trivia,
            };
            segments.push(Self::segment(
                source,
                kind,
                Span::new(segment_start, source.len()),
            ));
        }

        Self { source, segments }
    }

    fn segment(source: &'a str, kind: SegmentKind, span: Span) -> Segment<'a> {
        Segment {
            kind,
            span,
            text: span.slice(source),
        }
    }

    /// Returns all segments in document order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Iterates over statement segments only.
    pub fn statements(&self) -> impl Iterator<Item = &Segment<'a>> {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Statement(_)))
    }

    /// Rewrites each segment with `f` and reassembles the document.
    ///
    /// Returns the source unchanged (borrowed) when `f` borrows every segment.
    pub fn rewrite<F>(&self, mut f: F) -> Cow<'a, str>
    where
        F: FnMut(&Segment<'a>) -> Cow<'a, str>,
    {
        let mut pieces = Vec::with_capacity(self.segments.len());
        let mut changed = false;
        for segment in &self.segments {
            let piece = f(segment);
            changed |= matches!(piece, Cow::Owned(_));
            pieces.push(piece);
        }
        if changed {
            Cow::Owned(pieces.concat())
        } else {
            Cow::Borrowed(self.source)
        }
    }
}

/// Which token classes a rule must not see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protect {
    /// Rules see the raw text.
    Nothing,
    /// String literals are passed through untouched.
    Literals,
    /// String literals and backtick-quoted identifiers are passed through.
    LiteralsAndIdentifiers,
}

impl Protect {
    const fn covers(self, token: &Token) -> bool {
        match self {
            Self::Nothing => false,
            Self::Literals => token.is_literal(),
            Self::LiteralsAndIdentifiers => token.is_literal() || token.is_quoted_identifier(),
        }
    }
}

/// Applies `f` to every maximal run of text not covered by `protect`.
///
/// Protected tokens are copied verbatim, so a rule can never match across or
/// inside them.
pub fn map_unprotected<'a, F>(text: &'a str, protect: Protect, mut f: F) -> Cow<'a, str>
where
    F: FnMut(&'a str) -> Cow<'a, str>,
{
    if protect == Protect::Nothing {
        return f(text);
    }

    let tokens = Lexer::new(text).tokenize();
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut run_start = 0;

    for token in tokens.iter().filter(|t| protect.covers(t)) {
        if token.span.start > run_start {
            let piece = f(&text[run_start..token.span.start]);
            changed |= matches!(piece, Cow::Owned(_));
            out.push_str(&piece);
        }
        out.push_str(token.text(text));
        run_start = token.span.end;
    }
    if run_start < text.len() {
        let piece = f(&text[run_start..]);
        changed |= matches!(piece, Cow::Owned(_));
        out.push_str(&piece);
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}
