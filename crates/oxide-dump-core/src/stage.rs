//! Pipeline stages.
//!
//! A stage is a pure text transform: it takes the whole document and returns
//! the rewritten document. Most stages are a [`RuleStage`], an ordered rule
//! list bounded by a [`Scope`] and a [`Protect`] setting. Stages that need to
//! look at tokens (inline comments, sequence bootstrap) implement [`Stage`]
//! directly.

use std::borrow::Cow;

use crate::rule::{Rule, apply_all};
use crate::script::{Protect, Script, Segment, SegmentKind, StatementKind, map_unprotected};

/// A single step of the rewrite pipeline.
pub trait Stage: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Rewrites `document`, borrowing it when nothing changed.
    fn apply<'a>(&self, document: &'a str) -> Cow<'a, str>;
}

/// Which part of the document a stage may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole document as one string.
    Document,
    /// Whitespace and comments between statements.
    Trivia,
    /// Statements of a single kind.
    Statements(StatementKind),
    /// Every statement that carries neither row data nor session settings.
    Schema,
}

impl Scope {
    /// Returns true if `segment` is inside this scope.
    #[must_use]
    pub fn contains(self, segment: &Segment<'_>) -> bool {
        match (self, segment.kind) {
            (Self::Document, _) | (Self::Trivia, SegmentKind::Trivia) => true,
            (Self::Statements(wanted), SegmentKind::Statement(kind)) => wanted == kind,
            (Self::Schema, SegmentKind::Statement(kind)) => {
                !kind.is_data() && kind != StatementKind::Session
            }
            _ => false,
        }
    }
}

/// An ordered rule list applied within a scope.
#[derive(Debug, Clone)]
pub struct RuleStage {
    name: &'static str,
    scope: Scope,
    protect: Protect,
    rules: Vec<Rule>,
}

impl RuleStage {
    /// Creates a stage from its rules.
    #[must_use]
    pub const fn new(name: &'static str, scope: Scope, protect: Protect, rules: Vec<Rule>) -> Self {
        Self {
            name,
            scope,
            protect,
            rules,
        }
    }

    fn apply_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        map_unprotected(text, self.protect, |run| apply_all(&self.rules, run))
    }
}

impl Stage for RuleStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, document: &'a str) -> Cow<'a, str> {
        if self.scope == Scope::Document {
            return self.apply_text(document);
        }
        Script::parse(document).rewrite(|segment| {
            if self.scope.contains(segment) {
                self.apply_text(segment.text)
            } else {
                Cow::Borrowed(segment.text)
            }
        })
    }
}
