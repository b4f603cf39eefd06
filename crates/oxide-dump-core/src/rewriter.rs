//! The rewrite pipeline runner.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dialect::{PostgresDialect, TargetDialect};
use crate::error::Result;
use crate::lexer::{Lexer, TokenKind};
use crate::options::RewriteOptions;
use crate::stage::Stage;
use crate::stages;

/// Whether a stage changed the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageOutcome {
    /// Stage name.
    pub stage: &'static str,
    /// True if the stage's output differs from its input.
    pub changed: bool,
}

/// Result of running the pipeline.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The rewritten document.
    pub output: String,
    /// One entry per stage, in application order.
    pub stages: Vec<StageOutcome>,
}

/// Applies an ordered list of stages to a dump document.
///
/// # Example
///
/// ```rust
/// use oxide_dump_core::{RewriteOptions, Rewriter};
///
/// let rewriter = Rewriter::new(&RewriteOptions::default()).unwrap();
/// let sql = rewriter.rewrite("CREATE TABLE `t` (`id` int(11) NOT NULL AUTO_INCREMENT);");
/// assert_eq!(sql, "CREATE TABLE t (id INTEGER SERIAL);");
/// ```
pub struct Rewriter {
    stages: Vec<Box<dyn Stage>>,
}

impl Rewriter {
    /// Creates the standard pipeline targeting PostgreSQL.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule pattern fails to compile.
    pub fn new(options: &RewriteOptions) -> Result<Self> {
        Self::with_dialect(Arc::new(PostgresDialect::new()), options)
    }

    /// Creates the standard pipeline for a target dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule pattern fails to compile.
    pub fn with_dialect(dialect: Arc<dyn TargetDialect>, options: &RewriteOptions) -> Result<Self> {
        debug!(dialect = dialect.name(), "Building rewrite pipeline");
        Ok(Self::from_stages(stages::standard(dialect, options)?))
    }

    /// Creates a pipeline from explicit stages.
    #[must_use]
    pub fn from_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Returns stage names in application order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Rewrites `source`.
    #[must_use]
    pub fn rewrite(&self, source: &str) -> String {
        self.rewrite_with_outcomes(source).output
    }

    /// Rewrites `source`, recording which stages changed it.
    #[must_use]
    pub fn rewrite_with_outcomes(&self, source: &str) -> Rewrite {
        warn_lex_errors(source);

        let mut document = source.to_string();
        let mut outcomes = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let next = match stage.apply(&document) {
                Cow::Owned(rewritten) if rewritten != document => Some(rewritten),
                _ => None,
            };
            let changed = next.is_some();
            debug!(stage = stage.name(), changed, "Applied stage");
            if let Some(rewritten) = next {
                document = rewritten;
            }
            outcomes.push(StageOutcome {
                stage: stage.name(),
                changed,
            });
        }

        Rewrite {
            output: document,
            stages: outcomes,
        }
    }
}

impl fmt::Debug for Rewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rewriter")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Logs unterminated strings, identifiers and comments.
///
/// Such a token runs to the end of the input, so everything after it is
/// treated as a literal (or comment) and left untouched.
fn warn_lex_errors(source: &str) {
    let mut lexer = Lexer::new(source);
    while let Some(token) = lexer.next_token() {
        if let TokenKind::Error(error) = token.kind {
            warn!(offset = token.span.start, "{}", error.message());
        }
    }
}
