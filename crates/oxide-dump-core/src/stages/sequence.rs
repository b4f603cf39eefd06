//! Stage 10: sequence bootstrap.
//!
//! A dump restores explicit key values, which leaves a `SERIAL` column's
//! sequence behind the data. For each `CREATE TABLE` declaring a `SERIAL`
//! column an advisory reset statement is emitted, either right after the
//! table or collected at the end of the script.
//!
//! Pre: stages 5 and 7 have run (`SERIAL` present, identifiers unquoted).

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::dialect::TargetDialect;
use crate::error::Result;
use crate::lexer::{Lexer, TokenKind};
use crate::options::{SequenceBootstrap, SequencePlacement};
use crate::rule::compile;
use crate::script::{Script, SegmentKind, StatementKind};
use crate::stage::Stage;

/// Emits sequence reset statements for tables with a `SERIAL` column.
#[derive(Debug)]
pub struct SequenceReset {
    dialect: Arc<dyn TargetDialect>,
    key_column: Option<String>,
    placement: SequencePlacement,
    table_name: Regex,
    serial_column: Regex,
}

impl SequenceReset {
    /// Creates the stage.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new(dialect: Arc<dyn TargetDialect>, bootstrap: &SequenceBootstrap) -> Result<Self> {
        Ok(Self {
            dialect,
            key_column: bootstrap.key_column.clone(),
            placement: bootstrap.placement,
            table_name: compile(
                "table-name",
                r"(?is)^CREATE\s+(?:TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?([A-Za-z_][\w.]*)\s*\(",
            )?,
            serial_column: compile("serial-column", r"(?i)\b(\w+)\s+(?:\w+\s+)?SERIAL\b")?,
        })
    }

    /// Returns the reset statement for a `CREATE TABLE`, if it needs one.
    fn reset_for(&self, statement: &str) -> Option<String> {
        let code = code_only(statement);
        let table = self.table_name.captures(&code)?.get(1)?.as_str();
        let serial = self.serial_column.captures(&code)?.get(1)?.as_str();
        let column = self.key_column.as_deref().unwrap_or(serial);
        debug!(table, column, "Sequence reset");
        Some(self.dialect.sequence_reset(table, column))
    }
}

impl Stage for SequenceReset {
    fn name(&self) -> &'static str {
        "sequence-bootstrap"
    }

    fn apply<'a>(&self, document: &'a str) -> Cow<'a, str> {
        let script = Script::parse(document);
        let is_table = |kind: Option<StatementKind>| kind == Some(StatementKind::CreateTable);

        match self.placement {
            SequencePlacement::AfterTable => {
                let segments = script.segments();
                let mut out = String::new();
                let mut emitted = 0;

                for (index, segment) in segments.iter().enumerate() {
                    if !is_table(segment.statement_kind()) {
                        continue;
                    }
                    let Some(reset) = self.reset_for(segment.text) else {
                        continue;
                    };
                    if document.contains(&reset) {
                        continue;
                    }
                    // Keep a table comment on the statement's line ahead of the reset.
                    let end = segment.span.end
                        + segments
                            .get(index + 1)
                            .filter(|next| next.kind == SegmentKind::Trivia)
                            .map_or(0, |next| same_line_comment_len(next.text));
                    out.push_str(&document[emitted..end]);
                    out.push_str("\n\n-- Reset sequence\n");
                    out.push_str(&reset);
                    emitted = end;
                }

                if emitted == 0 {
                    return Cow::Borrowed(document);
                }
                out.push_str(&document[emitted..]);
                Cow::Owned(out)
            }
            SequencePlacement::EndOfScript => {
                let resets: Vec<String> = script
                    .statements()
                    .filter(|s| is_table(s.statement_kind()))
                    .filter_map(|s| self.reset_for(s.text))
                    .filter(|reset| !document.contains(reset.as_str()))
                    .collect();
                if resets.is_empty() {
                    return Cow::Borrowed(document);
                }

                let mut out = document.to_string();
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("\n-- Reset sequences\n");
                for reset in resets {
                    out.push_str(&reset);
                    out.push('\n');
                }
                Cow::Owned(out)
            }
        }
    }
}

/// Length of a `-- ...` comment continuing the line that `trivia` starts on.
fn same_line_comment_len(trivia: &str) -> usize {
    let blanks = trivia.len() - trivia.trim_start_matches([' ', '\t']).len();
    let rest = &trivia[blanks..];
    if rest.starts_with("--") {
        blanks + rest.find('\n').unwrap_or(rest.len())
    } else {
        0
    }
}

/// Blanks out comments and literals so patterns only see code.
fn code_only(statement: &str) -> String {
    Lexer::new(statement)
        .tokenize()
        .iter()
        .map(|t| match t.kind {
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::String => " ",
            _ => t.text(statement),
        })
        .collect()
}
