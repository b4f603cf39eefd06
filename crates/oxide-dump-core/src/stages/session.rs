//! Stage 3: session-context statements.
//!
//! `USE` and the foreign-key toggles have no PostgreSQL equivalent and become
//! advisory comments; `SET NAMES` and `SET CHARACTER SET` become the client
//! encoding statement.

use crate::dialect::TargetDialect;
use crate::error::Result;
use crate::rule::{Rule, escape_replacement};
use crate::script::{Protect, StatementKind};
use crate::stage::{RuleStage, Scope};

/// Builds the session statement stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage(dialect: &dyn TargetDialect) -> Result<RuleStage> {
    let client_encoding = escape_replacement(&dialect.client_encoding_statement()).into_owned();
    let rules = vec![
        Rule::new("use", r"(?is)^USE\s+`?([^`\s;]+)`?\s*;$", "-- USE ${1};")?,
        Rule::new("set-names", r"(?is)^SET\s+NAMES\s+[^;]+;$", client_encoding.clone())?,
        Rule::new(
            "set-character-set",
            r"(?is)^SET\s+(?:CHARACTER\s+SET|CHARSET)\s+[^;]+;$",
            client_encoding,
        )?,
        Rule::new(
            "foreign-key-checks",
            r"(?is)^SET\s+FOREIGN_KEY_CHECKS\s*=\s*([01])\s*;$",
            "-- SET FOREIGN_KEY_CHECKS = ${1};",
        )?,
    ];

    Ok(RuleStage::new(
        "session",
        Scope::Statements(StatementKind::Session),
        Protect::Nothing,
        rules,
    ))
}
