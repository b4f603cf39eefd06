//! Stage 2: `CREATE DATABASE ... CHARACTER SET ...`.
//!
//! The statement becomes an advisory comment carrying the target encoding and
//! locale. The source charset and collation are discarded. mysqldump wraps
//! `IF NOT EXISTS` and the charset in `/*!NNNNN ... */` comments that MySQL
//! executes, so those are unwrapped first.

use crate::dialect::TargetDialect;
use crate::error::Result;
use crate::rule::{Rule, escape_replacement};
use crate::script::{Protect, StatementKind};
use crate::stage::{RuleStage, Scope};

/// Builds the database-creation stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage(dialect: &dyn TargetDialect) -> Result<RuleStage> {
    let options = escape_replacement(&dialect.database_options()).into_owned();
    let rules = vec![
        Rule::new(
            "conditional-comment",
            r"(?s)/\*!\d*\s*(.*?)\s*\*/",
            "${1}",
        )?,
        Rule::new(
            "create-database",
            r"(?is)^CREATE\s+(?:DATABASE|SCHEMA)\s+(?:IF\s+NOT\s+EXISTS\s+)?`?([^`\s;]+)`?[^;]*?(?:CHARACTER\s+SET|CHARSET)[^;]*;$",
            format!("-- CREATE DATABASE ${{1}} {options};"),
        )?,
    ];

    Ok(RuleStage::new(
        "create-database",
        Scope::Statements(StatementKind::CreateDatabase),
        Protect::Nothing,
        rules,
    ))
}
