//! Stage 6: MySQL-only table and column options.
//!
//! Storage engine, charset and collation assignments, row format, index
//! method hints, `UNSIGNED`/`ZEROFILL`, and `ON UPDATE CURRENT_TIMESTAMP`
//! have no PostgreSQL counterpart and are deleted. Each pattern also eats the
//! blanks in front of it so no double spaces are left behind.
//!
//! Scope: schema statements only. `UNSIGNED` inside row data is data.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the option stripping stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![
        Rule::strip("engine", r"(?i)[ \t]*\bENGINE\s*=\s*\w+")?,
        Rule::strip(
            "character-set",
            r"(?i)[ \t]*\b(?:DEFAULT\s+)?(?:CHARACTER\s+SET|CHARSET)\s*=?\s*\w+",
        )?,
        Rule::strip("collate", r"(?i)[ \t]*\b(?:DEFAULT\s+)?COLLATE\s*=?\s*\w+")?,
        Rule::strip("row-format", r"(?i)[ \t]*\bROW_FORMAT\s*=\s*\w+")?,
        Rule::strip("index-method", r"(?i)[ \t]*\bUSING\s+(?:BTREE|HASH)\b")?,
        Rule::strip("unsigned", r"(?i)[ \t]*\b(?:UNSIGNED|ZEROFILL)\b")?,
        Rule::strip(
            "on-update-current-timestamp",
            r"(?i)[ \t]*\bON\s+UPDATE\s+CURRENT_TIMESTAMP(?:\s*\(\s*\d*\s*\))?",
        )?,
    ];

    Ok(RuleStage::new(
        "table-options",
        Scope::Schema,
        Protect::LiteralsAndIdentifiers,
        rules,
    ))
}
