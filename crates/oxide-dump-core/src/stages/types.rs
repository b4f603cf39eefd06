//! Stage 4: scalar type mapping.
//!
//! Display widths on integer types mean nothing to PostgreSQL and are dropped.
//! Every pattern starts on a word boundary so `bigint(20)` is never read as
//! `big` + `int(20)` and identifiers such as `point_int(3)` are not touched.
//!
//! Scope: schema statements. Literals and backtick-quoted identifiers are
//! protected, so a column named `` `datetime` `` keeps its name.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the type mapping stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![
        Rule::new("bigint", r"(?i)\bbigint\s*\(\s*\d+\s*\)", "BIGINT")?,
        Rule::new("tinyint", r"(?i)\btinyint\s*\(\s*\d+\s*\)", "SMALLINT")?,
        Rule::new("smallint", r"(?i)\bsmallint\s*\(\s*\d+\s*\)", "SMALLINT")?,
        Rule::new("mediumint", r"(?i)\bmediumint\s*\(\s*\d+\s*\)", "INTEGER")?,
        Rule::new("int", r"(?i)\bint\s*\(\s*\d+\s*\)", "INTEGER")?,
        Rule::new("large-text", r"(?i)\b(?:tiny|medium|long)text\b", "TEXT")?,
        Rule::new("blob", r"(?i)\b(?:tiny|medium|long)?blob\b", "BYTEA")?,
        Rule::new("datetime", r"(?i)\bdatetime\b", "TIMESTAMP")?,
    ];

    Ok(RuleStage::new(
        "types",
        Scope::Schema,
        Protect::LiteralsAndIdentifiers,
        rules,
    ))
}
