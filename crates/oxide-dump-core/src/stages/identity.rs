//! Stage 5: identity columns.
//!
//! Pre: stage 4 has run, so the column type in front of the modifier is
//! already unparameterized (`id INTEGER NOT NULL AUTO_INCREMENT`).
//! Post: the modifier reads `SERIAL`, and the table-level
//! `AUTO_INCREMENT = N` start value is gone.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the identity column stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![
        Rule::new(
            "not-null-auto-increment",
            r"(?i)\bNOT\s+NULL\s+AUTO_INCREMENT\b",
            "SERIAL",
        )?,
        Rule::strip("auto-increment-start", r"(?i)[ \t]*\bAUTO_INCREMENT\s*=\s*\d+")?,
    ];

    Ok(RuleStage::new(
        "identity",
        Scope::Schema,
        Protect::LiteralsAndIdentifiers,
        rules,
    ))
}
