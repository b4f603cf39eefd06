//! Stage 9: closing cleanup of `CREATE TABLE` definitions.
//!
//! Earlier stages can leave a definition list ending in `,` (a stripped
//! trailing index option, a comment moved after its comma) or put whitespace
//! between the closing paren and the terminator. Both are repaired so every
//! table ends with a single `);`.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::{Protect, StatementKind};
use crate::stage::{RuleStage, Scope};

/// Builds the closing-cleanup stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![
        Rule::new(
            "dangling-comma",
            r",((?:[ \t\r\n]+|--[^\n]*\n)*)\)[ \t\r\n]*;$",
            "${1});",
        )?,
        Rule::new("closing-paren", r"\)[ \t\r\n]+;$", ");")?,
    ];

    Ok(RuleStage::new(
        "closing-cleanup",
        Scope::Statements(StatementKind::CreateTable),
        Protect::Nothing,
        rules,
    ))
}
