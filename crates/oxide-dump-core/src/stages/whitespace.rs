//! Stage 11: whitespace cleanup.
//!
//! Removed statements and options leave blank lines behind. Runs of blank
//! lines collapse to one, and a bare `--` marker loses its trailing blanks.
//! Literals are protected: newlines inside row data are data.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the whitespace cleanup stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![
        Rule::new("blank-lines", r"(\r?\n)\s*\r?\n\s*\r?\n", "${1}${1}")?,
        Rule::new("bare-marker", r"--[ \t]+(\r?\n)", "--${1}")?,
        Rule::new("bare-marker-at-end", r"--[ \t]+\z", "--")?,
    ];

    Ok(RuleStage::new(
        "whitespace",
        Scope::Document,
        Protect::Literals,
        rules,
    ))
}
