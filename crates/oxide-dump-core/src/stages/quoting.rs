//! Stage 7: identifier quoting.
//!
//! Backtick pairs are removed and the identifier is left bare. String
//! literals are protected, so a backtick inside row data survives. Comments
//! are not protected: `-- Table structure for table `users`` loses its
//! backticks too.

use crate::error::Result;
use crate::rule::Rule;
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the quoting normalization stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage() -> Result<RuleStage> {
    let rules = vec![Rule::new("backticks", r"`([^`]+)`", "${1}")?];
    Ok(RuleStage::new(
        "quoting",
        Scope::Document,
        Protect::Literals,
        rules,
    ))
}
