//! Stage 1: dump-tool metadata in header comments.
//!
//! Navicat stamps the source and target server into a block comment at the top
//! of the dump; mysqldump writes `-- Host:` and `-- Server version` lines.
//! All of them are replaced with the target dialect's values whatever the dump
//! said.
//!
//! Scope: trivia only, so statements that happen to contain these phrases are
//! left alone.

use crate::dialect::TargetDialect;
use crate::error::Result;
use crate::rule::{Rule, escape_replacement};
use crate::script::Protect;
use crate::stage::{RuleStage, Scope};

/// Builds the header rewrite stage.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn stage(dialect: &dyn TargetDialect) -> Result<RuleStage> {
    let server_type = escape_replacement(dialect.server_type());
    let version = escape_replacement(dialect.server_version());
    let endpoint = escape_replacement(dialect.endpoint());
    let host = escape_replacement(dialect.host());

    let rules = vec![
        Rule::new(
            "server-type",
            r"(Source|Target) Server Type[ \t]*:[ \t]*MySQL\b",
            format!("$1 Server Type    : {server_type}"),
        )?,
        Rule::new(
            "server-version",
            r"(Source|Target) Server Version[ \t]*:[ \t]*[0-9][0-9.]*(?:[ \t]*\([0-9.]+\))?",
            format!("$1 Server Version : {version}"),
        )?,
        Rule::new(
            "source-host",
            r"Source Host[ \t]*:[ \t]*[^:\r\n]+:\d+",
            format!("Source Host           : {endpoint}"),
        )?,
        Rule::new(
            "mysqldump-host",
            r"(--[ \t]*Host:[ \t]*)[^ \t\r\n]+",
            format!("${{1}}{host}"),
        )?,
        Rule::new(
            "mysqldump-server-version",
            r"(-- Server version)([ \t]+)[0-9][\w.\-]*",
            format!("${{1}}${{2}}{version}"),
        )?,
    ];

    Ok(RuleStage::new("header", Scope::Trivia, Protect::Nothing, rules))
}
