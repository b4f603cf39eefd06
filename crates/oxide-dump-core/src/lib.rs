//! # oxide-dump-core
//!
//! Text-level translation of MySQL dump files into PostgreSQL-compatible SQL.
//!
//! The translator is not a SQL parser. A lossless lexer finds statement
//! boundaries, string literals and quoted identifiers, and an ordered
//! pipeline of rewrite stages edits the text around them:
//!
//! 1. Header metadata (server type, version, host)
//! 2. `CREATE DATABASE` becomes an advisory comment
//! 3. Session statements (`USE`, `SET NAMES`, `SET FOREIGN_KEY_CHECKS`)
//! 4. Scalar type mapping
//! 5. `NOT NULL AUTO_INCREMENT` becomes `SERIAL`
//! 6. Storage options (`ENGINE`, `CHARSET`, `COLLATE`, `UNSIGNED`, ...)
//! 7. Backtick quoting
//! 8. `COMMENT '...'` becomes a `--` line comment
//! 9. Closing cleanup of `CREATE TABLE` (optional)
//! 10. Sequence bootstrap (optional)
//! 11. Whitespace cleanup
//!
//! Row data in `INSERT` statements is never rewritten.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dump_core::prelude::*;
//!
//! let dump = "CREATE TABLE `users` (\n  `id` int(11) NOT NULL AUTO_INCREMENT,\n  \
//!             `name` varchar(50) COMMENT 'name'\n) ENGINE=InnoDB;";
//!
//! let rewriter = Rewriter::new(&Preset::Improved.options()).unwrap();
//! assert_eq!(
//!     rewriter.rewrite(dump),
//!     "CREATE TABLE users (\n  id INTEGER SERIAL,\n  name varchar(50) -- name\n);"
//! );
//! ```

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod options;
pub mod rewriter;
pub mod rule;
pub mod script;
pub mod stage;
pub mod stages;

pub use dialect::{PostgresDialect, TargetDialect};
pub use error::{Result, RewriteError};
pub use options::{Preset, RewriteOptions, SequenceBootstrap, SequencePlacement};
pub use rewriter::{Rewrite, Rewriter, StageOutcome};
pub use script::{Script, StatementKind};
pub use stage::Stage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dialect::{PostgresDialect, TargetDialect};
    pub use crate::error::{Result, RewriteError};
    pub use crate::options::{Preset, RewriteOptions, SequenceBootstrap, SequencePlacement};
    pub use crate::rewriter::{Rewrite, Rewriter, StageOutcome};
    pub use crate::rule::Rule;
    pub use crate::script::{Protect, Script, StatementKind};
    pub use crate::stage::{RuleStage, Scope, Stage};
}

/// Rewrites a MySQL dump with the default options.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn rewrite(source: &str) -> Result<String> {
    Ok(Rewriter::new(&RewriteOptions::default())?.rewrite(source))
}
