//! Target dialect support.
//!
//! Every literal the rewriter writes on behalf of the target engine comes from
//! a [`TargetDialect`]: the server name and version stamped into dump headers,
//! the encoding used for advisory `CREATE DATABASE` lines, and the statement
//! that resynchronizes a sequence.

use std::fmt::Debug;

/// Trait for target-engine specific output.
pub trait TargetDialect: Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Server type written into dump headers (e.g. `PostgreSQL`).
    fn server_type(&self) -> &'static str;

    /// Server version written into dump headers.
    fn server_version(&self) -> &'static str;

    /// Placeholder `host:port` written into dump headers.
    fn endpoint(&self) -> &'static str;

    /// Host part of [`TargetDialect::endpoint`].
    fn host(&self) -> &'static str {
        let endpoint = self.endpoint();
        endpoint.split_once(':').map_or(endpoint, |(host, _)| host)
    }

    /// Database encoding name.
    fn encoding(&self) -> &'static str;

    /// Collation and ctype locale.
    fn locale(&self) -> &'static str;

    /// Statement replacing MySQL's `SET NAMES ...;`.
    fn client_encoding_statement(&self) -> String {
        format!("SET client_encoding = '{}';", self.encoding())
    }

    /// Options appended to an advisory `CREATE DATABASE <name>` line.
    fn database_options(&self) -> String {
        let locale = self.locale();
        format!(
            "WITH ENCODING '{}' LC_COLLATE='{locale}' LC_CTYPE='{locale}'",
            self.encoding()
        )
    }

    /// Statement that moves `table`'s sequence for `column` past the current maximum.
    fn sequence_reset(&self, table: &str, column: &str) -> String;
}

/// PostgreSQL, the default target.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TargetDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn server_type(&self) -> &'static str {
        "PostgreSQL"
    }

    fn server_version(&self) -> &'static str {
        "16.0"
    }

    fn endpoint(&self) -> &'static str {
        "127.0.0.1:5432"
    }

    fn encoding(&self) -> &'static str {
        "UTF8"
    }

    fn locale(&self) -> &'static str {
        "en_US.UTF-8"
    }

    fn sequence_reset(&self, table: &str, column: &str) -> String {
        // is_called = false: the next nextval() returns exactly MAX + 1.
        format!(
            "SELECT setval(pg_get_serial_sequence('{table}', '{column}'), \
             COALESCE(MAX({column}), 0) + 1, false) FROM {table};"
        )
    }
}
