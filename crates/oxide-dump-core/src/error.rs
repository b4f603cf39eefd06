//! Error types for building rewrite pipelines.

/// Errors that can occur while assembling a rewrite pipeline.
///
/// Applying a pipeline never fails: a rule that does not match is a no-op.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// A rule's pattern failed to compile.
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Name of the offending rule.
        rule: &'static str,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type for pipeline construction.
pub type Result<T> = std::result::Result<T, RewriteError>;
