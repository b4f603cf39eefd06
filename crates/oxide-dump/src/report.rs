//! Conversion summary.

use std::fmt;
use std::path::PathBuf;

use oxide_dump_core::{RewriteOptions, StageOutcome};
use serde::Serialize;

/// What a conversion read, wrote and changed.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// The MySQL dump that was read.
    pub input: PathBuf,
    /// The file that was written.
    pub output: PathBuf,
    /// Size of the input in bytes.
    pub input_bytes: usize,
    /// Size of the output in bytes.
    pub output_bytes: usize,
    /// Number of statements in the output.
    pub statements: usize,
    /// Options the pipeline ran with.
    pub options: RewriteOptions,
    /// Per-stage outcome, in application order.
    pub stages: Vec<StageOutcome>,
}

impl ConversionReport {
    /// Names of the stages that changed the document.
    pub fn changed_stages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().filter(|s| s.changed).map(|s| s.stage)
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} -> {} ({} statements, {} of {} stages applied)",
            self.input.display(),
            self.output.display(),
            self.statements,
            self.changed_stages().count(),
            self.stages.len()
        )
    }
}
