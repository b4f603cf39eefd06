//! File-to-file conversion.

use std::fs;
use std::path::Path;

use oxide_dump_core::{RewriteOptions, Rewriter, Script};
use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::report::ConversionReport;

/// Converts `input` into `output` with the default options.
///
/// # Errors
///
/// Returns an error if the input is missing or unreadable, or the output
/// cannot be written.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConversionReport> {
    convert_with(input, output, &RewriteOptions::default())
}

/// Converts `input` into `output`.
///
/// The whole file is read into memory, rewritten and written in one go. An
/// existing output file is overwritten.
///
/// # Errors
///
/// Returns an error if the input is missing or unreadable, the output cannot
/// be written, or the pipeline cannot be built.
pub fn convert_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RewriteOptions,
) -> Result<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }
    let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = source.len(), "Read dump");

    let rewriter = Rewriter::new(options)?;
    let rewrite = rewriter.rewrite_with_outcomes(&source);

    fs::write(output, &rewrite.output).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), bytes = rewrite.output.len(), "Wrote converted script");

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_bytes: source.len(),
        output_bytes: rewrite.output.len(),
        statements: Script::parse(&rewrite.output).statements().count(),
        options: options.clone(),
        stages: rewrite.stages,
    })
}
