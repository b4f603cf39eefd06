//! The standard MySQL-to-PostgreSQL pipeline.
//!
//! Stages run in a fixed order and each one relies on the output of the
//! stages before it (types are mapped before `SERIAL` is introduced, backticks
//! are stripped before comments are rewritten, and so on).

pub mod closing;
pub mod comments;
pub mod database;
pub mod header;
pub mod identity;
pub mod quoting;
pub mod sequence;
pub mod session;
pub mod table_options;
pub mod types;
pub mod whitespace;

use std::sync::Arc;

pub use comments::InlineComments;
pub use sequence::SequenceReset;

use crate::dialect::TargetDialect;
use crate::error::Result;
use crate::options::RewriteOptions;
use crate::stage::Stage;

/// Builds the stage list for `options`, in application order.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn standard(
    dialect: Arc<dyn TargetDialect>,
    options: &RewriteOptions,
) -> Result<Vec<Box<dyn Stage>>> {
    let mut stages: Vec<Box<dyn Stage>> = vec![
        Box::new(header::stage(dialect.as_ref())?),
        Box::new(database::stage(dialect.as_ref())?),
        Box::new(session::stage(dialect.as_ref())?),
        Box::new(types::stage()?),
        Box::new(identity::stage()?),
        Box::new(table_options::stage()?),
        Box::new(quoting::stage()?),
        Box::new(InlineComments::new()),
    ];

    if options.structural_cleanup {
        stages.push(Box::new(closing::stage()?));
    }
    if let Some(bootstrap) = &options.sequence_bootstrap {
        stages.push(Box::new(SequenceReset::new(dialect, bootstrap)?));
    }
    stages.push(Box::new(whitespace::stage()?));

    Ok(stages)
}
