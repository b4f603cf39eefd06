//! MySQL dump to PostgreSQL conversion.
//!
//! `oxide-dump` reads a dump file written by mysqldump or Navicat, runs it
//! through the [`oxide_dump_core`] rewrite pipeline and writes the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_dump::prelude::*;
//!
//! let report = convert_with("jeecg-boot.sql", "jeecg-boot-pg.sql", &Preset::Full.options())?;
//! println!("{report}");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Convert with the default (improved) preset
//! oxide-dump mysql.sql postgres.sql
//!
//! # Append sequence resets after the data has been loaded
//! oxide-dump mysql.sql postgres.sql --reset-sequences --sequences-at-end
//!
//! # Print a JSON report
//! oxide-dump mysql.sql postgres.sql --json
//! ```

pub mod convert;
pub mod error;
pub mod report;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::convert::{convert, convert_with};
    pub use crate::error::{ConvertError, Result};
    pub use crate::report::ConversionReport;
    pub use oxide_dump_core::{
        Preset, RewriteOptions, SequenceBootstrap, SequencePlacement, StageOutcome,
    };
}
