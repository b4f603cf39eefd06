//! Rewrite configuration.

use serde::Serialize;

/// Where sequence bootstrap statements are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePlacement {
    /// Directly after each `CREATE TABLE`.
    #[default]
    AfterTable,
    /// Collected at the end of the script, after the data has been loaded.
    EndOfScript,
}

/// Settings for the sequence bootstrap stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequenceBootstrap {
    /// Column whose sequence is reset. `None` detects the column declared `SERIAL`.
    pub key_column: Option<String>,
    /// Where the reset statements go.
    pub placement: SequencePlacement,
}

impl SequenceBootstrap {
    /// Uses a fixed key column for every table.
    #[must_use]
    pub fn key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Sets where the reset statements go.
    #[must_use]
    pub fn placement(mut self, placement: SequencePlacement) -> Self {
        self.placement = placement;
        self
    }
}

/// Which optional stages run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteOptions {
    /// Repair dangling commas and parens at the end of `CREATE TABLE`.
    pub structural_cleanup: bool,
    /// Append sequence resynchronization statements.
    pub sequence_bootstrap: Option<SequenceBootstrap>,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Preset::default().options()
    }
}

impl RewriteOptions {
    /// Enables or disables the structural cleanup stage.
    #[must_use]
    pub fn structural_cleanup(mut self, enabled: bool) -> Self {
        self.structural_cleanup = enabled;
        self
    }

    /// Enables the sequence bootstrap stage.
    #[must_use]
    pub fn sequence_bootstrap(mut self, bootstrap: SequenceBootstrap) -> Self {
        self.sequence_bootstrap = Some(bootstrap);
        self
    }

    /// Disables the sequence bootstrap stage.
    #[must_use]
    pub fn without_sequence_bootstrap(mut self) -> Self {
        self.sequence_bootstrap = None;
        self
    }
}

/// Named option sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Rule table only.
    Simple,
    /// Rule table plus structural cleanup.
    #[default]
    Improved,
    /// Everything, including sequence bootstrap after each table.
    Full,
}

impl Preset {
    /// Returns the options this preset stands for.
    #[must_use]
    pub fn options(self) -> RewriteOptions {
        match self {
            Self::Simple => RewriteOptions {
                structural_cleanup: false,
                sequence_bootstrap: None,
            },
            Self::Improved => RewriteOptions {
                structural_cleanup: true,
                sequence_bootstrap: None,
            },
            Self::Full => RewriteOptions {
                structural_cleanup: true,
                sequence_bootstrap: Some(SequenceBootstrap::default()),
            },
        }
    }
}
