#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::core::{ConfigProvider, OutputFormat, ReverseMode};

/// Effective settings after layering command-line flags over the file config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub output_format: OutputFormat,
    pub reverse_mode: ReverseMode,
    pub verbose: bool,
}

impl Settings {
    pub fn from_provider<C: ConfigProvider>(provider: &C) -> Self {
        Self {
            output_format: provider.output_format(),
            reverse_mode: provider.reverse_mode(),
            verbose: provider.verbose(),
        }
    }

    /// `verbose` only ever turns logging up; an unset flag keeps the file value.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, verbose: bool) -> Self {
        if let Some(format) = format {
            self.output_format = format;
        }
        self.verbose |= verbose;
        self
    }
}

impl ConfigProvider for Settings {
    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn reverse_mode(&self) -> ReverseMode {
        self.reverse_mode
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
