pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    engine::UtilityEngine,
    ratio::{classify, count_classes, vowel_consonant_ratio},
    reverse::{drain_reversed, reverse, reverse_copy, reverse_with},
    CharacterClass, ClassCounts, ConfigProvider, Outcome, OutputFormat, Request, ReverseMode,
};
pub use crate::utils::error::{Result, UtilError};
