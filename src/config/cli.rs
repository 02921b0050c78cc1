use crate::core::{OutputFormat, Request, ReverseMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Vowel/consonant ratio and list reversal utilities")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Output format, overrides `[output] format` from the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the vowel/consonant ratio of TEXT
    Ratio {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Print ITEMS in reverse order
    Reverse {
        /// Overrides `[reverse] mode` from the config file
        #[arg(long, value_enum)]
        mode: Option<ReverseMode>,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        items: Vec<String>,
    },

    /// Print a few sample computations
    Demo,
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        match command {
            Command::Ratio { text } => Request::Ratio { text },
            Command::Reverse { mode, items } => Request::Reverse { items, mode },
            Command::Demo => Request::Demo,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty_string("--config", path)?;
            validate_path("--config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratio() {
        let cli = CliConfig::try_parse_from(["small-utils", "ratio", "encylopedia"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(
            Request::from(cli.command),
            Request::Ratio {
                text: "encylopedia".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_ratio_text() {
        let cli = CliConfig::try_parse_from(["small-utils", "ratio", ""]).unwrap();
        assert_eq!(
            Request::from(cli.command),
            Request::Ratio {
                text: String::new()
            }
        );
    }

    #[test]
    fn test_parse_ratio_text_starting_with_hyphen() {
        let cli = CliConfig::try_parse_from(["small-utils", "ratio", "-fast-moving"]).unwrap();
        assert_eq!(
            Request::from(cli.command),
            Request::Ratio {
                text: "-fast-moving".to_string()
            }
        );
    }

    #[test]
    fn test_parse_reverse_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "small-utils",
            "reverse",
            "--mode",
            "in-place",
            "--format",
            "json",
            "-v",
            "2",
            "-4",
            "6",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(
            Request::from(cli.command),
            Request::Reverse {
                items: vec!["2".to_string(), "-4".to_string(), "6".to_string()],
                mode: Some(ReverseMode::InPlace),
            }
        );
    }

    #[test]
    fn test_parse_reverse_without_items() {
        let cli = CliConfig::try_parse_from(["small-utils", "reverse"]).unwrap();
        assert_eq!(
            Request::from(cli.command),
            Request::Reverse {
                items: vec![],
                mode: None,
            }
        );
    }

    #[test]
    fn test_validate_config_path() {
        let cli =
            CliConfig::try_parse_from(["small-utils", "--config", "", "demo"]).unwrap();
        assert!(cli.validate().is_err());

        let cli =
            CliConfig::try_parse_from(["small-utils", "--config", "   ", "demo"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
