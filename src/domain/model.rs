use crate::utils::error::{Result, UtilError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Vowel,
    Consonant,
}

/// Per-class character tallies of a single text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub vowels: usize,
    pub consonants: usize,
}

/// How `reverse` treats the caller's sequence.
///
/// `InPlace` pops every element off the input, leaving it empty. `Copy`
/// leaves the input untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReverseMode {
    InPlace,
    #[default]
    Copy,
}

impl ReverseMode {
    pub const VALID: [&'static str; 2] = ["in-place", "copy"];
}

impl FromStr for ReverseMode {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in-place" => Ok(ReverseMode::InPlace),
            "copy" => Ok(ReverseMode::Copy),
            other => Err(UtilError::InvalidConfigValueError {
                field: "reverse.mode".to_string(),
                value: other.to_string(),
                reason: format!("Valid modes: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["plain", "json"];
}

impl FromStr for OutputFormat {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(UtilError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

/// A single unit of work for the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Ratio { text: String },
    Reverse { items: Vec<String>, mode: Option<ReverseMode> },
    Demo,
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Ratio { .. } => "ratio",
            Request::Reverse { .. } => "reverse",
            Request::Demo => "demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRatio {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Ratio {
        text: String,
        counts: ClassCounts,
        ratio: f64,
    },
    Reversed {
        mode: ReverseMode,
        items: Vec<String>,
    },
    Demo {
        ratios: Vec<DemoRatio>,
        input: Vec<i64>,
        reversed: Vec<i64>,
    },
}

impl Outcome {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Plain => Ok(self.to_string()),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ratio { ratio, .. } => write!(f, "{}", ratio),
            Outcome::Reversed { items, .. } => write_list(f, items),
            Outcome::Demo {
                ratios,
                input,
                reversed,
            } => {
                for sample in ratios {
                    match (&sample.ratio, &sample.error) {
                        (Some(ratio), _) => writeln!(f, "{}: {}", sample.text, ratio)?,
                        (None, Some(error)) => writeln!(f, "{}: error: {}", sample.text, error)?,
                        (None, None) => writeln!(f, "{}: -", sample.text)?,
                    }
                }
                write_list(f, input)?;
                write!(f, " -> ")?;
                write_list(f, reversed)
            }
        }
    }
}
