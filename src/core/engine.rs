use crate::core::ratio::{count_classes, vowel_consonant_ratio};
use crate::core::reverse::reverse_with;
use crate::core::{ConfigProvider, DemoRatio, Outcome, Request, ReverseMode};
use crate::utils::error::Result;

/// Sample texts shown by the `demo` command.
pub const DEMO_TEXTS: [&str; 3] = ["encylopedia", "yoyo", "fast-moving"];
pub const DEMO_SEQUENCE: [i64; 5] = [2, 4, 6, 8, 10];

pub struct UtilityEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> UtilityEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self, request: Request) -> Result<Outcome> {
        tracing::info!("Running {} request", request.name());

        let outcome = match request {
            Request::Ratio { text } => self.run_ratio(text)?,
            Request::Reverse { items, mode } => {
                self.run_reverse(items, mode.unwrap_or_else(|| self.config.reverse_mode()))
            }
            Request::Demo => self.run_demo(),
        };

        tracing::debug!("Request completed: {:?}", outcome);
        Ok(outcome)
    }

    fn run_ratio(&self, text: String) -> Result<Outcome> {
        let counts = count_classes(&text);
        tracing::debug!(
            "Classified {} characters: {} vowels, {} consonants",
            counts.vowels + counts.consonants,
            counts.vowels,
            counts.consonants
        );

        let ratio = counts.ratio()?;
        Ok(Outcome::Ratio {
            text,
            counts,
            ratio,
        })
    }

    fn run_reverse(&self, mut items: Vec<String>, mode: ReverseMode) -> Outcome {
        tracing::debug!("Reversing {} items ({:?})", items.len(), mode);

        let reversed = reverse_with(mode, &mut items);
        if mode == ReverseMode::InPlace {
            tracing::debug!("Input drained, {} items left", items.len());
        }

        Outcome::Reversed {
            mode,
            items: reversed,
        }
    }

    fn run_demo(&self) -> Outcome {
        let ratios = DEMO_TEXTS
            .iter()
            .map(|text| match vowel_consonant_ratio(text) {
                Ok(ratio) => DemoRatio {
                    text: text.to_string(),
                    ratio: Some(ratio),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Sample '{}' has no ratio: {}", text, e);
                    DemoRatio {
                        text: text.to_string(),
                        ratio: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        let mut data = DEMO_SEQUENCE.to_vec();
        let input = data.clone();
        let reversed = reverse_with(self.config.reverse_mode(), &mut data);

        Outcome::Demo {
            ratios,
            input,
            reversed,
        }
    }
}
