use crate::domain::model::{CharacterClass, ClassCounts};
use crate::utils::error::{Result, UtilError};

/// Vowel-class characters, compared after lowercasing.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Classifies a single character case-insensitively. Anything outside
/// [`VOWELS`] (digits, punctuation, whitespace, non-ASCII) is a consonant.
pub fn classify(c: char) -> CharacterClass {
    if VOWELS.contains(&c.to_ascii_lowercase()) {
        CharacterClass::Vowel
    } else {
        CharacterClass::Consonant
    }
}

/// Lowercases the whole text first, then tallies each resulting character.
///
/// Lowercasing can change the character count (`'İ'` becomes `"i\u{307}"`),
/// so the tally is taken over the lowercased text, not the input.
pub fn count_classes(text: &str) -> ClassCounts {
    text.to_lowercase()
        .chars()
        .fold(ClassCounts::default(), |mut counts, c| {
            match classify(c) {
                CharacterClass::Vowel => counts.vowels += 1,
                CharacterClass::Consonant => counts.consonants += 1,
            }
            counts
        })
}

impl ClassCounts {
    /// Vowels per consonant.
    ///
    /// An empty tally (empty text) is `0.0`. A non-empty tally with no
    /// consonants is [`UtilError::DivisionByZero`].
    pub fn ratio(&self) -> Result<f64> {
        match (self.vowels, self.consonants) {
            (0, 0) => Ok(0.0),
            (vowels, 0) => Err(UtilError::DivisionByZero { vowels }),
            (vowels, consonants) => Ok(vowels as f64 / consonants as f64),
        }
    }
}

/// Ratio of vowel-class to consonant-class characters in `text`.
///
/// # Errors
///
/// Returns [`UtilError::DivisionByZero`] when `text` is non-empty and every
/// character is a vowel, e.g. `"aeiou"`. The empty string yields `Ok(0.0)`.
pub fn vowel_consonant_ratio(text: &str) -> Result<f64> {
    let counts = count_classes(text);
    tracing::trace!(
        "counted {} vowels and {} consonants",
        counts.vowels,
        counts.consonants
    );
    counts.ratio()
}
