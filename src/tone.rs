//! Tone catalog - a 3×3 grid of formality × length
//!
//! Rows run professional → balanced → casual, columns run
//! concise → balanced → expanded. The centre cell is spelled
//! `balanced-neutral`; the other middle-length cells use `balanced`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formality axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formality {
    Professional,
    Balanced,
    Casual,
}

/// Length axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    Concise,
    Balanced,
    Expanded,
}

/// One point on the tone grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToneId {
    pub formality: Formality,
    pub length: Length,
}

/// Error for identifiers outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}' (expected one of: {list})", list = ToneId::id_list())]
pub struct ParseToneError(pub String);

impl ToneId {
    /// All nine tones in grid order (row by row)
    pub const ALL: [ToneId; 9] = [
        ToneId::new(Formality::Professional, Length::Concise),
        ToneId::new(Formality::Professional, Length::Balanced),
        ToneId::new(Formality::Professional, Length::Expanded),
        ToneId::new(Formality::Balanced, Length::Concise),
        ToneId::new(Formality::Balanced, Length::Balanced),
        ToneId::new(Formality::Balanced, Length::Expanded),
        ToneId::new(Formality::Casual, Length::Concise),
        ToneId::new(Formality::Casual, Length::Balanced),
        ToneId::new(Formality::Casual, Length::Expanded),
    ];

    pub const fn new(formality: Formality, length: Length) -> Self {
        Self { formality, length }
    }

    /// Canonical string identifier (e.g. "professional-concise")
    pub fn as_str(&self) -> &'static str {
        match (self.formality, self.length) {
            (Formality::Professional, Length::Concise) => "professional-concise",
            (Formality::Professional, Length::Balanced) => "professional-balanced",
            (Formality::Professional, Length::Expanded) => "professional-expanded",
            (Formality::Balanced, Length::Concise) => "balanced-concise",
            (Formality::Balanced, Length::Balanced) => "balanced-neutral",
            (Formality::Balanced, Length::Expanded) => "balanced-expanded",
            (Formality::Casual, Length::Concise) => "casual-concise",
            (Formality::Casual, Length::Balanced) => "casual-balanced",
            (Formality::Casual, Length::Expanded) => "casual-expanded",
        }
    }

    /// Phrase used inside the rewriting prompt ("professional concise").
    /// Only the first hyphen is replaced.
    pub fn prompt_phrase(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }

    /// Comma separated list of every identifier
    pub fn id_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ToneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneId {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseToneError(s.to_string()))
    }
}

impl TryFrom<String> for ToneId {
    type Error = ParseToneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToneId> for String {
    fn from(tone: ToneId) -> Self {
        tone.as_str().to_string()
    }
}
