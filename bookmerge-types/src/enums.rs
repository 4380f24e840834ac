//! Closed label sets used as enum attributes and rating-map keys.
//!
//! Each type round-trips through `Display`/`FromStr` so the schema layer
//! can carry it in a type-erased attribute value.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rating categories for books, series, and authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BookRating {
    Overall,
    BPlot,
    CharacterConsistency,
    CharacterDepth,
    CharacterGrowth,
    #[serde(rename = "HEA")]
    Hea,
    Tension,
    Vibe,
    World,
}

impl BookRating {
    pub const ALL: [BookRating; 9] = [
        Self::Overall,
        Self::BPlot,
        Self::CharacterConsistency,
        Self::CharacterDepth,
        Self::CharacterGrowth,
        Self::Hea,
        Self::Tension,
        Self::Vibe,
        Self::World,
    ];

    /// Stable label, identical to the serialized form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::BPlot => "BPlot",
            Self::CharacterConsistency => "CharacterConsistency",
            Self::CharacterDepth => "CharacterDepth",
            Self::CharacterGrowth => "CharacterGrowth",
            Self::Hea => "HEA",
            Self::Tension => "Tension",
            Self::Vibe => "Vibe",
            Self::World => "World",
        }
    }
}

impl fmt::Display for BookRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookRating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLabel {
                kind: "book rating",
                value: s.to_string(),
            })
    }
}

/// Rating categories for narrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NarratorRating {
    Overall,
    Accents,
    Clarity,
    DistinctNarrator,
    Emotion,
    Femme,
    Kids,
    Masc,
    Men,
    Variety,
}

impl NarratorRating {
    pub const ALL: [NarratorRating; 10] = [
        Self::Overall,
        Self::Accents,
        Self::Clarity,
        Self::DistinctNarrator,
        Self::Emotion,
        Self::Femme,
        Self::Kids,
        Self::Masc,
        Self::Men,
        Self::Variety,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Accents => "Accents",
            Self::Clarity => "Clarity",
            Self::DistinctNarrator => "DistinctNarrator",
            Self::Emotion => "Emotion",
            Self::Femme => "Femme",
            Self::Kids => "Kids",
            Self::Masc => "Masc",
            Self::Men => "Men",
            Self::Variety => "Variety",
        }
    }
}

impl fmt::Display for NarratorRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NarratorRating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLabel {
                kind: "narrator rating",
                value: s.to_string(),
            })
    }
}

/// Tri-state flag as recorded in the reading spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNoUnknown {
    Yes,
    No,
    Unknown,
}

impl YesNoUnknown {
    fn abbreviations(&self) -> &'static [&'static str] {
        match self {
            Self::Yes => &["Y", "YES"],
            Self::No => &["N", "NO"],
            Self::Unknown => &["?", "N?"],
        }
    }
}

impl fmt::Display for YesNoUnknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviations()[0])
    }
}

impl FromStr for YesNoUnknown {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        [Self::Yes, Self::No, Self::Unknown]
            .into_iter()
            .find(|v| v.abbreviations().contains(&upper.as_str()))
            .ok_or_else(|| Error::UnknownLabel {
                kind: "yes/no/unknown",
                value: s.to_string(),
            })
    }
}
