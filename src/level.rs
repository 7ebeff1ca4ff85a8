//! Strength levels and their display labels.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Four-tier qualitative bucket derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a score in `[0, 100]` to its level.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthLevel::VeryStrong,
            60..=79 => StrengthLevel::Strong,
            40..=59 => StrengthLevel::Medium,
            _ => StrengthLevel::Weak,
        }
    }

    /// Canonical machine name, e.g. `very-strong`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }

    /// Human-readable label, e.g. `very strong`.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength level: {0:?}")]
pub struct UnknownLevel(pub String);

impl FromStr for StrengthLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthLevel::Weak),
            "medium" => Ok(StrengthLevel::Medium),
            "strong" => Ok(StrengthLevel::Strong),
            "very-strong" => Ok(StrengthLevel::VeryStrong),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Returns the display label for a level name, falling back to the weak label.
pub fn label_for_level(level: &str) -> &'static str {
    level
        .parse::<StrengthLevel>()
        .unwrap_or(StrengthLevel::Weak)
        .label()
}
