//! Administrative tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrative tier, ordered from the top of the hierarchy down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Division,
    District,
    Upazila,
    Union,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown administrative level: '{0}'")]
pub struct LevelParseError(pub String);

impl Level {
    /// All tiers, top first.
    pub const ALL: [Level; 4] = [Level::Division, Level::District, Level::Upazila, Level::Union];

    /// Singular URL segment (`division`).
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Division => "division",
            Level::District => "district",
            Level::Upazila => "upazila",
            Level::Union => "union",
        }
    }

    /// Plural URL segment used by listing paths (`divisions`).
    pub fn plural(self) -> &'static str {
        match self {
            Level::Division => "divisions",
            Level::District => "districts",
            Level::Upazila => "upazilas",
            Level::Union => "unions",
        }
    }

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            Level::Division => "Division",
            Level::District => "District",
            Level::Upazila => "Upazila",
            Level::Union => "Union",
        }
    }

    /// Human-readable plural name.
    pub fn plural_title(self) -> &'static str {
        match self {
            Level::Division => "Divisions",
            Level::District => "Districts",
            Level::Upazila => "Upazilas",
            Level::Union => "Unions",
        }
    }

    /// The tier directly above, if any.
    pub fn parent(self) -> Option<Self> {
        match self {
            Level::Division => None,
            Level::District => Some(Level::Division),
            Level::Upazila => Some(Level::District),
            Level::Union => Some(Level::Upazila),
        }
    }

    /// The tier directly below, if any.
    pub fn child(self) -> Option<Self> {
        match self {
            Level::Division => Some(Level::District),
            Level::District => Some(Level::Upazila),
            Level::Upazila => Some(Level::Union),
            Level::Union => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LevelParseError(s.to_string()))
    }
}
