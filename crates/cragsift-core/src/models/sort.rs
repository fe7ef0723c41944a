use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CragError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Grade,
    Stars,
    Votes,
    LeftToRight,
    Quality,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grade => "grade",
            Self::Stars => "stars",
            Self::Votes => "votes",
            Self::LeftToRight => "left_to_right",
            Self::Quality => "quality",
        }
    }

    #[must_use]
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::Grade | Self::LeftToRight => SortDirection::Ascending,
            Self::Stars | Self::Votes | Self::Quality => SortDirection::Descending,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grade" => Ok(Self::Grade),
            "stars" => Ok(Self::Stars),
            "votes" => Ok(Self::Votes),
            "lr" | "left_to_right" | "left-to-right" => Ok(Self::LeftToRight),
            "quality" => Ok(Self::Quality),
            other => Err(CragError::Validation(format!(
                "invalid sort key: {other} (expected grade|stars|votes|lr|quality)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub reversed: bool,
}

impl SortSpec {
    #[must_use]
    pub const fn new(key: SortKey, reversed: bool) -> Self {
        Self { key, reversed }
    }

    #[must_use]
    pub const fn direction(self) -> SortDirection {
        let base = self.key.default_direction();
        if self.reversed { base.flipped() } else { base }
    }
}
