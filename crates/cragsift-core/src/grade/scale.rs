use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CragError, Result};

// Sub-5.10 grades carry -/plain/+ steps; 5.10 and up carry letter steps
// bracketed by the -/+ entries. Position in these lists is the difficulty order.
const EXTENDED_PREFIX: &[&str] = &["5.0", "5.1", "5.2", "5.3", "5.4", "5.5"];

#[rustfmt::skip]
const STANDARD_LABELS: &[&str] = &[
    "5.6-", "5.6", "5.6+",
    "5.7-", "5.7", "5.7+",
    "5.8-", "5.8", "5.8+",
    "5.9-", "5.9", "5.9+",
    "5.10-", "5.10a", "5.10a/b", "5.10b", "5.10b/c", "5.10c", "5.10c/d", "5.10d", "5.10+",
    "5.11-", "5.11a", "5.11a/b", "5.11b", "5.11b/c", "5.11c", "5.11c/d", "5.11d", "5.11+",
    "5.12-", "5.12a", "5.12a/b", "5.12b", "5.12b/c", "5.12c", "5.12c/d", "5.12d", "5.12+",
    "5.13-", "5.13a", "5.13a/b", "5.13b", "5.13b/c", "5.13c", "5.13c/d", "5.13d", "5.13+",
    "5.14-", "5.14a", "5.14a/b", "5.14b", "5.14b/c", "5.14c", "5.14c/d", "5.14d", "5.14+",
    "5.15-", "5.15a", "5.15a/b", "5.15b", "5.15b/c", "5.15c", "5.15c/d", "5.15d", "5.15+",
    "5.16-", "5.16a", "5.16a/b", "5.16b", "5.16b/c", "5.16c", "5.16c/d", "5.16d", "5.16+",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleVariant {
    /// 5.6 through 5.16.
    #[default]
    Standard,
    /// 5.0 through 5.16.
    Extended,
}

impl ScaleVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl Display for ScaleVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleVariant {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(CragError::Validation(format!(
                "invalid grade scale: {other} (expected standard|extended)"
            ))),
        }
    }
}

/// A canonical scale entry. Ordering is by scale position, so grades taken
/// from different scale variants must not be compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grade {
    rank: usize,
    label: &'static str,
}

impl Grade {
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.label
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

impl Serialize for Grade {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label)
    }
}

#[derive(Debug, Clone)]
pub struct GradeScale {
    variant: ScaleVariant,
    labels: Vec<&'static str>,
    positions: HashMap<&'static str, usize>,
}

impl GradeScale {
    #[must_use]
    pub fn new(variant: ScaleVariant) -> Self {
        let mut labels = Vec::with_capacity(EXTENDED_PREFIX.len() + STANDARD_LABELS.len());
        if variant == ScaleVariant::Extended {
            labels.extend_from_slice(EXTENDED_PREFIX);
        }
        labels.extend_from_slice(STANDARD_LABELS);
        let positions = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (*label, idx))
            .collect();
        Self {
            variant,
            labels,
            positions,
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(ScaleVariant::Standard)
    }

    #[must_use]
    pub fn extended() -> Self {
        Self::new(ScaleVariant::Extended)
    }

    #[must_use]
    pub const fn variant(&self) -> ScaleVariant {
        self.variant
    }

    #[must_use]
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    #[must_use]
    pub fn grade(&self, label: &str) -> Option<Grade> {
        let (label, rank) = self.positions.get_key_value(label)?;
        Some(Grade {
            rank: *rank,
            label: *label,
        })
    }

    #[must_use]
    pub fn at(&self, rank: usize) -> Option<Grade> {
        self.labels.get(rank).map(|label| Grade {
            rank,
            label: *label,
        })
    }

    #[must_use]
    pub fn first(&self) -> Option<Grade> {
        self.at(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<Grade> {
        self.labels.len().checked_sub(1).and_then(|rank| self.at(rank))
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::standard()
    }
}
