use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CragError, Result};
use crate::grade::GradeRange;

use super::area_path::AreaPath;

const EXCLUDE_PREFIX: &str = "exclude_";
const SINGLE_PITCH: &str = "single_pitch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ClimbStyle {
    Trad,
    Sport,
}

impl ClimbStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trad => "Trad",
            Self::Sport => "Sport",
        }
    }
}

impl Display for ClimbStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimbStyle {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trad" => Ok(Self::Trad),
            "sport" => Ok(Self::Sport),
            other => Err(CragError::Validation(format!(
                "invalid climb style: {other} (expected trad|sport)"
            ))),
        }
    }
}

/// One tag-category test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Positive(String),
    Exclude(String),
    PitchCountEquals(u32),
}

impl Criterion {
    /// Reads the selection text forms used by the tag picker:
    /// `exclude_<tag>`, `single_pitch`, or a plain tag.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CragError::InvalidCriterion("empty criterion".to_string()));
        }
        if raw.eq_ignore_ascii_case(SINGLE_PITCH) {
            return Ok(Self::PitchCountEquals(1));
        }
        if let Some(tag) = strip_exclude_prefix(raw) {
            let tag = tag.trim();
            if tag.is_empty() {
                return Err(CragError::InvalidCriterion(format!(
                    "exclusion without a tag: {raw}"
                )));
            }
            return Ok(Self::Exclude(tag.to_string()));
        }
        Ok(Self::Positive(raw.to_string()))
    }

    #[must_use]
    pub const fn is_exclusion(&self) -> bool {
        matches!(self, Self::Exclude(_))
    }
}

fn strip_exclude_prefix(raw: &str) -> Option<&str> {
    let prefix = raw.get(..EXCLUDE_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(EXCLUDE_PREFIX)
        .then_some(&raw[EXCLUDE_PREFIX.len()..])
}

impl FromStr for Criterion {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive(tag) => f.write_str(tag),
            Self::Exclude(tag) => write!(f, "{EXCLUDE_PREFIX}{tag}"),
            Self::PitchCountEquals(1) => f.write_str(SINGLE_PITCH),
            Self::PitchCountEquals(n) => write!(f, "pitches={n}"),
        }
    }
}

impl Serialize for Criterion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Immutable filter selection. The default value matches every route that
/// survives the hard type exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterSpec {
    pub grade: GradeRange,
    pub styles: BTreeSet<ClimbStyle>,
    pub tags: BTreeMap<String, Vec<Criterion>>,
    pub areas: Vec<AreaPath>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grade(mut self, grade: GradeRange) -> Self {
        self.grade = grade;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ClimbStyle) -> Self {
        self.styles.insert(style);
        self
    }

    #[must_use]
    pub fn with_criterion(mut self, category: impl Into<String>, criterion: Criterion) -> Self {
        let entry = self.tags.entry(category.into()).or_default();
        if !entry.contains(&criterion) {
            entry.push(criterion);
        }
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaPath) -> Self {
        if !self.areas.contains(&area) {
            self.areas.push(area);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grade.is_unbounded()
            && self.styles.is_empty()
            && self.tags.values().all(Vec::is_empty)
            && self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_parses_sentinel_forms() {
        assert_eq!(
            Criterion::parse("exclude_sandbag").expect("exclude"),
            Criterion::Exclude("sandbag".to_string())
        );
        assert_eq!(
            Criterion::parse("single_pitch").expect("single"),
            Criterion::PitchCountEquals(1)
        );
        assert_eq!(
            Criterion::parse("Crack").expect("positive"),
            Criterion::Positive("Crack".to_string())
        );
        assert_eq!(
            Criterion::parse("EXCLUDE_sandbag").expect("upper exclude"),
            Criterion::Exclude("sandbag".to_string())
        );
        assert_eq!(
            Criterion::parse("Single_Pitch").expect("mixed single"),
            Criterion::PitchCountEquals(1)
        );
        assert!(Criterion::parse("exclude_").is_err());
        assert!(Criterion::parse("Exclude_  ").is_err());
        assert!(Criterion::parse("  ").is_err());
    }

    #[test]
    fn criterion_display_restores_sentinels() {
        assert_eq!(
            Criterion::Exclude("runout_dangerous".into()).to_string(),
            "exclude_runout_dangerous"
        );
        assert_eq!(Criterion::PitchCountEquals(1).to_string(), "single_pitch");
    }

    #[test]
    fn builder_deduplicates_selections() {
        let yosemite: AreaPath = "USA/California/Yosemite".parse().expect("path");
        let spec = FilterSpec::new()
            .with_area(yosemite.clone())
            .with_area(yosemite)
            .with_criterion("Style", Criterion::Positive("Crack".into()))
            .with_criterion("Style", Criterion::Positive("Crack".into()));
        assert_eq!(spec.areas.len(), 1);
        assert_eq!(spec.tags["Style"].len(), 1);
        assert!(!spec.is_empty());
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn style_parse_is_case_insensitive() {
        assert_eq!("TRAD".parse::<ClimbStyle>().expect("trad"), ClimbStyle::Trad);
        assert!("aid".parse::<ClimbStyle>().is_err());
    }
}
