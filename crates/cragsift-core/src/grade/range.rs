use serde::Serialize;

use crate::error::{CragError, Result};

use super::parse::GradeParse;
use super::scale::{Grade, GradeScale};

/// Inclusive bounds over scale positions. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GradeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<Grade>,
}

impl GradeRange {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn new(min: Option<Grade>, max: Option<Grade>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo.rank() > hi.rank() {
                return Err(CragError::Validation(format!(
                    "grade range is inverted: {lo} > {hi}"
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Builds a range from user-supplied bound text. Blank bounds are open;
    /// bounds that do not land on the scale are rejected.
    pub fn parse(scale: &GradeScale, min: Option<&str>, max: Option<&str>) -> Result<Self> {
        let min = parse_bound(scale, min)?;
        let max = parse_bound(scale, max)?;
        Self::new(min, max)
    }

    #[must_use]
    pub const fn min(&self) -> Option<Grade> {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Option<Grade> {
        self.max
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, grade: Grade) -> bool {
        let above_min = self.min.is_none_or(|lo| grade.rank() >= lo.rank());
        let below_max = self.max.is_none_or(|hi| grade.rank() <= hi.rank());
        above_min && below_max
    }

    /// Unparseable grades always pass.
    #[must_use]
    pub fn admits(&self, parsed: GradeParse) -> bool {
        match parsed {
            GradeParse::Canonical(grade) => self.contains(grade),
            GradeParse::Unparseable => true,
        }
    }
}

fn parse_bound(scale: &GradeScale, raw: Option<&str>) -> Result<Option<Grade>> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    match scale.normalize(raw) {
        GradeParse::Canonical(grade) => Ok(Some(grade)),
        GradeParse::Unparseable => Err(CragError::InvalidGrade(format!(
            "{raw} is not on the {} scale",
            scale.variant()
        ))),
    }
}
