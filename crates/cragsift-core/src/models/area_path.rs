use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CragError, Result};

use super::area::HierarchyLevel;

pub const ROOT_LEVEL_NAME: &str = "All Locations";
pub const PATH_SEPARATOR: &str = " / ";

/// Hierarchy location of an area, root first. Equality and prefix checks
/// ignore case; the original casing is kept for display.
#[derive(Debug, Clone, Default)]
pub struct AreaPath {
    segments: Vec<String>,
    folded: Vec<String>,
}

impl AreaPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|segment| segment.into().trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();
        let folded = segments.iter().map(|segment| segment.to_lowercase()).collect();
        Self { segments, folded }
    }

    #[must_use]
    pub fn from_hierarchy(levels: &[HierarchyLevel]) -> Self {
        let mut names = levels
            .iter()
            .map(|level| level.area_hierarchy_name.as_str())
            .peekable();
        if names
            .peek()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(ROOT_LEVEL_NAME))
        {
            names.next();
        }
        Self::new(names)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// True when every segment of `self` equals the leading segment of `other`.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.folded.len() <= other.folded.len()
            && self
                .folded
                .iter()
                .zip(&other.folded)
                .all(|(mine, theirs)| mine == theirs)
    }

    #[must_use]
    pub fn is_proper_prefix_of(&self, other: &Self) -> bool {
        self.folded.len() < other.folded.len() && self.is_prefix_of(other)
    }

    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.segments.len());
        Self {
            segments: self.segments[..len].to_vec(),
            folded: self.folded[..len].to_vec(),
        }
    }

    /// Non-empty prefixes, shortest first, ending with the path itself.
    pub fn prefixes(&self) -> impl Iterator<Item = Self> + '_ {
        (1..=self.segments.len()).map(|len| self.truncated(len))
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.segments.join(PATH_SEPARATOR)
    }

    pub(crate) fn folded_text(&self) -> String {
        self.folded.join(PATH_SEPARATOR)
    }
}

impl PartialEq for AreaPath {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for AreaPath {}

impl Hash for AreaPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for AreaPath {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AreaPath {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl Display for AreaPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for AreaPath {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self> {
        let mut path = Self::new(s.split('/'));
        if path
            .segments
            .first()
            .is_some_and(|name| name.eq_ignore_ascii_case(ROOT_LEVEL_NAME))
        {
            path = Self::new(path.segments.into_iter().skip(1));
        }
        if path.is_empty() {
            return Err(CragError::InvalidAreaPath(format!(
                "area path has no segments: {s:?}"
            )));
        }
        Ok(path)
    }
}

impl Serialize for AreaPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}
