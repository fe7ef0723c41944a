use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteComment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub comment_author: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub comment_text: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub comment_time: String,
}

/// One route as exported by the scraper. Numeric fields that are missing or
/// malformed decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_grade: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_protection_grading: String,
    #[serde(default, deserialize_with = "lenient::zero_f64")]
    pub route_stars: f64,
    #[serde(default, deserialize_with = "lenient::zero_u32")]
    pub route_votes: u32,
    #[serde(default, deserialize_with = "lenient::label_list")]
    pub route_type: Vec<String>,
    #[serde(default, deserialize_with = "lenient::zero_u32")]
    pub route_pitches: u32,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub route_length_ft: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub route_length_meter: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_position")]
    pub route_lr: Option<i64>,
    #[serde(default, deserialize_with = "lenient::tag_map")]
    pub route_tags: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_fa: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub route_protection: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub route_comments: Vec<RouteComment>,
}

impl Route {
    #[must_use]
    pub fn has_type(&self, label: &str) -> bool {
        self.route_type
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(label))
    }

    #[must_use]
    pub fn has_tag(&self, category: &str, tag: &str) -> bool {
        self.route_tags
            .get(category)
            .is_some_and(|tags| tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag)))
    }

    #[must_use]
    pub fn left_to_right(&self) -> i64 {
        self.route_lr.unwrap_or(0)
    }
}

/// Display projection of a loaded route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub id: String,
    pub name: String,
    pub url: String,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_grade: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protection_grading: String,
    pub stars: f64,
    pub votes: u32,
    pub quality: f64,
    pub route_type: Vec<String>,
    pub pitches: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_to_right: Option<i64>,
    pub area_name: String,
    pub area_path: String,
}
