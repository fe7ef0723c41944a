use serde::{Deserialize, Serialize};

use super::lenient;
use super::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLevel {
    #[serde(default, deserialize_with = "lenient::zero_u32")]
    pub level: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_hierarchy_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_hierarchy_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub area_getting_there: String,
    #[serde(default, deserialize_with = "lenient::label_list")]
    pub area_tags: Vec<String>,
    /// Root to leaf.
    #[serde(default, deserialize_with = "lenient::list")]
    pub area_hierarchy: Vec<HierarchyLevel>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub routes: Vec<Route>,
}
