use serde::Serialize;

use super::area_path::AreaPath;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaMatch {
    pub path: AreaPath,
    pub label: String,
    pub score: f64,
    pub route_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    pub route_id: String,
    pub label: String,
    pub grade: String,
    pub area_path: AreaPath,
    pub score: f64,
    /// Position of the route in corpus order.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchHit {
    Area(AreaMatch),
    Route(RouteMatch),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub areas: Vec<AreaMatch>,
    pub routes: Vec<RouteMatch>,
}

impl SearchResults {
    #[must_use]
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len() + self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty() && self.routes.is_empty()
    }

    /// Areas first, then routes.
    #[must_use]
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.areas
            .into_iter()
            .map(SearchHit::Area)
            .chain(self.routes.into_iter().map(SearchHit::Route))
            .collect()
    }
}
