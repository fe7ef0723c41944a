use serde::Deserialize;

use crate::error::{CragError, Result};

use super::env::read_env_usize;

const ENV_SEARCH_AREA_LIMIT: &str = "CRAGSIFT_SEARCH_AREA_LIMIT";
const ENV_SEARCH_ROUTE_LIMIT: &str = "CRAGSIFT_SEARCH_ROUTE_LIMIT";
const ENV_SEARCH_MIN_QUERY_CHARS: &str = "CRAGSIFT_SEARCH_MIN_QUERY_CHARS";

const DEFAULT_AREA_LIMIT: usize = 10;
const DEFAULT_ROUTE_LIMIT: usize = 20;
const DEFAULT_MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub area_limit: usize,
    pub route_limit: usize,
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            area_limit: DEFAULT_AREA_LIMIT,
            route_limit: DEFAULT_ROUTE_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub(super) fn with_env(self) -> Self {
        Self {
            area_limit: read_env_usize(ENV_SEARCH_AREA_LIMIT, self.area_limit, 1),
            route_limit: read_env_usize(ENV_SEARCH_ROUTE_LIMIT, self.route_limit, 1),
            min_query_chars: read_env_usize(ENV_SEARCH_MIN_QUERY_CHARS, self.min_query_chars, 1),
        }
    }

    pub(super) fn merge_file(self, file: SearchFileSection) -> Result<Self> {
        Ok(Self {
            area_limit: at_least_one("search.area_limit", file.area_limit)?
                .unwrap_or(self.area_limit),
            route_limit: at_least_one("search.route_limit", file.route_limit)?
                .unwrap_or(self.route_limit),
            min_query_chars: at_least_one("search.min_query_chars", file.min_query_chars)?
                .unwrap_or(self.min_query_chars),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SearchFileSection {
    area_limit: Option<usize>,
    route_limit: Option<usize>,
    min_query_chars: Option<usize>,
}

pub(super) fn at_least_one(key: &str, value: Option<usize>) -> Result<Option<usize>> {
    match value {
        Some(0) => Err(CragError::Validation(format!("{key} must be at least 1"))),
        other => Ok(other),
    }
}
