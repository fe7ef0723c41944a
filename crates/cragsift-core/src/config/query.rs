use serde::Deserialize;

use crate::error::Result;

use super::env::read_env_usize;
use super::search::at_least_one;

const ENV_PAGE_SIZE: &str = "CRAGSIFT_PAGE_SIZE";
const ENV_QUERY_CACHE_ENTRIES: &str = "CRAGSIFT_QUERY_CACHE_ENTRIES";

const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_QUERY_CACHE_ENTRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    pub page_size: usize,
    /// Zero disables memoization.
    pub cache_entries: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            cache_entries: DEFAULT_QUERY_CACHE_ENTRIES,
        }
    }
}

impl QueryConfig {
    #[must_use]
    pub(super) fn with_env(self) -> Self {
        Self {
            page_size: read_env_usize(ENV_PAGE_SIZE, self.page_size, 1),
            cache_entries: read_env_usize(ENV_QUERY_CACHE_ENTRIES, self.cache_entries, 0),
        }
    }

    pub(super) fn merge_file(self, file: QueryFileSection) -> Result<Self> {
        Ok(Self {
            page_size: at_least_one("query.page_size", file.page_size)?.unwrap_or(self.page_size),
            cache_entries: file.cache_entries.unwrap_or(self.cache_entries),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct QueryFileSection {
    page_size: Option<usize>,
    cache_entries: Option<usize>,
}
