use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::AppConfig;
use crate::corpus::{Corpus, CorpusSource, RouteEntry};
use crate::error::Result;
use crate::filter::filter_routes;
use crate::grade::{GradeRange, GradeScale};
use crate::models::{FilterSpec, Page, SearchResults, SortSpec};
use crate::search::SearchIndex;
use crate::sort::sort_routes;


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    corpus_version: String,
    filter: FilterSpec,
    sort: SortSpec,
}

/// Query facade over one loaded corpus. Filtered and sorted results are
/// memoized per `(corpus version, filter, sort)`.
pub struct RouteFinder {
    corpus: Arc<Corpus>,
    scale: GradeScale,
    config: AppConfig,
    search_index: SearchIndex,
    cache: RwLock<HashMap<QueryKey, Arc<Vec<usize>>>>,
}

impl std::fmt::Debug for RouteFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteFinder")
            .field("corpus_version", &self.corpus.version())
            .field("routes", &self.corpus.routes().len())
            .finish_non_exhaustive()
    }
}

impl RouteFinder {
    pub fn open(source: &dyn CorpusSource, config: AppConfig) -> Result<Self> {
        let scale = GradeScale::new(config.grade_scale);
        let corpus = Corpus::load(source, &scale)?;
        Ok(Self::new(corpus, config))
    }

    /// The corpus keeps the scale it was normalized with; `config.grade_scale`
    /// only matters for [`RouteFinder::open`].
    #[must_use]
    pub fn new(corpus: Corpus, config: AppConfig) -> Self {
        let scale = GradeScale::new(corpus.scale_variant());
        let search_index = SearchIndex::build(&corpus);
        Self {
            corpus: Arc::new(corpus),
            scale,
            config,
            search_index,
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn scale(&self) -> &GradeScale {
        &self.scale
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn grade_range(&self, min: Option<&str>, max: Option<&str>) -> Result<GradeRange> {
        GradeRange::parse(&self.scale, min, max)
    }

    #[must_use]
    pub fn apply_filters(&self, spec: &FilterSpec) -> Vec<&RouteEntry> {
        filter_routes(&self.corpus, spec)
    }

    #[must_use]
    pub fn apply_sort<'a>(&self, routes: &[&'a RouteEntry], spec: SortSpec) -> Vec<&'a RouteEntry> {
        sort_routes(routes, spec)
    }

    /// Filter then sort, reusing a cached ordering when one exists.
    #[must_use]
    pub fn query(&self, filter: &FilterSpec, sort: SortSpec) -> Vec<&RouteEntry> {
        let indexes = self.query_indexes(filter, sort);
        indexes
            .iter()
            .filter_map(|&index| self.corpus.route(index))
            .collect()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        self.search_index
            .search(&self.corpus, query, &self.config.search)
    }

    /// `limit` falls back to the configured page size.
    #[must_use]
    pub fn page<'a>(
        &self,
        routes: &[&'a RouteEntry],
        offset: usize,
        limit: Option<usize>,
    ) -> Page<&'a RouteEntry> {
        let limit = limit
            .filter(|value| *value > 0)
            .unwrap_or(self.config.query.page_size);
        Page::slice(routes, offset, limit)
    }

    #[must_use]
    pub fn cached_queries(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    fn query_indexes(&self, filter: &FilterSpec, sort: SortSpec) -> Arc<Vec<usize>> {
        let capacity = self.config.query.cache_entries;
        if capacity == 0 {
            return Arc::new(self.compute(filter, sort));
        }

        let key = QueryKey {
            corpus_version: self.corpus.version().to_string(),
            filter: filter.clone(),
            sort,
        };
        if let Some(hit) = self
            .cache
            .read()
            .ok()
            .and_then(|cache| cache.get(&key).cloned())
        {
            tracing::debug!(routes = hit.len(), "query cache hit");
            return hit;
        }

        let computed = Arc::new(self.compute(filter, sort));
        if let Ok(mut cache) = self.cache.write() {
            if cache.len() >= capacity {
                tracing::debug!(entries = cache.len(), "query cache full, clearing");
                cache.clear();
            }
            cache.insert(key, Arc::clone(&computed));
        }
        computed
    }

    fn compute(&self, filter: &FilterSpec, sort: SortSpec) -> Vec<usize> {
        let filtered = self.apply_filters(filter);
        self.apply_sort(&filtered, sort)
            .into_iter()
            .map(|entry| entry.index)
            .collect()
    }
}
