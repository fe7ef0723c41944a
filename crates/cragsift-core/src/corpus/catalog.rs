use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::AreaPath;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathStats {
    /// Areas whose own path is exactly this one.
    pub area_count: usize,
    /// Routes at or below this path.
    pub route_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub path: AreaPath,
    pub name: String,
    #[serde(flatten)]
    pub stats: PathStats,
    pub has_children: bool,
}

/// Every distinct hierarchy prefix in the corpus with its rollup counts.
#[derive(Debug, Clone, Default)]
pub struct HierarchyCatalog {
    paths: BTreeMap<AreaPath, PathStats>,
}

impl HierarchyCatalog {
    pub(super) fn record_area(&mut self, path: &AreaPath, route_count: usize) {
        for prefix in path.prefixes() {
            let stats = self.paths.entry(prefix).or_default();
            stats.route_count += route_count;
        }
        if let Some(stats) = self.paths.get_mut(path) {
            stats.area_count += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn contains(&self, path: &AreaPath) -> bool {
        self.paths.contains_key(path)
    }

    #[must_use]
    pub fn stats(&self, path: &AreaPath) -> Option<PathStats> {
        self.paths.get(path).copied()
    }

    pub fn paths(&self) -> impl Iterator<Item = (&AreaPath, &PathStats)> {
        self.paths.iter()
    }

    /// Direct children of `parent`, or the top-level regions when `None`.
    #[must_use]
    pub fn children(&self, parent: Option<&AreaPath>) -> Vec<HierarchyNode> {
        let depth = parent.map_or(1, |path| path.len() + 1);
        self.paths
            .iter()
            .filter(|(path, _)| path.len() == depth)
            .filter(|(path, _)| parent.is_none_or(|parent| parent.is_proper_prefix_of(path)))
            .map(|(path, stats)| HierarchyNode {
                path: path.clone(),
                name: path.leaf().unwrap_or_default().to_string(),
                stats: *stats,
                has_children: self.has_children(path),
            })
            .collect()
    }

    fn has_children(&self, path: &AreaPath) -> bool {
        self.paths
            .range(path.clone()..)
            .nth(1)
            .is_some_and(|(next, _)| path.is_proper_prefix_of(next))
    }
}

/// Tag category to every tag seen under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagCatalog {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl TagCatalog {
    pub(super) fn record(&mut self, tags: &BTreeMap<String, Vec<String>>) {
        for (category, values) in tags {
            let entry = self.categories.entry(category.clone()).or_default();
            entry.extend(values.iter().cloned());
        }
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.categories
    }

    #[must_use]
    pub fn tags(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
