mod catalog;
mod source;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::error::{CragError, Result};
use crate::grade::{GradeParse, GradeScale, ScaleVariant};
use crate::models::{Area, AreaPath, Route, RouteSummary};
use crate::text::{display_area_path, format_route_name};

pub use catalog::{HierarchyCatalog, HierarchyNode, PathStats, TagCatalog};
pub use source::{CorpusSource, DEFAULT_INCLUDE_GLOBS, JsonCorpusSource, StaticCorpusSource};

const QUALITY_PRIOR_STARS: f64 = 2.5;
const QUALITY_PRIOR_VOTES: f64 = 5.0;

/// Bayesian star average: pulls low-vote routes toward the prior.
#[must_use]
pub fn quality_score(stars: f64, votes: u32) -> f64 {
    let votes = f64::from(votes);
    (stars * votes + QUALITY_PRIOR_STARS * QUALITY_PRIOR_VOTES) / (votes + QUALITY_PRIOR_VOTES)
}

/// Area fields without the route list; routes live in [`Corpus::routes`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaInfo {
    pub id: String,
    pub name: String,
    pub url: String,
    pub path: AreaPath,
    pub description: String,
    pub getting_there: String,
    pub tags: Vec<String>,
    pub route_count: usize,
}

/// A route joined with its owning area and load-time derived values.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub route: Route,
    /// Position in corpus order.
    pub index: usize,
    pub area_index: usize,
    pub area_name: String,
    pub path: AreaPath,
    pub grade: GradeParse,
    pub quality: f64,
}

impl RouteEntry {
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            id: self.route.route_id.clone(),
            name: format_route_name(&self.route.route_name),
            url: self.route.route_url.clone(),
            grade: self.route.route_grade.clone(),
            canonical_grade: self.grade.grade().map(|grade| grade.label().to_string()),
            protection_grading: self.route.route_protection_grading.clone(),
            stars: self.route.route_stars,
            votes: self.route.route_votes,
            quality: self.quality,
            route_type: self.route.route_type.clone(),
            pitches: self.route.route_pitches,
            length_ft: self.route.route_length_ft,
            left_to_right: self.route.route_lr,
            area_name: self.area_name.clone(),
            area_path: display_area_path(&self.path),
        }
    }
}

/// Loaded, immutable route collection.
#[derive(Debug, Clone)]
pub struct Corpus {
    version: String,
    scale: ScaleVariant,
    areas: Vec<AreaInfo>,
    routes: Vec<RouteEntry>,
    hierarchy: HierarchyCatalog,
    tags: TagCatalog,
    unparseable_grades: usize,
}

impl Corpus {
    pub fn load(source: &dyn CorpusSource, scale: &GradeScale) -> Result<Self> {
        let areas = source.load_areas()?;
        let corpus = Self::from_areas(areas, scale).map_err(|err| match err {
            CragError::CorpusLoad(message) => {
                CragError::CorpusLoad(format!("{}: {message}", source.describe()))
            }
            other => other,
        })?;
        tracing::info!(
            source = %source.describe(),
            areas = corpus.areas.len(),
            routes = corpus.routes.len(),
            unparseable_grades = corpus.unparseable_grades,
            version = %corpus.version,
            "corpus loaded"
        );
        Ok(corpus)
    }

    pub fn from_areas(areas: Vec<Area>, scale: &GradeScale) -> Result<Self> {
        if areas.is_empty() {
            return Err(CragError::CorpusLoad("no areas found".to_string()));
        }
        let version = corpus_version(&areas, scale)?;

        let mut infos = Vec::with_capacity(areas.len());
        let mut routes = Vec::new();
        let mut hierarchy = HierarchyCatalog::default();
        let mut tags = TagCatalog::default();
        let mut unparseable_grades = 0usize;

        for (area_index, area) in areas.into_iter().enumerate() {
            let path = area_path_for(&area);
            hierarchy.record_area(&path, area.routes.len());
            infos.push(AreaInfo {
                id: area.area_id,
                name: area.area_name.clone(),
                url: area.area_url,
                path: path.clone(),
                description: area.area_description,
                getting_there: area.area_getting_there,
                tags: area.area_tags,
                route_count: area.routes.len(),
            });

            for route in area.routes {
                let grade = scale.normalize(&route.route_grade);
                if grade.is_unparseable() {
                    unparseable_grades += 1;
                    tracing::debug!(
                        route = %route.route_name,
                        grade = %route.route_grade,
                        "unparseable grade passes through filters"
                    );
                }
                tags.record(&route.route_tags);
                routes.push(RouteEntry {
                    index: routes.len(),
                    area_index,
                    area_name: area.area_name.clone(),
                    path: path.clone(),
                    grade,
                    quality: quality_score(route.route_stars, route.route_votes),
                    route,
                });
            }
        }

        Ok(Self {
            version,
            scale: scale.variant(),
            areas: infos,
            routes,
            hierarchy,
            tags,
            unparseable_grades,
        })
    }

    /// Content digest; changes whenever any exported field changes.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Scale the route grades were normalized against.
    #[must_use]
    pub const fn scale_variant(&self) -> ScaleVariant {
        self.scale
    }

    #[must_use]
    pub fn areas(&self) -> &[AreaInfo] {
        &self.areas
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    #[must_use]
    pub fn route(&self, index: usize) -> Option<&RouteEntry> {
        self.routes.get(index)
    }

    #[must_use]
    pub fn hierarchy(&self) -> &HierarchyCatalog {
        &self.hierarchy
    }

    #[must_use]
    pub fn tags(&self) -> &TagCatalog {
        &self.tags
    }

    #[must_use]
    pub const fn unparseable_grades(&self) -> usize {
        self.unparseable_grades
    }
}

/// Areas exported without a hierarchy fall back to their own name.
fn area_path_for(area: &Area) -> AreaPath {
    let path = AreaPath::from_hierarchy(&area.area_hierarchy);
    if path.is_empty() {
        AreaPath::new([area.area_name.as_str()])
    } else {
        path
    }
}

fn corpus_version(areas: &[Area], scale: &GradeScale) -> Result<String> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(scale.variant().as_str().as_bytes());
    hasher.update(&serde_json::to_vec(areas)?);
    Ok(hasher.finalize().to_hex().to_string())
}
