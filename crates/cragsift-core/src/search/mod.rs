mod scoring;


use std::cmp::Ordering;

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::models::{AreaMatch, AreaPath, RouteMatch, SearchResults};
use crate::text::format_route_name;

use scoring::{HIERARCHY_BONUS, field_score, normalized_phrase, tokenize_terms};

struct AreaCandidate {
    path: AreaPath,
    folded: String,
    route_count: usize,
}

struct RouteCandidate {
    index: usize,
    folded_name: String,
    folded_path: String,
}

/// Lowercased search fields precomputed from a corpus.
pub struct SearchIndex {
    areas: Vec<AreaCandidate>,
    routes: Vec<RouteCandidate>,
}

impl SearchIndex {
    #[must_use]
    pub fn build(corpus: &Corpus) -> Self {
        let areas = corpus
            .hierarchy()
            .paths()
            .map(|(path, stats)| AreaCandidate {
                path: path.clone(),
                folded: path.folded_text(),
                route_count: stats.route_count,
            })
            .collect();
        let routes = corpus
            .routes()
            .iter()
            .map(|entry| RouteCandidate {
                index: entry.index,
                folded_name: entry.route.route_name.to_lowercase(),
                folded_path: entry.path.folded_text(),
            })
            .collect();
        Self { areas, routes }
    }

    /// Scores area paths and routes against `query`. Every term must appear
    /// in an area's path; for routes every term must appear in the name or
    /// the area path and at least one in the name.
    #[must_use]
    pub fn search(&self, corpus: &Corpus, query: &str, config: &SearchConfig) -> SearchResults {
        let trimmed = query.trim();
        if trimmed.chars().count() < config.min_query_chars {
            return SearchResults::empty(trimmed);
        }
        let terms = tokenize_terms(trimmed);
        if terms.is_empty() {
            return SearchResults::empty(trimmed);
        }
        let phrase = normalized_phrase(trimmed);

        let mut areas: Vec<AreaMatch> = self
            .areas
            .iter()
            .filter(|candidate| terms.iter().all(|term| candidate.folded.contains(term.as_str())))
            .map(|candidate| AreaMatch {
                label: candidate.path.to_text(),
                path: candidate.path.clone(),
                score: field_score(&candidate.folded, &terms, &phrase),
                route_count: candidate.route_count,
            })
            .collect();
        areas.sort_by(|a, b| score_desc_then_label(a.score, &a.label, b.score, &b.label));
        areas.truncate(config.area_limit);

        let mut routes: Vec<RouteMatch> = self
            .routes
            .iter()
            .filter_map(|candidate| score_route(corpus, candidate, &terms, &phrase))
            .collect();
        routes.sort_by(|a, b| {
            score_desc_then_label(a.score, &a.label, b.score, &b.label)
                .then_with(|| a.index.cmp(&b.index))
        });
        routes.truncate(config.route_limit);

        tracing::debug!(
            query = trimmed,
            terms = terms.len(),
            areas = areas.len(),
            routes = routes.len(),
            "search evaluated"
        );
        SearchResults {
            query: trimmed.to_string(),
            areas,
            routes,
        }
    }
}

fn score_route(
    corpus: &Corpus,
    candidate: &RouteCandidate,
    terms: &[String],
    phrase: &str,
) -> Option<RouteMatch> {
    let mut in_name = 0usize;
    let mut in_path = 0usize;
    for term in terms {
        let name_hit = candidate.folded_name.contains(term.as_str());
        let path_hit = candidate.folded_path.contains(term.as_str());
        if !name_hit && !path_hit {
            return None;
        }
        in_name += usize::from(name_hit);
        in_path += usize::from(path_hit);
    }
    if in_name == 0 {
        return None;
    }
    let entry = corpus.route(candidate.index)?;
    let score = field_score(&candidate.folded_name, terms, phrase)
        + HIERARCHY_BONUS * in_path as f64;
    Some(RouteMatch {
        route_id: entry.route.route_id.clone(),
        label: format_route_name(&entry.route.route_name),
        grade: entry.route.route_grade.clone(),
        area_path: entry.path.clone(),
        score,
        index: entry.index,
    })
}

fn score_desc_then_label(a_score: f64, a_label: &str, b_score: f64, b_label: &str) -> Ordering {
    b_score
        .total_cmp(&a_score)
        .then_with(|| a_label.cmp(b_label))
}
