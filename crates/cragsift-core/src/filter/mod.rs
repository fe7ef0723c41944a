mod area;
mod tags;


use crate::corpus::{Corpus, RouteEntry};
use crate::models::FilterSpec;

use area::AreaSelection;

/// Route types that never appear in results.
pub const HARD_EXCLUDED_TYPES: &[&str] = &["Aid", "Boulder", "Ice", "Mixed", "Snow"];

/// Routes matching `spec`, in corpus order.
#[must_use]
pub fn filter_routes<'a>(corpus: &'a Corpus, spec: &FilterSpec) -> Vec<&'a RouteEntry> {
    let selection = AreaSelection::new(&spec.areas);
    let matched: Vec<&RouteEntry> = corpus
        .routes()
        .iter()
        .filter(|entry| route_matches(entry, spec, &selection))
        .collect();
    tracing::debug!(
        candidates = corpus.routes().len(),
        matched = matched.len(),
        "filter applied"
    );
    matched
}

fn route_matches(entry: &RouteEntry, spec: &FilterSpec, selection: &AreaSelection) -> bool {
    selection.matches(&entry.path)
        && !has_excluded_type(entry)
        && spec.grade.admits(entry.grade)
        && matches_styles(entry, spec)
        && spec
            .tags
            .iter()
            .all(|(category, criteria)| tags::category_matches(entry, category, criteria))
}

fn has_excluded_type(entry: &RouteEntry) -> bool {
    HARD_EXCLUDED_TYPES.iter().any(|label| entry.route.has_type(label))
}

// Commitment tokens such as `Grade IV` never equal a style label.
fn matches_styles(entry: &RouteEntry, spec: &FilterSpec) -> bool {
    spec.styles.is_empty() || spec.styles.iter().any(|style| entry.route.has_type(style.as_str()))
}
