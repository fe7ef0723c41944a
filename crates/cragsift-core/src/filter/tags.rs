use crate::corpus::RouteEntry;
use crate::models::Criterion;

/// Exclusions veto; positive-style criteria are OR'd; a category holding
/// only exclusions adds no positive requirement.
pub(crate) fn category_matches(entry: &RouteEntry, category: &str, criteria: &[Criterion]) -> bool {
    let excluded = criteria.iter().any(|criterion| match criterion {
        Criterion::Exclude(tag) => entry.route.has_tag(category, tag),
        Criterion::Positive(_) | Criterion::PitchCountEquals(_) => false,
    });
    if excluded {
        return false;
    }

    let mut positives = criteria
        .iter()
        .filter(|criterion| !criterion.is_exclusion())
        .peekable();
    if positives.peek().is_none() {
        return true;
    }
    positives.any(|criterion| match criterion {
        Criterion::Positive(tag) => entry.route.has_tag(category, tag),
        Criterion::PitchCountEquals(count) => entry.route.route_pitches == *count,
        Criterion::Exclude(_) => false,
    })
}
