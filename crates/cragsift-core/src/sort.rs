use std::cmp::Ordering;
use std::collections::HashMap;

use crate::corpus::RouteEntry;
use crate::grade;
use crate::models::{SortDirection, SortKey, SortSpec};

/// Pairwise order under `spec`. Left-to-right positions only order routes of
/// the same area; routes from different areas compare equal.
#[must_use]
pub fn compare_routes(a: &RouteEntry, b: &RouteEntry, spec: SortSpec) -> Ordering {
    let direction = spec.direction();
    match spec.key {
        SortKey::Grade => compare_grades(a, b, direction),
        SortKey::Stars => directed(a.route.route_stars.total_cmp(&b.route.route_stars), direction),
        SortKey::Votes => directed(a.route.route_votes.cmp(&b.route.route_votes), direction),
        SortKey::Quality => directed(a.quality.total_cmp(&b.quality), direction),
        SortKey::LeftToRight => {
            if a.area_index == b.area_index {
                directed(a.route.left_to_right().cmp(&b.route.left_to_right()), direction)
            } else {
                Ordering::Equal
            }
        }
    }
}

/// Stable sort. Ties keep their incoming order.
#[must_use]
pub fn sort_routes<'a>(routes: &[&'a RouteEntry], spec: SortSpec) -> Vec<&'a RouteEntry> {
    let mut sorted = routes.to_vec();
    if spec.key == SortKey::LeftToRight {
        sort_within_areas(&mut sorted, spec);
    } else {
        sorted.sort_by(|a, b| compare_routes(a, b, spec));
    }
    sorted
}

// Cross-area pairs are incomparable, which is not a total order; instead each
// area's routes are reordered among the slots that area already occupies.
fn sort_within_areas(routes: &mut [&RouteEntry], spec: SortSpec) {
    let mut slots: HashMap<usize, Vec<usize>> = HashMap::new();
    for (slot, entry) in routes.iter().enumerate() {
        slots.entry(entry.area_index).or_default().push(slot);
    }
    for positions in slots.values() {
        if positions.len() < 2 {
            continue;
        }
        let mut members: Vec<&RouteEntry> = positions.iter().map(|&slot| routes[slot]).collect();
        members.sort_by(|a, b| compare_routes(a, b, spec));
        for (&slot, entry) in positions.iter().zip(members) {
            routes[slot] = entry;
        }
    }
}

fn compare_grades(a: &RouteEntry, b: &RouteEntry, direction: SortDirection) -> Ordering {
    match (a.grade.grade(), b.grade.grade()) {
        (Some(left), Some(right)) => directed(grade::compare(left, right), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

const fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
