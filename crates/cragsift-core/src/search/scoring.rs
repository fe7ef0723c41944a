use std::collections::HashSet;

const TERM_MATCH_BASE: f64 = 10.0;
const TERM_LENGTH_WEIGHT: f64 = 1.0;
const BOUNDARY_BONUS: f64 = 5.0;
const PHRASE_BONUS: f64 = 10.0;
pub(super) const HIERARCHY_BONUS: f64 = 3.0;

/// Lowercased whitespace terms, first occurrence wins.
pub(super) fn tokenize_terms(query: &str) -> Vec<String> {
    let mut out = Vec::<String>::new();
    let mut seen = HashSet::<String>::new();
    for token in query.to_lowercase().split_whitespace() {
        let token = token.to_string();
        if seen.insert(token.clone()) {
            out.push(token);
        }
    }
    out
}

/// Whitespace-collapsed lowercase query, used for the phrase bonus.
pub(super) fn normalized_phrase(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `field` must already be lowercase. Terms absent from the field add nothing.
pub(super) fn field_score(field: &str, terms: &[String], phrase: &str) -> f64 {
    let mut score = 0.0;
    for term in terms {
        if !field.contains(term.as_str()) {
            continue;
        }
        score += TERM_MATCH_BASE + TERM_LENGTH_WEIGHT * term.chars().count() as f64;
        if starts_at_boundary(field, term) {
            score += BOUNDARY_BONUS;
        }
    }
    if terms.len() > 1 && field.contains(phrase) {
        score += PHRASE_BONUS;
    }
    score
}

fn starts_at_boundary(field: &str, term: &str) -> bool {
    field.match_indices(term).any(|(idx, _)| {
        field[..idx]
            .chars()
            .next_back()
            .is_none_or(|prev| prev == ' ' || prev == '/' || prev == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_terms_lowercases_and_deduplicates_in_order() {
        assert_eq!(
            tokenize_terms("Squamish  crack SQUAMISH"),
            vec!["squamish", "crack"]
        );
    }

    #[test]
    fn boundary_match_outscores_infix_match() {
        let terms = vec!["crack".to_string()];
        let boundary = field_score("exasperator crack", &terms, "crack");
        let infix = field_score("firecracker", &terms, "crack");
        assert!(boundary > infix);
        assert!(infix > 0.0);
        assert!(starts_at_boundary("north-crack", "crack"));
    }

    #[test]
    fn phrase_bonus_requires_verbatim_sequence() {
        let terms = tokenize_terms("grand wall");
        let phrase = normalized_phrase("grand  wall");
        let verbatim = field_score("grand wall", &terms, &phrase);
        let scattered = field_score("wall of the grand", &terms, &phrase);
        assert!(verbatim > scattered);
    }
}
