//! Resolution results and outcome-vocabulary matching.

use serde::{Deserialize, Serialize};

/// The settled outcome of a market with its justification.
///
/// `outcome` is always byte-identical to one entry of the market's outcome
/// list; the oracle contract performs no fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub outcome: String,
    pub reasoning: String,
}

/// Map a candidate outcome onto the market vocabulary.
///
/// Tries an exact match first, then a case-insensitive match on trimmed
/// text. Returns the vocabulary's own string so the result is exact.
#[must_use]
pub fn match_outcome<'a>(candidate: &str, outcomes: &'a [String]) -> Option<&'a str> {
    if let Some(exact) = outcomes.iter().find(|o| o.as_str() == candidate) {
        return Some(exact);
    }

    let wanted = candidate.trim().to_lowercase();
    outcomes
        .iter()
        .find(|o| o.trim().to_lowercase() == wanted)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<String> {
        vec!["Under 2.5".into(), "Over 2.5".into()]
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(match_outcome("Over 2.5", &vocab()), Some("Over 2.5"));
    }

    #[test]
    fn case_and_whitespace_fall_back_to_canonical_string() {
        assert_eq!(match_outcome("  over 2.5 ", &vocab()), Some("Over 2.5"));
        assert_eq!(match_outcome("UNDER 2.5", &vocab()), Some("Under 2.5"));
    }

    #[test]
    fn exact_match_preferred_over_case_insensitive() {
        let outcomes = vec!["yes".to_string(), "Yes".to_string()];
        assert_eq!(match_outcome("Yes", &outcomes), Some("Yes"));
    }

    #[test]
    fn non_member_is_rejected() {
        assert_eq!(match_outcome("Over 3.5", &vocab()), None);
        assert_eq!(match_outcome("", &vocab()), None);
    }
}
