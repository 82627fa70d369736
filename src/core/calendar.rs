//! Term calendar arithmetic over the three-season academic year
//!
//! Terms advance Spring → Summer → Fall → Spring, with the year rolling
//! over after Fall. Offsets are signed; the season index is normalized
//! into the cycle for either sign.

use crate::core::models::{Season, StartTerm, START_TERMS};

/// Resolve a start term from its key (e.g., "fall-2026").
///
/// Unrecognized keys resolve to the first selectable term; this never fails.
#[must_use]
pub fn resolve_start_term(key: &str) -> StartTerm {
    START_TERMS
        .iter()
        .find(|term| term.key() == key)
        .copied()
        .unwrap_or(START_TERMS[0])
}

/// The term `offset` positions after `start` in the season cycle.
#[must_use]
pub fn advance_term(start: StartTerm, offset: i32) -> StartTerm {
    let cycle_len = Season::CYCLE.len() as i32;
    let target = start.season.cycle_index() as i32 + offset;
    let year = start.year + target.div_euclid(cycle_len);
    let season = Season::CYCLE[usize::try_from(target.rem_euclid(cycle_len)).unwrap_or(0)];
    StartTerm::new(season, year)
}

/// Display label for the term `offset` positions after `start`.
#[must_use]
pub fn build_term_label(start: StartTerm, offset: i32) -> String {
    advance_term(start, offset).label()
}

/// The term in which a plan spanning `number_of_terms` terms finishes.
///
/// A plan of one term (or zero) finishes in the start term itself.
#[must_use]
pub fn finish_term(start: StartTerm, number_of_terms: u32) -> StartTerm {
    if number_of_terms <= 1 {
        return start;
    }
    advance_term(start, i32::try_from(number_of_terms - 1).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_key() {
        let term = resolve_start_term("fall-2026");
        assert_eq!(term.season, Season::Fall);
        assert_eq!(term.year, 2026);
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_to_first() {
        assert_eq!(resolve_start_term("winter-2026"), START_TERMS[0]);
        assert_eq!(resolve_start_term(""), START_TERMS[0]);
    }

    #[test]
    fn test_labels_cycle_through_seasons() {
        let spring = StartTerm::new(Season::Spring, 2026);
        assert_eq!(build_term_label(spring, 0), "Spring 2026");
        assert_eq!(build_term_label(spring, 1), "Summer 2026");
        assert_eq!(build_term_label(spring, 2), "Fall 2026");
        assert_eq!(build_term_label(spring, 3), "Spring 2027");
        assert_eq!(build_term_label(spring, 7), "Summer 2028");
    }

    #[test]
    fn test_labels_from_mid_cycle_start() {
        let fall = StartTerm::new(Season::Fall, 2026);
        assert_eq!(build_term_label(fall, 0), "Fall 2026");
        assert_eq!(build_term_label(fall, 1), "Spring 2027");
        assert_eq!(build_term_label(fall, 2), "Summer 2027");
    }

    #[test]
    fn test_negative_offsets_normalize() {
        let spring = StartTerm::new(Season::Spring, 2026);
        assert_eq!(build_term_label(spring, -1), "Fall 2025");
        assert_eq!(build_term_label(spring, -3), "Spring 2025");
    }

    #[test]
    fn test_finish_term_single_term_plan() {
        let start = resolve_start_term("summer-2026");
        assert_eq!(finish_term(start, 0), start);
        assert_eq!(finish_term(start, 1), start);
    }

    #[test]
    fn test_finish_term_advances_terms_minus_one() {
        let spring = StartTerm::new(Season::Spring, 2026);
        // Terms 1..4: Spring 26, Summer 26, Fall 26, Spring 27
        assert_eq!(finish_term(spring, 4), StartTerm::new(Season::Spring, 2027));
        assert_eq!(finish_term(spring, 5), StartTerm::new(Season::Summer, 2027));
        assert_eq!(finish_term(spring, 10), StartTerm::new(Season::Spring, 2029));
    }
}
