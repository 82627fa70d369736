//! Mixed-load plan calculator
//!
//! Walks an ordered list of (terms, credits-per-term) rows one term at a
//! time until the degree's credit requirement is covered, accumulating
//! fees per term and building the term-by-term schedule.

use crate::core::calendar::{build_term_label, finish_term};
use crate::core::models::{MixedLoadRow, Program, StartTerm};
use crate::core::pace::{online_learning_fee, round_to_cents};

/// One scheduled term of a mixed-load plan
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTerm {
    /// Display label (e.g., "Fall 2026")
    pub term_label: String,
    /// Credits actually taken this term; the final term may take fewer
    /// than its row's nominal load
    pub credits: f64,
    /// Online learning fee for this term's effective credits
    pub fee: f64,
}

/// Outcome of walking a mixed-load plan against a credit requirement
#[derive(Debug, Clone, PartialEq)]
pub struct MixedPlanResult {
    /// Terms actually enrolled before the requirement was covered (or the
    /// rows ran out)
    pub number_of_terms: u32,
    /// Tuition for the full requirement, independent of pacing
    pub total_tuition: f64,
    /// Sum of per-term fees over the walked schedule
    pub total_fees: f64,
    /// Tuition plus fees
    pub total_cost: f64,
    /// Total cost divided by terms walked (zero for an empty plan)
    pub average_per_term: f64,
    /// Term in which the plan finishes; the start term itself when no
    /// terms were walked
    pub finish_term: StartTerm,
    /// Number of per-term fee payments (one per walked term)
    pub fee_payments: u32,
    /// Credits the rows plan in total, whether or not the requirement
    /// needs them
    pub planned_credits: f64,
    /// Credits of the requirement actually covered by the walk
    pub credits_covered: f64,
    /// The walked terms in order
    pub schedule: Vec<ScheduledTerm>,
}

impl MixedPlanResult {
    /// Whether the rows ran out before covering `required` credits
    #[must_use]
    pub fn is_incomplete(&self, required: f64) -> bool {
        self.credits_covered < required
    }
}

fn sanitize_credits(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Walk the rows against the program's credit requirement.
///
/// Rows are visited in order, one term at a time. Each visited term takes
/// `min(row load, credits remaining)` so the final term never overshoots
/// the requirement, and its fee is charged on those effective credits.
/// A zero-credit term still occupies a term slot. The walk stops the
/// moment the requirement is covered; rows that plan more credits than
/// needed are simply never reached.
#[must_use]
pub fn calculate_mixed_plan(
    program: Program,
    total_credits_required: f64,
    start_term: StartTerm,
    rows: &[MixedLoadRow],
) -> MixedPlanResult {
    let required = sanitize_credits(total_credits_required);
    let total_tuition = round_to_cents(program.per_credit_rate() * required);
    let planned_credits: f64 = rows
        .iter()
        .map(|row| f64::from(row.terms) * sanitize_credits(row.credits_per_term))
        .sum();

    let mut credits_remaining = required;
    let mut number_of_terms: u32 = 0;
    let mut total_fees = 0.0;
    let mut schedule = Vec::new();

    'rows: for row in rows {
        let load = sanitize_credits(row.credits_per_term);
        for _ in 0..row.terms {
            if credits_remaining <= 0.0 {
                break 'rows;
            }
            number_of_terms += 1;
            let credits = load.min(credits_remaining);
            let fee = online_learning_fee(credits);
            total_fees = round_to_cents(total_fees + fee);
            schedule.push(ScheduledTerm {
                term_label: build_term_label(
                    start_term,
                    i32::try_from(number_of_terms - 1).unwrap_or(i32::MAX),
                ),
                credits,
                fee,
            });
            credits_remaining -= credits;
        }
    }

    let credits_covered = required - credits_remaining.max(0.0);
    let total_cost = round_to_cents(total_tuition + total_fees);
    let average_per_term = if number_of_terms > 0 {
        round_to_cents(total_cost / f64::from(number_of_terms))
    } else {
        0.0
    };

    MixedPlanResult {
        number_of_terms,
        total_tuition,
        total_fees,
        total_cost,
        average_per_term,
        finish_term: finish_term(start_term, number_of_terms.max(1)),
        fee_payments: number_of_terms,
        planned_credits,
        credits_covered,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{row::default_mixed_rows, Season, START_TERMS};

    fn row(id: &str, terms: u32, credits: f64) -> MixedLoadRow {
        MixedLoadRow::new(id.to_string(), terms, credits)
    }

    fn assert_dollars(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.005,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_constant_rows_match_full_degree_totals() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 5, 6.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        assert_eq!(plan.number_of_terms, 5);
        assert_dollars(plan.total_tuition, 6750.0);
        assert_dollars(plan.total_fees, 2200.0);
        assert_dollars(plan.total_cost, 8950.0);
        assert_dollars(plan.average_per_term, 1790.0);
        assert_eq!(plan.fee_payments, 5);
        assert_dollars(plan.credits_covered, 30.0);
    }

    #[test]
    fn test_last_term_is_capped_to_remaining_credits() {
        let start = START_TERMS[0];
        // 4 terms of 9 credits would be 36; the requirement is 30
        let rows = vec![row("row-1", 4, 9.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        assert_eq!(plan.number_of_terms, 4);
        let last = plan.schedule.last().unwrap();
        assert_dollars(last.credits, 3.0);
        // Fee on the effective 3 credits, not the nominal 9
        assert_dollars(last.fee, 176.0);
        assert_dollars(plan.credits_covered, 30.0);
        assert_dollars(plan.total_fees, 3.0 * 440.0 + 176.0);
    }

    #[test]
    fn test_walk_stops_once_requirement_is_covered() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 5, 6.0), row("row-2", 10, 9.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        assert_eq!(plan.number_of_terms, 5);
        assert_dollars(plan.credits_covered, 30.0);
        // Planned credits report the whole row list, unclamped
        assert_dollars(plan.planned_credits, 120.0);
    }

    #[test]
    fn test_under_planned_rows_report_shortfall() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 3, 6.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        assert_eq!(plan.number_of_terms, 3);
        assert_dollars(plan.credits_covered, 18.0);
        assert_dollars(plan.planned_credits, 18.0);
        assert!(plan.is_incomplete(30.0));
        // Tuition still reflects the whole requirement
        assert_dollars(plan.total_tuition, 6750.0);
    }

    #[test]
    fn test_zero_credit_rows_consume_terms_without_fees() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 2, 6.0), row("row-2", 1, 0.0), row("row-3", 3, 6.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        assert_eq!(plan.number_of_terms, 6);
        let off_term = &plan.schedule[2];
        assert_dollars(off_term.credits, 0.0);
        assert_dollars(off_term.fee, 0.0);
        assert_dollars(plan.credits_covered, 30.0);
        assert_eq!(plan.fee_payments, 6);
    }

    #[test]
    fn test_empty_plan_still_reports_a_finish_term() {
        let start = START_TERMS[0];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &[]);

        assert_eq!(plan.number_of_terms, 0);
        assert_eq!(plan.finish_term, start);
        assert_dollars(plan.average_per_term, 0.0);
        assert_dollars(plan.credits_covered, 0.0);
        assert!(plan.schedule.is_empty());
    }

    #[test]
    fn test_zero_requirement_walks_no_terms() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 5, 6.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 0.0, start, &rows);

        assert_eq!(plan.number_of_terms, 0);
        assert_eq!(plan.finish_term, start);
        assert_dollars(plan.total_tuition, 0.0);
    }

    #[test]
    fn test_nonfinite_row_credits_are_coerced_to_zero() {
        let start = START_TERMS[0];
        let rows = vec![row("row-1", 2, f64::NAN), row("row-2", 5, 6.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        // The NaN row becomes two zero-credit terms
        assert_eq!(plan.number_of_terms, 7);
        assert_dollars(plan.schedule[0].credits, 0.0);
        assert_dollars(plan.credits_covered, 30.0);
    }

    #[test]
    fn test_schedule_labels_follow_the_calendar() {
        let start = StartTerm::new(Season::Fall, 2026);
        let rows = vec![row("row-1", 4, 9.0)];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &rows);

        let labels: Vec<&str> = plan
            .schedule
            .iter()
            .map(|t| t.term_label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Fall 2026", "Spring 2027", "Summer 2027", "Fall 2027"]
        );
        assert_eq!(plan.finish_term, StartTerm::new(Season::Fall, 2027));
    }

    #[test]
    fn test_default_rows_complete_omscs_in_seven_terms() {
        let start = START_TERMS[0];
        let plan = calculate_mixed_plan(Program::Omscs, 30.0, start, &default_mixed_rows());

        // 3,3,6,6,3,6 covers 27; the seventh term takes the final 3
        assert_eq!(plan.number_of_terms, 7);
        assert_dollars(plan.credits_covered, 30.0);
        assert_dollars(plan.schedule[6].credits, 3.0);
        assert!(!plan.is_incomplete(30.0));
    }
}
