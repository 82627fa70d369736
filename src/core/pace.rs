//! Constant-load financial projections
//!
//! Pure arithmetic over the rate table: a single term at a given credit
//! load, or a whole degree at a constant credits-per-term pace. Invalid
//! numeric input degrades to a zero result rather than an error, so the
//! presentation layer always has a number to show.

use crate::core::models::{Program, ONLINE_LEARNING_FEE_RULE};

/// Round a dollar amount to cents.
///
/// Applied at every accumulation step, not just at the end; downstream
/// totals depend on the repeated rounding.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Online learning fee for a single term at the given credit load
#[must_use]
pub fn online_learning_fee(credits: f64) -> f64 {
    ONLINE_LEARNING_FEE_RULE.fee_for(credits)
}

/// Cost breakdown for a single enrolled term
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerTermResult {
    /// Tuition at the program's per-credit rate
    pub tuition: f64,
    /// Flat online learning fee for the term
    pub online_learning_fee: f64,
    /// Tuition plus fee
    pub total: f64,
}

/// Whole-degree projection at a constant credits-per-term pace
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FullDegreeResult {
    /// Tuition for the full credit requirement, independent of pacing
    pub total_tuition: f64,
    /// Online learning fee charged each term at the constant load
    pub fee_per_term: f64,
    /// Fee per term times number of terms
    pub total_fees: f64,
    /// Tuition plus fees
    pub total_cost: f64,
    /// Total cost divided by number of terms (zero for an empty plan)
    pub average_per_term: f64,
    /// Terms needed to cover the requirement
    pub number_of_terms: u32,
    /// Whole years of the time-to-graduate estimate
    pub time_to_graduate_years: u32,
    /// Remainder months of the time-to-graduate estimate
    pub time_to_graduate_months: u32,
}

/// Cost of one term at the given credit load.
///
/// Non-finite or non-positive credits produce an all-zero result.
#[must_use]
pub fn calculate_per_term(program: Program, credits: f64) -> PerTermResult {
    if !credits.is_finite() || credits <= 0.0 {
        return PerTermResult::default();
    }
    let tuition = round_to_cents(program.per_credit_rate() * credits);
    let online_learning_fee = online_learning_fee(credits);
    let total = round_to_cents(tuition + online_learning_fee);
    PerTermResult {
        tuition,
        online_learning_fee,
        total,
    }
}

/// Project the full degree at a constant pace.
///
/// When `use_auto_terms` is set the term count is derived from the credit
/// requirement and per-term load; otherwise `manual_terms` is used as-is.
/// The fee assumes the constant load every term, a deliberate
/// simplification of the final lighter term.
///
/// Non-finite or non-positive `total_credits` produces an all-zero result.
#[must_use]
pub fn calculate_full_degree(
    program: Program,
    total_credits: f64,
    credits_per_term: f64,
    manual_terms: u32,
    use_auto_terms: bool,
    terms_per_year: u32,
) -> FullDegreeResult {
    if !total_credits.is_finite() || total_credits <= 0.0 {
        return FullDegreeResult::default();
    }

    let normalized_credits_per_term = if credits_per_term.is_finite() {
        credits_per_term
    } else {
        0.0
    };
    let number_of_terms = if use_auto_terms {
        if normalized_credits_per_term > 0.0 {
            (total_credits / normalized_credits_per_term).ceil() as u32
        } else {
            0
        }
    } else {
        manual_terms
    };

    let fee_per_term = online_learning_fee(normalized_credits_per_term);
    let total_tuition = round_to_cents(program.per_credit_rate() * total_credits);
    let total_fees = round_to_cents(fee_per_term * f64::from(number_of_terms));
    let total_cost = round_to_cents(total_tuition + total_fees);
    let average_per_term = if number_of_terms > 0 {
        round_to_cents(total_cost / f64::from(number_of_terms))
    } else {
        0.0
    };

    let raw_months = if number_of_terms > 0 && terms_per_year > 0 {
        (f64::from(number_of_terms) / f64::from(terms_per_year) * 12.0).round() as u32
    } else {
        0
    };

    FullDegreeResult {
        total_tuition,
        fee_per_term,
        total_fees,
        total_cost,
        average_per_term,
        number_of_terms,
        time_to_graduate_years: raw_months / 12,
        time_to_graduate_months: raw_months % 12,
    }
}
