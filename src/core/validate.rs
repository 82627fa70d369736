//! Advisory scenario validation
//!
//! Produces human-readable, field-level messages for display next to the
//! live numbers. Validation never blocks computation: the calculators
//! coerce whatever they are given, and these messages let the caller show
//! a warning alongside the (possibly nonsensical) result.

use crate::core::models::{Program, MAX_CREDITS_PER_TERM, MAX_TERMS};

/// Which calculator the scenario feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-term estimate
    PerTerm,
    /// Whole-degree projection
    FullDegree,
}

/// Inputs to a constant-pace scenario as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    /// Display label for the scenario
    pub label: String,
    /// Program key as entered (may be unknown)
    pub program_key: String,
    /// Credits for a single term (per-term mode)
    pub credits: f64,
    /// Credits per term (full-degree mode)
    pub credits_per_term: f64,
    /// Manually entered term count
    pub terms: u32,
    /// Whether the term count is derived instead of manual
    pub use_auto_terms: bool,
    /// Terms per calendar year (2 or 3)
    pub terms_per_year: u32,
}

/// Field-level validation messages; `None` means the field is acceptable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioValidation {
    /// Problem with the single-term credits field
    pub credits_error: Option<String>,
    /// Problem with the credits-per-term field
    pub credits_per_term_error: Option<String>,
    /// Problem with the manual terms field
    pub terms_error: Option<String>,
    /// Problem with the program selection
    pub program_error: Option<String>,
}

impl ScenarioValidation {
    /// Whether no field has a message
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.credits_error.is_none()
            && self.credits_per_term_error.is_none()
            && self.terms_error.is_none()
            && self.program_error.is_none()
    }

    /// All messages present, in field order
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        [
            self.program_error.as_deref(),
            self.credits_error.as_deref(),
            self.credits_per_term_error.as_deref(),
            self.terms_error.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn validate_credit_value(credits: f64) -> Option<String> {
    if !credits.is_finite() {
        Some("Enter a numeric credit value.".to_string())
    } else if credits < 1.0 {
        Some("Credits must be at least 1.".to_string())
    } else if credits > MAX_CREDITS_PER_TERM {
        Some(format!("Credits cannot exceed {MAX_CREDITS_PER_TERM}."))
    } else {
        None
    }
}

/// Validate a scenario for the given mode.
///
/// The result is advisory only; callers still run the calculators on the
/// coerced values.
#[must_use]
pub fn validate_scenario(scenario: &ScenarioInput, mode: Mode) -> ScenarioValidation {
    let mut errors = ScenarioValidation::default();

    if Program::from_key(&scenario.program_key).is_none() {
        errors.program_error = Some("Select a valid program.".to_string());
    }

    match mode {
        Mode::PerTerm => {
            errors.credits_error = validate_credit_value(scenario.credits);
        }
        Mode::FullDegree => {
            errors.credits_per_term_error = validate_credit_value(scenario.credits_per_term);
            if !scenario.use_auto_terms {
                if scenario.terms < 1 {
                    errors.terms_error = Some("Terms must be at least 1.".to_string());
                } else if scenario.terms > MAX_TERMS {
                    errors.terms_error = Some(format!("Terms cannot exceed {MAX_TERMS}."));
                }
            }
        }
    }

    errors
}
