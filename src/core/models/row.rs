//! Mixed-load row model

use serde::{Deserialize, Serialize};

/// A block of consecutive terms taken at the same credit load.
///
/// Rows are ordered, and that order is the chronological order of the plan.
/// A row with zero terms contributes nothing. The `id` is stable across
/// edits but carries no meaning beyond identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedLoadRow {
    /// Stable identifier (e.g., "row-1")
    pub id: String,
    /// Number of consecutive terms at this load
    pub terms: u32,
    /// Credits enrolled in each of those terms
    pub credits_per_term: f64,
}

impl MixedLoadRow {
    /// Create a new row
    #[must_use]
    pub const fn new(id: String, terms: u32, credits_per_term: f64) -> Self {
        Self {
            id,
            terms,
            credits_per_term,
        }
    }

    /// Credits planned across all terms of this row
    #[must_use]
    pub fn planned_credits(&self) -> f64 {
        f64::from(self.terms) * self.credits_per_term
    }
}

/// The starter mixed plan offered before the user edits anything:
/// a ramp-up pattern alternating light and full loads.
#[must_use]
pub fn default_mixed_rows() -> Vec<MixedLoadRow> {
    vec![
        MixedLoadRow::new("row-1".to_string(), 2, 3.0),
        MixedLoadRow::new("row-2".to_string(), 2, 6.0),
        MixedLoadRow::new("row-3".to_string(), 1, 3.0),
        MixedLoadRow::new("row-4".to_string(), 2, 6.0),
        MixedLoadRow::new("row-5".to_string(), 1, 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_credits() {
        let row = MixedLoadRow::new("row-1".to_string(), 4, 6.0);
        assert!((row.planned_credits() - 24.0).abs() < f64::EPSILON);

        let empty = MixedLoadRow::new("row-2".to_string(), 0, 9.0);
        assert!(empty.planned_credits().abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_rows_cover_every_program_requirement() {
        let planned: f64 = default_mixed_rows()
            .iter()
            .map(MixedLoadRow::planned_credits)
            .sum();
        // 2x3 + 2x6 + 1x3 + 2x6 + 1x3
        assert!((planned - 36.0).abs() < f64::EPSILON);
    }
}
