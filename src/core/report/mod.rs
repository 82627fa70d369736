//! Report generation module for tuition plans
//!
//! This module provides functionality to render a computed plan as a
//! shareable document (Markdown or self-contained HTML) with the cost
//! summary and, for mixed plans, the term-by-term timeline.

pub mod formats;

use crate::core::models::StartTerm;
use crate::core::plan::{ActivePlan, PlanState};
use crate::core::share::PaceMode;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates the plan configuration and its computed result, providing a
/// single source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Plan configuration the report describes
    pub state: &'a PlanState,
    /// Computed plan for the configuration's active mode
    pub plan: &'a ActivePlan,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(state: &'a PlanState, plan: &'a ActivePlan) -> Self {
        Self { state, plan }
    }

    /// The resolved start term
    #[must_use]
    pub fn start_term(&self) -> StartTerm {
        self.state.start_term()
    }

    /// Credits required to graduate from the selected program
    #[must_use]
    pub fn required_credits(&self) -> f64 {
        self.state.program.degree_credits()
    }

    /// Whether the plan falls short of the credit requirement
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.plan.credits_covered < self.required_credits()
    }

    /// Display label for the pacing strategy
    #[must_use]
    pub fn pacing_label(&self) -> String {
        match self.state.mode {
            PaceMode::Constant => format!("Constant, {} credits per term", self.state.pace),
            PaceMode::Mixed => "Mixed load".to_string(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::MixedLoadRow;

    #[test]
    fn test_pacing_label() {
        let constant = PlanState::default();
        let plan = constant.active_plan();
        let ctx = ReportContext::new(&constant, &plan);
        assert_eq!(ctx.pacing_label(), "Constant, 6 credits per term");

        let mixed = PlanState {
            mode: PaceMode::Mixed,
            ..PlanState::default()
        };
        let mixed_plan = mixed.active_plan();
        let ctx = ReportContext::new(&mixed, &mixed_plan);
        assert_eq!(ctx.pacing_label(), "Mixed load");
    }

    #[test]
    fn test_incomplete_detection() {
        let state = PlanState {
            mode: PaceMode::Mixed,
            mixed_rows: vec![MixedLoadRow::new("row-1".to_string(), 2, 3.0)],
            ..PlanState::default()
        };
        let plan = state.active_plan();
        let ctx = ReportContext::new(&state, &plan);
        assert!(ctx.is_incomplete());
    }
}
