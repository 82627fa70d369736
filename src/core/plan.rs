//! Presentation-facing plan state and the derived active plan
//!
//! `PlanState` is a plain value struct owned by whatever layer is driving
//! the planner (CLI command, UI). It carries no draft/applied duality;
//! a preview-before-commit flow simply holds two instances.

use crate::core::calendar::{finish_term, resolve_start_term};
use crate::core::mixed::{calculate_mixed_plan, MixedPlanResult, ScheduledTerm};
use crate::core::models::{
    row::default_mixed_rows, MixedLoadRow, Program, StartTerm, DEFAULT_PACE, PACE_OPTIONS,
    START_TERMS,
};
use crate::core::pace::{calculate_full_degree, FullDegreeResult};
use crate::core::share::{PaceMode, ShareState};

/// Terms per calendar year assumed by the planner timeline
pub const TERMS_PER_YEAR: u32 = 3;

/// The full configuration of a plan being authored
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    /// Selected program
    pub program: Program,
    /// Key of the selected start term
    pub start_term_key: String,
    /// Constant-mode credits per term
    pub pace: u32,
    /// Pacing strategy in effect
    pub mode: PaceMode,
    /// Mixed-mode rows
    pub mixed_rows: Vec<MixedLoadRow>,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            program: Program::Omscs,
            start_term_key: START_TERMS[0].key(),
            pace: DEFAULT_PACE,
            mode: PaceMode::Constant,
            mixed_rows: default_mixed_rows(),
        }
    }
}

/// One row of the constant-pace comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct PaceRow {
    /// Credits per term for this option
    pub credits_per_term: u32,
    /// Term the degree finishes in at this pace
    pub finish_term: StartTerm,
    /// Whole-degree projection at this pace
    pub full_degree: FullDegreeResult,
}

/// Mode-independent plan summary surfaced to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePlan {
    /// Terms enrolled
    pub number_of_terms: u32,
    /// Tuition for the full requirement
    pub total_tuition: f64,
    /// Total online learning fees
    pub total_fees: f64,
    /// Tuition plus fees
    pub total_cost: f64,
    /// Total cost divided by terms (zero for an empty plan)
    pub average_per_term: f64,
    /// Term the plan finishes in
    pub finish_term: StartTerm,
    /// Number of per-term fee payments
    pub fee_payments: u32,
    /// Credits planned across the whole configuration
    pub planned_credits: f64,
    /// Credits of the requirement actually covered
    pub credits_covered: f64,
    /// Term-by-term schedule (empty in constant mode)
    pub schedule: Vec<ScheduledTerm>,
}

impl From<MixedPlanResult> for ActivePlan {
    fn from(plan: MixedPlanResult) -> Self {
        Self {
            number_of_terms: plan.number_of_terms,
            total_tuition: plan.total_tuition,
            total_fees: plan.total_fees,
            total_cost: plan.total_cost,
            average_per_term: plan.average_per_term,
            finish_term: plan.finish_term,
            fee_payments: plan.fee_payments,
            planned_credits: plan.planned_credits,
            credits_covered: plan.credits_covered,
            schedule: plan.schedule,
        }
    }
}

impl PlanState {
    /// The resolved start term (first selectable term for unknown keys)
    #[must_use]
    pub fn start_term(&self) -> StartTerm {
        resolve_start_term(&self.start_term_key)
    }

    /// Whole-degree projections for every selectable pace
    #[must_use]
    pub fn pace_rows(&self) -> Vec<PaceRow> {
        let start = self.start_term();
        PACE_OPTIONS
            .iter()
            .map(|&credits_per_term| {
                let full_degree = calculate_full_degree(
                    self.program,
                    self.program.degree_credits(),
                    f64::from(credits_per_term),
                    0,
                    true,
                    TERMS_PER_YEAR,
                );
                PaceRow {
                    credits_per_term,
                    finish_term: finish_term(start, full_degree.number_of_terms),
                    full_degree,
                }
            })
            .collect()
    }

    /// The mixed-load projection for the current rows
    #[must_use]
    pub fn mixed_plan(&self) -> MixedPlanResult {
        calculate_mixed_plan(
            self.program,
            self.program.degree_credits(),
            self.start_term(),
            &self.mixed_rows,
        )
    }

    /// Whether the mixed rows fall short of the program requirement
    #[must_use]
    pub fn is_mixed_incomplete(&self) -> bool {
        self.mixed_plan()
            .is_incomplete(self.program.degree_credits())
    }

    /// The plan summary for the mode currently in effect.
    ///
    /// Constant mode adapts the selected pace row into the plan shape:
    /// no per-term schedule, and planned/covered credits both equal the
    /// requirement.
    #[must_use]
    pub fn active_plan(&self) -> ActivePlan {
        match self.mode {
            PaceMode::Mixed => self.mixed_plan().into(),
            PaceMode::Constant => {
                let rows = self.pace_rows();
                let selected = rows
                    .iter()
                    .find(|row| row.credits_per_term == self.pace)
                    .unwrap_or(&rows[0]);
                let requirement = self.program.degree_credits();
                ActivePlan {
                    number_of_terms: selected.full_degree.number_of_terms,
                    total_tuition: selected.full_degree.total_tuition,
                    total_fees: selected.full_degree.total_fees,
                    total_cost: selected.full_degree.total_cost,
                    average_per_term: selected.full_degree.average_per_term,
                    finish_term: selected.finish_term,
                    fee_payments: selected.full_degree.number_of_terms,
                    planned_credits: requirement,
                    credits_covered: requirement,
                    schedule: Vec::new(),
                }
            }
        }
    }

    /// The serializable share-link subset of this state
    #[must_use]
    pub fn share_state(&self) -> ShareState {
        ShareState {
            program: self.program,
            start_term_key: self.start_term_key.clone(),
            pace: self.pace,
            mode: self.mode,
            mixed_rows: self.mixed_rows.clone(),
        }
    }
}

impl From<ShareState> for PlanState {
    fn from(state: ShareState) -> Self {
        Self {
            program: state.program,
            start_term_key: state.start_term_key,
            pace: state.pace,
            mode: state.mode,
            mixed_rows: state.mixed_rows,
        }
    }
}
