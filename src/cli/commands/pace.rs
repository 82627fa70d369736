//! Pace command handler: constant pacing comparison table

use oms_planner::config::Config;
use oms_planner::core::calendar::resolve_start_term;
use oms_planner::core::format::{format_currency, format_term_duration};
use oms_planner::core::models::Program;
use oms_planner::core::plan::PlanState;
use oms_planner::core::share::PaceMode;

/// Run the pace command
pub fn run(program_key: Option<&str>, start_key: Option<&str>, config: &Config) {
    let key = program_key.unwrap_or(&config.defaults.program);
    let Some(program) = Program::from_key(key) else {
        eprintln!("✗ Unknown program key '{key}'. Valid keys: omsa, omscs, omscsec");
        return;
    };
    let start_term = resolve_start_term(start_key.unwrap_or(&config.defaults.start_term));

    let state = PlanState {
        program,
        start_term_key: start_term.key(),
        mode: PaceMode::Constant,
        ..PlanState::default()
    };

    println!(
        "\n=== Pace options: {} starting {} ===\n",
        program.label(),
        start_term.label()
    );
    println!(
        "{:<6} {:<6} {:<12} {:<12} {:<13} {}",
        "Pace", "Terms", "Total", "Avg/term", "Finish", "Duration"
    );

    for row in state.pace_rows() {
        println!(
            "{:<6} {:<6} {:<12} {:<12} {:<13} {}",
            row.credits_per_term,
            row.full_degree.number_of_terms,
            format_currency(row.full_degree.total_cost),
            format_currency(row.full_degree.average_per_term),
            row.finish_term.label(),
            format_term_duration(
                row.full_degree.time_to_graduate_years,
                row.full_degree.time_to_graduate_months
            )
        );
    }
}
