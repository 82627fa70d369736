//! Plan command handler

use crate::args::PlanArgs;
use oms_planner::config::Config;
use oms_planner::core::calendar::resolve_start_term;
use oms_planner::core::format::{format_currency, format_term_duration};
use oms_planner::core::models::{row::default_mixed_rows, Program, DEFAULT_PACE, PACE_OPTIONS};
use oms_planner::core::plan::{PlanState, TERMS_PER_YEAR};
use oms_planner::core::share::{
    build_share_url, parse_mixed_rows, parse_share_query, PaceMode, ShareState,
};
use oms_planner::info;

/// The share state described by the user's configuration defaults.
///
/// Config values pass through the same fallbacks as share-link decoding,
/// so a hand-edited config file degrades instead of failing.
pub fn config_defaults(config: &Config) -> ShareState {
    let pace = if PACE_OPTIONS.contains(&config.defaults.pace) {
        config.defaults.pace
    } else {
        DEFAULT_PACE
    };
    ShareState {
        program: Program::from_key(&config.defaults.program).unwrap_or(Program::Omscs),
        start_term_key: resolve_start_term(&config.defaults.start_term).key(),
        pace,
        mode: PaceMode::from_key(&config.defaults.mode).unwrap_or(PaceMode::Constant),
        mixed_rows: default_mixed_rows(),
    }
}

/// Resolve the effective plan state: config defaults, overlaid with a share
/// link when `--from-url` is given, overlaid with explicit flags.
pub fn resolve_plan_state(args: &PlanArgs, config: &Config) -> PlanState {
    let defaults = config_defaults(config);

    let mut state = if let Some(link) = &args.from_url {
        let query = link.split_once('?').map_or(link.as_str(), |(_, q)| q);
        parse_share_query(query, &defaults)
    } else {
        defaults
    };

    if let Some(key) = &args.program {
        match Program::from_key(key) {
            Some(program) => state.program = program,
            None => eprintln!(
                "✗ Unknown program key '{key}'; using {}",
                state.program.key()
            ),
        }
    }

    if let Some(key) = &args.start {
        let resolved = resolve_start_term(key);
        if resolved.key() == *key {
            state.start_term_key = resolved.key();
        } else {
            eprintln!(
                "✗ Unknown start term '{key}'; using {}",
                state.start_term_key
            );
        }
    }

    if let Some(pace) = args.pace {
        if PACE_OPTIONS.contains(&pace) {
            state.pace = pace;
        } else {
            eprintln!("✗ Pace must be one of {PACE_OPTIONS:?}; using {}", state.pace);
        }
    }

    if let Some(mode) = &args.mode {
        match PaceMode::from_key(mode) {
            Some(parsed) => state.mode = parsed,
            None => eprintln!("✗ Mode must be 'constant' or 'mixed'; using {}", state.mode),
        }
    } else if args.mixed.is_some() {
        // Editing rows implies the mixed strategy
        state.mode = PaceMode::Mixed;
    }

    if let Some(tokens) = &args.mixed {
        let rows = parse_mixed_rows(tokens);
        if rows.is_empty() {
            eprintln!("✗ Could not parse mixed rows '{tokens}'; expected TERMSxCREDITS tokens like 2x3,2x6");
        } else {
            state.mixed_rows = rows;
        }
    }

    PlanState::from(state)
}

/// Estimated calendar duration of a plan spanning `number_of_terms` terms
fn duration_parts(number_of_terms: u32) -> (u32, u32) {
    if number_of_terms == 0 {
        return (0, 0);
    }
    let raw_months =
        (f64::from(number_of_terms) / f64::from(TERMS_PER_YEAR) * 12.0).round() as u32;
    (raw_months / 12, raw_months % 12)
}

/// Run the plan command
pub fn run(args: &PlanArgs, share: bool, config: &Config) {
    let state = resolve_plan_state(args, config);
    let plan = state.active_plan();
    let required = state.program.degree_credits();

    info!(
        "Computed {} plan for {} over {} terms",
        state.mode,
        state.program.key(),
        plan.number_of_terms
    );

    println!(
        "\n=== Your {} Plan ===\n",
        state.program.key().to_uppercase()
    );
    println!("Program: {}", state.program.label());
    println!("Start term: {}", state.start_term().label());
    println!("Pacing: {}", pacing_line(&state));
    println!("Finish term: {}", plan.finish_term.label());
    let (years, months) = duration_parts(plan.number_of_terms);
    println!("Estimated time: {}", format_term_duration(years, months));

    println!("\nCredits required: {required}");
    println!("Credits planned: {}", plan.planned_credits);
    println!("Credits covered: {}", plan.credits_covered);

    println!("\nTuition: {}", format_currency(plan.total_tuition));
    println!(
        "Online learning fees: {} ({} payments)",
        format_currency(plan.total_fees),
        plan.fee_payments
    );
    println!("Total cost: {}", format_currency(plan.total_cost));
    println!("Average per term: {}", format_currency(plan.average_per_term));

    if !plan.schedule.is_empty() {
        println!("\nCalendar timeline:");
        for (idx, term) in plan.schedule.iter().enumerate() {
            println!(
                "  {:>2}. {:<12} {} credits · {}",
                idx + 1,
                term.term_label,
                term.credits,
                format_currency(term.fee)
            );
        }
    }

    if plan.credits_covered < required {
        println!(
            "\n⚠ This plan covers {} of {required} required credits. Add more terms to finish.",
            plan.credits_covered
        );
    }

    if share {
        let url = build_share_url(&config.share.base_url, &state.share_state());
        println!("\nShare link: {url}");
    }
}

fn pacing_line(state: &PlanState) -> String {
    match state.mode {
        PaceMode::Constant => format!("Constant, {} credits per term", state.pace),
        PaceMode::Mixed => format!("Mixed load, {} rows", state.mixed_rows.len()),
    }
}
