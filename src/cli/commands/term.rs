//! Term command handler: single-term cost estimate

use oms_planner::config::Config;
use oms_planner::core::format::format_currency;
use oms_planner::core::models::Program;
use oms_planner::core::pace::calculate_per_term;
use oms_planner::core::validate::{validate_scenario, Mode, ScenarioInput};

/// Run the term command.
///
/// Validation messages are advisory; the estimate is always printed, with
/// invalid credits degrading to a zero result.
pub fn run(credits: f64, program_key: Option<&str>, config: &Config) {
    let key = program_key.unwrap_or(&config.defaults.program);

    let scenario = ScenarioInput {
        label: "term estimate".to_string(),
        program_key: key.to_string(),
        credits,
        credits_per_term: credits,
        terms: 1,
        use_auto_terms: true,
        terms_per_year: 3,
    };
    let validation = validate_scenario(&scenario, Mode::PerTerm);
    for message in validation.messages() {
        eprintln!("⚠ {message}");
    }

    let program = Program::from_key(key)
        .or_else(|| Program::from_key(&config.defaults.program))
        .unwrap_or(Program::Omscs);
    let result = calculate_per_term(program, credits);

    println!("\n=== One term at {credits} credits: {} ===\n", program.label());
    println!("Tuition: {}", format_currency(result.tuition));
    println!(
        "Online learning fee: {}",
        format_currency(result.online_learning_fee)
    );
    println!("Total: {}", format_currency(result.total));
}
