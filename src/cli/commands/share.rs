//! Share command handler: encode and decode share links

use crate::args::ShareSubcommand;
use oms_planner::config::Config;
use oms_planner::core::calendar::resolve_start_term;
use oms_planner::core::share::{build_share_url, parse_share_query, PaceMode};

use super::plan::{config_defaults, resolve_plan_state};

/// Dispatch share subcommands
pub fn run(subcommand: ShareSubcommand, config: &Config) {
    match subcommand {
        ShareSubcommand::Encode { plan, base } => {
            let state = resolve_plan_state(&plan, config);
            let base = base.unwrap_or_else(|| config.share.base_url.clone());
            println!("{}", build_share_url(&base, &state.share_state()));
        }
        ShareSubcommand::Decode { link } => {
            let defaults = config_defaults(config);
            let query = link.split_once('?').map_or(link.as_str(), |(_, q)| q);
            let state = parse_share_query(query, &defaults);

            println!("\n=== Decoded plan ===\n");
            println!("Program: {} ({})", state.program.label(), state.program.key());
            println!(
                "Start term: {}",
                resolve_start_term(&state.start_term_key).label()
            );
            println!("Pace: {} credits per term", state.pace);
            println!("Mode: {}", state.mode);
            if state.mode == PaceMode::Mixed {
                println!("Mixed rows:");
                for row in &state.mixed_rows {
                    println!(
                        "  {} terms at {} credits",
                        row.terms, row.credits_per_term
                    );
                }
            }
        }
    }
}
