//! Report command handler

use crate::args::PlanArgs;
use oms_planner::config::Config;
use oms_planner::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use oms_planner::{error, info};
use std::path::{Path, PathBuf};

use super::plan::resolve_plan_state;

/// Run the report command
pub fn run(args: &PlanArgs, output: Option<&Path>, format: &str, config: &Config) {
    let format: ReportFormat = match format.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let state = resolve_plan_state(args, config);
    let plan = state.active_plan();
    let ctx = ReportContext::new(&state, &plan);

    let output_path: PathBuf = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        reports_dir.join(format!(
            "{}-{}-plan.{}",
            state.program.key(),
            state.mode,
            format.extension()
        ))
    };

    if let Some(parent) = output_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            eprintln!("✗ Failed to create reports directory: {}", parent.display());
            return;
        }
    }

    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    match reporter.generate(&ctx, &output_path) {
        Ok(()) => {
            println!("✓ Report generated: {}", output_path.display());
            info!("Plan report written to: {}", output_path.display());
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ Failed to write report to {}: {e}", output_path.display());
        }
    }
}
