//! Markdown report generator
//!
//! Renders a plan as Markdown that displays well in GitHub, GitLab, and
//! VS Code.

use crate::core::format::format_currency;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{program_label}}", ctx.state.program.label());
        output = output.replace("{{start_term}}", &ctx.start_term().label());
        output = output.replace("{{finish_term}}", &ctx.plan.finish_term.label());
        output = output.replace("{{pacing}}", &ctx.pacing_label());
        output = output.replace("{{required_credits}}", &ctx.required_credits().to_string());
        output = output.replace(
            "{{credits_covered}}",
            &ctx.plan.credits_covered.to_string(),
        );

        output = output.replace("{{total_tuition}}", &format_currency(ctx.plan.total_tuition));
        output = output.replace("{{total_fees}}", &format_currency(ctx.plan.total_fees));
        output = output.replace("{{total_cost}}", &format_currency(ctx.plan.total_cost));
        output = output.replace(
            "{{average_per_term}}",
            &format_currency(ctx.plan.average_per_term),
        );
        output = output.replace("{{fee_payments}}", &ctx.plan.fee_payments.to_string());
        output = output.replace(
            "{{number_of_terms}}",
            &ctx.plan.number_of_terms.to_string(),
        );

        output = output.replace("{{timeline}}", &Self::generate_timeline_table(ctx));
        output = output.replace("{{incomplete_notice}}", &Self::incomplete_notice(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate the term-by-term timeline table (mixed plans only)
    fn generate_timeline_table(ctx: &ReportContext) -> String {
        if ctx.plan.schedule.is_empty() {
            return String::new();
        }

        let mut table = String::from("## Calendar timeline\n\n");
        table.push_str("| # | Term | Credits | Fee |\n");
        table.push_str("|---|---|---|---|\n");
        for (idx, term) in ctx.plan.schedule.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                idx + 1,
                term.term_label,
                term.credits,
                format_currency(term.fee)
            );
        }
        table
    }

    /// Warning block when the plan falls short of the requirement
    fn incomplete_notice(ctx: &ReportContext) -> String {
        if ctx.is_incomplete() {
            format!(
                "> ⚠️ This plan covers {} of {} required credits. Add more terms to finish.\n",
                ctx.plan.credits_covered,
                ctx.required_credits()
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::PlanState;
    use crate::core::share::PaceMode;

    #[test]
    fn test_constant_plan_renders_without_timeline() {
        let state = PlanState::default();
        let plan = state.active_plan();
        let ctx = ReportContext::new(&state, &plan);

        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("MS in Computer Science (OMSCS)"));
        assert!(output.contains("$8,950.00"));
        assert!(output.contains("Constant, 6 credits per term"));
        assert!(!output.contains("Calendar timeline"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_mixed_plan_renders_timeline() {
        let state = PlanState {
            mode: PaceMode::Mixed,
            ..PlanState::default()
        };
        let plan = state.active_plan();
        let ctx = ReportContext::new(&state, &plan);

        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("Calendar timeline"));
        assert!(output.contains("| 1 | Spring 2026 | 3 |"));
        assert!(!output.contains("{{"));
    }
}
