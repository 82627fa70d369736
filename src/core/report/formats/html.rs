//! HTML report generator
//!
//! Generates a self-contained HTML report with embedded CSS; no external
//! assets are referenced so the file can be attached or shared as-is.

use crate::core::format::format_currency;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

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

        output = output.replace("{{timeline}}", &Self::generate_timeline_html(ctx));
        output = output.replace("{{incomplete_notice}}", &Self::incomplete_notice(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate the term-by-term timeline table (mixed plans only)
    fn generate_timeline_html(ctx: &ReportContext) -> String {
        if ctx.plan.schedule.is_empty() {
            return String::new();
        }

        let mut html = String::from("<h2>Calendar timeline</h2>\n<table>\n");
        html.push_str("  <tr><th>#</th><th>Term</th><th>Credits</th><th>Fee</th></tr>\n");
        for (idx, term) in ctx.plan.schedule.iter().enumerate() {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                idx + 1,
                term.term_label,
                term.credits,
                format_currency(term.fee)
            );
        }
        html.push_str("</table>\n");
        html
    }

    /// Warning block when the plan falls short of the requirement
    fn incomplete_notice(ctx: &ReportContext) -> String {
        if ctx.is_incomplete() {
            format!(
                "<div class=\"notice\">⚠️ This plan covers {} of {} required credits. Add more terms to finish.</div>\n",
                ctx.plan.credits_covered,
                ctx.required_credits()
            )
        } else {
            String::new()
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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
    use crate::core::models::MixedLoadRow;
    use crate::core::plan::PlanState;
    use crate::core::share::PaceMode;

    #[test]
    fn test_html_renders_all_placeholders() {
        let state = PlanState {
            mode: PaceMode::Mixed,
            ..PlanState::default()
        };
        let plan = state.active_plan();
        let ctx = ReportContext::new(&state, &plan);

        let output = HtmlReporter::new().render(&ctx).unwrap();
        assert!(output.contains("<h2>Calendar timeline</h2>"));
        // 6,750 tuition + 2,024 in per-term fees for the default mixed rows
        assert!(output.contains("$8,774.00"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_html_incomplete_notice() {
        let state = PlanState {
            mode: PaceMode::Mixed,
            mixed_rows: vec![MixedLoadRow::new("row-1".to_string(), 2, 3.0)],
            ..PlanState::default()
        };
        let plan = state.active_plan();
        let ctx = ReportContext::new(&state, &plan);

        let output = HtmlReporter::new().render(&ctx).unwrap();
        assert!(output.contains("class=\"notice\""));
        assert!(output.contains("6 of 30"));
    }
}
