//! Audit report formatting
//!
//! Renders an [`AuditReport`] for the console (score with band summary,
//! checks grouped by category in first-seen order, recommendations in
//! derivation order) or as JSON.

use console::style;
use std::fmt::{self, Write as _};

use crate::audit::{AuditReport, Category, CheckResult, CheckStatus, Priority, ScoreBand};
use crate::fmt::{truncate_str, CHART, LIGHTBULB, MICROSCOPE, WARNING};
use crate::site::SiteReport;

/// Format an audit report for console output
pub fn format_console_report(report: &AuditReport) -> Result<String, fmt::Error> {
    let mut output = String::new();

    // Score header
    let score_text = format!("{}/100", report.score);
    let band = report.band();
    let styled_score = match band {
        ScoreBand::Excellent => style(score_text).green().bold(),
        ScoreBand::Good => style(score_text).yellow().bold(),
        ScoreBand::Poor => style(score_text).red().bold(),
    };
    writeln!(output, "\n{} SEO Score: {}", CHART, styled_score)?;

    let summary = match band {
        ScoreBand::Excellent => style(band.summary()).green(),
        ScoreBand::Good => style(band.summary()).yellow(),
        ScoreBand::Poor => style(band.summary()).red(),
    };
    writeln!(output, "   {}\n", summary)?;

    // Checks grouped by category, first-seen order
    writeln!(output, "{} Checks", MICROSCOPE)?;
    for (category, checks) in group_by_category(&report.checks) {
        writeln!(output, "   {}", style(category.label()).bold())?;
        for check in checks {
            writeln!(
                output,
                "     {} {:<20} {}",
                status_glyph(check.status),
                check.name,
                style(&check.message).dim()
            )?;
        }
    }

    // Recommendations
    if report.recommendations.is_empty() {
        writeln!(
            output,
            "\n{} Great job! No specific recommendations at this time.",
            LIGHTBULB
        )?;
    } else {
        writeln!(output, "\n{} Recommendations", LIGHTBULB)?;
        for rec in &report.recommendations {
            let priority = match rec.priority {
                Priority::High => style("high  ").red().bold(),
                Priority::Medium => style("medium").yellow(),
            };
            writeln!(output, "   {} {}: {}", priority, rec.category, rec.message)?;
        }
    }

    output.push('\n');
    Ok(output)
}

/// Format an audit report as pretty-printed JSON
pub fn format_json_report(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Format a site report for console output: one line per page plus the
/// site-level average and any unreadable pages.
pub fn format_site_console_report(report: &SiteReport) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "\n{} Site Audit", CHART)?;
    for page in &report.pages {
        let score_text = format!("{:>3}/100", page.report.score);
        let styled_score = match page.report.band() {
            ScoreBand::Excellent => style(score_text).green(),
            ScoreBand::Good => style(score_text).yellow(),
            ScoreBand::Poor => style(score_text).red(),
        };
        writeln!(
            output,
            "   {} {}",
            styled_score,
            truncate_str(&page.path, 60)
        )?;
    }

    for failure in &report.failures {
        writeln!(
            output,
            "   {} {} ({})",
            WARNING,
            truncate_str(&failure.path, 60),
            style(&failure.error).dim()
        )?;
    }

    writeln!(
        output,
        "\n   Average score: {} across {} page(s)",
        style(format!("{}/100", report.average_score)).bold(),
        report.pages.len()
    )?;

    output.push('\n');
    Ok(output)
}

/// Format a site report as pretty-printed JSON
pub fn format_site_json_report(report: &SiteReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Stable insertion-order partition of checks by category.
fn group_by_category(checks: &[CheckResult]) -> Vec<(Category, Vec<&CheckResult>)> {
    let mut groups: Vec<(Category, Vec<&CheckResult>)> = Vec::new();
    for check in checks {
        match groups.iter_mut().find(|(cat, _)| *cat == check.category) {
            Some((_, members)) => members.push(check),
            None => groups.push((check.category, vec![check])),
        }
    }
    groups
}

fn status_glyph(status: CheckStatus) -> console::StyledObject<&'static str> {
    match status {
        CheckStatus::Success => style("✓").green(),
        CheckStatus::Warning => style("!").yellow(),
        CheckStatus::Error => style("✗").red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_snapshot;
    use crate::snapshot::PageSnapshot;

    fn check(category: Category, name: &str) -> CheckResult {
        CheckResult {
            category,
            name: name.to_string(),
            status: CheckStatus::Success,
            message: "ok".to_string(),
        }
    }

    #[test]
    fn test_group_by_category_preserves_first_seen_order() {
        let checks = vec![
            check(Category::BasicSeo, "a"),
            check(Category::Content, "b"),
            check(Category::BasicSeo, "c"),
            check(Category::Technical, "d"),
            check(Category::Content, "e"),
        ];
        let groups = group_by_category(&checks);
        let order: Vec<Category> = groups.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            order,
            vec![Category::BasicSeo, Category::Content, Category::Technical]
        );
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn test_format_console_report_contains_score_and_categories() {
        let report = audit_snapshot(&PageSnapshot::parse(
            "<title>A reasonably sized title for a portfolio page</title><h1>x</h1>",
        ));
        let rendered = format_console_report(&report).expect("report should format");
        assert!(rendered.contains("SEO Score"));
        assert!(rendered.contains(&format!("{}/100", report.score)));
        assert!(rendered.contains("Basic SEO"));
        assert!(rendered.contains("Recommendations"));
    }

    #[test]
    fn test_format_console_report_perfect_score_congratulates() {
        let checks: Vec<CheckResult> = (0..10)
            .map(|i| check(Category::Technical, &format!("c{}", i)))
            .collect();
        let report = AuditReport::from_checks(checks);
        let rendered = format_console_report(&report).expect("report should format");
        assert!(rendered.contains("No specific recommendations"));
    }

    #[test]
    fn test_format_site_console_report_lists_pages_and_average() {
        use crate::site::{PageAudit, PageFailure, SiteReport};

        let report = SiteReport {
            pages: vec![PageAudit {
                path: "index.html".to_string(),
                report: audit_snapshot(&PageSnapshot::parse("<title>t</title>")),
            }],
            failures: vec![PageFailure {
                path: "broken.html".to_string(),
                error: "Page not found: broken.html".to_string(),
            }],
            average_score: 45,
        };
        let rendered = format_site_console_report(&report).expect("site report should format");
        assert!(rendered.contains("index.html"));
        assert!(rendered.contains("broken.html"));
        assert!(rendered.contains("Average score"));
        assert!(rendered.contains("45/100"));
    }

    #[test]
    fn test_format_site_console_report_truncates_long_non_ascii_paths() {
        use crate::site::{PageAudit, SiteReport};

        let report = SiteReport {
            pages: vec![PageAudit {
                path: format!("{}/index.html", "über-käufe-".repeat(10)),
                report: audit_snapshot(&PageSnapshot::parse("<title>t</title>")),
            }],
            failures: vec![],
            average_score: 40,
        };
        let rendered = format_site_console_report(&report).expect("site report should format");
        assert!(rendered.contains("..."));
    }

    #[test]
    fn test_format_json_report_round_trips() {
        let report = audit_snapshot(&PageSnapshot::default());
        let json = format_json_report(&report).expect("report should serialize");
        let parsed: AuditReport = serde_json::from_str(&json).expect("report should deserialize");
        assert_eq!(parsed, report);
    }
}
