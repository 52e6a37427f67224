//! Site command implementation
//!
//! Audits every `.html` page under a directory and renders the aggregated
//! site report.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::audit::analysis_spinner;
use crate::fmt::MICROSCOPE;
use crate::report;
use crate::site::SiteAuditor;

/// Audit all HTML pages under `dir`
pub fn cmd_site(dir: &str, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} {} Site Audit",
            MICROSCOPE,
            style("seo-audit").bold()
        );
        println!("   Root: {}", Path::new(dir).display());
    }

    let spinner = analysis_spinner(json, "Auditing pages...");
    let outcome = SiteAuditor::new(dir).audit();
    // Cleared whether the walk succeeded or not
    spinner.finish_and_clear();
    let site_report = outcome?;

    if json {
        println!("{}", report::format_site_json_report(&site_report)?);
    } else {
        print!("{}", report::format_site_console_report(&site_report)?);
    }

    Ok(())
}
