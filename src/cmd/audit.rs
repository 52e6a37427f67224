//! Audit command implementation
//!
//! Resolves the target string (HTML file, `http(s)://` URL, or a built-in
//! shortcut), runs the appropriate analysis path, and renders the report.
//! A spinner is shown while analysis is in flight and cleared unconditionally,
//! success or failure.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::audit::{self, external};
use crate::error::SeoAuditError;
use crate::fmt::{GLOBE, MICROSCOPE, WARNING};
use crate::report;
use crate::snapshot::PageSnapshot;

/// Default page audited when no target is given.
pub const DEFAULT_TARGET: &str = "index.html";

/// Resolved audit target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Local HTML file, analyzed for real
    Local(PathBuf),
    /// External URL, handled by the simulated stub path
    External(String),
}

/// Resolve a target string into a local path or an external URL.
///
/// The shortcut literals `current` and `home` both resolve to
/// `./index.html`; the browser distinction between "this page" and "site
/// home" has no CLI counterpart.
///
/// # Errors
///
/// Returns [`SeoAuditError::InvalidTarget`] for non-http(s) URL schemes.
///
/// # Examples
///
/// ```
/// use seo_audit::cmd::{resolve_target, Target};
/// use std::path::PathBuf;
///
/// assert_eq!(
///     resolve_target("current").unwrap(),
///     Target::Local(PathBuf::from("index.html"))
/// );
/// assert!(matches!(
///     resolve_target("https://example.com").unwrap(),
///     Target::External(_)
/// ));
/// ```
pub fn resolve_target(target: &str) -> Result<Target, SeoAuditError> {
    let lower = target.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Target::External(target.to_string()))
    } else if target.contains("://") {
        Err(SeoAuditError::InvalidTarget {
            target: target.to_string(),
        })
    } else if target == "current" || target == "home" {
        Ok(Target::Local(PathBuf::from(DEFAULT_TARGET)))
    } else {
        Ok(Target::Local(PathBuf::from(target)))
    }
}

/// Main audit command dispatcher
pub fn cmd_audit(target: &str, json: bool) -> Result<()> {
    match resolve_target(target)? {
        Target::Local(path) => audit_local(&path, json),
        Target::External(url) => audit_external(&url, json),
    }
}

/// Audit a local HTML page
fn audit_local(path: &std::path::Path, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} {} Page Audit",
            MICROSCOPE,
            style("seo-audit").bold()
        );
        println!("   Page: {}", path.display());
    }

    let spinner = analysis_spinner(json, "Analyzing page...");
    let snapshot = PageSnapshot::from_file(path);
    // Cleared whether analysis succeeded or not
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let page_report = audit::audit_snapshot(&snapshot);
    if json {
        println!("{}", report::format_json_report(&page_report)?);
    } else {
        print!("{}", report::format_console_report(&page_report)?);
    }

    Ok(())
}

/// Simulated analysis for an external URL (stub path, no remote fetching)
fn audit_external(url: &str, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} {} External URL Audit",
            GLOBE,
            style("seo-audit").bold()
        );
        println!("   URL: {}", url);
        println!(
            "   {} {}",
            WARNING,
            style("Simulated analysis: no remote fetching is performed").yellow()
        );

        // The artificial delay only makes sense interactively
        let spinner = analysis_spinner(json, "Analyzing website...");
        std::thread::sleep(external::SIMULATED_DELAY);
        spinner.finish_and_clear();
    }

    let stub_report = external::audit(url);
    if json {
        println!("{}", report::format_json_report(&stub_report)?);
    } else {
        print!("{}", report::format_console_report(&stub_report)?);
    }

    Ok(())
}

/// Spinner shown during analysis; hidden in JSON mode so output stays
/// machine-parseable.
pub(crate) fn analysis_spinner(json: bool, message: &'static str) -> ProgressBar {
    if json {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("   {spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
