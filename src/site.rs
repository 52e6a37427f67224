//! Whole-site audits
//!
//! Walks a directory tree, audits every `.html` page, and aggregates the
//! per-page scores into a site-level report. Pages that cannot be read are
//! reported as per-page failures rather than aborting the run.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::audit::{audit_snapshot, AuditReport};
use crate::error::SeoAuditError;
use crate::snapshot::PageSnapshot;

/// Audits every HTML page under a root directory
pub struct SiteAuditor {
    root: PathBuf,
}

/// Audit result for a single page of a site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAudit {
    /// Page path relative to the site root
    pub path: String,
    /// The page's audit report
    pub report: AuditReport,
}

/// A page that could not be audited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    /// Page path relative to the site root
    pub path: String,
    /// Why the page could not be audited
    pub error: String,
}

/// Aggregated results for a site audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteReport {
    /// Per-page audits, sorted by path
    pub pages: Vec<PageAudit>,
    /// Pages that could not be read
    pub failures: Vec<PageFailure>,
    /// Mean of the page scores, rounded (0 when no page succeeded)
    pub average_score: u8,
}

impl SiteAuditor {
    /// Create an auditor for the given site root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        SiteAuditor {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Audit every `.html` page under the root, in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`SeoAuditError::NoPagesFound`] when the walk finds no HTML
    /// files at all. Unreadable individual pages are recorded in
    /// [`SiteReport::failures`], not raised.
    pub fn audit(&self) -> Result<SiteReport, SeoAuditError> {
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case("html"))
                        .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        if paths.is_empty() {
            return Err(SeoAuditError::NoPagesFound {
                dir: self.root.clone(),
            });
        }

        // Deterministic page order regardless of walk order
        paths.sort();
        debug!("auditing {} pages under {}", paths.len(), self.root.display());

        let outcomes: Vec<Result<PageAudit, PageFailure>> = paths
            .par_iter()
            .map(|path| self.audit_page(path))
            .collect();

        let mut pages = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(page) => pages.push(page),
                Err(failure) => failures.push(failure),
            }
        }

        let average_score = average_score(&pages);
        Ok(SiteReport {
            pages,
            failures,
            average_score,
        })
    }

    fn audit_page(&self, path: &Path) -> Result<PageAudit, PageFailure> {
        let rel_path = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        match PageSnapshot::from_file(path) {
            Ok(snapshot) => Ok(PageAudit {
                path: rel_path,
                report: audit_snapshot(&snapshot),
            }),
            Err(err) => Err(PageFailure {
                path: rel_path,
                error: err.to_string(),
            }),
        }
    }
}

fn average_score(pages: &[PageAudit]) -> u8 {
    if pages.is_empty() {
        return 0;
    }
    let total: u32 = pages.iter().map(|p| u32::from(p.report.score)).sum();
    (total as f64 / pages.len() as f64).round() as u8
}
