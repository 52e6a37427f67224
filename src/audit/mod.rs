//! Checklist evaluation, scoring, and recommendation derivation
//!
//! The audit pipeline for a single page:
//! - [`checklist`] runs the fixed ten-check battery against a snapshot
//! - [`score`] aggregates statuses into an integer score in [0,100]
//! - [`recommend`] derives the prioritized recommendation list
//! - [`external`] is the labeled stub path for URLs the tool cannot inspect

pub mod checklist;
pub mod external;
pub mod recommend;
pub mod score;

// Public exports for common audit types
pub use checklist::{Category, CheckResult, CheckStatus};
pub use recommend::{Priority, Recommendation};
pub use score::ScoreBand;

use serde::{Deserialize, Serialize};

use crate::snapshot::PageSnapshot;

/// One analysis session: a score, the ordered check results, and the derived
/// recommendations.
///
/// Produced fresh by every audit call and discarded after rendering; nothing
/// persists across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Integer score in [0,100]
    pub score: u8,
    /// Check results in battery order
    pub checks: Vec<CheckResult>,
    /// Recommendations in derivation order
    pub recommendations: Vec<Recommendation>,
}

impl AuditReport {
    /// Build a report from check results, computing score and
    /// recommendations.
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let score = score::calculate(&checks);
        let recommendations = recommend::derive(&checks, score);
        AuditReport {
            score,
            checks,
            recommendations,
        }
    }

    /// Qualitative band for this report's score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// Audit a page snapshot: run the full battery and aggregate.
///
/// # Examples
///
/// ```
/// use seo_audit::audit::audit_snapshot;
/// use seo_audit::snapshot::PageSnapshot;
///
/// let html = r#"
///     <title>A portfolio of carefully built things</title>
///     <h1>Hello</h1>
/// "#;
/// let report = audit_snapshot(&PageSnapshot::parse(html));
/// assert_eq!(report.checks.len(), 10);
/// assert!(report.score <= 100);
/// ```
pub fn audit_snapshot(snapshot: &PageSnapshot) -> AuditReport {
    AuditReport::from_checks(checklist::run_all(snapshot))
}
