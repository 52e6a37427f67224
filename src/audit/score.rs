//! Score aggregation and qualitative bands

use serde::{Deserialize, Serialize};

use super::checklist::{CheckResult, CheckStatus};

/// Aggregate check results into an integer score in [0,100].
///
/// Each success contributes 100 points, each warning 50, each error 0; the
/// mean is rounded half-away-from-zero (62.5 rounds to 63). An empty check
/// list scores 0.
///
/// # Examples
///
/// ```
/// use seo_audit::audit::{checklist, score};
/// use seo_audit::snapshot::PageSnapshot;
///
/// let checks = checklist::run_all(&PageSnapshot::default());
/// let score = score::calculate(&checks);
/// assert!(score <= 100);
/// ```
pub fn calculate(checks: &[CheckResult]) -> u8 {
    if checks.is_empty() {
        return 0;
    }

    let successes = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Success)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();

    let raw = (successes as f64 * 100.0 + warnings as f64 * 50.0) / checks.len() as f64;
    raw.round() as u8
}

/// Qualitative band for a score, used to pick the summary line and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score >= 80
    Excellent,
    /// 60 <= score < 80
    Good,
    /// Score < 60
    Poor,
}

impl ScoreBand {
    /// Classify a score into its band.
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            _ => ScoreBand::Poor,
        }
    }

    /// Summary line shown next to the score.
    pub fn summary(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent SEO! Your website is well optimized.",
            ScoreBand::Good => "Good SEO with room for improvement.",
            ScoreBand::Poor => "SEO needs significant improvement.",
        }
    }
}
