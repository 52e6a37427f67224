//! Recommendation derivation
//!
//! Deterministic and order-preserving: every error check yields a
//! high-priority "Fix:" entry (in check order), then every warning yields a
//! medium-priority "Improve:" entry, then up to two score-threshold entries.

use serde::{Deserialize, Serialize};

use super::checklist::{Category, CheckResult, CheckStatus};

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Derived from an error check or a low overall score
    High,
    /// Derived from a warning check
    Medium,
}

/// Actionable recommendation derived from check results and the overall score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Urgency
    pub priority: Priority,
    /// What to do
    pub message: String,
    /// Category of the originating check, or General for score-level advice
    pub category: Category,
}

/// Threshold below which the general strategy recommendation is added.
pub const STRATEGY_THRESHOLD: u8 = 70;

/// Threshold below which the fundamentals recommendation is also added.
pub const FUNDAMENTALS_THRESHOLD: u8 = 50;

/// Derive the recommendation list for a check sequence and its score.
pub fn derive(checks: &[CheckResult], score: u8) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for check in checks.iter().filter(|c| c.status == CheckStatus::Error) {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: format!("Fix: {}", check.message),
            category: check.category,
        });
    }

    for check in checks.iter().filter(|c| c.status == CheckStatus::Warning) {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!("Improve: {}", check.message),
            category: check.category,
        });
    }

    if score < STRATEGY_THRESHOLD {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: "Consider implementing a comprehensive SEO strategy".to_string(),
            category: Category::General,
        });
    }

    if score < FUNDAMENTALS_THRESHOLD {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: "Focus on basic SEO fundamentals: title, meta description, and content structure"
                .to_string(),
            category: Category::General,
        });
    }

    recommendations
}
