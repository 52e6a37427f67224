#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! seo-audit library
//!
//! This library provides the core functionality for heuristic SEO analysis of
//! static HTML. It can be used programmatically in addition to the CLI
//! interface.
//!
//! # Basic Example
//!
//! Auditing an HTML string:
//!
//! ```
//! use seo_audit::audit::audit_snapshot;
//! use seo_audit::snapshot::PageSnapshot;
//!
//! let html = r#"
//!     <title>A portfolio of software projects and experiments</title>
//!     <meta name="viewport" content="width=device-width, initial-scale=1">
//!     <h1>Projects</h1>
//!     <img src="shot.png" alt="Screenshot of the dashboard">
//! "#;
//!
//! let snapshot = PageSnapshot::parse(html);
//! let report = audit_snapshot(&snapshot);
//!
//! assert_eq!(report.checks.len(), 10);
//! assert!(report.score <= 100);
//! ```
//!
//! # Advanced Example: Deterministic Scoring
//!
//! The page-speed check reads the snapshot's elapsed load time, so a fixed
//! elapsed time and fixed markup yield an exactly reproducible score:
//!
//! ```
//! use seo_audit::audit::audit_snapshot;
//! use seo_audit::snapshot::PageSnapshot;
//!
//! let snapshot = PageSnapshot::parse("<title>t</title>").with_elapsed_ms(500);
//! let first = audit_snapshot(&snapshot);
//! let second = audit_snapshot(&snapshot);
//! assert_eq!(first.score, second.score);
//! ```
//!
//! # Advanced Example: Recommendations
//!
//! Error checks surface as high-priority "Fix:" entries ahead of the
//! medium-priority "Improve:" entries derived from warnings:
//!
//! ```
//! use seo_audit::audit::{audit_snapshot, Priority};
//! use seo_audit::snapshot::PageSnapshot;
//!
//! // No title at all: the title check errors
//! let report = audit_snapshot(&PageSnapshot::default());
//! let first = report.recommendations.first().expect("low score yields advice");
//! assert_eq!(first.priority, Priority::High);
//! assert!(first.message.starts_with("Fix:"));
//! ```

/// Checklist evaluation, scoring, and recommendations
pub mod audit;
/// Command handlers for CLI operations
pub mod cmd;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Report rendering for console and JSON
pub mod report;
/// Whole-site audits
pub mod site;
/// Page snapshot extraction from raw HTML
pub mod snapshot;
