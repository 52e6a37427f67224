//! Error types with contextual suggestions
//!
//! Structured errors that carry actionable messages, suggested fixes, and
//! proper exit codes for scripting. Expected-absence conditions inside checks
//! are never errors; they become warning or error check results. These types
//! cover the other taxonomy: runtime failures while performing an audit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or auditing pages
#[derive(Error, Debug)]
pub enum SeoAuditError {
    /// Target HTML page could not be read
    #[error("Page not found: {path}")]
    PageNotFound {
        /// Path to the missing page
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Target string is neither a readable path, a URL, nor a shortcut
    #[error("Invalid audit target: '{target}'")]
    InvalidTarget {
        /// The unresolvable target string
        target: String,
    },

    /// Site directory contains no HTML pages
    #[error("No HTML pages found under {dir}")]
    NoPagesFound {
        /// Directory that was walked
        dir: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SeoAuditError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seo_audit::error::SeoAuditError;
    ///
    /// let error = SeoAuditError::InvalidTarget {
    ///     target: "???".to_string(),
    /// };
    /// assert!(error.suggestion().is_some());
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PageNotFound { path, .. } => Some(format!(
                "Ensure {} exists, or pass an http(s):// URL for a simulated analysis",
                path.display()
            )),
            Self::InvalidTarget { .. } => Some(
                "Pass an HTML file path, an http(s):// URL, or one of the shortcuts: current, home"
                    .to_string(),
            ),
            Self::NoPagesFound { .. } => {
                Some("Point 'seo-audit site' at a directory containing .html files".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PageNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidTarget { .. } => 64, // EX_USAGE
            Self::NoPagesFound { .. } => 66, // EX_NOINPUT
            Self::Io { .. } => 74,           // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and any suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to SeoAuditError for suggestions
        if let Some(audit_error) = error.downcast_ref::<SeoAuditError>() {
            if let Some(suggestion) = audit_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(audit_error) = error.downcast_ref::<SeoAuditError>() {
            audit_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
