//! Command handlers for the seo-audit CLI
//!
//! Each submodule handles a specific CLI command.

pub mod audit;
pub mod completions;
pub mod site;

// Re-export command functions for convenient access
pub use audit::{cmd_audit, resolve_target, Target};
pub use completions::cmd_completions;
pub use site::cmd_site;
