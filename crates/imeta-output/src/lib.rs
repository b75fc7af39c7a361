//! Output formatters for imeta command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Plain text for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use imeta_enforce::types::{CheckResult, CompatResult, DocsResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_docs(&self, result: &DocsResult) -> String;
    fn format_compat(&self, result: &CompatResult) -> String;
}
