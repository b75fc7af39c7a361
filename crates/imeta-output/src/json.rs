use crate::OutputFormatter;
use imeta_enforce::types::{CheckResult, CompatResult, DocsResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_docs(&self, result: &DocsResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_compat(&self, result: &CompatResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
