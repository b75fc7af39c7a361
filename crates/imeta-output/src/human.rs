use crate::human_helpers::{format_violation_human, indent_block};
use crate::OutputFormatter;
use imeta_enforce::types::{CheckResult, CompatResult, DocsResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for v in &result.errors {
            out.push_str(&format_violation_human(v));
        }
        for v in &result.warnings {
            out.push_str(&format_violation_human(v));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} class(es)\n",
            result.errors.len(),
            result.warnings.len(),
            result.classes_checked.len(),
        ));

        out
    }

    fn format_docs(&self, result: &DocsResult) -> String {
        let mut sections = Vec::new();

        for class in &result.classes {
            let mut out = format!(
                "{}  [root: {}, mro: {}]\n",
                class.name,
                class.interface_root,
                class.mro.join(" -> "),
            );
            if let Some(doc) = &class.doc {
                out.push_str(&indent_block(doc, 4));
                out.push('\n');
            }

            for m in &class.members {
                out.push('\n');
                out.push_str(&format!(
                    "{}.{}{}  [{}, from {}]\n",
                    class.name,
                    m.name,
                    m.signature.as_deref().unwrap_or(""),
                    m.kind,
                    m.defined_in,
                ));
                if let Some(doc) = &m.doc {
                    out.push_str(&indent_block(doc, 4));
                    out.push('\n');
                }
            }
            sections.push(out);
        }

        sections.join("\n")
    }

    fn format_compat(&self, result: &CompatResult) -> String {
        if result.compatible {
            format!(
                "compatible: `{}` conforms to `{}`\n",
                result.candidate, result.reference
            )
        } else {
            format!(
                "incompatible: `{}` does not conform to `{}`\n",
                result.candidate, result.reference
            )
        }
    }
}
