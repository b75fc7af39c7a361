//! Rendering of nested documentation fragments.

use imeta_core::text::{dedent, indent};

const BODY_INDENT: &str = "    ";

/// A documentation fragment: plain text, or a header over an indented body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Text(String),
    Section { header: String, body: Vec<DocNode> },
}

impl DocNode {
    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text(text.into())
    }

    pub fn section(header: impl Into<String>, body: Vec<DocNode>) -> Self {
        DocNode::Section {
            header: header.into(),
            body,
        }
    }
}

impl From<&str> for DocNode {
    fn from(text: &str) -> Self {
        DocNode::Text(text.to_string())
    }
}

impl From<String> for DocNode {
    fn from(text: String) -> Self {
        DocNode::Text(text)
    }
}

/// Absent documentation joins like empty text.
impl From<Option<String>> for DocNode {
    fn from(text: Option<String>) -> Self {
        DocNode::Text(text.unwrap_or_default())
    }
}

/// Render `nodes` as one docstring.
///
/// Texts are dedented and stripped of surrounding newlines. A section renders
/// its trimmed header followed by its joined body indented four spaces, and
/// is dropped when the body is empty. A section emitted before any other
/// piece is preceded by a blank separator. Pieces are separated by a blank
/// line.
pub fn join(nodes: &[DocNode]) -> String {
    let mut out: Vec<String> = Vec::new();
    for node in nodes {
        match node {
            DocNode::Text(text) => {
                let text = dedent(text);
                let text = text.trim_matches('\n');
                if !text.is_empty() {
                    out.push(text.to_string());
                }
            }
            DocNode::Section { header, body } => {
                let body = join(body);
                if body.is_empty() {
                    continue;
                }
                if out.is_empty() {
                    out.push("\n".to_string());
                }
                out.push(format!("{}\n{}", header.trim(), indent(&body, BODY_INDENT)));
            }
        }
    }
    out.join("\n\n")
}
