use serde::{Deserialize, Serialize};

pub const SEVERITY_ERROR: &str = "ERROR";
pub const SEVERITY_WARNING: &str = "WARNING";

/// The conformance violations imeta reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A member shadows an ancestor member without an override tag.
    UndeclaredOverride,
    /// A member tagged as an override matches no ancestor member.
    OverrideOfNothing,
    /// An override cannot be called the way the ancestor member can.
    IncompatibleSignature,
    /// A method replaces an ancestor property or attribute.
    MemberTypeChanged,
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::UndeclaredOverride => "E001",
            ViolationKind::OverrideOfNothing => "E002",
            ViolationKind::IncompatibleSignature => "E003",
            ViolationKind::MemberTypeChanged => "E004",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            ViolationKind::UndeclaredOverride => "undeclared_override",
            ViolationKind::OverrideOfNothing => "override_of_nothing",
            ViolationKind::IncompatibleSignature => "incompatible_signature",
            ViolationKind::MemberTypeChanged => "member_type_changed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            ViolationKind::UndeclaredOverride,
            ViolationKind::OverrideOfNothing,
            ViolationKind::IncompatibleSignature,
            ViolationKind::MemberTypeChanged,
        ]
        .into_iter()
        .find(|k| k.code() == code)
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub severity: String, // "ERROR" | "WARNING"
    pub category: String,
    pub message: String,
    pub class: String,
    pub member: String,
    /// The ancestor whose member was shadowed, when there is one.
    pub base: Option<String>,
    pub hash: String,
    pub fix_hint: Option<String>,
}

impl Violation {
    pub fn new(kind: ViolationKind, class: &str, member: &str, message: String) -> Self {
        Self {
            code: kind.code().to_string(),
            severity: SEVERITY_WARNING.to_string(),
            category: kind.category().to_string(),
            message,
            class: class.to_string(),
            member: member.to_string(),
            base: None,
            hash: String::new(),
            fix_hint: None,
        }
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    pub fn with_hash(mut self, hash: String) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_fix_hint(mut self, hint: String) -> Self {
        self.fix_hint = Some(hint);
        self
    }

    pub fn kind(&self) -> Option<ViolationKind> {
        ViolationKind::from_code(&self.code)
    }

    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub sources: Vec<String>,
    pub classes_checked: Vec<String>,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatResult {
    pub version: String,
    pub command: String,
    pub candidate: String,
    pub reference: String,
    pub compatible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsResult {
    pub version: String,
    pub command: String,
    pub classes: Vec<ClassDocs>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDocs {
    pub name: String,
    pub interface_root: String,
    pub mro: Vec<String>,
    pub doc: Option<String>,
    pub members: Vec<MemberDocs>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDocs {
    pub name: String,
    pub kind: String,
    /// Class the member resolves to.
    pub defined_in: String,
    pub signature: Option<String>,
    pub doc: Option<String>,
    pub doc_orig: Option<String>,
}
