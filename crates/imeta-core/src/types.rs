use serde::{Deserialize, Serialize};

/// How a parameter binds arguments at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::PositionalOnly => "positional_only",
            ParameterKind::PositionalOrKeyword => "positional_or_keyword",
            ParameterKind::VarPositional => "var_positional",
            ParameterKind::KeywordOnly => "keyword_only",
            ParameterKind::VarKeyword => "var_keyword",
        }
    }

    /// Whether the kind can be bound by position.
    pub fn is_positional(&self) -> bool {
        matches!(
            self,
            ParameterKind::PositionalOnly | ParameterKind::PositionalOrKeyword
        )
    }

    /// Whether the kind collects a variable number of arguments.
    pub fn is_variadic(&self) -> bool {
        matches!(self, ParameterKind::VarPositional | ParameterKind::VarKeyword)
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared parameter.
///
/// Defaults are kept as their literal source text and compared textually,
/// so `None` and `None` match while `None` and `null` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            annotation: None,
        }
    }

    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOnly)
    }

    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOrKeyword)
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarPositional)
    }

    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::KeywordOnly)
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarKeyword)
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Exact structural match: name, kind, default and annotation.
    pub fn matches(&self, other: &Parameter) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.default == other.default
            && self.annotation == other.annotation
    }
}

/// An ordered parameter list plus an optional return annotation.
///
/// Construct through [`Signature::new`] (or parse with `str::parse`) so the
/// calling-convention ordering invariant holds:
/// `PositionalOnly* PositionalOrKeyword* VarPositional? KeywordOnly* VarKeyword?`.
///
/// Serializes as its rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) returns: Option<String>,
}

/// Errors raised while building or parsing a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid signature syntax in `{input}`: {reason}")]
    Syntax { input: String, reason: String },

    #[error("Parameter `{name}` ({kind}) cannot follow a {previous} parameter")]
    Ordering {
        name: String,
        kind: ParameterKind,
        previous: ParameterKind,
    },

    #[error("Duplicate parameter name `{0}`")]
    DuplicateParameter(String),

    #[error("Required parameter `{0}` follows a parameter with a default value")]
    RequiredAfterDefault(String),

    #[error("Variadic parameter `{0}` cannot have a default value")]
    VariadicDefault(String),
}
