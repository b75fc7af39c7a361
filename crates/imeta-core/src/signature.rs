//! Construction, parsing and rendering of [`Signature`]s.
//!
//! The textual form follows the familiar Python layout:
//! `(a, b: int = 3, /, c, *args, d=None, **kwargs) -> str`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Parameter, ParameterKind, Signature, SignatureError};

impl Signature {
    /// Build a signature, validating calling-convention ordering.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, SignatureError> {
        validate(&parameters)?;
        Ok(Self {
            parameters,
            returns: None,
        })
    }

    /// Signature with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn returns(&self) -> Option<&str> {
        self.returns.as_deref()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

fn validate(parameters: &[Parameter]) -> Result<(), SignatureError> {
    let mut previous: Option<ParameterKind> = None;
    let mut seen_default = false;

    for (i, param) in parameters.iter().enumerate() {
        if parameters[..i].iter().any(|p| p.name == param.name) {
            return Err(SignatureError::DuplicateParameter(param.name.clone()));
        }
        if param.kind.is_variadic() && param.has_default() {
            return Err(SignatureError::VariadicDefault(param.name.clone()));
        }
        if let Some(prev) = previous {
            // Only one of each variadic kind, and kinds never go backwards.
            let repeated_variadic = param.kind.is_variadic() && param.kind == prev;
            if param.kind < prev || repeated_variadic || prev == ParameterKind::VarKeyword {
                return Err(SignatureError::Ordering {
                    name: param.name.clone(),
                    kind: param.kind,
                    previous: prev,
                });
            }
        }
        if param.kind.is_positional() {
            if param.has_default() {
                seen_default = true;
            } else if seen_default {
                return Err(SignatureError::RequiredAfterDefault(param.name.clone()));
            }
        }
        previous = Some(param.kind);
    }
    Ok(())
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.parameters.len() + 2);
        let mut pending_slash = false;
        let mut star_emitted = false;

        for param in &self.parameters {
            if param.kind == ParameterKind::PositionalOnly {
                pending_slash = true;
            } else if pending_slash {
                parts.push("/".to_string());
                pending_slash = false;
            }

            match param.kind {
                ParameterKind::VarPositional => star_emitted = true,
                ParameterKind::KeywordOnly if !star_emitted => {
                    parts.push("*".to_string());
                    star_emitted = true;
                }
                _ => {}
            }

            parts.push(render_parameter(param));
        }
        if pending_slash {
            parts.push("/".to_string());
        }

        write!(f, "({})", parts.join(", "))?;
        if let Some(returns) = &self.returns {
            write!(f, " -> {}", returns)?;
        }
        Ok(())
    }
}

fn render_parameter(param: &Parameter) -> String {
    let prefix = match param.kind {
        ParameterKind::VarPositional => "*",
        ParameterKind::VarKeyword => "**",
        _ => "",
    };
    let mut out = format!("{}{}", prefix, param.name);
    if let Some(annotation) = &param.annotation {
        out.push_str(": ");
        out.push_str(annotation);
    }
    if let Some(default) = &param.default {
        if param.annotation.is_some() {
            out.push_str(" = ");
        } else {
            out.push('=');
        }
        out.push_str(default);
    }
    out
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let syntax = |reason: &str| SignatureError::Syntax {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let text = input.trim();
        if !text.starts_with('(') {
            return Err(syntax("expected `(`"));
        }
        let close = matching_paren(text).ok_or_else(|| syntax("unbalanced parentheses"))?;
        let inner = &text[1..close];
        let rest = text[close + 1..].trim();

        let returns = if rest.is_empty() {
            None
        } else if let Some(ann) = rest.strip_prefix("->") {
            let ann = ann.trim();
            if ann.is_empty() {
                return Err(syntax("missing return annotation after `->`"));
            }
            Some(ann.to_string())
        } else {
            return Err(syntax("unexpected text after parameter list"));
        };

        let mut parameters: Vec<Parameter> = Vec::new();
        let mut keyword_only = false;
        let mut slash_seen = false;
        // a bare `*` must be followed by at least one keyword-only parameter
        let mut bare_star = false;

        for raw in split_top_level(inner, ',') {
            let raw = raw.trim();
            if raw.is_empty() {
                if inner.trim().is_empty() {
                    break;
                }
                return Err(syntax("empty parameter"));
            }

            if raw == "/" {
                if slash_seen || keyword_only || parameters.is_empty() {
                    return Err(syntax("misplaced `/`"));
                }
                for p in &mut parameters {
                    p.kind = ParameterKind::PositionalOnly;
                }
                slash_seen = true;
                continue;
            }
            if raw == "*" {
                if keyword_only {
                    return Err(syntax("misplaced `*`"));
                }
                keyword_only = true;
                bare_star = true;
                continue;
            }

            let (kind, body) = if let Some(body) = raw.strip_prefix("**") {
                if bare_star {
                    return Err(syntax("named parameters must follow bare `*`"));
                }
                (ParameterKind::VarKeyword, body)
            } else if let Some(body) = raw.strip_prefix('*') {
                if keyword_only {
                    return Err(syntax("`*args` after keyword-only marker"));
                }
                keyword_only = true;
                (ParameterKind::VarPositional, body)
            } else if keyword_only {
                bare_star = false;
                (ParameterKind::KeywordOnly, raw)
            } else {
                (ParameterKind::PositionalOrKeyword, raw)
            };

            parameters.push(parse_parameter(body, kind).map_err(|reason| syntax(&reason))?);
        }
        if bare_star {
            return Err(syntax("named parameters must follow bare `*`"));
        }

        let mut signature = Signature::new(parameters)?;
        signature.returns = returns;
        Ok(signature)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_parameter(body: &str, kind: ParameterKind) -> Result<Parameter, String> {
    let (head, default) = match find_top_level_assign(body) {
        Some(idx) => (&body[..idx], Some(body[idx + 1..].trim())),
        None => (body, None),
    };
    let (name, annotation) = match split_top_level(head, ':').as_slice() {
        [name] => (name.trim(), None),
        [name, annotation] => (name.trim(), Some(annotation.trim())),
        _ => return Err(format!("cannot parse parameter `{}`", body.trim())),
    };

    if !is_identifier(name) {
        return Err(format!("invalid parameter name `{}`", name));
    }
    if annotation.is_some_and(str::is_empty) {
        return Err(format!("empty annotation for `{}`", name));
    }
    if default.is_some_and(str::is_empty) {
        return Err(format!("empty default for `{}`", name));
    }

    let mut param = Parameter::new(name, kind);
    param.annotation = annotation.map(str::to_string);
    param.default = default.map(str::to_string);
    Ok(param)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Index of the `)` closing the `(` at position 0.
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return (c == ')').then_some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on `sep` where it is not nested in brackets or quotes.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// First top-level `=` that is an assignment rather than a comparison.
fn find_top_level_assign(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'\'' | b'"' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'=' if depth == 0 => {
                let prev = i.checked_sub(1).map(|j| bytes[j]);
                let next = bytes.get(i + 1).copied();
                let comparison = matches!(prev, Some(b'=' | b'!' | b'<' | b'>'))
                    || next == Some(b'=');
                if !comparison {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
