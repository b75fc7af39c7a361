use imeta_enforce::types::Violation;

pub(crate) fn format_violation_human(v: &Violation) -> String {
    let severity_label = match v.severity.as_str() {
        "ERROR" => "error",
        "WARNING" => "warning",
        _ => "note",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}.{}\n",
        severity_label, v.code, v.message, v.class, v.member,
    );

    if let Some(base) = &v.base {
        out.push_str(&format!("   = base: {}\n", base));
    }

    if !v.hash.is_empty() {
        out.push_str(&format!("   = hash: {}\n", v.hash));
    }

    if let Some(fix) = &v.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    out
}

/// Indent every non-empty line of `text` by `width` spaces.
pub(crate) fn indent_block(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
