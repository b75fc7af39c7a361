//! Class-level conformance checks.
//!
//! Every member declared in a class body is compared against the member it
//! shadows in the nearest ancestor. All findings funnel through
//! [`report_violation`], so raise mode stops at the first one.

use imeta_core::class::Hierarchy;
use imeta_core::config::InterfaceConfig;
use imeta_core::hash::member_fingerprint;
use imeta_core::member::Member;

use crate::conformance::compatible;
use crate::ledger::{has_explicit_override, has_forced_override};
use crate::report::{report_violation, ConformanceError};
use crate::types::{Violation, ViolationKind};

/// Check every member declared by the hierarchy's class.
///
/// Returns the violations reported as warnings, or the first violation as an
/// error when the class resolved `raise_on_violation`.
pub fn check_class(hierarchy: &Hierarchy<'_>) -> Result<Vec<Violation>, ConformanceError> {
    let class = hierarchy.class();
    let config = &class.config;
    let mut violations = Vec::new();

    for name in &class.declared {
        let Some(member) = class.member(name) else {
            continue;
        };
        if config.skipped_names.contains(name) {
            continue;
        }
        match hierarchy.resolve_inherited(name) {
            Some((base, base_member)) => {
                violations.extend(verify_conformance(
                    name,
                    &class.name,
                    member,
                    &base.name,
                    base_member,
                    config,
                )?);
            }
            None if has_explicit_override(member) => {
                let v = Violation::new(
                    ViolationKind::OverrideOfNothing,
                    &class.name,
                    name,
                    format!(
                        "`{}.{}` is declared as an override but no ancestor defines `{}`.",
                        class.name, name, name
                    ),
                )
                .with_hash(fingerprint(&class.name, name, member))
                .with_fix_hint(format!(
                    "Remove the override tag from `{}.{}` or check the member name for typos",
                    class.name, name
                ));
                violations.push(report_violation(v, config.raise_on_violation)?);
            }
            None => {}
        }
    }

    Ok(violations)
}

/// Check one member against the ancestor member it shadows.
pub fn verify_conformance(
    key: &str,
    class_name: &str,
    member: &Member,
    base_name: &str,
    base_member: &Member,
    config: &InterfaceConfig,
) -> Result<Vec<Violation>, ConformanceError> {
    if !member.type_understood() || !base_member.type_understood() {
        tracing::debug!(
            "cannot check `{}.{}` against `{}.{}` ({} over {}), skipping",
            class_name,
            key,
            base_name,
            key,
            member.kind(),
            base_member.kind()
        );
        return Ok(Vec::new());
    }

    if has_forced_override(member) {
        return Ok(Vec::new());
    }

    let raise = config.raise_on_violation;
    let hash = fingerprint(class_name, key, member);
    let mut violations = Vec::new();

    let type_changed = member.is_functional()
        && !base_member.is_functional()
        && !has_explicit_override(member);
    if type_changed {
        let v = Violation::new(
            ViolationKind::MemberTypeChanged,
            class_name,
            key,
            format!(
                "`{}.{}` changes the type of `{}.{}` ({} instead of {}) without declaring an override.",
                class_name,
                key,
                base_name,
                key,
                member.kind(),
                base_member.kind()
            ),
        )
        .with_base(base_name)
        .with_hash(hash.clone())
        .with_fix_hint(format!(
            "Tag `{}.{}` as an override if replacing the {} is intentional",
            class_name,
            key,
            base_member.kind()
        ));
        violations.push(report_violation(v, raise)?);
    }

    let what = match member {
        Member::Property { .. } => "property",
        m if m.is_functional() => "method",
        _ => return Ok(violations),
    };

    if config.explicit_overrides && !type_changed && !has_explicit_override(member) {
        let v = Violation::new(
            ViolationKind::UndeclaredOverride,
            class_name,
            key,
            format!(
                "`{}.{}` overrides interface {} `{}.{}` without declaring an override.",
                class_name, key, what, base_name, key
            ),
        )
        .with_base(base_name)
        .with_hash(hash.clone())
        .with_fix_hint(format!(
            "Tag `{}.{}` as an override, or rename it if shadowing `{}.{}` is unintentional",
            class_name, key, base_name, key
        ));
        violations.push(report_violation(v, raise)?);
    }

    if member.is_functional() && base_member.is_functional() {
        if let Some(v) = verify_signature(key, class_name, member, base_name, base_member, raise)? {
            violations.push(v);
        }
    }

    Ok(violations)
}

/// Report `member` if it cannot be called the way `base_member` can.
pub fn verify_signature(
    key: &str,
    class_name: &str,
    member: &Member,
    base_name: &str,
    base_member: &Member,
    raise_on_violation: bool,
) -> Result<Option<Violation>, ConformanceError> {
    let (Some(sig), Some(base_sig)) = (member.signature(), base_member.signature()) else {
        return Ok(None);
    };
    if compatible(sig, base_sig) {
        return Ok(None);
    }

    let v = Violation::new(
        ViolationKind::IncompatibleSignature,
        class_name,
        key,
        format!(
            "Signature `{}.{}{}` does not conform to interface `{}.{}{}`.",
            class_name, key, sig, base_name, key, base_sig
        ),
    )
    .with_base(base_name)
    .with_hash(fingerprint(class_name, key, member))
    .with_fix_hint(format!(
        "Make `{}.{}` accept every call `{}.{}{}` accepts; added parameters must be optional",
        class_name, key, base_name, key, base_sig
    ));
    report_violation(v, raise_on_violation).map(Some)
}

fn fingerprint(class_name: &str, key: &str, member: &Member) -> String {
    let qualname = member
        .callable()
        .map(|c| c.qualname.clone())
        .unwrap_or_else(|| format!("{class_name}.{key}"));
    member_fingerprint(&qualname, member.signature())
}

#[cfg(test)]
#[path = "violations_tests.rs"]
mod tests;
