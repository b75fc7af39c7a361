//! Override and quirk-documentation tags.
//!
//! Tags live in the attribute table of a member's underlying callable, so a
//! tag applied to a property, class method or static method is visible
//! through any wrapper around the same callable.

use imeta_core::member::{attrs, AttrValue, Member, MemberKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Cannot tag a {kind} member: it has no underlying callable")]
    Untaggable { kind: MemberKind },
}

fn untaggable(member: &Member) -> LedgerError {
    LedgerError::Untaggable {
        kind: member.kind(),
    }
}

/// Declare `member` an intentional override. A forced override also skips
/// signature checking and documentation quirk collection.
pub fn mark_override(member: &mut Member, force: bool) -> Result<(), LedgerError> {
    let err = untaggable(member);
    let callable = member.callable_mut().ok_or(err)?;
    callable.set_attr(attrs::OVERRIDE, true);
    callable.set_attr(attrs::OVERRIDE_FORCE, force);
    Ok(())
}

/// Redirect quirk documentation to the member `method` of the same class,
/// and choose whether quirks are collected across all ancestor levels.
pub fn quirk_docs(
    member: &mut Member,
    method: Option<&str>,
    include_mro: bool,
) -> Result<(), LedgerError> {
    let err = untaggable(member);
    let callable = member.callable_mut().ok_or(err)?;
    callable.set_attr(attrs::QUIRKS_METHOD, method);
    callable.set_attr(attrs::QUIRKS_MRO, include_mro);
    Ok(())
}

pub fn has_explicit_override(member: &Member) -> bool {
    member.attr(attrs::OVERRIDE).is_some_and(AttrValue::is_truthy)
}

pub fn has_forced_override(member: &Member) -> bool {
    member
        .attr(attrs::OVERRIDE_FORCE)
        .is_some_and(AttrValue::is_truthy)
}

/// Whether the member was tagged for quirk documentation at all, even
/// without a redirect target.
pub fn has_quirk_docs_method(member: &Member) -> bool {
    member.has_attr(attrs::QUIRKS_METHOD)
}

pub fn quirk_docs_method(member: &Member) -> Option<&str> {
    member.attr(attrs::QUIRKS_METHOD).and_then(AttrValue::as_text)
}

pub fn set_quirk_docs_method(member: &mut Member, method: Option<&str>) -> bool {
    member.set_attr(attrs::QUIRKS_METHOD, method)
}

pub fn has_quirk_docs_mro(member: &Member) -> bool {
    member.has_attr(attrs::QUIRKS_MRO)
}

/// Whether quirks are collected from every ancestor level. Defaults to `true`.
pub fn quirk_docs_mro(member: &Member) -> bool {
    member
        .attr(attrs::QUIRKS_MRO)
        .and_then(AttrValue::as_bool)
        .unwrap_or(true)
}

pub fn set_quirk_docs_mro(member: &mut Member, include_mro: bool) -> bool {
    member.set_attr(attrs::QUIRKS_MRO, include_mro)
}

/// Builder-style tagging for member declarations.
///
/// Tagging a member without an underlying callable is logged and ignored;
/// use the free functions to handle that case as an error.
pub trait OverrideExt: Sized {
    fn overriding(self) -> Self;
    fn force_override(self) -> Self;
    fn with_quirk_docs(self, method: Option<&str>, include_mro: bool) -> Self;
}

impl OverrideExt for Member {
    fn overriding(mut self) -> Self {
        if let Err(e) = mark_override(&mut self, false) {
            tracing::debug!(error = %e, "ignoring override tag");
        }
        self
    }

    fn force_override(mut self) -> Self {
        if let Err(e) = mark_override(&mut self, true) {
            tracing::debug!(error = %e, "ignoring forced override tag");
        }
        self
    }

    fn with_quirk_docs(mut self, method: Option<&str>, include_mro: bool) -> Self {
        if let Err(e) = quirk_docs(&mut self, method, include_mro) {
            tracing::debug!(error = %e, "ignoring quirk docs tag");
        }
        self
    }
}
