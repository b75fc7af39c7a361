use imeta_core::types::{ParameterKind, Signature};

/// Whether every call valid under `reference` stays valid under `candidate`.
///
/// Reference parameters are matched in order against the candidate's. A
/// reference `*args` may be preceded in the candidate by any number of extra
/// positional-or-keyword parameters, and a reference `**kwargs` by extra
/// keyword-only ones. Matched parameters must agree on name, kind, default
/// text and annotation. Candidate parameters left over at the end must not
/// be required positionals.
pub fn compatible(candidate: &Signature, reference: &Signature) -> bool {
    let mut params = candidate.parameters().iter();

    for bp in reference.parameters() {
        let Some(mut cp) = params.next() else {
            return false;
        };

        if bp.kind == ParameterKind::VarPositional {
            while cp.kind == ParameterKind::PositionalOrKeyword {
                match params.next() {
                    Some(next) => cp = next,
                    None => return false,
                }
            }
        }

        if bp.kind == ParameterKind::VarKeyword {
            while cp.kind != ParameterKind::VarKeyword {
                match params.next() {
                    Some(next) => cp = next,
                    None => return false,
                }
            }
        }

        if !cp.matches(bp) {
            return false;
        }
    }

    params.all(|p| !(p.kind.is_positional() && !p.has_default()))
}

#[cfg(test)]
#[path = "conformance_tests.rs"]
mod tests;
