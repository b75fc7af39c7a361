use crate::types::{Violation, SEVERITY_ERROR, SEVERITY_WARNING};

/// A violation reported while `raise_on_violation` is in effect.
#[derive(Debug, thiserror::Error)]
pub enum ConformanceError {
    #[error("[{}] {}", .0.code, .0.message)]
    Violation(Box<Violation>),
}

impl ConformanceError {
    pub fn violation(&self) -> &Violation {
        match self {
            ConformanceError::Violation(v) => v,
        }
    }
}

/// Single exit point for every conformance violation.
///
/// In raise mode the violation becomes an error and class definition stops.
/// Otherwise it is logged as a warning and handed back so the caller can
/// collect it.
pub fn report_violation(
    mut violation: Violation,
    raise_on_violation: bool,
) -> Result<Violation, ConformanceError> {
    if raise_on_violation {
        violation.severity = SEVERITY_ERROR.to_string();
        return Err(ConformanceError::Violation(Box::new(violation)));
    }
    violation.severity = SEVERITY_WARNING.to_string();
    tracing::warn!(
        code = %violation.code,
        class = %violation.class,
        member = %violation.member,
        "{}",
        violation.message
    );
    Ok(violation)
}
