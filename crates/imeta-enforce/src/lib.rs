//! Conformance enforcement for imeta interfaces.
//!
//! Checks each member a class declares against the ancestor member it
//! shadows and produces violations:
//! - E001: undeclared override (member shadows an ancestor without a tag)
//! - E002: override of nothing (tagged member has no ancestor counterpart)
//! - E003: incompatible signature (override rejects calls the ancestor accepts)
//! - E004: member type changed (method replaces an ancestor property or attribute)

pub mod types;
pub mod conformance;
pub mod ledger;
pub mod report;
pub mod violations;

pub use conformance::compatible;
pub use ledger::{mark_override, quirk_docs, LedgerError, OverrideExt};
pub use report::{report_violation, ConformanceError};
pub use types::{Violation, ViolationKind};
pub use violations::check_class;
