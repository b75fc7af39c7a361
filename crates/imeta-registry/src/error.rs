use std::path::PathBuf;

use imeta_core::types::SignatureError;
use imeta_enforce::ledger::LedgerError;
use imeta_enforce::report::ConformanceError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Class `{0}` is already registered")]
    DuplicateClass(String),

    #[error("Class `{class}` derives from unregistered base `{base}`")]
    UnknownBase { class: String, base: String },

    #[error("Cannot create a consistent method resolution order for `{class}` (bases: {})", .bases.join(", "))]
    InconsistentMro { class: String, bases: Vec<String> },

    #[error(transparent)]
    Conformance(#[from] ConformanceError),

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid signature for `{class}.{member}`: {source}")]
    Signature {
        class: String,
        member: String,
        #[source]
        source: SignatureError,
    },

    #[error("Cannot tag `{class}.{member}`: {source}")]
    Ledger {
        class: String,
        member: String,
        #[source]
        source: LedgerError,
    },
}
