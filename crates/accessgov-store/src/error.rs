//! # Store Error Taxonomy
//!
//! One deliberately handled error kind — a required input artifact is
//! missing, checked by existence test before processing — plus
//! propagation wrappers that carry the offending path. Malformed
//! contents are surfaced, never repaired.

use std::path::PathBuf;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the artifact store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required input artifact does not exist. The message names the
    /// missing precondition and the command that produces it.
    #[error("missing {artifact} at {}: run `accessgov {hint}` first", path.display())]
    Missing {
        /// Human name of the artifact ("policy table", "findings report", …).
        artifact: &'static str,
        /// Where the artifact was expected.
        path: PathBuf,
        /// Subcommand that produces the artifact.
        hint: &'static str,
    },

    /// Filesystem failure while reading or writing an artifact.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact exists but its JSON contents do not parse.
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact exists but its CSV contents do not parse.
    #[error("malformed CSV in {}: {message}", path.display())]
    Csv { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_names_artifact_and_hint() {
        let err = StoreError::Missing {
            artifact: "policy table",
            path: PathBuf::from("data/rbac_policy.csv"),
            hint: "generate",
        };
        let text = err.to_string();
        assert!(text.contains("policy table"));
        assert!(text.contains("data/rbac_policy.csv"));
        assert!(text.contains("`accessgov generate`"));
    }

    #[test]
    fn csv_message_carries_path() {
        let err = StoreError::Csv {
            path: PathBuf::from("data/drift_report.csv"),
            message: "expected 3 columns, found 2".into(),
        };
        assert!(err.to_string().contains("drift_report.csv"));
        assert!(err.to_string().contains("expected 3 columns"));
    }
}
