//! # accessgov-store — Filesystem Artifact Layer
//!
//! Every pipeline stage is an independent invocation that reads and
//! writes files under one data directory; this crate is the contract for
//! those files. It anchors the four artifact paths, reads and writes
//! their CSV/JSON encodings, ships the deterministic demo fixtures, and
//! owns the error taxonomy — most importantly the one deliberately
//! handled kind, "required input artifact missing", checked before any
//! contents are touched.
//!
//! ## Artifacts
//!
//! - `rbac_policy.csv` — declared policy table (generate → audit).
//! - `observed_access.json` — observed access state (generate → audit).
//! - `drift_report.csv` — findings report (audit → log).
//! - `drift_log.json` — timestamped log (log → report).
//!
//! There is no locking: under normal operation there is never more than
//! one writer active at a time, and running two pipelines against one
//! data directory is unsupported.

pub mod artifacts;
pub mod csv;
pub mod error;
pub mod fixtures;

use std::path::{Path, PathBuf};

// Re-export primary operations.
pub use artifacts::{
    load_findings, load_log, load_observed, load_policy, write_findings, write_log,
    write_observed, write_policy,
};
pub use error::{StoreError, StoreResult};
pub use fixtures::{demo_observed, demo_policy, write_demo_fixtures};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Anchor for the pipeline's artifact paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Anchor artifacts under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The conventional `data/` directory relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }

    /// The directory all artifacts live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Declared policy table artifact.
    pub fn policy_path(&self) -> PathBuf {
        self.root.join("rbac_policy.csv")
    }

    /// Observed access dataset artifact.
    pub fn observed_path(&self) -> PathBuf {
        self.root.join("observed_access.json")
    }

    /// Findings report artifact.
    pub fn findings_path(&self) -> PathBuf {
        self.root.join("drift_report.csv")
    }

    /// Timestamped drift log artifact.
    pub fn log_path(&self) -> PathBuf {
        self.root.join("drift_log.json")
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_exists(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::default_location()
    }
}
