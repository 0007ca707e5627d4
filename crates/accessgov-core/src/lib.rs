//! # accessgov-core — Domain Model & Drift Classifier
//!
//! Pure domain layer for the access governor. Declares the policy table
//! and observed-access record types, the drift finding vocabulary, and
//! the classification rule that compares one observed record against the
//! declared allow-list for its system.
//!
//! ## Classification Rule
//!
//! For an observed `(user, system, role)` record:
//!
//! 1. Collect every `Expected Access` string the policy declares for
//!    `system` — that multiset is the system's allow-list.
//! 2. Empty allow-list → the system has no governing policy at all:
//!    `Unknown System`.
//! 3. Role not a member of the allow-list (exact, case-sensitive string
//!    equality) → `Unexpected Role: {role}`.
//! 4. Otherwise the record is compliant and yields no finding.
//!
//! No I/O happens in this crate; artifact persistence lives in
//! `accessgov-store`.

pub mod classify;
pub mod model;
pub mod report;

// Re-export primary types.
pub use classify::{audit, classify};
pub use model::{DriftIssue, Finding, LoggedFinding, ObservedAccess, PolicyEntry, PolicyTable};
pub use report::{summarize, DriftSummary};
