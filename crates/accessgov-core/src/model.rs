//! # Policy & Observation Types
//!
//! The three record shapes the pipeline moves between stages, plus the
//! drift-issue vocabulary.
//!
//! - [`PolicyEntry`] / [`PolicyTable`]: the declared source of truth.
//! - [`ObservedAccess`]: one currently-granted `(user, system, role)`.
//! - [`Finding`] / [`DriftIssue`]: one detected deviation. Compliant
//!   records produce no finding — absence is compliance.
//! - [`LoggedFinding`]: a finding with the batch capture timestamp
//!   attached by the logging stage.

use serde::{Deserialize, Serialize};

/// One row of the declared access-policy table.
///
/// Several entries may share a `system`; the set of their
/// `expected_access` strings is that system's allow-list. The table is
/// immutable reference data within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    /// Target system the policy governs (e.g., "AWS").
    pub system: String,
    /// Organizational group the expectation applies to.
    pub group: String,
    /// The exact role string this group is expected to hold.
    pub expected_access: String,
}

impl PolicyEntry {
    /// Convenience constructor for fixtures and tests.
    pub fn new(
        system: impl Into<String>,
        group: impl Into<String>,
        expected_access: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            group: group.into(),
            expected_access: expected_access.into(),
        }
    }
}

/// The full declared policy table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    entries: Vec<PolicyEntry>,
}

impl PolicyTable {
    /// Build a table from entries, preserving their order.
    pub fn new(entries: Vec<PolicyEntry>) -> Self {
        Self { entries }
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Number of policy entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The allow-list for `system`: every `expected_access` string whose
    /// entry matches `system` exactly (case-sensitive).
    ///
    /// An empty result means the system has no governing policy. A system
    /// that appears nowhere in the table and one whose entries were all
    /// removed are indistinguishable here — both return an empty list.
    pub fn expected_for(&self, system: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.system == system)
            .map(|e| e.expected_access.as_str())
            .collect()
    }
}

impl FromIterator<PolicyEntry> for PolicyTable {
    fn from_iter<I: IntoIterator<Item = PolicyEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One currently-granted access as observed in the real world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedAccess {
    /// Principal holding the access.
    pub user: String,
    /// System the access was observed on.
    pub system: String,
    /// Role string as granted, in the granting system's own naming.
    pub role: String,
}

impl ObservedAccess {
    /// Convenience constructor for fixtures and tests.
    pub fn new(
        user: impl Into<String>,
        system: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            system: system.into(),
            role: role.into(),
        }
    }
}

/// Why an observed record deviates from the declared policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriftIssue {
    /// The observed system has no allow-list entries at all.
    UnknownSystem,
    /// The observed role is not a member of the system's allow-list.
    /// Carries the role string exactly as observed.
    UnexpectedRole(String),
}

impl DriftIssue {
    /// Parse the canonical rendering back into an issue.
    ///
    /// Accepts exactly what [`Display`](std::fmt::Display) produces;
    /// anything else returns `None`.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "Unknown System" {
            return Some(Self::UnknownSystem);
        }
        s.strip_prefix("Unexpected Role: ")
            .map(|role| Self::UnexpectedRole(role.to_string()))
    }
}

impl std::fmt::Display for DriftIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSystem => write!(f, "Unknown System"),
            Self::UnexpectedRole(role) => write!(f, "Unexpected Role: {role}"),
        }
    }
}

/// One detected deviation for a single observed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Principal whose observed access deviates.
    pub user: String,
    /// System the deviation was observed on.
    pub system: String,
    /// What kind of deviation.
    pub issue: DriftIssue,
}

impl Finding {
    /// Build a finding for the given observed record and issue.
    pub fn new(user: impl Into<String>, system: impl Into<String>, issue: DriftIssue) -> Self {
        Self {
            user: user.into(),
            system: system.into(),
            issue,
        }
    }
}

/// A finding as persisted by the logging stage: the issue in its
/// canonical string rendering plus the batch capture timestamp. Every
/// finding in one logging run shares the same timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedFinding {
    /// Principal whose observed access deviates.
    pub user: String,
    /// System the deviation was observed on.
    pub system: String,
    /// Canonical issue string ("Unknown System" / "Unexpected Role: …").
    pub issue: String,
    /// Wall-clock capture time of the logging run, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
}

impl LoggedFinding {
    /// Attach a batch timestamp to a finding.
    pub fn stamp(finding: &Finding, timestamp: impl Into<String>) -> Self {
        Self {
            user: finding.user.clone(),
            system: finding.system.clone(),
            issue: finding.issue.to_string(),
            timestamp: timestamp.into(),
        }
    }
}
