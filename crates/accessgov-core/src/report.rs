//! # Drift Summary
//!
//! Aggregation for the report stage: fold a batch of logged findings
//! into per-issue and per-system counts for human consumption.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{DriftIssue, LoggedFinding};

/// Aggregate view over one logged findings batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftSummary {
    /// Total findings in the batch.
    pub total_findings: u64,
    /// Findings whose system had no governing policy.
    pub unknown_system: u64,
    /// Findings whose role was outside the system's allow-list.
    pub unexpected_role: u64,
    /// Finding count per system, ordered by system name.
    pub by_system: BTreeMap<String, u64>,
    /// Distinct users with at least one finding.
    pub unique_users: u64,
    /// The batch capture timestamp (all findings share it), if any
    /// findings exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Fold logged findings into a [`DriftSummary`].
///
/// An issue string that parses as neither canonical issue kind counts
/// toward the totals but toward neither per-issue bucket; the log is
/// external input and is not trusted to be well-formed.
pub fn summarize(findings: &[LoggedFinding]) -> DriftSummary {
    let mut summary = DriftSummary {
        total_findings: findings.len() as u64,
        timestamp: findings.first().map(|f| f.timestamp.clone()),
        ..Default::default()
    };

    let mut users = BTreeSet::new();
    for finding in findings {
        users.insert(finding.user.as_str());
        *summary.by_system.entry(finding.system.clone()).or_insert(0) += 1;
        match DriftIssue::parse(&finding.issue) {
            Some(DriftIssue::UnknownSystem) => summary.unknown_system += 1,
            Some(DriftIssue::UnexpectedRole(_)) => summary.unexpected_role += 1,
            None => {}
        }
    }
    summary.unique_users = users.len() as u64;

    summary
}

impl std::fmt::Display for DriftSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Drift report summary")?;
        if let Some(ts) = &self.timestamp {
            writeln!(f, "  captured at:     {ts}")?;
        }
        writeln!(f, "  total findings:  {}", self.total_findings)?;
        writeln!(f, "  unknown system:  {}", self.unknown_system)?;
        writeln!(f, "  unexpected role: {}", self.unexpected_role)?;
        writeln!(f, "  users affected:  {}", self.unique_users)?;
        if !self.by_system.is_empty() {
            writeln!(f, "  by system:")?;
            for (system, count) in &self.by_system {
                writeln!(f, "    {system:<12} {count}")?;
            }
        }
        Ok(())
    }
}
