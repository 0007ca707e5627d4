//! # Artifact Readers & Writers
//!
//! Each pipeline stage communicates with the next strictly file-to-file
//! through the `data/` directory. This module owns those four artifacts:
//!
//! | artifact        | file                   | format |
//! |-----------------|------------------------|--------|
//! | policy table    | `rbac_policy.csv`      | CSV `System,Group,Expected Access` |
//! | observed access | `observed_access.json` | JSON array of `{user, system, role}` |
//! | findings report | `drift_report.csv`     | CSV `user,system,issue` |
//! | timestamped log | `drift_log.json`       | JSON array of `{user, system, issue, timestamp}` |
//!
//! Loads check the missing-artifact precondition before touching file
//! contents; writes replace the artifact wholesale. Nothing merges with
//! prior state.

use std::path::Path;

use accessgov_core::{DriftIssue, Finding, LoggedFinding, ObservedAccess, PolicyEntry, PolicyTable};

use crate::csv;
use crate::error::{StoreError, StoreResult};
use crate::DataDir;

/// Expected header of the policy table artifact.
const POLICY_HEADER: [&str; 3] = ["System", "Group", "Expected Access"];
/// Expected header of the findings report artifact.
const FINDINGS_HEADER: [&str; 3] = ["user", "system", "issue"];

fn read_to_string(path: &Path) -> StoreResult<String> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_bytes(dir: &DataDir, path: &Path, bytes: &[u8]) -> StoreResult<()> {
    dir.ensure_exists()?;
    std::fs::write(path, bytes).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn require(path: &Path, artifact: &'static str, hint: &'static str) -> StoreResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(StoreError::Missing {
            artifact,
            path: path.to_path_buf(),
            hint,
        })
    }
}

// ---------------------------------------------------------------------------
// Policy table
// ---------------------------------------------------------------------------

/// Load the declared policy table, halting if the artifact is absent.
pub fn load_policy(dir: &DataDir) -> StoreResult<PolicyTable> {
    let path = dir.policy_path();
    require(&path, "policy table", "generate")?;

    let content = read_to_string(&path)?;
    let (header, rows) = csv::parse(&content).map_err(|message| StoreError::Csv {
        path: path.clone(),
        message,
    })?;
    if header != POLICY_HEADER {
        return Err(StoreError::Csv {
            path,
            message: format!(
                "unexpected header {header:?}, expected {POLICY_HEADER:?}"
            ),
        });
    }

    let entries = rows
        .into_iter()
        .map(|row| {
            let [system, group, expected_access]: [String; 3] =
                row.try_into().unwrap_or_default();
            PolicyEntry {
                system,
                group,
                expected_access,
            }
        })
        .collect();
    let table = PolicyTable::new(entries);
    tracing::debug!(path = %path.display(), entries = table.len(), "loaded policy table");
    Ok(table)
}

/// Replace the policy table artifact.
pub fn write_policy(dir: &DataDir, table: &PolicyTable) -> StoreResult<()> {
    let path = dir.policy_path();
    let mut out = csv::encode_row(&POLICY_HEADER);
    out.push('\n');
    for entry in table.entries() {
        out.push_str(&csv::encode_row(&[
            &entry.system,
            &entry.group,
            &entry.expected_access,
        ]));
        out.push('\n');
    }
    write_bytes(dir, &path, out.as_bytes())?;
    tracing::debug!(path = %path.display(), entries = table.len(), "wrote policy table");
    Ok(())
}

// ---------------------------------------------------------------------------
// Observed access
// ---------------------------------------------------------------------------

/// Load the observed access dataset, halting if the artifact is absent.
pub fn load_observed(dir: &DataDir) -> StoreResult<Vec<ObservedAccess>> {
    let path = dir.observed_path();
    require(&path, "observed access dataset", "generate")?;

    let content = read_to_string(&path)?;
    let records: Vec<ObservedAccess> =
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded observed access");
    Ok(records)
}

/// Replace the observed access artifact.
pub fn write_observed(dir: &DataDir, records: &[ObservedAccess]) -> StoreResult<()> {
    let path = dir.observed_path();
    let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
        path: path.clone(),
        source,
    })?;
    write_bytes(dir, &path, json.as_bytes())?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote observed access");
    Ok(())
}

// ---------------------------------------------------------------------------
// Findings report
// ---------------------------------------------------------------------------

/// Replace the findings report artifact. The header row is written even
/// when there are no findings.
pub fn write_findings(dir: &DataDir, findings: &[Finding]) -> StoreResult<()> {
    let path = dir.findings_path();
    let mut out = csv::encode_row(&FINDINGS_HEADER);
    out.push('\n');
    for finding in findings {
        let issue = finding.issue.to_string();
        out.push_str(&csv::encode_row(&[&finding.user, &finding.system, &issue]));
        out.push('\n');
    }
    write_bytes(dir, &path, out.as_bytes())?;
    tracing::debug!(path = %path.display(), findings = findings.len(), "wrote findings report");
    Ok(())
}

/// Load the findings report, halting if the artifact is absent.
pub fn load_findings(dir: &DataDir) -> StoreResult<Vec<Finding>> {
    let path = dir.findings_path();
    require(&path, "findings report", "audit")?;

    let content = read_to_string(&path)?;
    let (header, rows) = csv::parse(&content).map_err(|message| StoreError::Csv {
        path: path.clone(),
        message,
    })?;
    if header != FINDINGS_HEADER {
        return Err(StoreError::Csv {
            path,
            message: format!(
                "unexpected header {header:?}, expected {FINDINGS_HEADER:?}"
            ),
        });
    }

    let mut findings = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let [user, system, issue]: [String; 3] = row.try_into().unwrap_or_default();
        let issue = DriftIssue::parse(&issue).ok_or_else(|| StoreError::Csv {
            path: path.clone(),
            message: format!("row {}: unrecognized issue {issue:?}", i + 1),
        })?;
        findings.push(Finding { user, system, issue });
    }
    tracing::debug!(path = %path.display(), findings = findings.len(), "loaded findings report");
    Ok(findings)
}

// ---------------------------------------------------------------------------
// Timestamped log
// ---------------------------------------------------------------------------

/// Replace the timestamped log artifact. Each logging run's output
/// replaces the previous contents entirely.
pub fn write_log(dir: &DataDir, entries: &[LoggedFinding]) -> StoreResult<()> {
    let path = dir.log_path();
    let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Json {
        path: path.clone(),
        source,
    })?;
    write_bytes(dir, &path, json.as_bytes())?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "wrote drift log");
    Ok(())
}

/// Load the timestamped log, halting if the artifact is absent.
pub fn load_log(dir: &DataDir) -> StoreResult<Vec<LoggedFinding>> {
    let path = dir.log_path();
    require(&path, "drift log", "log")?;

    let content = read_to_string(&path)?;
    let entries: Vec<LoggedFinding> =
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded drift log");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp() -> (tempfile::TempDir, DataDir) {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDir::new(dir.path().join("data"));
        (dir, data)
    }

    #[test]
    fn load_policy_missing_file_errors() {
        let (_t, data) = tmp();
        let err = load_policy(&data).unwrap_err();
        assert!(matches!(err, StoreError::Missing { artifact: "policy table", .. }));
        assert!(err.to_string().contains("accessgov generate"));
    }

    #[test]
    fn policy_roundtrip() {
        let (_t, data) = tmp();
        let table = PolicyTable::new(vec![
            PolicyEntry::new("AWS", "Developers", "Developer-ReadOnly"),
            PolicyEntry::new("JIRA", "Finance", "Finance-ReadOnly"),
        ]);
        write_policy(&data, &table).unwrap();
        assert_eq!(load_policy(&data).unwrap(), table);
    }

    #[test]
    fn policy_header_is_enforced() {
        let (_t, data) = tmp();
        data.ensure_exists().unwrap();
        std::fs::write(data.policy_path(), "system,group,role\nAWS,SRE,Admin\n").unwrap();
        let err = load_policy(&data).unwrap_err();
        assert!(matches!(err, StoreError::Csv { .. }));
        assert!(err.to_string().contains("unexpected header"));
    }

    #[test]
    fn observed_roundtrip() {
        let (_t, data) = tmp();
        let records = vec![
            ObservedAccess::new("alice.dev", "AWS", "Developer-ReadOnly"),
            ObservedAccess::new("bob.sre", "AWS", "AdministratorAccess"),
        ];
        write_observed(&data, &records).unwrap();
        assert_eq!(load_observed(&data).unwrap(), records);
    }

    #[test]
    fn load_observed_missing_file_errors() {
        let (_t, data) = tmp();
        assert!(matches!(
            load_observed(&data).unwrap_err(),
            StoreError::Missing { artifact: "observed access dataset", .. }
        ));
    }

    #[test]
    fn load_observed_malformed_json_errors() {
        let (_t, data) = tmp();
        data.ensure_exists().unwrap();
        std::fs::write(data.observed_path(), "not json").unwrap();
        assert!(matches!(
            load_observed(&data).unwrap_err(),
            StoreError::Json { .. }
        ));
    }

    #[test]
    fn findings_roundtrip_including_empty() {
        let (_t, data) = tmp();

        write_findings(&data, &[]).unwrap();
        let raw = std::fs::read_to_string(data.findings_path()).unwrap();
        assert_eq!(raw, "user,system,issue\n");
        assert!(load_findings(&data).unwrap().is_empty());

        let findings = vec![
            Finding::new("eve.ops", "GitHub", DriftIssue::UnknownSystem),
            Finding::new(
                "bob.sre",
                "AWS",
                DriftIssue::UnexpectedRole("AdministratorAccess".into()),
            ),
        ];
        write_findings(&data, &findings).unwrap();
        assert_eq!(load_findings(&data).unwrap(), findings);
    }

    #[test]
    fn load_findings_missing_file_names_audit_hint() {
        let (_t, data) = tmp();
        let err = load_findings(&data).unwrap_err();
        assert!(err.to_string().contains("accessgov audit"));
    }

    #[test]
    fn load_findings_rejects_unrecognized_issue() {
        let (_t, data) = tmp();
        data.ensure_exists().unwrap();
        std::fs::write(
            data.findings_path(),
            "user,system,issue\nx,AWS,Totally Fine\n",
        )
        .unwrap();
        let err = load_findings(&data).unwrap_err();
        assert!(err.to_string().contains("unrecognized issue"));
    }

    #[test]
    fn log_roundtrip() {
        let (_t, data) = tmp();
        let entries = vec![LoggedFinding {
            user: "bob.sre".into(),
            system: "AWS".into(),
            issue: "Unexpected Role: AdministratorAccess".into(),
            timestamp: "2026-08-26 01:00:00".into(),
        }];
        write_log(&data, &entries).unwrap();
        assert_eq!(load_log(&data).unwrap(), entries);
    }

    #[test]
    fn write_log_overwrites_previous_contents() {
        let (_t, data) = tmp();
        let first = vec![LoggedFinding {
            user: "a".into(),
            system: "AWS".into(),
            issue: "Unknown System".into(),
            timestamp: "2026-08-25 01:00:00".into(),
        }];
        write_log(&data, &first).unwrap();
        write_log(&data, &[]).unwrap();
        assert!(load_log(&data).unwrap().is_empty());
    }
}
