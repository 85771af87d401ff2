//! Reading and writing snapshot documents.
//!
//! The document is the JSON shape `{userProfile, debts[], dashboardOverview}`
//! with plain numbers for amounts and `YYYY-MM-DD` dates.

use log::debug;
use std::fs;
use std::path::Path;

use super::dashboard_model::DashboardSnapshot;
use crate::errors::{Error, Result};

/// Parses a snapshot document.
pub fn load_snapshot_from_str(json: &str) -> Result<DashboardSnapshot> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a snapshot document from disk.
pub fn load_snapshot_from_path(path: impl AsRef<Path>) -> Result<DashboardSnapshot> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Snapshot(format!("Failed to read {}: {}", path.display(), e)))?;
    let snapshot = load_snapshot_from_str(&contents)?;
    debug!(
        "Loaded snapshot from {} ({} debts)",
        path.display(),
        snapshot.debts.len()
    );
    Ok(snapshot)
}

/// Writes a snapshot document as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_snapshot_to_path(snapshot: &DashboardSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)
        .map_err(|e| Error::Snapshot(format!("Failed to write {}: {}", path.display(), e)))?;
    debug!("Saved snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"{
        "userProfile": {
            "monthlyIncome": 4000,
            "allocatedIncomePercentage": 20,
            "allocatedIncomeAmount": 800
        },
        "debts": [],
        "dashboardOverview": {
            "totalDebtLeft": 0,
            "totalDebtPaid": 0,
            "totalOriginalDebt": 0,
            "overallProgressPercentage": 0
        }
    }"#;

    #[test]
    fn test_load_minimal_document() {
        let snapshot = load_snapshot_from_str(MINIMAL).unwrap();
        assert_eq!(snapshot.user_profile.monthly_income, dec!(4000));
        assert!(snapshot.debts.is_empty());
        assert!(snapshot.dashboard_overview.debt_balance_history.is_empty());
    }

    #[test]
    fn test_malformed_document_is_snapshot_error() {
        assert!(matches!(
            load_snapshot_from_str("{\"debts\": 3}"),
            Err(Error::Snapshot(_))
        ));
    }

    #[test]
    fn test_missing_file_is_snapshot_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_snapshot_from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Snapshot(msg)) if msg.contains("absent.json")));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dashboard.json");
        let snapshot = load_snapshot_from_str(MINIMAL).unwrap();

        save_snapshot_to_path(&snapshot, &path).unwrap();
        let loaded = load_snapshot_from_path(&path).unwrap();

        assert_eq!(loaded, snapshot);
    }
}
