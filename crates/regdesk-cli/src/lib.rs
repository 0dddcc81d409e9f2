//! # regdesk-cli — CLI Tool for the RegDesk Compliance Stack
//!
//! Provides the `regdesk` command-line interface for offline reporting
//! over register exports (the JSON arrays the platform APIs produce).
//!
//! ## Subcommands
//!
//! - `regdesk risk summary <risks.json>` — Portfolio summary metrics.
//! - `regdesk risk heatmap <risks.json> [--view residual] [--json]` —
//!   5×5 heat-map count matrix, or the full grid as JSON.
//! - `regdesk complaint status <complaints.json>` — Per-complaint
//!   deadline position and milestone letter status.

pub mod complaint;
pub mod risk;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read a JSON array export from disk.
///
/// Errors carry the offending path so operators can tell which of
/// several exports failed to parse.
pub fn read_export<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading export {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing export {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_export_parses_a_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"likelihood":3,"impact":4}}]"#).unwrap();
        let risks: Vec<regdesk_risk::RiskRecord> = read_export(file.path()).unwrap();
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].inherent_score(), 12);
    }

    #[test]
    fn read_export_names_the_file_on_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_export::<regdesk_risk::RiskRecord>(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing export"));
    }

    #[test]
    fn read_export_fails_on_missing_file() {
        let err =
            read_export::<regdesk_risk::RiskRecord>(Path::new("/nonexistent.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading export"));
    }
}
