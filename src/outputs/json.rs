//! JSON output for the yearly archive.
//!
//! The archive is written once, at the end of the run, as a single JSON
//! object: top-level keys are year numbers (strings, per JSON), values map
//! category name → array of sentences. Indentation is four spaces to stay
//! byte-compatible with the established output format. An existing file at
//! the path is overwritten.

use crate::models::YearlyArchive;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `archive` with four-space indentation.
fn to_pretty_json(archive: &YearlyArchive) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    archive.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `archive` as pretty-printed JSON to `path`.
///
/// Creates the parent directory if the path has one. The write is a single
/// whole-file operation, so a run that fails earlier leaves no partial file
/// behind.
#[instrument(level = "info", skip(archive), fields(path = %path))]
pub async fn write_archive(archive: &YearlyArchive, path: &str) -> Result<(), Box<dyn Error>> {
    let json = to_pretty_json(archive)?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent).await {
                error!(parent = %parent.display(), error = %e, "Failed to create output dir");
                return Err(e.into());
            }
        }
    }

    info!(%path, years = archive.len(), "Writing JSON archive");
    fs::write(path, json).await?;
    info!(%path, "Wrote JSON archive");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorizedResult;

    fn sample_archive() -> YearlyArchive {
        let mut result = CategorizedResult::new();
        result.insert(
            "commerce".to_string(),
            vec!["Trade grew rapidly.".to_string()],
        );
        let mut archive = YearlyArchive::new();
        archive.insert(1925, result);
        archive
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let json = String::from_utf8(to_pretty_json(&sample_archive()).unwrap()).unwrap();
        assert!(json.contains("\n    \"1925\""));
        assert!(json.contains("\n        \"commerce\""));
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let archive = sample_archive();
        let json = to_pretty_json(&archive).unwrap();
        let parsed: YearlyArchive = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed, archive);
    }

    #[tokio::test]
    async fn test_write_archive_overwrites_existing_file() {
        let dir = std::env::temp_dir().join("symbolic_history_json_test");
        let path = dir.join("archive.json");
        let path_str = path.to_str().unwrap();

        write_archive(&YearlyArchive::new(), path_str).await.unwrap();
        write_archive(&sample_archive(), path_str).await.unwrap();

        let written = tokio::fs::read_to_string(path_str).await.unwrap();
        let parsed: YearlyArchive = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, sample_archive());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
