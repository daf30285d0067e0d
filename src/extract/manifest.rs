//! Extraction of kind/name pairs from Kubernetes manifest files.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::warn;

use crate::error::Result;
use crate::project::{ManifestEntry, ManifestRecord};

pub struct ManifestExtractor;

impl ManifestExtractor {
    /// Build the record for one manifest file. A file whose stream fails to
    /// parse contributes zero entries, never a partial list.
    pub fn scan_file(path: &Path) -> ManifestRecord {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let entries = match Self::try_scan(path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "Could not parse Kubernetes manifest {}: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };

        ManifestRecord { file, entries }
    }

    fn try_scan(path: &Path) -> Result<Vec<ManifestEntry>> {
        let content = std::fs::read_to_string(path)?;
        Self::extract(&content)
    }

    /// A manifest file may hold several `---`-separated documents. Mapping
    /// documents yield an entry; anything else (empty separators parse as
    /// null) is skipped.
    pub fn extract(content: &str) -> Result<Vec<ManifestEntry>> {
        let mut entries = Vec::new();

        for document in serde_yaml::Deserializer::from_str(content) {
            let value = Value::deserialize(document)?;
            if !value.is_mapping() {
                continue;
            }
            entries.push(ManifestEntry {
                kind: Self::string_at(&value, &["kind"])
                    .unwrap_or_else(|| "Unknown".to_string()),
                name: Self::string_at(&value, &["metadata", "name"])
                    .unwrap_or_else(|| "unnamed".to_string()),
            });
        }

        Ok(entries)
    }

    fn string_at(value: &Value, path: &[&str]) -> Option<String> {
        let mut current = value;
        for key in path {
            current = current.get(key)?;
        }
        current.as_str().map(str::to_string)
    }
}
