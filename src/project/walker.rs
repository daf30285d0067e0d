//! Filesystem discovery of Terraform module files and Kubernetes manifests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocgenError, Result};

use super::{MANIFESTS_DIR, MODULES_DIR};

/// Locates the input files of one project root.
///
/// Module names and file lists come back sorted so the rendered document is
/// reproducible across platforms.
pub struct ProjectWalker {
    root: PathBuf,
}

impl ProjectWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All `.tf` files under `modules/`, grouped by the name of the
    /// directory that holds them. A missing `modules/` directory is fatal.
    pub fn module_files(&self) -> Result<BTreeMap<String, Vec<PathBuf>>> {
        let modules_dir = self.root.join(MODULES_DIR);
        if !modules_dir.is_dir() {
            return Err(DocgenError::MissingDirectory(
                modules_dir.display().to_string(),
            ));
        }

        let mut modules: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        let walker = WalkDir::new(&modules_dir).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("tf") {
                continue;
            }
            let Some(module) = path
                .parent()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            modules.entry(module).or_default().push(path.to_path_buf());
        }

        Ok(modules)
    }

    /// All `.yaml`/`.yml` files directly under `kubernetes/manifests/`,
    /// sorted by name. A missing manifests directory just means there is
    /// nothing to document.
    pub fn manifest_files(&self) -> Vec<PathBuf> {
        let manifests_dir = self.root.join(MANIFESTS_DIR);
        let mut files: Vec<PathBuf> = match std::fs::read_dir(&manifests_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && is_manifest(p))
                .collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}

fn is_manifest(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
