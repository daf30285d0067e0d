//! Project layout conventions and extracted-metadata records.
//!
//! Records are built fresh on every run and threaded through the renderer;
//! nothing here is persisted.

pub mod walker;

use serde::{Deserialize, Serialize};

pub use walker::ProjectWalker;

/// Directory containing Terraform modules, relative to the project root.
pub const MODULES_DIR: &str = "modules";

/// Directory containing Kubernetes manifests, relative to the project root.
pub const MANIFESTS_DIR: &str = "kubernetes/manifests";

/// Terraform environment directory used for external tool invocations.
pub const DEFAULT_ENV_DIR: &str = "environments/dev";

/// Structural metadata extracted from one Terraform module directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module name (the directory containing the `.tf` files).
    pub name: String,
    /// `"<type>.<instance>"` identifiers in declaration order.
    pub resources: Vec<String>,
    /// Declared input variables in declaration order.
    pub variables: Vec<VariableRecord>,
    /// Declared output names in declaration order.
    pub outputs: Vec<String>,
}

impl ModuleRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when extraction found nothing to document.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.variables.is_empty() && self.outputs.is_empty()
    }
}

/// A declared input variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    /// Declared type, `"any"` when the declaration has none.
    pub var_type: String,
}

/// Kind/name pairs extracted from one Kubernetes manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Manifest file name, not the full path.
    pub file: String,
    /// One entry per mapping document, in file order.
    pub entries: Vec<ManifestEntry>,
}

/// A single deployable object described by a manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub kind: String,
    pub name: String,
}

impl ManifestEntry {
    /// `"<kind>/<name>"` as rendered in bullets and diagram nodes.
    pub fn label(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_record_is_empty() {
        let mut record = ModuleRecord::new("network");
        assert!(record.is_empty());

        record.outputs.push("network_id".to_string());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_manifest_entry_label() {
        let entry = ManifestEntry {
            kind: "Deployment".to_string(),
            name: "api".to_string(),
        };
        assert_eq!(entry.label(), "Deployment/api");
    }
}
