//! Markdown rendering of extracted metadata into README sections.

use crate::project::{ManifestRecord, ModuleRecord};

pub const DIAGRAMS_HEADING: &str = "## 📊 Infrastructure Diagrams";
pub const MODULES_HEADING: &str = "## 🏗 Terraform Modules";
pub const KUBERNETES_HEADING: &str = "## 🚢 Kubernetes Resources";

/// Mermaid overview plus, when the external tool produced one, a link to
/// the rendered image.
pub fn diagram_section(mermaid: &str, image: Option<&str>) -> String {
    let mut doc = format!("{DIAGRAMS_HEADING}\n\n");
    doc.push_str("### Infrastructure Overview\n");
    doc.push_str(mermaid);
    doc.push_str("\n\n");
    if let Some(path) = image {
        doc.push_str("### Detailed Infrastructure View\n");
        doc.push_str(&format!("![Infrastructure Diagram]({path})\n\n"));
    }
    doc
}

/// Per-module headings with bulleted resource/variable/output groups.
/// Empty groups are omitted.
pub fn module_section(modules: &[ModuleRecord]) -> String {
    let mut doc = format!("{MODULES_HEADING}\n\n");

    for module in modules {
        doc.push_str(&format!("### {}\n\n", module.name));

        if !module.resources.is_empty() {
            doc.push_str("**Resources:**\n");
            for resource in &module.resources {
                doc.push_str(&format!("- `{resource}`\n"));
            }
            doc.push('\n');
        }

        if !module.variables.is_empty() {
            doc.push_str("**Variables:**\n");
            for variable in &module.variables {
                doc.push_str(&format!("- `{}` ({})\n", variable.name, variable.var_type));
            }
            doc.push('\n');
        }

        if !module.outputs.is_empty() {
            doc.push_str("**Outputs:**\n");
            for output in &module.outputs {
                doc.push_str(&format!("- `{output}`\n"));
            }
            doc.push('\n');
        }
    }

    doc
}

/// Per-file headings with `kind/name` bullets. The whole section is omitted
/// when there are no manifest files.
pub fn kubernetes_section(manifests: &[ManifestRecord]) -> String {
    if manifests.is_empty() {
        return String::new();
    }

    let mut doc = format!("{KUBERNETES_HEADING}\n\n");
    for manifest in manifests {
        doc.push_str(&format!("### {}\n\n", manifest.file));
        for entry in &manifest.entries {
            doc.push_str(&format!("- `{}`\n", entry.label()));
        }
        doc.push('\n');
    }
    doc
}
