//! Mermaid diagram generation for extracted infrastructure.

use crate::project::{ManifestRecord, ModuleRecord};

/// Replaces characters Mermaid rejects in node identifiers. Distinct
/// resources can collide after sanitization; collisions are not
/// de-duplicated.
pub fn sanitize_id(raw: &str) -> String {
    raw.replace(['.', '-'], "_")
}

/// Fenced `graph TB` block: one subgraph per module with a node per
/// resource, plus a Kubernetes subgraph when any manifest entries exist.
pub fn diagram(modules: &[ModuleRecord], manifests: &[ManifestRecord]) -> String {
    let mut lines = vec![
        "```mermaid".to_string(),
        "graph TB".to_string(),
        "    subgraph Infrastructure".to_string(),
    ];

    for module in modules {
        lines.push(format!("    subgraph {}", module.name));
        for resource in &module.resources {
            let id = sanitize_id(&format!("{}_{}", module.name, resource));
            lines.push(format!("        {id}[{resource}]"));
        }
        lines.push("    end".to_string());
    }

    if manifests.iter().any(|m| !m.entries.is_empty()) {
        lines.push("    subgraph Kubernetes".to_string());
        for manifest in manifests {
            for entry in &manifest.entries {
                let id = sanitize_id(&format!("k8s_{}_{}", entry.kind, entry.name));
                lines.push(format!("        {id}[{}]", entry.label()));
            }
        }
        lines.push("    end".to_string());
    }

    lines.push("end".to_string());
    lines.push("```".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ManifestEntry, VariableRecord};

    fn network_module() -> ModuleRecord {
        ModuleRecord {
            name: "network".to_string(),
            resources: vec!["vpc_network.main".to_string()],
            variables: vec![VariableRecord {
                name: "region".to_string(),
                var_type: "string".to_string(),
            }],
            outputs: vec!["network_id".to_string()],
        }
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("network_vpc_network.main"), "network_vpc_network_main");
        assert_eq!(sanitize_id("k8s_Service_web-api"), "k8s_Service_web_api");
    }

    #[test]
    fn test_subgraph_per_module() {
        let output = diagram(&[network_module()], &[]);

        assert!(output.starts_with("```mermaid\ngraph TB"));
        assert!(output.contains("    subgraph network"));
        assert!(output.contains("        network_vpc_network_main[vpc_network.main]"));
        assert!(output.ends_with("```"));
    }

    #[test]
    fn test_kubernetes_subgraph_only_with_entries() {
        let empty = diagram(&[network_module()], &[]);
        assert!(!empty.contains("subgraph Kubernetes"));

        let manifests = vec![ManifestRecord {
            file: "app.yaml".to_string(),
            entries: vec![ManifestEntry {
                kind: "Deployment".to_string(),
                name: "api".to_string(),
            }],
        }];
        let output = diagram(&[], &manifests);
        assert!(output.contains("    subgraph Kubernetes"));
        assert!(output.contains("        k8s_Deployment_api[Deployment/api]"));
    }

    #[test]
    fn test_manifest_record_without_entries_adds_no_subgraph() {
        let manifests = vec![ManifestRecord {
            file: "empty.yaml".to_string(),
            entries: Vec::new(),
        }];
        let output = diagram(&[], &manifests);
        assert!(!output.contains("subgraph Kubernetes"));
    }
}
