//! Structural extraction from parsed Terraform configuration.
//!
//! Files are parsed with `hcl` into a generic value tree. Depending on how a
//! file is written, the parser hands back each top-level construct
//! (`resource`, `variable`, `output`) either as one mapping keyed by name or
//! as a sequence of single-key mappings. [`BlockShape`] normalizes both into
//! ordered `(name, body)` pairs at the parse boundary so the extraction
//! rules only ever see one shape.

use std::path::{Path, PathBuf};

use hcl::{Map, Value};
use tracing::warn;

use crate::error::Result;
use crate::project::{ModuleRecord, VariableRecord};

/// The two shapes the parser emits for a block collection.
enum BlockShape<'a> {
    Keyed(&'a Map<String, Value>),
    Listed(&'a [Value]),
}

impl<'a> BlockShape<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(BlockShape::Keyed(map)),
            Value::Array(items) => Some(BlockShape::Listed(items)),
            _ => None,
        }
    }

    /// `(name, body)` pairs in declaration order.
    fn entries(&self) -> Vec<(&'a str, &'a Value)> {
        match self {
            BlockShape::Keyed(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            BlockShape::Listed(items) => items
                .iter()
                .filter_map(|item| item.as_object())
                .filter_map(|obj| obj.iter().next())
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
        }
    }
}

pub struct TerraformExtractor;

impl TerraformExtractor {
    /// Build the record for one module from its `.tf` files, in file order.
    pub fn scan_module(name: &str, files: &[PathBuf]) -> ModuleRecord {
        let mut record = ModuleRecord::new(name);
        for file in files {
            let config = Self::parse_file(file);
            Self::extract(&config, &mut record);
        }
        record
    }

    /// Parse one Terraform file. A file that cannot be read or parsed
    /// contributes an empty mapping; the warning is the only trace it
    /// leaves.
    pub fn parse_file(path: &Path) -> Value {
        match Self::try_parse(path) {
            Ok(value) => value,
            Err(err) => {
                warn!("Could not parse Terraform file {}: {}", path.display(), err);
                Value::Object(Map::new())
            }
        }
    }

    fn try_parse(path: &Path) -> Result<Value> {
        let content = std::fs::read_to_string(path)?;
        Ok(hcl::from_str(&content)?)
    }

    /// Fold one parsed file into the module record.
    pub fn extract(config: &Value, record: &mut ModuleRecord) {
        let Some(top) = config.as_object() else {
            return;
        };

        if let Some(shape) = top.get("resource").and_then(BlockShape::of) {
            for (resource_type, instances) in shape.entries() {
                for instance in Self::instance_names(instances) {
                    record.resources.push(format!("{resource_type}.{instance}"));
                }
            }
        }

        if let Some(shape) = top.get("variable").and_then(BlockShape::of) {
            for (name, body) in shape.entries() {
                record.variables.push(VariableRecord {
                    name: name.to_string(),
                    var_type: Self::type_label(body),
                });
            }
        }

        if let Some(shape) = top.get("output").and_then(BlockShape::of) {
            for (name, _) in shape.entries() {
                record.outputs.push(name.to_string());
            }
        }
    }

    /// Instance names under one resource type, in declaration order.
    fn instance_names(instances: &Value) -> Vec<&str> {
        match instances {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_object())
                .filter_map(|obj| obj.keys().next())
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Declared variable type, defaulting to `any`.
    fn type_label(body: &Value) -> String {
        body.as_object()
            .and_then(|obj| obj.get("type"))
            .and_then(Self::render_type)
            .unwrap_or_else(|| "any".to_string())
    }

    /// Type expressions come back from the parser as `"${string}"`
    /// interpolations; strip the wrapper so the docs read `string`.
    fn render_type(value: &Value) -> Option<String> {
        let raw = value.as_str()?;
        let unwrapped = raw
            .strip_prefix("${")
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(raw);
        Some(unwrapped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parsed(input: &str) -> Value {
        hcl::from_str(input).unwrap()
    }

    fn extract(input: &str) -> ModuleRecord {
        let mut record = ModuleRecord::new("test");
        TerraformExtractor::extract(&parsed(input), &mut record);
        record
    }

    #[test]
    fn test_resource_identifier_formation() {
        let record = extract(r#"resource "t" "a" {}"#);
        assert_eq!(record.resources, vec!["t.a"]);
    }

    #[test]
    fn test_resource_identifiers_in_declaration_order() {
        let record = extract(
            r#"
            resource "t" "a" {}
            resource "t" "b" {}
            "#,
        );
        assert_eq!(record.resources, vec!["t.a", "t.b"]);
    }

    #[test]
    fn test_resources_across_types() {
        let record = extract(
            r#"
            resource "vpc_network" "main" {
              name = "main"
            }
            resource "subnet" "internal" {
              cidr = "10.0.0.0/16"
            }
            "#,
        );
        assert_eq!(record.resources, vec!["vpc_network.main", "subnet.internal"]);
    }

    #[test]
    fn test_variable_with_declared_type() {
        let record = extract(
            r#"
            variable "region" {
              type    = string
              default = "us-central1"
            }
            "#,
        );
        assert_eq!(
            record.variables,
            vec![VariableRecord {
                name: "region".to_string(),
                var_type: "string".to_string(),
            }]
        );
    }

    #[test]
    fn test_variable_without_type_defaults_to_any() {
        let record = extract(r#"variable "region" {}"#);
        assert_eq!(record.variables[0].var_type, "any");
    }

    #[test]
    fn test_output_names_only() {
        let record = extract(
            r#"
            output "network_id" {
              value = "id"
            }
            "#,
        );
        assert_eq!(record.outputs, vec!["network_id"]);
    }

    #[test]
    fn test_listed_shape_accepted() {
        // The sequence-of-single-key-mappings shape some parser versions
        // emit for the same construct.
        let mut instances = Map::new();
        instances.insert("a".to_string(), Value::Object(Map::new()));
        let mut item = Map::new();
        item.insert("t".to_string(), Value::Object(instances));
        let mut top = Map::new();
        top.insert("resource".to_string(), Value::Array(vec![Value::Object(item)]));

        let mut record = ModuleRecord::new("test");
        TerraformExtractor::extract(&Value::Object(top), &mut record);

        assert_eq!(record.resources, vec!["t.a"]);
    }

    #[test]
    fn test_listed_variable_shape_accepted() {
        let mut body = Map::new();
        body.insert("type".to_string(), Value::String("${number}".to_string()));
        let mut item = Map::new();
        item.insert("count".to_string(), Value::Object(body));
        let mut top = Map::new();
        top.insert("variable".to_string(), Value::Array(vec![Value::Object(item)]));

        let mut record = ModuleRecord::new("test");
        TerraformExtractor::extract(&Value::Object(top), &mut record);

        assert_eq!(
            record.variables,
            vec![VariableRecord {
                name: "count".to_string(),
                var_type: "number".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_object_config_contributes_nothing() {
        let mut record = ModuleRecord::new("test");
        TerraformExtractor::extract(&Value::Null, &mut record);
        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_file_malformed_yields_empty_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.tf");
        fs::write(&path, "resource \"t\" {{{").unwrap();

        let value = TerraformExtractor::parse_file(&path);
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn test_scan_module_skips_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("main.tf");
        let bad = temp_dir.path().join("broken.tf");
        fs::write(&good, r#"resource "vpc_network" "main" {}"#).unwrap();
        fs::write(&bad, "variable \"x\" {{{").unwrap();

        let record =
            TerraformExtractor::scan_module("network", &[good, bad]);

        assert_eq!(record.resources, vec!["vpc_network.main"]);
        assert!(record.variables.is_empty());
    }
}
