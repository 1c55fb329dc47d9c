//! Serialization module for writing the scan result as JSON or YAML.
//!
//! This module provides functions to serialize a [`ScanResult`] into standard formats
//! and write it to files. The JSON form is the primary output: a single object with the
//! `controllers`, `services`, `repositories` and `entities` arrays.

use crate::model::ScanResult;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes a scan result to JSON format with pretty printing.
///
/// The output is indented for readability and is byte-identical for identical results.
///
/// # Example
///
/// ```
/// use springboot_analyzer::model::ScanResult;
/// use springboot_analyzer::serializer::serialize_json;
///
/// let json = serialize_json(&ScanResult::new()).unwrap();
/// assert!(json.contains("\"controllers\": []"));
/// ```
pub fn serialize_json(result: &ScanResult) -> Result<String> {
    debug!("Serializing scan result to JSON");
    serde_json::to_string_pretty(result).context("Failed to serialize scan result to JSON")
}

/// Serializes a scan result to YAML format.
pub fn serialize_yaml(result: &ScanResult) -> Result<String> {
    debug!("Serializing scan result to YAML");
    serde_yaml::to_string(result).context("Failed to serialize scan result to YAML")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Parent directories are created as needed. The content is staged in a uniquely named
/// temporary file next to the target and renamed into place; on any failure the staging file
/// is removed and the target is left untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create file in: {}", parent.display()))?;
    staging
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    staging
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{FieldMarker, RelationshipKind};
    use crate::model::{EntityInfo, FieldInfo, RelationshipInfo, RepositoryInfo};
    use tempfile::TempDir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Helper function to create a small scan result for testing
    fn create_test_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.repositories.push(RepositoryInfo {
            interface_name: "OrderRepository".to_string(),
            entity_type: Some("Order".to_string()),
            id_type: None,
            custom_methods: vec![],
        });
        result.entities.push(EntityInfo {
            class_name: "Order".to_string(),
            table_name: None,
            fields: vec![FieldInfo {
                name: "id".to_string(),
                type_name: "Long".to_string(),
                annotations: vec![FieldMarker::Id],
            }],
            relationships: vec![RelationshipInfo {
                kind: RelationshipKind::ManyToOne,
                field_name: "customer".to_string(),
                target_entity: Some("Customer".to_string()),
            }],
        });
        result
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize_json(&create_test_result()).unwrap();

        assert!(json.contains("\"controllers\""));
        assert!(json.contains("\"services\""));
        assert!(json.contains("\"repositories\""));
        assert!(json.contains("\"entities\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 4);
        assert_eq!(parsed["repositories"][0]["interfaceName"], "OrderRepository");
        assert!(parsed["repositories"][0]["idType"].is_null());
        assert!(parsed["entities"][0]["tableName"].is_null());
        assert_eq!(parsed["entities"][0]["fields"][0]["annotations"][0], "@Id");
        assert_eq!(parsed["entities"][0]["relationships"][0]["type"], "ManyToOne");
        assert_eq!(
            parsed["entities"][0]["relationships"][0]["targetEntity"],
            "Customer"
        );
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let json = serialize_json(&create_test_result()).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  "));
        assert!(json.lines().count() > 5, "Pretty printed JSON should have multiple lines");
    }

    #[test]
    fn test_serialize_json_is_stable() {
        let result = create_test_result();
        assert_eq!(serialize_json(&result).unwrap(), serialize_json(&result).unwrap());
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&create_test_result()).unwrap();

        assert!(yaml.contains("controllers: []"));
        assert!(yaml.contains("interfaceName: OrderRepository"));
        assert!(yaml.contains("idType: null"));
    }

    #[test]
    fn test_roundtrip_json_serialization() {
        let result = create_test_result();
        let json = serialize_json(&result).unwrap();

        let deserialized: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("analysis.json");

        write_to_file("test content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
        assert_eq!(dir_entries(temp_dir.path()), vec!["analysis.json"]);
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out").join("nested").join("analysis.json");

        write_to_file("test content", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("analysis.json");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_failed_write_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file
        let occupied = temp_dir.path().join("analysis.json");
        fs::create_dir(&occupied).unwrap();
        fs::write(occupied.join("keep"), "x").unwrap();

        let result = write_to_file("{}", &occupied);

        assert!(result.is_err());
        assert!(occupied.is_dir());
        assert_eq!(dir_entries(temp_dir.path()), vec!["analysis.json"]);
    }

    #[test]
    fn test_existing_tmp_sibling_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("analysis.json");
        let sibling = temp_dir.path().join("analysis.json.tmp");
        fs::write(&sibling, "user data").unwrap();

        write_to_file("{}", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "user data");
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let result = write_to_file("{}", &blocker.join("analysis.json"));
        assert!(result.is_err());
    }
}
