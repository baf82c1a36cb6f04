//! The project's `package.json`, loaded once and written back once

mod patch;

pub use patch::ManifestPatch;

use crate::error::{GenerateError, Result};
use crate::render::to_json_string;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// In-memory package manifest
///
/// Key order is preserved, so unrelated entries come back out exactly where
/// they were.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl Manifest {
    pub const FILE_NAME: &'static str = "package.json";

    /// Read `package.json` from `project_dir`
    pub async fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(Self::FILE_NAME);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| GenerateError::ManifestRead {
                path: path.clone(),
                source,
            })?;
        Self::parse(path, &content)
    }

    /// Parse manifest text that was read from `path`
    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| GenerateError::ManifestParse {
                path: path.clone(),
                source,
            })?;
        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(GenerateError::ManifestShape { path }),
        }
    }

    /// Write the manifest back to where it was loaded from
    pub async fn save(&self) -> Result<()> {
        let content = self.to_json()?;
        fs::write(&self.path, content)
            .await
            .map_err(|source| GenerateError::ManifestWrite {
                path: self.path.clone(),
                source,
            })
    }

    pub fn to_json(&self) -> Result<String> {
        to_json_string(&self.root).map_err(|source| GenerateError::Render {
            file: Self::FILE_NAME,
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a dotted path such as `scripts.prepare`
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Set a dotted path, creating intermediate objects as needed
    ///
    /// Fails without touching the manifest if an intermediate segment holds a
    /// non-object value.
    pub fn set(&mut self, path: &str, value: Value) -> Result<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };

        // Objects are only created once the walk leaves existing keys, so a
        // failure never leaves partial containers behind.
        let mut current = &mut self.root;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => {
                    return Err(GenerateError::ManifestUpdate {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
        }
        current.insert(last.to_string(), value);
        Ok(())
    }

    /// Add a shell command to a script entry, joining with `&&` when the
    /// entry already runs something else
    pub fn merge_command(&mut self, path: &str, command: &str) -> Result<()> {
        let merged = match self.get(path).and_then(Value::as_str) {
            Some(existing) if existing.split("&&").any(|part| part.trim() == command) => {
                return Ok(());
            }
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} && {}", existing.trim(), command)
            }
            _ => command.to_string(),
        };
        self.set(path, Value::String(merged))
    }

    pub fn apply(&mut self, patch: &ManifestPatch) -> Result<()> {
        match patch {
            ManifestPatch::Set { path, value } => self.set(path, value.clone()),
            ManifestPatch::MergeCommand { path, command } => self.merge_command(path, command),
        }
    }

    /// Value of the `packageManager` field (e.g. `pnpm@9.1.0`)
    pub fn package_manager(&self) -> Option<&str> {
        self.root.get("packageManager").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(content: &str) -> Manifest {
        Manifest::parse(PathBuf::from("package.json"), content).unwrap()
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut m = manifest(r#"{"name": "demo"}"#);
        m.set("scripts.eslint", json!("eslint --fix .")).unwrap();
        assert_eq!(m.get("scripts.eslint"), Some(&json!("eslint --fix .")));
        assert_eq!(m.get("name"), Some(&json!("demo")));
    }

    #[test]
    fn test_set_keeps_sibling_keys() {
        let mut m = manifest(r#"{"scripts": {"build": "tsc"}}"#);
        m.set("scripts.prettier", json!("prettier --write .")).unwrap();
        assert_eq!(m.get("scripts.build"), Some(&json!("tsc")));
    }

    #[test]
    fn test_last_write_wins() {
        let mut m = manifest("{}");
        m.set("scripts.lint", json!("a")).unwrap();
        m.set("scripts.lint", json!("b")).unwrap();
        assert_eq!(m.get("scripts.lint"), Some(&json!("b")));
    }

    #[test]
    fn test_set_through_non_object_fails() {
        let mut m = manifest(r#"{"scripts": "oops"}"#);
        let err = m.set("scripts.eslint", json!("eslint --fix .")).unwrap_err();
        assert!(matches!(err, GenerateError::ManifestUpdate { ref segment, .. } if segment == "scripts"));
        assert_eq!(m.get("scripts"), Some(&json!("oops")));
    }

    #[test]
    fn test_merge_command_into_empty_slot() {
        let mut m = manifest("{}");
        m.merge_command("scripts.prepare", "husky").unwrap();
        assert_eq!(m.get("scripts.prepare"), Some(&json!("husky")));
    }

    #[test]
    fn test_merge_command_is_idempotent() {
        let mut m = manifest("{}");
        m.merge_command("scripts.prepare", "husky").unwrap();
        m.merge_command("scripts.prepare", "husky").unwrap();
        assert_eq!(m.get("scripts.prepare"), Some(&json!("husky")));
    }

    #[test]
    fn test_merge_command_appends_to_existing_script() {
        let mut m = manifest(r#"{"scripts": {"prepare": "npm run build"}}"#);
        m.merge_command("scripts.prepare", "husky").unwrap();
        assert_eq!(
            m.get("scripts.prepare"),
            Some(&json!("npm run build && husky"))
        );
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = Manifest::parse(PathBuf::from("package.json"), "[1, 2]").unwrap_err();
        assert!(matches!(err, GenerateError::ManifestShape { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = Manifest::parse(PathBuf::from("package.json"), "{ name: ").unwrap_err();
        assert!(matches!(err, GenerateError::ManifestParse { .. }));
    }

    #[test]
    fn test_to_json_preserves_key_order() {
        let m = manifest(r#"{"name": "demo", "version": "1.0.0", "private": true}"#);
        assert_eq!(
            m.to_json().unwrap(),
            "{\n    \"name\": \"demo\",\n    \"version\": \"1.0.0\",\n    \"private\": true\n}\n"
        );
    }
}
