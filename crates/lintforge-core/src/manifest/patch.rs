//! Pending manifest mutations produced by generators

use serde_json::Value;

/// A change a generator wants applied to `package.json`
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestPatch {
    /// Overwrite the value at a dotted path
    Set { path: String, value: Value },
    /// Ensure a script at a dotted path runs `command`, keeping whatever it
    /// already runs
    MergeCommand { path: String, command: String },
}

impl ManifestPatch {
    pub fn set(path: impl Into<String>, value: impl Into<Value>) -> Self {
        ManifestPatch::Set {
            path: path.into(),
            value: value.into(),
        }
    }

    /// `scripts.<name> = command`
    pub fn script(name: &str, command: impl Into<String>) -> Self {
        Self::set(format!("scripts.{}", name), Value::String(command.into()))
    }

    pub fn merge_command(path: impl Into<String>, command: impl Into<String>) -> Self {
        ManifestPatch::MergeCommand {
            path: path.into(),
            command: command.into(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ManifestPatch::Set { path, .. } | ManifestPatch::MergeCommand { path, .. } => path,
        }
    }
}
