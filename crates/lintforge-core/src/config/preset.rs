//! YAML presets that answer some or all of the wizard's questions
//!
//! ```yaml
//! framework: vue
//! linters: [eslint, prettier, lintstaged]
//! module_type: esm
//! style_processor: scss
//! ```

use super::package_manager::PackageManager;
use crate::error::{GenerateError, Result};
use crate::options::{Framework, Linter, ModuleType, StyleProcessor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Partially filled answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub framework: Option<Framework>,

    #[serde(default)]
    pub linters: Option<Vec<Linter>>,

    #[serde(default, alias = "moduleType")]
    pub module_type: Option<ModuleType>,

    #[serde(default, alias = "styleProcessor")]
    pub style_processor: Option<StyleProcessor>,

    #[serde(default, alias = "packageManager")]
    pub package_manager: Option<PackageManager>,
}

impl Preset {
    /// Read a preset file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| GenerateError::Preset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GenerateError::Preset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Fill unanswered fields from `fallback`
    pub fn or(self, fallback: Preset) -> Preset {
        Preset {
            framework: self.framework.or(fallback.framework),
            linters: self.linters.or(fallback.linters),
            module_type: self.module_type.or(fallback.module_type),
            style_processor: self.style_processor.or(fallback.style_processor),
            package_manager: self.package_manager.or(fallback.package_manager),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Preset> {
        Preset::parse(&PathBuf::from("lintforge.yaml"), content)
    }

    #[test]
    fn test_parse_full_preset() {
        let preset = parse(
            "framework: vue\nlinters: [eslint, prettier, lint-staged]\nmodule_type: cjs\nstyle_processor: scss\npackage_manager: pnpm\n",
        )
        .unwrap();
        assert_eq!(preset.framework, Some(Framework::Vue));
        assert_eq!(
            preset.linters,
            Some(vec![Linter::ESLint, Linter::Prettier, Linter::LintStaged])
        );
        assert_eq!(preset.module_type, Some(ModuleType::Cjs));
        assert_eq!(preset.style_processor, Some(StyleProcessor::Scss));
        assert_eq!(preset.package_manager, Some(PackageManager::Pnpm));
    }

    #[test]
    fn test_parse_camel_case_keys() {
        let preset = parse("framework: node\nmoduleType: esm\n").unwrap();
        assert_eq!(preset.framework, Some(Framework::NodeJS));
        assert_eq!(preset.module_type, Some(ModuleType::Esm));
        assert_eq!(preset.linters, None);
    }

    #[test]
    fn test_unknown_linter_is_rejected() {
        let err = parse("linters: [eslint, jslint]\n").unwrap_err();
        assert!(err.to_string().contains("jslint"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lintforge.yaml");
        std::fs::write(&path, "framework: react\nlinters: [oxlint]\n").unwrap();

        let preset = Preset::load(&path).await.unwrap();
        assert_eq!(preset.framework, Some(Framework::React));
        assert_eq!(preset.linters, Some(vec![Linter::OxLint]));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Preset::load(&dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, GenerateError::Preset { .. }));
    }

    #[test]
    fn test_or_prefers_self() {
        let cli = Preset {
            framework: Some(Framework::React),
            ..Preset::default()
        };
        let file = Preset {
            framework: Some(Framework::Vue),
            module_type: Some(ModuleType::Cjs),
            ..Preset::default()
        };
        let merged = cli.or(file);
        assert_eq!(merged.framework, Some(Framework::React));
        assert_eq!(merged.module_type, Some(ModuleType::Cjs));
    }
}
