//! `commitlint.config.js` and the `commit-msg` hook

use super::{hook_installer_patch, ConfigArtifact, Generated, HookScript};
use crate::options::GenerateOptions;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitlintConfig {
    pub extends: Vec<String>,
}

impl Default for CommitlintConfig {
    fn default() -> Self {
        Self {
            extends: vec!["@commitlint/config-conventional".to_string()],
        }
    }
}

pub fn generate(_options: &GenerateOptions) -> Generated {
    Generated {
        artifact: ConfigArtifact::Commitlint(CommitlintConfig::default()),
        patches: vec![hook_installer_patch()],
        hooks: vec![HookScript::new("commit-msg", "commitlint --edit $1")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestPatch;
    use crate::options::{Framework, Linter, LinterSet, ModuleType};

    fn options(module_type: ModuleType) -> GenerateOptions {
        GenerateOptions::new(
            Framework::NodeJS,
            LinterSet::from_iter([Linter::CommitLint]),
            module_type,
        )
    }

    #[test]
    fn test_renders_conventional_preset() {
        let text = generate(&options(ModuleType::Esm))
            .artifact
            .render(ModuleType::Esm)
            .unwrap()
            .unwrap();
        assert_eq!(
            text,
            "export default {\n    extends: [\n        '@commitlint/config-conventional',\n    ],\n};\n"
        );
    }

    #[test]
    fn test_cjs_export() {
        let text = generate(&options(ModuleType::Cjs))
            .artifact
            .render(ModuleType::Cjs)
            .unwrap()
            .unwrap();
        assert!(text.starts_with("module.exports = {"));
    }

    #[test]
    fn test_registers_commit_msg_hook() {
        let generated = generate(&options(ModuleType::Esm));
        assert_eq!(
            generated.hooks,
            vec![HookScript::new("commit-msg", "commitlint --edit $1")]
        );
        assert_eq!(
            generated.patches,
            vec![ManifestPatch::merge_command("scripts.prepare", "husky")]
        );
    }
}
