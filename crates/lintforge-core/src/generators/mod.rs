//! Per-tool config generators
//!
//! Each generator is a pure function of [`GenerateOptions`]. It returns a
//! typed [`ConfigArtifact`] together with the `package.json` patches and git
//! hooks the tool needs; the orchestrator applies and writes them.

pub mod commitlint;
pub mod eslint;
pub mod lint_staged;
pub mod oxlint;
pub mod prettier;
pub mod stylelint;

pub use commitlint::CommitlintConfig;
pub use eslint::EslintConfig;
pub use lint_staged::LintStagedConfig;
pub use oxlint::OxlintConfig;
pub use prettier::PrettierConfig;
pub use stylelint::{StylelintConfig, StylelintOverride};

use crate::error::{GenerateError, Result};
use crate::manifest::ManifestPatch;
use crate::options::{GenerateOptions, Linter, ModuleType};
use crate::render::{render_module, to_json_string, JsModule, Node};
use serde::Serialize;
use std::path::PathBuf;

/// Directory holding husky hook scripts
pub const HOOKS_DIR: &str = ".husky";

/// Script that installs the git hooks
pub const HOOK_INSTALLER: &str = "husky";

/// Config file written for each linter; lint-staged lives in `package.json`
pub fn config_file_name(linter: Linter) -> Option<&'static str> {
    match linter {
        Linter::ESLint => Some("eslint.config.js"),
        Linter::Prettier => Some("prettier.config.js"),
        Linter::StyleLint => Some("stylelint.config.js"),
        Linter::CommitLint => Some("commitlint.config.js"),
        Linter::OxLint => Some(".oxlintrc.json"),
        Linter::LintStaged => None,
    }
}

/// A git hook script under `.husky/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookScript {
    pub hook: &'static str,
    pub command: String,
}

impl HookScript {
    pub fn new(hook: &'static str, command: impl Into<String>) -> Self {
        Self {
            hook,
            command: command.into(),
        }
    }

    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(HOOKS_DIR).join(self.hook)
    }

    pub fn contents(&self) -> String {
        format!("{}\n", self.command)
    }
}

/// The config produced for one tool
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigArtifact {
    Eslint(EslintConfig),
    Prettier(PrettierConfig),
    Stylelint(StylelintConfig),
    Commitlint(CommitlintConfig),
    Oxlint(OxlintConfig),
    LintStaged(LintStagedConfig),
}

impl ConfigArtifact {
    pub fn linter(&self) -> Linter {
        match self {
            ConfigArtifact::Eslint(_) => Linter::ESLint,
            ConfigArtifact::Prettier(_) => Linter::Prettier,
            ConfigArtifact::Stylelint(_) => Linter::StyleLint,
            ConfigArtifact::Commitlint(_) => Linter::CommitLint,
            ConfigArtifact::Oxlint(_) => Linter::OxLint,
            ConfigArtifact::LintStaged(_) => Linter::LintStaged,
        }
    }

    pub fn file_name(&self) -> Option<&'static str> {
        config_file_name(self.linter())
    }

    /// File contents, or `None` when the tool has no config file of its own
    pub fn render(&self, module_type: ModuleType) -> Result<Option<String>> {
        let text = match self {
            ConfigArtifact::Eslint(config) => render_module(&config.to_module(), module_type),
            ConfigArtifact::Prettier(config) => render_record(config, module_type, self.linter())?,
            ConfigArtifact::Stylelint(config) => {
                render_record(config, module_type, self.linter())?
            }
            ConfigArtifact::Commitlint(config) => {
                render_record(config, module_type, self.linter())?
            }
            ConfigArtifact::Oxlint(config) => {
                to_json_string(config).map_err(|source| render_error(self.linter(), source))?
            }
            ConfigArtifact::LintStaged(_) => return Ok(None),
        };
        Ok(Some(text))
    }
}

/// Output of a single generator
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub artifact: ConfigArtifact,
    pub patches: Vec<ManifestPatch>,
    pub hooks: Vec<HookScript>,
}

/// Run the generator for `linter`
pub fn generate(linter: Linter, options: &GenerateOptions) -> Generated {
    match linter {
        Linter::ESLint => eslint::generate(options),
        Linter::Prettier => prettier::generate(options),
        Linter::StyleLint => stylelint::generate(options),
        Linter::CommitLint => commitlint::generate(options),
        Linter::OxLint => oxlint::generate(options),
        Linter::LintStaged => lint_staged::generate(options),
    }
}

/// Run the generator for a tool given by its identifier
pub fn generate_by_id(id: &str, options: &GenerateOptions) -> Result<Generated> {
    let linter: Linter = id.parse()?;
    Ok(generate(linter, options))
}

/// Patch registering the hook installer as the `prepare` script
pub(crate) fn hook_installer_patch() -> ManifestPatch {
    ManifestPatch::merge_command("scripts.prepare", HOOK_INSTALLER)
}

fn render_record<T: Serialize>(
    record: &T,
    module_type: ModuleType,
    linter: Linter,
) -> Result<String> {
    let value = serde_json::to_value(record).map_err(|source| render_error(linter, source))?;
    Ok(render_module(
        &JsModule::exporting(Node::from(value)),
        module_type,
    ))
}

fn render_error(linter: Linter, source: serde_json::Error) -> GenerateError {
    GenerateError::Render {
        file: config_file_name(linter).unwrap_or("package.json"),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Framework, LinterSet};

    fn options(linters: &[Linter]) -> GenerateOptions {
        GenerateOptions::new(
            Framework::NodeJS,
            linters.iter().copied().collect::<LinterSet>(),
            ModuleType::Esm,
        )
    }

    #[test]
    fn test_each_generator_reports_its_linter() {
        let opts = options(&Linter::ALL);
        for linter in Linter::ALL {
            assert_eq!(generate(linter, &opts).artifact.linter(), linter);
        }
    }

    #[test]
    fn test_only_lint_staged_has_no_file() {
        for linter in Linter::ALL {
            assert_eq!(
                config_file_name(linter).is_none(),
                linter == Linter::LintStaged
            );
        }
    }

    #[test]
    fn test_lint_staged_renders_nothing() {
        let generated = generate(Linter::LintStaged, &options(&[Linter::LintStaged]));
        assert_eq!(generated.artifact.render(ModuleType::Esm).unwrap(), None);
    }

    #[test]
    fn test_generate_by_unknown_id_fails() {
        let err = generate_by_id("tslint", &options(&[])).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedTool(_)));
    }

    #[test]
    fn test_generate_by_id_dispatches() {
        let generated = generate_by_id("oxlint", &options(&[Linter::OxLint])).unwrap();
        assert_eq!(generated.artifact.file_name(), Some(".oxlintrc.json"));
    }

    #[test]
    fn test_hook_script_path_and_contents() {
        let hook = HookScript::new("pre-commit", "lint-staged");
        assert_eq!(hook.relative_path(), PathBuf::from(".husky/pre-commit"));
        assert_eq!(hook.contents(), "lint-staged\n");
    }
}
