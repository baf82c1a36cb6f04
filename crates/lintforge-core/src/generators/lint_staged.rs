//! The `lint-staged` section of `package.json` and the `pre-commit` hook

use super::{hook_installer_patch, ConfigArtifact, Generated, HookScript};
use crate::manifest::ManifestPatch;
use crate::options::{GenerateOptions, Linter};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Glob pattern → commands run on staged files matching it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LintStagedConfig(pub IndexMap<String, Vec<String>>);

/// Staged-file task contributed by each linter
fn staged_task(linter: Linter) -> Option<(&'static str, &'static str)> {
    match linter {
        Linter::ESLint => Some(("*.{js,jsx,ts,tsx,vue}", "eslint --fix")),
        Linter::Prettier => Some((
            "*.{js,jsx,ts,tsx,vue,css,less,scss,html,json,md}",
            "prettier --write",
        )),
        Linter::StyleLint => Some(("*.{css,less,scss,vue}", "stylelint --fix")),
        Linter::OxLint => Some(("*.{js,jsx,ts,tsx}", "oxlint")),
        Linter::CommitLint | Linter::LintStaged => None,
    }
}

impl LintStagedConfig {
    pub fn new(options: &GenerateOptions) -> Self {
        // Fixed tool order keeps the section stable regardless of selection order
        let tasks = [
            Linter::ESLint,
            Linter::Prettier,
            Linter::StyleLint,
            Linter::OxLint,
        ]
        .into_iter()
        .filter(|linter| options.has(*linter))
        .filter_map(staged_task)
        .map(|(glob, command)| (glob.to_string(), vec![command.to_string()]))
        .collect();
        Self(tasks)
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(glob, commands)| (glob.clone(), Value::from(commands.clone())))
                .collect(),
        )
    }
}

pub fn generate(options: &GenerateOptions) -> Generated {
    let config = LintStagedConfig::new(options);
    let section = config.to_value();

    Generated {
        patches: vec![
            hook_installer_patch(),
            ManifestPatch::set("lint-staged", section),
        ],
        artifact: ConfigArtifact::LintStaged(config),
        hooks: vec![HookScript::new("pre-commit", "lint-staged")],
    }
}
