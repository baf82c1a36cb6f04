//! `prettier.config.js`

use super::{ConfigArtifact, Generated};
use crate::manifest::ManifestPatch;
use crate::options::GenerateOptions;
use crate::render::TAB_WIDTH;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub print_width: u32,
    pub tab_width: usize,
    pub use_tabs: bool,
    pub semi: bool,
    pub single_quote: bool,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            print_width: 120,
            tab_width: TAB_WIDTH,
            use_tabs: false,
            semi: true,
            single_quote: true,
        }
    }
}

pub fn generate(_options: &GenerateOptions) -> Generated {
    Generated {
        artifact: ConfigArtifact::Prettier(PrettierConfig::default()),
        patches: vec![ManifestPatch::script("prettier", "prettier --write .")],
        hooks: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Framework, Linter, LinterSet, ModuleType};

    fn render(module_type: ModuleType) -> String {
        let options = GenerateOptions::new(
            Framework::React,
            LinterSet::from_iter([Linter::Prettier]),
            module_type,
        );
        generate(&options)
            .artifact
            .render(module_type)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_esm_default_export() {
        assert_eq!(
            render(ModuleType::Esm),
            "export default {\n    printWidth: 120,\n    tabWidth: 4,\n    useTabs: false,\n    semi: true,\n    singleQuote: true,\n};\n"
        );
    }

    #[test]
    fn test_cjs_module_exports() {
        let text = render(ModuleType::Cjs);
        assert!(text.starts_with("module.exports = {\n"));
        assert!(!text.contains("export default"));
    }
}
