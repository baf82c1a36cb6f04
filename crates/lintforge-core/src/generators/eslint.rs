//! `eslint.config.js` (flat config through typescript-eslint)

use super::Generated;
use crate::generators::ConfigArtifact;
use crate::manifest::ManifestPatch;
use crate::options::{Framework, GenerateOptions, Linter};
use crate::render::{Import, JsModule, Node, Property};

const IGNORES: [&str; 3] = ["node_modules", "dist", "public"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EslintConfig {
    pub framework: Framework,
    /// Append eslint-plugin-prettier's recommended config
    pub prettier: bool,
}

impl EslintConfig {
    pub fn new(options: &GenerateOptions) -> Self {
        Self {
            framework: options.framework,
            prettier: options.has(Linter::Prettier),
        }
    }

    pub fn to_module(&self) -> JsModule {
        let mut imports = vec![
            Import::new("eslint", "@eslint/js"),
            Import::new("globals", "globals"),
            Import::new("tseslint", "typescript-eslint"),
        ];
        match self.framework {
            Framework::Vue => imports.push(Import::new("eslintPluginVue", "eslint-plugin-vue")),
            Framework::React => {
                imports.push(Import::new("eslintPluginReact", "eslint-plugin-react"));
                imports.push(Import::new(
                    "eslintPluginReactHooks",
                    "eslint-plugin-react-hooks",
                ));
            }
            Framework::NodeJS => {}
        }
        if self.prettier {
            imports.push(Import::new(
                "eslintPluginPrettierRecommended",
                "eslint-plugin-prettier/recommended",
            ));
        }

        let mut configs = vec![
            Node::object([("ignores", Node::strings(&IGNORES))]),
            Node::path(&["eslint", "configs", "recommended"]),
            Node::spread(Node::path(&["tseslint", "configs", "recommended"])),
        ];
        configs.extend(framework_block(self.framework));
        if self.prettier {
            configs.push(Node::path(&["eslintPluginPrettierRecommended"]));
        }

        JsModule {
            imports,
            export: Node::call(&["tseslint", "config"], configs),
        }
    }
}

fn framework_block(framework: Framework) -> Vec<Node> {
    match framework {
        Framework::Vue => vec![Node::spread(Node::path(&[
            "eslintPluginVue",
            "configs",
            "flat/recommended",
        ]))],
        Framework::React => vec![
            Node::spread(Node::path(&["eslintPluginReact", "configs", "recommended"])),
            Node::spread(Node::path(&[
                "eslintPluginReactHooks",
                "configs",
                "recommended",
            ])),
        ],
        Framework::NodeJS => vec![Node::object([(
            "languageOptions",
            Node::object([(
                "globals",
                Node::Object(vec![Property::Spread(Node::path(&["globals", "node"]))]),
            )]),
        )])],
    }
}

pub fn generate(options: &GenerateOptions) -> Generated {
    Generated {
        artifact: ConfigArtifact::Eslint(EslintConfig::new(options)),
        patches: vec![ManifestPatch::script("eslint", "eslint --fix .")],
        hooks: Vec::new(),
    }
}
