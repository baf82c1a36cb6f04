//! `stylelint.config.js`

use super::{ConfigArtifact, Generated};
use crate::manifest::ManifestPatch;
use crate::options::{Framework, GenerateOptions, StyleProcessor};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylelintConfig {
    pub extends: Vec<String>,
    pub overrides: Vec<StylelintOverride>,
    pub rules: IndexMap<String, Value>,
}

/// Custom syntax applied to a set of files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylelintOverride {
    pub files: Vec<String>,
    pub custom_syntax: String,
}

impl StylelintOverride {
    fn new(files: &str, custom_syntax: &str) -> Self {
        Self {
            files: vec![files.to_string()],
            custom_syntax: custom_syntax.to_string(),
        }
    }
}

impl StylelintConfig {
    pub fn new(options: &GenerateOptions) -> Self {
        let mut config = Self {
            extends: vec![
                "stylelint-config-standard".to_string(),
                "stylelint-config-recess-order".to_string(),
            ],
            overrides: Vec::new(),
            rules: IndexMap::new(),
        };

        match options.style_processor() {
            StyleProcessor::Scss => {
                config
                    .extends
                    .push("stylelint-config-recommended-scss".to_string());
                config
                    .overrides
                    .push(StylelintOverride::new("**/*.(css|scss|vue)", "postcss-scss"));
            }
            StyleProcessor::Less => {
                config
                    .extends
                    .push("stylelint-config-recommended-less".to_string());
                config
                    .overrides
                    .push(StylelintOverride::new("**/*.(css|less|vue)", "postcss-less"));
            }
            StyleProcessor::Css => {}
        }

        // Vue single-file components need the HTML parser whatever the dialect
        if options.framework == Framework::Vue {
            config
                .overrides
                .push(StylelintOverride::new("**/*.(html|vue)", "postcss-html"));
        }

        config
    }
}

pub fn generate(options: &GenerateOptions) -> Generated {
    Generated {
        artifact: ConfigArtifact::Stylelint(StylelintConfig::new(options)),
        patches: vec![ManifestPatch::script(
            "stylelint",
            "stylelint --fix \"**/*.{css,less,scss,vue}\"",
        )],
        hooks: Vec::new(),
    }
}
