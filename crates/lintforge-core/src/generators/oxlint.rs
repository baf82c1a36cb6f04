//! `.oxlintrc.json`

use super::{ConfigArtifact, Generated};
use crate::manifest::ManifestPatch;
use crate::options::{Framework, GenerateOptions};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OxlintConfig {
    pub extends: Vec<String>,
    pub rules: IndexMap<String, String>,
}

/// Rules switched off for each framework
fn disabled_rules(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::Vue => &[
            "suspicious/no-template-curly-in-string",
            "suspicious/no-array-access",
        ],
        Framework::React => &[
            "suspicious/no-jsx-spread",
            "suspicious/no-template-curly-in-string",
        ],
        Framework::NodeJS => &["suspicious/no-process-env", "style/no-mixed-requires"],
    }
}

impl OxlintConfig {
    pub fn new(framework: Framework) -> Self {
        Self {
            extends: vec!["recommended".to_string()],
            rules: disabled_rules(framework)
                .iter()
                .map(|rule| (rule.to_string(), "off".to_string()))
                .collect(),
        }
    }
}

pub fn generate(options: &GenerateOptions) -> Generated {
    Generated {
        artifact: ConfigArtifact::Oxlint(OxlintConfig::new(options.framework)),
        patches: vec![ManifestPatch::script("oxlint", "oxlint .")],
        hooks: Vec::new(),
    }
}
