//! Choice sets offered by the wizard and the request built from them

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[value(name = "node", alias = "nodejs")]
    #[serde(rename = "node", alias = "nodejs")]
    NodeJS,
    React,
    Vue,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::NodeJS, Framework::React, Framework::Vue];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::NodeJS => "Node.js",
            Framework::React => "React",
            Framework::Vue => "Vue",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A selectable lint/format tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Linter {
    ESLint,
    Prettier,
    StyleLint,
    CommitLint,
    OxLint,
    LintStaged,
}

impl Linter {
    pub const ALL: [Linter; 6] = [
        Linter::ESLint,
        Linter::Prettier,
        Linter::StyleLint,
        Linter::CommitLint,
        Linter::OxLint,
        Linter::LintStaged,
    ];

    /// Identifier used on the command line and in presets
    pub fn id(&self) -> &'static str {
        match self {
            Linter::ESLint => "eslint",
            Linter::Prettier => "prettier",
            Linter::StyleLint => "stylelint",
            Linter::CommitLint => "commitlint",
            Linter::OxLint => "oxlint",
            Linter::LintStaged => "lintstaged",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Linter::ESLint => "ESLint",
            Linter::Prettier => "Prettier",
            Linter::StyleLint => "StyleLint",
            Linter::CommitLint => "CommitLint",
            Linter::OxLint => "OxLint",
            Linter::LintStaged => "Lint-staged",
        }
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Linter {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eslint" => Ok(Linter::ESLint),
            "prettier" => Ok(Linter::Prettier),
            "stylelint" => Ok(Linter::StyleLint),
            "commitlint" => Ok(Linter::CommitLint),
            "oxlint" => Ok(Linter::OxLint),
            "lintstaged" | "lint-staged" => Ok(Linter::LintStaged),
            _ => Err(GenerateError::UnsupportedTool(s.to_string())),
        }
    }
}

impl TryFrom<String> for Linter {
    type Error = GenerateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Linter> for String {
    fn from(linter: Linter) -> Self {
        linter.id().to_string()
    }
}

/// Import/export syntax of generated JavaScript files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Esm,
    Cjs,
}

impl ModuleType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleType::Esm => "ESM (ECMAScript Modules)",
            ModuleType::Cjs => "CJS (CommonJS)",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// CSS dialect linted by Stylelint
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleProcessor {
    #[default]
    Css,
    Scss,
    Less,
}

impl StyleProcessor {
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleProcessor::Css => "CSS",
            StyleProcessor::Scss => "SCSS",
            StyleProcessor::Less => "LESS",
        }
    }
}

impl fmt::Display for StyleProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered set of selected linters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinterSet(Vec<Linter>);

impl LinterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a linter, keeping the first position if it is already present
    pub fn insert(&mut self, linter: Linter) -> bool {
        if self.0.contains(&linter) {
            return false;
        }
        self.0.push(linter);
        true
    }

    pub fn contains(&self, linter: Linter) -> bool {
        self.0.contains(&linter)
    }

    pub fn iter(&self) -> impl Iterator<Item = Linter> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Linter] {
        &self.0
    }
}

impl FromIterator<Linter> for LinterSet {
    fn from_iter<I: IntoIterator<Item = Linter>>(iter: I) -> Self {
        let mut set = LinterSet::new();
        for linter in iter {
            set.insert(linter);
        }
        set
    }
}

impl<'a> IntoIterator for &'a LinterSet {
    type Item = Linter;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Linter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Everything a run needs to know about the user's selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub framework: Framework,
    pub linters: LinterSet,
    pub module_type: ModuleType,
    /// Only read when Stylelint is selected
    pub style_processor: Option<StyleProcessor>,
}

impl GenerateOptions {
    pub fn new(framework: Framework, linters: LinterSet, module_type: ModuleType) -> Self {
        Self {
            framework,
            linters,
            module_type,
            style_processor: None,
        }
    }

    pub fn with_style_processor(mut self, style_processor: StyleProcessor) -> Self {
        self.style_processor = Some(style_processor);
        self
    }

    pub fn has(&self, linter: Linter) -> bool {
        self.linters.contains(linter)
    }

    /// Style processor in effect, falling back to plain CSS
    pub fn style_processor(&self) -> StyleProcessor {
        self.style_processor.unwrap_or_default()
    }
}
