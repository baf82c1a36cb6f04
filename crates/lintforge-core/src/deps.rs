//! Dev dependencies required by the selected tools

use crate::options::{Framework, GenerateOptions, Linter, StyleProcessor};

/// Packages to install, in a stable order driven by the selection
pub fn resolve_dependencies(options: &GenerateOptions) -> Vec<&'static str> {
    let mut deps = Vec::new();

    if options.has(Linter::ESLint) {
        // typescript-eslint drives the flat config even for plain JS projects
        deps.extend([
            "eslint",
            "@eslint/js",
            "globals",
            "typescript",
            "typescript-eslint",
        ]);
        if options.has(Linter::Prettier) {
            deps.push("eslint-plugin-prettier");
        }
        match options.framework {
            Framework::Vue => deps.push("eslint-plugin-vue"),
            Framework::React => deps.extend(["eslint-plugin-react", "eslint-plugin-react-hooks"]),
            Framework::NodeJS => {}
        }
    }

    if options.has(Linter::Prettier) {
        deps.push("prettier");
    }

    if options.has(Linter::StyleLint) {
        deps.extend([
            "stylelint",
            "stylelint-config-standard",
            "stylelint-config-recess-order",
        ]);
        match options.style_processor() {
            StyleProcessor::Scss => deps.push("stylelint-config-recommended-scss"),
            StyleProcessor::Less => deps.push("stylelint-config-recommended-less"),
            StyleProcessor::Css => {}
        }
    }

    if options.has(Linter::CommitLint) {
        deps.extend(["@commitlint/cli", "@commitlint/config-conventional"]);
    }

    if options.has(Linter::OxLint) {
        deps.push("oxlint");
    }

    if options.has(Linter::LintStaged) {
        deps.extend(["husky", "lint-staged"]);
    }

    deps
}
