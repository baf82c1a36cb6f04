//! lintforge CLI - lint and format config scaffolding for JavaScript projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use lintforge_core::tui::GenerateArgs;
use lintforge_core::{Framework, Linter, ModuleType, PackageManager, StyleProcessor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "lintforge")]
#[command(about = "CLI for scaffolding ESLint, Prettier, Stylelint, Commitlint, Oxlint and lint-staged configs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate config files and update package.json
    Generate(CliGenerateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliGenerateArgs {
    /// Project directory containing package.json (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Project framework
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Tools to configure (comma-separated: eslint,prettier,stylelint,commitlint,oxlint,lintstaged)
    #[arg(short, long, value_delimiter = ',')]
    pub linters: Option<Vec<Linter>>,

    /// Module syntax of generated JavaScript configs
    #[arg(short, long, value_enum)]
    pub module_type: Option<ModuleType>,

    /// CSS dialect for Stylelint
    #[arg(short, long, value_enum)]
    pub style_processor: Option<StyleProcessor>,

    /// YAML file answering some or all questions
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Package manager for the printed install command (detected by default)
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Skip the Node.js runtime check
    #[arg(long = "skip-runtime-check")]
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            directory: args.directory,
            framework: args.framework,
            linters: args.linters,
            module_type: args.module_type,
            style_processor: args.style_processor,
            preset: args.preset,
            package_manager: args.package_manager,
            skip_runtime_check: args.skip_runtime_check,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; prompts own the terminal otherwise
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand provided, default to generate behavior (interactive mode)
    let generate_args = match args.command {
        Some(Command::Generate(generate_args)) => generate_args,
        None => CliGenerateArgs::default(),
    };

    let result = lintforge_core::run(generate_args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_flags() {
        let args = Args::try_parse_from([
            "lintforge",
            "generate",
            "-f",
            "vue",
            "-l",
            "eslint,prettier,lint-staged",
            "-m",
            "cjs",
            "-s",
            "scss",
            "--yes",
        ])
        .unwrap();
        let Some(Command::Generate(generate)) = args.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(generate.framework, Some(Framework::Vue));
        assert_eq!(
            generate.linters,
            Some(vec![Linter::ESLint, Linter::Prettier, Linter::LintStaged])
        );
        assert_eq!(generate.module_type, Some(ModuleType::Cjs));
        assert_eq!(generate.style_processor, Some(StyleProcessor::Scss));
        assert!(generate.yes);
    }

    #[test]
    fn test_unknown_linter_is_rejected() {
        let err = Args::try_parse_from(["lintforge", "generate", "-l", "eslint,jshint"]).unwrap_err();
        assert!(err.to_string().contains("Unsupported linter: jshint"));
    }

    #[test]
    fn test_node_framework_aliases() {
        for value in ["node", "nodejs"] {
            let args = Args::try_parse_from(["lintforge", "generate", "-f", value]).unwrap();
            let Some(Command::Generate(generate)) = args.command else {
                panic!("expected generate subcommand");
            };
            assert_eq!(generate.framework, Some(Framework::NodeJS));
        }
    }
}
