//! Charm-style CLI prompts using cliclack

use crate::config::{PackageManager, Preset};
use crate::manifest::Manifest;
use crate::options::{Framework, GenerateOptions, Linter, LinterSet, ModuleType, StyleProcessor};
use crate::runtime::check;
use crate::scaffold::{self, GenerationReport};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Project directory containing package.json
    pub directory: Option<PathBuf>,

    /// Framework, prompted when absent
    pub framework: Option<Framework>,

    /// Tools to configure, prompted when absent
    pub linters: Option<Vec<Linter>>,

    /// Module syntax, prompted when absent
    pub module_type: Option<ModuleType>,

    /// Style processor, prompted when Stylelint is selected and this is absent
    pub style_processor: Option<StyleProcessor>,

    /// YAML file with answers
    pub preset: Option<PathBuf>,

    /// Package manager used in the printed instructions
    pub package_manager: Option<PackageManager>,

    /// Skip the Node.js runtime check
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl From<&GenerateArgs> for Preset {
    fn from(args: &GenerateArgs) -> Self {
        Preset {
            framework: args.framework,
            linters: args.linters.clone(),
            module_type: args.module_type,
            style_processor: args.style_processor,
            package_manager: args.package_manager,
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: GenerateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("lintforge {}", cli_version))?;

    // Step 1: Locate the project
    let project_dir = select_directory(&args)?;

    // Step 2: Check Node.js (advisory)
    if !args.skip_runtime_check {
        check_runtime()?;
    } else {
        cliclack::log::info("Skipping runtime check")?;
    }

    // Step 3: Collect answers from flags, preset and prompts
    let answers = load_answers(&args).await?;
    let package_manager = answers.package_manager;
    let options = complete_options(answers, args.yes)?;

    // Step 4: Confirm overwriting existing configs
    confirm_overwrite(&project_dir, &options, args.yes)?;

    // Step 5: Generate
    let spinner = cliclack::spinner();
    spinner.start("Generating configs...");
    let report = match scaffold::generate_config(&project_dir, &options, package_manager).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Generation failed");
            return Err(e).context("Config generation aborted");
        }
    };
    spinner.stop(format!("Updated {}", report.manifest_path.display()));

    // Step 6: Per-file status and next steps
    report_outcomes(&report)?;
    print_next_steps(&report)?;

    Ok(())
}

fn select_directory(args: &GenerateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.join(Manifest::FILE_NAME).is_file() {
        anyhow::bail!(
            "No {} found in {}. Run `npm init` first.",
            Manifest::FILE_NAME,
            path.display()
        );
    }

    cliclack::log::info(format!("Using project: {}", path.display()))?;
    Ok(path)
}

fn check_runtime() -> Result<()> {
    let node = check::check_node();
    match check::node_advisory(&node) {
        Some(warning) => cliclack::log::warning(warning)?,
        None => cliclack::log::success(format!(
            "{} installed ({})",
            node.name,
            node.version.as_deref().unwrap_or("unknown")
        ))?,
    }
    Ok(())
}

async fn load_answers(args: &GenerateArgs) -> Result<Preset> {
    let from_flags = Preset::from(args);
    let from_file = match &args.preset {
        Some(path) => {
            cliclack::log::info(format!("Using preset {}", path.display()))?;
            Preset::load(path).await?
        }
        None => Preset::default(),
    };
    Ok(from_flags.or(from_file))
}

/// Fill in whatever the flags and preset left open
fn complete_options(answers: Preset, yes: bool) -> Result<GenerateOptions> {
    let framework = select_framework(answers.framework, yes)?;
    let linters = select_linters(answers.linters, yes)?;
    let module_type = select_module_type(answers.module_type, yes)?;

    let mut options = GenerateOptions::new(framework, linters, module_type);
    if options.has(Linter::StyleLint) {
        let processor = select_style_processor(answers.style_processor, yes)?;
        options = options.with_style_processor(processor);
    }

    Ok(options)
}

fn select_framework(answer: Option<Framework>, yes: bool) -> Result<Framework> {
    if let Some(framework) = answer {
        cliclack::log::info(format!("Framework: {}", framework))?;
        return Ok(framework);
    }
    if yes {
        return Ok(Framework::NodeJS);
    }

    let mut select = cliclack::select("Select your framework");
    for framework in Framework::ALL {
        select = select.item(framework, framework.display_name(), "");
    }
    Ok(select.interact()?)
}

fn select_linters(answer: Option<Vec<Linter>>, yes: bool) -> Result<LinterSet> {
    if let Some(linters) = answer {
        let set: LinterSet = linters.into_iter().collect();
        let names: Vec<&str> = set.iter().map(|l| l.display_name()).collect();
        cliclack::log::info(format!("Tools: {}", names.join(", ")))?;
        return Ok(set);
    }
    if yes {
        return Ok(LinterSet::from_iter([Linter::ESLint, Linter::Prettier]));
    }

    let mut multi = cliclack::multiselect("Select linting tools");
    for linter in Linter::ALL {
        multi = multi.item(linter, linter.display_name(), "");
    }
    let selected: Vec<Linter> = multi.required(false).interact()?;

    if selected.is_empty() {
        cliclack::log::warning("No tools selected, only package.json will be rewritten")?;
    }
    Ok(selected.into_iter().collect())
}

fn select_module_type(answer: Option<ModuleType>, yes: bool) -> Result<ModuleType> {
    if let Some(module_type) = answer {
        cliclack::log::info(format!("Module type: {}", module_type))?;
        return Ok(module_type);
    }
    if yes {
        return Ok(ModuleType::Esm);
    }

    Ok(cliclack::select("Select module type")
        .item(ModuleType::Esm, ModuleType::Esm.display_name(), "")
        .item(ModuleType::Cjs, ModuleType::Cjs.display_name(), "")
        .interact()?)
}

fn select_style_processor(answer: Option<StyleProcessor>, yes: bool) -> Result<StyleProcessor> {
    if let Some(processor) = answer {
        cliclack::log::info(format!("Style processor: {}", processor))?;
        return Ok(processor);
    }
    if yes {
        return Ok(StyleProcessor::default());
    }

    Ok(cliclack::select("Select style processor")
        .item(StyleProcessor::Css, StyleProcessor::Css.display_name(), "")
        .item(StyleProcessor::Scss, StyleProcessor::Scss.display_name(), "")
        .item(StyleProcessor::Less, StyleProcessor::Less.display_name(), "")
        .interact()?)
}

fn confirm_overwrite(project_dir: &Path, options: &GenerateOptions, yes: bool) -> Result<()> {
    let existing: Vec<String> = scaffold::planned_paths(options)
        .into_iter()
        .filter(|p| project_dir.join(p).exists())
        .map(|p| p.display().to_string())
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    cliclack::log::warning(format!("Will overwrite: {}", existing.join(", ")))?;

    // Auto-confirm with --yes flag
    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Continue anyway?")
            .initial_value(true)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(())
}

fn report_outcomes(report: &GenerationReport) -> Result<()> {
    for outcome in &report.outcomes {
        match &outcome.error {
            None => cliclack::log::success(format!("Generated {}", outcome.label))?,
            Some(e) => cliclack::log::error(format!("Failed to generate {}: {}", outcome.label, e))?,
        }
    }

    for linter in &report.manifest_sections {
        cliclack::log::success(format!("Generated {} in package.json", linter.id()))?;
    }

    for dropped in &report.dropped_patches {
        cliclack::log::error(format!(
            "Skipped package.json update for {}: {}",
            dropped.linter.id(),
            dropped.error
        ))?;
    }

    Ok(())
}

fn print_next_steps(report: &GenerationReport) -> Result<()> {
    let steps = report.next_steps();

    if steps.is_empty() {
        cliclack::outro("Nothing to install.")?;
        return Ok(());
    }

    println!();
    println!("  {}", "Please run the following commands:".yellow());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy linting!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_preset() {
        let args = GenerateArgs {
            framework: Some(Framework::Vue),
            linters: Some(vec![Linter::ESLint]),
            ..GenerateArgs::default()
        };
        let preset = Preset::from(&args);
        assert_eq!(preset.framework, Some(Framework::Vue));
        assert_eq!(preset.linters, Some(vec![Linter::ESLint]));
        assert_eq!(preset.module_type, None);
    }
}
