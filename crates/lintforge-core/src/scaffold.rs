//! Generation run: load the manifest, run generators, write files, save

use crate::config::PackageManager;
use crate::deps::resolve_dependencies;
use crate::error::{GenerateError, Result};
use crate::generators::{self, Generated};
use crate::manifest::Manifest;
use crate::options::{GenerateOptions, Linter};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// What a staged file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Config(Linter),
    Hook(&'static str),
}

/// A file waiting to be written, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub kind: FileKind,
    pub relative_path: PathBuf,
    pub contents: String,
}

impl StagedFile {
    /// Human-readable name used in status lines
    pub fn label(&self) -> String {
        match self.kind {
            FileKind::Config(linter) => format!("{} config file", linter.id()),
            FileKind::Hook(hook) => format!(".husky/{} hook", hook),
        }
    }
}

/// Result of writing one staged file
#[derive(Debug)]
pub struct WriteOutcome {
    pub kind: FileKind,
    pub label: String,
    pub path: PathBuf,
    pub error: Option<GenerateError>,
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// A manifest patch that could not be applied
#[derive(Debug)]
pub struct DroppedPatch {
    pub linter: Linter,
    pub error: GenerateError,
}

/// Everything produced in memory before touching the filesystem
#[derive(Debug, Default)]
pub struct Plan {
    pub files: Vec<StagedFile>,
    /// Tools whose whole output lives in `package.json`
    pub manifest_sections: Vec<Linter>,
    pub dropped_patches: Vec<DroppedPatch>,
    pub hooks_registered: bool,
}

/// Summary of a finished run
#[derive(Debug)]
pub struct GenerationReport {
    pub outcomes: Vec<WriteOutcome>,
    pub manifest_sections: Vec<Linter>,
    pub dropped_patches: Vec<DroppedPatch>,
    pub manifest_path: PathBuf,
    pub dependencies: Vec<&'static str>,
    pub package_manager: PackageManager,
    pub hooks_registered: bool,
}

impl GenerationReport {
    pub fn written(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Numbered next-step commands for the user
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = Vec::new();
        if !self.dependencies.is_empty() {
            steps.push(
                self.package_manager
                    .install_dev_command(&self.dependencies),
            );
        }
        if self.hooks_registered {
            steps.push(self.package_manager.run_script_command("prepare"));
        }
        steps
    }
}

/// Run every selected generator against `manifest`, in selection order
///
/// Patches are applied immediately; a failing patch is recorded and dropped.
pub fn plan(options: &GenerateOptions, manifest: &mut Manifest) -> Result<Plan> {
    let mut plan = Plan::default();

    for linter in &options.linters {
        let Generated {
            artifact,
            patches,
            hooks,
        } = generators::generate(linter, options);
        debug!(linter = linter.id(), patches = patches.len(), "generated config");

        for patch in &patches {
            match manifest.apply(patch) {
                Ok(()) if patch.path() == "scripts.prepare" => plan.hooks_registered = true,
                Ok(()) => {}
                Err(error) => {
                    debug!(linter = linter.id(), path = patch.path(), %error, "dropping manifest patch");
                    plan.dropped_patches.push(DroppedPatch { linter, error });
                }
            }
        }

        match (artifact.file_name(), artifact.render(options.module_type)?) {
            (Some(file_name), Some(contents)) => plan.files.push(StagedFile {
                kind: FileKind::Config(linter),
                relative_path: PathBuf::from(file_name),
                contents,
            }),
            _ => plan.manifest_sections.push(linter),
        }

        plan.files.extend(hooks.into_iter().map(|hook| StagedFile {
            kind: FileKind::Hook(hook.hook),
            relative_path: hook.relative_path(),
            contents: hook.contents(),
        }));
    }

    Ok(plan)
}

/// Paths a run with `options` would write, relative to the project directory
pub fn planned_paths(options: &GenerateOptions) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for linter in &options.linters {
        let generated = generators::generate(linter, options);
        if let Some(file_name) = generated.artifact.file_name() {
            paths.push(PathBuf::from(file_name));
        }
        paths.extend(generated.hooks.iter().map(|hook| hook.relative_path()));
    }
    paths
}

/// Write staged files; a failure is recorded and the rest still get written
pub async fn write_files(project_dir: &Path, files: Vec<StagedFile>) -> Vec<WriteOutcome> {
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        let path = project_dir.join(&file.relative_path);
        let label = file.label();
        let error = write_file(&path, &file.contents).await.err();
        match &error {
            Some(e) => debug!(path = %path.display(), error = %e, "failed to write file"),
            None => debug!(path = %path.display(), "wrote file"),
        }
        outcomes.push(WriteOutcome {
            kind: file.kind,
            label,
            path,
            error,
        });
    }

    outcomes
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    let to_error = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(to_error)?;
    }
    fs::write(path, contents).await.map_err(to_error)
}

/// Generate configs for `options` inside `project_dir`
///
/// Fails only when the manifest cannot be loaded, rendered or saved.
/// Individual file writes and manifest patches that fail are reported in
/// the returned [`GenerationReport`].
pub async fn generate_config(
    project_dir: &Path,
    options: &GenerateOptions,
    package_manager: Option<PackageManager>,
) -> Result<GenerationReport> {
    let mut manifest = Manifest::load(project_dir).await?;
    debug!(path = %manifest.path().display(), "loaded manifest");

    let plan = plan(options, &mut manifest)?;
    let outcomes = write_files(project_dir, plan.files).await;

    manifest.save().await?;
    debug!(path = %manifest.path().display(), "saved manifest");

    let package_manager = package_manager
        .unwrap_or_else(|| PackageManager::detect(project_dir, manifest.package_manager()));

    Ok(GenerationReport {
        outcomes,
        manifest_sections: plan.manifest_sections,
        dropped_patches: plan.dropped_patches,
        manifest_path: manifest.path().to_path_buf(),
        dependencies: resolve_dependencies(options),
        package_manager,
        hooks_registered: plan.hooks_registered,
    })
}
