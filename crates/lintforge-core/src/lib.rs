//! lintforge core - config generation for JavaScript lint and format tooling
//!
//! This library turns a set of answers (framework, tools, module format) into
//! config files for ESLint, Prettier, Stylelint, Commitlint, Oxlint and
//! lint-staged, and patches the project's `package.json` to match.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure generation** - [`options`], [`generators`], [`render`], [`deps`]
//! - **Layer 2: Run orchestration** - [`manifest`] and [`scaffold`] load, patch and write
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use lintforge_core::{generate_config, Framework, GenerateOptions, Linter, LinterSet, ModuleType};
//!
//! let options = GenerateOptions::new(
//!     Framework::React,
//!     LinterSet::from_iter([Linter::ESLint, Linter::Prettier]),
//!     ModuleType::Esm,
//! );
//! let report = generate_config(project_dir, &options, None).await?;
//! for step in report.next_steps() {
//!     println!("{step}");
//! }
//! ```

pub mod config;
pub mod deps;
pub mod error;
pub mod generators;
pub mod manifest;
pub mod options;
pub mod render;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{PackageManager, Preset};
pub use deps::resolve_dependencies;
pub use error::GenerateError;
pub use generators::{generate, ConfigArtifact, Generated};
pub use manifest::{Manifest, ManifestPatch};
pub use options::{Framework, GenerateOptions, Linter, LinterSet, ModuleType, StyleProcessor};
pub use scaffold::{generate_config, GenerationReport};

#[cfg(feature = "tui")]
pub use tui::run;
