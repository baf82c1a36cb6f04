//! Package manager detection for the printed install instructions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Lockfiles in order of preference
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Parse the `packageManager` manifest field (`pnpm@9.1.0`)
    pub fn from_manifest_field(field: &str) -> Option<Self> {
        let name = field.split('@').next().unwrap_or(field).trim();
        match name {
            "npm" => Some(PackageManager::Npm),
            "pnpm" => Some(PackageManager::Pnpm),
            "yarn" => Some(PackageManager::Yarn),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Detect from the manifest field, then lockfiles; defaults to npm
    pub fn detect(project_dir: &Path, manifest_field: Option<&str>) -> Self {
        if let Some(pm) = manifest_field.and_then(Self::from_manifest_field) {
            return pm;
        }
        for (lockfile, pm) in LOCKFILES {
            if project_dir.join(lockfile).is_file() {
                return *pm;
            }
        }
        PackageManager::Npm
    }

    /// Command installing `packages` as dev dependencies
    pub fn install_dev_command(&self, packages: &[&str]) -> String {
        let prefix = match self {
            PackageManager::Npm => "npm install -D",
            PackageManager::Pnpm => "pnpm add -D",
            PackageManager::Yarn => "yarn add -D",
            PackageManager::Bun => "bun add -d",
        };
        if packages.is_empty() {
            prefix.to_string()
        } else {
            format!("{} {}", prefix, packages.join(" "))
        }
    }

    /// Command running a package.json script
    pub fn run_script_command(&self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {}", script),
            _ => format!("{} run {}", self.name(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
