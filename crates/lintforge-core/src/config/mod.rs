//! Run configuration: answer presets and package manager detection

pub mod package_manager;
pub mod preset;

pub use package_manager::PackageManager;
pub use preset::Preset;
