//! Runtime detection for Node.js

use semver::Version;
use std::process::Command;

/// Oldest Node.js release supported by ESLint flat configs
pub const MIN_NODE_VERSION: &str = "18.18.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    let output = Command::new("node").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "Node.js",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Node.js",
            version: None,
            available: false,
        },
    }
}

/// Parse version string, tolerating the leading `v` that `node --version` prints
pub fn parse_version(version_str: &str) -> Result<Version, semver::Error> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned)
}

/// Returns a warning if `installed` is older than `minimum`
pub fn check_compatibility(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = match parse_version(installed) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let minimum_ver = match parse_version(minimum) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if installed_ver < minimum_ver {
        Some(format!(
            "Node.js {} is older than {}, the minimum for ESLint flat configs. \
             Generated configs may not load until Node.js is upgraded.",
            installed, minimum
        ))
    } else {
        None
    }
}

/// Warning to show the user about the local Node.js, if any
pub fn node_advisory(info: &RuntimeInfo) -> Option<String> {
    if !info.available {
        return Some(
            "Node.js was not found. Install it from https://nodejs.org to run the generated tools."
                .to_string(),
        );
    }
    info.version
        .as_deref()
        .and_then(|version| check_compatibility(version, MIN_NODE_VERSION))
}
