//! Locating the pandoc executable.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable that overrides the executable path.
pub const BINARY_PATH_ENV: &str = "PANDOC_BINARY_PATH";

/// Location checked when nothing else is configured.
pub const DEFAULT_BINARY_PATH: &str = "/usr/bin/pandoc";

/// Name searched for on `PATH` as a last resort.
pub const BINARY_NAME: &str = "pandoc";

/// Resolve the executable path, failing if it does not exist.
///
/// An explicit `configured` path, or else `PANDOC_BINARY_PATH`, is used as-is
/// and must exist. With neither set, `/usr/bin/pandoc` is tried and then
/// `pandoc` on `PATH`.
pub fn resolve_binary(configured: Option<&Path>) -> Result<PathBuf> {
    let env_path = std::env::var_os(BINARY_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_binary_with(configured, env_path)
}

pub(crate) fn resolve_binary_with(
    configured: Option<&Path>,
    env_path: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = configured.map(Path::to_path_buf).or(env_path) {
        return if path.exists() {
            Ok(path)
        } else {
            Err(Error::executable_not_found(path))
        };
    }

    let default = PathBuf::from(DEFAULT_BINARY_PATH);
    if default.exists() {
        return Ok(default);
    }

    which::which(BINARY_NAME).map_err(|_| Error::executable_not_found(default))
}

/// Information about the pandoc executable.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Whether the executable was found.
    pub available: bool,
    /// First line of `--version` output, if it could be run.
    pub version: Option<String>,
    /// Resolved path to the executable.
    pub path: Option<PathBuf>,
}

/// Check whether pandoc can be found and report its version.
pub fn check_tool(configured: Option<&Path>) -> ToolInfo {
    let Ok(path) = resolve_binary(configured) else {
        return ToolInfo {
            available: false,
            version: None,
            path: None,
        };
    };

    let version = std::process::Command::new(&path)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            String::from_utf8_lossy(&o.stdout)
                .lines()
                .next()
                .map(|s| s.to_string())
        });

    ToolInfo {
        available: true,
        version,
        path: Some(path),
    }
}
