//! Shared fixtures for integration tests.
//!
//! Provides a scripted stand-in for pandoc so the CLI and facade can be
//! exercised without pandoc installed, plus [`real_pandoc`] for the tests
//! that want the genuine executable.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tempfile::TempDir;

pub const SAMPLE_MARKDOWN: &str =
    "# My Header\n\n* bullet parent one\n  * bullet child\n* bullet parent two";

/// The exec crate's fake pandoc: answers `--version`, exits 22 for
/// `--to=bbbb`/`--to=cccc`, warns on stderr for `--to=warn`, and otherwise
/// copies its input (file or stdin) to the `--output=` path.
const SCRIPT: &str = include_str!("../../crates/pandoc-bridge-exec/src/fake_pandoc.sh");

static FAKE_BIN: OnceLock<(TempDir, PathBuf)> = OnceLock::new();

/// Path to the fake pandoc script, written once per test binary.
pub fn fake_pandoc() -> &'static Path {
    let (_, path) = FAKE_BIN.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pandoc");
        std::fs::write(&path, SCRIPT).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path
}

/// Write a config file pointing at `binary`.
pub fn config_for(dir: &Path, binary: &Path, mode: &str) -> PathBuf {
    config_with_policy(dir, binary, mode, "strict")
}

/// Write a config file pointing at `binary` with an explicit stderr policy.
pub fn config_with_policy(dir: &Path, binary: &Path, mode: &str, policy: &str) -> PathBuf {
    let path = dir.join("pandoc-bridge.toml");
    let contents = format!(
        "[pandoc]\nbinary_path = {:?}\nmode = {:?}\nstderr_policy = {:?}\n",
        binary.display().to_string(),
        mode,
        policy
    );
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("input.md");
    std::fs::write(&path, SAMPLE_MARKDOWN).unwrap();
    path
}

/// The installed pandoc, or `None` to let a test skip itself.
pub fn real_pandoc() -> Option<PathBuf> {
    which::which("pandoc").ok()
}
