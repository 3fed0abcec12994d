//! A scripted stand-in for pandoc used by the unit tests.
//!
//! The script answers `--version`, exits 22 for `--to=bbbb` (after draining
//! stdin) and `--to=cccc` (without reading stdin), warns on stderr for
//! `--to=warn`, and otherwise copies its input (file or stdin) to the
//! `--output=` path. Its argv is recorded next to the output as `<out>.args`.
//! The root integration tests include the same script.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tempfile::TempDir;

pub(crate) const SAMPLE_MARKDOWN: &str = "# My Header\n\n* bullet parent one\n  * bullet child\n* bullet parent two";

const SCRIPT: &str = include_str!("fake_pandoc.sh");

// Written once per test binary; rewriting an executable while other test
// threads fork can fail exec with ETXTBSY.
static FAKE_BIN: OnceLock<(TempDir, PathBuf)> = OnceLock::new();

fn fake_binary() -> &'static Path {
    let (_, path) = FAKE_BIN.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pandoc");
        std::fs::write(&path, SCRIPT).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path
}

pub(crate) struct FakePandoc {
    work: TempDir,
}

pub(crate) fn fake_pandoc() -> FakePandoc {
    FakePandoc {
        work: tempfile::tempdir().unwrap(),
    }
}

impl FakePandoc {
    pub(crate) fn path(&self) -> &'static Path {
        fake_binary()
    }

    /// Scratch directory private to this test.
    pub(crate) fn dir(&self) -> &Path {
        self.work.path()
    }

    pub(crate) fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Whether the script ever ran with `output` as its target.
    pub(crate) fn ran_for(&self, output: &Path) -> bool {
        args_file(output).exists()
    }

    pub(crate) fn recorded_args(&self, output: &Path) -> Vec<String> {
        std::fs::read_to_string(args_file(output))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn args_file(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".args");
    PathBuf::from(name)
}
