//! Process runners that the facade binds the pandoc path onto.
//!
//! Every runner takes a full argv whose first element is the program. This
//! is the shape [`crate::Bound`] produces once the executable path is bound
//! as the leading argument.

use std::ffi::OsString;
use std::io;
use std::process::{Output, Stdio};

use futures::future::BoxFuture;

/// Output captured from one pandoc execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for ProcessOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        }
    }
}

/// Blocking runner signature.
pub type BlockingRunner = fn(Vec<OsString>) -> io::Result<ProcessOutput>;

/// Deferred runner signature. The returned future does nothing until polled.
pub type AsyncRunner = fn(Vec<OsString>) -> BoxFuture<'static, io::Result<ProcessOutput>>;

/// Piped-spawn runner signature.
pub type SpawnRunner = fn(Vec<OsString>) -> io::Result<tokio::process::Child>;

fn split_program(argv: Vec<OsString>) -> io::Result<(OsString, Vec<OsString>)> {
    let mut argv = argv.into_iter();
    let program = argv
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argv"))?;
    Ok((program, argv.collect()))
}

/// Run `argv` to completion on the calling thread, capturing stdout and
/// stderr.
///
/// A non-zero exit is not an error here; the caller classifies the output.
pub fn run_blocking(argv: Vec<OsString>) -> io::Result<ProcessOutput> {
    let (program, args) = split_program(argv)?;
    tracing::debug!(?program, ?args, "running pandoc (blocking)");

    let output = std::process::Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .output()?;

    Ok(output.into())
}

/// Run `argv` on tokio, capturing stdout and stderr.
///
/// The process is only spawned once the returned future is first polled.
pub fn run_async(argv: Vec<OsString>) -> BoxFuture<'static, io::Result<ProcessOutput>> {
    Box::pin(async move {
        let (program, args) = split_program(argv)?;
        tracing::debug!(?program, ?args, "running pandoc (async)");

        let output = tokio::process::Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await?;

        Ok(output.into())
    })
}

/// Spawn `argv` with all three standard streams piped and return the live
/// child without waiting on it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_piped(argv: Vec<OsString>) -> io::Result<tokio::process::Child> {
    let (program, args) = split_program(argv)?;
    tracing::debug!(?program, ?args, "spawning pandoc with piped stdin");

    tokio::process::Command::new(&program)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<OsString> {
        parts.iter().map(OsString::from).collect()
    }

    #[test]
    fn blocking_captures_stdout() {
        let out = run_blocking(argv(&["sh", "-c", "echo hello"])).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn blocking_keeps_non_zero_exit() {
        let out = run_blocking(argv(&["sh", "-c", "echo oops >&2; exit 22"])).unwrap();
        assert_eq!(out.exit_code, Some(22));
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn blocking_nonexistent_program() {
        let result = run_blocking(argv(&["nonexistent_tool_xyz_12345"]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_argv_is_rejected() {
        let err = run_blocking(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn async_matches_blocking() {
        let cmd = ["sh", "-c", "echo out; echo err >&2; exit 3"];
        let sync_out = run_blocking(argv(&cmd)).unwrap();
        let async_out = run_async(argv(&cmd)).await.unwrap();
        assert_eq!(sync_out, async_out);
        assert_eq!(async_out.exit_code, Some(3));
    }

    #[tokio::test]
    async fn spawn_piped_exposes_stdin() {
        use tokio::io::AsyncWriteExt;

        let mut child = spawn_piped(argv(&["cat"])).unwrap();
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"piped").await.unwrap();
        drop(stdin);

        let out: ProcessOutput = child.wait_with_output().await.unwrap().into();
        assert_eq!(out.stdout, "piped");
    }
}
