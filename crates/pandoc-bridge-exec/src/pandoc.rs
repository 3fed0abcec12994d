//! The pandoc facade: version queries, file conversion and stdin streaming.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin};

use crate::bind::Bound;
use crate::classify::classify;
use crate::command::{self, AsyncRunner, BlockingRunner, ProcessOutput, SpawnRunner};
use crate::config::{ExecutionMode, PandocConfig, StderrPolicy};
use crate::pending::Pending;
use crate::tools::resolve_binary;
use crate::{Error, Result};

/// Reader format used when the caller does not name one.
pub const DEFAULT_INPUT_FORMAT: &str = "md";

/// Appended to the payload written by [`Pandoc::send_raw_stream`].
const STDIN_TERMINATOR: &str = "\r\n";

/// Handle to the pandoc executable.
///
/// Construction resolves and checks the executable path once; every call
/// after that spawns an independent pandoc process.
///
/// # Example
///
/// ```no_run
/// use pandoc_bridge_exec::{Pandoc, PandocConfig};
///
/// let pandoc = Pandoc::new(PandocConfig::new())?;
/// println!("{}", pandoc.version().wait()?);
/// pandoc.convert("notes.md", "notes.html", "html", None).wait()?;
/// # Ok::<(), pandoc_bridge_exec::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pandoc {
    binary_path: PathBuf,
    mode: ExecutionMode,
    stderr_policy: StderrPolicy,
    run_blocking: Bound<BlockingRunner, OsString>,
    run_async: Bound<AsyncRunner, OsString>,
    spawn: Bound<SpawnRunner, OsString>,
}

impl Pandoc {
    /// Resolve the executable and build a facade.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExecutableNotFound`] if the executable path does not
    /// exist.
    pub fn new(config: PandocConfig) -> Result<Self> {
        let binary_path = resolve_binary(config.binary_path.as_deref())?;
        let leading = [binary_path.clone().into_os_string()];

        tracing::debug!(
            path = %binary_path.display(),
            mode = ?config.mode,
            "pandoc facade ready"
        );

        Ok(Self {
            run_blocking: Bound::new(command::run_blocking as BlockingRunner, leading.clone()),
            run_async: Bound::new(command::run_async as AsyncRunner, leading.clone()),
            spawn: Bound::new(command::spawn_piped as SpawnRunner, leading),
            binary_path,
            mode: config.mode,
            stderr_policy: config.stderr_policy,
        })
    }

    /// Path of the executable this facade runs.
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Whether calls settle immediately or return a deferred future.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// How stderr on a successful run is treated.
    pub fn stderr_policy(&self) -> StderrPolicy {
        self.stderr_policy
    }

    /// First line of `pandoc --version`, e.g. `pandoc 3.1.9`.
    pub fn version(&self) -> Pending<String> {
        self.execute(vec![OsString::from("--version")])
            .map(|stdout| stdout.split('\n').next().unwrap_or_default().to_string())
    }

    /// Convert the file at `input` to `output_format`, writing `output`.
    ///
    /// `input_format` defaults to `md`. Returns pandoc's stdout on success.
    ///
    /// # Errors
    ///
    /// - [`Error::InputFileNotFound`] if `input` does not exist; pandoc is not
    ///   run.
    /// - [`Error::InvalidFileFormat`] if pandoc rejects a format.
    /// - [`Error::StdErr`] if pandoc writes to stderr or exits unsuccessfully.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        output_format: &str,
        input_format: Option<&str>,
    ) -> Pending<String> {
        self.convert_with_args(
            input,
            output,
            output_format,
            input_format,
            std::iter::empty::<OsString>(),
        )
    }

    /// Like [`Pandoc::convert`], with `extra_args` appended after the format
    /// flags (for example `["-V", "geometry:margin=1in"]`).
    pub fn convert_with_args(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        output_format: &str,
        input_format: Option<&str>,
        extra_args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Pending<String> {
        let input = input.as_ref();
        if !input.exists() {
            return self.settled(Err(Error::input_file_not_found(input)));
        }

        let mut args = vec![
            OsString::from("-i"),
            input.as_os_str().to_os_string(),
            OsString::from(format!("--to={output_format}")),
            output_flag(output.as_ref()),
            OsString::from(format!(
                "--from={}",
                input_format.unwrap_or(DEFAULT_INPUT_FORMAT)
            )),
        ];
        args.extend(extra_args.into_iter().map(Into::into));

        self.execute(args)
    }

    /// Feed `text` to pandoc on stdin instead of reading a file.
    ///
    /// Always asynchronous; a blocking facade logs a warning and proceeds.
    /// The returned [`RawStream`] is still running: the caller owns the child
    /// and must await it, typically with [`RawStream::finish`].
    pub async fn send_raw_stream(
        &self,
        text: &str,
        output: impl AsRef<Path>,
        output_format: &str,
        input_format: Option<&str>,
    ) -> Result<RawStream> {
        if !self.mode.is_async() {
            tracing::warn!("facade is configured blocking but stdin streaming always runs async");
        }

        let args = vec![
            OsString::from(format!("--to={output_format}")),
            OsString::from(format!(
                "--from={}",
                input_format.unwrap_or(DEFAULT_INPUT_FORMAT)
            )),
            output_flag(output.as_ref()),
        ];

        let mut child = self.spawn.run(args)?;
        if let Some(stdin) = child.stdin.take() {
            match write_payload(stdin, text).await {
                Ok(()) => {}
                // pandoc exits without draining stdin when it rejects a
                // format; its status and stderr are classified by `finish`.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("pandoc closed stdin before the payload was written");
                }
                Err(e) => {
                    let _ = child.start_kill();
                    return Err(e.into());
                }
            }
        }

        Ok(RawStream {
            child,
            stderr_policy: self.stderr_policy,
        })
    }

    /// Run pandoc with `args` in the configured mode and classify the result.
    fn execute(&self, args: Vec<OsString>) -> Pending<String> {
        let policy = self.stderr_policy;
        match self.mode {
            ExecutionMode::Blocking => Pending::Ready(
                self.run_blocking
                    .run(args)
                    .map_err(Error::from)
                    .and_then(|out| classify(out, policy)),
            ),
            ExecutionMode::Async => {
                let fut = self.run_async.run(args);
                Pending::deferred(async move { classify(fut.await?, policy) })
            }
        }
    }

    /// Deliver an already known result in the configured mode.
    fn settled(&self, result: Result<String>) -> Pending<String> {
        match self.mode {
            ExecutionMode::Blocking => Pending::Ready(result),
            ExecutionMode::Async => Pending::deferred(async move { result }),
        }
    }
}

async fn write_payload(mut stdin: ChildStdin, text: &str) -> io::Result<()> {
    stdin.write_all(text.as_bytes()).await?;
    stdin.write_all(STDIN_TERMINATOR.as_bytes()).await?;
    stdin.shutdown().await
}

fn output_flag(output: &Path) -> OsString {
    let mut flag = OsString::from("--output=");
    flag.push(output.as_os_str());
    flag
}

/// A pandoc process started by [`Pandoc::send_raw_stream`].
///
/// Its stdin has already been written and closed; stdout and stderr are
/// still piped.
#[derive(Debug)]
pub struct RawStream {
    child: Child,
    stderr_policy: StderrPolicy,
}

impl RawStream {
    /// OS process id, if the child has not been reaped yet.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Borrow the running child, e.g. to read its stdout incrementally.
    pub fn child_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    /// Give up the handle and take the raw child.
    pub fn into_child(self) -> Child {
        self.child
    }

    /// Wait for pandoc to exit and classify its output.
    pub async fn finish(self) -> Result<String> {
        let output: ProcessOutput = self.child.wait_with_output().await?.into();
        classify(output, self.stderr_policy)
    }
}
