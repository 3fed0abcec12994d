//! # pandoc-bridge-exec
//!
//! Typed access to the `pandoc` executable.
//!
//! This crate provides:
//!
//! - **Facade** ([`Pandoc`]) -- version queries, file conversion and stdin
//!   streaming, in blocking or async mode.
//! - **Invocation adapter** ([`Bound`]) -- binds the executable path in front
//!   of the process runners in [`command`].
//! - **Error classification** -- pandoc's exit status and stderr are mapped
//!   onto [`Error`].
//! - **Tool discovery** ([`tools`]) -- resolve the executable from config,
//!   `PANDOC_BINARY_PATH`, `/usr/bin/pandoc` or `PATH`.
//!
//! ## Example
//!
//! ```no_run
//! use pandoc_bridge_exec::{Pandoc, PandocConfig};
//!
//! # async fn example() -> pandoc_bridge_exec::Result<()> {
//! let pandoc = Pandoc::new(PandocConfig::new().run_as_async(true))?;
//! let version = pandoc.version().await?;
//! pandoc.convert("in.md", "out.html", "html", None).await?;
//! println!("converted with {version}");
//! # Ok(())
//! # }
//! ```

pub mod bind;
mod classify;
pub mod command;
pub mod config;
mod error;
pub mod pandoc;
pub mod pending;
pub mod tools;

#[cfg(all(test, unix))]
mod test_support;

// Re-exports
pub use bind::Bound;
pub use classify::INVALID_FORMAT_EXIT_CODE;
pub use command::ProcessOutput;
pub use config::{ExecutionMode, PandocConfig, StderrPolicy};
pub use error::{Error, ErrorKind, Result};
pub use pandoc::{Pandoc, RawStream, DEFAULT_INPUT_FORMAT};
pub use pending::Pending;
pub use tools::{check_tool, resolve_binary, ToolInfo};
