//! Construction options for [`crate::Pandoc`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Whether facade calls settle on the calling thread or return a future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Run pandoc to completion before returning.
    #[default]
    Blocking,
    /// Return an unstarted future that runs pandoc on tokio when awaited.
    Async,
}

impl ExecutionMode {
    /// `Async` when `run_as_async` is set, `Blocking` otherwise.
    pub fn from_flag(run_as_async: bool) -> Self {
        if run_as_async {
            ExecutionMode::Async
        } else {
            ExecutionMode::Blocking
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, ExecutionMode::Async)
    }
}

/// How stderr output on an otherwise successful run is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StderrPolicy {
    /// Any stderr output fails the call.
    #[default]
    Strict,
    /// Stderr on a zero exit is logged and the call succeeds.
    Lenient,
}

/// Options for constructing a [`crate::Pandoc`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PandocConfig {
    /// Explicit executable path. When unset, see [`crate::tools::resolve_binary`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_path: Option<PathBuf>,
    pub mode: ExecutionMode,
    pub stderr_policy: StderrPolicy,
}

impl PandocConfig {
    /// Blocking config using the default binary lookup.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn run_as_async(self, run_as_async: bool) -> Self {
        self.mode(ExecutionMode::from_flag(run_as_async))
    }

    pub fn stderr_policy(mut self, policy: StderrPolicy) -> Self {
        self.stderr_policy = policy;
        self
    }
}
