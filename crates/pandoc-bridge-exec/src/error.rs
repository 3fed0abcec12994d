//! Error types for pandoc-bridge-exec.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the pandoc facade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured pandoc executable does not exist.
    #[error("could not find pandoc at path: '{}'", path.display())]
    ExecutableNotFound { path: PathBuf },

    /// The file handed to `convert` does not exist.
    #[error("cannot find file at: '{}'", path.display())]
    InputFileNotFound { path: PathBuf },

    /// pandoc exited with its invalid-format status.
    #[error("invalid file format: {message}")]
    InvalidFileFormat { message: String },

    /// pandoc wrote to stderr or exited unsuccessfully.
    #[error("pandoc reported an error: {message}")]
    StdErr { message: String },

    /// Spawning pandoc or talking to its pipes failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of [`Error`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ExecutableNotFound,
    InputFileNotFound,
    InvalidFileFormat,
    StdErr,
    Io,
}

impl ErrorKind {
    /// Stable upper-case name, suitable for logs and exit messages.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::ExecutableNotFound => "EXECUTABLE_NOT_FOUND",
            ErrorKind::InputFileNotFound => "INPUT_FILE_NOT_FOUND",
            ErrorKind::InvalidFileFormat => "INVALID_FILE_FORMAT",
            ErrorKind::StdErr => "STDERR_EXCEPTION",
            ErrorKind::Io => "IO",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    /// Create an executable not found error.
    pub fn executable_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ExecutableNotFound { path: path.into() }
    }

    /// Create an input file not found error.
    pub fn input_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputFileNotFound { path: path.into() }
    }

    /// Create an invalid file format error.
    pub fn invalid_file_format(message: impl Into<String>) -> Self {
        Self::InvalidFileFormat {
            message: message.into(),
        }
    }

    /// Create a stderr error.
    pub fn stderr(message: impl Into<String>) -> Self {
        Self::StdErr {
            message: message.into(),
        }
    }

    /// Which of the error kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ExecutableNotFound { .. } => ErrorKind::ExecutableNotFound,
            Error::InputFileNotFound { .. } => ErrorKind::InputFileNotFound,
            Error::InvalidFileFormat { .. } => ErrorKind::InvalidFileFormat,
            Error::StdErr { .. } => ErrorKind::StdErr,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}
