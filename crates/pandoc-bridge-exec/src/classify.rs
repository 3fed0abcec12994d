//! Mapping of a finished pandoc process onto success or a typed error.

use crate::command::ProcessOutput;
use crate::config::StderrPolicy;
use crate::{Error, Result};

/// Exit status pandoc uses for an unknown reader or writer format.
pub const INVALID_FORMAT_EXIT_CODE: i32 = 22;

/// Classify `output`, returning its stdout on success.
///
/// Applied to every finished process regardless of its exit status, since
/// pandoc can report a format problem through the exit code alone.
pub(crate) fn classify(output: ProcessOutput, policy: StderrPolicy) -> Result<String> {
    if output.exit_code == Some(INVALID_FORMAT_EXIT_CODE) {
        return Err(Error::invalid_file_format(output.stderr));
    }

    if !output.stderr.is_empty() {
        if policy == StderrPolicy::Strict || !output.success() {
            return Err(Error::stderr(output.stderr));
        }
        tracing::warn!(stderr = %output.stderr.trim_end(), "pandoc wrote to stderr");
    }

    if !output.success() {
        let status = match output.exit_code {
            Some(code) => format!("pandoc exited with status {code}"),
            None => "pandoc was terminated by a signal".to_string(),
        };
        return Err(Error::stderr(status));
    }

    Ok(output.stdout)
}
