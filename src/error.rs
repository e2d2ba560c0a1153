use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitStatus;

use colored::Colorize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Printed after any failure, since a torn tree is only repaired by a re-run.
pub const FAILURE_HINT: &str =
    "Repository sync failed; re-run flatcar-sync to restore a consistent tree.";

/// Everything that can abort a sync run.
#[derive(Error, Debug)]
pub enum Error {
    /// The release or update configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    /// The marker line for a required key is absent.
    #[error("{key} not found in {}", path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    /// An external tool could not be started at all.
    #[error("Failed to execute {command}: {source}")]
    Spawn { command: String, source: io::Error },

    /// An external tool ran and exited unsuccessfully.
    #[error("{command} failed with {status}")]
    Command {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to {op} {}: {source}", path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// A repository that lives inside the scripts tree was reached before
    /// scripts had been cloned.
    #[error("Cannot link {name}: the scripts checkout is not available")]
    MissingCheckout { name: String },

    /// Writing progress lines to the caller's writer failed.
    #[error("Failed to write progress output: {0}")]
    Output(io::Error),
}

impl Error {
    pub(crate) fn filesystem(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }

    /// Output captured from a failed external command, if any.
    pub fn output(&self) -> Option<String> {
        match self {
            Self::Command { stdout, stderr, .. } => {
                let combined = [stdout.trim_end(), stderr.trim_end()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                (!combined.is_empty()).then_some(combined)
            }
            _ => None,
        }
    }
}

/// Report the outcome of a run on `stderr` and return the process exit status.
pub fn exit_status(result: Result<()>, stderr: &mut impl Write) -> u8 {
    let Err(err) = result else {
        return 0;
    };
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(stderr, "{} {}", "error:".red().bold(), err);
    if let Some(output) = err.output() {
        let _ = writeln!(stderr, "{}", output);
    }
    let _ = writeln!(stderr, "{}", FAILURE_HINT);
    1
}
