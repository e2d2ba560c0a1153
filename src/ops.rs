//! Operations modules for the external tools that `flatcar-sync` drives.
//!
//! - [`git`]: Cloning, checking out and updating submodules
//! - [`portage`]: Resolving the Portage config root, running the post-sync hook, checking news
//!
//! Each submodule provides a trait with a real implementation that shells out,
//! and a mock implementation for tests.

pub mod git;
pub mod portage;

use std::process::Output;

use log::debug;
use tokio::process::Command;

use crate::error::Error;
use crate::error::Result;

/// Run `command` to completion, turning a non-zero exit into [`Error::Command`].
///
/// `display` is the human-readable command line used in logs and errors.
pub(crate) async fn run(command: &mut Command, display: String) -> Result<Output> {
    debug!("Running {}", display);
    let output = command.output().await.map_err(|source| Error::Spawn {
        command: display.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(Error::Command {
            command: display,
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        debug!("{}: {}", display, stdout.trim_end());
    }
    Ok(output)
}
