#![allow(async_fn_in_trait)]

use std::fmt::Display;
use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::instrument;

use super::run;
use crate::error::Result;

// -----------------------------------------------------------------------------
// GitOps trait

/// Operations for interacting with Git
#[cfg_attr(test, automock)]
pub trait GitOps {
    /// Clone `url` into `path`, with `umask` applied to the clone process only.
    async fn clone_repo(&self, url: &str, path: &Path, umask: Umask) -> Result<()>;
    async fn checkout(&self, path: &Path, reference: &str) -> Result<()>;
    async fn submodule_init(&self, path: &Path) -> Result<()>;
    async fn submodule_update(&self, path: &Path) -> Result<()>;
}

/// A file-creation mask, e.g. `Umask(0o022)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Umask(pub u32);

impl Default for Umask {
    fn default() -> Self {
        Self(0o022)
    }
}

impl Display for Umask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI
pub struct RealGit;

impl RealGit {
    async fn git_in(&self, path: &Path, args: &[&str]) -> Result<()> {
        let display = format!("git -C {} {}", path.display(), args.join(" "));
        run(Command::new("git").arg("-C").arg(path).args(args), display).await?;
        Ok(())
    }
}

impl GitOps for RealGit {
    #[instrument(skip(self))]
    async fn clone_repo(&self, url: &str, path: &Path, umask: Umask) -> Result<()> {
        // The mask is set inside a shell that then becomes git, so it never
        // touches this process.
        let script = format!("umask {} && exec git clone -- \"$1\" \"$2\"", umask);
        let display = format!("git clone {} {}", url, path.display());
        run(
            Command::new("sh")
                .arg("-c")
                .arg(script)
                .arg("sh")
                .arg(url)
                .arg(path),
            display,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn checkout(&self, path: &Path, reference: &str) -> Result<()> {
        self.git_in(path, &["checkout", reference]).await
    }

    #[instrument(skip(self))]
    async fn submodule_init(&self, path: &Path) -> Result<()> {
        self.git_in(path, &["submodule", "init"]).await
    }

    #[instrument(skip(self))]
    async fn submodule_update(&self, path: &Path) -> Result<()> {
        self.git_in(path, &["submodule", "update"]).await
    }
}
