#![allow(async_fn_in_trait)]

use std::path::Path;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::instrument;

use super::run;
use crate::error::Result;

// -----------------------------------------------------------------------------
// PortageOps trait

/// Operations for interacting with Portage
#[cfg_attr(test, automock)]
pub trait PortageOps {
    /// The `PORTAGE_CONFIGROOT` Portage is currently configured with.
    async fn config_root(&self) -> Result<PathBuf>;
    /// Execute the post-sync hook at `hook` with no arguments.
    async fn run_hook(&self, hook: &Path) -> Result<()>;
    /// Run `emerge --check-news --quiet`.
    async fn check_news(&self) -> Result<()>;
}

// -----------------------------------------------------------------------------
// RealPortage

/// Real implementation that calls `portageq` and `emerge`
pub struct RealPortage;

impl PortageOps for RealPortage {
    #[instrument(skip(self))]
    async fn config_root(&self) -> Result<PathBuf> {
        let output = run(
            Command::new("portageq").args(["envvar", "PORTAGE_CONFIGROOT"]),
            "portageq envvar PORTAGE_CONFIGROOT".to_string(),
        )
        .await?;
        Ok(parse_config_root(&String::from_utf8_lossy(&output.stdout)))
    }

    #[instrument(skip(self))]
    async fn run_hook(&self, hook: &Path) -> Result<()> {
        run(&mut Command::new(hook), hook.display().to_string()).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_news(&self) -> Result<()> {
        run(
            Command::new("emerge").args(["--check-news", "--quiet"]),
            "emerge --check-news --quiet".to_string(),
        )
        .await?;
        Ok(())
    }
}

/// An unset config root means the live system root.
fn parse_config_root(stdout: &str) -> PathBuf {
    match stdout.trim() {
        "" => PathBuf::from("/"),
        root => PathBuf::from(root),
    }
}
