use std::io;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::App;
use crate::error::Error;
use crate::error::Result;
use crate::ops::git::GitOps;
use crate::ops::portage::PortageOps;

/// Location of the post-sync hook relative to the Portage config root.
const POST_SYNC_HOOK: &str = "etc/portage/bin/post_sync";

pub fn hook_path(config_root: &Path) -> PathBuf {
    config_root.join(POST_SYNC_HOOK)
}

impl<G: GitOps, P: PortageOps> App<G, P> {
    /// Run the post-sync hook if one is installed, then check for news.
    pub async fn cmd_post_sync(&self, stdout: &mut impl std::io::Write) -> Result<()> {
        let config_root = self.portage.config_root().await?;
        let hook = hook_path(&config_root);

        let is_file = match tokio::fs::metadata(&hook).await {
            Ok(metadata) => metadata.is_file(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(Error::filesystem("inspect", hook, e)),
        };
        if is_file {
            writeln!(stdout, "Running post-sync hook {}", hook.display())
                .map_err(Error::Output)?;
            self.portage.run_hook(&hook).await?;
        } else {
            info!("No post-sync hook installed");
            writeln!(stdout, "No post-sync hook at {}", hook.display())
                .map_err(Error::Output)?;
        }

        writeln!(stdout, "Checking news").map_err(Error::Output)?;
        self.portage.check_news().await
    }
}
