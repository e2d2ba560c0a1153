use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::App;
use crate::error::Error;
use crate::error::Result;
use crate::fs_utils;
use crate::ops::git::GitOps;
use crate::ops::portage::PortageOps;
use crate::reference::resolve_ref;
use crate::release;
use crate::repository::Repository;
use crate::repository::ScriptsCheckout;
use crate::submodules;
use crate::submodules::Submodules;

impl<G: GitOps, P: PortageOps> App<G, P> {
    /// Sync every repository to the running release, then run the post-sync steps.
    pub async fn cmd_sync(&self, stdout: &mut impl std::io::Write) -> Result<()> {
        let release = release::read_release(&self.config.release_file)
            .await?
            .ok_or_else(|| Error::MissingKey {
                key: release::RELEASE_KEY,
                path: self.config.release_file.clone(),
            })?;
        let channel = release::read_channel(&self.config.update_file)
            .await?
            .ok_or_else(|| Error::MissingKey {
                key: release::CHANNEL_KEY,
                path: self.config.update_file.clone(),
            })?;
        let reference = resolve_ref(&channel, &release);

        writeln!(stdout, "Release: {}", release).map_err(Error::Output)?;
        writeln!(stdout, "Channel: {}", channel).map_err(Error::Output)?;
        writeln!(stdout, "Reference: {}", reference.yellow()).map_err(Error::Output)?;

        self.sync_repositories(&reference, stdout).await?;
        self.cmd_post_sync(stdout).await
    }

    /// Recreate every repository location, in [`Repository::ALL`] order.
    ///
    /// Nothing is rolled back on failure; a re-run clears whatever was left.
    pub async fn sync_repositories(
        &self,
        reference: &str,
        stdout: &mut impl std::io::Write,
    ) -> Result<ScriptsCheckout> {
        let mut checkout: Option<ScriptsCheckout> = None;

        for repo in Repository::ALL {
            let target = self.config.location(repo);
            fs_utils::clear_target(&target).await?;

            match repo {
                Repository::Scripts => {
                    let url = self.config.url(repo);
                    let cloned = self.clone_and_checkout(&url, &target, reference).await?;
                    writeln!(
                        stdout,
                        "Cloned {} at {} into {}",
                        repo.to_string().cyan(),
                        cloned.reference().yellow(),
                        cloned.path().display()
                    )
                    .map_err(Error::Output)?;
                    checkout = Some(cloned);
                }
                Repository::CoreosOverlay | Repository::PortageStable => {
                    let scripts = checkout.as_ref().ok_or_else(|| Error::MissingCheckout {
                        name: repo.name().to_string(),
                    })?;
                    let source = scripts.third_party(repo);
                    fs_utils::create_link(&source, &target).await?;
                    writeln!(
                        stdout,
                        "Linked {} -> {}",
                        repo.to_string().cyan(),
                        source.display()
                    )
                    .map_err(Error::Output)?;
                }
            }
        }

        checkout.ok_or_else(|| Error::MissingCheckout {
            name: Repository::Scripts.name().to_string(),
        })
    }

    /// Clone `url` into `path`, check out `reference` and bring in submodules
    /// when the checkout declares any.
    pub async fn clone_and_checkout(
        &self,
        url: &str,
        path: &Path,
        reference: &str,
    ) -> Result<ScriptsCheckout> {
        self.git
            .clone_repo(url, path, self.config.clone_umask)
            .await?;
        self.git.checkout(path, reference).await?;

        let detected = submodules::detect(path).await?;
        if detected.needs_update() {
            self.git.submodule_init(path).await?;
            self.git.submodule_update(path).await?;
        } else if detected == Submodules::Empty {
            info!(".gitmodules declares no submodules, skipping");
        } else {
            info!("No submodules detected");
        }

        Ok(ScriptsCheckout::new(
            path.to_path_buf(),
            reference.to_string(),
        ))
    }
}
