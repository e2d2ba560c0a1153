use std::path::Path;
use std::path::PathBuf;

use crate::ops::git::Umask;
use crate::repository::Repository;

/// Placeholder replaced by the repository name in templates.
const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Clone)]
pub struct Config {
    /// Release metadata carrying `FLATCAR_RELEASE_VERSION`.
    pub release_file: PathBuf,
    /// Update configuration carrying `GROUP`.
    pub update_file: PathBuf,
    /// Remote URL for a repository, `{name}` is substituted.
    pub url_template: String,
    /// Local checkout or link location for a repository, `{name}` is substituted.
    pub location_template: String,
    /// File-creation mask applied to the clone process.
    pub clone_umask: Umask,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_file: PathBuf::from("/usr/share/flatcar/release"),
            update_file: PathBuf::from("/etc/flatcar/update.conf"),
            url_template: "https://github.com/flatcar/{name}.git".to_string(),
            location_template: "/var/lib/portage/{name}".to_string(),
            clone_umask: Umask::default(),
        }
    }
}

impl Config {
    /// Config with every local path placed under `root` (useful for tests)
    pub fn rooted(root: &Path, url_template: impl Into<String>) -> Self {
        Self {
            release_file: root.join("usr/share/flatcar/release"),
            update_file: root.join("etc/flatcar/update.conf"),
            url_template: url_template.into(),
            location_template: root
                .join("var/lib/portage")
                .join(NAME_PLACEHOLDER)
                .to_string_lossy()
                .into_owned(),
            clone_umask: Umask::default(),
        }
    }

    pub fn url(&self, repo: Repository) -> String {
        self.url_template.replace(NAME_PLACEHOLDER, repo.name())
    }

    pub fn location(&self, repo: Repository) -> PathBuf {
        PathBuf::from(self.location_template.replace(NAME_PLACEHOLDER, repo.name()))
    }
}
