use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;

/// Directory inside the scripts tree holding the overlay repositories.
const THIRD_PARTY_DIR: &str = "sdk_container/src/third_party";

/// The repositories kept in sync, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repository {
    /// Cloned from upstream.
    Scripts,
    /// Linked into the scripts tree.
    CoreosOverlay,
    /// Linked into the scripts tree.
    PortageStable,
}

impl Repository {
    pub const ALL: [Repository; 3] = [
        Repository::Scripts,
        Repository::CoreosOverlay,
        Repository::PortageStable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scripts => "scripts",
            Self::CoreosOverlay => "coreos-overlay",
            Self::PortageStable => "portage-stable",
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Proof that the scripts repository was cloned and checked out.
///
/// Only [`crate::App::clone_and_checkout`] hands these out, so holding one
/// means the links into the scripts tree have something to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptsCheckout {
    path: PathBuf,
    reference: String,
}

impl ScriptsCheckout {
    pub(crate) fn new(path: PathBuf, reference: String) -> Self {
        Self { path, reference }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Location of `repo` inside the checkout.
    pub fn third_party(&self, repo: Repository) -> PathBuf {
        self.path.join(THIRD_PARTY_DIR).join(repo.name())
    }
}
