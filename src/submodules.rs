use std::io;
use std::path::Path;

use crate::error::Error;
use crate::error::Result;

const GITMODULES: &str = ".gitmodules";
const SUBMODULE_STANZA: &str = "[submodule ";

/// What a checkout's `.gitmodules` says about submodules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submodules {
    /// No `.gitmodules` file.
    Absent,
    /// `.gitmodules` exists but declares no submodule.
    Empty,
    /// At least one `[submodule "..."]` stanza.
    Present,
}

impl Submodules {
    pub fn needs_update(self) -> bool {
        self == Self::Present
    }
}

/// Inspect the `.gitmodules` file at the root of `repo`.
pub async fn detect(repo: &Path) -> Result<Submodules> {
    let path = repo.join(GITMODULES);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Ok(classify(&contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Submodules::Absent),
        Err(e) => Err(Error::filesystem("read", path, e)),
    }
}

pub fn classify(contents: &str) -> Submodules {
    if contents.contains(SUBMODULE_STANZA) {
        Submodules::Present
    } else {
        Submodules::Empty
    }
}
