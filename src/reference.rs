use std::sync::LazyLock;

use regex::Regex;

/// Trailing `-g<hash>` that `git describe` appends to development builds.
static DEV_BUILD_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-g([0-9a-fA-F]+)$").expect("valid regex"));

/// Compute the git reference to check out for a channel and release.
///
/// Promoted builds are tagged `<channel>-<release>`. Development snapshots
/// are only reachable by commit, so a trailing `-g<hash>` in the release
/// selects that hash instead.
pub fn resolve_ref(channel: &str, release: &str) -> String {
    match DEV_BUILD_HASH.captures(release) {
        Some(captures) => captures[1].to_string(),
        None => format!("{}-{}", channel, release),
    }
}
