//! Reads the running release version and update channel.
//!
//! Both files are line-oriented `KEY=value` text. A missing marker line is
//! reported as `None`, distinct from a marker whose value is empty.

use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::error::Result;

pub const RELEASE_KEY: &str = "FLATCAR_RELEASE_VERSION";
pub const CHANNEL_KEY: &str = "GROUP";

/// Channel name used by developer builds; its branch upstream is `main`.
const DEVELOPER_CHANNEL: &str = "developer";
const DEVELOPER_BRANCH: &str = "main";

/// Read the release version from the release metadata file.
pub async fn read_release(path: &Path) -> Result<Option<String>> {
    let contents = read_file(path).await?;
    Ok(parse_release(&contents))
}

/// Read the update channel from the update configuration file.
pub async fn read_channel(path: &Path) -> Result<Option<String>> {
    let contents = read_file(path).await?;
    Ok(parse_channel(&contents))
}

/// Extract the release version, turning the first `+` into `-`.
/// The last matching line wins.
pub fn parse_release(contents: &str) -> Option<String> {
    last_value(contents, RELEASE_KEY).map(|value| value.replacen('+', "-", 1))
}

/// Extract the channel, mapping `developer` to `main`.
/// The last matching line wins.
pub fn parse_channel(contents: &str) -> Option<String> {
    last_value(contents, CHANNEL_KEY).map(|value| {
        if value == DEVELOPER_CHANNEL {
            DEVELOPER_BRANCH.to_string()
        } else {
            value.to_string()
        }
    })
}

fn last_value<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    let mut found = None;
    for line in contents.lines() {
        if !line.starts_with(key) {
            continue;
        }
        match line.split_once('=') {
            Some((_, value)) => found = Some(value.trim()),
            None => debug!("Skipping {} line without '=': {:?}", key, line),
        }
    }
    found
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_replaces_plus() {
        let contents = "FLATCAR_RELEASE_BOARD=amd64-usr\nFLATCAR_RELEASE_VERSION=3500.0.0+nightly\n";
        assert_eq!(parse_release(contents).as_deref(), Some("3500.0.0-nightly"));
    }

    #[test]
    fn test_parse_release_plain_version() {
        let contents = "FLATCAR_RELEASE_VERSION= 3510.2.1 \nFLATCAR_RELEASE_APPID={e96281a6}\n";
        assert_eq!(parse_release(contents).as_deref(), Some("3510.2.1"));
    }

    #[test]
    fn test_parse_release_only_first_plus() {
        let contents = "FLATCAR_RELEASE_VERSION=3552.0.0+nightly-20230323+local\n";
        assert_eq!(
            parse_release(contents).as_deref(),
            Some("3552.0.0-nightly-20230323+local")
        );
    }

    #[test]
    fn test_parse_release_missing_vs_empty() {
        assert_eq!(parse_release("FLATCAR_RELEASE_BOARD=amd64-usr\n"), None);
        assert_eq!(parse_release("FLATCAR_RELEASE_VERSION=\n").as_deref(), Some(""));
    }

    #[test]
    fn test_parse_release_last_line_wins() {
        let contents = "FLATCAR_RELEASE_VERSION=1.0.0\nFLATCAR_RELEASE_VERSION=2.0.0\n";
        assert_eq!(parse_release(contents).as_deref(), Some("2.0.0"));
    }

    #[test]
    fn test_parse_release_skips_line_without_equals() {
        let contents = "FLATCAR_RELEASE_VERSION=1.0.0\nFLATCAR_RELEASE_VERSION\n";
        assert_eq!(parse_release(contents).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_parse_channel_developer_is_main() {
        assert_eq!(parse_channel("GROUP=developer\n").as_deref(), Some("main"));
    }

    #[test]
    fn test_parse_channel_passthrough() {
        for channel in ["stable", "beta", "alpha", "lts", "main", "developers"] {
            let contents = format!("SERVER=https://public.update.flatcar-linux.net/v1/update/\nGROUP={channel}\n");
            assert_eq!(parse_channel(&contents).as_deref(), Some(channel));
        }
    }

    #[test]
    fn test_parse_channel_missing() {
        assert_eq!(parse_channel("SERVER=disabled\n"), None);
    }

    #[tokio::test]
    async fn test_read_release_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release");
        tokio::fs::write(&path, "FLATCAR_RELEASE_VERSION=3500.0.0+nightly\n")
            .await
            .unwrap();
        let release = read_release(&path).await.unwrap();
        assert_eq!(release.as_deref(), Some("3500.0.0-nightly"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update.conf");
        let err = read_channel(&path).await.unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));
    }
}
