//! Version Checking
//!
//! Checks for a newer release of the CLI by querying the GitHub API once at
//! session start. Failures are ignored; the check is purely informational.

use reqwest::{Client, ClientBuilder};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// GitHub API endpoint for the latest release
const GITHUB_RELEASES_URL: &str =
    "https://api.github.com/repos/fundwatch/fundwatch-cli/releases/latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    pub name: String,
    pub published_at: String,
    pub html_url: String,
    pub prerelease: bool,
}

/// Parse a version string, handling optional 'v' prefix
fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let clean_version = version.strip_prefix('v').unwrap_or(version);
    Version::parse(clean_version)
}

/// Compare semantic versions to determine if the latest version is newer
fn is_newer_version(current: &str, latest: &str) -> bool {
    match (parse_version(current), parse_version(latest)) {
        (Ok(current), Ok(latest_ver)) => latest_ver > current,
        _ => false, // If parsing fails, assume no update needed
    }
}

async fn fetch_latest_release(client: &Client) -> Option<GitHubRelease> {
    let response = client.get(GITHUB_RELEASES_URL).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json().await.ok()
}

/// Check whether a newer release exists. Returns the newer version tag, or
/// `None` when up to date or the check could not complete.
pub async fn check_for_new_version(current_version: &str) -> Option<String> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .user_agent(format!("fundwatch/{}", current_version))
        .build()
        .ok()?;

    let release = fetch_latest_release(&client).await?;
    if is_newer_version(current_version, &release.tag_name) {
        Some(release.tag_name)
    } else {
        None
    }
}
