//! GitHub release lookup for the BoxWallet repository.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::asset;
use crate::error::FetchError;
use crate::platform::Platform;

/// Repository the releases are published under.
pub const OWNER: &str = "richardltc";
pub const REPO: &str = "boxwallet2";

/// GitHub rejects requests without an identifying User-Agent.
pub const USER_AGENT: &str = "bwfetch-cli";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DOWNLOAD_BASE_URL: &str = "https://github.com/richardltc/boxwallet2/releases/download/";

/// Matches the structure of the JSON response; all other fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Release {
    pub tag_name: String,
}

/// Resolved download location for the latest release.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadUri {
    /// Release tag as published, e.g. `v0.0.5`.
    pub tag: String,
    /// Fully-qualified artifact URL.
    pub url: String,
}

pub struct GitHub {
    client: Client,
    api_url: String,
}

impl GitHub {
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }

    /// Fetches the tag name of the latest published release.
    #[tracing::instrument(skip(self))]
    pub async fn latest_release_tag(&self) -> Result<String, FetchError> {
        let url = format!("{}/repos/{}/{}/releases/latest", self.api_url, OWNER, REPO);

        debug!("Fetching latest release from {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let release = response
            .json::<Release>()
            .await
            .map_err(FetchError::Decode)?;

        Ok(release.tag_name)
    }

    /// Resolves the latest release to a download URL for the given platform.
    #[tracing::instrument(skip(self, platform))]
    pub async fn download_uri_for(&self, platform: &Platform) -> Result<DownloadUri, FetchError> {
        let tag = self.latest_release_tag().await?;
        let filename = asset::filename_for_tag(&tag, platform);

        let url = format!("{}{}/{}", DOWNLOAD_BASE_URL, tag, filename);

        Ok(DownloadUri { tag, url })
    }

    /// Resolves the latest release to a download URL for the running platform.
    pub async fn latest_download_uri(&self) -> Result<DownloadUri, FetchError> {
        self.download_uri_for(&Platform::detect()).await
    }
}

/// Resolves the latest BoxWallet download URL with a default client.
pub async fn latest_download_uri() -> Result<DownloadUri, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Transport)?;

    GitHub::new(client, None).latest_download_uri().await
}
