use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::domain::model::{
    CaseResult, CauseList, CauseListQuery, DownloadRequest, DownloadResponse, ErrorBody,
    SearchQuery,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LookupError, Result};

const SEARCH_ENDPOINT: &str = "/api/search";
const CAUSE_LIST_ENDPOINT: &str = "/api/causelist";
const DOWNLOAD_ENDPOINT: &str = "/api/download";
const DOWNLOADS_PATH: &str = "/downloads/";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client for the three JSON endpoints of the lookup service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub async fn search_case(&self, query: &SearchQuery) -> Result<CaseResult> {
        self.post_json(SEARCH_ENDPOINT, query).await
    }

    pub async fn fetch_cause_list(&self, query: &CauseListQuery) -> Result<CauseList> {
        self.post_json(CAUSE_LIST_ENDPOINT, query).await
    }

    pub async fn request_download(&self, request: &DownloadRequest) -> Result<DownloadResponse> {
        self.post_json(DOWNLOAD_ENDPOINT, request).await
    }

    /// Resolves a `file_path` from a download response against the
    /// static downloads root of the service.
    pub fn downloads_url(&self, file_path: &str) -> Result<Url> {
        let url = self
            .base_url
            .join(DOWNLOADS_PATH)?
            .join(file_path.trim_start_matches('/'))?;
        Ok(url)
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        tracing::debug!("Sending request to: {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|parsed| parsed.error);
            return Err(LookupError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let payload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
