//! Secondary source: the raw problem-list JSON document.

use async_trait::async_trait;
use tracing::instrument;

use leetcoach_core::model::Problem;

use crate::error::FetchError;
use crate::source::{build_client, get, normalize, parse_items, request_error, CurriculumSource};

pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/neetcode-gh/leetcode/main/.problemSiteData.json";

/// Fetches a JSON array of problem entries.
pub struct RawJsonSource {
    url: String,
    problem_base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl RawJsonSource {
    pub fn new(url: &str, problem_base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        Ok(Self {
            url: url.to_string(),
            problem_base_url: problem_base_url.to_string(),
            timeout_secs,
            client: build_client(timeout_secs)?,
        })
    }
}

#[async_trait]
impl CurriculumSource for RawJsonSource {
    fn name(&self) -> &str {
        "raw-json"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<Problem>, FetchError> {
        let response = get(&self.client, &self.url, self.timeout_secs).await?;
        let body = response
            .text()
            .await
            .map_err(|e| request_error(e, self.timeout_secs))?;
        let items = parse_items(&body)?;
        Ok(normalize(items, &self.problem_base_url))
    }
}
