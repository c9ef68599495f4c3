//! The `CurriculumSource` trait and the fallback chain over sources.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use leetcoach_core::model::{Difficulty, Problem};

use crate::error::FetchError;

/// Default request timeout for every source.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Prefix joined with an item's `link` to build its URL.
pub const DEFAULT_PROBLEM_BASE_URL: &str = "https://neetcode.io/problems/";

/// A place problems can be fetched from.
#[async_trait]
pub trait CurriculumSource: Send + Sync {
    /// Short name used in logs (e.g. "roadmap").
    fn name(&self) -> &str;

    /// Fetch and normalize the problem list.
    async fn fetch(&self) -> Result<Vec<Problem>, FetchError>;
}

/// One entry of the upstream problem list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProblem {
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl RawProblem {
    /// Convert into a `Problem`. Entries without a `problem` title are dropped.
    pub fn into_problem(self, base_url: &str) -> Option<Problem> {
        let title = self.problem?;
        let link = self.link.unwrap_or_default();
        let url = format!("{base_url}{}", link.trim_start_matches('/'));
        let difficulty: Difficulty = self.difficulty.unwrap_or_default().into();

        Some(Problem {
            difficulty,
            url: Some(url),
            ..Problem::new(title, self.pattern.unwrap_or_default())
        })
    }
}

/// Normalize raw items, skipping the ones without a title.
pub fn normalize(items: Vec<RawProblem>, base_url: &str) -> Vec<Problem> {
    let total = items.len();
    let problems: Vec<Problem> = items
        .into_iter()
        .filter_map(|item| item.into_problem(base_url))
        .collect();
    if problems.len() < total {
        debug!(
            skipped = total - problems.len(),
            "dropped problem entries without a title"
        );
    }
    problems
}

/// Try each source in order and return the first non-empty problem list.
///
/// Failures are logged and never returned; `None` means every source failed.
pub async fn fetch_curriculum(sources: &[Box<dyn CurriculumSource>]) -> Option<Vec<Problem>> {
    for source in sources {
        match source.fetch().await {
            Ok(problems) if !problems.is_empty() => {
                info!(source = source.name(), problems = problems.len(), "curriculum fetched");
                return Some(problems);
            }
            Ok(_) => warn!(source = source.name(), reason = %FetchError::Empty, "curriculum source failed"),
            Err(e) => warn!(source = source.name(), reason = %e, "curriculum source failed"),
        }
    }
    None
}

pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// Classify a request error, reporting timeouts with the configured limit.
pub(crate) fn request_error(e: reqwest::Error, timeout_secs: u64) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(timeout_secs)
    } else {
        FetchError::from(e)
    }
}

/// GET `url`, failing on any non-success status.
pub(crate) async fn get(
    client: &reqwest::Client,
    url: &str,
    timeout_secs: u64,
) -> Result<reqwest::Response, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| request_error(e, timeout_secs))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response)
}

/// Parse a JSON array of raw items.
pub(crate) fn parse_items(body: &str) -> Result<Vec<RawProblem>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}
