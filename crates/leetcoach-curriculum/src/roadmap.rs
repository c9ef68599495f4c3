//! Primary source: the NeetCode roadmap page.
//!
//! The endpoint may answer with JSON directly or with an HTML page that embeds
//! the problem list in a `__NEXT_DATA__` script element. The content type
//! decides which path is taken.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use leetcoach_core::model::Problem;

use crate::error::FetchError;
use crate::source::{
    build_client, get, normalize, parse_items, request_error, CurriculumSource, RawProblem,
};

pub const DEFAULT_URL: &str = "https://neetcode.io/roadmap";

/// `id` of the script element carrying the page data.
const NEXT_DATA_ID: &str = "__next_data__";

/// JSON pointer from the page data to the problem list.
const DATA_POINTER: &str = "/props/pageProps/data";

/// Fetches the roadmap page and extracts its problem list.
pub struct RoadmapSource {
    url: String,
    problem_base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl RoadmapSource {
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
impl CurriculumSource for RoadmapSource {
    fn name(&self) -> &str {
        "roadmap"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<Problem>, FetchError> {
        let response = get(&self.client, &self.url, self.timeout_secs).await?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let body = response
            .text()
            .await
            .map_err(|e| request_error(e, self.timeout_secs))?;

        let items = if is_json {
            parse_items(&body)?
        } else {
            debug!(bytes = body.len(), "roadmap answered with markup");
            items_from_page(&body)?
        };
        Ok(normalize(items, &self.problem_base_url))
    }
}

/// Pull the problem list out of an HTML page's embedded page data.
pub fn items_from_page(html: &str) -> Result<Vec<RawProblem>, FetchError> {
    let script = extract_next_data(html).ok_or(FetchError::MissingPayload)?;
    let page: serde_json::Value =
        serde_json::from_str(script).map_err(|e| FetchError::Parse(e.to_string()))?;

    match page.pointer(DATA_POINTER) {
        None | Some(serde_json::Value::Null) => Err(FetchError::MissingPayload),
        Some(data) => serde_json::from_value(data.clone()).map_err(|e| FetchError::Parse(e.to_string())),
    }
}

/// Text content of the first `<script>` element whose `id` is `__NEXT_DATA__`.
///
/// Tag and attribute names match case-insensitively. Attributes are read as
/// name/value pairs, so `data-id` never counts as `id` and whitespace around
/// `=` is allowed. The id may be double quoted, single quoted, or bare.
pub fn extract_next_data(html: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets identical, so indices found in
    // `lower` slice `html` directly.
    let lower = html.to_ascii_lowercase();
    let mut offset = 0;

    while let Some(found) = lower[offset..].find("<script") {
        let attrs_start = offset + found + "<script".len();
        let is_script_tag = lower[attrs_start..]
            .starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/');
        if !is_script_tag {
            offset = attrs_start;
            continue;
        }

        let (tag_end, is_next_data) = scan_attributes(&lower, attrs_start)?;
        let body_start = tag_end + 1;
        let body_end = body_start + lower[body_start..].find("</script")?;

        if is_next_data {
            return Some(html[body_start..body_end].trim());
        }
        offset = body_end;
    }
    None
}

/// Walk the attributes of a start tag from `pos` up to its closing `>`.
///
/// Returns the index of that `>` and whether an `id` attribute equals
/// `__next_data__`. `None` when the tag never closes.
fn scan_attributes(tag: &str, mut pos: usize) -> Option<(usize, bool)> {
    let bytes = tag.as_bytes();
    let skip_space = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        i
    };
    let mut is_next_data = false;

    loop {
        while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace() || *b == b'/') {
            pos += 1;
        }
        if *bytes.get(pos)? == b'>' {
            return Some((pos, is_next_data));
        }

        let name_start = pos;
        while bytes
            .get(pos)
            .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(*b, b'=' | b'>' | b'/'))
        {
            pos += 1;
        }
        let name = &tag[name_start..pos];

        pos = skip_space(pos);
        let mut value = "";
        if bytes.get(pos) == Some(&b'=') {
            pos = skip_space(pos + 1);
            match *bytes.get(pos)? {
                quote @ (b'"' | b'\'') => {
                    let value_start = pos + 1;
                    let len = tag[value_start..].find(char::from(quote))?;
                    value = &tag[value_start..value_start + len];
                    pos = value_start + len + 1;
                }
                _ => {
                    let value_start = pos;
                    while bytes
                        .get(pos)
                        .is_some_and(|b| !b.is_ascii_whitespace() && *b != b'>')
                    {
                        pos += 1;
                    }
                    value = &tag[value_start..pos];
                }
            }
        }

        if name == "id" && value == NEXT_DATA_ID {
            is_next_data = true;
        }
    }
}
