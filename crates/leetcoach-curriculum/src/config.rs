//! Configuration loading and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::raw_json::{self, RawJsonSource};
use crate::roadmap::{self, RoadmapSource};
use crate::source::{CurriculumSource, DEFAULT_PROBLEM_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Where to fetch the curriculum from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumConfig {
    /// Set to false to skip the network and use the built-in list.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Primary endpoint (JSON or HTML with embedded page data).
    #[serde(default = "default_primary_url")]
    pub primary_url: String,
    /// Secondary endpoint serving the raw JSON problem list.
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
    /// Prefix for problem links.
    #[serde(default = "default_problem_base_url")]
    pub problem_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_url: default_primary_url(),
            fallback_url: default_fallback_url(),
            problem_base_url: default_problem_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level leetcoach configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Where progress is persisted.
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,
    #[serde(default)]
    pub curriculum: CurriculumConfig,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            progress_file: default_progress_file(),
            curriculum: CurriculumConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_primary_url() -> String {
    roadmap::DEFAULT_URL.to_string()
}
fn default_fallback_url() -> String {
    raw_json::DEFAULT_URL.to_string()
}
fn default_problem_base_url() -> String {
    DEFAULT_PROBLEM_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_progress_file() -> PathBuf {
    PathBuf::from("progress.json")
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `leetcoach.toml` in the current directory
/// 2. `~/.config/leetcoach/config.toml`
///
/// Environment variable overrides: `LEETCOACH_PROGRESS_FILE`, `LEETCOACH_OFFLINE`.
pub fn load_config() -> Result<CoachConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CoachConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("leetcoach.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => read_config_file(&path)?,
        None => CoachConfig::default(),
    };

    if let Ok(progress_file) = std::env::var("LEETCOACH_PROGRESS_FILE") {
        config.progress_file = PathBuf::from(progress_file);
    }
    if std::env::var_os("LEETCOACH_OFFLINE").is_some() {
        config.curriculum.enabled = false;
    }

    Ok(config)
}

/// Parse a single config file, resolving `${VAR}` references in URLs.
pub fn read_config_file(path: &Path) -> Result<CoachConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = toml::from_str::<CoachConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    let curriculum = &mut config.curriculum;
    curriculum.primary_url = resolve_env_vars(&curriculum.primary_url);
    curriculum.fallback_url = resolve_env_vars(&curriculum.fallback_url);
    curriculum.problem_base_url = resolve_env_vars(&curriculum.problem_base_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("leetcoach"))
}

/// Build the ordered source chain: roadmap first, raw JSON second.
///
/// Returns an empty chain when fetching is disabled.
pub fn create_sources(config: &CurriculumConfig) -> Result<Vec<Box<dyn CurriculumSource>>> {
    if !config.enabled {
        return Ok(Vec::new());
    }

    let primary = RoadmapSource::new(
        &config.primary_url,
        &config.problem_base_url,
        config.timeout_secs,
    )?;
    let secondary = RawJsonSource::new(
        &config.fallback_url,
        &config.problem_base_url,
        config.timeout_secs,
    )?;

    Ok(vec![
        Box::new(primary) as Box<dyn CurriculumSource>,
        Box::new(secondary),
    ])
}
