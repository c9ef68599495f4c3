//! leetcoach-curriculum — Remote curriculum sources.
//!
//! Implements the `CurriculumSource` trait for the NeetCode roadmap page and
//! the raw problem-list JSON document, chains them with a fallback, and loads
//! the tool's configuration.

pub mod config;
pub mod error;
pub mod raw_json;
pub mod roadmap;
pub mod source;

pub use config::{create_sources, load_config, CoachConfig, CurriculumConfig};
pub use error::FetchError;
pub use source::{fetch_curriculum, CurriculumSource, RawProblem};
