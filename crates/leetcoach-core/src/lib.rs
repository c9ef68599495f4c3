//! leetcoach-core — Curriculum, progress tracking, and coaching flows.
//!
//! This crate defines the problem model, the in-memory curriculum, the
//! persisted progress record, the heuristic code reviewer, and the
//! line-oriented coaching session that ties them together.

pub mod curriculum;
pub mod error;
pub mod model;
pub mod progress;
pub mod review;
pub mod session;

pub use curriculum::{CurriculumOrigin, CurriculumStore};
pub use error::{ProgressError, SessionError};
pub use model::{Difficulty, Problem, Topic};
pub use progress::{ProgressEntry, ProgressStore};
pub use session::{CoachSession, Command};
