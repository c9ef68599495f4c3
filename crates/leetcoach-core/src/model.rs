//! Core data model types for leetcoach.
//!
//! A curriculum is an ordered list of topics, each holding an ordered list of
//! problems. Order matters: it decides which unsolved problem is offered next.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single practice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Title; also the key under which progress is recorded.
    pub title: String,
    /// Category label (e.g. "arrays").
    #[serde(default)]
    pub topic: String,
    /// Declared difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Problem statement shown to the user.
    #[serde(default)]
    pub prompt: String,
    /// Reference solution; empty for remotely fetched entries.
    #[serde(default)]
    pub solution: String,
    /// Hints offered one at a time, in order.
    #[serde(default)]
    pub hints: Vec<String>,
    /// Expected time complexity (e.g. "O(n)").
    #[serde(default)]
    pub time_complexity: String,
    /// Expected space complexity.
    #[serde(default)]
    pub space_complexity: String,
    /// Link to the problem page, when known.
    #[serde(default)]
    pub url: Option<String>,
}

impl Problem {
    /// Create a problem with only a title and topic; everything else empty.
    pub fn new(title: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            topic: topic.into(),
            difficulty: Difficulty::default(),
            prompt: String::new(),
            solution: String::new(),
            hints: Vec::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            url: None,
        }
    }
}

/// Problem difficulty. Unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Other(String::new())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Other(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(s.to_string()),
        })
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(d) => d,
            Err(never) => match never {},
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.to_string()
    }
}

/// A named group of problems, in the order they should be attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub problems: Vec<Problem>,
}
