//! In-memory curriculum and the built-in fallback problem list.

use std::fmt;

use tracing::info;

use crate::model::{Difficulty, Problem, Topic};
use crate::progress::ProgressStore;

/// Where the loaded curriculum came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumOrigin {
    /// Problems supplied by a remote source.
    Remote,
    /// The compiled-in fallback list.
    BuiltIn,
}

impl fmt::Display for CurriculumOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurriculumOrigin::Remote => write!(f, "remote"),
            CurriculumOrigin::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// Ordered topics, each with an ordered list of problems. Immutable once built.
#[derive(Debug, Clone)]
pub struct CurriculumStore {
    topics: Vec<Topic>,
    origin: CurriculumOrigin,
}

impl CurriculumStore {
    /// Use `fetched` when it holds at least one problem, otherwise fall back
    /// to the built-in list.
    pub fn load(fetched: Option<Vec<Problem>>) -> Self {
        let store = match fetched {
            Some(problems) if !problems.is_empty() => Self {
                topics: group_by_topic(problems),
                origin: CurriculumOrigin::Remote,
            },
            _ => Self::built_in(),
        };
        info!(
            origin = %store.origin,
            topics = store.topics.len(),
            problems = store.len(),
            "curriculum loaded"
        );
        store
    }

    /// Group `problems` by topic, keeping first-seen topic order.
    pub fn from_problems(problems: Vec<Problem>) -> Self {
        Self {
            topics: group_by_topic(problems),
            origin: CurriculumOrigin::Remote,
        }
    }

    /// The compiled-in curriculum.
    pub fn built_in() -> Self {
        Self {
            topics: group_by_topic(builtin_problems()),
            origin: CurriculumOrigin::BuiltIn,
        }
    }

    pub fn origin(&self) -> CurriculumOrigin {
        self.origin
    }

    /// Topic names in insertion order.
    pub fn list_topics(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// All problems, topic by topic.
    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.topics.iter().flat_map(|t| t.problems.iter())
    }

    pub fn len(&self) -> usize {
        self.topics.iter().map(|t| t.problems.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First problem in `topic` (or the first topic when omitted or blank)
    /// that is not marked solved.
    pub fn next_unsolved(&self, topic: Option<&str>, progress: &ProgressStore) -> Option<&Problem> {
        let topic = match topic.filter(|t| !t.is_empty()) {
            Some(name) => self.topic(name)?,
            None => self.topics.first()?,
        };
        topic.problems.iter().find(|p| !progress.is_solved(&p.title))
    }

    /// `(topic, solved, total)` for every topic, in order.
    pub fn topic_totals(&self, progress: &ProgressStore) -> Vec<(&str, usize, usize)> {
        self.topics
            .iter()
            .map(|t| {
                let solved = t
                    .problems
                    .iter()
                    .filter(|p| progress.is_solved(&p.title))
                    .count();
                (t.name.as_str(), solved, t.problems.len())
            })
            .collect()
    }
}

fn group_by_topic(problems: Vec<Problem>) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    for problem in problems {
        match topics.iter_mut().find(|t| t.name == problem.topic) {
            Some(topic) => topic.problems.push(problem),
            None => topics.push(Topic {
                name: problem.topic.clone(),
                problems: vec![problem],
            }),
        }
    }
    topics
}

fn builtin_problems() -> Vec<Problem> {
    vec![
        Problem {
            title: "Two Sum".into(),
            topic: "arrays".into(),
            difficulty: Difficulty::Easy,
            prompt: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.".into(),
            solution: "Use a hash map to store each value's index as you iterate.".into(),
            hints: vec![
                "Can you do it in one pass?".into(),
                "Think about using extra space to remember numbers you've seen.".into(),
            ],
            time_complexity: "O(n)".into(),
            space_complexity: "O(n)".into(),
            url: Some("https://leetcode.com/problems/two-sum/".into()),
        },
        Problem {
            title: "Contains Duplicate".into(),
            topic: "arrays".into(),
            difficulty: Difficulty::Easy,
            prompt: "Given an integer array nums, return true if any value appears at least twice in the array.".into(),
            solution: "Use a set to track values as you iterate.".into(),
            hints: vec!["What data structure lets you check for membership quickly?".into()],
            time_complexity: "O(n)".into(),
            space_complexity: "O(n)".into(),
            url: Some("https://leetcode.com/problems/contains-duplicate/".into()),
        },
        Problem {
            title: "Merge Two Sorted Lists".into(),
            topic: "linked-lists".into(),
            difficulty: Difficulty::Easy,
            prompt: "Merge two sorted linked lists and return it as a new list.".into(),
            solution: "Iterate through both lists and build a new sorted list.".into(),
            hints: vec!["Use a dummy head to simplify edge cases.".into()],
            time_complexity: "O(n+m)".into(),
            space_complexity: "O(1)".into(),
            url: Some("https://leetcode.com/problems/merge-two-sorted-lists/".into()),
        },
        Problem {
            title: "Valid Parentheses".into(),
            topic: "stack".into(),
            difficulty: Difficulty::Easy,
            prompt: "Given a string s containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid.".into(),
            solution: "Push opening brackets on a stack and pop when the matching closing bracket arrives.".into(),
            hints: vec![
                "Which bracket must a closing bracket match?".into(),
                "The string is valid only if the stack is empty at the end.".into(),
            ],
            time_complexity: "O(n)".into(),
            space_complexity: "O(n)".into(),
            url: Some("https://leetcode.com/problems/valid-parentheses/".into()),
        },
    ]
}
