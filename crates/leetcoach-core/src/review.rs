//! Heuristic review of a submitted solution.
//!
//! This is a text check, not a parse: the loop detection looks for the raw
//! substrings `for` and `while` anywhere in the submission.

use std::fmt;

use crate::model::Problem;

/// Submissions with fewer lines than this get a caution.
const MIN_LINES: usize = 3;

/// One observation produced by [`review`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewNote {
    /// The submission is very short.
    ShortSolution,
    /// Both loop keywords appear somewhere in the text.
    NestedLoops,
    /// Expected time complexity, for the user to compare against.
    ExpectedTime(String),
    /// Expected space complexity, for the user to compare against.
    ExpectedSpace(String),
}

impl fmt::Display for ReviewNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewNote::ShortSolution => write!(
                f,
                "Your solution seems short; ensure you've handled all cases."
            ),
            ReviewNote::NestedLoops => {
                write!(f, "Nested loops detected; consider time complexity.")
            }
            ReviewNote::ExpectedTime(c) => write!(f, "Expected Time Complexity: {c}"),
            ReviewNote::ExpectedSpace(c) => write!(f, "Expected Space Complexity: {c}"),
        }
    }
}

/// Review `code` submitted for `problem`.
pub fn review(code: &str, problem: &Problem) -> Vec<ReviewNote> {
    let mut notes = Vec::new();

    if code.lines().count() < MIN_LINES {
        notes.push(ReviewNote::ShortSolution);
    }
    if code.contains("for") && code.contains("while") {
        notes.push(ReviewNote::NestedLoops);
    }
    notes.push(ReviewNote::ExpectedTime(problem.time_complexity.clone()));
    notes.push(ReviewNote::ExpectedSpace(problem.space_complexity.clone()));

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        Problem {
            time_complexity: "O(n)".into(),
            space_complexity: "O(1)".into(),
            ..Problem::new("Two Sum", "arrays")
        }
    }

    #[test]
    fn short_snippet_without_loops() {
        let notes = review("x = 1\nreturn x", &problem());
        assert_eq!(
            notes,
            vec![
                ReviewNote::ShortSolution,
                ReviewNote::ExpectedTime("O(n)".into()),
                ReviewNote::ExpectedSpace("O(1)".into()),
            ]
        );
    }

    #[test]
    fn loop_keywords_inside_identifiers_still_match() {
        let notes = review("forward_while_x = 0", &problem());
        assert!(notes.contains(&ReviewNote::NestedLoops));
    }

    #[test]
    fn long_snippet_with_single_loop_has_only_complexity_echo() {
        let code = "def f(nums):\n    total = 0\n    for n in nums:\n        total += n\n    return total";
        let notes = review(code, &problem());
        assert_eq!(notes.len(), 2);
        assert!(matches!(notes[0], ReviewNote::ExpectedTime(_)));
    }

    #[test]
    fn empty_submission_is_short() {
        let notes = review("", &problem());
        assert_eq!(notes[0], ReviewNote::ShortSolution);
    }

    #[test]
    fn notes_render_as_user_text() {
        assert_eq!(
            ReviewNote::ExpectedTime("O(n)".into()).to_string(),
            "Expected Time Complexity: O(n)"
        );
        assert!(ReviewNote::NestedLoops.to_string().contains("Nested loops"));
    }
}
