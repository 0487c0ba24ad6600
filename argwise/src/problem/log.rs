//! Ordered problem container with adjacent deduplication.

use std::fmt;

use serde::Serialize;

use super::Problem;

/// Problems collected during a single parse, in encounter order.
///
/// A problem equal to the most recently recorded one is dropped, so one bad
/// token that trips the same check repeatedly yields a single entry. Only
/// the immediately preceding entry is compared.
///
/// # Examples
///
/// ```
/// use argwise::{Problem, ProblemKind, ProblemLog};
///
/// let mut log = ProblemLog::new();
/// let missing = Problem::new(ProblemKind::ExpectedOption, "--name", 0, "required");
/// assert!(log.push(missing.clone()));
/// assert!(!log.push(missing));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProblemLog(Vec<Problem>);

impl ProblemLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `problem` unless it repeats the last entry.
    ///
    /// Returns `true` when the problem was recorded.
    pub fn push(&mut self, problem: Problem) -> bool {
        if self.0.last() == Some(&problem) {
            return false;
        }
        self.0.push(problem);
        true
    }

    /// Iterates over the recorded problems.
    #[must_use = "iterators should be consumed to inspect problems"]
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.0.iter()
    }

    /// Number of recorded problems.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no problem was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recently recorded problem.
    #[must_use]
    pub fn last(&self) -> Option<&Problem> {
        self.0.last()
    }

    /// Borrows the problems as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Problem] {
        &self.0
    }
}

impl fmt::Display for ProblemLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {problem}", i + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProblemLog {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ProblemLog {
    type Item = Problem;
    type IntoIter = std::vec::IntoIter<Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
