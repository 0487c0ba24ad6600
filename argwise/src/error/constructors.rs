//! Constructors for `ArgsError`.

use figment::Error as FigmentError;

use super::ArgsError;
use crate::problem::ProblemLog;

impl ArgsError {
    /// Wraps a non-empty problem log, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use argwise::{ArgsError, Problem, ProblemKind, ProblemLog};
    ///
    /// assert!(ArgsError::problems(ProblemLog::new()).is_none());
    ///
    /// let mut log = ProblemLog::new();
    /// log.push(Problem::new(ProblemKind::MalformedOption, "-", 1, "lone dash"));
    /// let err = ArgsError::problems(log).expect("non-empty log");
    /// assert!(matches!(err, ArgsError::Problems(ref problems) if problems.len() == 1));
    /// ```
    #[must_use]
    pub fn problems(log: ProblemLog) -> Option<Self> {
        (!log.is_empty()).then(|| Self::Problems(Box::new(log)))
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use argwise::ArgsError;
    /// let err = ArgsError::config(figment::Error::from("boom"));
    /// assert!(matches!(err, ArgsError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Returns the problem log when parsing reported problems.
    #[must_use]
    pub fn problem_log(&self) -> Option<&ProblemLog> {
        match self {
            Self::Problems(log) => Some(log),
            _ => None,
        }
    }
}
