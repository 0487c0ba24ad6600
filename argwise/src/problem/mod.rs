//! Structured, non-fatal reports of command-line mistakes.

mod log;

use std::fmt;

use serde::Serialize;

pub use log::ProblemLog;

/// Classification of a [`Problem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum ProblemKind {
    /// A dash-led argument that is not a well-formed option.
    MalformedOption,
    /// An option key that no parameter declares.
    UnrecognizedOption,
    /// A multi-value option supplied more times than it allows.
    UnexpectedOption,
    /// A flag or single-value option supplied more than once.
    UnexpectedFlag,
    /// A flag written with an inline value.
    UnexpectedFlagArg,
    /// A positional argument that no parameter accepts.
    UnexpectedPositional,
    /// An option that needs a value did not get one.
    ExpectedOptionArg,
    /// A required option is missing or has too few values.
    ExpectedOption,
    /// A required positional is missing or has too few values.
    ExpectedPositional,
    /// Reserved for command dispatch layers; never emitted by the engine.
    ExpectedCommand,
    /// Reserved for command dispatch layers; never emitted by the engine.
    UnrecognizedCommand,
    /// An argument value was discarded.
    IgnoreOptionArg,
    /// A value parser rejected its input; carries the parser's error kind.
    InvalidValue(String),
    /// A check function rejected a value; carries the check's error kind.
    CheckFailed(String),
}

impl ProblemKind {
    /// Short identifier used when rendering problems.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MalformedOption => "MalformedOption",
            Self::UnrecognizedOption => "UnrecognizedOption",
            Self::UnexpectedOption => "UnexpectedOption",
            Self::UnexpectedFlag => "UnexpectedFlag",
            Self::UnexpectedFlagArg => "UnexpectedFlagArg",
            Self::UnexpectedPositional => "UnexpectedPositional",
            Self::ExpectedOptionArg => "ExpectedOptionArg",
            Self::ExpectedOption => "ExpectedOption",
            Self::ExpectedPositional => "ExpectedPositional",
            Self::ExpectedCommand => "ExpectedCommand",
            Self::UnrecognizedCommand => "UnrecognizedCommand",
            Self::IgnoreOptionArg => "IgnoreOptionArg",
            Self::InvalidValue(kind) | Self::CheckFailed(kind) => kind,
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One user-input issue found while parsing.
///
/// `sequence` is the 1-based position of the offending argument after the
/// executable name; problems raised while applying defaults use `0`.
///
/// # Examples
///
/// ```
/// use argwise::{Problem, ProblemKind};
///
/// let problem = Problem::new(
///     ProblemKind::ExpectedOptionArg,
///     "--name",
///     2,
///     "expected a value for --name",
/// );
/// assert_eq!(
///     problem.to_string(),
///     "argument 2 '--name': ExpectedOptionArg: expected a value for --name"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Problem {
    /// What went wrong.
    pub kind: ProblemKind,
    /// Offending argument text, quotes preserved.
    pub argument: String,
    /// Position of the argument, or `0` for defaults.
    pub sequence: usize,
    /// Human-readable explanation.
    pub details: String,
}

impl Problem {
    /// Creates a problem.
    #[must_use]
    pub fn new(
        kind: ProblemKind,
        argument: impl Into<String>,
        sequence: usize,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            argument: argument.into(),
            sequence,
            details: details.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sequence == 0 {
            write!(f, "default '{}'", self.argument)?;
        } else {
            write!(f, "argument {} '{}'", self.sequence, self.argument)?;
        }
        write!(f, ": {}: {}", self.kind, self.details)
    }
}
