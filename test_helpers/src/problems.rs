//! Assertions over problem logs.

use anyhow::{Result, bail, ensure};
use argwise::{ProblemKind, ProblemLog};

/// Kinds of every problem in `log`, in order.
#[must_use]
pub fn kinds(log: &ProblemLog) -> Vec<ProblemKind> {
    log.iter().map(|problem| problem.kind.clone()).collect()
}

/// Kind names of every problem in `log`, in order.
///
/// Conversion and check failures render as their carried kind.
#[must_use]
pub fn kind_names(log: &ProblemLog) -> Vec<String> {
    log.iter().map(|problem| problem.kind.name().to_owned()).collect()
}

/// Fails unless `log` holds exactly the kinds named in `expected`.
///
/// # Errors
///
/// Returns an error describing the rendered log on mismatch.
///
/// # Examples
///
/// ```
/// use argwise::{Problem, ProblemKind, ProblemLog};
/// use test_helpers::problems::ensure_kinds;
///
/// let mut log = ProblemLog::new();
/// log.push(Problem::new(ProblemKind::UnrecognizedOption, "--x", 1, "unrecognized option '--x'"));
/// ensure_kinds(&log, &["UnrecognizedOption"]).expect("one problem");
/// assert!(ensure_kinds(&log, &[]).is_err());
/// ```
pub fn ensure_kinds(log: &ProblemLog, expected: &[&str]) -> Result<()> {
    let actual = kind_names(log);
    ensure!(
        actual == expected,
        "unexpected problems {actual:?}; expected {expected:?}\n{log}"
    );
    Ok(())
}

/// Fails unless the problem at `index` names `argument`.
///
/// # Errors
///
/// Returns an error when the entry is missing or cites another argument.
pub fn ensure_argument(log: &ProblemLog, index: usize, argument: &str) -> Result<()> {
    let Some(problem) = log.as_slice().get(index) else {
        bail!("no problem at index {index}\n{log}");
    };
    ensure!(
        problem.argument == argument,
        "problem {index} cites '{}'; expected '{argument}'",
        problem.argument
    );
    Ok(())
}
