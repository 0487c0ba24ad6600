//! Greeting planning and rendering for the `hello_args` demo.

use std::io::Write;

use argwise::{ParseSession, Record, Value};
use tracing::debug;

use crate::error::{Result, ValidationError};

/// How the greeting is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Plain punctuation.
    Standard,
    /// Upper case with an exclamation mark.
    Excited,
    /// Lower case with an ellipsis.
    Quiet,
}

/// Computed greeting ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    message: String,
    mode: DeliveryMode,
    repeat: u64,
}

impl GreetingPlan {
    /// Returns the formatted greeting message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the delivery mode associated with the greeting.
    #[must_use]
    pub const fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Number of times the greeting is printed.
    #[must_use]
    pub const fn repeat(&self) -> u64 {
        self.repeat
    }
}

/// Builds a [`GreetingPlan`] from a problem-free record.
///
/// # Errors
///
/// Returns a [`ValidationError`] when options conflict or a salutation is
/// blank.
pub fn build_plan(record: &Record) -> Result<GreetingPlan> {
    let excited = record.flag("excited").unwrap_or_default();
    let quiet = record.flag("quiet").unwrap_or_default();
    let mode = match (excited, quiet) {
        (true, true) => return Err(ValidationError::ConflictingDeliveryModes.into()),
        (true, false) => DeliveryMode::Excited,
        (false, true) => DeliveryMode::Quiet,
        (false, false) => DeliveryMode::Standard,
    };

    let mut words = Vec::new();
    for (index, value) in record.multi("salutation").unwrap_or_default().iter().enumerate() {
        let word = value.to_string();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankSalutation(index).into());
        }
        words.push(trimmed.to_owned());
    }
    let names: Vec<String> = record
        .multi("positional")
        .unwrap_or_default()
        .iter()
        .map(Value::to_string)
        .collect();
    let target = if names.is_empty() {
        String::from("World")
    } else {
        names.join(", ")
    };

    let base = format!("{} {target}", words.join(" "));
    let message = match mode {
        DeliveryMode::Standard => format!("{base}!"),
        DeliveryMode::Excited => format!("{}!", base.to_uppercase()),
        DeliveryMode::Quiet => format!("{}...", base.to_lowercase()),
    };
    let repeat = record.single("repeat").and_then(Value::as_uint).unwrap_or(1);
    debug!(?mode, repeat, "built greeting plan");
    Ok(GreetingPlan {
        message,
        mode,
        repeat,
    })
}

/// Writes the greeting `plan.repeat()` times.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn print_plan(plan: &GreetingPlan, out: &mut impl Write) -> Result<()> {
    for _ in 0..plan.repeat() {
        writeln!(out, "{}", plan.message())?;
    }
    Ok(())
}

/// Writes every problem in `session`, one per line.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn print_problems(session: &ParseSession, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}: invalid arguments", session.executable())?;
    for problem in session.problems() {
        writeln!(out, "  {problem}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DeliveryMode, build_plan, print_plan, print_problems};
    use crate::cli::parse_args;
    use crate::error::{HelloArgsError, ValidationError};

    #[rstest]
    #[case(&["hello-args"], "Hello World!", DeliveryMode::Standard)]
    #[case(&["hello-args", "-e", "Ann"], "HELLO ANN!", DeliveryMode::Excited)]
    #[case(&["hello-args", "-q", "-s", "Good", "-s", "day", "Ann", "Bo"], "good day ann, bo...", DeliveryMode::Quiet)]
    fn plans_follow_the_record(
        #[case] args: &[&str],
        #[case] message: &str,
        #[case] mode: DeliveryMode,
    ) {
        let session = parse_args(args.iter().copied()).expect("parser");
        let record = session.into_result().expect("no problems");
        let plan = build_plan(&record).expect("valid plan");
        assert_eq!(plan.message(), message);
        assert_eq!(plan.mode(), mode);
    }

    #[rstest]
    fn conflicting_modes_are_rejected() {
        let record = parse_args(["hello-args", "-eq"])
            .expect("parser")
            .into_result()
            .expect("no problems");
        let err = build_plan(&record).expect_err("conflict");
        assert!(matches!(
            err,
            HelloArgsError::Validation(ValidationError::ConflictingDeliveryModes)
        ));
    }

    #[rstest]
    fn repeat_prints_several_lines() {
        let record = parse_args(["hello-args", "-r", "3"])
            .expect("parser")
            .into_result()
            .expect("no problems");
        let plan = build_plan(&record).expect("valid plan");
        let mut out = Vec::new();
        print_plan(&plan, &mut out).expect("write to buffer");
        assert_eq!(String::from_utf8_lossy(&out).lines().count(), 3);
    }

    #[rstest]
    fn problems_are_listed_with_their_position() {
        let session = parse_args(["hello-args", "--shout", "-r"]).expect("parser");
        let mut out = Vec::new();
        print_problems(&session, &mut out).expect("write to buffer");
        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("hello-args: invalid arguments"), "{text}");
        assert!(text.contains("argument 1 '--shout': UnrecognizedOption"), "{text}");
        assert!(text.contains("argument 2 '-r': ExpectedOptionArg"), "{text}");
    }
}
