//! The outcome of one parse.

use serde::Serialize;

use crate::error::ArgsError;
use crate::problem::ProblemLog;
use crate::record::{Counters, FieldValue, Record};
use crate::schema::{ParamTag, Schema};

/// Everything a parse produced: the record, its counters and problems.
///
/// A session is returned even when problems were found, so callers can
/// still honour a help request or report every problem at once.
#[derive(Debug, Clone, Serialize)]
pub struct ParseSession {
    executable: String,
    record: Record,
    counters: Counters,
    problems: ProblemLog,
    remaining: Vec<String>,
    #[serde(skip)]
    tagged: Vec<(ParamTag, usize)>,
}

impl ParseSession {
    pub(super) fn new(
        executable: String,
        record: Record,
        counters: Counters,
        problems: ProblemLog,
        remaining: Vec<String>,
        schema: &Schema,
    ) -> Self {
        let tagged = schema
            .specs()
            .iter()
            .enumerate()
            .filter_map(|(index, spec)| spec.special().map(|tag| (tag, index)))
            .collect();
        Self {
            executable,
            record,
            counters,
            problems,
            remaining,
            tagged,
        }
    }

    /// Executable name: the configured override or the first argument.
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The filled record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// User occurrence counts.
    #[must_use]
    pub const fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Problems found, in the order they were found.
    #[must_use]
    pub const fn problems(&self) -> &ProblemLog {
        &self.problems
    }

    /// Whether any problem was recorded.
    #[must_use]
    pub const fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Arguments left unread when a processing mode ended the parse early.
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Whether any flag carrying `tag` was set.
    #[must_use]
    pub fn tag_set(&self, tag: ParamTag) -> bool {
        self.tagged.iter().any(|&(candidate, index)| {
            candidate == tag && matches!(self.record.at(index), Some(FieldValue::Flag(true)))
        })
    }

    /// Whether a help flag was set.
    ///
    /// # Examples
    ///
    /// ```
    /// use argwise::{ParamTag, ParameterSpec, Parser, ParserRegistry, ProblemMode, ParseConfig, Schema};
    ///
    /// let schema = Schema::builder()
    ///     .param(ParameterSpec::option().long("help").short('h').tag(ParamTag::Help))
    ///     .param(ParameterSpec::option().long("count").single().value_type("u8"))
    ///     .build()?;
    /// let config = ParseConfig::default().with_problems(ProblemMode::StopAtFirstProblem);
    /// let parser = Parser::with_config(schema, &ParserRegistry::with_builtins(), config)?;
    ///
    /// let session = parser.parse(["prog", "--count", "many", "-h"]);
    /// assert!(session.has_problems());
    /// assert!(session.help_requested());
    /// # Ok::<(), argwise::SchemaError>(())
    /// ```
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.tag_set(ParamTag::Help)
    }

    /// Converts the session into its record, failing when problems exist.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::Problems`] carrying the whole problem log.
    pub fn into_result(self) -> Result<Record, ArgsError> {
        match ArgsError::problems(self.problems) {
            Some(err) => Err(err),
            None => Ok(self.record),
        }
    }

    /// Renders the session as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    #[cfg(feature = "serde_json")]
    pub fn report_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
