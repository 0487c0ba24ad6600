//! Session configuration for a parse.
//!
//! [`ParseConfig`] is plain serde data so it can be layered with any
//! `figment` provider. It is itself a provider, letting applications start
//! from the built-in defaults and merge their own sources over the top.

use figment::value::{Dict, Map};
use figment::{Figment, Metadata, Profile, Provider, providers::Serialized};
use serde::{Deserialize, Serialize};

use crate::error::ArgsError;
use crate::token::DEFAULT_SEPARATOR;

/// How much of the argument stream the engine consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Process every argument.
    #[default]
    ProcessAllArgs,
    /// Stop at the `--` sentinel, leaving everything after it unread.
    ProcessUntilOnlyPositionals,
    /// Stop right after the first positional value is handled.
    ProcessUntilFirstPositional,
}

/// What the engine does once a problem is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemMode {
    /// Keep parsing and collect every problem.
    #[default]
    CollectAll,
    /// Stop at the first problem, then apply only flag options.
    StopAtFirstProblem,
}

/// Whether options may follow positional values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgOrdering {
    /// Options and positionals mix freely.
    #[default]
    Interleaved,
    /// The first positional ends option processing.
    OptionsFirst,
}

/// Settings consumed when a parse session starts.
///
/// # Examples
///
/// ```
/// use argwise::{ParseConfig, ProblemMode};
///
/// let config = ParseConfig::default()
///     .with_separator(":")
///     .with_problems(ProblemMode::StopAtFirstProblem);
/// assert_eq!(config.separator, ":");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Text joining an option key to a fused value.
    pub separator: String,
    /// Processing mode.
    pub processing: ProcessingMode,
    /// Problem mode.
    pub problems: ProblemMode,
    /// Option/positional ordering.
    pub ordering: ArgOrdering,
    /// Executable name reported instead of the first argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            processing: ProcessingMode::default(),
            problems: ProblemMode::default(),
            ordering: ArgOrdering::default(),
            executable: None,
        }
    }
}

impl ParseConfig {
    /// Sets the inline value separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the processing mode.
    #[must_use]
    pub const fn with_processing(mut self, mode: ProcessingMode) -> Self {
        self.processing = mode;
        self
    }

    /// Sets the problem mode.
    #[must_use]
    pub const fn with_problems(mut self, mode: ProblemMode) -> Self {
        self.problems = mode;
        self
    }

    /// Sets the option/positional ordering.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: ArgOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Reports `name` as the executable instead of the first argument.
    #[must_use]
    pub fn with_executable(mut self, name: impl Into<String>) -> Self {
        self.executable = Some(name.into());
        self
    }

    /// Returns a [`Figment`] seeded with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use argwise::{ParseConfig, ProcessingMode};
    /// use figment::providers::Serialized;
    ///
    /// let config = ParseConfig::from_figment(
    ///     &ParseConfig::figment()
    ///         .merge(Serialized::default("processing", "process_until_first_positional")),
    /// )
    /// .expect("valid configuration");
    /// assert_eq!(config.processing, ProcessingMode::ProcessUntilFirstPositional);
    /// assert_eq!(config.separator, "=");
    /// ```
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Self::default())
    }

    /// Extracts a configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::Config`] when the merged data does not describe a
    /// valid configuration.
    pub fn from_figment(figment: &Figment) -> Result<Self, ArgsError> {
        figment.extract().map_err(ArgsError::config)
    }
}

impl Provider for ParseConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("argwise parse configuration")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}

#[cfg(test)]
mod tests {
    use figment::providers::{Env, Serialized};
    use rstest::rstest;

    use super::{ArgOrdering, ParseConfig, ProblemMode, ProcessingMode};
    use crate::error::ArgsError;

    #[test]
    fn defaults_round_trip_through_figment() {
        let config = ParseConfig::from_figment(&ParseConfig::figment()).expect("defaults extract");
        assert_eq!(config, ParseConfig::default());
    }

    #[rstest]
    #[case::problems(
        "problems",
        "stop_at_first_problem",
        ParseConfig::default().with_problems(ProblemMode::StopAtFirstProblem)
    )]
    #[case::ordering(
        "ordering",
        "options_first",
        ParseConfig::default().with_ordering(ArgOrdering::OptionsFirst)
    )]
    #[case::processing(
        "processing",
        "process_until_first_positional",
        ParseConfig::default().with_processing(ProcessingMode::ProcessUntilFirstPositional)
    )]
    fn merged_values_override_defaults(
        #[case] key: &str,
        #[case] value: &str,
        #[case] expected: ParseConfig,
    ) {
        let config =
            ParseConfig::from_figment(&ParseConfig::figment().merge(Serialized::default(key, value)))
                .expect("valid override");
        assert_eq!(config, expected);
    }

    #[test]
    fn environment_layers_compose() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ARGWISE_SEPARATOR", ":");
            jail.set_env("ARGWISE_EXECUTABLE", "tool");
            let config = ParseConfig::from_figment(
                &ParseConfig::figment().merge(Env::prefixed("ARGWISE_")),
            )
            .map_err(figment::Error::from)?;
            assert_eq!(config.separator, ":");
            assert_eq!(config.executable.as_deref(), Some("tool"));
            Ok(())
        });
    }

    #[test]
    fn unknown_mode_is_a_config_error() {
        let err = ParseConfig::from_figment(
            &ParseConfig::figment().merge(Serialized::default("processing", "sometimes")),
        )
        .expect_err("invalid mode");
        assert!(matches!(err, ArgsError::Config(_)));
    }
}
