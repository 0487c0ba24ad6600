//! The parsing engine: dispatch, default resolution and the parser facade.
//!
//! A [`Parser`] binds a [`Schema`] to resolved value parsers and a
//! [`ParseConfig`]. Each call to [`Parser::parse`] runs one session:
//!
//! 1. the executable name is read raw;
//! 2. the dispatch loop routes tokens to options and the positional;
//! 3. the resolver applies defaults and enforces minimums.
//!
//! User mistakes never abort a session; they are collected in the
//! session's [`ProblemLog`].

mod dispatch;
mod resolve;
mod session;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ParseConfig, ProblemMode};
use crate::error::SchemaError;
use crate::problem::{Problem, ProblemKind, ProblemLog};
use crate::record::{Counters, Record};
use crate::schema::{Arity, ParamKind, ParameterSpec, Schema};
use crate::token::Cursor;
use crate::value::{ParserRegistry, Value, ValueParser};

pub use session::ParseSession;

/// A schema bound to its value parsers and session configuration.
///
/// All definition-time checks run in [`Parser::with_config`], so a built
/// parser can run any number of sessions without failing.
///
/// # Examples
///
/// ```
/// use argwise::{ParameterSpec, Parser, ParserRegistry, Schema, Value};
///
/// let schema = Schema::builder()
///     .param(ParameterSpec::option().long("name").single())
///     .param(ParameterSpec::option().short('x'))
///     .param(ParameterSpec::positional())
///     .build()?;
/// let parser = Parser::new(schema, &ParserRegistry::with_builtins())?;
///
/// let session = parser.parse(["prog", "--name=Ann", "-x", "extra"]);
/// assert!(!session.has_problems());
/// assert_eq!(session.record().single("name"), Some(&Value::from("Ann")));
/// assert_eq!(session.record().flag("x"), Some(true));
/// assert_eq!(session.record().single("positional"), Some(&Value::from("extra")));
/// # Ok::<(), argwise::SchemaError>(())
/// ```
#[derive(Clone)]
pub struct Parser {
    schema: Schema,
    parsers: Vec<Option<Arc<dyn ValueParser>>>,
    names: Arc<[String]>,
    config: ParseConfig,
}

impl Parser {
    /// Binds `schema` to `registry` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Parser::with_config`].
    pub fn new(schema: Schema, registry: &ParserRegistry) -> Result<Self, SchemaError> {
        Self::with_config(schema, registry, ParseConfig::default())
    }

    /// Binds `schema` to `registry` and `config`.
    ///
    /// Every value type tag must resolve in `registry`, option keys must
    /// not contain the separator, and defaults whose parser is constant
    /// foldable must convert.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found.
    pub fn with_config(
        schema: Schema,
        registry: &ParserRegistry,
        config: ParseConfig,
    ) -> Result<Self, SchemaError> {
        if config.separator.is_empty() {
            return Err(SchemaError::EmptySeparator);
        }
        let parsers = schema
            .specs()
            .iter()
            .map(|spec| bind(spec, registry, &config.separator))
            .collect::<Result<Vec<_>, _>>()?;
        for spec in schema.specs() {
            if let Some(tag) = spec.special()
                && spec.arity_kind() != Arity::Flag
            {
                warn!(
                    field = %spec.field_name(),
                    ?tag,
                    "special tag on a parameter that is not a flag is never reported as set"
                );
            }
        }
        let names = schema
            .specs()
            .iter()
            .map(ParameterSpec::field_name)
            .collect();
        Ok(Self {
            schema,
            parsers,
            names,
            config,
        })
    }

    /// The bound schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses `args`, whose first element is the executable name.
    #[must_use]
    pub fn parse<I, S>(&self, args: I) -> ParseSession
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cursor = Cursor::new(args, &self.config.separator);
        Engine::new(self, cursor).run()
    }

    /// Parses the arguments of the current process.
    ///
    /// Arguments that are not valid Unicode are converted lossily.
    #[must_use]
    pub fn parse_env(&self) -> ParseSession {
        self.parse(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    fn spec(&self, index: usize) -> Option<&ParameterSpec> {
        self.schema.specs().get(index)
    }

    fn value_parser(&self, index: usize) -> Option<&Arc<dyn ValueParser>> {
        self.parsers.get(index).and_then(Option::as_ref)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn bind(
    spec: &ParameterSpec,
    registry: &ParserRegistry,
    separator: &str,
) -> Result<Option<Arc<dyn ValueParser>>, SchemaError> {
    let keys = spec
        .long_key()
        .map(|long| (long.to_owned(), format!("--{long}")))
        .into_iter()
        .chain(spec.short_key().map(|short| (short.to_string(), format!("-{short}"))));
    for (key, rendered) in keys {
        if key.contains(separator) {
            return Err(SchemaError::SeparatorInKey {
                key: rendered,
                separator: separator.to_owned(),
            });
        }
    }
    if spec.arity_kind() == Arity::Flag {
        return Ok(None);
    }

    let field = spec.field_name();
    let parser = registry
        .get(spec.type_tag())
        .ok_or_else(|| SchemaError::UnknownValueType {
            field: field.clone(),
            tag: spec.type_tag().to_owned(),
        })?;
    if parser.is_constant_foldable() {
        for text in spec.defaults() {
            parser
                .parse(crate::token::unquote(text))
                .map_err(|source| SchemaError::InvalidDefault {
                    field: field.clone(),
                    value: text.clone(),
                    source,
                })?;
        }
    }
    Ok(Some(Arc::clone(parser)))
}

/// Mutable state of one parse session.
struct Engine<'p> {
    parser: &'p Parser,
    cursor: Cursor,
    record: Record,
    counters: Counters,
    problems: ProblemLog,
}

impl<'p> Engine<'p> {
    fn new(parser: &'p Parser, cursor: Cursor) -> Self {
        Self {
            parser,
            cursor,
            record: Record::empty(&parser.schema, Arc::clone(&parser.names)),
            counters: Counters::empty(Arc::clone(&parser.names)),
            problems: ProblemLog::new(),
        }
    }

    fn run(mut self) -> ParseSession {
        let first = self.cursor.raw_next();
        let executable = self
            .parser
            .config
            .executable
            .clone()
            .or(first)
            .unwrap_or_default();

        if !self.dispatch() {
            self.resolve();
        }

        ParseSession::new(
            executable,
            self.record,
            self.counters,
            self.problems,
            self.cursor.into_remaining(),
            &self.parser.schema,
        )
    }

    fn stops_at_first_problem(&self) -> bool {
        self.parser.config.problems == ProblemMode::StopAtFirstProblem && !self.problems.is_empty()
    }

    fn report(
        &mut self,
        kind: ProblemKind,
        argument: &str,
        sequence: usize,
        details: impl Into<String>,
    ) {
        let problem = Problem::new(kind, argument, sequence, details);
        let summary = problem.to_string();
        if self.problems.push(problem) {
            debug!(problem = %summary, "recorded command-line problem");
        }
    }

    /// Converts and checks `text` for the parameter at `index`.
    ///
    /// Failures are reported against `argument`; a value rejected by the
    /// check is dropped here.
    fn convert(
        &mut self,
        index: usize,
        text: &str,
        argument: &str,
        sequence: usize,
    ) -> Option<Value> {
        let parser = self.parser;
        let spec = parser.spec(index)?;
        let value_parser = parser.value_parser(index)?;
        let value = match value_parser.parse(text) {
            Ok(value) => value,
            Err(err) => {
                self.report(
                    ProblemKind::InvalidValue(err.kind().to_owned()),
                    argument,
                    sequence,
                    format!("invalid value for {}: {err}", spec.display_name()),
                );
                return None;
            }
        };
        if let Some(check) = spec.check_fn()
            && let Err(err) = check(&value)
        {
            self.report(
                ProblemKind::CheckFailed(err.kind().to_owned()),
                argument,
                sequence,
                format!("invalid value for {}: {err}", spec.display_name()),
            );
            return None;
        }
        Some(value)
    }

    const fn missing_kind(spec: &ParameterSpec) -> ProblemKind {
        match spec.kind() {
            ParamKind::Option => ProblemKind::ExpectedOption,
            ParamKind::Positional => ProblemKind::ExpectedPositional,
        }
    }
}
