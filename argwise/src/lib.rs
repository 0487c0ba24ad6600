//! Core crate for the `argwise` command-line parsing engine.
//!
//! A [`Schema`] declares options and at most one positional parameter. A
//! [`Parser`] binds that schema to a [`ParserRegistry`] of value parsers,
//! then turns raw arguments into a [`ParseSession`] holding a typed
//! [`Record`] and a deduplicated [`ProblemLog`]. Parsing never stops at the
//! first user mistake unless [`ProblemMode::StopAtFirstProblem`] asks it to.
//!
//! ```
//! use argwise::{ParameterSpec, Parser, ParserRegistry, ProblemKind, Schema};
//!
//! let schema = Schema::builder()
//!     .param(ParameterSpec::option().long("name").single())
//!     .param(ParameterSpec::option().long("verbose").short('v'))
//!     .build()?;
//! let parser = Parser::new(schema, &ParserRegistry::with_builtins())?;
//!
//! let session = parser.parse(["prog", "--name", "--verbose"]);
//! let kinds: Vec<_> = session.problems().iter().map(|p| p.kind.clone()).collect();
//! assert_eq!(kinds, [ProblemKind::ExpectedOptionArg]);
//! assert_eq!(session.record().flag("verbose"), Some(true));
//! # Ok::<(), argwise::SchemaError>(())
//! ```

mod config;
mod engine;
mod error;
mod problem;
mod record;
mod schema;
pub mod token;
mod value;

pub use config::{ArgOrdering, ParseConfig, ProblemMode, ProcessingMode};
pub use engine::{ParseSession, Parser};
pub use error::{ArgsError, SchemaError};
pub use problem::{Problem, ProblemKind, ProblemLog};
pub use record::{Counters, FieldValue, Record};
pub use schema::{Arity, POSITIONAL_FIELD, ParamKind, ParamTag, ParameterSpec, Schema, SchemaBuilder};
pub use value::{Check, FnParser, ParserRegistry, Value, ValueError, ValueParser, check};
