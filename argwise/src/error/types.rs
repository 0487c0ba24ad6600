//! Primary error enums for schema definition and parse outcomes.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::problem::ProblemLog;
use crate::value::ValueError;

/// Contract violations detected while defining a parser.
///
/// These are programmer errors: they are reported before any argument is
/// read and never appear in a [`ProblemLog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two parameters share an option key.
    #[error("option key '{key}' is declared more than once")]
    DuplicateKey {
        /// Offending key, rendered with its dashes.
        key: String,
    },

    /// Two parameters resolve to the same record field.
    #[error("record field '{field}' is declared more than once")]
    DuplicateField {
        /// Field name shared by both parameters.
        field: String,
    },

    /// More than one positional parameter was declared.
    #[error("at most one positional parameter may be declared")]
    MultiplePositionals,

    /// An option declared neither a short nor a long key.
    #[error("option parameter #{index} declares no short or long key")]
    MissingKey {
        /// Zero-based index of the parameter in the schema.
        index: usize,
    },

    /// A short key is not usable on the command line.
    #[error("'{key}' cannot be used as a short option key")]
    InvalidShortKey {
        /// Rejected character.
        key: char,
    },

    /// A long key is empty or starts with a dash.
    #[error("'{key}' cannot be used as a long option key")]
    InvalidLongKey {
        /// Rejected key.
        key: String,
    },

    /// A long or short key contains the inline value separator.
    #[error("option key '{key}' contains the inline separator '{separator}'")]
    SeparatorInKey {
        /// Rejected key.
        key: String,
        /// Configured separator.
        separator: String,
    },

    /// A positional parameter was given an option key.
    #[error("positional parameters cannot declare option keys")]
    PositionalKey,

    /// A positional parameter was declared with flag arity.
    #[error("positional parameters cannot be flags")]
    FlagPositional,

    /// Multi arity bounds are inconsistent.
    #[error("invalid arity for '{field}': min {min} and max {max}")]
    InvalidArity {
        /// Field name of the parameter.
        field: String,
        /// Declared minimum.
        min: usize,
        /// Declared maximum.
        max: usize,
    },

    /// A flag was given default values.
    #[error("flag '{field}' cannot declare default values")]
    FlagDefault {
        /// Field name of the flag.
        field: String,
    },

    /// A single-value parameter declared several defaults.
    #[error("'{field}' accepts one value but declares {count} defaults")]
    TooManyDefaults {
        /// Field name of the parameter.
        field: String,
        /// Number of declared defaults.
        count: usize,
    },

    /// A type tag has no parser in the registry.
    #[error("'{field}' uses unknown value type '{tag}'")]
    UnknownValueType {
        /// Field name of the parameter.
        field: String,
        /// Unresolved type tag.
        tag: String,
    },

    /// A default failed eager validation.
    #[error("default '{value}' for '{field}' is invalid: {source}")]
    InvalidDefault {
        /// Field name of the parameter.
        field: String,
        /// Rejected default text.
        value: String,
        /// Parser error describing the rejection.
        #[source]
        source: ValueError,
    },

    /// The configured inline separator is empty.
    #[error("the inline value separator must not be empty")]
    EmptySeparator,
}

/// Errors surfaced by the `argwise` API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArgsError {
    /// The parameter schema or parser configuration is invalid.
    #[error("invalid parser definition: {0}")]
    Schema(#[from] SchemaError),

    /// Parser configuration could not be extracted.
    #[error("failed to load parser configuration: {0}")]
    Config(#[from] Box<FigmentError>),

    /// Parsing finished with one or more problems.
    #[error("command-line problems:\n{0}")]
    Problems(Box<ProblemLog>),
}
