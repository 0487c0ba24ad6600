//! Error types for the `hello_args` demo.
//!
//! Command-line problems are not errors here: they are printed from the
//! session's problem log. `HelloArgsError` covers definition and
//! configuration failures plus checks that span several options.

use thiserror::Error;

/// Errors raised by the hello args demo.
#[derive(Debug, Error)]
pub enum HelloArgsError {
    /// The demo's own parameter schema is invalid.
    #[error("invalid command-line definition: {0}")]
    Definition(#[from] argwise::SchemaError),
    /// Configuration or command-line failures reported by `argwise`.
    #[error(transparent)]
    Arguments(#[from] argwise::ArgsError),
    /// Bubbles up validation issues detected after parsing.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation issues spanning several parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Mutually exclusive delivery modes were enabled simultaneously.
    #[error("cannot combine --excited with --quiet")]
    ConflictingDeliveryModes,
    /// A salutation collapsed to nothing after trimming.
    #[error("salutations must contain visible characters (index {0})")]
    BlankSalutation(usize),
}

/// Convenient result alias for the demo.
pub type Result<T, E = HelloArgsError> = std::result::Result<T, E>;
