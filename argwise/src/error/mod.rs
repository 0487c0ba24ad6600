//! Error types produced when building or running a parser.

mod constructors;
mod conversions;
mod types;

pub use types::{ArgsError, SchemaError};
