//! Library facade for the `hello_args` demo so tests can reuse the schema
//! and greeting helpers.

pub mod cli;
pub mod error;
pub mod message;
