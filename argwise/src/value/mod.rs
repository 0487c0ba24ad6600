//! Typed values produced by value parsers, and the parser registry.
//!
//! A [`Value`] is the tagged representation stored in a
//! [`Record`](crate::Record). Parsers and check functions report failures
//! with a [`ValueError`], whose kind and message are copied verbatim into the
//! problem log.

mod registry;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

pub use registry::{FnParser, ParserRegistry, ValueParser};

/// A converted argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Value {
    /// UTF-8 text.
    Str(String),
    /// Signed integer, widened to 64 bits.
    Int(i64),
    /// Unsigned integer, widened to 64 bits.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Filesystem path.
    Path(PathBuf),
}

impl Value {
    /// Returns the text when this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number when this is a [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number when this is a [`Value::UInt`].
    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean when this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

/// Failure reported by a value parser or a check function.
///
/// `kind` is a short machine-readable name such as `Overflow` or
/// `InvalidCharacter`; it becomes part of the recorded problem kind.
///
/// # Examples
///
/// ```
/// use argwise::ValueError;
///
/// let err = ValueError::new("OutOfRange", "port must be below 1024");
/// assert_eq!(err.kind(), "OutOfRange");
/// assert_eq!(err.to_string(), "port must be below 1024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    kind: String,
    message: String,
}

impl ValueError {
    /// Creates an error with the given kind name and message.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Machine-readable error kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Per-value validation run after conversion and before storage.
pub type Check = Arc<dyn Fn(&Value) -> Result<(), ValueError> + Send + Sync>;

/// Wraps a closure as a [`Check`].
///
/// # Examples
///
/// ```
/// use argwise::{Value, ValueError, check};
///
/// let even = check(|value: &Value| match value.as_uint() {
///     Some(n) if n % 2 == 0 => Ok(()),
///     _ => Err(ValueError::new("NotEven", "value must be even")),
/// });
/// assert!(even(&Value::UInt(4)).is_ok());
/// assert!(even(&Value::UInt(3)).is_err());
/// ```
pub fn check<F>(f: F) -> Check
where
    F: Fn(&Value) -> Result<(), ValueError> + Send + Sync + 'static,
{
    Arc::new(f)
}
