//! Trait-based conversions between external error types and `ArgsError`.

use figment::Error as FigmentError;

use super::ArgsError;

impl From<FigmentError> for ArgsError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}

impl From<ArgsError> for FigmentError {
    /// Allow using `?` in code that returns `figment::Error`.
    fn from(e: ArgsError) -> Self {
        match e {
            // Preserve the original Figment error (keeps kind, metadata, and sources).
            ArgsError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
