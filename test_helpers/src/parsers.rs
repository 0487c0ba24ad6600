//! Value parsers with observable behaviour for engine tests.
//!
//! # Examples
//!
//! ```
//! use argwise::ValueParser;
//! use test_helpers::parsers::RejectingParser;
//!
//! let parser = RejectingParser::new(["bad"]);
//! assert!(parser.parse("good").is_ok());
//! assert_eq!(
//!     parser.parse("bad").map_err(|err| err.kind().to_owned()),
//!     Err("Rejected".to_owned())
//! );
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use argwise::{Value, ValueError, ValueParser};

/// Error kind reported by [`RejectingParser`].
pub const REJECTED: &str = "Rejected";

/// Accepts any text as a string except the listed inputs.
#[derive(Debug, Clone, Default)]
pub struct RejectingParser {
    rejected: BTreeSet<String>,
    foldable: bool,
}

impl RejectingParser {
    /// Creates a parser rejecting each text in `rejected`.
    #[must_use]
    pub fn new<I, S>(rejected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rejected: rejected.into_iter().map(Into::into).collect(),
            foldable: false,
        }
    }

    /// Marks the parser as constant foldable.
    #[must_use]
    pub fn foldable(mut self) -> Self {
        self.foldable = true;
        self
    }
}

impl ValueParser for RejectingParser {
    fn type_name(&self) -> &str {
        "word"
    }

    fn parse(&self, text: &str) -> Result<Value, ValueError> {
        if self.rejected.contains(text) {
            return Err(ValueError::new(REJECTED, format!("'{text}' is rejected")));
        }
        Ok(Value::from(text))
    }

    fn is_constant_foldable(&self) -> bool {
        self.foldable
    }
}

/// String parser that counts how often it runs.
///
/// Clones share one counter, so a test can keep a handle after moving a
/// clone into a registry.
#[derive(Debug, Clone, Default)]
pub struct CountingParser {
    calls: Arc<AtomicUsize>,
}

impl CountingParser {
    /// Creates a parser with a zeroed counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `parse` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ValueParser for CountingParser {
    fn type_name(&self) -> &str {
        "counted"
    }

    fn parse(&self, text: &str) -> Result<Value, ValueError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Value::from(text))
    }
}
