//! Sequential token reader with one level of rollback.

use std::collections::VecDeque;

use super::{Token, TokenKind, classify};

/// Reads classified tokens from raw arguments.
///
/// Rollback is a single slot: [`Cursor::rollback`] un-reads the token most
/// recently returned by [`Cursor::next`], and a second call before the next
/// read does nothing.
///
/// # Examples
///
/// ```
/// use argwise::token::{Cursor, TokenKind};
///
/// let mut cursor = Cursor::new(["prog", "--name", "--verbose"], "=");
/// assert_eq!(cursor.raw_next().as_deref(), Some("prog"));
/// let name = cursor.next().expect("name");
/// let value = cursor.next().expect("candidate value");
/// assert_eq!(value.kind(), TokenKind::LongOption);
/// cursor.rollback();
/// let again = cursor.next().expect("verbose again");
/// assert_eq!(again.raw(), "--verbose");
/// assert_eq!((name.sequence(), again.sequence()), (1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    args: VecDeque<String>,
    separator: String,
    only_values: bool,
    sequence: usize,
    pending: VecDeque<Token>,
    known: Option<Token>,
    last: Option<Token>,
    pushed_back: Option<Token>,
}

impl Cursor {
    /// Creates a cursor over `args` using `separator` for fused values.
    pub fn new<I, S>(args: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            separator: separator.to_owned(),
            only_values: false,
            sequence: 0,
            pending: VecDeque::new(),
            known: None,
            last: None,
            pushed_back: None,
        }
    }

    /// Returns the next raw argument without classifying it.
    ///
    /// Used for the executable name; it does not advance the sequence
    /// number and cannot be rolled back.
    pub fn raw_next(&mut self) -> Option<String> {
        self.args.pop_front()
    }

    /// Returns the next token.
    ///
    /// Sources are consulted in order: the rollback slot, the fused value of
    /// the option just read, pending short-cluster members, then the next
    /// raw argument.
    #[expect(
        clippy::should_implement_trait,
        reason = "the cursor also rolls back, so it is not a plain iterator"
    )]
    pub fn next(&mut self) -> Option<Token> {
        let token = if let Some(token) = self.pushed_back.take() {
            token
        } else if let Some(token) = self.known.take() {
            token
        } else if let Some(token) = self.pending.pop_front() {
            token
        } else {
            self.pull()?
        };
        self.known = token.fused_value().cloned();
        self.last = Some(token.clone());
        Some(token)
    }

    /// Un-reads the last token returned by [`Cursor::next`].
    ///
    /// Returns `false` when there is nothing to un-read, either because no
    /// token has been read or because it was already rolled back.
    pub fn rollback(&mut self) -> bool {
        let Some(token) = self.last.take() else {
            return false;
        };
        self.known = None;
        self.pushed_back = Some(token);
        true
    }

    /// Peeks the fused value of the option just read.
    #[must_use]
    pub const fn known_option_argument(&self) -> Option<&Token> {
        self.known.as_ref()
    }

    /// Drops the fused value of the option just read.
    pub fn skip_known_option_argument(&mut self) -> Option<Token> {
        self.known.take()
    }

    /// Forces every later argument to classify as a positional value.
    pub const fn set_only_values(&mut self) {
        self.only_values = true;
    }

    /// Whether the cursor is in positional-only mode.
    #[must_use]
    pub const fn only_values(&self) -> bool {
        self.only_values
    }

    /// Number of raw arguments classified so far.
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    /// Consumes the cursor, returning arguments not yet read.
    ///
    /// A rolled-back token and any unread fused value or cluster members are
    /// rendered back to text ahead of the untouched raw arguments.
    #[must_use]
    pub fn into_remaining(self) -> Vec<String> {
        let mut remaining = Vec::new();
        if let Some(token) = self.pushed_back {
            let text = if token.fused_value().is_some() {
                token.source
            } else {
                token.raw
            };
            remaining.push(text);
        }
        remaining.extend(self.known.map(|token| token.raw));
        remaining.extend(self.pending.into_iter().map(|token| token.raw));
        remaining.extend(self.args);
        remaining
    }

    fn pull(&mut self) -> Option<Token> {
        let raw = self.args.pop_front()?;
        self.sequence += 1;
        let mut tokens = classify(&raw, &self.separator, self.only_values, self.sequence)
            .into_tokens();
        let first = tokens.pop_front()?;
        if first.kind() == TokenKind::Sentinel {
            self.only_values = true;
        }
        self.pending = tokens;
        Some(first)
    }
}
