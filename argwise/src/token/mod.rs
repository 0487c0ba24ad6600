//! Classified command-line tokens and the cursor that produces them.

mod classify;
mod cursor;

pub use classify::{Classification, classify};
pub use cursor::Cursor;

/// Separator between a key and a fused value unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = "=";

/// Marker that switches the cursor into positional-only mode.
pub const SENTINEL: &str = "--";

/// Shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `--key` or the key half of `--key=value`.
    LongOption,
    /// `-k`, the key half of `-k=value`, or one member of `-abc`.
    ShortOption,
    /// Anything not shaped like an option.
    PositionalValue,
    /// Dash-led text that is not a valid option.
    MalformedOption,
    /// The `--` marker.
    Sentinel,
}

/// One classified command-line token.
///
/// `raw` keeps any surrounding quotes, so it is the identity used in
/// problem reports; [`Token::value_text`] strips one pair of matching quotes
/// before the text reaches a value parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
    key: String,
    kind: TokenKind,
    sequence: usize,
    source: String,
    no_value: bool,
    fused: Option<Box<Token>>,
}

impl Token {
    fn new(raw: impl Into<String>, kind: TokenKind, sequence: usize, source: &str) -> Self {
        Self {
            raw: raw.into(),
            key: String::new(),
            kind,
            sequence,
            source: source.to_owned(),
            no_value: false,
            fused: None,
        }
    }

    fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    fn without_value(mut self) -> Self {
        self.no_value = true;
        self
    }

    fn with_fused(mut self, value: Self) -> Self {
        self.fused = Some(Box::new(value));
        self
    }

    /// Token text as written, e.g. `--name`, `-x` or `'a b'`.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Matched key for option tokens; empty otherwise.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Token classification.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// 1-based position of the argument this token came from.
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    /// Full argument text the token was split from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this short-cluster member may not consume a following value.
    #[must_use]
    pub const fn no_value(&self) -> bool {
        self.no_value
    }

    /// Whether the token names an option.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self.kind, TokenKind::LongOption | TokenKind::ShortOption)
    }

    /// Value fused onto the option with the inline separator.
    #[must_use]
    pub fn fused_value(&self) -> Option<&Self> {
        self.fused.as_deref()
    }

    /// Text passed to value parsers: `raw` without one pair of matching quotes.
    #[must_use]
    pub fn value_text(&self) -> &str {
        unquote(&self.raw)
    }
}

/// Strips one layer of matching single or double quotes.
///
/// # Examples
///
/// ```
/// use argwise::token::unquote;
///
/// assert_eq!(unquote("'a b'"), "a b");
/// assert_eq!(unquote("\"x\""), "x");
/// assert_eq!(unquote("'mismatch\""), "'mismatch\"");
/// ```
#[must_use]
pub fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

#[cfg(test)]
mod tests;
