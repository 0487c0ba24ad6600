//! Pure classification of a single raw argument.

use std::collections::VecDeque;

use super::{SENTINEL, Token, TokenKind};

/// Tokens produced from one raw argument.
///
/// Most arguments yield one token. A short cluster such as `-abc` yields one
/// token per character; every member except the last is marked
/// [`Token::no_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    tokens: VecDeque<Token>,
}

impl Classification {
    fn single(token: Token) -> Self {
        Self {
            tokens: VecDeque::from([token]),
        }
    }

    /// Tokens in command-line order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the classification produced no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(super) fn into_tokens(self) -> VecDeque<Token> {
        self.tokens
    }
}

/// Classifies `raw` as argument number `sequence`.
///
/// The result depends only on the arguments: the same text, separator and
/// mode always produce the same tokens.
///
/// # Examples
///
/// ```
/// use argwise::token::{TokenKind, classify};
///
/// let fused = classify("--name=Ann", "=", false, 1);
/// let option = fused.tokens().next().expect("one token");
/// assert_eq!(option.kind(), TokenKind::LongOption);
/// assert_eq!(option.key(), "name");
/// assert_eq!(option.fused_value().map(|value| value.raw()), Some("Ann"));
///
/// let forced = classify("--name=Ann", "=", true, 2);
/// assert_eq!(
///     forced.tokens().next().map(|token| token.kind()),
///     Some(TokenKind::PositionalValue)
/// );
/// ```
#[must_use]
pub fn classify(raw: &str, separator: &str, only_values: bool, sequence: usize) -> Classification {
    if only_values {
        return Classification::single(Token::new(raw, TokenKind::PositionalValue, sequence, raw));
    }
    if raw == SENTINEL {
        return Classification::single(Token::new(raw, TokenKind::Sentinel, sequence, raw));
    }
    if let Some(body) = raw.strip_prefix("--") {
        return Classification::single(long(raw, body, separator, sequence));
    }
    if let Some(body) = raw.strip_prefix('-') {
        return short(raw, body, separator, sequence);
    }
    Classification::single(Token::new(raw, TokenKind::PositionalValue, sequence, raw))
}

fn malformed(raw: &str, sequence: usize) -> Token {
    Token::new(raw, TokenKind::MalformedOption, sequence, raw)
}

fn fused_value(value: &str, sequence: usize, raw: &str) -> Token {
    Token::new(value, TokenKind::PositionalValue, sequence, raw)
}

fn long(raw: &str, body: &str, separator: &str, sequence: usize) -> Token {
    if body.starts_with('-') {
        return malformed(raw, sequence);
    }
    match body.split_once(separator) {
        Some(("", _)) => malformed(raw, sequence),
        Some((key, value)) => Token::new(format!("--{key}"), TokenKind::LongOption, sequence, raw)
            .with_key(key)
            .with_fused(fused_value(value, sequence, raw)),
        None => Token::new(raw, TokenKind::LongOption, sequence, raw).with_key(body),
    }
}

fn short(raw: &str, body: &str, separator: &str, sequence: usize) -> Classification {
    if body.is_empty() {
        return Classification::single(malformed(raw, sequence));
    }
    if let Some((key, value)) = body.split_once(separator) {
        let mut chars = key.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Classification::single(
                Token::new(format!("-{c}"), TokenKind::ShortOption, sequence, raw)
                    .with_key(c)
                    .with_fused(fused_value(value, sequence, raw)),
            ),
            _ => Classification::single(malformed(raw, sequence)),
        };
    }

    let count = body.chars().count();
    let tokens = body
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let token = Token::new(format!("-{c}"), TokenKind::ShortOption, sequence, raw)
                .with_key(c);
            if i + 1 < count {
                token.without_value()
            } else {
                token
            }
        })
        .collect();
    Classification { tokens }
}
