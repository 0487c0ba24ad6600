//! A single parameter declaration.

use std::fmt;

use crate::value::Check;

use super::POSITIONAL_FIELD;

/// Whether a parameter is matched by key or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Matched by `-s` or `--long` key.
    Option,
    /// Matched by position.
    Positional,
}

/// How many values a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean switch taking no value.
    Flag,
    /// Exactly one value.
    Single,
    /// Between `min` and `max` values, stored in order.
    Multi {
        /// Fewest values accepted.
        min: usize,
        /// Most values accepted.
        max: usize,
    },
}

impl Arity {
    /// Largest number of values accepted.
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            Self::Flag | Self::Single => 1,
            Self::Multi { max, .. } => max,
        }
    }
}

/// Marker for parameters the caller treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamTag {
    /// Requests usage text.
    Help,
    /// Requests version information.
    Version,
}

/// Declaration of one option, flag or positional.
///
/// Options start as flags and positionals as single string values; the
/// builder methods refine them.
///
/// # Examples
///
/// ```
/// use argwise::{Arity, ParameterSpec};
///
/// let include = ParameterSpec::option()
///     .short('I')
///     .long("include")
///     .multi(0, 8)
///     .value_type("path")
///     .help("Directories to search");
/// assert_eq!(include.field_name(), "include");
/// assert_eq!(include.arity_kind(), Arity::Multi { min: 0, max: 8 });
/// ```
#[derive(Clone)]
#[must_use]
pub struct ParameterSpec {
    kind: ParamKind,
    short: Option<char>,
    long: Option<String>,
    arity: Arity,
    defaults: Vec<String>,
    value_type: String,
    check: Option<Check>,
    help: String,
    value_name: Option<String>,
    tag: Option<ParamTag>,
}

impl ParameterSpec {
    fn new(kind: ParamKind, arity: Arity) -> Self {
        Self {
            kind,
            short: None,
            long: None,
            arity,
            defaults: Vec::new(),
            value_type: String::from("str"),
            check: None,
            help: String::new(),
            value_name: None,
            tag: None,
        }
    }

    /// Starts an option declaration with flag arity.
    pub fn option() -> Self {
        Self::new(ParamKind::Option, Arity::Flag)
    }

    /// Starts a positional declaration with single arity.
    pub fn positional() -> Self {
        Self::new(ParamKind::Positional, Arity::Single)
    }

    /// Sets the short key matched by `-c`.
    pub fn short(mut self, key: char) -> Self {
        self.short = Some(key);
        self
    }

    /// Sets the long key matched by `--key`.
    pub fn long(mut self, key: impl Into<String>) -> Self {
        self.long = Some(key.into());
        self
    }

    /// Sets the arity.
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Shorthand for [`Arity::Flag`].
    pub fn flag(self) -> Self {
        self.arity(Arity::Flag)
    }

    /// Shorthand for [`Arity::Single`].
    pub fn single(self) -> Self {
        self.arity(Arity::Single)
    }

    /// Shorthand for [`Arity::Multi`].
    pub fn multi(self, min: usize, max: usize) -> Self {
        self.arity(Arity::Multi { min, max })
    }

    /// Names the registry parser converting this parameter's values.
    pub fn value_type(mut self, tag: impl Into<String>) -> Self {
        self.value_type = tag.into();
        self
    }

    /// Adds a default value, applied when the user supplies none.
    pub fn default_value(mut self, text: impl Into<String>) -> Self {
        self.defaults.push(text.into());
        self
    }

    /// Adds several default values.
    pub fn default_values<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Attaches a validation run on every converted value.
    pub fn check(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }

    /// Sets the help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the placeholder name used in messages.
    pub fn value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    /// Marks the parameter as special.
    pub fn tag(mut self, tag: ParamTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Whether this is an option or a positional.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Short key, if any.
    #[must_use]
    pub const fn short_key(&self) -> Option<char> {
        self.short
    }

    /// Long key, if any.
    #[must_use]
    pub fn long_key(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Declared arity.
    #[must_use]
    pub const fn arity_kind(&self) -> Arity {
        self.arity
    }

    /// Default value texts in declaration order.
    #[must_use]
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Registry tag of the value parser.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.value_type
    }

    /// Attached validation, if any.
    #[must_use]
    pub const fn check_fn(&self) -> Option<&Check> {
        self.check.as_ref()
    }

    /// Help text.
    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// Special marker, if any.
    #[must_use]
    pub const fn special(&self) -> Option<ParamTag> {
        self.tag
    }

    /// Record field name: long key, else short key, else `positional`.
    #[must_use]
    pub fn field_name(&self) -> String {
        match (self.kind, &self.long, self.short) {
            (ParamKind::Positional, _, _) => POSITIONAL_FIELD.to_owned(),
            (ParamKind::Option, Some(long), _) => long.clone(),
            (ParamKind::Option, None, Some(short)) => short.to_string(),
            (ParamKind::Option, None, None) => String::new(),
        }
    }

    /// Name used when the parameter appears in problem messages.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.kind, &self.long, self.short) {
            (ParamKind::Positional, _, _) => format!(
                "<{}>",
                self.value_name.as_deref().unwrap_or(POSITIONAL_FIELD)
            ),
            (ParamKind::Option, Some(long), _) => format!("--{long}"),
            (ParamKind::Option, None, Some(short)) => format!("-{short}"),
            (ParamKind::Option, None, None) => String::from("<option>"),
        }
    }
}

impl fmt::Debug for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSpec")
            .field("kind", &self.kind)
            .field("short", &self.short)
            .field("long", &self.long)
            .field("arity", &self.arity)
            .field("defaults", &self.defaults)
            .field("value_type", &self.value_type)
            .field("check", &self.check.as_ref().map(|_| "<check>"))
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
