//! Value parser trait and the registry that resolves type tags.

use std::collections::BTreeMap;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;
use std::sync::Arc;

use super::{Value, ValueError};

macro_rules! signed {
    ($registry:ident, $($ty:ident),+) => {$(
        $registry.insert_builtin(stringify!($ty), |text| {
            let parsed = text
                .parse::<$ty>()
                .map_err(|err| int_error(text, stringify!($ty), &err))?;
            i64::try_from(parsed)
                .map(Value::Int)
                .map_err(|_| overflow(text, stringify!($ty)))
        });
    )+};
}

macro_rules! unsigned {
    ($registry:ident, $($ty:ident),+) => {$(
        $registry.insert_builtin(stringify!($ty), |text| {
            let parsed = text
                .parse::<$ty>()
                .map_err(|err| int_error(text, stringify!($ty), &err))?;
            u64::try_from(parsed)
                .map(Value::UInt)
                .map_err(|_| overflow(text, stringify!($ty)))
        });
    )+};
}

macro_rules! float {
    ($registry:ident, $($ty:ident),+) => {$(
        $registry.insert_builtin(stringify!($ty), |text| {
            text.parse::<$ty>()
                .map(|n| Value::Float(f64::from(n)))
                .map_err(|err| {
                    ValueError::new(
                        "InvalidCharacter",
                        format!("'{text}' is not a valid {}: {err}", stringify!($ty)),
                    )
                })
        });
    )+};
}

/// Converts raw argument text into a typed [`Value`].
///
/// Implementations must be pure: the same text always yields the same
/// result. Parsers that also have no runtime dependencies should report
/// [`ValueParser::is_constant_foldable`] so defaults can be validated when
/// the parser is built rather than on every parse.
pub trait ValueParser: Send + Sync {
    /// Name of the produced type, used in diagnostics.
    fn type_name(&self) -> &str;

    /// Converts `text` into a value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] describing why `text` is not acceptable.
    fn parse(&self, text: &str) -> Result<Value, ValueError>;

    /// Whether defaults for this parser may be validated eagerly.
    fn is_constant_foldable(&self) -> bool {
        false
    }
}

/// Adapts a closure into a [`ValueParser`].
///
/// # Examples
///
/// ```
/// use argwise::{FnParser, Value, ValueError, ValueParser};
///
/// let upper = FnParser::new("upper", |text| Ok(Value::Str(text.to_uppercase())));
/// assert_eq!(upper.parse("abc"), Ok(Value::Str("ABC".into())));
/// ```
pub struct FnParser<F> {
    name: String,
    parse: F,
    foldable: bool,
}

impl<F> FnParser<F>
where
    F: Fn(&str) -> Result<Value, ValueError> + Send + Sync,
{
    /// Wraps `parse` under the given type name.
    #[must_use]
    pub fn new(name: impl Into<String>, parse: F) -> Self {
        Self {
            name: name.into(),
            parse,
            foldable: false,
        }
    }

    /// Marks the parser as safe for eager default validation.
    #[must_use]
    pub fn constant_foldable(mut self) -> Self {
        self.foldable = true;
        self
    }
}

impl<F> ValueParser for FnParser<F>
where
    F: Fn(&str) -> Result<Value, ValueError> + Send + Sync,
{
    fn type_name(&self) -> &str {
        &self.name
    }

    fn parse(&self, text: &str) -> Result<Value, ValueError> {
        (self.parse)(text)
    }

    fn is_constant_foldable(&self) -> bool {
        self.foldable
    }
}

impl<F> fmt::Debug for FnParser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnParser")
            .field("name", &self.name)
            .field("foldable", &self.foldable)
            .finish_non_exhaustive()
    }
}

/// Immutable lookup table from type tag to parser.
///
/// The registry is passed explicitly to [`Parser::new`](crate::Parser::new);
/// there is no process-wide default.
///
/// # Examples
///
/// ```
/// use argwise::ParserRegistry;
///
/// let registry = ParserRegistry::with_builtins();
/// assert!(registry.get("u16").is_some());
/// assert!(registry.get("uuid").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: BTreeMap<String, Arc<dyn ValueParser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in parsers.
    ///
    /// Registered tags: `str`, `string`, `bool`, `char`, `path`, `i8`,
    /// `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`, `u64`, `usize`,
    /// `f32` and `f64`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert_builtin("str", |text| Ok(Value::Str(text.to_owned())));
        registry.insert_builtin("string", |text| Ok(Value::Str(text.to_owned())));
        registry.insert_builtin("path", |text| Ok(Value::Path(PathBuf::from(text))));
        registry.insert_builtin("bool", |text| {
            text.parse::<bool>().map(Value::Bool).map_err(|_| {
                ValueError::new(
                    "InvalidBool",
                    format!("'{text}' is not a valid bool (expected `true` or `false`)"),
                )
            })
        });
        registry.insert_builtin("char", |text| {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(ValueError::new(
                    "InvalidChar",
                    format!("'{text}' is not a single character"),
                )),
            }
        });
        signed!(registry, i8, i16, i32, i64, isize);
        unsigned!(registry, u8, u16, u32, u64, usize);
        float!(registry, f32, f64);
        registry
    }

    /// Registers `parser` under `tag`, replacing any previous entry.
    pub fn register(&mut self, tag: impl Into<String>, parser: impl ValueParser + 'static) {
        self.parsers.insert(tag.into(), Arc::new(parser));
    }

    /// Builder-style variant of [`ParserRegistry::register`].
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, parser: impl ValueParser + 'static) -> Self {
        self.register(tag, parser);
        self
    }

    /// Resolves a type tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn ValueParser>> {
        self.parsers.get(tag)
    }

    /// Iterates over the registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    fn insert_builtin<F>(&mut self, tag: &str, parse: F)
    where
        F: Fn(&str) -> Result<Value, ValueError> + Send + Sync + 'static,
    {
        self.register(tag, FnParser::new(tag, parse).constant_foldable());
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.parsers.keys()).finish()
    }
}

fn int_error(text: &str, ty: &str, err: &ParseIntError) -> ValueError {
    let kind = match err.kind() {
        IntErrorKind::Empty => "Empty",
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "Overflow",
        _ => "InvalidCharacter",
    };
    ValueError::new(kind, format!("'{text}' is not a valid {ty}: {err}"))
}

fn overflow(text: &str, ty: &str) -> ValueError {
    ValueError::new("Overflow", format!("'{text}' does not fit in a {ty}"))
}
