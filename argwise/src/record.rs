//! The typed record filled in by a parse, and its occurrence counters.
//!
//! Fields are addressed by name (see
//! [`ParameterSpec::field_name`](crate::ParameterSpec::field_name)) and kept
//! in declaration order.

use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::schema::{Arity, Schema};
use crate::value::Value;

/// Current value of one record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Flag state.
    Flag(bool),
    /// Optional single value.
    Single(Option<Value>),
    /// Ordered values.
    Multi(Vec<Value>),
}

impl FieldValue {
    const fn empty(arity: Arity) -> Self {
        match arity {
            Arity::Flag => Self::Flag(false),
            Arity::Single => Self::Single(None),
            Arity::Multi { .. } => Self::Multi(Vec::new()),
        }
    }
}

/// Values collected for every declared parameter.
///
/// # Examples
///
/// ```
/// use argwise::{ParameterSpec, ParserRegistry, Parser, Schema, Value};
///
/// let schema = Schema::builder()
///     .param(ParameterSpec::option().long("tag").multi(0, 4))
///     .build()?;
/// let parser = Parser::new(schema, &ParserRegistry::with_builtins())?;
/// let session = parser.parse(["prog", "--tag", "a", "--tag", "b"]);
/// assert_eq!(
///     session.record().multi("tag"),
///     Some(&[Value::from("a"), Value::from("b")][..])
/// );
/// # Ok::<(), argwise::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    names: Arc<[String]>,
    values: Vec<FieldValue>,
}

impl Record {
    pub(crate) fn empty(schema: &Schema, names: Arc<[String]>) -> Self {
        Self {
            names,
            values: schema
                .specs()
                .iter()
                .map(|spec| FieldValue::empty(spec.arity_kind()))
                .collect(),
        }
    }

    fn index(&self, field: &str) -> Option<usize> {
        self.names.iter().position(|name| name == field)
    }

    /// Value of `field`, if declared.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.index(field).and_then(|i| self.values.get(i))
    }

    /// Flag state of `field`; `None` when it is not a declared flag.
    #[must_use]
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            FieldValue::Flag(set) => Some(*set),
            _ => None,
        }
    }

    /// Value of a single-value `field`, if one was stored.
    #[must_use]
    pub fn single(&self, field: &str) -> Option<&Value> {
        match self.get(field)? {
            FieldValue::Single(value) => value.as_ref(),
            _ => None,
        }
    }

    /// Values of a multi-value `field`.
    #[must_use]
    pub fn multi(&self, field: &str) -> Option<&[Value]> {
        match self.get(field)? {
            FieldValue::Multi(values) => Some(values),
            _ => None,
        }
    }

    /// Iterates over `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.names.iter().map(String::as_str).zip(&self.values)
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Option<&mut FieldValue> {
        self.values.get_mut(index)
    }

    pub(crate) fn at(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// User-supplied occurrence count for every declared parameter.
///
/// Counts include occurrences whose value was rejected; they exclude
/// defaults except where a default stands in for a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counters {
    names: Arc<[String]>,
    counts: Vec<usize>,
}

impl Counters {
    pub(crate) fn empty(names: Arc<[String]>) -> Self {
        let counts = vec![0; names.len()];
        Self { names, counts }
    }

    /// Occurrences of `field`, if declared.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<usize> {
        let index = self.names.iter().position(|name| name == field)?;
        self.counts.get(index).copied()
    }

    /// Iterates over `(field, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    pub(crate) fn at(&self, index: usize) -> usize {
        self.counts.get(index).copied().unwrap_or_default()
    }

    /// Increments the counter at `index`, returning the new count.
    pub(crate) fn bump(&mut self, index: usize) -> usize {
        self.counts.get_mut(index).map_or(0, |count| {
            *count += 1;
            *count
        })
    }

    pub(crate) fn set(&mut self, index: usize, value: usize) {
        if let Some(count) = self.counts.get_mut(index) {
            *count = value;
        }
    }
}

impl Serialize for Counters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (name, count) in self.iter() {
            map.serialize_entry(name, &count)?;
        }
        map.end()
    }
}
