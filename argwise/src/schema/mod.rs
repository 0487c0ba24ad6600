//! Declarative parameter definitions.
//!
//! A [`Schema`] is an ordered list of [`ParameterSpec`]s. Structural rules
//! (unique keys, a single positional, sensible arity) are enforced by
//! [`SchemaBuilder::build`]; rules that depend on the value registry or the
//! session configuration are enforced when a [`Parser`](crate::Parser) is
//! created.

mod spec;
mod validate;

pub use spec::{Arity, ParamKind, ParamTag, ParameterSpec};

use crate::error::SchemaError;

/// Field name used for the positional parameter.
pub const POSITIONAL_FIELD: &str = "positional";

/// Validated, ordered collection of parameters.
///
/// # Examples
///
/// ```
/// use argwise::{ParameterSpec, Schema};
///
/// let schema = Schema::builder()
///     .param(ParameterSpec::option().long("name").single())
///     .param(ParameterSpec::option().short('x'))
///     .param(ParameterSpec::positional())
///     .build()
///     .expect("valid schema");
/// assert_eq!(schema.len(), 3);
/// assert!(schema.positional().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    specs: Vec<ParameterSpec>,
}

impl Schema {
    /// Starts an empty schema.
    #[must_use]
    pub const fn builder() -> SchemaBuilder {
        SchemaBuilder { specs: Vec::new() }
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn specs(&self) -> &[ParameterSpec] {
        &self.specs
    }

    /// Number of declared parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the schema declares no parameters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Index and spec of the positional parameter, if declared.
    #[must_use]
    pub fn positional(&self) -> Option<(usize, &ParameterSpec)> {
        self.specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.kind() == ParamKind::Positional)
    }

    /// Index of the first option whose long key equals `key`.
    #[must_use]
    pub fn find_long(&self, key: &str) -> Option<usize> {
        self.specs
            .iter()
            .position(|spec| spec.kind() == ParamKind::Option && spec.long_key() == Some(key))
    }

    /// Index of the first option whose short key equals `key`.
    #[must_use]
    pub fn find_short(&self, key: char) -> Option<usize> {
        self.specs
            .iter()
            .position(|spec| spec.kind() == ParamKind::Option && spec.short_key() == Some(key))
    }

    /// Index of the parameter with the given field name.
    #[must_use]
    pub fn find_field(&self, field: &str) -> Option<usize> {
        self.specs
            .iter()
            .position(|spec| spec.field_name() == field)
    }
}

/// Collects parameters for a [`Schema`].
#[derive(Debug, Clone, Default)]
#[must_use = "call `build` to obtain a schema"]
pub struct SchemaBuilder {
    specs: Vec<ParameterSpec>,
}

impl SchemaBuilder {
    /// Appends a parameter.
    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Appends several parameters.
    pub fn params(mut self, specs: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Validates the collected parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first structural violation.
    pub fn build(self) -> Result<Schema, SchemaError> {
        validate::structure(&self.specs)?;
        Ok(Schema { specs: self.specs })
    }
}

#[cfg(test)]
mod tests;
