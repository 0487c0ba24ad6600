//! Definition-time checks over a list of parameters.

use std::collections::BTreeSet;

use crate::error::SchemaError;

use super::{Arity, ParamKind, ParameterSpec};

/// Checks rules that hold regardless of registry and configuration.
pub(super) fn structure(specs: &[ParameterSpec]) -> Result<(), SchemaError> {
    let mut keys = BTreeSet::new();
    let mut fields = BTreeSet::new();
    let mut positionals = 0_usize;

    for (index, spec) in specs.iter().enumerate() {
        match spec.kind() {
            ParamKind::Option => option_keys(index, spec, &mut keys)?,
            ParamKind::Positional => {
                positionals += 1;
                if positionals > 1 {
                    return Err(SchemaError::MultiplePositionals);
                }
                if spec.short_key().is_some() || spec.long_key().is_some() {
                    return Err(SchemaError::PositionalKey);
                }
                if spec.arity_kind() == Arity::Flag {
                    return Err(SchemaError::FlagPositional);
                }
            }
        }
        let field = spec.field_name();
        arity(&field, spec)?;
        if !fields.insert(field.clone()) {
            return Err(SchemaError::DuplicateField { field });
        }
    }
    Ok(())
}

fn option_keys(
    index: usize,
    spec: &ParameterSpec,
    keys: &mut BTreeSet<String>,
) -> Result<(), SchemaError> {
    if spec.short_key().is_none() && spec.long_key().is_none() {
        return Err(SchemaError::MissingKey { index });
    }
    if let Some(short) = spec.short_key() {
        if short == '-' || short.is_whitespace() {
            return Err(SchemaError::InvalidShortKey { key: short });
        }
        let rendered = format!("-{short}");
        if !keys.insert(rendered.clone()) {
            return Err(SchemaError::DuplicateKey { key: rendered });
        }
    }
    if let Some(long) = spec.long_key() {
        if long.is_empty() || long.starts_with('-') || long.chars().any(char::is_whitespace) {
            return Err(SchemaError::InvalidLongKey {
                key: long.to_owned(),
            });
        }
        let rendered = format!("--{long}");
        if !keys.insert(rendered.clone()) {
            return Err(SchemaError::DuplicateKey { key: rendered });
        }
    }
    Ok(())
}

fn arity(field: &str, spec: &ParameterSpec) -> Result<(), SchemaError> {
    match spec.arity_kind() {
        Arity::Flag if !spec.defaults().is_empty() => Err(SchemaError::FlagDefault {
            field: field.to_owned(),
        }),
        Arity::Single if spec.defaults().len() > 1 => Err(SchemaError::TooManyDefaults {
            field: field.to_owned(),
            count: spec.defaults().len(),
        }),
        Arity::Multi { min, max } if max == 0 || min > max => Err(SchemaError::InvalidArity {
            field: field.to_owned(),
            min,
            max,
        }),
        _ => Ok(()),
    }
}
