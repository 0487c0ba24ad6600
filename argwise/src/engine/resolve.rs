//! Default filling and minimum enforcement after dispatch.

use tracing::debug;

use super::Engine;
use crate::record::FieldValue;
use crate::schema::{Arity, ParameterSpec};
use crate::token::unquote;

impl Engine<'_> {
    /// Applies defaults to parameters the user never supplied, then reports
    /// every parameter left below its minimum.
    ///
    /// Problems raised here carry sequence number `0`.
    pub(super) fn resolve(&mut self) {
        let parser = self.parser;
        for (index, spec) in parser.schema.specs().iter().enumerate() {
            match spec.arity_kind() {
                Arity::Flag => {}
                Arity::Single => self.resolve_single(index, spec),
                Arity::Multi { min, .. } => self.resolve_multi(index, spec, min),
            }
        }
    }

    fn resolve_single(&mut self, index: usize, spec: &ParameterSpec) {
        if self.counters.at(index) > 0 {
            return;
        }
        if let Some(text) = spec.defaults().first()
            && let Some(value) = self.convert(index, unquote(text), text, 0)
        {
            debug!(field = %spec.field_name(), default = %value, "applied default");
            if let Some(FieldValue::Single(slot)) = self.record.at_mut(index) {
                *slot = Some(value);
            }
            self.counters.set(index, 1);
            return;
        }
        let display = spec.display_name();
        self.report(
            Self::missing_kind(spec),
            &display,
            0,
            format!("{display} is required"),
        );
    }

    fn resolve_multi(&mut self, index: usize, spec: &ParameterSpec, min: usize) {
        if self.counters.at(index) == 0 && !spec.defaults().is_empty() {
            let mut applied = 0;
            for text in spec.defaults() {
                let Some(value) = self.convert(index, unquote(text), text, 0) else {
                    continue;
                };
                debug!(field = %spec.field_name(), default = %value, "applied default");
                if let Some(FieldValue::Multi(values)) = self.record.at_mut(index) {
                    values.push(value);
                    applied += 1;
                }
            }
            self.counters.set(index, applied);
        }

        let count = self.counters.at(index);
        if count < min {
            let display = spec.display_name();
            self.report(
                Self::missing_kind(spec),
                &display,
                0,
                format!("{display} expects at least {min} values but {count} were supplied"),
            );
        }
    }
}
