//! Token dispatch: routes each token to an option or the positional.

use tracing::trace;

use super::Engine;
use crate::config::{ArgOrdering, ProcessingMode};
use crate::problem::ProblemKind;
use crate::record::FieldValue;
use crate::schema::Arity;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    ProcessingOptions,
    OnlyPositionals,
    Done,
}

impl Engine<'_> {
    /// Runs the dispatch loop until the arguments run out or the
    /// processing mode ends it.
    ///
    /// Returns `true` when the loop was aborted by the first problem; the
    /// remaining flags have then already been applied.
    pub(super) fn dispatch(&mut self) -> bool {
        let mut state = DispatchState::ProcessingOptions;
        while state != DispatchState::Done {
            let Some(token) = self.cursor.next() else {
                break;
            };
            trace!(
                raw = token.raw(),
                kind = ?token.kind(),
                sequence = token.sequence(),
                "dispatching token"
            );
            state = match (state, token.kind()) {
                (DispatchState::ProcessingOptions, TokenKind::LongOption | TokenKind::ShortOption) => {
                    self.match_option(&token);
                    state
                }
                (DispatchState::ProcessingOptions, TokenKind::MalformedOption) => {
                    self.report(
                        ProblemKind::MalformedOption,
                        token.raw(),
                        token.sequence(),
                        format!("'{}' is not a valid option", token.raw()),
                    );
                    state
                }
                (DispatchState::ProcessingOptions, TokenKind::Sentinel) => {
                    match self.parser.config.processing {
                        ProcessingMode::ProcessUntilOnlyPositionals => DispatchState::Done,
                        _ => DispatchState::OnlyPositionals,
                    }
                }
                _ => {
                    self.match_positional(&token);
                    self.after_positional(state)
                }
            };
            if self.stops_at_first_problem() {
                if state != DispatchState::Done {
                    self.apply_flags_only();
                }
                return true;
            }
        }
        false
    }

    fn after_positional(&mut self, state: DispatchState) -> DispatchState {
        if self.parser.config.processing == ProcessingMode::ProcessUntilFirstPositional {
            return DispatchState::Done;
        }
        if self.parser.config.ordering == ArgOrdering::OptionsFirst {
            self.cursor.set_only_values();
            return DispatchState::OnlyPositionals;
        }
        state
    }

    fn find_option(&self, token: &Token) -> Option<usize> {
        let schema = &self.parser.schema;
        match token.kind() {
            TokenKind::LongOption => schema.find_long(token.key()),
            TokenKind::ShortOption => token.key().chars().next().and_then(|key| schema.find_short(key)),
            _ => None,
        }
    }

    fn match_option(&mut self, token: &Token) {
        let parser = self.parser;
        let Some((index, spec)) = self
            .find_option(token)
            .and_then(|index| parser.spec(index).map(|spec| (index, spec)))
        else {
            self.unrecognized(token);
            return;
        };
        let count = self.counters.bump(index);
        let display = spec.display_name();

        if spec.arity_kind() == Arity::Flag {
            if let Some(value) = self.cursor.skip_known_option_argument() {
                self.report(
                    ProblemKind::UnexpectedFlagArg,
                    token.source(),
                    token.sequence(),
                    format!("{display} does not take a value (got '{}')", value.raw()),
                );
                return;
            }
            if let Some(FieldValue::Flag(set)) = self.record.at_mut(index) {
                *set = true;
            }
            if count > 1 {
                self.report(
                    ProblemKind::UnexpectedFlag,
                    token.raw(),
                    token.sequence(),
                    format!("{display} was given more than once"),
                );
            }
            return;
        }

        let Some(value) = self.option_value(token, &display) else {
            return;
        };
        match spec.arity_kind() {
            Arity::Single if count > 1 => {
                self.report(
                    ProblemKind::UnexpectedFlag,
                    token.raw(),
                    token.sequence(),
                    format!("{display} accepts only one value"),
                );
                self.ignore(&value, &display);
            }
            Arity::Multi { max, .. } if count > max => {
                if count == max + 1 {
                    self.report(
                        ProblemKind::UnexpectedOption,
                        token.raw(),
                        token.sequence(),
                        format!("{display} accepts at most {max} values"),
                    );
                } else {
                    self.ignore(&value, &display);
                }
            }
            _ => self.store(index, &value),
        }
    }

    /// Reads the value token for a value-taking option.
    ///
    /// An option or sentinel found in value position is rolled back so it
    /// is dispatched on its own.
    fn option_value(&mut self, token: &Token, display: &str) -> Option<Token> {
        if token.no_value() {
            self.report(
                ProblemKind::ExpectedOptionArg,
                token.raw(),
                token.sequence(),
                format!(
                    "{display} requires a value but is not last in '{}'",
                    token.source()
                ),
            );
            return None;
        }
        let Some(value) = self.cursor.next() else {
            self.report(
                ProblemKind::ExpectedOptionArg,
                token.raw(),
                token.sequence(),
                format!("{display} requires a value"),
            );
            return None;
        };
        match value.kind() {
            TokenKind::PositionalValue => Some(value),
            TokenKind::MalformedOption => {
                self.report(
                    ProblemKind::MalformedOption,
                    value.raw(),
                    value.sequence(),
                    format!("'{}' is not a valid option", value.raw()),
                );
                None
            }
            TokenKind::LongOption | TokenKind::ShortOption | TokenKind::Sentinel => {
                self.report(
                    ProblemKind::ExpectedOptionArg,
                    token.raw(),
                    token.sequence(),
                    format!("{display} requires a value but found '{}'", value.raw()),
                );
                self.cursor.rollback();
                None
            }
        }
    }

    fn match_positional(&mut self, token: &Token) {
        let parser = self.parser;
        let Some((index, spec)) = parser.schema.positional() else {
            self.report(
                ProblemKind::UnexpectedPositional,
                token.raw(),
                token.sequence(),
                format!("unexpected positional argument '{}'", token.raw()),
            );
            return;
        };
        let count = self.counters.bump(index);
        let max = spec.arity_kind().max();
        if count <= max {
            self.store(index, token);
        } else if count == max + 1 {
            self.report(
                ProblemKind::UnexpectedPositional,
                token.raw(),
                token.sequence(),
                format!("{} accepts at most {max} values", spec.display_name()),
            );
        }
    }

    fn unrecognized(&mut self, token: &Token) {
        self.report(
            ProblemKind::UnrecognizedOption,
            token.raw(),
            token.sequence(),
            format!("unrecognized option '{}'", token.raw()),
        );
        if let Some(value) = self.cursor.skip_known_option_argument() {
            self.ignore(&value, &format!("'{}'", token.raw()));
        }
    }

    fn ignore(&mut self, value: &Token, display: &str) {
        self.report(
            ProblemKind::IgnoreOptionArg,
            value.raw(),
            value.sequence(),
            format!("ignoring value '{}' for {display}", value.raw()),
        );
    }

    /// Converts `value` and stores it in the field at `index`.
    fn store(&mut self, index: usize, value: &Token) {
        let Some(converted) = self.convert(index, value.value_text(), value.raw(), value.sequence())
        else {
            return;
        };
        match self.record.at_mut(index) {
            Some(FieldValue::Single(slot)) => *slot = Some(converted),
            Some(FieldValue::Multi(values)) => values.push(converted),
            Some(FieldValue::Flag(_)) | None => {}
        }
    }

    /// Applies the remaining flag options after an aborted dispatch.
    ///
    /// The token that raised the problem is read again first. Values,
    /// value-taking options and unknown options are skipped without
    /// reporting; a flag carrying a fused value is left unset. Positionals
    /// and the sentinel end the pass under the same processing and ordering
    /// rules as [`Engine::dispatch`], so `remaining()` matches a clean run.
    fn apply_flags_only(&mut self) {
        let mut replayed = self.cursor.rollback();
        while let Some(token) = self.cursor.next() {
            let replay = std::mem::take(&mut replayed);
            match token.kind() {
                TokenKind::Sentinel
                    if self.parser.config.processing
                        == ProcessingMode::ProcessUntilOnlyPositionals =>
                {
                    break;
                }
                // A replayed value was already accounted for by dispatch.
                TokenKind::PositionalValue if !replay => {
                    if self.after_positional(DispatchState::ProcessingOptions)
                        == DispatchState::Done
                    {
                        break;
                    }
                }
                TokenKind::LongOption | TokenKind::ShortOption => self.apply_flag(&token),
                TokenKind::PositionalValue | TokenKind::Sentinel | TokenKind::MalformedOption => {}
            }
        }
    }

    fn apply_flag(&mut self, token: &Token) {
        let flag = self.find_option(token).filter(|&index| {
            self.parser
                .spec(index)
                .is_some_and(|spec| spec.arity_kind() == Arity::Flag)
        });
        let fused = self.cursor.skip_known_option_argument();
        let Some(index) = flag.filter(|_| fused.is_none()) else {
            return;
        };
        if let Some(FieldValue::Flag(set)) = self.record.at_mut(index)
            && !*set
        {
            *set = true;
            self.counters.bump(index);
            trace!(flag = token.raw(), "applied flag after first problem");
        }
    }
}
