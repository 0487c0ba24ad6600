//! Shared fixtures for the behavioural suite.

use argwise::{ParameterSpec, ParseConfig, ParseSession};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state shared between parsing steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ParsingState {
    pub specs: Slot<Vec<ParameterSpec>>,
    pub config: Slot<ParseConfig>,
    pub session: Slot<ParseSession>,
}

impl ParsingState {
    /// Appends `spec` to the schema under construction.
    pub fn add_spec(&self, spec: ParameterSpec) {
        let mut specs = self.specs.take().unwrap_or_default();
        specs.push(spec);
        self.specs.set(specs);
    }
}

/// Creates an empty parsing state.
#[fixture]
pub fn parsing_state() -> ParsingState {
    ParsingState::default()
}
