//! Binds the parsing feature file to the step registry.

use crate::fixtures::{ParsingState, parsing_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/parsing.feature",
    fixtures = [parsing_state: ParsingState]
);
