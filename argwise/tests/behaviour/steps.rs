//! Step definitions for the parsing scenarios.

use anyhow::{Context, Result, anyhow, ensure};
use argwise::{
    ParamTag, ParameterSpec, ParseConfig, ParseSession, Parser, ParserRegistry, Schema,
};
use figment::providers::Serialized;
use rstest_bdd_macros::{given, then, when};
use test_helpers::parsers::RejectingParser;
use test_helpers::problems::ensure_kinds;
use test_helpers::text::{command_line, csv_items, normalize_scalar};

use crate::fixtures::ParsingState;

fn keyed(key: &str) -> Result<ParameterSpec> {
    let key = normalize_scalar(key);
    if let Some(long) = key.strip_prefix("--") {
        return Ok(ParameterSpec::option().long(long));
    }
    let mut chars = key.strip_prefix('-').map(str::chars).into_iter().flatten();
    match (chars.next(), chars.next()) {
        (Some(short), None) => Ok(ParameterSpec::option().short(short)),
        _ => Err(anyhow!("'{key}' is neither a long nor a short option key")),
    }
}

fn configure(state: &ParsingState, key: &str, value: &str) -> Result<()> {
    let base = state.config.take().unwrap_or_default();
    let config = ParseConfig::from_figment(
        &figment::Figment::from(base).merge(Serialized::default(key, normalize_scalar(value))),
    )?;
    state.config.set(config);
    Ok(())
}

fn session(state: &ParsingState) -> Result<ParseSession> {
    state
        .session
        .get()
        .ok_or_else(|| anyhow!("no command line has been parsed"))
}

#[given("a flag option {key}")]
fn flag_option(parsing_state: &ParsingState, key: String) -> Result<()> {
    parsing_state.add_spec(keyed(&key)?);
    Ok(())
}

#[given("a help flag {key}")]
fn help_flag(parsing_state: &ParsingState, key: String) -> Result<()> {
    parsing_state.add_spec(keyed(&key)?.tag(ParamTag::Help));
    Ok(())
}

#[given("a single-value option {key}")]
fn single_option(parsing_state: &ParsingState, key: String) -> Result<()> {
    parsing_state.add_spec(keyed(&key)?.single());
    Ok(())
}

#[given("a typed option {key} of type {tag}")]
fn typed_option(parsing_state: &ParsingState, key: String, tag: String) -> Result<()> {
    parsing_state.add_spec(keyed(&key)?.single().value_type(normalize_scalar(&tag)));
    Ok(())
}

#[given("a multi-value option {key} taking {min:usize} to {max:usize} values")]
fn multi_option(parsing_state: &ParsingState, key: String, min: usize, max: usize) -> Result<()> {
    parsing_state.add_spec(keyed(&key)?.multi(min, max));
    Ok(())
}

#[given("a word option {key} with defaults {defaults}")]
fn word_option(parsing_state: &ParsingState, key: String, defaults: String) -> Result<()> {
    parsing_state.add_spec(
        keyed(&key)?
            .multi(0, 8)
            .value_type("word")
            .default_values(csv_items(&defaults)),
    );
    Ok(())
}

#[given("a single positional")]
fn single_positional(parsing_state: &ParsingState) {
    parsing_state.add_spec(ParameterSpec::positional());
}

#[given("a positional taking {min:usize} to {max:usize} values")]
fn multi_positional(parsing_state: &ParsingState, min: usize, max: usize) {
    parsing_state.add_spec(ParameterSpec::positional().multi(min, max));
}

#[given("the processing mode {mode}")]
fn processing_mode(parsing_state: &ParsingState, mode: String) -> Result<()> {
    configure(parsing_state, "processing", &mode)
}

#[given("the problem mode {mode}")]
fn problem_mode(parsing_state: &ParsingState, mode: String) -> Result<()> {
    configure(parsing_state, "problems", &mode)
}

#[given("the ordering {ordering}")]
fn ordering(parsing_state: &ParsingState, ordering: String) -> Result<()> {
    configure(parsing_state, "ordering", &ordering)
}

#[when("the command line {line} is parsed")]
fn parse_line(parsing_state: &ParsingState, line: String) -> Result<()> {
    let schema = Schema::builder()
        .params(parsing_state.specs.take().unwrap_or_default())
        .build()?;
    let registry = ParserRegistry::with_builtins().with("word", RejectingParser::new(["bad"]));
    let config = parsing_state.config.take().unwrap_or_default();
    let parser = Parser::with_config(schema, &registry, config)?;
    let args = command_line(&normalize_scalar(&line))?;
    parsing_state.session.set(parser.parse(args));
    Ok(())
}

#[then("there are no problems")]
fn no_problems(parsing_state: &ParsingState) -> Result<()> {
    ensure_kinds(session(parsing_state)?.problems(), &[])
}

#[then("the problems are {kinds}")]
fn problems_are(parsing_state: &ParsingState, kinds: String) -> Result<()> {
    let expected = csv_items(&kinds);
    let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    ensure_kinds(session(parsing_state)?.problems(), &expected)
}

#[then("the flag {field} is set")]
fn flag_is_set(parsing_state: &ParsingState, field: String) -> Result<()> {
    let field = normalize_scalar(&field);
    let set = session(parsing_state)?
        .record()
        .flag(&field)
        .with_context(|| format!("'{field}' is not a declared flag"))?;
    ensure!(set, "flag '{field}' is not set");
    Ok(())
}

#[then("the field {field} is {value}")]
fn field_is(parsing_state: &ParsingState, field: String, value: String) -> Result<()> {
    let field = normalize_scalar(&field);
    let expected = normalize_scalar(&value);
    let session = session(parsing_state)?;
    let actual = session
        .record()
        .single(&field)
        .with_context(|| format!("'{field}' holds no value"))?
        .to_string();
    ensure!(actual == expected, "'{field}' is '{actual}'; expected '{expected}'");
    Ok(())
}

#[then("the field {field} holds {values}")]
fn field_holds(parsing_state: &ParsingState, field: String, values: String) -> Result<()> {
    let field = normalize_scalar(&field);
    let session = session(parsing_state)?;
    let actual: Vec<String> = session
        .record()
        .multi(&field)
        .with_context(|| format!("'{field}' is not a multi-value field"))?
        .iter()
        .map(ToString::to_string)
        .collect();
    let expected = csv_items(&values);
    ensure!(actual == expected, "'{field}' holds {actual:?}; expected {expected:?}");
    Ok(())
}

#[then("the remaining arguments are {args}")]
fn remaining_are(parsing_state: &ParsingState, args: String) -> Result<()> {
    let session = session(parsing_state)?;
    let expected = csv_items(&args);
    ensure!(
        session.remaining() == expected.as_slice(),
        "remaining {:?}; expected {expected:?}",
        session.remaining()
    );
    Ok(())
}

#[then("help was requested")]
fn help_requested(parsing_state: &ParsingState) -> Result<()> {
    ensure!(
        session(parsing_state)?.help_requested(),
        "help flag was not set"
    );
    Ok(())
}
