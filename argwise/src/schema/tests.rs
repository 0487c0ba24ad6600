//! Unit tests for schema construction and structural validation.

use rstest::rstest;

use super::{ParamKind, ParameterSpec, Schema};
use crate::error::SchemaError;

fn build(specs: Vec<ParameterSpec>) -> Result<Schema, SchemaError> {
    Schema::builder().params(specs).build()
}

#[test]
fn field_names_prefer_long_then_short() {
    let schema = build(vec![
        ParameterSpec::option().short('n').long("name").single(),
        ParameterSpec::option().short('x'),
        ParameterSpec::positional().value_name("FILE"),
    ])
    .expect("valid schema");
    let names: Vec<_> = schema.specs().iter().map(ParameterSpec::field_name).collect();
    assert_eq!(names, ["name", "x", "positional"]);
    assert_eq!(schema.specs().get(2).expect("third spec").display_name(), "<FILE>");
}

#[test]
fn lookups_ignore_the_positional() {
    let schema = build(vec![
        ParameterSpec::option().long("verbose").short('v'),
        ParameterSpec::positional(),
    ])
    .expect("valid schema");
    assert_eq!(schema.find_long("verbose"), Some(0));
    assert_eq!(schema.find_short('v'), Some(0));
    assert_eq!(schema.find_long("positional"), None);
    assert_eq!(schema.find_field("positional"), Some(1));
    assert_eq!(
        schema.positional().map(|(_, spec)| spec.kind()),
        Some(ParamKind::Positional)
    );
}

#[rstest]
#[case::two_positionals(
    vec![ParameterSpec::positional(), ParameterSpec::positional().multi(0, 2)],
    SchemaError::MultiplePositionals
)]
#[case::shared_long_key(
    vec![ParameterSpec::option().long("out"), ParameterSpec::option().short('o').long("out")],
    SchemaError::DuplicateKey { key: "--out".into() }
)]
#[case::shared_short_key(
    vec![ParameterSpec::option().short('o'), ParameterSpec::option().short('o').long("output")],
    SchemaError::DuplicateKey { key: "-o".into() }
)]
#[case::shared_field(
    vec![ParameterSpec::option().short('o'), ParameterSpec::option().long("o")],
    SchemaError::DuplicateField { field: "o".into() }
)]
#[case::keyless_option(vec![ParameterSpec::option()], SchemaError::MissingKey { index: 0 })]
#[case::dash_short_key(
    vec![ParameterSpec::option().short('-')],
    SchemaError::InvalidShortKey { key: '-' }
)]
#[case::dashed_long_key(
    vec![ParameterSpec::option().long("-x")],
    SchemaError::InvalidLongKey { key: "-x".into() }
)]
#[case::flag_positional(vec![ParameterSpec::positional().flag()], SchemaError::FlagPositional)]
#[case::keyed_positional(vec![ParameterSpec::positional().long("file")], SchemaError::PositionalKey)]
#[case::inverted_bounds(
    vec![ParameterSpec::option().long("tag").multi(3, 2)],
    SchemaError::InvalidArity { field: "tag".into(), min: 3, max: 2 }
)]
#[case::zero_max(
    vec![ParameterSpec::option().long("tag").multi(0, 0)],
    SchemaError::InvalidArity { field: "tag".into(), min: 0, max: 0 }
)]
#[case::flag_default(
    vec![ParameterSpec::option().long("quiet").default_value("true")],
    SchemaError::FlagDefault { field: "quiet".into() }
)]
#[case::single_with_two_defaults(
    vec![ParameterSpec::option().long("level").single().default_values(["1", "2"])],
    SchemaError::TooManyDefaults { field: "level".into(), count: 2 }
)]
fn rejects_contract_violations(#[case] specs: Vec<ParameterSpec>, #[case] expected: SchemaError) {
    assert_eq!(build(specs).expect_err("schema should be rejected"), expected);
}
