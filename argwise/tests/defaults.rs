//! Default resolution and eager default validation.

use anyhow::Result;
use argwise::{ParameterSpec, Parser, ParserRegistry, Schema, SchemaError, Value};
use rstest::rstest;
use test_helpers::parsers::{CountingParser, REJECTED, RejectingParser};
use test_helpers::problems::{ensure_argument, ensure_kinds, kinds};

fn word_schema(defaults: &[&str]) -> Result<Schema> {
    Ok(Schema::builder()
        .param(
            ParameterSpec::option()
                .long("word")
                .multi(0, 5)
                .value_type("word")
                .default_values(defaults.iter().copied()),
        )
        .build()?)
}

#[rstest]
fn failing_default_is_skipped_and_others_apply() -> Result<()> {
    let registry = ParserRegistry::new().with("word", RejectingParser::new(["bad"]));
    let parser = Parser::new(word_schema(&["a", "bad", "c"])?, &registry)?;
    let session = parser.parse(["prog"]);
    ensure_kinds(session.problems(), &[REJECTED])?;
    ensure_argument(session.problems(), 0, "bad")?;
    assert_eq!(
        session.record().multi("word"),
        Some(&[Value::from("a"), Value::from("c")][..])
    );
    assert_eq!(session.counters().get("word"), Some(2));
    Ok(())
}

#[rstest]
fn foldable_parser_rejects_bad_defaults_when_binding() -> Result<()> {
    let registry = ParserRegistry::new().with("word", RejectingParser::new(["bad"]).foldable());
    let err = Parser::new(word_schema(&["a", "bad"])?, &registry).expect_err("bad default");
    assert!(
        matches!(err, SchemaError::InvalidDefault { ref value, .. } if value == "bad"),
        "{err}"
    );
    Ok(())
}

#[rstest]
fn non_foldable_defaults_convert_once_per_session() -> Result<()> {
    let counter = CountingParser::new();
    let registry = ParserRegistry::new().with("counted", counter.clone());
    let schema = Schema::builder()
        .param(
            ParameterSpec::option()
                .long("mode")
                .single()
                .value_type("counted")
                .default_value("fast"),
        )
        .build()?;
    let parser = Parser::new(schema, &registry)?;
    assert_eq!(counter.calls(), 0);

    let session = parser.parse(["prog"]);
    assert_eq!(session.record().single("mode"), Some(&Value::from("fast")));
    assert_eq!(counter.calls(), 1);

    let session = parser.parse(["prog", "--mode", "slow"]);
    assert_eq!(session.record().single("mode"), Some(&Value::from("slow")));
    assert_eq!(counter.calls(), 2);
    Ok(())
}

#[rstest]
fn supplied_values_suppress_defaults() -> Result<()> {
    let registry = ParserRegistry::new().with("word", RejectingParser::new(["bad"]));
    let parser = Parser::new(word_schema(&["bad"])?, &registry)?;
    let session = parser.parse(["prog", "--word", "ok"]);
    assert!(kinds(session.problems()).is_empty());
    assert_eq!(session.record().multi("word"), Some(&[Value::from("ok")][..]));
    Ok(())
}

#[rstest]
#[case("'quoted default'", "quoted default")]
#[case("plain", "plain")]
fn quoted_defaults_are_unquoted(#[case] default: &str, #[case] expected: &str) -> Result<()> {
    let schema = Schema::builder()
        .param(ParameterSpec::positional().default_value(default))
        .build()?;
    let parser = Parser::new(schema, &ParserRegistry::with_builtins())?;
    let record = parser.parse(["prog"]).into_result()?;
    assert_eq!(record.single("positional"), Some(&Value::from(expected)));
    Ok(())
}
