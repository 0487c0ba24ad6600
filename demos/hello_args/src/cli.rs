//! Command-line schema and parse configuration for the `hello_args` demo.

use argwise::{
    ParamTag, ParameterSpec, ParseConfig, ParseSession, Parser, ParserRegistry, Schema, Value,
    ValueError, check,
};
use figment::providers::Env;

use crate::error::Result;

/// Environment prefix for parse configuration overrides.
pub const ENV_PREFIX: &str = "HELLO_ARGS_";

/// Builds the demo's parameter schema.
///
/// # Errors
///
/// Returns [`argwise::SchemaError`] if the declarations are inconsistent.
pub fn schema() -> std::result::Result<Schema, argwise::SchemaError> {
    let positive = check(|value: &Value| match value.as_uint() {
        Some(0) => Err(ValueError::new("OutOfRange", "repeat must be at least 1")),
        _ => Ok(()),
    });
    Schema::builder()
        .param(
            ParameterSpec::option()
                .long("help")
                .short('h')
                .tag(ParamTag::Help)
                .help("Print usage and exit."),
        )
        .param(
            ParameterSpec::option()
                .long("salutation")
                .short('s')
                .multi(1, 4)
                .default_value("Hello")
                .value_name("WORD")
                .help("Greeting word; may be repeated."),
        )
        .param(
            ParameterSpec::option()
                .long("repeat")
                .short('r')
                .single()
                .value_type("u8")
                .default_value("1")
                .check(positive)
                .value_name("COUNT")
                .help("How many times to print the greeting."),
        )
        .param(
            ParameterSpec::option()
                .long("excited")
                .short('e')
                .help("Shout the greeting."),
        )
        .param(
            ParameterSpec::option()
                .long("quiet")
                .short('q')
                .help("Whisper the greeting."),
        )
        .param(
            ParameterSpec::positional()
                .multi(0, 8)
                .value_name("NAME")
                .help("People to greet."),
        )
        .build()
}

/// Loads the parse configuration, letting `HELLO_ARGS_*` variables override
/// the defaults.
///
/// # Errors
///
/// Returns [`argwise::ArgsError::Config`] when a variable holds an invalid
/// setting.
pub fn load_config() -> Result<ParseConfig> {
    let figment = ParseConfig::figment().merge(Env::prefixed(ENV_PREFIX));
    Ok(ParseConfig::from_figment(&figment)?)
}

/// Builds the demo parser.
///
/// # Errors
///
/// Propagates schema and configuration failures.
pub fn parser(config: ParseConfig) -> Result<Parser> {
    Ok(Parser::with_config(
        schema()?,
        &ParserRegistry::with_builtins(),
        config,
    )?)
}

/// Parses `args` with the default configuration.
///
/// # Errors
///
/// Propagates schema failures; command-line problems stay in the session.
pub fn parse_args<I, S>(args: I) -> Result<ParseSession>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(parser(ParseConfig::default())?.parse(args))
}

/// Renders a usage summary for `schema`.
#[must_use]
pub fn usage(executable: &str, schema: &Schema) -> String {
    let mut text = format!("Usage: {executable} [OPTIONS] [NAME]...\n\nOptions:\n");
    for spec in schema.specs() {
        let keys = match (spec.short_key(), spec.long_key()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}"),
            _ => spec.display_name(),
        };
        text.push_str(&format!("  {keys:<20} {}\n", spec.help_text()));
    }
    text
}
