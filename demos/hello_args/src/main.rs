//! Hello args demo entry-point: parse arguments, build a greeting, print it.

use std::io::{self, Write};
use std::process::ExitCode;

use hello_args::cli::{load_config, parser, usage};
use hello_args::error::Result;
use hello_args::message::{build_plan, print_plan, print_problems};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<ExitCode> {
    let parser = parser(load_config()?)?;
    let session = parser.parse_env();
    let mut stdout = io::stdout().lock();

    if session.help_requested() {
        stdout.write_all(usage(session.executable(), parser.schema()).as_bytes())?;
        return Ok(ExitCode::SUCCESS);
    }
    if session.has_problems() {
        print_problems(&session, &mut io::stderr().lock())?;
        return Ok(ExitCode::from(2));
    }

    let record = session.into_result()?;
    let plan = build_plan(&record)?;
    print_plan(&plan, &mut stdout)?;
    Ok(ExitCode::SUCCESS)
}
