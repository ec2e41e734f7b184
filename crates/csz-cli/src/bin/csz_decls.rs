#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use colored::control::set_override;
use std::io::{IsTerminal, Write};

use csz_cli::args::{CliArgs, OutputFormat};
use csz_cli::reporter::{Reporter, render_json};
use csz_cli::{driver, tracing_config};

const EXIT_SUCCESS: i32 = 0;
/// At least one error-severity declaration diagnostic.
const EXIT_DIAGNOSTICS: i32 = 1;
/// Inputs could not be read, parsed or processed.
const EXIT_FAILURE: i32 = 2;

fn main() {
    // Initialize tracing if CSZ_LOG or RUST_LOG is set (zero cost otherwise).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let code = match run(&args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run(args: &CliArgs) -> Result<i32> {
    let color = !args.no_color && std::io::stdout().is_terminal();
    set_override(color);

    let result = driver::run(args)?;

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            writeln!(stdout, "{}", render_json(&result.files, &result.stats)?)?;
        }
        OutputFormat::Text => {
            let reporter = Reporter::new(color);
            for file in &result.files {
                write!(stdout, "{}", reporter.render_file(file))?;
            }
            if args.stats {
                writeln!(stdout, "{}", reporter.render_stats(&result.stats))?;
            }
        }
    }
    stdout.flush()?;

    Ok(if result.has_failures() {
        EXIT_FAILURE
    } else if result.has_errors() {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_SUCCESS
    })
}
