mod cli;
mod console;
mod logging;
mod prompt;
mod report;

use crate::cli::Cli;
use crate::console::Console;
use crate::report::Options;
use clap::Parser;
use dpfp_rs::simulated::Simulated;
use failure::Error;
use std::io::{BufRead, Write};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let options = Options {
        max_retries: cli.max_retries,
    };
    let mut console = Console::stdio();

    if let Err(err) = dispatch(&cli, &options, &mut console) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn dispatch<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    options: &Options,
    console: &mut Console<R, W, E>,
) -> Result<(), Error> {
    match cli.simulate {
        Some(count) => {
            info!(count, empty_scans = cli.empty_scans, "using the simulated runtime");
            let backend = Simulated::with_devices(count).empty_enumerations(cli.empty_scans);

            report::run(backend, options, console)
        }
        None => run_native(options, console),
    }
}

#[cfg(windows)]
fn run_native<R: BufRead, W: Write, E: Write>(
    options: &Options,
    console: &mut Console<R, W, E>,
) -> Result<(), Error> {
    report::run(dpfp_rs::Native::new(), options, console)
}

#[cfg(not(windows))]
fn run_native<R: BufRead, W: Write, E: Write>(
    _options: &Options,
    _console: &mut Console<R, W, E>,
) -> Result<(), Error> {
    Err(dpfp_rs::DpfpError::Unsupported.into())
}
