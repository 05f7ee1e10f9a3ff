use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::process;
use workshop_check::cli::{Args, setup_logging};
use workshop_check::constants::messages::{ALL_GOOD, PROBLEMS, USAGE};
use workshop_check::{CheckError, Config, Reporter, check_file};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                process::exit(0);
            }
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(error) = setup_logging(&args) {
        eprintln!("Warning: {:#}", error);
    }

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(CheckError::NoInputFile) => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        Err(error) => {
            eprintln!("ERROR:\t{}", error);
            process::exit(1);
        }
    };

    // Status lines go to stderr, so color follows that stream
    colored::control::set_override(io::stderr().is_terminal());

    eprintln!("Testing \"{}\".", config.index_file.display());

    let mut reporter = Reporter::new(io::stderr().lock());
    match check_file(&config.index_file, &mut reporter) {
        Ok(true) => {
            reporter.note(&ALL_GOOD.green().to_string());
            process::exit(0);
        }
        Ok(false) => {
            reporter.note(&PROBLEMS.red().to_string());
            process::exit(1);
        }
        Err(error) => {
            // Fatal: nothing beyond this one message is checked
            reporter.error(&error.to_string());
            process::exit(1);
        }
    }
}
