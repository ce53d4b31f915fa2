//! Hamming distance command line tool
//!
//! Prints the number of differing bits between two files (default) or two
//! hex numbers given with `-n`. Errors go to stderr with a non-zero exit.

use std::env;
use std::ffi::OsString;
use std::process;

use hdist::cli::{self, Command};
use hdist::{compare, DistanceError};

fn run(program: &str, args: Vec<OsString>) -> Result<(), DistanceError> {
    match cli::parse_args(args)? {
        Command::Help => print!("{}", cli::usage(program)),
        Command::Version => println!("{}", cli::VERSION),
        Command::Compare {
            config,
            first,
            second,
        } => {
            log::debug!("mode {:?}, comparing {:?} with {:?}", config.mode, first, second);
            let distance = compare(&config, &first, &second)?;
            println!("{}", distance);
        }
    }
    Ok(())
}

fn main() {
    // Only errors unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut args = env::args_os();
    let program = args
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hdist".to_string());

    if let Err(err) = run(&program, args.collect()) {
        eprintln!("error: {}", err);
        if err.is_usage() {
            eprintln!("Try '{} --help' for more information", program);
        }
        process::exit(1);
    }
}
