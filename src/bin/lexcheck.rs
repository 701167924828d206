//! Lexcheck CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexcheck::cli::args::LexcheckArgs;
use lexcheck::cli::commands::execute_command;

fn main() {
    // Parse command line arguments using clap
    let args = LexcheckArgs::parse();

    // Set up logging based on verbosity
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the check; fatal errors are reported as a single line
    if let Err(e) = execute_command(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
