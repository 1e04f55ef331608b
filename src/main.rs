//! seqmath — command-line front end over the enumeration library.

use clap::Parser; // trait import enables SeqmathCli::parse()
use colored::Colorize;

use seqmath::cli::SeqmathCli;
use seqmath::commands;

fn main() {
    let args = SeqmathCli::parse();
    if let Err(e) = commands::run(args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
