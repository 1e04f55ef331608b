use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::Rational;

#[derive(Debug, Parser)]
#[command(
    name = "seqmath",
    about = "seqmath — lazy rational, prime and recurrence enumerations",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct SeqmathCli {
    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: debug logging to stderr (same as SEQMATH_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: path to config (TOML); default: ~/.seqmath/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: also write a JSON report to FILE
    #[arg(long = "out", value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// List positive rationals in diagonal order
    ///
    /// Examples:
    ///   seqmath rationals 10
    ///   seqmath rationals 5 --skip 100
    Rationals {
        #[arg(value_name = "COUNT")]
        count: usize,
        /// Values to drop before listing
        #[arg(long = "skip", default_value_t = 0)]
        skip: usize,
    },

    /// List primes
    Primes {
        #[arg(value_name = "COUNT")]
        count: usize,
        #[arg(long = "skip", default_value_t = 0)]
        skip: usize,
    },

    /// List an additive recurrence (seeds: flags, then config, then 1 1)
    ///
    /// Examples:
    ///   seqmath recurrence 10
    ///   seqmath recurrence 6 --first 2 --second 1
    ///   seqmath recurrence 4 --first 1/2 --second -1/3
    Recurrence {
        #[arg(value_name = "COUNT")]
        count: usize,
        /// First seed (integer or n/d)
        #[arg(long = "first", allow_hyphen_values = true)]
        first: Option<Rational>,
        /// Second seed (integer or n/d)
        #[arg(long = "second", allow_hyphen_values = true)]
        second: Option<Rational>,
    },

    /// Exact sum of the first N rationals
    Sum {
        #[arg(value_name = "N")]
        n: usize,
    },

    /// Prime-touching product over the rest, for the first N rationals
    Meaningless {
        #[arg(value_name = "N")]
        n: usize,
    },

    /// Sum of the first N primes paired into fractions
    Aimless {
        #[arg(value_name = "N")]
        n: usize,
    },

    /// Longest rational prefix whose sum stays within the N-th Fibonacci number
    Worthless {
        #[arg(value_name = "N")]
        n: usize,
        /// Give up after this many prefix lengths (default: config, then 1000000)
        #[arg(long = "limit")]
        limit: Option<usize>,
    },

    /// Show the config path and effective settings
    Config,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Rationals { .. } => "rationals",
            Command::Primes { .. } => "primes",
            Command::Recurrence { .. } => "recurrence",
            Command::Sum { .. } => "sum",
            Command::Meaningless { .. } => "meaningless",
            Command::Aimless { .. } => "aimless",
            Command::Worthless { .. } => "worthless",
            Command::Config => "config",
        }
    }
}
