pub mod analytics;
pub mod config;
pub mod report;
pub mod sequences;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{Command, SeqmathCli};
use crate::config::Settings;
use crate::core::{debug, Rational};
use crate::debug_log;

/// What a subcommand produced, before it is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Integers(Vec<u64>),
    Rationals(Vec<Rational>),
    Scalar(Rational),
}

impl Outcome {
    /// Sequences as one space-separated line, scalars as-is.
    pub fn render_text(&self) -> String {
        fn join<T: ToString>(xs: &[T]) -> String {
            xs.iter().map(T::to_string).collect::<Vec<_>>().join(" ")
        }
        match self {
            Outcome::Integers(xs) => join(xs),
            Outcome::Rationals(xs) => join(xs),
            Outcome::Scalar(x) => x.to_string(),
        }
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Computes a subcommand's result without printing anything.
pub fn execute(cmd: &Command, settings: &Settings) -> Result<Outcome> {
    debug_log!("execute: {:?}", cmd);
    match cmd {
        Command::Rationals { count, skip } => Ok(sequences::rationals(*count, *skip)),
        Command::Primes { count, skip } => Ok(sequences::primes(*count, *skip)),
        Command::Recurrence { count, first, second } => Ok(sequences::recurrence(
            *count,
            first.clone().unwrap_or_else(|| settings.recurrence.first.clone()),
            second.clone().unwrap_or_else(|| settings.recurrence.second.clone()),
        )),
        Command::Sum { n } => analytics::sum(*n),
        Command::Meaningless { n } => analytics::meaningless(*n),
        Command::Aimless { n } => analytics::aimless(*n),
        Command::Worthless { n, limit } => {
            analytics::worthless(*n, limit.unwrap_or(settings.search.limit))
        }
        Command::Config => anyhow::bail!("`config` has no computed result"),
    }
}

/// Entry point used by the binary.
pub fn run(args: SeqmathCli) -> Result<()> {
    if args.debug {
        debug::enable();
    }
    let settings = Settings::load(&args.config)?;

    if args.cmd == Command::Config {
        return config::show(&args.config, &settings);
    }

    let outcome = execute(&args.cmd, &settings)?;
    if args.json || settings.output.json {
        println!("{}", outcome.render_json()?);
    } else {
        println!("{}", outcome.render_text());
    }

    if let Some(out) = &args.out {
        report::Report::new(&args.cmd, &outcome).write_to(out)?;
        eprintln!("{} report written to {}", "ok:".green().bold(), out.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering() {
        let r = Rational::new(3, 8).unwrap();
        assert_eq!(Outcome::Integers(vec![2, 3, 5]).render_text(), "2 3 5");
        assert_eq!(Outcome::Rationals(vec![Rational::one(), r.clone()]).render_text(), "1 3/8");
        assert_eq!(Outcome::Scalar(r).render_text(), "3/8");
        assert_eq!(Outcome::Rationals(vec![]).render_text(), "");
    }

    #[test]
    fn json_rendering() {
        let r = Rational::new(3, 8).unwrap();
        assert_eq!(Outcome::Integers(vec![2, 3]).render_json().unwrap(), "[2,3]");
        assert_eq!(Outcome::Rationals(vec![r.clone()]).render_json().unwrap(), r#"["3/8"]"#);
        assert_eq!(Outcome::Scalar(r).render_json().unwrap(), r#""3/8""#);
    }

    #[test]
    fn recurrence_seeds_fall_back_to_settings() {
        let mut settings = Settings::default();
        settings.recurrence.first = Rational::from_integer(2);
        let cmd = Command::Recurrence { count: 4, first: None, second: None };
        assert_eq!(execute(&cmd, &settings).unwrap().render_text(), "2 1 3 4");
        let cmd = Command::Recurrence { count: 3, first: None, second: Some(Rational::from_integer(5)) };
        assert_eq!(execute(&cmd, &settings).unwrap().render_text(), "2 5 7");
    }

    #[test]
    fn worthless_limit_falls_back_to_settings() {
        let mut settings = Settings::default();
        settings.search.limit = 2;
        let cmd = Command::Worthless { n: 8, limit: None };
        let err = execute(&cmd, &settings).unwrap_err();
        assert!(format!("{err:#}").contains("Not Found"));
        let cmd = Command::Worthless { n: 8, limit: Some(1_000) };
        assert!(execute(&cmd, &settings).is_ok());
    }
}
