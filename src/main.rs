mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use gregorian_date::Date;
use tracing::{debug, info, warn};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli.dates) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(raw_dates: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();

    let mut dates = Vec::with_capacity(raw_dates.len());
    for raw in raw_dates {
        match raw.parse::<Date>() {
            Ok(date) => {
                debug!(input = %raw, %date, "constructed date");
                dates.push(date);
            }
            Err(e) => {
                warn!(input = %raw, error = %e, "skipping invalid date");
                writeln!(out, "Error creating a date from {raw}: {e}")
                    .context("writing to stdout")?;
            }
        }
    }
    info!(valid = dates.len(), total = raw_dates.len(), "constructed sample dates");

    let [first, second, ..] = dates.as_slice() else {
        warn!(valid = dates.len(), "need two valid dates for the pairwise section");
        return Ok(());
    };

    report(&mut out, first, second).context("writing to stdout")
}

fn report(out: &mut impl Write, first: &Date, second: &Date) -> io::Result<()> {
    debug!(first = %first.iso_format(), second = %second.iso_format(), "reporting pair");

    writeln!(out, "{first}")?;
    writeln!(out, "{}", second.iso_format())?;

    writeln!(out, "{}", second.is_leap_year())?;
    writeln!(out, "{}", second.day_of_year())?;

    writeln!(out, "{}", first == second)?;
    writeln!(out, "{}", first < second)?;
    writeln!(out, "{}", first > second)?;

    writeln!(out, "{}", *second - *first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_matches_reference_output() {
        let first = Date::new(2001, 9, 11).unwrap();
        let second = Date::new(2000, 2, 29).unwrap();

        let mut buf = Vec::new();
        report(&mut buf, &first, &second).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "11-09-2001",
                "2000-02-29",
                "true",
                "60",
                "false",
                "true",
                "false",
                "560"
            ]
        );
    }

    #[test]
    fn test_run_tolerates_invalid_dates() {
        let raw = [
            String::from("1999-04-31"),
            String::from("not a date"),
            String::from("2000-02-29"),
        ];
        assert!(run(&raw).is_ok());
    }
}
