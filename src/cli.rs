use clap::Parser;

/// Walks a few sample dates through the `Date` API and prints the results.
#[derive(Parser)]
#[command(name = "date-demo", version, about = "Gregorian date demonstration")]
pub struct Cli {
    /// Dates to construct, as YYYY-MM-DD. Invalid ones are reported and skipped.
    #[arg(default_values_t = [
        String::from("2001-09-11"),
        String::from("2000-02-29"),
        String::from("1999-04-31"),
    ])]
    pub dates: Vec<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
