use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use maclaurin::prelude::*;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Computing e^x with an exact-integer Maclaurin series";

#[derive(Parser, Debug)]
#[command(name = "maclaurin", version, about = "Approximates e^x from the series Σ xⁿ/n!")]
struct Opts {
    /// Exponent x; any integer, not limited to 64 bits
    #[arg(
        short,
        long,
        env = "MACLAURIN_X",
        default_value = "1",
        value_parser = parse_integer,
        allow_negative_numbers = true
    )]
    x: Integer,
    /// Number of series terms to sum
    #[arg(short = 'n', long, env = "MACLAURIN_TERMS", default_value_t = DEFAULT_TERMS)]
    terms: usize,
    /// Print the running sum after every term
    #[arg(long)]
    partial_sums: bool,
}

fn parse_integer(s: &str) -> Result<Integer, String> {
    s.parse::<Integer>()
        .map_err(|e| format!("`{s}` is not an integer: {e}"))
}

/// Logs go to stderr so stdout only carries results.
fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn run(opts: Opts, out: &mut impl Write) -> anyhow::Result<()> {
    let config = SeriesConfig::new(opts.x, opts.terms);
    config.validate().context("invalid series configuration")?;
    tracing::info!(x = %config.x, terms = config.terms, "evaluating e^x");

    let failed = || format!("cannot evaluate e^{} with {} terms", config.x, config.terms);

    writeln!(out, "{BANNER}")?;
    let value = if opts.partial_sums {
        let mut last = 0.0;
        for (n, sum) in config.partial_sums()?.enumerate() {
            last = sum.with_context(failed)?;
            writeln!(out, "{n}\t{last}")?;
        }
        last
    } else {
        config.evaluate().with_context(failed)?
    };
    writeln!(out, "{value}")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    setup_logger();
    let opts = Opts::parse();
    let stdout = io::stdout();
    run(opts, &mut stdout.lock())
}
