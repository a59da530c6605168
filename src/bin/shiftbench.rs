//! shiftbench: benchmark front-insert/back-remove churn on a `Vec`.
//!
//! Invoked with no arguments it runs the default suite (initial sizes 60 and
//! 70, one million cycles each) and prints the timing table to stdout.
//!
//! Example:
//!     shiftbench                       # default 60/70 suite
//!     shiftbench --range 60..70        # sweep every size in the range
//!     shiftbench --sizes 10 100 1000   # explicit size list
//!     shiftbench --repetitions 10000   # cheaper cycles for a quick look

use anyhow::{bail, Context, Result};
use clap::Parser;
use shiftbench::{BenchHarness, HarnessConfig, DEFAULT_REPETITIONS};

/// Initial sizes benchmarked when no selection flag is given.
const DEFAULT_SIZES: [usize; 2] = [60, 70];

#[derive(Debug, Parser)]
#[command(
    name = "shiftbench",
    about = "Measure front-insert/back-remove churn cost across array sizes"
)]
struct Cli {
    /// Explicit list of initial array sizes to benchmark
    #[arg(long, num_args = 1.., conflicts_with = "range")]
    sizes: Option<Vec<usize>>,

    /// Inclusive size range to sweep, e.g. "60..70"
    #[arg(long)]
    range: Option<String>,

    /// Churn cycles per case
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: u64,

    /// Suppress per-case progress output on stderr
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sizes = resolve_sizes(&cli)?;

    let config = HarnessConfig::new()
        .repetitions(cli.repetitions)
        .quiet(cli.quiet);
    let mut harness = BenchHarness::with_config("unshift", config);
    for size in sizes {
        harness.case(size, size);
    }

    harness.run();
    Ok(())
}

fn resolve_sizes(cli: &Cli) -> Result<Vec<usize>> {
    if let Some(ref sizes) = cli.sizes {
        return Ok(sizes.clone());
    }
    if let Some(ref range) = cli.range {
        return parse_range(range);
    }
    Ok(DEFAULT_SIZES.to_vec())
}

/// Parse an inclusive "lo..hi" size range.
fn parse_range(spec: &str) -> Result<Vec<usize>> {
    let (lo, hi) = spec
        .split_once("..")
        .with_context(|| format!("invalid range '{}', expected 'lo..hi'", spec))?;
    let lo: usize = lo
        .trim()
        .parse()
        .with_context(|| format!("invalid range start '{}'", lo))?;
    let hi: usize = hi
        .trim()
        .trim_start_matches('=')
        .parse()
        .with_context(|| format!("invalid range end '{}'", hi))?;
    if hi < lo {
        bail!("range end {} is below range start {}", hi, lo);
    }
    Ok((lo..=hi).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_inclusive_range() {
        assert_eq!(parse_range("60..70").unwrap(), (60..=70).collect::<Vec<_>>());
        assert_eq!(parse_range("0..0").unwrap(), vec![0]);
        assert_eq!(parse_range("3..=5").unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn should_reject_malformed_ranges() {
        assert!(parse_range("60").is_err());
        assert!(parse_range("a..b").is_err());
        assert!(parse_range("9..3").is_err());
    }

    #[test]
    fn should_default_to_sixty_and_seventy() {
        let cli = Cli::parse_from(["shiftbench"]);
        assert_eq!(resolve_sizes(&cli).unwrap(), vec![60, 70]);
        assert_eq!(cli.repetitions, 1_000_000);
        assert!(!cli.quiet);
    }

    #[test]
    fn should_use_explicit_sizes_when_given() {
        let cli = Cli::parse_from(["shiftbench", "--sizes", "10", "100"]);
        assert_eq!(resolve_sizes(&cli).unwrap(), vec![10, 100]);
    }

    #[test]
    fn should_sweep_range_when_given() {
        let cli = Cli::parse_from(["shiftbench", "--range", "60..63"]);
        assert_eq!(resolve_sizes(&cli).unwrap(), vec![60, 61, 62, 63]);
    }
}
