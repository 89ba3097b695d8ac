//! Primality benchmark runner
//!
//! This module provides the `primes` subcommand. It checks whether the bound
//! is prime once with an iterchain pipeline and once with a plain `for`
//! loop, times each implementation over many runs, and prints a comparison
//! table. Every timed run is cross-checked against the other implementation.

use std::time::Instant;

use anyhow::Result;
use clap::Args;
use iterchain::{iter, range};
use thiserror::Error;

/// Arguments for the primes subcommand
#[derive(Args, Debug)]
pub struct PrimesArgs {
    /// Search bound (parsed leniently: non-numeric input counts as 0)
    pub bound: String,

    /// Timed runs per implementation
    #[arg(long, short = 'n', default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,
}

/// Failure of the primality benchmark.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BenchError {
    /// The two implementations returned different answers.
    #[error("bad result: primality of {bound} is {chain} with the chain but {manual} with the loop")]
    Mismatch {
        /// The number being tested.
        bound: i32,
        /// Answer of the chain implementation.
        chain: bool,
        /// Answer of the hand-written loop.
        manual: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Implementation {
    Chain,
    Loop,
}

impl Implementation {
    fn is_prime(self, number: i32) -> bool {
        match self {
            Self::Chain => is_prime_chain(number),
            Self::Loop => is_prime_loop(number),
        }
    }

    const fn other(self) -> Self {
        match self {
            Self::Chain => Self::Loop,
            Self::Loop => Self::Chain,
        }
    }
}

/// Run the primes subcommand
pub fn run(args: &PrimesArgs) -> Result<()> {
    let bound = parse_bound(&args.bound);
    tracing::info!(bound, iterations = args.iterations, "starting primality benchmark");

    let report = Report {
        chain_average: measure(Implementation::Chain, bound, args.iterations)?,
        loop_average: measure(Implementation::Loop, bound, args.iterations)?,
    };

    print!("{}", report.render());
    Ok(())
}

/// Parses a decimal integer the way C's `atoi` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, and digits
/// are consumed until the first non-digit. Input without any leading digits
/// yields 0. Values outside `i32` saturate.
pub fn parse_bound(argument: &str) -> i32 {
    let trimmed = argument.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |accumulator, digit| {
            accumulator
                .saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });
    let signed = if negative { -magnitude } else { magnitude };

    i32::try_from(signed).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// Trial division up to half the number, expressed as a chain.
pub fn is_prime_chain(number: i32) -> bool {
    range(2, number / 2)
        .find_first(|divisor| number % divisor == 0)
        .is_none()
}

/// Trial division up to half the number, as a plain loop.
pub fn is_prime_loop(number: i32) -> bool {
    for divisor in 2..number / 2 {
        if number % divisor == 0 {
            return false;
        }
    }
    true
}

/// Times `subject` over `iterations` runs and returns the average in
/// nanoseconds, failing as soon as it disagrees with the other
/// implementation.
fn measure(subject: Implementation, bound: i32, iterations: u32) -> Result<u128, BenchError> {
    let expected = subject.other().is_prime(bound);
    let mut durations: Vec<u128> = Vec::with_capacity(iterations as usize);

    for _ in 0..iterations {
        let start = Instant::now();
        let actual = subject.is_prime(bound);
        durations.push(start.elapsed().as_nanos());

        if actual != expected {
            let (chain, manual) = match subject {
                Implementation::Chain => (actual, expected),
                Implementation::Loop => (expected, actual),
            };
            tracing::error!(bound, chain, manual, "implementations disagree");
            return Err(BenchError::Mismatch {
                bound,
                chain,
                manual,
            });
        }
    }

    let average = iter(&durations).sum::<u128>() / u128::from(iterations);
    tracing::debug!(?subject, average, "measured average duration");
    Ok(average)
}

/// Averaged timings of both implementations, in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Report {
    chain_average: u128,
    loop_average: u128,
}

impl Report {
    /// Loop time as a percentage of chain time. A zero chain average is
    /// treated as one nanosecond.
    fn perf_percent(&self) -> u128 {
        self.loop_average * 100 / self.chain_average.max(1)
    }

    fn render(&self) -> String {
        format!(
            "| test  |     iter |      for | perf |\n\
             |-------+----------+----------|------|\n\
             | prime | {:>8} | {:>8} | {:>3}% |\n",
            self.chain_average,
            self.loop_average,
            self.perf_percent()
        )
    }
}
