//! Command-line front end for the intermodulation product enumerator.
//!
//! Takes a distortion order and a list of transmit carrier frequencies,
//! prints the product count, and optionally lists every product or emits
//! a JSON report.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use intermod_core::{ImdCalculator, ImdProduct};

#[derive(Parser)]
#[command(
    name = "intermod",
    version,
    about = "Predict intermodulation product frequencies for multi-carrier systems"
)]
struct Cli {
    /// Distortion order, odd and at least 3
    order: usize,

    /// Transmit carrier frequencies, two or more, in any consistent unit
    #[arg(required = true, num_args = 2..)]
    frequencies: Vec<f64>,

    /// Print every product as its coefficient vector and frequency
    #[arg(long)]
    list: bool,

    /// Emit a JSON report instead of text output
    #[arg(long)]
    json: bool,

    /// Enumerate on a thread pool (same products, same order)
    #[arg(long)]
    parallel: bool,

    /// Log at DEBUG instead of WARN
    #[arg(long)]
    verbose: bool,
}

/// Machine-readable run summary for `--json`.
#[derive(Serialize)]
struct RunReport {
    order: usize,
    transmit_freqs: Vec<f64>,
    elapsed_sec: f64,
    product_count: usize,
    products: Vec<ImdProduct>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !cli.json {
        println!("ORDER: {}", cli.order);
        println!("FREQUENCIES: {:?}", cli.frequencies);
        println!("Calculating...");
    }

    let calc = ImdCalculator::new(cli.frequencies.clone());
    debug!(
        "enumerating order {} over {} carriers (parallel: {})",
        cli.order,
        calc.transmit_freqs().len(),
        cli.parallel
    );

    let started = Instant::now();
    let products = if cli.parallel {
        calc.enumerate_parallel(cli.order)?
    } else {
        calc.enumerate(cli.order)?
    };
    let elapsed_sec = started.elapsed().as_secs_f64();
    debug!("found {} products in {:.6} s", products.len(), elapsed_sec);

    if cli.json {
        let report = RunReport {
            order: cli.order,
            transmit_freqs: cli.frequencies,
            elapsed_sec,
            product_count: products.len(),
            products,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Time taken: {:.6} seconds", elapsed_sec);
    println!("Got {} products.", products.len());

    if cli.list {
        for product in &products {
            println!("{:?} -> {:.6}", product.coefficients, product.frequency);
        }
    }

    Ok(())
}
