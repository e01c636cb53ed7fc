//! Infer `p0` from 500 simulated draws on a grid of 101 candidates and write
//! the result as CSV.
//!
//! Usage: `cargo run --example simulated_sample -- [output.csv]`

use anyhow::Result;
use bayes_grid::{CsvOptions, Posterior, Prior};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Distribution};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TRUE_P0: f64 = 0.23;
const DRAWS: usize = 500;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("BAYES_GRID_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let zero = Bernoulli::new(TRUE_P0)?;
    let data: Vec<u8> = (0..DRAWS)
        .map(|_| if zero.sample(&mut rng) { 0 } else { 1 })
        .collect();

    let grid: Vec<f64> = (0..=100).map(|i| i as f64 / 100.).collect();
    let prior = Prior::uniform(grid)?;
    let post = Posterior::new(&data, &prior)?;

    info!(
        n0 = post.likelihood().n0(),
        n1 = post.likelihood().n1(),
        map = post.map_estimate(),
        mean = post.mean(),
        true_p0 = TRUE_P0,
        "posterior computed"
    );

    let options = CsvOptions::new().with_precision(8);
    match std::env::args().nth(1) {
        Some(path) => {
            post.table().save_csv(&path, &options)?;
            info!(path = %path, "wrote inference table");
        }
        None => post.table().write_csv(std::io::stdout().lock(), &options)?,
    }
    Ok(())
}
