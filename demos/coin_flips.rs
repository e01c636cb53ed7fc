//! Ten coin flips against an evenly spaced prior and against a friend's
//! hand-picked prior.
//!
//! Set `BAYES_GRID_LOG=debug` to see construction details.

use anyhow::Result;
use bayes_grid::{InferenceTable, Posterior, Prior};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("BAYES_GRID_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn print_table(title: &str, table: &InferenceTable) {
    println!("{title}");
    println!("{:>6} {:>10} {:>12} {:>10}", "p0", "prior", "likelihood", "posterior");
    for (p, prior, lik, post) in table.rows() {
        println!("{p:>6.2} {prior:>10.4} {lik:>12.4e} {post:>10.4}");
    }
    println!();
}

fn main() -> Result<()> {
    init_tracing();

    let data = [0, 0, 0, 0, 1, 1, 0, 0, 0, 1];

    let grid: Vec<f64> = (0..=10).map(|i| i as f64 / 10.).collect();
    let prior = Prior::uniform(grid)?;
    let post = Posterior::new(data, &prior)?;
    print_table("uniform prior", &post.table());
    println!(
        "MAP estimate {:.2}, posterior mean {:.3}, log evidence {:.4}\n",
        post.map_estimate(),
        post.mean(),
        post.marginal_log_likelihood()
    );

    let friend = Prior::with_masses(
        [0.2, 0.4, 0.6, 0.8],
        [(0.2, 0.2), (0.4, 0.2), (0.6, 0.4), (0.8, 0.2)],
    )?;
    let post = Posterior::new(data, &friend)?;
    print_table("friend's prior", &post.table());
    println!(
        "MAP estimate {:.2}, log evidence {:.4}",
        post.map_estimate(),
        post.marginal_log_likelihood()
    );

    Ok(())
}
