//! Compare posteriors under Beta-shaped priors of increasing strength.

use anyhow::Result;
use bayes_grid::{Posterior, Prior};
use tracing_subscriber::EnvFilter;

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

    let data = [0, 0, 0, 0, 1, 1, 0, 0, 0, 1];
    // Open interval, so shapes below one stay finite at the edges.
    let grid: Vec<f64> = (1..100).map(|i| i as f64 / 100.).collect();

    println!("{:>14} {:>8} {:>8} {:>12}", "prior", "MAP", "mean", "log evidence");
    for (alpha0, alpha1) in [(1., 1.), (0.5, 0.5), (5., 5.), (8., 2.)] {
        let prior = Prior::beta(grid.iter().copied(), alpha0, alpha1)?;
        let post = Posterior::new(data, &prior)?;
        println!(
            "{:>14} {:>8.2} {:>8.3} {:>12.4}",
            format!("Beta({alpha0}, {alpha1})"),
            post.map_estimate(),
            post.mean(),
            post.marginal_log_likelihood()
        );
    }
    Ok(())
}
