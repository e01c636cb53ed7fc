//! Discrete Bayesian inference of a Bernoulli parameter.
//!
//! A [`Prior`] puts mass on a finite grid of candidate values for `p0`, the
//! probability of observing label zero. A [`Posterior`] conditions that prior
//! on a binary sample through its [`Likelihood`], working in log space
//! throughout.
//!
//! ```
//! use bayes_grid::{Posterior, Prior};
//!
//! let grid: Vec<f64> = (0..=10).map(|i| i as f64 / 10.).collect();
//! let prior = Prior::uniform(grid)?;
//! let posterior = Posterior::new([0, 0, 0, 0, 1, 1, 0, 0, 0, 1], &prior)?;
//!
//! assert_eq!(posterior.map_estimate(), 0.7);
//! assert_eq!(posterior.prob(1.0), 0.0);
//! # Ok::<(), bayes_grid::InferenceError>(())
//! ```

pub(crate) mod error;
pub(crate) mod label;
pub(crate) mod likelihood;
pub(crate) mod mass;
pub mod math;
pub(crate) mod posterior;
pub(crate) mod prior;
pub(crate) mod table;

pub use error::{InferenceError, Result};
pub use label::{Label, ToLabel};
pub use likelihood::Likelihood;
pub use posterior::Posterior;
pub use prior::Prior;
pub use table::{CsvOptions, InferenceTable};
