//! Prior beliefs over a finite grid of candidate probabilities.

use tracing::{debug, warn};

use crate::error::{InferenceError, Result};
use crate::mass::{Grid, LogMassTable};
use crate::math::LogSumExp;

/// Relative deviation of the total prior mass from one beyond which we warn.
const NORMALIZATION_WARN_TOLERANCE: f64 = 1e-6;

/// A discrete prior over candidate values of `p0`.
///
/// Candidates are kept sorted and de-duplicated. Queries follow the exact-match
/// contract: [`Prior::log_prob`] and [`Prior::prob`] only find a candidate
/// when given the very same `f64` that was used to build the grid, and
/// report zero mass otherwise. Use [`Prior::prob_within`] to look up with a
/// tolerance instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Prior {
    table: LogMassTable,
}

impl Prior {
    /// Uniform prior when `masses` is `None`, otherwise the supplied masses.
    /// See [`Prior::uniform`] and [`Prior::with_masses`].
    pub fn new<G>(grid: G, masses: Option<&[(f64, f64)]>) -> Result<Prior>
    where
        G: IntoIterator<Item = f64>,
    {
        match masses {
            None => Prior::uniform(grid),
            Some(masses) => Prior::with_masses(grid, masses.iter().copied()),
        }
    }

    /// Mass `1 / n` on each of the `n` distinct candidates.
    pub fn uniform<G>(grid: G) -> Result<Prior>
    where
        G: IntoIterator<Item = f64>,
    {
        let grid = Grid::new(grid)?;
        let n = grid.len();
        let log_mass = -(n as f64).ln();
        debug!(candidates = n, "built uniform prior");
        let table = LogMassTable::new(grid, vec![log_mass; n]);
        Ok(Prior { table })
    }

    /// Caller-supplied masses, keyed by candidate.
    ///
    /// Masses are stored as given. They are not rescaled to sum to one; that
    /// is up to the caller, and [`Prior::total_mass`] reports what was
    /// supplied. Keys are matched exactly against the grid, entries for values
    /// outside the grid are ignored, and a later entry for the same key
    /// replaces an earlier one.
    pub fn with_masses<G, M>(grid: G, masses: M) -> Result<Prior>
    where
        G: IntoIterator<Item = f64>,
        M: IntoIterator<Item = (f64, f64)>,
    {
        let grid = Grid::new(grid)?;
        let mut log_mass = vec![None; grid.len()];
        for (candidate, mass) in masses {
            let Ok(idx) = grid
                .as_slice()
                .binary_search_by(|c| c.total_cmp(&(candidate + 0.)))
            else {
                continue;
            };
            if !mass.is_finite() || mass < 0. {
                return Err(InferenceError::InvalidMass { candidate, mass });
            }
            log_mass[idx] = Some(mass.ln());
        }

        let log_mass = grid
            .as_slice()
            .iter()
            .zip(log_mass)
            .map(|(&candidate, lm)| lm.ok_or(InferenceError::MissingMass { candidate }))
            .collect::<Result<Vec<_>>>()?;

        let prior = Prior {
            table: LogMassTable::new(grid, log_mass),
        };
        let total = prior.total_mass();
        if (total - 1.).abs() > NORMALIZATION_WARN_TOLERANCE {
            warn!(total, "prior masses do not sum to one");
        }
        debug!(candidates = prior.len(), total, "built prior from supplied masses");
        Ok(prior)
    }

    /// Weights each candidate by the Beta(`alpha0`, `alpha1`) density kernel
    /// `p^(alpha0 - 1) (1 - p)^(alpha1 - 1)` and normalizes over the grid.
    ///
    /// Endpoints where the kernel diverges (`p = 0` with `alpha0 < 1`, or
    /// `p = 1` with `alpha1 < 1`) are rejected, so Jeffreys-style priors need
    /// a grid that stays inside the open interval.
    pub fn beta<G>(grid: G, alpha0: f64, alpha1: f64) -> Result<Prior>
    where
        G: IntoIterator<Item = f64>,
    {
        let valid = |a: f64| a.is_finite() && a > 0.;
        if !valid(alpha0) || !valid(alpha1) {
            return Err(InferenceError::InvalidShape { alpha0, alpha1 });
        }
        let grid = Grid::new(grid)?;
        let kernel = grid
            .as_slice()
            .iter()
            .map(|&p| {
                let lk = log_pow(p, alpha0 - 1.) + log_pow(1. - p, alpha1 - 1.);
                if lk == f64::INFINITY {
                    Err(InferenceError::InvalidMass {
                        candidate: p,
                        mass: f64::INFINITY,
                    })
                } else {
                    Ok(lk)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let norm = kernel.iter().copied().collect::<LogSumExp>().current();
        if norm == f64::NEG_INFINITY {
            return Err(InferenceError::ZeroPriorMass {
                candidates: grid.len(),
            });
        }
        let log_mass = kernel.into_iter().map(|lk| lk - norm).collect();
        debug!(candidates = grid.len(), alpha0, alpha1, "built beta-shaped prior");
        Ok(Prior {
            table: LogMassTable::new(grid, log_mass),
        })
    }

    pub(crate) fn from_table(table: LogMassTable) -> Prior {
        Prior { table }
    }

    pub(crate) fn table(&self) -> &LogMassTable {
        &self.table
    }

    /// Candidates in ascending order.
    pub fn candidates(&self) -> &[f64] {
        self.table.candidates()
    }

    /// `(candidate, mass)` pairs in ascending candidate order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.table.iter().map(|(p, lm)| (p, lm.exp()))
    }

    pub fn len(&self) -> usize {
        self.table.candidates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the stored masses. One for uniform and beta priors, whatever
    /// the caller supplied otherwise.
    pub fn total_mass(&self) -> f64 {
        self.table
            .log_masses()
            .iter()
            .copied()
            .collect::<LogSumExp>()
            .current()
            .exp()
    }

    /// Log mass of `p`, or negative infinity if `p` is not a candidate.
    pub fn log_prob(&self, p: f64) -> f64 {
        self.table.log_prob(p)
    }

    /// Mass of `p`, or zero if `p` is not a candidate.
    pub fn prob(&self, p: f64) -> f64 {
        self.table.prob(p)
    }

    /// Log mass of the candidate nearest to `p` within `tol`.
    pub fn log_prob_within(&self, p: f64, tol: f64) -> f64 {
        self.table.log_prob_within(p, tol)
    }

    /// Mass of the candidate nearest to `p` within `tol`.
    pub fn prob_within(&self, p: f64, tol: f64) -> f64 {
        self.table.prob_within(p, tol)
    }
}

impl<'a> IntoIterator for &'a Prior {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates().iter().copied()
    }
}

/// `exponent * ln(x)`, taking `x^0` as one even at `x = 0`.
fn log_pow(x: f64, exponent: f64) -> f64 {
    if exponent == 0. {
        0.
    } else {
        exponent * x.ln()
    }
}
