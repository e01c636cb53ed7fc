//! Candidate grids and the log-mass tables defined over them.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::{InferenceError, Result};

/// A validated, ascending, duplicate-free set of candidate probabilities.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid {
    candidates: Box<[f64]>,
}

impl Grid {
    pub(crate) fn new<I>(candidates: I) -> Result<Grid>
    where
        I: IntoIterator<Item = f64>,
    {
        let candidates: Vec<f64> = candidates
            .into_iter()
            .map(|value| {
                if (0.0..=1.0).contains(&value) {
                    // Folds -0.0 into 0.0 so both spellings address one key.
                    Ok(value + 0.)
                } else {
                    Err(InferenceError::InvalidCandidate { value })
                }
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .sorted_by(f64::total_cmp)
            .dedup()
            .collect();

        if candidates.is_empty() {
            return Err(InferenceError::EmptyGrid);
        }
        Ok(Grid {
            candidates: candidates.into(),
        })
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.candidates
    }

    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Log-probability masses over a [`Grid`].
///
/// Lookups are exact: a query hits an entry only when it is the same `f64`
/// the grid was built from. `0.1 + 0.2` does not find `0.3`. Anything that
/// misses carries zero mass. The `*_within` variants are a separate,
/// tolerance-based mode and must be asked for explicitly.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LogMassTable {
    grid: Grid,
    log_mass: Box<[f64]>,
}

impl LogMassTable {
    pub(crate) fn new(grid: Grid, log_mass: Vec<f64>) -> LogMassTable {
        assert!(grid.len() == log_mass.len());
        LogMassTable {
            grid,
            log_mass: log_mass.into(),
        }
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn candidates(&self) -> &[f64] {
        self.grid.as_slice()
    }

    pub(crate) fn log_masses(&self) -> &[f64] {
        &self.log_mass
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.candidates()
            .iter()
            .copied()
            .zip(self.log_mass.iter().copied())
    }

    fn position(&self, p: f64) -> Option<usize> {
        let key = p + 0.;
        self.candidates()
            .binary_search_by(|c| c.total_cmp(&key))
            .ok()
    }

    pub(crate) fn log_prob(&self, p: f64) -> f64 {
        match self.position(p) {
            Some(idx) => self.log_mass[idx],
            None => f64::NEG_INFINITY,
        }
    }

    pub(crate) fn prob(&self, p: f64) -> f64 {
        match self.position(p) {
            Some(idx) => self.log_mass[idx].exp(),
            None => 0.,
        }
    }

    /// Index of the candidate closest to `p`, if it lies within `tol`.
    /// Equidistant neighbours resolve to the smaller candidate.
    fn nearest_within(&self, p: f64, tol: f64) -> Option<usize> {
        if p.is_nan() || tol.is_nan() || tol < 0. {
            return None;
        }
        let candidates = self.candidates();
        let split = candidates.partition_point(|&c| c < p);
        let below = split.checked_sub(1);
        let above = (split < candidates.len()).then_some(split);

        let best = match (below, above) {
            (Some(b), Some(a)) => {
                let db = p - candidates[b];
                let da = candidates[a] - p;
                match db.partial_cmp(&da) {
                    Some(Ordering::Greater) => a,
                    _ => b,
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            (None, None) => return None,
        };
        ((candidates[best] - p).abs() <= tol).then_some(best)
    }

    pub(crate) fn log_prob_within(&self, p: f64, tol: f64) -> f64 {
        match self.nearest_within(p, tol) {
            Some(idx) => self.log_mass[idx],
            None => f64::NEG_INFINITY,
        }
    }

    pub(crate) fn prob_within(&self, p: f64, tol: f64) -> f64 {
        self.log_prob_within(p, tol).exp()
    }

    /// Candidate with the largest mass; ties go to the smaller candidate.
    pub(crate) fn argmax(&self) -> f64 {
        let mut best = 0;
        for (idx, &lm) in self.log_mass.iter().enumerate().skip(1) {
            if lm > self.log_mass[best] {
                best = idx;
            }
        }
        self.candidates()[best]
    }
}
