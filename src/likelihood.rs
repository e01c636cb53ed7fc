//! Likelihood of a binary sample under independent Bernoulli trials.

use tracing::debug;

use crate::error::{InferenceError, Result};
use crate::label::{Label, ToLabel};
use crate::math::xlogy;

/// Probability of an observed binary sample as a function of `p0`, the
/// probability of drawing [`Label::Zero`].
///
/// Only the label counts are kept, since the order of independent trials
/// does not change their joint probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Likelihood {
    n0: u64,
    n1: u64,
}

impl Likelihood {
    /// Count the labels of `sample`.
    ///
    /// Fails with [`InferenceError::InvalidData`] on the first element that is
    /// not a binary label.
    pub fn new<I>(sample: I) -> Result<Likelihood>
    where
        I: IntoIterator,
        I::Item: ToLabel,
    {
        let mut n0 = 0u64;
        let mut n1 = 0u64;
        for (index, value) in sample.into_iter().enumerate() {
            match value.to_label() {
                Some(Label::Zero) => n0 += 1,
                Some(Label::One) => n1 += 1,
                None => {
                    return Err(InferenceError::InvalidData {
                        index,
                        value: format!("{:?}", value),
                    })
                }
            }
        }
        debug!(n0, n1, "counted binary sample");
        Ok(Likelihood { n0, n1 })
    }

    pub fn from_counts(n0: u64, n1: u64) -> Likelihood {
        Likelihood { n0, n1 }
    }

    pub fn n0(&self) -> u64 {
        self.n0
    }

    pub fn n1(&self) -> u64 {
        self.n1
    }

    pub fn len(&self) -> u64 {
        self.n0 + self.n1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `ln P(data | p0) = n0 ln(p0) + n1 ln(1 - p0)`.
    ///
    /// At the endpoints a label that was never observed contributes nothing,
    /// and a label that was observed but has probability zero makes the data
    /// impossible (negative infinity). `p0` outside `[0, 1]` yields NaN.
    pub fn log_prob(&self, p0: f64) -> f64 {
        if p0 == 0. && self.n0 > 0 {
            return f64::NEG_INFINITY;
        }
        if p0 == 1. && self.n1 > 0 {
            return f64::NEG_INFINITY;
        }
        xlogy(self.n0, p0) + xlogy(self.n1, 1. - p0)
    }

    /// `P(data | p0)`. Underflows to zero for long samples far from the
    /// observed frequency; use [`Likelihood::log_prob`] when that matters.
    pub fn prob(&self, p0: f64) -> f64 {
        self.log_prob(p0).exp()
    }

    /// The observed frequency of zeros, `n0 / (n0 + n1)`.
    pub fn max_likelihood_p0(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.n0 as f64 / self.len() as f64)
        }
    }
}
