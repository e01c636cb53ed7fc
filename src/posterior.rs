//! Bayes' theorem over a finite candidate grid.

use tracing::{debug, trace};

use crate::error::{InferenceError, Result};
use crate::label::ToLabel;
use crate::likelihood::Likelihood;
use crate::mass::LogMassTable;
use crate::math::LogSumExp;
use crate::prior::Prior;
use crate::table::InferenceTable;

/// Posterior over the candidates of a [`Prior`] after observing a binary
/// sample.
///
/// Everything is computed in [`Posterior::new`]; afterwards the posterior is
/// read-only. Lookups follow the same exact-match contract as [`Prior`].
#[derive(Debug, Clone)]
pub struct Posterior<'p> {
    likelihood: Likelihood,
    prior: &'p Prior,
    table: LogMassTable,
    log_marginal_likelihood: f64,
}

impl<'p> Posterior<'p> {
    /// Condition `prior` on `sample`.
    ///
    /// Fails with [`InferenceError::InvalidData`] if the sample is not binary,
    /// and with [`InferenceError::DegenerateEvidence`] if the data is
    /// impossible under every candidate that has prior mass.
    pub fn new<I>(sample: I, prior: &'p Prior) -> Result<Posterior<'p>>
    where
        I: IntoIterator,
        I::Item: ToLabel,
    {
        let likelihood = Likelihood::new(sample)?;
        Posterior::from_likelihood(likelihood, prior)
    }

    /// Condition `prior` on data summarized by `likelihood`.
    pub fn from_likelihood(likelihood: Likelihood, prior: &'p Prior) -> Result<Posterior<'p>> {
        let numerators: Vec<f64> = prior
            .table()
            .iter()
            .map(|(p, log_prior)| log_prior + likelihood.log_prob(p))
            .collect();

        // Impossible candidates carry exactly zero mass and stay out of the sum.
        let evidence: LogSumExp = numerators.iter().copied().collect();
        if evidence.skipped() > 0 {
            trace!(
                skipped = evidence.skipped(),
                "candidates with zero numerator left out of the evidence"
            );
        }

        let log_marginal_likelihood = evidence.current();
        if log_marginal_likelihood == f64::NEG_INFINITY {
            return Err(InferenceError::DegenerateEvidence {
                candidates: numerators.len(),
            });
        }

        let log_posterior = numerators
            .into_iter()
            .map(|numerator| numerator - log_marginal_likelihood)
            .collect();
        let table = LogMassTable::new(prior.table().grid().clone(), log_posterior);

        debug!(
            n0 = likelihood.n0(),
            n1 = likelihood.n1(),
            candidates = prior.len(),
            log_marginal_likelihood,
            "conditioned prior on sample"
        );

        Ok(Posterior {
            likelihood,
            prior,
            table,
            log_marginal_likelihood,
        })
    }

    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    pub fn prior(&self) -> &'p Prior {
        self.prior
    }

    /// Log of the evidence `sum_p P(data | p) P(p)`.
    pub fn marginal_log_likelihood(&self) -> f64 {
        self.log_marginal_likelihood
    }

    /// Candidates in ascending order.
    pub fn candidates(&self) -> &[f64] {
        self.table.candidates()
    }

    /// `(candidate, posterior mass)` pairs in ascending candidate order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.table.iter().map(|(p, lm)| (p, lm.exp()))
    }

    pub fn log_prob(&self, p: f64) -> f64 {
        self.table.log_prob(p)
    }

    pub fn prob(&self, p: f64) -> f64 {
        self.table.prob(p)
    }

    /// Log posterior mass of the candidate nearest to `p` within `tol`.
    pub fn log_prob_within(&self, p: f64, tol: f64) -> f64 {
        self.table.log_prob_within(p, tol)
    }

    pub fn prob_within(&self, p: f64, tol: f64) -> f64 {
        self.table.prob_within(p, tol)
    }

    /// The candidate with the highest posterior mass.
    pub fn map_estimate(&self) -> f64 {
        self.table.argmax()
    }

    /// Posterior expectation of `p0`.
    pub fn mean(&self) -> f64 {
        self.iter().map(|(p, mass)| p * mass).sum()
    }

    /// This posterior as the prior for the next batch of data.
    pub fn to_prior(&self) -> Prior {
        Prior::from_table(self.table.clone())
    }

    /// Prior mass, likelihood and posterior mass over the sorted grid.
    pub fn table(&self) -> InferenceTable {
        InferenceTable::from_posterior(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tenths() -> Vec<f64> {
        (0..=10).map(|i| i as f64 / 10.).collect()
    }

    #[test]
    fn normalizes() {
        let prior = Prior::uniform(tenths()).unwrap();
        let post = Posterior::new([0, 0, 1, 0, 1], &prior).unwrap();
        let total: f64 = post.iter().map(|(_, m)| m).sum();
        assert_relative_eq!(total, 1., epsilon = 1e-12);
        assert_eq!(post.prob(0.), 0.);
        assert_eq!(post.prob(1.), 0.);
        assert_eq!(post.prob(0.65), 0.);
        assert_eq!(post.log_prob(0.65), f64::NEG_INFINITY);
    }

    #[test]
    fn evidence_matches_direct_sum() {
        let prior = Prior::uniform([0.25, 0.5, 0.75]).unwrap();
        let post = Posterior::new([0, 1, 1], &prior).unwrap();
        let direct: f64 = [0.25f64, 0.5, 0.75]
            .iter()
            .map(|p| p * (1. - p) * (1. - p) / 3.)
            .sum();
        assert_relative_eq!(post.marginal_log_likelihood(), direct.ln(), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_evidence() {
        let prior = Prior::uniform([0., 1.]).unwrap();
        let err = Posterior::new([0, 1], &prior).unwrap_err();
        assert_eq!(err, InferenceError::DegenerateEvidence { candidates: 2 });

        // zero prior mass where the data is possible
        let prior = Prior::with_masses([0., 0.5], [(0., 1.), (0.5, 0.)]).unwrap();
        assert!(matches!(
            Posterior::new([0], &prior),
            Err(InferenceError::DegenerateEvidence { .. })
        ));
    }

    #[test]
    fn invalid_data() {
        let prior = Prior::uniform(tenths()).unwrap();
        assert!(matches!(
            Posterior::new([0, 1, 2], &prior),
            Err(InferenceError::InvalidData { index: 2, .. })
        ));
    }

    #[test]
    fn empty_sample_returns_prior() {
        let prior = Prior::with_masses([0.2, 0.8], [(0.2, 0.25), (0.8, 0.75)]).unwrap();
        let post = Posterior::new(Vec::<u8>::new(), &prior).unwrap();
        assert_relative_eq!(post.prob(0.8), 0.75, epsilon = 1e-12);
        assert_relative_eq!(post.marginal_log_likelihood(), 0., epsilon = 1e-12);
    }

    #[test]
    fn unnormalized_prior_is_absorbed_by_evidence() {
        let prior = Prior::with_masses([0.2, 0.8], [(0.2, 2.), (0.8, 6.)]).unwrap();
        let post = Posterior::new(Vec::<u8>::new(), &prior).unwrap();
        assert_relative_eq!(post.prob(0.8), 0.75, epsilon = 1e-12);
        assert_relative_eq!(post.marginal_log_likelihood(), 8f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn estimates() {
        let prior = Prior::uniform(tenths()).unwrap();
        let post = Posterior::new([0, 0, 0, 1], &prior).unwrap();
        assert_eq!(post.map_estimate(), 0.7);
        assert!(post.mean() > 0.6 && post.mean() < 0.75);
        assert_eq!(post.prior(), &prior);
        assert_eq!(post.likelihood().n0(), 3);
    }

    #[test]
    fn tolerance_lookup_is_opt_in() {
        let grid: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
        let prior = Prior::uniform(grid).unwrap();
        let post = Posterior::new([0, 1, 1], &prior).unwrap();
        // 3 * 0.1 is 0.30000000000000004, so the literal misses
        assert_eq!(post.prob(0.3), 0.);
        assert!(post.prob_within(0.3, 1e-9) > 0.);
        assert_eq!(post.log_prob_within(0.3, 1e-9), post.log_prob(3. * 0.1));
    }

    proptest! {
        #[test]
        fn masses_sum_to_one(
            n0 in 0u64..200,
            n1 in 0u64..200,
            weights in prop::collection::vec(0.01f64..5., 11),
        ) {
            let masses: Vec<(f64, f64)> = tenths().into_iter().zip(weights).collect();
            let prior = Prior::with_masses(tenths(), masses).unwrap();
            let post = Posterior::from_likelihood(Likelihood::from_counts(n0, n1), &prior).unwrap();
            let total: f64 = post.iter().map(|(_, m)| m).sum();
            prop_assert!((total - 1.).abs() < 1e-9);
        }
    }
}
