//! Log-space arithmetic.

/// `ln(exp(a) + exp(b))` without leaving log space.
#[inline]
pub fn logaddexp(a: f64, b: f64) -> f64 {
    if a == b {
        return a + 2f64.ln();
    }
    let diff = a - b;
    if diff > 0. {
        a + (-diff).exp().ln_1p()
    } else if diff < 0. {
        b + diff.exp().ln_1p()
    } else {
        // diff is NAN
        diff
    }
}

/// Running log-sum-exp of log-space terms.
///
/// Terms equal to negative infinity carry zero mass and are never folded
/// into the running value, so an accumulator that only ever sees them stays
/// at negative infinity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LogSumExp {
    value: f64,
    terms: usize,
    skipped: usize,
}

impl LogSumExp {
    pub(crate) fn new() -> LogSumExp {
        LogSumExp {
            value: f64::NEG_INFINITY,
            terms: 0,
            skipped: 0,
        }
    }

    pub(crate) fn add(&mut self, term: f64) {
        if term == f64::NEG_INFINITY {
            self.skipped += 1;
            return;
        }
        self.value = if self.terms == 0 {
            term
        } else {
            logaddexp(self.value, term)
        };
        self.terms += 1;
    }

    pub(crate) fn current(&self) -> f64 {
        self.value
    }

    /// Number of terms that were skipped because they were negative infinity.
    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }
}

impl FromIterator<f64> for LogSumExp {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = LogSumExp::new();
        iter.into_iter().for_each(|term| acc.add(term));
        acc
    }
}

/// `n * ln(x)`, with `0 * ln(0)` taken as its limit 0.
#[inline]
pub(crate) fn xlogy(n: u64, x: f64) -> f64 {
    if n == 0 {
        0.
    } else {
        n as f64 * x.ln()
    }
}
