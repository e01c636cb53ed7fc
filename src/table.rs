//! Tabular view of an inference for plotting and export.
//!
//! An [`InferenceTable`] holds three columns aligned with the sorted candidate
//! grid: prior mass, likelihood of the data (linear, not log) and posterior
//! mass. The CSV writer emits one row per candidate with the header
//! `p0,prior,likelihood,posterior`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::izip;

use crate::posterior::Posterior;

/// Configuration for CSV export of an [`InferenceTable`].
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Number of decimal places for floating point values
    precision: usize,
    /// Whether to write the header row (default: true)
    header: bool,
}

impl Default for CsvOptions {
    fn default() -> CsvOptions {
        CsvOptions {
            precision: 6,
            header: true,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places for floating point values.
    ///
    /// Default is 6 decimal places.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Configure whether the header row is written.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Prior, likelihood and posterior over the sorted candidate grid.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceTable {
    pub candidates: Vec<f64>,
    pub prior: Vec<f64>,
    pub likelihood: Vec<f64>,
    pub posterior: Vec<f64>,
}

impl InferenceTable {
    pub(crate) fn from_posterior(posterior: &Posterior<'_>) -> InferenceTable {
        let candidates = posterior.candidates().to_vec();
        let prior = candidates
            .iter()
            .map(|&p| posterior.prior().prob(p))
            .collect();
        let likelihood = candidates
            .iter()
            .map(|&p| posterior.likelihood().prob(p))
            .collect();
        let posterior = posterior.iter().map(|(_, mass)| mass).collect();
        InferenceTable {
            candidates,
            prior,
            likelihood,
            posterior,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Rows of `(p0, prior, likelihood, posterior)`.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        izip!(
            &self.candidates,
            &self.prior,
            &self.likelihood,
            &self.posterior
        )
        .map(|(&p, &prior, &lik, &post)| (p, prior, lik, post))
    }

    pub fn write_csv<W: Write>(&self, mut writer: W, options: &CsvOptions) -> Result<()> {
        if options.header {
            writeln!(writer, "p0,prior,likelihood,posterior")
                .context("Failed to write CSV header")?;
        }
        let prec = options.precision;
        for (p, prior, lik, post) in self.rows() {
            writeln!(
                writer,
                "{:.prec$},{:.prec$},{:.prec$e},{:.prec$}",
                p, prior, lik, post
            )
            .context("Failed to write CSV row")?;
        }
        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P, options: &CsvOptions) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {:?}", path))?;
        self.write_csv(BufWriter::new(file), options)
            .with_context(|| format!("Failed to write CSV file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prior::Prior;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn columns_are_aligned() {
        let prior = Prior::uniform([0.8, 0.2, 0.5]).unwrap();
        let post = Posterior::new([0, 0, 1], &prior).unwrap();
        let table = post.table();
        assert_eq!(table.candidates, vec![0.2, 0.5, 0.8]);
        assert_eq!(table.len(), 3);
        for (p, prior_mass, lik, post_mass) in table.rows() {
            assert_relative_eq!(prior_mass, 1. / 3.);
            assert_relative_eq!(lik, p * p * (1. - p), max_relative = 1e-12);
            assert_eq!(post_mass, post.prob(p));
        }
    }

    #[test]
    fn csv_layout() {
        let prior = Prior::uniform([0.5, 1.0]).unwrap();
        let post = Posterior::new([0, 0], &prior).unwrap();
        let mut out = Vec::new();
        post.table()
            .write_csv(&mut out, &CsvOptions::new().with_precision(2))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "p0,prior,likelihood,posterior",
                "0.50,0.50,2.50e-1,0.20",
                "1.00,0.50,1.00e0,0.80",
            ]
        );

        let mut out = Vec::new();
        post.table()
            .write_csv(&mut out, &CsvOptions::default().with_header(false))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
