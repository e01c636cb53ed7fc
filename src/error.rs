use thiserror::Error;

/// Errors raised while building likelihoods, priors and posteriors.
///
/// All of them are reported at construction time. Once an instance exists,
/// every query on it is infallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// An observation did not reduce to one of the two labels.
    #[error("observation {index} is not a binary label: {value}")]
    InvalidData { index: usize, value: String },

    /// Every candidate has zero posterior numerator, so the evidence is zero
    /// and the posterior cannot be normalized.
    #[error("data is impossible under all {candidates} candidate values")]
    DegenerateEvidence { candidates: usize },

    #[error("candidate grid is empty")]
    EmptyGrid,

    /// Candidates must be probabilities.
    #[error("candidate {value} is not in [0, 1]")]
    InvalidCandidate { value: f64 },

    #[error("no prior mass supplied for candidate {candidate}")]
    MissingMass { candidate: f64 },

    #[error("prior mass {mass} for candidate {candidate} is not finite and non-negative")]
    InvalidMass { candidate: f64, mass: f64 },

    /// Every candidate ended up with zero prior mass.
    #[error("prior assigns zero mass to all {candidates} candidates")]
    ZeroPriorMass { candidates: usize },

    #[error("beta shape parameters must be finite and positive, got ({alpha0}, {alpha1})")]
    InvalidShape { alpha0: f64, alpha1: f64 },
}

pub type Result<T> = std::result::Result<T, InferenceError>;
