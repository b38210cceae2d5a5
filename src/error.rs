use thiserror::Error;

/// Configuration and precondition violations surfaced by the filter stages.
///
/// A frame whose acoustic content yields no usable pitch is *not* an error;
/// the tracker records a sentinel pitch of `0` for it and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested band edges are not `0 < low < high < sample_rate / 2`.
    #[error("invalid band: cutoffs must satisfy 0 < low < high < sample_rate / 2")]
    InvalidBand,

    /// The requested filter order is below 1.
    #[error("invalid order: filter order must be at least 1")]
    InvalidOrder,

    /// The feed-forward and feedback coefficient vectors differ in length.
    #[error("shape mismatch: got {b} feed-forward but {a} feedback coefficients")]
    ShapeMismatch { b: usize, a: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
