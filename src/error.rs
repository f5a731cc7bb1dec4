use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The frequency range cannot be mapped onto the signal's spectrum
    #[error("invalid frequency range [{low}, {high}] Hz: {reason}")]
    InvalidRange { low: f64, high: f64, reason: String },

    /// A window value used as a divisor is exactly zero
    #[error("window value at index {index} is exactly zero for frequency bin {freq}")]
    NumericDomain { index: usize, freq: usize },

    #[error("degenerate input `{parameter}`: {reason}")]
    DegenerateInput {
        parameter: &'static str,
        reason: String,
    },
}
