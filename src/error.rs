/*!
# Errors

All fallible operations in this crate return [`Result`] with the crate-wide [`Error`] enum.
Generation errors are values local to a single call: a failed generation leaves no partial
state behind, and retrying with valid parameters is always safe.
*/

use thiserror::Error;

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by generators and analysis routines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter is outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input does not carry enough information for the requested computation
    #[error("not enough data: {0}")]
    InsufficientData(String),

    /// Stub pairing hit its round cap with more than one stub unmatched
    #[error("stub pairing did not converge after {rounds} rounds ({remaining} stubs unmatched)")]
    NonConvergence {
        /// Number of pairing rounds performed
        rounds: usize,
        /// Number of stubs still unmatched when the cap was hit
        remaining: usize,
    },
}

/// Shorthand for returning an [`Error::InvalidArgument`] early when a condition fails
macro_rules! invalid_argument_unless {
    ($cond : expr, $($arg : tt)*) => {
        if !($cond) {
            return Err($crate::error::Error::InvalidArgument(format!($($arg)*)));
        }
    };
}

pub(crate) use invalid_argument_unless;
