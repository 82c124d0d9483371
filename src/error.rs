//! Standard errors that may occur when working with the BCH code.

use std;

/// BCH runtime errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BchError {
    /// A message to encode didn't fit in the 7 data bits.
    MessageRange,
    /// The multiplicative inverse of the zero codeword was requested.
    ZeroInverse,
    /// Too many errors were detected when attempting a BCH decode.
    Uncorrectable,
}

impl std::fmt::Display for BchError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use self::BchError::*;

        fmt.write_str(match *self {
            MessageRange => "message exceeds 7 bits",
            ZeroInverse => "zero has no multiplicative inverse",
            Uncorrectable => "received word has more errors than can be corrected",
        })
    }
}

impl std::error::Error for BchError {}

/// Standard result using `BchError`.
pub type Result<T> = std::result::Result<T, BchError>;
