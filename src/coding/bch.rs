//! Encoding and decoding of the (15, 7, 5) binary BCH code.
//!
//! Codewords are systematic: the 7 message bits occupy bits 14 through 8 and the 8
//! parity bits, the remainder of dividing the shifted message by the generator
//! polynomial g(x), occupy bits 7 through 0. Bit i of a word is the coefficient of the
//! x<sup>i</sup> term of its polynomial.
//!
//! Decoding corrects up to 2 bit errors using the Peterson-Gorenstein-Zierler algorithm.
//! Words with 3 or more errors are reported as uncorrectable whenever their syndromes
//! can't have come from 2 or fewer errors. Otherwise they lie within distance 2 of a
//! different codeword and are indistinguishable from a correctable error on that
//! codeword, so they decode to it. Use `check` to detect, without correcting, any
//! pattern of up to 4 errors.

use std;

use binfield_matrix::matrix_mul;

use coding::galois::{Gf16Codeword, PolynomialCoefs};
use coding::pgz;
use consts::{GENERATOR, MAX_MESSAGE, PARITY_BITS, PARITY_MASK, WORD_BITS, WORD_MASK};
use error::{BchError, Result};

/// Encode the given 7 message bits into a 15-bit codeword.
///
/// Return `Ok((word, parity))`, where `word` is the full codeword and `parity` is its
/// lower 8 bits, or `Err(MessageRange)` if the message doesn't fit in 7 bits.
pub fn encode(message: u8) -> Result<(u16, u8)> {
    let parity = parity(message)?;
    Ok(((message as u16) << PARITY_BITS | parity as u16, parity))
}

/// Compute the 8 parity bits for the given 7 message bits, or fail with `MessageRange`
/// if the message doesn't fit in 7 bits.
pub fn parity(message: u8) -> Result<u8> {
    if message > MAX_MESSAGE {
        return Err(BchError::MessageRange);
    }

    Ok(remainder((message as u16) << PARITY_BITS) as u8)
}

/// Compute r(x) mod g(x) for the given word r(x) using GF(2) long division.
fn remainder(word: u16) -> u16 {
    (PARITY_BITS..WORD_BITS).rev().fold(word, |rem, deg| if rem >> deg & 1 == 0 {
        rem
    } else {
        rem ^ GENERATOR << (deg - PARITY_BITS)
    })
}

/// Check if the given word is a valid codeword, without attempting any correction.
///
/// Bits above the 15 codeword bits are ignored.
pub fn check(word: u16) -> bool {
    let rem: usize = matrix_mul(word & WORD_MASK, PAR);
    rem == 0
}

/// Transposed parity-check matrix: bit i of each row holds one bit of x<sup>i</sup> mod
/// g(x), most significant remainder bit first.
const PAR: &[u16] = &[
    0b100010110000000,
    0b110011101000000,
    0b111011000100000,
    0b011101100010000,
    0b101100000001000,
    0b010110000000100,
    0b001011000000010,
    0b000101100000001,
];

/// Compute the syndromes s<sub>1</sub> = r(α) and s<sub>3</sub> = r(α<sup>3</sup>) of
/// the given received word r(x).
///
/// Both syndromes are zero if and only if the word is a codeword.
pub fn syndromes(word: u16) -> (Gf16Codeword, Gf16Codeword) {
    (syndrome(word, 1), syndrome(word, 3))
}

/// Evaluate r(α<sup>p</sup>) using Horner's method, starting from the highest-degree bit.
fn syndrome(word: u16, pow: usize) -> Gf16Codeword {
    let x = Gf16Codeword::for_power(pow);

    (0..WORD_BITS).rev().fold(Gf16Codeword::default(), |s, b| {
        s * x + Gf16Codeword::new((word >> b & 1) as u8)
    })
}

/// Polynomial coefficients for BCH decoding.
impl_polynomial_coefs!(BchCoefs, 5);

/// Summary of a decoding attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Outcome {
    /// The word was a valid codeword.
    Clean,
    /// The given number of bits, 1 or 2, were corrected.
    Corrected(usize),
    /// The word had more errors than can be corrected.
    Uncorrectable,
}

/// Result of decoding a received word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Decoded {
    /// Received word, with bits outside the code cleared.
    received: u16,
    /// Corrected codeword, or the received word if uncorrectable.
    word: u16,
    /// Whether and how the word was fixed.
    outcome: Outcome,
    /// Bit positions that were flipped, in ascending order. Only the first `errors()`
    /// entries are used.
    positions: [u8; 2],
}

impl Decoded {
    fn new(received: u16, word: u16, outcome: Outcome, positions: [u8; 2]) -> Self {
        Decoded {
            received: received,
            word: word,
            outcome: outcome,
            positions: positions,
        }
    }

    /// Create a `Decoded` that passes the received word through unmodified.
    fn uncorrectable(received: u16) -> Self {
        Decoded::new(received, received, Outcome::Uncorrectable, [0; 2])
    }

    /// Retrieve the 7 message bits of the corrected word, or of the received word if it
    /// was uncorrectable.
    pub fn message(&self) -> u8 { (self.word >> PARITY_BITS) as u8 }

    /// Retrieve the 8 parity bits of the corrected word, or of the received word if it
    /// was uncorrectable.
    pub fn parity(&self) -> u8 { (self.word & PARITY_MASK) as u8 }

    /// Retrieve the full 15-bit corrected word.
    pub fn word(&self) -> u16 { self.word }

    /// Retrieve the 15-bit word as received.
    pub fn received(&self) -> u16 { self.received }

    pub fn outcome(&self) -> Outcome { self.outcome }

    /// Check if any bits were corrected.
    pub fn corrected(&self) -> bool {
        match self.outcome {
            Outcome::Corrected(_) => true,
            Outcome::Clean | Outcome::Uncorrectable => false,
        }
    }

    /// Number of corrected bits: 0, 1, or 2.
    pub fn errors(&self) -> usize {
        match self.outcome {
            Outcome::Corrected(n) => n,
            Outcome::Clean | Outcome::Uncorrectable => 0,
        }
    }

    /// Check if the message and parity form a valid codeword.
    pub fn valid(&self) -> bool {
        self.outcome != Outcome::Uncorrectable
    }

    /// Bit positions, in [0, 14], that were flipped to correct the word.
    pub fn positions(&self) -> &[u8] {
        &self.positions[..self.errors()]
    }

    /// Convert to `Ok((message, err))`, where `err` is the number of corrected bits, or
    /// `Err(Uncorrectable)` if the word couldn't be corrected.
    pub fn into_result(self) -> Result<(u8, usize)> {
        if self.valid() {
            Ok((self.message(), self.errors()))
        } else {
            Err(BchError::Uncorrectable)
        }
    }
}

/// Try to decode the given 15-bit word to the nearest codeword, correcting up to 2 bit
/// errors.
///
/// Bits above the 15 codeword bits are ignored. Decoding never fails outright: an
/// uncorrectable word is returned as received, with `valid()` false.
pub fn decode(received: u16) -> Decoded {
    let received = received & WORD_MASK;
    let (s1, s3) = syndromes(received);

    trace!("word {:015b} has syndromes s1={:?} s3={:?}", received, s1, s3);

    let (nerr, errs) = match pgz::Errors::<BchCoefs>::new(s1, s3) {
        Some(x) => x,
        None => {
            debug!("word {:015b} is uncorrectable (s1={:?} s3={:?})", received, s1, s3);
            return Decoded::uncorrectable(received);
        },
    };

    if nerr == 0 {
        return Decoded::new(received, received, Outcome::Clean, [0; 2]);
    }

    let mut positions = [0; 2];

    // Flip all error bits.
    let fixed = errs.zip(positions.iter_mut()).fold(received, |w, (loc, pos)| {
        *pos = loc as u8;
        w ^ 1 << loc
    });

    positions[..nerr].sort();

    debug!("corrected word {:015b} at bits {:?}", received, &positions[..nerr]);

    Decoded::new(received, fixed, Outcome::Corrected(nerr), positions)
}
