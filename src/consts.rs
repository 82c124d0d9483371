//! Parameters of the (15, 7, 5) BCH code.
//!
//! Bit i of a 15-bit word is the coefficient of the x<sup>i</sup> term of the word's
//! polynomial, so the message occupies the high-degree terms and the parity the low.

/// Number of bits in a codeword: n.
pub const WORD_BITS: usize = 15;
/// Number of data bits in a codeword: k.
pub const MESSAGE_BITS: usize = 7;
/// Number of parity bits in a codeword: n - k.
pub const PARITY_BITS: usize = WORD_BITS - MESSAGE_BITS;
/// Largest message that fits in the data bits.
pub const MAX_MESSAGE: u8 = (1 << MESSAGE_BITS) - 1;
/// Mask covering all bits of a codeword.
pub const WORD_MASK: u16 = (1 << WORD_BITS) - 1;
/// Mask covering the parity bits of a codeword.
pub const PARITY_MASK: u16 = (1 << PARITY_BITS) - 1;
/// Minimum Hamming distance between codewords: d.
pub const DISTANCE: usize = 5;
/// Generator polynomial g(x) = x<sup>8</sup> + x<sup>7</sup> + x<sup>6</sup> +
/// x<sup>4</sup> + 1.
pub const GENERATOR: u16 = 0b1_1101_0001;
/// Primitive polynomial h(x) = x<sup>4</sup> + x + 1 characterizing GF(2<sup>4</sup>).
pub const FIELD_POLY: u8 = 0b1_0011;
