//! Galois field arithmetic and the BCH error correction code built on it.

#[macro_use]
pub mod galois;

mod pgz;

pub mod bch;
