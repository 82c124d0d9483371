//! Encoding and decoding of the binary (15, 7, 5) BCH code, which carries 7 message bits
//! in a 15-bit word and corrects up to 2 bit errors.

extern crate binfield_matrix;
extern crate collect_slice;

#[macro_use]
extern crate log;

#[cfg(feature = "ser")]
extern crate serde;

#[cfg(feature = "ser")]
#[macro_use]
extern crate serde_derive;

pub mod coding;
pub mod consts;
pub mod error;
pub mod stats;
