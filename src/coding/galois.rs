//! Galois field arithmetic for codewords and polynomials.

use std;

use collect_slice::CollectSlice;

use consts::FIELD_POLY;
use error::{BchError, Result};

/// Codeword and power lookup tables for GF(2<sup>4</sup>).
struct Tables {
    /// Maps power i to the bit pattern of α<sup>i</sup>.
    codewords: [u8; 15],
    /// Maps the bit pattern b of a nonzero codeword to its power, indexed by b - 1.
    powers: [u8; 15],
}

impl Tables {
    /// Generate the tables by repeatedly multiplying by α and reducing modulo h(x).
    const fn build() -> Tables {
        let mut codewords = [0; 15];
        let mut powers = [0; 15];
        let mut bits: u8 = 1;
        let mut pow = 0;

        while pow < 15 {
            codewords[pow] = bits;
            powers[bits as usize - 1] = pow as u8;

            bits <<= 1;

            if bits >> 4 != 0 {
                bits ^= FIELD_POLY;
            }

            pow += 1;
        }

        Tables {
            codewords: codewords,
            powers: powers,
        }
    }
}

/// Tables shared by all codeword operations, computed at compile time.
static TABLES: Tables = Tables::build();

/// GF(2<sup>4</sup>) field characterized by α<sup>4</sup>+α+1.
#[derive(Copy, Clone, Debug)]
pub struct Gf16;

impl GaloisField for Gf16 {
    fn size() -> usize { 15 }
    fn valid_codeword(bits: u8) -> bool { bits >> 4 == 0 }
    fn codeword(pow: usize) -> u8 { TABLES.codewords[pow] }
    fn power(codeword: usize) -> usize { TABLES.powers[codeword] as usize }
}

/// Codeword in the GF(2<sup>4</sup>) field.
pub type Gf16Codeword = Codeword<Gf16>;

/// A GF(2<sup>r</sup>) Galois field.
pub trait GaloisField {
    /// Number of unique nonzero codewords in the field: 2<sup>r</sup> - 1.
    fn size() -> usize;
    /// Check if the given bit pattern is a valid codeword in the field.
    fn valid_codeword(bits: u8) -> bool;
    /// Map the given power i to codeword α<sup>i</sup>.
    fn codeword(pow: usize) -> u8;
    /// Map the given codeword a<sup>i</sup>, as a zero-based index, to its power i.
    fn power(codeword: usize) -> usize;

    /// Map the given power i to codeword α<sup>m</sup> ≡ α<sup>i</sup> (modulo the size
    /// of the field.)
    fn codeword_modded(pow: usize) -> u8 {
        Self::codeword(pow % Self::size())
    }
}

/// Codeword in a Galois field.
#[derive(Copy, Clone)]
pub struct Codeword<F: GaloisField> {
    field: std::marker::PhantomData<F>,
    bits: u8,
}

impl<F: GaloisField> Codeword<F> {
    /// Construct a new `Codeword` from the given bit pattern. Panic if the pattern is
    /// invalid in the field.
    pub fn new(bits: u8) -> Codeword<F> {
        assert!(F::valid_codeword(bits));

        Codeword {
            field: std::marker::PhantomData,
            bits: bits,
        }
    }

    /// Construct a new `Codeword` α<sup>m</sup> ≡ α<sup>i</sup> (modulo the field) for
    /// the given power i.
    pub fn for_power(power: usize) -> Codeword<F> {
        Codeword::new(F::codeword_modded(power))
    }

    /// Retrieve the bit pattern of the codeword.
    pub fn bits(&self) -> u8 { self.bits }

    /// Check if the codeword is zero.
    pub fn zero(&self) -> bool { self.bits == 0 }

    /// Retrieve the power i of the current codeword α<sup>i</sup>. Return `Some(i)` if
    /// the power is defined and `None` if the codeword is zero.
    pub fn power(&self) -> Option<usize> {
        if self.zero() {
            None
        } else {
            Some(F::power(self.bits as usize - 1))
        }
    }

    /// Find 1/α<sup>i</sup> for the current codeword α<sup>i</sup>, or fail with
    /// `ZeroInverse` if the codeword is zero.
    pub fn invert(self) -> Result<Codeword<F>> {
        match self.power() {
            Some(p) => Ok(Codeword::for_power(F::size() - p)),
            None => Err(BchError::ZeroInverse),
        }
    }

    /// Compute (α<sup>i</sup>)<sup>p</sup> for the current codeword α<sup>i</sup> and
    /// given power p.
    pub fn pow(&self, pow: usize) -> Codeword<F> {
        match self.power() {
            Some(p) => Codeword::for_power(p * pow),
            None => Codeword::default(),
        }
    }
}

impl<F: GaloisField> Default for Codeword<F> {
    /// Construct the additive identity codeword, 0.
    fn default() -> Self {
        Codeword::new(0)
    }
}

/// Add codewords using Galois addition.
impl<F: GaloisField> std::ops::Add for Codeword<F> {
    type Output = Codeword<F>;

    fn add(self, rhs: Codeword<F>) -> Self::Output {
        Codeword::new(self.bits ^ rhs.bits)
    }
}

/// "Subtract" codewords, which is equivalent to addition.
impl<F: GaloisField> std::ops::Sub for Codeword<F> {
    type Output = Codeword<F>;

    fn sub(self, rhs: Codeword<F>) -> Self::Output {
        self + rhs
    }
}

/// Multiply codewords using Galois multiplication.
impl<F: GaloisField> std::ops::Mul for Codeword<F> {
    type Output = Codeword<F>;

    fn mul(self, rhs: Codeword<F>) -> Self::Output {
        match (self.power(), rhs.power()) {
            (Some(p), Some(q)) => Codeword::for_power(p + q),
            _ => Codeword::default(),
        }
    }
}

/// Divide codewords using Galois division. Panic if the divisor is zero.
impl<F: GaloisField> std::ops::Div for Codeword<F> {
    type Output = Codeword<F>;

    fn div(self, rhs: Codeword<F>) -> Self::Output {
        match (self.power(), rhs.power()) {
            // Ensure non-negative power.
            (Some(p), Some(q)) => Codeword::for_power(F::size() + p - q),
            (None, Some(_)) => Codeword::default(),
            (_, None) => panic!("divide by zero"),
        }
    }
}

impl<F: GaloisField> std::cmp::PartialEq for Codeword<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F: GaloisField> std::cmp::Eq for Codeword<F> {}

/// Check equality of the codeword's bit pattern with raw bits.
impl<F: GaloisField> std::cmp::PartialEq<u8> for Codeword<F> {
    fn eq(&self, other: &u8) -> bool {
        self.bits == *other
    }
}

impl<F: GaloisField> std::fmt::Debug for Codeword<F> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.power() {
            Some(p) => write!(fmt, "Codeword::for_power({})", p),
            None => write!(fmt, "Codeword::default()"),
        }
    }
}

/// Coefficient storage for a bounded-degree Galois polynomial of a particular code.
pub trait PolynomialCoefs: Default + Copy + Clone +
    std::ops::Deref<Target = [Gf16Codeword]> + std::ops::DerefMut
{
    /// The minimum Hamming distance, d, in (n,k,d).
    fn distance() -> usize;

    /// Maximum number of correctable errors: t.
    fn errors() -> usize {
        // Since d is odd, d = 2t+1 ⇒ t = (d-1)/2 = floor(d / 2)
        Self::distance() / 2
    }

    /// Number of syndromes: 2t.
    fn syndromes() -> usize { 2 * Self::errors() }

    /// Verify the implementer is well-formed.
    fn validate(&self) {
        // Distance must be odd.
        assert!(Self::distance() % 2 == 1);
        // Storage must at least be able to hold a full locator polynomial.
        assert!(self.len() > Self::errors());
    }
}

/// Create a coefficient storage buffer for the code of given distance. In the first form,
/// the buffer holds d + 1 coefficients. In the second form, it has the given size.
macro_rules! impl_polynomial_coefs {
    ($name:ident, $dist:expr) => {
        impl_polynomial_coefs!($name, $dist, $dist + 1);
    };
    ($name:ident, $dist:expr, $len:expr) => {
        #[derive(Copy)]
        struct $name([Gf16Codeword; $len]);

        impl PolynomialCoefs for $name {
            fn distance() -> usize { $dist }
        }

        impl Default for $name {
            fn default() -> Self {
                $name([Gf16Codeword::default(); $len])
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl std::ops::Deref for $name {
            type Target = [Gf16Codeword];
            fn deref(&self) -> &Self::Target { &self.0[..] }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0[..] }
        }
    };
}

/// Polynomial with GF(2<sup>4</sup>) codewords as coefficients.
#[derive(Copy, Clone)]
pub struct Polynomial<P: PolynomialCoefs> {
    /// Coefficients of the polynomial, with the degree-0 term first.
    coefs: P,
}

impl<P: PolynomialCoefs> Polynomial<P> {
    /// Construct a new `Polynomial` from the given coefficients c<sub>0</sub>, ...,
    /// c<sub>k</sub>.
    ///
    /// The resulting polynomial has the form p(x) = c<sub>0</sub> + c<sub>1</sub>x + ···
    /// + c<sub>k</sub>x<sup>k</sup>.
    pub fn new<T: Iterator<Item = Gf16Codeword>>(mut init: T) -> Self {
        // Start with all zero coefficients and add in the given ones.
        let mut coefs = P::default();
        init.collect_slice_exhaust(&mut coefs[..]);

        Polynomial { coefs: coefs }
    }

    /// Retrieve the degree-0 coefficient, c<sub>0</sub>.
    pub fn constant(&self) -> Gf16Codeword {
        self.coefs[0]
    }

    /// Compute deg(p(x)), returned as `Some(deg)` if the polynomial is nonzero, or
    /// `None` if p(x) = 0.
    pub fn degree(&self) -> Option<usize> {
        self.coefs.iter().rposition(|coef| !coef.zero())
    }

    /// Retrieve the coefficient c<sub>i</sub> associated with the x<sup>i</sup> term.
    ///
    /// If i > deg(p(x)), 0 is returned.
    pub fn coef(&self, i: usize) -> Gf16Codeword {
        match self.coefs.get(i) {
            Some(&c) => c,
            None => Gf16Codeword::default(),
        }
    }

    /// Evaluate p(x), substituting in the given x.
    pub fn eval(&self, x: Gf16Codeword) -> Gf16Codeword {
        // Horner's method avoids a call to `pow()` at each term.
        self.iter().rev().fold(Gf16Codeword::default(), |s, &coef| s * x + coef)
    }
}

impl<P: PolynomialCoefs> Default for Polynomial<P> {
    /// Construct an empty polynomial, p(x) = 0.
    fn default() -> Self {
        Polynomial::new(std::iter::empty())
    }
}

/// Provides a slice of coefficients starting at the degree-0 term, [c<sub>0</sub>,
/// c<sub>1</sub>, ...].
impl<P: PolynomialCoefs> std::ops::Deref for Polynomial<P> {
    type Target = [Gf16Codeword];
    fn deref(&self) -> &Self::Target { &self.coefs[..] }
}

impl<P: PolynomialCoefs> std::ops::DerefMut for Polynomial<P> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.coefs[..] }
}

/// Multiply polynomials using Galois multiplication for coefficients.
///
/// Note that resulting terms outside the bounds of the polynomial are silently discarded,
/// effectively computing p(x)q(x) mod x<sup>n+1</sup>, where n is the maximum degree
/// supported by the polynomial.
impl<P: PolynomialCoefs> std::ops::Mul<Polynomial<P>> for Polynomial<P> {
    type Output = Polynomial<P>;

    fn mul(self, rhs: Polynomial<P>) -> Self::Output {
        let mut out = Polynomial::<P>::default();

        for (i, &coef) in self.iter().enumerate() {
            for (j, &mult) in rhs.iter().enumerate() {
                if let Some(c) = out.coefs.get_mut(i + j) {
                    *c = *c + coef * mult;
                }
            }
        }

        out
    }
}

impl<P: PolynomialCoefs> std::fmt::Debug for Polynomial<P> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "Polynomial({:?})", &self.coefs[..])
    }
}
