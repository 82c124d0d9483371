//! Locates bit errors in binary BCH words of designed distance 5 using the
//! Peterson-Gorenstein-Zierler algorithm and Chien Search.
//!
//! # Decoding Procedure
//!
//! For a binary code correcting t = 2 errors at locations X<sub>1</sub> =
//! α<sup>m<sub>1</sub></sup> and X<sub>2</sub> = α<sup>m<sub>2</sub></sup>, the
//! syndromes s<sub>1</sub> = r(α) and s<sub>3</sub> = r(α<sup>3</sup>) satisfy
//!
//! s<sub>1</sub> = X<sub>1</sub> + X<sub>2</sub>,<br>
//! s<sub>3</sub> = X<sub>1</sub><sup>3</sup> + X<sub>2</sub><sup>3</sup> =
//! s<sub>1</sub><sup>3</sup> + s<sub>1</sub>X<sub>1</sub>X<sub>2</sub>.
//!
//! The error locator polynomial Λ(x) = (1 + X<sub>1</sub>x)(1 + X<sub>2</sub>x) = 1 +
//! σ<sub>1</sub>x + σ<sub>2</sub>x<sup>2</sup> then has σ<sub>1</sub> = s<sub>1</sub> and
//! σ<sub>2</sub> = (s<sub>3</sub> + s<sub>1</sub><sup>3</sup>) / s<sub>1</sub>. When
//! σ<sub>2</sub> = 0 only one error occurred and Λ(x) = 1 + s<sub>1</sub>x. When
//! s<sub>1</sub> = 0 but s<sub>3</sub> ≠ 0, no pattern of 2 or fewer errors can produce
//! the syndromes.
//!
//! # Chien Search
//!
//! The roots of Λ(x) are found by evaluating it at every nonzero codeword
//! α<sup>i</sup>. Rather than evaluating each term from scratch, each coefficient
//! Λ<sub>k</sub> is multiplied by α<sup>k</sup> after every step, so that
//! Λ(α<sup>i</sup>) is just the sum of the current terms. If fewer than deg(Λ(x))
//! distinct roots are found, the word has more errors than can be corrected.

use std;

use collect_slice::CollectSlice;

use coding::galois::{GaloisField, Gf16, Gf16Codeword, Polynomial, PolynomialCoefs};

/// Construct the error locator polynomial Λ(x) from the syndromes s<sub>1</sub> and
/// s<sub>3</sub>.
///
/// Return `Some(Λ(x))`, where deg(Λ(x)) is the number of detected errors, or `None` if
/// the syndromes are inconsistent with 2 or fewer errors.
pub fn error_locator<P: PolynomialCoefs>(s1: Gf16Codeword, s3: Gf16Codeword)
    -> Option<Polynomial<P>>
{
    let one = Gf16Codeword::for_power(0);

    if s1.zero() {
        return if s3.zero() {
            Some(Polynomial::new(std::iter::once(one)))
        } else {
            None
        };
    }

    // Compute s1σ2 = s3 + s1^3.
    let disc = s3 + s1.pow(3);

    if disc.zero() {
        return Some(Polynomial::new([one, s1].iter().cloned()));
    }

    let sigma2 = disc * s1.invert().ok()?;

    Some(Polynomial::new([one, s1, sigma2].iter().cloned()))
}

/// Finds the roots of the given error locator polynomial Λ(x).
///
/// This performs the standard brute force method, evaluating each Λ(α<sup>i</sup>) for 0
/// ≤ i < 2<sup>r</sup> - 1, with the Chien Search optimization.
pub struct PolynomialRoots<P: PolynomialCoefs> {
    /// Error locator polynomial: Λ(x).
    ///
    /// This field isn't exactly interpreted as a polynomial, more like a list of
    /// coefficient A = [Λ<sub>0</sub>, ..., Λ<sub>e</sub>] such that Λ(α<sup>i</sup>) =
    /// sum(A) for the current power i.
    loc: Polynomial<P>,
    /// Current codeword power the polynomial is being evaluated with.
    pow: std::ops::Range<usize>,
}

impl<P: PolynomialCoefs> PolynomialRoots<P> {
    /// Construct a new `PolynomialRoots` from the given error locator polynomial Λ(x).
    pub fn new(loc: Polynomial<P>) -> Self {
        PolynomialRoots {
            loc: loc,
            pow: 0..Gf16::size(),
        }
    }

    /// Update each term's coefficient to its value when evaluated for the next codeword
    /// power.
    fn update_terms(&mut self) {
        for (pow, term) in self.loc.iter_mut().enumerate() {
            *term = *term * Gf16Codeword::for_power(pow);
        }
    }

    /// Compute Λ(α<sup>i</sup>), where i is the current power.
    fn eval(&self) -> Gf16Codeword {
        self.loc.iter().fold(Gf16Codeword::default(), |sum, &x| sum + x)
    }
}

/// Iterate over all roots α<sup>i</sup> of Λ(x).
impl<P: PolynomialCoefs> Iterator for PolynomialRoots<P> {
    type Item = Gf16Codeword;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pow = match self.pow.next() {
                Some(pow) => pow,
                None => return None,
            };

            let eval = self.eval();
            self.update_terms();

            if eval.zero() {
                return Some(Gf16Codeword::for_power(pow));
            }
        }
    }
}

/// Decodes and iterates over bit error locations.
pub struct Errors<P: PolynomialCoefs> {
    /// Roots of the error locator polynomial.
    ///
    /// Note that this field isn't interpreted as a polynomial -- the `Polynomial` type
    /// just provides a conveniently sized buffer for root codewords.
    roots: Polynomial<P>,
    /// Current error being evaluated in iteration.
    pos: std::ops::Range<usize>,
}

impl<P: PolynomialCoefs> Errors<P> {
    /// Create a new `Errors` decoder from the given syndromes s<sub>1</sub> and
    /// s<sub>3</sub>.
    ///
    /// If decoding was sucessful, return `Some((nerr, errs))`, where `nerr` is the number
    /// of detected errors and `errs` is the error iterator. Otherwise, return `None` to
    /// indicate an unrecoverable error.
    pub fn new(s1: Gf16Codeword, s3: Gf16Codeword) -> Option<(usize, Self)> {
        let loc = error_locator::<P>(s1, s3)?;
        // Λ(x) always has a constant term of 1.
        let errors = loc.degree().unwrap_or(0);

        // Buffer the roots so their count can be checked before any are used.
        let mut roots = Polynomial::<P>::default();
        let nroots = PolynomialRoots::new(loc).collect_slice_exhaust(&mut roots[..]);

        if nroots != errors {
            return None;
        }

        Some((errors, Errors {
            roots: roots,
            pos: 0..errors,
        }))
    }
}

/// Iterate over detected errors, yielding the bit location of each error.
impl<P: PolynomialCoefs> Iterator for Errors<P> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // If Λ(α^i) = 0, then the error location is m ≡ -i (modulo the field.)
        self.pos.next()
            .and_then(|i| self.roots[i].invert().ok())
            .and_then(|loc| loc.power())
    }
}

#[cfg(test)]
mod test {
    use std;
    use collect_slice::CollectSlice;
    use super::*;
    use coding::galois::{Gf16Codeword, PolynomialCoefs, Polynomial};

    impl_polynomial_coefs!(TestCoefs, 5);
    type TestPolynomial = Polynomial<TestCoefs>;

    /// Compute (s1, s3) for errors at the given bit locations.
    fn syndromes(locs: &[usize]) -> (Gf16Codeword, Gf16Codeword) {
        locs.iter().fold((Gf16Codeword::default(), Gf16Codeword::default()), |(s1, s3), &m| {
            (s1 + Gf16Codeword::for_power(m), s3 + Gf16Codeword::for_power(3 * m))
        })
    }

    fn locations(s1: Gf16Codeword, s3: Gf16Codeword) -> Option<Vec<usize>> {
        Errors::<TestCoefs>::new(s1, s3).map(|(nerr, errs)| {
            let mut locs: Vec<usize> = errs.collect();
            assert_eq!(locs.len(), nerr);
            locs.sort();
            locs
        })
    }

    #[test]
    fn test_roots() {
        // p(x) = (1+α^12x)(1+α^5x)
        let p = TestPolynomial::new([
            Gf16Codeword::for_power(0),
            Gf16Codeword::for_power(12),
        ].iter().cloned()) * TestPolynomial::new([
            Gf16Codeword::for_power(0),
            Gf16Codeword::for_power(5),
        ].iter().cloned());

        let mut r = PolynomialRoots::new(p);
        let mut roots = [Gf16Codeword::default(); 2];
        r.collect_slice_checked(&mut roots[..]);

        assert!(roots.contains(&Gf16Codeword::for_power(12).invert().unwrap()));
        assert!(roots.contains(&Gf16Codeword::for_power(5).invert().unwrap()));

        let p = TestPolynomial::new(std::iter::once(Gf16Codeword::for_power(0)));

        let mut r = PolynomialRoots::new(p);
        assert!(r.next().is_none());

        // 1 + x + x^2 has roots α^5 and α^10.
        let p = TestPolynomial::new((0..3).map(|_| Gf16Codeword::for_power(0)));
        let roots: Vec<Gf16Codeword> = PolynomialRoots::new(p).collect();
        assert_eq!(roots, vec![Gf16Codeword::for_power(5), Gf16Codeword::for_power(10)]);
    }

    #[test]
    fn test_locator() {
        let (s1, s3) = syndromes(&[]);
        assert_eq!(error_locator::<TestCoefs>(s1, s3).unwrap().degree(), Some(0));

        let (s1, s3) = syndromes(&[6]);
        let loc = error_locator::<TestCoefs>(s1, s3).unwrap();
        assert_eq!(loc.degree(), Some(1));
        assert_eq!(loc.constant(), Gf16Codeword::for_power(0));
        assert_eq!(loc.coef(1), Gf16Codeword::for_power(6));

        let (s1, s3) = syndromes(&[3, 9]);
        let loc = error_locator::<TestCoefs>(s1, s3).unwrap();
        assert_eq!(loc.degree(), Some(2));
        assert_eq!(loc.coef(1), Gf16Codeword::for_power(3) + Gf16Codeword::for_power(9));
        assert_eq!(loc.coef(2), Gf16Codeword::for_power(12));

        // s1 = 0 but s3 ≠ 0.
        assert!(error_locator::<TestCoefs>(Gf16Codeword::default(),
                                           Gf16Codeword::for_power(4)).is_none());
    }

    #[test]
    fn test_errors() {
        assert_eq!(locations(Gf16Codeword::default(), Gf16Codeword::default()),
                   Some(vec![]));

        for m in 0..15 {
            let (s1, s3) = syndromes(&[m]);
            assert_eq!(locations(s1, s3), Some(vec![m]));

            for n in (m + 1)..15 {
                let (s1, s3) = syndromes(&[m, n]);
                assert_eq!(locations(s1, s3), Some(vec![m, n]));
            }
        }

        // Errors at 1, 5, 10 produce a locator with no roots in the field.
        let (s1, s3) = syndromes(&[1, 5, 10]);
        assert!(locations(s1, s3).is_none());

        // Errors at 0, 1, 4 cancel out in s1.
        let (s1, s3) = syndromes(&[0, 1, 4]);
        assert!(s1.zero());
        assert!(!s3.zero());
        assert!(locations(s1, s3).is_none());
    }
}
