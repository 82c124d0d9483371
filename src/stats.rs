//! Runtime statistics.

use coding::bch::{Decoded, Outcome};

/// Tracks decoding stats for the BCH code.
///
/// Each decoding context keeps its own `CodeStats` and folds it into a shared total with
/// `merge`, so no synchronization is needed while decoding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CodeStats {
    /// Total number of received words.
    words: usize,
    /// Number of corrected bits.
    fixed: usize,
    /// Number of unrecoverable words.
    err: usize,
}

impl CodeStats {
    /// Create a new `CodeStats` with empty counters.
    pub fn new() -> Self {
        CodeStats::default()
    }

    /// Record the outcome of the given decoded word.
    pub fn record(&mut self, dec: &Decoded) {
        match dec.outcome() {
            Outcome::Clean => self.record_fixes(0),
            Outcome::Corrected(n) => self.record_fixes(n),
            Outcome::Uncorrectable => self.record_err(),
        }
    }

    /// Record that a word was received with the given amount of corrected bits.
    pub fn record_fixes(&mut self, err: usize) {
        debug_assert!(err <= 2);

        self.words += 1;
        self.fixed += err;
    }

    /// Record that a word was received with an unrecoverable error.
    pub fn record_err(&mut self) {
        self.words += 1;
        self.err += 1;
    }

    /// Merge in the stats from the given object and clear the other stats.
    pub fn merge(&mut self, other: &mut CodeStats) {
        self.words += other.words;
        self.err += other.err;
        self.fixed += other.fixed;

        other.clear();
    }

    /// Clear all stats.
    pub fn clear(&mut self) {
        *self = CodeStats::default();
    }

    /// Total number of received words.
    pub fn words(&self) -> usize { self.words }

    /// Number of corrected bits over all words.
    pub fn fixed(&self) -> usize { self.fixed }

    /// Number of words that couldn't be corrected.
    pub fn err(&self) -> usize { self.err }
}

#[cfg(test)]
mod test {
    use super::*;
    use coding::bch::{decode, encode};

    #[test]
    fn test_record() {
        let (w, _) = encode(0b0110011).unwrap();
        let mut s = CodeStats::new();

        s.record(&decode(w));
        s.record(&decode(w ^ 1 << 7));
        s.record(&decode(w ^ 1 << 2 ^ 1 << 13));
        s.record(&decode(w ^ 0b10011));

        assert_eq!(s.words(), 4);
        assert_eq!(s.fixed(), 3);
        assert_eq!(s.err(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = CodeStats::new();
        let mut b = CodeStats::new();

        a.record_fixes(1);
        b.record_fixes(2);
        b.record_err();

        a.merge(&mut b);

        assert_eq!(a.words(), 3);
        assert_eq!(a.fixed(), 3);
        assert_eq!(a.err(), 1);
        assert_eq!(b, CodeStats::default());

        a.clear();
        assert_eq!(a.words(), 0);
    }
}
