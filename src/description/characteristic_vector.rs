//! Self-delimiting characteristic vectors.
//!
//! # Theory Background
//!
//! The characteristic vector of a symbol `x` over a window `w_i ... w_k` of the
//! query word marks the positions that hold `x`:
//!
//! ```text
//! β(x, w_i...w_k) = b_i...b_k where b_j = {1 if x = w_j, 0 otherwise}
//! ```
//!
//! Parametric description tables are indexed by these vectors, so they are
//! encoded as plain integers. A leading boundary bit sits above the most
//! significant data bit; without it `<0,1,0,1>` and `<0,0,0,0,1,0,1>` would both
//! encode to `0b101`. With it they become `0b10101` and `0b10000101`.
//!
//! ```text
//! β('x', "xoxoxo"[4..6]) = "10"  ->  0b1_10
//! β('x', "")            = ""    ->  0b1      (EMPTY)
//! ```

use std::fmt;

/// Longest vector that fits next to the boundary bit in a `u32`.
pub const MAX_VECTOR_SIZE: usize = u32::BITS as usize - 1;

/// An encoded characteristic vector: data bits below a boundary bit.
///
/// The encoded value is never zero, and `bits() - 1` is the row offset of the
/// vector in a parametric description table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CharacteristicVector(u32);

impl CharacteristicVector {
    /// The empty vector: boundary bit only.
    pub const EMPTY: Self = Self(1);

    /// Computes `β(symbol, word[from..until])`.
    ///
    /// The window is clamped to the word first: `from` to `max(from, 0)` and
    /// `until` to `min(until, word.len())`. A window that is empty after
    /// clamping yields [`CharacteristicVector::EMPTY`]; this is not an error.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The code point being matched
    /// * `word` - Code points of the query word
    /// * `from` - First window position (inclusive)
    /// * `until` - End of the window (exclusive)
    ///
    /// # Panics
    ///
    /// In debug builds, if the clamped window is longer than
    /// [`MAX_VECTOR_SIZE`]. That means the caller's degree does not match the
    /// table it is indexing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parametric_levenshtein::description::CharacteristicVector;
    ///
    /// let word: Vec<char> = "xoxoxo".chars().collect();
    /// let vector = CharacteristicVector::encode('x', &word, 4, 6);
    /// assert_eq!(vector.bits(), 0b110);
    /// assert_eq!(vector.to_string(), "10");
    /// ```
    #[inline]
    pub fn encode(symbol: char, word: &[char], from: isize, until: isize) -> Self {
        let start = from.max(0) as usize;
        let end = until.clamp(0, word.len() as isize) as usize;

        if start >= end {
            return Self::EMPTY;
        }

        debug_assert!(
            end - start <= MAX_VECTOR_SIZE,
            "characteristic vector window of {} exceeds {}",
            end - start,
            MAX_VECTOR_SIZE
        );

        let mut vector = Self::EMPTY.0;
        for &c in &word[start..end] {
            vector = (vector << 1) | u32::from(c == symbol);
        }

        Self(vector)
    }

    /// Wraps an already-encoded vector. Returns `None` for zero, which lacks
    /// the boundary bit.
    pub fn from_bits(bits: u32) -> Option<Self> {
        (bits != 0).then_some(Self(bits))
    }

    /// The encoded integer, boundary bit included.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of data bits (the boundary bit is not counted).
    #[inline]
    pub fn size(self) -> usize {
        (u32::BITS - 1 - self.0.leading_zeros()) as usize
    }

    /// Returns true for the vector with no data bits.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// 1-based position of the first `1` data bit, or `None` if every data bit
    /// is `0`.
    ///
    /// This is `j = μz[b_z = 1]` over `<b_1, ..., b_k>`.
    pub fn first_match(self) -> Option<usize> {
        let boundary_zeros = self.0.leading_zeros();
        let data = self.0 ^ (1 << (u32::BITS - 1 - boundary_zeros));

        if data == 0 {
            None
        } else {
            Some((data.leading_zeros() - boundary_zeros) as usize)
        }
    }

    /// Returns true if data bit `position` (0-based, left to right) is `1`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= size()`.
    pub fn is_match(self, position: usize) -> bool {
        let size = self.size();
        assert!(position < size, "position {} out of bounds ({})", position, size);

        (self.0 >> (size - 1 - position)) & 1 == 1
    }

    /// Iterates over the data bits, left to right.
    pub fn iter(self) -> impl Iterator<Item = bool> {
        (0..self.size()).map(move |position| self.is_match(position))
    }
}

impl fmt::Display for CharacteristicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
