//! Fixed-width unsigned integers packed into 64-bit words.
//!
//! The transition and boundary-offset tables of a parametric description hold
//! thousands of small values (state ids and offsets of a few bits each), so
//! they are stored bit-exact rather than byte-aligned.
//!
//! # Layout
//!
//! Value `i` occupies bits `[i * b, (i + 1) * b)` of the concatenated words,
//! least-significant bit first, where `b` is `bits_per_value`. There is no
//! padding between values, so a value may straddle two consecutive words:
//!
//! ```text
//! b = 5, word 0:  ... | v12 (bits 0..4) | v11 | ... | v1 | v0 |
//!        word 1:  ... | v13 | v12 (bit 4) |
//! ```
//!
//! # Example
//!
//! ```rust
//! use parametric_levenshtein::description::PackedArray;
//!
//! let packed = PackedArray::pack(&[3, 0, 7, 1]).unwrap();
//! assert_eq!(packed.bits_per_value(), 3);
//! assert_eq!(packed.get(2), 7);
//! ```

use std::borrow::Cow;

/// Widest value a [`PackedArray`] can hold.
pub const MAX_BITS_PER_VALUE: u32 = 63;

const WORD_BITS: usize = u64::BITS as usize;

/// Errors raised while building a [`PackedArray`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// Nothing to pack
    #[error("cannot pack an empty sequence of values")]
    Empty,
    /// Only non-negative values can be packed
    #[error("value {value} at index {index} is negative")]
    NegativeValue {
        /// Position of the offending value
        index: usize,
        /// The offending value
        value: i64,
    },
    /// Width outside `1..=63`
    #[error("bits per value must be within 1..=63, got {0}")]
    InvalidBitWidth(u32),
    /// The backing words are too short for the declared length
    #[error("{len} values of {bits_per_value} bits do not fit into {words} words")]
    InsufficientStorage {
        /// Declared number of values
        len: usize,
        /// Declared width
        bits_per_value: u32,
        /// Number of backing words supplied
        words: usize,
    },
}

/// An immutable sequence of `bits_per_value`-wide unsigned integers.
///
/// Built either by [`PackedArray::pack`] from plain values, or from words that
/// were packed ahead of time (the precomputed tables). Access is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PackedParts")
)]
pub struct PackedArray {
    bits_per_value: u32,
    len: usize,
    words: Cow<'static, [u64]>,
}

impl PackedArray {
    /// Wraps already-packed words.
    ///
    /// # Arguments
    ///
    /// * `bits_per_value` - Width of every value, `1..=63`
    /// * `len` - Number of values stored in `words`
    /// * `words` - Backing storage laid out as described in the module docs
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidBitWidth`] for a width outside `1..=63` and
    /// [`PackError::InsufficientStorage`] if `words` cannot hold `len` values.
    pub fn new(bits_per_value: u32, len: usize, words: Vec<u64>) -> Result<Self, PackError> {
        validate(bits_per_value, len, words.len())?;

        Ok(Self {
            bits_per_value,
            len,
            words: Cow::Owned(words),
        })
    }

    /// Wraps words baked into the binary.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const context) if the width or
    /// storage size is invalid.
    pub(crate) const fn from_static(bits_per_value: u32, len: usize, words: &'static [u64]) -> Self {
        assert!(bits_per_value >= 1 && bits_per_value <= MAX_BITS_PER_VALUE);
        assert!(len * bits_per_value as usize <= words.len() * WORD_BITS);

        Self {
            bits_per_value,
            len,
            words: Cow::Borrowed(words),
        }
    }

    /// Packs `values` at the narrowest uniform width that fits the largest one.
    ///
    /// The width is `max(1, bit_length(max(values)))`, and the values are laid
    /// out in the minimum number of 64-bit words.
    ///
    /// # Errors
    ///
    /// * [`PackError::Empty`] if `values` is empty
    /// * [`PackError::NegativeValue`] if any value is below zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use parametric_levenshtein::description::{PackError, PackedArray};
    ///
    /// let packed = PackedArray::pack(&[1, 8899, 0]).unwrap();
    /// assert_eq!(packed.bits_per_value(), 14);
    /// assert_eq!(packed.get(1), 8899);
    ///
    /// assert_eq!(PackedArray::pack(&[]), Err(PackError::Empty));
    /// ```
    pub fn pack(values: &[i64]) -> Result<Self, PackError> {
        if values.is_empty() {
            return Err(PackError::Empty);
        }

        let mut max = 0u64;
        for (index, &value) in values.iter().enumerate() {
            if value < 0 {
                return Err(PackError::NegativeValue { index, value });
            }
            max = max.max(value as u64);
        }

        let bits_per_value = bit_length(max).max(1);
        let bits = bits_per_value as usize;
        let mut words = vec![0u64; (values.len() * bits).div_ceil(WORD_BITS)];

        for (index, &value) in values.iter().enumerate() {
            let value = value as u64;
            let bit = index * bits;
            let word = bit / WORD_BITS;
            let shift = bit % WORD_BITS;

            words[word] |= value << shift;
            if shift + bits > WORD_BITS {
                words[word + 1] |= value >> (WORD_BITS - shift);
            }
        }

        Ok(Self {
            bits_per_value,
            len: values.len(),
            words: Cow::Owned(words),
        })
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` addresses bits beyond the backing words. Indices in
    /// `len()..capacity` read padding and are only caught by debug builds.
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        debug_assert!(index < self.len, "index {} out of bounds ({})", index, self.len);

        let bits = self.bits_per_value as usize;
        let bit = index * bits;
        let word = bit / WORD_BITS;
        let shift = bit % WORD_BITS;

        if shift + bits <= WORD_BITS {
            (self.words[word] >> shift) & low_mask(bits)
        } else {
            let low = WORD_BITS - shift;
            (self.words[word] >> shift) | ((self.words[word + 1] & low_mask(bits - low)) << low)
        }
    }

    /// Returns the value at `index`, or `None` past the end.
    pub fn try_get(&self, index: usize) -> Option<u64> {
        (index < self.len).then(|| self.get(index))
    }

    /// Width of every stored value in bits.
    #[inline]
    pub fn bits_per_value(&self) -> u32 {
        self.bits_per_value
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing 64-bit words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Iterates over the stored values in order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |index| self.get(index))
    }
}

fn validate(bits_per_value: u32, len: usize, words: usize) -> Result<(), PackError> {
    if !(1..=MAX_BITS_PER_VALUE).contains(&bits_per_value) {
        return Err(PackError::InvalidBitWidth(bits_per_value));
    }

    let required = len
        .checked_mul(bits_per_value as usize)
        .map(|bits| bits.div_ceil(WORD_BITS));
    match required {
        Some(required) if required <= words => Ok(()),
        _ => Err(PackError::InsufficientStorage {
            len,
            bits_per_value,
            words,
        }),
    }
}

#[inline]
const fn low_mask(bits: usize) -> u64 {
    (1u64 << bits) - 1
}

#[inline]
fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct PackedParts {
    bits_per_value: u32,
    len: usize,
    words: Vec<u64>,
}

#[cfg(feature = "serialization")]
impl TryFrom<PackedParts> for PackedArray {
    type Error = PackError;

    fn try_from(parts: PackedParts) -> Result<Self, Self::Error> {
        PackedArray::new(parts.bits_per_value, parts.len, parts.words)
    }
}
