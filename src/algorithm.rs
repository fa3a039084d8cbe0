//! Levenshtein distance variants backed by parametric tables.

/// Which edit operations count as a single error.
///
/// Each variant selects a different family of parametric description tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Algorithm {
    /// Standard Levenshtein distance.
    ///
    /// Supports three edit operations:
    /// - Insert: add a character
    /// - Delete: remove a character
    /// - Substitute: replace one character with another
    #[default]
    Standard,

    /// Levenshtein distance with transposition.
    ///
    /// Extends Standard with:
    /// - Transpose: swap two adjacent characters
    ///
    /// `"abcdegf"` is one edit away from `"abcdefg"` here, two under Standard.
    Transposition,
}

impl Algorithm {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Standard => "standard",
            Algorithm::Transposition => "transposition",
        }
    }

    /// Returns true if adjacent transposition is a primitive edit.
    pub fn includes_transposition(&self) -> bool {
        matches!(self, Algorithm::Transposition)
    }

    /// Maps a transposition flag to its algorithm.
    pub fn from_transposition(include_transposition: bool) -> Self {
        if include_transposition {
            Algorithm::Transposition
        } else {
            Algorithm::Standard
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Algorithm::Standard),
            "transposition" | "trans" => Ok(Algorithm::Transposition),
            _ => Err(format!(
                "Unknown algorithm: {}. Valid options: standard, transposition",
                s
            )),
        }
    }
}
