//! Parametric description serialization support.
//!
//! Table bundles can be saved and loaded as bincode or JSON, with optional
//! gzip compression. A loaded bundle passes the same validation as one built
//! with [`ParametricDescription::new`], so a corrupt file is rejected at load
//! time rather than misbehaving during traversal.
//!
//! # Example
//!
//! ```rust
//! use parametric_levenshtein::prelude::*;
//! use parametric_levenshtein::serialization::{
//!     load_registry, BincodeSerializer, DescriptionSerializer,
//! };
//!
//! let builtin = ParametricDescriptionRegistry::builtin();
//! let descriptions: Vec<ParametricDescription> =
//!     builtin.iter().map(|description| (**description).clone()).collect();
//!
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize(&descriptions, &mut buffer)?;
//!
//! let registry = load_registry::<BincodeSerializer, _>(&buffer[..])?;
//! let automaton = LevenshteinAutomaton::create_with("abcdefg", 2, true, &registry)?;
//! assert!(automaton.accepts("bacdxfg"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{Read, Write};

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::description::{DescriptionKey, ParametricDescription, ParametricDescriptionRegistry};

mod bincode_impl;
mod json_impl;

#[cfg(feature = "compression")]
mod compression_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;

#[cfg(feature = "compression")]
pub use self::compression_impl::GzipSerializer;

/// Trait for serializing and deserializing lists of descriptions.
pub trait DescriptionSerializer {
    /// Serialize `descriptions` to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W>(descriptions: &[ParametricDescription], writer: W) -> Result<(), SerializationError>
    where
        W: Write;

    /// Deserialize a list of descriptions from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if any bundle does
    /// not validate.
    fn deserialize<R>(reader: R) -> Result<Vec<ParametricDescription>, SerializationError>
    where
        R: Read;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Two bundles in one file share a `(degree, transposition)` key
    #[error("duplicate parametric description: {0}")]
    DuplicateDescription(DescriptionKey),
}

/// Loads a registry from a serialized list of descriptions.
///
/// # Errors
///
/// Returns an error if the list cannot be deserialized or holds two bundles
/// for the same key.
pub fn load_registry<S, R>(reader: R) -> Result<ParametricDescriptionRegistry, SerializationError>
where
    S: DescriptionSerializer,
    R: Read,
{
    let descriptions = S::deserialize(reader)?;

    let mut seen = FxHashSet::default();
    if let Some(duplicate) = descriptions
        .iter()
        .map(ParametricDescription::key)
        .find(|&key| !seen.insert(key))
    {
        return Err(SerializationError::DuplicateDescription(duplicate));
    }

    debug!(count = descriptions.len(), "loaded parametric descriptions");
    Ok(ParametricDescriptionRegistry::from_descriptions(descriptions))
}

/// Saves every description of `registry`, in key order.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_registry<S, W>(registry: &ParametricDescriptionRegistry, writer: W) -> Result<(), SerializationError>
where
    S: DescriptionSerializer,
    W: Write,
{
    let descriptions: Vec<ParametricDescription> = registry
        .iter()
        .map(|description| (**description).clone())
        .collect();

    S::serialize(&descriptions, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::PackedArray;

    fn builtin() -> Vec<ParametricDescription> {
        ParametricDescriptionRegistry::builtin()
            .iter()
            .map(|description| (**description).clone())
            .collect()
    }

    #[test]
    fn test_bincode_roundtrip() {
        let descriptions = builtin();
        let mut buffer = Vec::new();

        BincodeSerializer::serialize(&descriptions, &mut buffer).unwrap();
        let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded, descriptions);
    }

    #[test]
    fn test_json_roundtrip() {
        let descriptions = builtin();
        let mut buffer = Vec::new();

        JsonSerializer::serialize(&descriptions, &mut buffer).unwrap();
        let loaded = JsonSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded, descriptions);
    }

    #[test]
    fn test_registry_roundtrip() {
        let mut buffer = Vec::new();
        save_registry::<BincodeSerializer, _>(ParametricDescriptionRegistry::builtin(), &mut buffer)
            .unwrap();
        let registry = load_registry::<BincodeSerializer, _>(&buffer[..]).unwrap();

        assert_eq!(registry.keys(), ParametricDescriptionRegistry::builtin().keys());
        assert_eq!(
            registry.get(2, true).map(|description| description.states_count()),
            Some(42)
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut descriptions = builtin();
        descriptions.push(descriptions[0].clone());
        let mut buffer = Vec::new();
        JsonSerializer::serialize(&descriptions, &mut buffer).unwrap();

        let error = load_registry::<JsonSerializer, _>(&buffer[..]).unwrap_err();
        assert!(matches!(
            error,
            SerializationError::DuplicateDescription(key) if key == DescriptionKey::new(1, false)
        ));
    }

    #[test]
    fn test_invalid_bundle_rejected() {
        // A one-state table whose third cell jumps to state 7.
        let json = r#"[{
            "degree": 0,
            "include_transposition": false,
            "transitions": {"bits_per_value": 3, "len": 3, "words": [448]},
            "boundary_offsets": {"bits_per_value": 1, "len": 3, "words": [4]},
            "final_addendums": [0]
        }]"#;

        let error = JsonSerializer::deserialize(json.as_bytes()).unwrap_err();
        assert!(matches!(error, SerializationError::Json(_)));
        assert!(error.to_string().contains("leads to state 7"));
    }

    #[test]
    fn test_oversized_offset_rejected_at_load() {
        // Row <> of a one-state table may not move the boundary at all.
        let json = r#"[{
            "degree": 0,
            "include_transposition": false,
            "transitions": {"bits_per_value": 1, "len": 3, "words": [2]},
            "boundary_offsets": {"bits_per_value": 63, "len": 3, "words": [4611686018427387904, 4611686018427387904, 0]},
            "final_addendums": [0]
        }]"#;

        let error = load_registry::<JsonSerializer, _>(json.as_bytes()).unwrap_err();
        assert!(matches!(error, SerializationError::Json(_)));
        assert!(error.to_string().contains("beyond the 0-symbol vector"), "{}", error);
    }

    #[test]
    fn test_hand_built_bundle_loads() {
        let exact = ParametricDescription::new(
            0,
            false,
            PackedArray::pack(&[1, 1, 0]).unwrap(),
            PackedArray::pack(&[0, 0, 1]).unwrap(),
            vec![0],
        )
        .unwrap();
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(std::slice::from_ref(&exact), &mut buffer).unwrap();

        let registry = load_registry::<BincodeSerializer, _>(&buffer[..]).unwrap();
        assert_eq!(registry.get(0, false).map(|d| (**d).clone()), Some(exact));
    }

    #[test]
    fn test_truncated_input() {
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(&builtin(), &mut buffer).unwrap();
        buffer.truncate(buffer.len() / 2);

        assert!(matches!(
            BincodeSerializer::deserialize(&buffer[..]),
            Err(SerializationError::Bincode(_))
        ));
    }
}
