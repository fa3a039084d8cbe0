//! Gzip compression wrapper for serializers.

use std::io::{Read, Write};

use crate::description::ParametricDescription;

use super::{DescriptionSerializer, SerializationError};

/// Gzip-compressed serializer wrapper.
///
/// Transition tables are mostly small repeated values, so they compress well.
///
/// # Example
///
/// ```rust
/// use parametric_levenshtein::prelude::*;
/// use parametric_levenshtein::serialization::{
///     load_registry, save_registry, BincodeSerializer, GzipSerializer,
/// };
///
/// let mut buffer = Vec::new();
/// save_registry::<GzipSerializer<BincodeSerializer>, _>(
///     ParametricDescriptionRegistry::builtin(),
///     &mut buffer,
/// )?;
///
/// let registry = load_registry::<GzipSerializer<BincodeSerializer>, _>(&buffer[..])?;
/// assert_eq!(registry.len(), 4);
/// # Ok::<(), parametric_levenshtein::serialization::SerializationError>(())
/// ```
pub struct GzipSerializer<S> {
    _inner: std::marker::PhantomData<S>,
}

impl<S: DescriptionSerializer> DescriptionSerializer for GzipSerializer<S> {
    fn serialize<W>(descriptions: &[ParametricDescription], writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(writer, Compression::default());
        S::serialize(descriptions, &mut encoder)?;
        encoder.finish().map_err(SerializationError::Io)?;
        Ok(())
    }

    fn deserialize<R>(reader: R) -> Result<Vec<ParametricDescription>, SerializationError>
    where
        R: Read,
    {
        use flate2::read::GzDecoder;

        let decoder = GzDecoder::new(reader);
        S::deserialize(decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{BincodeSerializer, JsonSerializer};
    use crate::description::ParametricDescriptionRegistry;

    #[test]
    fn test_gzip_roundtrip() {
        let descriptions: Vec<ParametricDescription> = ParametricDescriptionRegistry::builtin()
            .iter()
            .map(|description| (**description).clone())
            .collect();

        let mut plain = Vec::new();
        JsonSerializer::serialize(&descriptions, &mut plain).unwrap();
        let mut compressed = Vec::new();
        GzipSerializer::<JsonSerializer>::serialize(&descriptions, &mut compressed).unwrap();

        assert!(compressed.len() < plain.len());
        assert_eq!(
            GzipSerializer::<JsonSerializer>::deserialize(&compressed[..]).unwrap(),
            descriptions
        );

        let mut binary = Vec::new();
        GzipSerializer::<BincodeSerializer>::serialize(&descriptions, &mut binary).unwrap();
        assert_eq!(
            GzipSerializer::<BincodeSerializer>::deserialize(&binary[..]).unwrap(),
            descriptions
        );
    }
}
