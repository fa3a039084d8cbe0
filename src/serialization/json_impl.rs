//! JSON serializer for human-readable format.

use std::io::{Read, Write};

use crate::description::ParametricDescription;

use super::{DescriptionSerializer, SerializationError};

/// JSON serializer for human-readable format.
///
/// Useful for inspecting or diffing table bundles. Packed words are written
/// as plain integers.
pub struct JsonSerializer;

impl DescriptionSerializer for JsonSerializer {
    fn serialize<W>(descriptions: &[ParametricDescription], mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, descriptions)?;
        Ok(())
    }

    fn deserialize<R>(mut reader: R) -> Result<Vec<ParametricDescription>, SerializationError>
    where
        R: Read,
    {
        let descriptions: Vec<ParametricDescription> = serde_json::from_reader(&mut reader)?;
        Ok(descriptions)
    }
}
