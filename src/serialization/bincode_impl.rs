//! Bincode serializer for compact binary format.

use std::io::{Read, Write};

use crate::description::ParametricDescription;

use super::{DescriptionSerializer, SerializationError};

/// Bincode serializer for compact binary format.
///
/// Packed words are written as-is, so a file is about the size of the tables
/// in memory.
pub struct BincodeSerializer;

impl DescriptionSerializer for BincodeSerializer {
    fn serialize<W>(descriptions: &[ParametricDescription], mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        bincode::serialize_into(&mut writer, descriptions)?;
        Ok(())
    }

    fn deserialize<R>(mut reader: R) -> Result<Vec<ParametricDescription>, SerializationError>
    where
        R: Read,
    {
        let descriptions: Vec<ParametricDescription> = bincode::deserialize_from(&mut reader)?;
        Ok(descriptions)
    }
}
