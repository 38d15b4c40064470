//! Serialization of fitted model parameters.
//!
//! Parameters are stored as plain numbers (never backend tensors), so a model
//! fitted on one backend can be loaded on another.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A parameter representation that can be turned into bytes and back.
///
/// Implementors should contain only plain numerical data (`Vec<f64>`,
/// scalars). Every serde type gets a bincode implementation for free.
pub trait SerializableParams: Sized {
    /// Serializes the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Deserializes the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> SerializableParams for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
