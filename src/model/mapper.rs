//! Response mapper seam
//!
//! The session never calls `serde_json` directly; it goes through a
//! [`ResponseMapper`] so the wire format stays a replaceable collaborator.

use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Converts between raw bodies and typed records
pub trait ResponseMapper: Send + Sync {
    /// Decodes a raw body into `T`, failing with [`AppError::Decode`]
    fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T, AppError>;

    /// Encodes `value` into a raw body
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, AppError>;
}

/// JSON implementation of [`ResponseMapper`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMapper;

impl ResponseMapper for JsonMapper {
    fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, AppError> {
        Ok(serde_json::to_string(value)?)
    }
}
