use serde::de::DeserializeOwned;

use crate::error::Result;

/// Decode a PowerDNS response body into one of the schema types.
///
/// Either the whole body matches `T` or a
/// [`PdnsError::Deserialization`](crate::PdnsError::Deserialization) is
/// returned; nothing is decoded partially.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

pub fn decode_str<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
