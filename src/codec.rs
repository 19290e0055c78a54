//! JSON wire encoding for configuration records.
//!
//! Decoding only checks that the payload is well-formed JSON of the right
//! shape. Field constraints are left to `Validate`, so an invalid-but-parsable
//! payload decodes fine and can be inspected afterwards.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("could not parse JSON: {0}")]
    ParseJson(#[source] serde_json::Error),
    #[error("could not encode JSON: {0}")]
    EncodeJson(#[source] serde_json::Error),
}

pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T, CodecError> {
    log::trace!("Decoding {} byte payload", raw.len());
    serde_json::from_slice(raw).map_err(CodecError::ParseJson)
}

pub fn decode_str<T: DeserializeOwned>(raw: &str) -> Result<T, CodecError> {
    decode(raw.as_bytes())
}

pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(record).map_err(CodecError::EncodeJson)
}

pub fn encode_string<T: Serialize>(record: &T) -> Result<String, CodecError> {
    serde_json::to_string(record).map_err(CodecError::EncodeJson)
}

pub fn encode_pretty<T: Serialize>(record: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(record).map_err(CodecError::EncodeJson)
}
