//! JSON codec for shadow documents and topic messages
//!
//! Outbound documents are serialized to `Bytes` ready to be used as an HTTP
//! body. Inbound shadow documents are decoded down to the single reported
//! value the skill consumes:
//! ```text
//! {"state": {"reported": {"humedad": <number>, ...}, ...}, ...}
//! ```

use bytes::Bytes;
use serde::Serialize;
use serde_json::Number;
use thiserror::Error;

use crate::device::MAX_DOCUMENT_SIZE;
use crate::{SensorRequest, ShadowDocument, ShadowUpdate};

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Document too large: {0} bytes (max: {MAX_DOCUMENT_SIZE})")]
    DocumentTooLarge(usize),

    #[error("Empty shadow document")]
    Empty,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn encode<T: Serialize>(value: &T) -> Result<Bytes, CodecError> {
    let buf = serde_json::to_vec(value)?;

    if buf.len() > MAX_DOCUMENT_SIZE {
        return Err(CodecError::DocumentTooLarge(buf.len()));
    }

    Ok(Bytes::from(buf))
}

/// Encode a desired-state update document
pub fn encode_update(update: &ShadowUpdate) -> Result<Bytes, CodecError> {
    encode(update)
}

/// Encode a topic message
pub fn encode_sensor_request(request: &SensorRequest) -> Result<Bytes, CodecError> {
    encode(request)
}

/// Decode a full shadow document
///
/// Fails if `state` or `state.reported` is missing, or if `humedad` is
/// present but not a number.
pub fn decode_document(buf: &[u8]) -> Result<ShadowDocument, CodecError> {
    if buf.is_empty() {
        return Err(CodecError::Empty);
    }

    Ok(serde_json::from_slice(buf)?)
}

/// Decode a shadow document and return its reported moisture reading
///
/// Returns:
/// - `Ok(Some(reading))` if the device reported a value
/// - `Ok(None)` if the key is absent or `null`
/// - `Err(...)` if the document is malformed
pub fn reported_humidity(buf: &[u8]) -> Result<Option<Number>, CodecError> {
    Ok(decode_document(buf)?.state.reported.humedad)
}
