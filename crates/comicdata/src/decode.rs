//! Payload decoding for the comics endpoint

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::model::ComicsResponse;

/// Decode a comics endpoint payload
///
/// Fields whose values don't match their declared types fall back to their
/// defaults; unknown keys are ignored. Fails only when the payload is not
/// JSON or its top-level value is not an object.
///
/// # Arguments
/// * `payload` - Raw response body
///
/// # Returns
/// * `Result<ComicsResponse>` - Envelope with results in API response order
pub fn decode_comics(payload: &[u8]) -> Result<ComicsResponse> {
    let value: Value = serde_json::from_slice(payload).map_err(|e| {
        warn!("Error unmarshaling all comics: {}", e);
        Error::Decode(e)
    })?;

    if !value.is_object() {
        warn!("Error unmarshaling all comics: top-level value is not an object");
        return Err(Error::Shape("top-level value is not an object"));
    }

    serde_json::from_value(value).map_err(|e| {
        warn!("Error unmarshaling all comics: {}", e);
        Error::Decode(e)
    })
}

/// Encode an envelope back to JSON, omitting zero-valued fields
pub fn encode_comics(response: &ComicsResponse) -> Result<Vec<u8>> {
    serde_json::to_vec(response).map_err(Error::Encode)
}
