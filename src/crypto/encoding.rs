//! Transport encoding: ciphertext bytes <-> URL-safe base64 text.
//!
//! Blobs are written with the URL-safe alphabet and `=` padding.  Some
//! stores strip or escape the padding on the way back, so decoding
//! accepts both padded and unpadded text.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::errors::{Result, TinyCryptError};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode ciphertext into a blob safe to embed in a URL.
pub fn encode_blob(ciphertext: &[u8]) -> String {
    URL_SAFE.encode(ciphertext)
}

/// Decode a blob produced by `encode_blob`.
pub fn decode_blob(blob: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(blob.trim())
        .map_err(|e| TinyCryptError::InvalidInput(format!("blob is not URL-safe base64: {e}")))
}
