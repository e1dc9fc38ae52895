//! Value Codec
//!
//! Converts between value text and entry file bytes under the configured
//! `Encoding`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::Encoding;
use crate::error::{Result, StoreError};

/// Value text -> file bytes
pub fn encode_value(encoding: Encoding, key: &str, value: &str) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Utf8 => Ok(value.as_bytes().to_vec()),
        Encoding::Base64 => STANDARD.decode(value).map_err(|e| StoreError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// File bytes -> value text
///
/// A UTF-8 entry holding invalid UTF-8 is reported as a read error.
pub fn decode_value(encoding: Encoding, key: &str, bytes: Vec<u8>) -> Result<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| {
            StoreError::read(
                key,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        }),
        Encoding::Base64 => Ok(STANDARD.encode(bytes)),
    }
}
