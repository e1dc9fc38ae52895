//! Key Encoding
//!
//! Maps arbitrary string keys to safe, flat filenames and back.
//!
//! ## Scheme
//! Every byte of the key's UTF-8 form is percent-encoded except the
//! URI-component unreserved set:
//! ```text
//! A-Z a-z 0-9 - _ . ! ~ * ' ( )
//! ```
//! A leading `.` is additionally written as `%2E`, so an encoded key is never
//! `.` or `..` and never starts with a dot. Names starting with `.` are free
//! for temporary files, so bare dot-names such as `.foo` are never entries.
//!
//! Decoding is plain percent-decoding, so it accepts any escaping of the same
//! key and always reproduces the original string.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Result, StoreError};

/// Bytes left as-is (everything else is escaped)
const KEY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a key into a filename
///
/// Total over all strings. The result never contains `/` or `\`.
pub fn encode_key(key: &str) -> String {
    let encoded = utf8_percent_encode(key, KEY_ESCAPE).to_string();
    match encoded.strip_prefix('.') {
        Some(rest) => format!("%2E{}", rest),
        None => encoded,
    }
}

/// Decode a filename produced by `encode_key` back into its key
pub fn decode_key(name: &str) -> Result<String> {
    percent_decode_str(name)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|e| StoreError::KeyDecode {
            name: name.to_string(),
            message: e.to_string(),
        })
}

/// True for names that can never be produced by `encode_key`
pub(crate) fn is_reserved_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Reject keys that have no filename representation
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}
