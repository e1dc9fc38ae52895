//! Tests for key encoding
//!
//! These tests verify:
//! - decode(encode(k)) == k for awkward keys
//! - Encoded names never contain separators or start with a dot
//! - Compatibility with encodeURIComponent-style names
//! - Decoding failures

use std::collections::HashSet;

use fskv::key::{decode_key, encode_key};
use fskv::StoreError;

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_awkward_keys() {
    let keys = [
        "a",
        "b/c",
        "日本語",
        "100%",
        "%41",
        "user:1",
        "with space",
        "back\\slash",
        ".",
        "..",
        "...",
        ".hidden",
        "a.b",
        "../../etc/passwd",
        "emoji 🚀",
        "tab\tnewline\n",
        "~!*'()-_.",
        "null\0byte",
    ];

    for key in keys {
        let encoded = encode_key(key);
        assert_eq!(decode_key(&encoded).unwrap(), key, "key {:?} -> {:?}", key, encoded);
    }
}

#[test]
fn test_encoding_is_injective() {
    let keys = ["a", "A", "%61", "a%", "%", "%25", ".", "%2E", "..", ".a", "a.", "/", "%2F"];

    let encoded: HashSet<String> = keys.iter().map(|k| encode_key(k)).collect();

    assert_eq!(encoded.len(), keys.len());
}

// =============================================================================
// Filename Safety Tests
// =============================================================================

#[test]
fn test_no_path_separators() {
    for key in ["b/c", "a\\b", "/", "../x", "x/../../y"] {
        let encoded = encode_key(key);
        assert!(!encoded.contains('/'), "{:?}", encoded);
        assert!(!encoded.contains('\\'), "{:?}", encoded);
    }
}

#[test]
fn test_dot_keys_never_name_directories() {
    assert_eq!(encode_key("."), "%2E");
    assert_eq!(encode_key(".."), "%2E.");
    assert_eq!(encode_key(".hidden"), "%2Ehidden");

    for key in [".", "..", ".x", "..."] {
        assert!(!encode_key(key).starts_with('.'));
    }
}

#[test]
fn test_inner_dots_are_kept() {
    assert_eq!(encode_key("a.b"), "a.b");
    assert_eq!(encode_key("file.json"), "file.json");
}

// =============================================================================
// Compatibility Tests
// =============================================================================

#[test]
fn test_matches_uri_component_encoding() {
    assert_eq!(encode_key("user:1"), "user%3A1");
    assert_eq!(encode_key("b/c"), "b%2Fc");
    assert_eq!(encode_key("with space"), "with%20space");
    assert_eq!(encode_key("100%"), "100%25");
    assert_eq!(encode_key("日本語"), "%E6%97%A5%E6%9C%AC%E8%AA%9E");
    assert_eq!(encode_key("~!*'()-_"), "~!*'()-_");
}

#[test]
fn test_decode_accepts_lowercase_escapes() {
    assert_eq!(decode_key("b%2fc").unwrap(), "b/c");
    assert_eq!(decode_key("plain").unwrap(), "plain");
}

// =============================================================================
// Decode Error Tests
// =============================================================================

#[test]
fn test_decode_invalid_utf8() {
    let result = decode_key("%FF%FE");

    assert!(matches!(result, Err(StoreError::KeyDecode { .. })));
}
