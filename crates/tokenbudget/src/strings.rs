//! # String Utilities

/// Convert bytes to a `String`, replacing invalid UTF-8 sequences with `U+FFFD`.
///
/// Valid input is reused without copying.
pub fn string_from_utf8_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
