//! Component-level percent encoding shared by the filter codec and the URL
//! humanizer.
//!
//! Encoding leaves exactly the characters `encodeURIComponent` leaves
//! (ASCII alphanumerics and `-_.!~*'()`), so links produced here are
//! byte-identical to the ones a browser extension would emit. Decoding is
//! strict: a stray `%` or a byte sequence that is not UTF-8 is an error, never
//! a lossy replacement.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Bytes escaped by [`encode_component`].
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure to decode a percent-encoded component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// `%` not followed by two hex digits.
    #[error("malformed percent-escape at byte {position}")]
    MalformedEscape { position: usize },
    /// Escapes decode to bytes that are not UTF-8.
    #[error("percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Percent-encodes `input` the way `encodeURIComponent` does.
///
/// `,`, `/` and `#` are always escaped, which is what keeps them usable as
/// structural delimiters in the filter wire format.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Strictly percent-decodes `input`.
pub fn decode_component(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut from = 0;
    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'%') {
        let position = from + offset;
        let well_formed = bytes
            .get(position + 1..position + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::MalformedEscape { position });
        }
        from = position + 3;
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}
