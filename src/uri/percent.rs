//! Percent-encoding, RFC 3986 section 2.1.
//!
//! Encoding is idempotent: an already valid percent-encoded triplet (`%HH`) is
//! copied as-is, so encoding the output of [`encode`] again returns the same
//! string. A `%` that isn't followed by two hex digits is encoded as `%25`.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, percent_encode_byte};

/// Set of characters that don't need encoding in a URI component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`.
    UserInfo,
    /// `reg-name = *( unreserved / pct-encoded / sub-delims )`.
    RegName,
    /// `path = *( pchar / "/" )`, where
    /// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`.
    Path,
    /// `query = *( pchar / "/" / "?" )`.
    Query,
    /// `fragment = *( pchar / "/" / "?" )`.
    Fragment,
}

impl CharClass {
    /// Returns `true` if the byte `b` can be used unencoded.
    pub const fn allows(self, b: u8) -> bool {
        if is_unreserved(b) || is_sub_delim(b) {
            return true;
        }
        match self {
            CharClass::UserInfo => b == b':',
            CharClass::RegName => false,
            CharClass::Path => matches!(b, b':' | b'@' | b'/'),
            CharClass::Query | CharClass::Fragment => matches!(b, b':' | b'@' | b'/' | b'?'),
        }
    }
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`.
pub(crate) const fn is_unreserved(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~')
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`.
pub(crate) const fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Returns `true` if `raw[at..]` starts with a valid percent-encoded triplet.
fn is_triplet(raw: &[u8], at: usize) -> bool {
    matches!(raw.get(at..at + 3), Some([b'%', h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit())
}

/// Returns `true` if `raw` only contains characters allowed by `class` and
/// valid percent-encoded triplets, i.e. if [`encode`] would return it
/// unchanged.
pub fn is_encoded(raw: &[u8], class: CharClass) -> bool {
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' {
            if !is_triplet(raw, i) {
                return false;
            }
            i += 3;
        } else if class.allows(raw[i]) {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

/// Percent-encode all bytes in `raw` not allowed by `class`.
///
/// Valid percent-encoded triplets in `raw` are kept as-is, see the module
/// documentation.
pub fn encode(raw: &[u8], class: CharClass) -> Cow<'_, str> {
    if is_encoded(raw, class) {
        // All allowed characters are ASCII.
        if let Ok(raw) = std::str::from_utf8(raw) {
            return Cow::Borrowed(raw);
        }
    }

    let mut encoded = String::with_capacity(raw.len() + raw.len() / 2);
    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if b == b'%' && is_triplet(raw, i) {
            encoded.push('%');
            encoded.push(char::from(raw[i + 1]));
            encoded.push(char::from(raw[i + 2]));
            i += 3;
            continue;
        }

        if class.allows(b) {
            encoded.push(char::from(b));
        } else {
            encoded.push_str(percent_encode_byte(b));
        }
        i += 1;
    }
    Cow::Owned(encoded)
}

/// Decode the percent-encoded triplets in `encoded`.
///
/// Malformed triplets, e.g. `%G1` or a trailing `%`, are left as-is.
pub fn decode(encoded: &str) -> Cow<'_, [u8]> {
    percent_decode_str(encoded).into()
}

/// Normalizes the percent-encoded triplets in `value`, RFC 3986 section 6.2.2.
///
/// Hex digits are uppercased and triplets encoding an unreserved character are
/// decoded.
pub(crate) fn normalize_triplets(value: &str) -> Cow<'_, str> {
    if !value.contains('%') {
        return Cow::Borrowed(value);
    }

    let raw = value.as_bytes();
    let mut normalized = String::with_capacity(value.len());
    let mut last = 0;
    let mut i = 0;
    while i < raw.len() {
        if !is_triplet(raw, i) {
            i += 1;
            continue;
        }

        normalized.push_str(&value[last..i]);
        let byte = (hex_value(raw[i + 1]) << 4) | hex_value(raw[i + 2]);
        if is_unreserved(byte) {
            normalized.push(char::from(byte));
        } else {
            normalized.push_str(percent_encode_byte(byte));
        }
        i += 3;
        last = i;
    }
    normalized.push_str(&value[last..]);
    Cow::Owned(normalized)
}

/// Value of the hex digit `b`, `b` must be a valid hex digit.
const fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}
