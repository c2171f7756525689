//! Validation of the individual URI components, RFC 3986 section 3.
//!
//! Each function either returns the (normalized) component or an
//! [`Error::InvalidUriComponent`] naming the component and the rejected value.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::uri::percent::{self, CharClass};
use crate::{Error, UriComponent};

/// Validate a scheme.
///
/// RFC 3986 section 3.1:
/// > scheme      = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
///
/// Schemes are case-insensitive, the returned scheme is lowercase.
pub fn scheme(raw: &str) -> Result<String, Error> {
    let mut bytes = raw.bytes();
    let valid = match bytes.next() {
        None => true,
        Some(first) => {
            first.is_ascii_alphabetic()
                && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
    };
    if valid {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(Error::component(UriComponent::Scheme, raw))
    }
}

/// Validate user information.
///
/// RFC 3986 section 3.2.1:
/// > userinfo    = *( unreserved / pct-encoded / sub-delims / ":" )
pub fn user_info(raw: &str) -> Result<String, Error> {
    if percent::is_encoded(raw.as_bytes(), CharClass::UserInfo) {
        Ok(raw.to_owned())
    } else {
        Err(Error::component(UriComponent::UserInfo, raw))
    }
}

/// Compose user information from `user` and `password`, then validate it.
///
/// The password is only included if both `user` and `password` are non-empty.
pub fn compose_user_info(user: &str, password: Option<&str>) -> Result<String, Error> {
    match password {
        Some(password) if !user.is_empty() && !password.is_empty() => {
            user_info(&format!("{user}:{password}"))
        }
        _ => user_info(user),
    }
}

/// Validate a host.
///
/// RFC 3986 section 3.2.2:
/// > host        = IP-literal / IPv4address / reg-name
/// > IP-literal  = "[" ( IPv6address / IPvFuture  ) "]"
/// > IPvFuture   = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
/// > reg-name    = *( unreserved / pct-encoded / sub-delims )
///
/// A host made up of only digits and at least one dot must be a valid
/// dotted-quad IPv4 address, only digits (e.g. `123`) is a reg-name. Hosts
/// are case-insensitive, the returned host is lowercase.
pub fn host(raw: &str) -> Result<String, Error> {
    let valid = if raw.is_empty() {
        true
    } else if let Some(literal) = raw.strip_prefix('[') {
        match literal.strip_suffix(']') {
            Some(literal) => is_ip_future(literal) || literal.parse::<Ipv6Addr>().is_ok(),
            None => false,
        }
    } else if raw.contains('.') && raw.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        raw.parse::<Ipv4Addr>().is_ok()
    } else {
        percent::is_encoded(raw.as_bytes(), CharClass::RegName)
    };

    if valid {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(Error::component(UriComponent::Host, raw))
    }
}

/// Returns `true` if `literal` (without the brackets) is an `IPvFuture`.
fn is_ip_future(literal: &str) -> bool {
    let rest = match literal.strip_prefix(['v', 'V']) {
        Some(rest) => rest,
        None => return false,
    };
    match rest.split_once('.') {
        Some((version, address)) => {
            !version.is_empty()
                && version.bytes().all(|b| b.is_ascii_hexdigit())
                && !address.is_empty()
                && address.bytes().all(|b| CharClass::UserInfo.allows(b))
        }
        None => false,
    }
}

/// Validate a port, it must be in the range [1, 65535].
pub fn port(raw: Option<u16>) -> Result<Option<u16>, Error> {
    match raw {
        Some(0) => Err(Error::component(UriComponent::Port, "0")),
        port => Ok(port),
    }
}

/// Parse and validate a port from a string.
///
/// An empty string is no port. Values outside of [1, 65535] are rejected, not
/// clamped.
pub fn parse_port(raw: &str) -> Result<Option<u16>, Error> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u16>() {
        Ok(port) if raw.bytes().all(|b| b.is_ascii_digit()) => self::port(Some(port)),
        _ => Err(Error::component(UriComponent::Port, raw)),
    }
}

/// Validate a path in the context of the URI it belongs to.
///
/// RFC 3986 section 3.3:
/// > If a URI contains an authority component, then the path component must
/// > either be empty or begin with a slash ("/") character. If a URI does not
/// > contain an authority component, then the path cannot begin with two
/// > slash characters ("//").
///
/// Further a path of a URI without a scheme can't have a colon in its first
/// segment, as it would be mistaken for a scheme (RFC 3986 section 4.2).
///
/// Characters not allowed in a path are percent-encoded when the path is read,
/// see [`Uri::path`]. ASCII control characters are always rejected.
///
/// [`Uri::path`]: crate::Uri::path
pub fn path(raw: &str, has_scheme: bool, has_authority: bool) -> Result<String, Error> {
    let valid = !has_control(raw)
        && (has_scheme || !colon_in_first_segment(raw))
        && (has_authority || !raw.starts_with("//"))
        && (!has_authority || raw.is_empty() || raw.starts_with('/'));
    if valid {
        Ok(raw.to_owned())
    } else {
        Err(Error::component(UriComponent::Path, raw))
    }
}

/// Check that `raw`, an already validated path, can be used in a URI without
/// a scheme.
pub(crate) fn path_without_scheme(raw: &str) -> Result<(), Error> {
    if colon_in_first_segment(raw) {
        Err(Error::component(UriComponent::Path, raw))
    } else {
        Ok(())
    }
}

fn colon_in_first_segment(path: &str) -> bool {
    path.split('/').next().map_or(false, |segment| segment.contains(':'))
}

/// Validate a query.
///
/// Characters not allowed in a query are percent-encoded when the query is
/// read. ASCII control characters are rejected.
pub fn query(raw: &str) -> Result<String, Error> {
    if has_control(raw) {
        Err(Error::component(UriComponent::Query, raw))
    } else {
        Ok(raw.to_owned())
    }
}

/// Validate a fragment, uses the same rules as [`query`].
pub fn fragment(raw: &str) -> Result<String, Error> {
    if has_control(raw) {
        Err(Error::component(UriComponent::Fragment, raw))
    } else {
        Ok(raw.to_owned())
    }
}

/// Returns `true` if `value` contains an ASCII control character.
fn has_control(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_control())
}
