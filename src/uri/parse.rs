//! Decomposition of a URI reference into its raw components.

use crate::uri::component;
use crate::Error;

/// Raw, unvalidated, components of a URI reference.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawUri<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: Option<RawAuthority<'a>>,
    pub(crate) path: &'a str,
    pub(crate) query: &'a str,
    pub(crate) fragment: &'a str,
}

/// Raw components of an authority, the host including brackets.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    pub(crate) user_info: &'a str,
    pub(crate) host: &'a str,
    pub(crate) port: Option<u16>,
}

/// Split `uri` into its components.
///
/// This follows the regular expression from RFC 3986 appendix B:
///
/// ```text
/// ^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?
///  12            3  4          5       6  7        8 9
/// ```
///
/// The only failures are in the authority, which must be splittable into
/// user information, host and port.
pub(crate) fn parse(uri: &str) -> Result<RawUri<'_>, Error> {
    let mut raw = RawUri::default();
    let mut rest = uri;

    if let Some(idx) = rest.find([':', '/', '?', '#']) {
        if idx > 0 && rest.as_bytes()[idx] == b':' {
            raw.scheme = &rest[..idx];
            rest = &rest[idx + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        raw.authority = Some(parse_authority(&after[..end], uri)?);
        rest = &after[end..];
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        raw.fragment = fragment;
        rest = before;
    }
    if let Some((before, query)) = rest.split_once('?') {
        raw.query = query;
        rest = before;
    }
    raw.path = rest;
    Ok(raw)
}

/// Split `authority` into user information, host and port.
///
/// > authority   = [ userinfo "@" ] host [ ":" port ]
fn parse_authority<'a>(authority: &'a str, uri: &str) -> Result<RawAuthority<'a>, Error> {
    let mut raw = RawAuthority::default();
    let mut rest = authority;
    if let Some((user_info, host_port)) = rest.rsplit_once('@') {
        raw.user_info = user_info;
        rest = host_port;
    }

    let port = if rest.starts_with('[') {
        let end = match rest.find(']') {
            Some(end) => end + 1,
            None => return Err(Error::MalformedUri(uri.to_owned())),
        };
        raw.host = &rest[..end];
        match &rest[end..] {
            "" => "",
            port => match port.strip_prefix(':') {
                Some(port) => port,
                None => return Err(Error::MalformedUri(uri.to_owned())),
            },
        }
    } else {
        match rest.rsplit_once(':') {
            Some((host, port)) => {
                raw.host = host;
                port
            }
            None => {
                raw.host = rest;
                ""
            }
        }
    };

    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedUri(uri.to_owned()));
    }
    raw.port = component::parse_port(port)?;
    Ok(raw)
}
