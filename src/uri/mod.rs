//! Module with the [`Uri`] type.
//!
//! An example from RFC 3986 section 3:
//!
//! ```text
//!   foo://example.com:8042/over/there?name=ferret#nose
//!   \_/   \______________/\_________/ \_________/ \__/
//!    |           |            |            |        |
//! scheme     authority       path        query   fragment
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub mod component;
pub mod normalize;
mod parse;
pub mod percent;

use percent::CharClass;

use crate::Error;

/// Uniform Resource Identifier (URI) reference.
///
/// A `Uri` is immutable, all `with_*` methods validate the new value and return
/// a new `Uri`. The path, query and fragment are stored as given and are
/// percent-encoded when read, so reading and setting them repeatedly never
/// double encodes them.
///
/// RFC 3986.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Uri {
    /// Lowercase, may be empty.
    scheme: String,
    user_info: String,
    /// Lowercase, may be empty.
    host: String,
    /// Standard ports are removed when read, see [`Uri::port`].
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
}

/// Components used to create a [`Uri`], see [`Uri::from_parts`].
///
/// Empty strings mean the component is not present.
#[derive(Copy, Clone, Debug, Default)]
pub struct Parts<'a> {
    /// Scheme, e.g. `https`.
    pub scheme: &'a str,
    /// User name.
    pub user: &'a str,
    /// Password, only used if `user` is not empty.
    pub password: Option<&'a str>,
    /// Host, IP-literals must include the brackets.
    pub host: &'a str,
    /// Port.
    pub port: Option<u16>,
    /// Path.
    pub path: &'a str,
    /// Query, without the `?`.
    pub query: &'a str,
    /// Fragment, without the `#`.
    pub fragment: &'a str,
}

impl Uri {
    /// Parse a URI reference.
    ///
    /// Returns [`Error::MalformedUri`] if `uri` can't be split into its
    /// components and [`Error::InvalidUriComponent`] if one of the components
    /// is invalid.
    pub fn new(uri: &str) -> Result<Uri, Error> {
        let raw = parse::parse(uri)?;
        let (user_info, host, port) = match raw.authority {
            Some(authority) => (authority.user_info, authority.host, authority.port),
            None => ("", "", None),
        };
        let scheme = component::scheme(raw.scheme)?;
        let host = component::host(host)?;
        Ok(Uri {
            user_info: component::user_info(user_info)?,
            port: component::port(port)?,
            path: component::path(raw.path, !scheme.is_empty(), !host.is_empty())?,
            query: component::query(raw.query)?,
            fragment: component::fragment(raw.fragment)?,
            scheme,
            host,
        })
    }

    /// Create a `Uri` from its components.
    pub fn from_parts(parts: Parts<'_>) -> Result<Uri, Error> {
        let scheme = component::scheme(parts.scheme)?;
        let host = component::host(parts.host)?;
        Ok(Uri {
            user_info: component::compose_user_info(parts.user, parts.password)?,
            port: component::port(parts.port)?,
            path: component::path(parts.path, !scheme.is_empty(), !host.is_empty())?,
            query: component::query(parts.query)?,
            fragment: component::fragment(parts.fragment)?,
            scheme,
            host,
        })
    }

    /// Returns the scheme, lowercase, or an empty string.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the user information, or an empty string.
    pub fn user_info(&self) -> &str {
        &self.user_info
    }

    /// Returns the host, lowercase, or an empty string.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    ///
    /// Returns `None` if no port is set or if the port is the standard port of
    /// the scheme, e.g. 80 for http. This is determined when reading the port,
    /// so changing the scheme later changes whether the port is returned.
    pub fn port(&self) -> Option<u16> {
        match self.port {
            Some(port) if Some(port) == standard_port(&self.scheme) => None,
            port => port,
        }
    }

    /// Returns the authority, `[userinfo@]host[:port]`, or an empty string if
    /// no host is set.
    pub fn authority(&self) -> String {
        if self.host.is_empty() {
            return String::new();
        }

        let mut authority = String::with_capacity(self.user_info.len() + self.host.len() + 7);
        if !self.user_info.is_empty() {
            authority.push_str(&self.user_info);
            authority.push('@');
        }
        authority.push_str(&self.host);
        if let Some(port) = self.port() {
            authority.push(':');
            authority.push_str(itoa::Buffer::new().format(port));
        }
        authority
    }

    /// Returns the percent-encoded path.
    pub fn path(&self) -> Cow<'_, str> {
        percent::encode(self.path.as_bytes(), CharClass::Path)
    }

    /// Returns the percent-encoded query, without the `?`.
    pub fn query(&self) -> Cow<'_, str> {
        percent::encode(self.query.as_bytes(), CharClass::Query)
    }

    /// Returns the percent-encoded fragment, without the `#`.
    pub fn fragment(&self) -> Cow<'_, str> {
        percent::encode(self.fragment.as_bytes(), CharClass::Fragment)
    }

    /// Returns a copy with the scheme replaced.
    ///
    /// Removing the scheme fails if the first segment of the path contains a
    /// colon, see [`component::path`].
    pub fn with_scheme(&self, scheme: &str) -> Result<Uri, Error> {
        let scheme = component::scheme(scheme)?;
        if scheme.is_empty() {
            component::path_without_scheme(&self.path)?;
        }
        Ok(Uri {
            scheme,
            ..self.clone()
        })
    }

    /// Returns a copy with the user information replaced.
    ///
    /// The `password` is only used if both `user` and `password` are not
    /// empty. Passing an empty `user` removes the user information.
    pub fn with_user_info(&self, user: &str, password: Option<&str>) -> Result<Uri, Error> {
        let user_info = component::compose_user_info(user, password)?;
        Ok(Uri {
            user_info,
            ..self.clone()
        })
    }

    /// Returns a copy with the host replaced.
    pub fn with_host(&self, host: &str) -> Result<Uri, Error> {
        let host = component::host(host)?;
        Ok(Uri {
            host,
            ..self.clone()
        })
    }

    /// Returns a copy with the port replaced.
    pub fn with_port(&self, port: Option<u16>) -> Result<Uri, Error> {
        let port = component::port(port)?;
        Ok(Uri {
            port,
            ..self.clone()
        })
    }

    /// Returns a copy with the path replaced.
    ///
    /// The path is checked against the current scheme and authority, see
    /// [`component::path`].
    pub fn with_path(&self, path: &str) -> Result<Uri, Error> {
        let path = component::path(path, !self.scheme.is_empty(), !self.host.is_empty())?;
        Ok(Uri {
            path,
            ..self.clone()
        })
    }

    /// Returns a copy with the query replaced.
    pub fn with_query(&self, query: &str) -> Result<Uri, Error> {
        let query = component::query(query)?;
        Ok(Uri {
            query,
            ..self.clone()
        })
    }

    /// Returns a copy with the fragment replaced.
    pub fn with_fragment(&self, fragment: &str) -> Result<Uri, Error> {
        let fragment = component::fragment(fragment)?;
        Ok(Uri {
            fragment,
            ..self.clone()
        })
    }

    /// Returns `true` if the URI is absolute, i.e. has a scheme.
    ///
    /// RFC 3986 section 4.3.
    pub fn is_absolute(&self) -> bool {
        !self.scheme.is_empty()
    }

    /// Returns `true` if this is a network-path reference, e.g.
    /// `//example.com/path`.
    ///
    /// RFC 3986 section 4.2.
    pub fn is_network_path_reference(&self) -> bool {
        self.scheme.is_empty() && !self.host.is_empty()
    }

    /// Returns `true` if this is an absolute-path reference, e.g. `/path`.
    ///
    /// RFC 3986 section 4.2.
    pub fn is_absolute_path_reference(&self) -> bool {
        self.scheme.is_empty() && self.host.is_empty() && self.path.starts_with('/')
    }

    /// Returns `true` if this is a relative-path reference, e.g. `path`.
    ///
    /// RFC 3986 section 4.2.
    pub fn is_relative_path_reference(&self) -> bool {
        self.scheme.is_empty() && self.host.is_empty() && !self.path.starts_with('/')
    }

    /// Returns `true` if `self` and `other` are equivalent after
    /// normalization, see [`normalize::equivalent`].
    pub fn is_equivalent(&self, other: &Uri) -> bool {
        normalize::equivalent(self, other)
    }
}

/// Returns the standard port for `scheme`, if any.
const fn standard_port(scheme: &str) -> Option<u16> {
    match scheme.as_bytes() {
        b"http" => Some(80),
        b"https" => Some(443),
        _ => None,
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            f.write_str(&self.scheme)?;
            f.write_str(":")?;
        }

        let authority = self.authority();
        let path = self.path();
        if !authority.is_empty() {
            f.write_str("//")?;
            f.write_str(&authority)?;
            if !path.is_empty() && !path.starts_with('/') {
                f.write_str("/")?;
            }
            f.write_str(&path)?;
        } else if path.starts_with("//") {
            // Without an authority the path would be read as one.
            f.write_str("/")?;
            f.write_str(path.trim_start_matches('/'))?;
        } else {
            // `file` URIs always carry an (empty) authority, unless the path
            // is rootless, as `file://a` would make `a` the host.
            if self.scheme == "file" && (path.is_empty() || path.starts_with('/')) {
                f.write_str("//")?;
            }
            f.write_str(&path)?;
        }

        let query = self.query();
        if !query.is_empty() {
            f.write_str("?")?;
            f.write_str(&query)?;
        }
        let fragment = self.fragment();
        if !fragment.is_empty() {
            f.write_str("#")?;
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(uri: &str) -> Result<Uri, Error> {
        Uri::new(uri)
    }
}

impl TryFrom<&str> for Uri {
    type Error = Error;

    fn try_from(uri: &str) -> Result<Uri, Error> {
        Uri::new(uri)
    }
}

impl TryFrom<&String> for Uri {
    type Error = Error;

    fn try_from(uri: &String) -> Result<Uri, Error> {
        Uri::new(uri)
    }
}

impl TryFrom<String> for Uri {
    type Error = Error;

    fn try_from(uri: String) -> Result<Uri, Error> {
        Uri::new(&uri)
    }
}
