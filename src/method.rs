//! Module with HTTP method related types.

use std::fmt;
use std::str::FromStr;

use crate::{is_token, Error};

/// HTTP method.
///
/// RFC 9110 section 9.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Method {
    /// GET method.
    ///
    /// RFC 9110 section 9.3.1.
    Get,
    /// HEAD method.
    ///
    /// RFC 9110 section 9.3.2.
    Head,
    /// POST method.
    ///
    /// RFC 9110 section 9.3.3.
    Post,
    /// PUT method.
    ///
    /// RFC 9110 section 9.3.4.
    Put,
    /// DELETE method.
    ///
    /// RFC 9110 section 9.3.5.
    Delete,
    /// CONNECT method.
    ///
    /// RFC 9110 section 9.3.6.
    Connect,
    /// OPTIONS method.
    ///
    /// RFC 9110 section 9.3.7.
    Options,
    /// TRACE method.
    ///
    /// RFC 9110 section 9.3.8.
    Trace,
    /// PATCH method.
    ///
    /// RFC 5789.
    Patch,
    /// Any other method, always a valid `token`.
    ///
    /// RFC 9110 section 9.1.
    Extension(String),
}

impl Method {
    /// Returns `true` if the method is safe.
    ///
    /// RFC 9110 section 9.2.1.
    pub const fn is_safe(&self) -> bool {
        use Method::*;
        matches!(self, Get | Head | Options | Trace)
    }

    /// Returns `true` if the method is idempotent.
    ///
    /// RFC 9110 section 9.2.2.
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Method::Put | Method::Delete) || self.is_safe()
    }

    /// Returns `false` if a response to this method MUST NOT include a body.
    ///
    /// This is only the case for the HEAD method.
    ///
    /// RFC 9110 section 9.3.2.
    pub const fn expects_body(&self) -> bool {
        // RFC 9110 section 9.3.2:
        // > The HEAD method is identical to GET except that the server MUST NOT
        // > send content in the response.
        !matches!(self, Method::Head)
    }

    /// Returns the method as string.
    pub fn as_str(&self) -> &str {
        use Method::*;
        match self {
            Options => "OPTIONS",
            Get => "GET",
            Post => "POST",
            Put => "PUT",
            Delete => "DELETE",
            Head => "HEAD",
            Trace => "TRACE",
            Connect => "CONNECT",
            Patch => "PATCH",
            Extension(method) => method,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a method.
///
/// RFC 9110 section 9.1:
/// > The method token is case-sensitive because it might be used as a gateway
/// > to object-based systems with case-sensitive method names.
///
/// So `get` is not [`Method::Get`], but an extension method.
impl FromStr for Method {
    type Err = Error;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        Ok(match method {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "CONNECT" => Method::Connect,
            "OPTIONS" => Method::Options,
            "TRACE" => Method::Trace,
            "PATCH" => Method::Patch,
            method if is_token(method) => Method::Extension(method.to_owned()),
            method => return Err(Error::InvalidMethod(method.to_owned())),
        })
    }
}

impl TryFrom<&str> for Method {
    type Error = Error;

    fn try_from(method: &str) -> Result<Self, Self::Error> {
        method.parse()
    }
}

impl TryFrom<String> for Method {
    type Error = Error;

    fn try_from(method: String) -> Result<Self, Self::Error> {
        method.parse()
    }
}

impl PartialEq<str> for Method {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<'a> PartialEq<&'a str> for Method {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str() == *other
    }
}
