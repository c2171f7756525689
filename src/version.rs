//! Module with HTTP version related types.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// HTTP version.
///
/// RFC 9110 section 2.5.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Version {
    /// HTTP/1.0.
    ///
    /// RFC 1945.
    Http10,
    /// HTTP/1.1.
    ///
    /// RFC 9112.
    #[default]
    Http11,
    /// HTTP/2.
    ///
    /// RFC 9113.
    Http2,
    /// HTTP/3.
    ///
    /// RFC 9114.
    Http3,
}

impl Version {
    /// Returns the major version.
    pub const fn major(self) -> u8 {
        match self {
            Version::Http10 | Version::Http11 => 1,
            Version::Http2 => 2,
            Version::Http3 => 3,
        }
    }

    /// Returns the minor version.
    pub const fn minor(self) -> u8 {
        match self {
            Version::Http11 => 1,
            Version::Http10 | Version::Http2 | Version::Http3 => 0,
        }
    }

    /// Returns the highest minor version with the same major version as `self`.
    ///
    /// According to RFC 9110 section 2.5:
    /// > A server SHOULD send a response version equal to the highest version
    /// > to which the server is conformant that has a major version less than or
    /// > equal to the one received in the request.
    ///
    /// This function can be used to return the highest version given a major
    /// version.
    pub const fn highest_minor(self) -> Version {
        match self {
            Version::Http10 | Version::Http11 => Version::Http11,
            version => version,
        }
    }

    /// Returns the protocol version number, e.g. `1.1`.
    pub const fn number(self) -> &'static str {
        match self {
            Version::Http10 => "1.0",
            Version::Http11 => "1.1",
            Version::Http2 => "2",
            Version::Http3 => "3",
        }
    }

    /// Returns the version as string, e.g. `HTTP/1.1`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http2 => "HTTP/2",
            Version::Http3 => "HTTP/3",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the version from either the number, e.g. `1.1`, or the protocol,
/// e.g. `HTTP/1.1`.
impl FromStr for Version {
    type Err = Error;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        match version.strip_prefix("HTTP/").unwrap_or(version) {
            "1.0" => Ok(Version::Http10),
            "1.1" => Ok(Version::Http11),
            "2" | "2.0" => Ok(Version::Http2),
            "3" | "3.0" => Ok(Version::Http3),
            _ => Err(Error::InvalidVersion(version.to_owned())),
        }
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(version: &str) -> Result<Self, Self::Error> {
        version.parse()
    }
}
