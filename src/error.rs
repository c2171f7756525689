use std::convert::Infallible;
use std::{error, fmt};

use crate::body::StreamError;

/// Error returned by all fallible operations in this crate.
///
/// Every rejection carries the offending value, nothing is silently replaced
/// with a default.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The string can't be decomposed into URI components at all.
    MalformedUri(String),
    /// A URI component failed its grammar.
    InvalidUriComponent {
        /// Component that failed.
        component: UriComponent,
        /// The raw, rejected value.
        value: String,
    },
    /// Header name is not a valid `token`.
    InvalidHeaderName(String),
    /// Header value doesn't match the field-value grammar.
    InvalidHeaderValue {
        /// Name of the header.
        name: String,
        /// The raw, rejected value.
        value: String,
    },
    /// Method is not a standard method nor a valid `token`.
    InvalidMethod(String),
    /// Status code outside of [100, 599] or 306 (unused).
    InvalidStatusCode(u16),
    /// Unknown HTTP protocol version.
    InvalidVersion(String),
    /// Error returned by a body [`Stream`].
    ///
    /// [`Stream`]: crate::body::Stream
    Stream(StreamError),
    /// The [`Pipeline`] is wired incorrectly, e.g. it refers to middleware
    /// that doesn't exist.
    ///
    /// [`Pipeline`]: crate::Pipeline
    PipelineConfiguration(String),
}

impl Error {
    /// Create a new [`Error::InvalidUriComponent`].
    pub(crate) fn component<V>(component: UriComponent, value: V) -> Error
    where
        V: Into<String>,
    {
        Error::InvalidUriComponent {
            component,
            value: value.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedUri(uri) => write!(f, "malformed URI: `{uri}`"),
            Error::InvalidUriComponent { component, value } => {
                write!(f, "invalid URI {component}: `{value}`")
            }
            Error::InvalidHeaderName(name) => write!(f, "invalid header name: `{name}`"),
            Error::InvalidHeaderValue { name, value } => {
                write!(f, "invalid value for header `{name}`: {value:?}")
            }
            Error::InvalidMethod(method) => write!(f, "invalid method: `{method}`"),
            Error::InvalidStatusCode(code) => write!(f, "invalid status code: {code}"),
            Error::InvalidVersion(version) => write!(f, "invalid HTTP version: `{version}`"),
            Error::Stream(err) => write!(f, "body stream error: {err}"),
            Error::PipelineConfiguration(msg) => {
                write!(f, "invalid pipeline configuration: {msg}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Stream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StreamError> for Error {
    fn from(err: StreamError) -> Error {
        Error::Stream(err)
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Error {
        match err {}
    }
}

/// Component of a [`Uri`] that failed validation, see
/// [`Error::InvalidUriComponent`].
///
/// [`Uri`]: crate::Uri
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UriComponent {
    /// Scheme, e.g. `https`.
    Scheme,
    /// User information, e.g. `user:password`.
    UserInfo,
    /// Host, e.g. `example.com` or `[::1]`.
    Host,
    /// Port, e.g. `8080`.
    Port,
    /// Path, e.g. `/index.html`.
    Path,
    /// Query, the part after `?`.
    Query,
    /// Fragment, the part after `#`.
    Fragment,
}

impl UriComponent {
    /// Returns the component's name.
    pub const fn as_str(self) -> &'static str {
        match self {
            UriComponent::Scheme => "scheme",
            UriComponent::UserInfo => "user information",
            UriComponent::Host => "host",
            UriComponent::Port => "port",
            UriComponent::Path => "path",
            UriComponent::Query => "query",
            UriComponent::Fragment => "fragment",
        }
    }
}

impl fmt::Display for UriComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
