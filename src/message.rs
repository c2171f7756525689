//! Shared part of [`Request`] and [`Response`].
//!
//! [`Request`]: crate::Request
//! [`Response`]: crate::Response

use crate::header::{validate_values, FromHeaderValue, HeaderName, IntoHeaderValues};
use crate::{Error, Headers, Version};

/// Protocol version, headers and body of a message.
///
/// Embedded in both requests and responses.
#[derive(Clone, Debug, Default)]
pub struct Message<B> {
    pub(crate) version: Version,
    pub(crate) headers: Headers,
    pub(crate) body: B,
}

impl<B> Message<B> {
    /// Replace the body, keeping the version and headers.
    pub(crate) fn map_body<F, B2>(self, map: F) -> Message<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Message {
            version: self.version,
            headers: self.headers,
            body: map(self.body),
        }
    }
}

mod private {
    use super::Message;
    use crate::header::{HeaderName, Headers};
    use crate::Error;

    pub trait Sealed {
        type Body;

        fn message(&self) -> &Message<Self::Body>;

        fn message_mut(&mut self) -> &mut Message<Self::Body>;

        /// Set or append (if `append` is true) the already validated `values`
        /// for `name`.
        fn update_header(
            &mut self,
            name: HeaderName,
            values: Vec<String>,
            append: bool,
        ) -> Result<(), Error> {
            let headers: &mut Headers = &mut self.message_mut().headers;
            if append {
                headers.append(name, values)
            } else {
                headers.insert(name, values)
            }
        }
    }
}

pub(crate) use private::Sealed;

/// Capability shared by all HTTP messages, i.e. [`Request`] and [`Response`].
///
/// Messages are immutable, all `with_*` methods consume the message and return
/// an updated one. Header values are validated before the message is updated,
/// so a message never holds an invalid header.
///
/// This trait is sealed and can't be implemented outside of this crate.
///
/// [`Request`]: crate::Request
/// [`Response`]: crate::Response
pub trait HttpMessage: Sealed + Sized {
    /// Returns the HTTP version of the message.
    fn version(&self) -> Version {
        self.message().version
    }

    /// Returns the protocol version number, e.g. `1.1`.
    fn protocol_version(&self) -> &'static str {
        self.message().version.number()
    }

    /// Returns the message with the HTTP version replaced.
    fn with_version(mut self, version: Version) -> Self {
        self.message_mut().version = version;
        self
    }

    /// Returns the message with the protocol version replaced, `version` can
    /// be the number (`1.1`) or the full protocol (`HTTP/1.1`).
    fn with_protocol_version(self, version: &str) -> Result<Self, Error> {
        let version = version.parse()?;
        Ok(self.with_version(version))
    }

    /// Returns the headers.
    fn headers(&self) -> &Headers {
        &self.message().headers
    }

    /// Returns all values for the header with `name`, see [`Headers::get`].
    fn header<N>(&self, name: N) -> &[String]
    where
        N: AsRef<str>,
    {
        self.message().headers.get(name)
    }

    /// Returns all values for the header with `name` joined by a comma, see
    /// [`Headers::line`].
    fn header_line<N>(&self, name: N) -> String
    where
        N: AsRef<str>,
    {
        self.message().headers.line(name)
    }

    /// Returns `true` if the message has a header with `name`.
    fn has_header<N>(&self, name: N) -> bool
    where
        N: AsRef<str>,
    {
        self.message().headers.contains(name)
    }

    /// Get the header's value with `name` or return `default`.
    ///
    /// If no header with `name` is found or the [`FromHeaderValue`]
    /// implementation fails this will return `default`. For more control over
    /// the error handling see [`Headers::get_value`].
    fn header_or<'a, T>(&'a self, name: &str, default: T) -> T
    where
        T: FromHeaderValue<'a>,
    {
        match self.message().headers.get_value(name) {
            Ok(Some(value)) => value,
            _ => default,
        }
    }

    /// Get the header's value with `name` or returns the result of `default`.
    ///
    /// Same as [`HttpMessage::header_or`] but uses a function to create the
    /// default value.
    fn header_or_else<'a, F, T>(&'a self, name: &str, default: F) -> T
    where
        T: FromHeaderValue<'a>,
        F: FnOnce() -> T,
    {
        match self.message().headers.get_value(name) {
            Ok(Some(value)) => value,
            _ => default(),
        }
    }

    /// Returns the message with the header `name` set to `values`, replacing
    /// all existing values.
    fn with_header<N, V>(mut self, name: N, values: V) -> Result<Self, Error>
    where
        N: TryInto<HeaderName>,
        Error: From<N::Error>,
        V: IntoHeaderValues,
    {
        let name = name.try_into()?;
        let values = validate_values(&name, values.into_header_values())?;
        self.update_header(name, values, false)?;
        Ok(self)
    }

    /// Returns the message with `values` appended to the header `name`.
    fn with_added_header<N, V>(mut self, name: N, values: V) -> Result<Self, Error>
    where
        N: TryInto<HeaderName>,
        Error: From<N::Error>,
        V: IntoHeaderValues,
    {
        let name = name.try_into()?;
        let values = validate_values(&name, values.into_header_values())?;
        self.update_header(name, values, true)?;
        Ok(self)
    }

    /// Returns the message without the header `name`.
    fn without_header<N>(mut self, name: N) -> Self
    where
        N: AsRef<str>,
    {
        _ = self.message_mut().headers.remove(name);
        self
    }

    /// Returns the body.
    fn body(&self) -> &Self::Body {
        &self.message().body
    }

    /// Returns the body mutably, e.g. to read from it.
    fn body_mut(&mut self) -> &mut Self::Body {
        &mut self.message_mut().body
    }
}
