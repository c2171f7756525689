//! Module with HTTP header related types.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;
use std::time::SystemTime;

use httpdate::parse_http_date;

use crate::{is_token, Error};

/// List of headers.
///
/// Header names are compared case-insensitively, but the case of the name used
/// when the header was first added is kept. Iterating over the headers returns
/// them in the order in which their names were first added.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Entry>,
}

#[derive(Clone, PartialEq, Eq)]
struct Entry {
    name: HeaderName,
    /// Never empty.
    values: Vec<String>,
}

impl Headers {
    /// Empty list of headers.
    pub const EMPTY: Headers = Headers {
        entries: Vec::new(),
    };

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the headers.
    ///
    /// Removes all headers from the list.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Set the header with `name` to `values`, replacing all existing values.
    ///
    /// The position of an existing header is kept, but its name is replaced
    /// with `name`.
    pub fn insert<N, V>(&mut self, name: N, values: V) -> Result<(), Error>
    where
        N: TryInto<HeaderName>,
        Error: From<N::Error>,
        V: IntoHeaderValues,
    {
        let name = name.try_into()?;
        let values = validate_values(&name, values.into_header_values())?;
        match self.position(name.as_ref()) {
            Some(idx) => self.entries[idx] = Entry { name, values },
            None => self.entries.push(Entry { name, values }),
        }
        Ok(())
    }

    /// Append `values` to the header with `name`.
    ///
    /// If the header already exists the case of the existing name is kept.
    pub fn append<N, V>(&mut self, name: N, values: V) -> Result<(), Error>
    where
        N: TryInto<HeaderName>,
        Error: From<N::Error>,
        V: IntoHeaderValues,
    {
        let name = name.try_into()?;
        let mut values = validate_values(&name, values.into_header_values())?;
        match self.position(name.as_ref()) {
            Some(idx) => self.entries[idx].values.append(&mut values),
            None => self.entries.push(Entry { name, values }),
        }
        Ok(())
    }

    /// Set the header with `name` to `values` and make it the first header.
    ///
    /// Used for the `Host` header, which should be the first header of a
    /// request.
    pub(crate) fn insert_first(&mut self, name: HeaderName, values: Vec<String>) {
        if let Some(idx) = self.position(name.as_ref()) {
            _ = self.entries.remove(idx);
        }
        self.entries.insert(0, Entry { name, values });
    }

    /// Returns the values of the header with `name`.
    ///
    /// Returns an empty slice if there is no header with `name`.
    pub fn get<N>(&self, name: N) -> &[String]
    where
        N: AsRef<str>,
    {
        match self.position(name.as_ref()) {
            Some(idx) => &self.entries[idx].values,
            None => &[],
        }
    }

    /// Get the header's first value with `name` and parse it using `T`'s
    /// [`FromHeaderValue`] implementation.
    ///
    /// This returns `Ok(None)` if there is no header with `name` and `Err(..)`
    /// in case [`FromHeaderValue`] for `T` returns an error.
    pub fn get_value<'a, T>(&'a self, name: &str) -> Result<Option<T>, T::Err>
    where
        T: FromHeaderValue<'a>,
    {
        match self.get(name).first() {
            Some(value) => T::from_value(value).map(Some),
            None => Ok(None),
        }
    }

    /// Returns all values of the header with `name` joined by a comma.
    ///
    /// Returns an empty string if there is no header with `name`.
    pub fn line<N>(&self, name: N) -> String
    where
        N: AsRef<str>,
    {
        self.get(name).join(", ")
    }

    /// Returns `true` if a header with `name` exists.
    pub fn contains<N>(&self, name: N) -> bool
    where
        N: AsRef<str>,
    {
        self.position(name.as_ref()).is_some()
    }

    /// Remove the header with `name`, returning its values.
    pub fn remove<N>(&mut self, name: N) -> Option<Vec<String>>
    where
        N: AsRef<str>,
    {
        self.position(name.as_ref())
            .map(|idx| self.entries.remove(idx).values)
    }

    /// Returns an iterator over all headers.
    ///
    /// The headers are returned in the order in which their names were first
    /// added, using the case of the name as it was added.
    pub fn iter<'a>(&'a self) -> Iter<'a> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    /// Returns an iterator that iterates over all header names.
    pub fn names<'a>(&'a self) -> Names<'a> {
        Names {
            entries: self.entries.iter(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name.as_ref().eq_ignore_ascii_case(name))
    }
}

/// Returns `values` if all of them are valid field values.
pub(crate) fn validate_values(name: &HeaderName, values: Vec<String>) -> Result<Vec<String>, Error> {
    if values.is_empty() {
        return Err(Error::InvalidHeaderValue {
            name: name.to_string(),
            value: String::new(),
        });
    }
    match values.iter().find(|value| !is_field_value(value)) {
        Some(value) => Err(Error::InvalidHeaderValue {
            name: name.to_string(),
            value: value.clone(),
        }),
        None => Ok(values),
    }
}

/// Returns `true` if `value` is a valid field value.
///
/// RFC 9110 section 5.5:
/// > field-value    = *field-content
/// > field-content  = field-vchar
/// >                  [ 1*( SP / HTAB / field-vchar ) field-vchar ]
/// > field-vchar    = VCHAR / obs-text
/// > obs-text       = %x80-FF
///
/// Plus the obsolete line folding of RFC 7230 section 3.2.4:
/// > obs-fold       = CRLF 1*( SP / HTAB )
pub fn is_field_value(value: &str) -> bool {
    let value = value.as_bytes();
    let mut i = 0;
    while i < value.len() {
        match value[i] {
            b' ' | b'\t' | 0x21..=0x7E | 0x80..=0xFF => i += 1,
            b'\r' if matches!(value.get(i + 1..i + 3), Some([b'\n', b' ' | b'\t'])) => i += 3,
            _ => return false,
        }
    }
    true
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a HeaderName, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|entry| (&entry.name, &entry.values)))
            .finish()
    }
}

/// Iterator for [`Headers`], see [`Headers::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    entries: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|entry| (&entry.name, entry.values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

/// Iterator for the names of [`Headers`], see [`Headers::names`].
#[derive(Debug)]
pub struct Names<'a> {
    entries: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a HeaderName;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| &entry.name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a> ExactSizeIterator for Names<'a> {}

impl<'a> FusedIterator for Names<'a> {}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish()
    }
}

/// Trait to convert one or more values into header values, see
/// [`Headers::insert`] and [`Headers::append`].
pub trait IntoHeaderValues {
    /// Returns the values.
    fn into_header_values(self) -> Vec<String>;
}

impl IntoHeaderValues for &str {
    fn into_header_values(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoHeaderValues for String {
    fn into_header_values(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoHeaderValues for &String {
    fn into_header_values(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoHeaderValues for Vec<String> {
    fn into_header_values(self) -> Vec<String> {
        self
    }
}

impl IntoHeaderValues for Vec<&str> {
    fn into_header_values(self) -> Vec<String> {
        self.into_iter().map(str::to_owned).collect()
    }
}

impl IntoHeaderValues for &[String] {
    fn into_header_values(self) -> Vec<String> {
        self.to_vec()
    }
}

impl IntoHeaderValues for &[&str] {
    fn into_header_values(self) -> Vec<String> {
        self.iter().map(|value| (*value).to_owned()).collect()
    }
}

impl<const N: usize> IntoHeaderValues for [&str; N] {
    fn into_header_values(self) -> Vec<String> {
        self.iter().map(|value| (*value).to_owned()).collect()
    }
}

/// HTTP header name.
///
/// Header names are compared case-insensitively, but keep the case they were
/// created with.
///
/// RFC 9110 section 5.1.
#[derive(Clone)]
pub struct HeaderName {
    inner: Cow<'static, str>,
}

/// Macro to create [`HeaderName`] constants.
macro_rules! known_headers {
    ($(
        $length: tt: [
            $( $(#[$meta: meta])* ( $const_name: ident, $http_name: expr ) $(,)? ),+
        ],
    )+) => {
        $($(
            $( #[$meta] )*
            pub const $const_name: HeaderName = HeaderName::from_static($http_name);
        )+)+

        /// Create a new HTTP `HeaderName`.
        ///
        /// Returns an error if `name` is not a valid `token`.
        ///
        /// # Notes
        ///
        /// If `name` is static prefer to use [`HeaderName::from_static`].
        pub fn new(name: &str) -> Result<HeaderName, Error> {
            // This first matches on the length of the `name`, then compares
            // the name with all known headers with the same length, returning
            // a static version if it matches exactly (including case).
            match name.len() {
                $(
                $length => {
                    $(
                    if $http_name == name {
                        return Ok(HeaderName::$const_name);
                    }
                    )+
                }
                )+
                _ => {}
            }
            if !is_token(name) {
                return Err(Error::InvalidHeaderName(name.to_owned()));
            }
            // If it's not a known header return a custom (heap-allocated)
            // header name.
            Ok(HeaderName {
                inner: Cow::Owned(name.to_owned()),
            })
        }
    }
}

impl HeaderName {
    // NOTE: we adding here also add to the
    // `functional::header::new_known_headers` test.
    known_headers!(
        3: [
            #[doc = "Age.\n\nRFC 9111 section 5.1."]
            (AGE, "Age"),
            #[doc = "Via.\n\nRFC 9110 section 7.6.3."]
            (VIA, "Via"),
        ],
        4: [
            #[doc = "Date.\n\nRFC 9110 section 6.6.1."]
            (DATE, "Date"),
            #[doc = "ETag.\n\nRFC 9110 section 8.8.3."]
            (ETAG, "ETag"),
            #[doc = "Host.\n\nRFC 9110 section 7.2."]
            (HOST, "Host"),
            #[doc = "Vary.\n\nRFC 9110 section 12.5.5."]
            (VARY, "Vary"),
        ],
        5: [
            #[doc = "Allow.\n\nRFC 9110 section 10.2.1."]
            (ALLOW, "Allow"),
            #[doc = "Range.\n\nRFC 9110 section 14.2."]
            (RANGE, "Range"),
        ],
        6: [
            #[doc = "Accept.\n\nRFC 9110 section 12.5.1."]
            (ACCEPT, "Accept"),
            #[doc = "Cookie.\n\nRFC 6265."]
            (COOKIE, "Cookie"),
            #[doc = "Server.\n\nRFC 9110 section 10.2.4."]
            (SERVER, "Server"),
        ],
        7: [
            #[doc = "Expires.\n\nRFC 9111 section 5.3."]
            (EXPIRES, "Expires"),
            #[doc = "Referer.\n\nRFC 9110 section 10.1.3."]
            (REFERER, "Referer"),
        ],
        8: [
            #[doc = "Location.\n\nRFC 9110 section 10.2.2."]
            (LOCATION, "Location"),
        ],
        10: [
            #[doc = "Connection.\n\nRFC 9110 section 7.6.1."]
            (CONNECTION, "Connection"),
            #[doc = "Set-Cookie.\n\nRFC 6265."]
            (SET_COOKIE, "Set-Cookie"),
            #[doc = "User-Agent.\n\nRFC 9110 section 10.1.5."]
            (USER_AGENT, "User-Agent"),
        ],
        12: [
            #[doc = "Content-Type.\n\nRFC 9110 section 8.3."]
            (CONTENT_TYPE, "Content-Type"),
            #[doc = "X-Request-ID."]
            (X_REQUEST_ID, "X-Request-ID"),
        ],
        13: [
            #[doc = "Authorization.\n\nRFC 9110 section 11.6.2."]
            (AUTHORIZATION, "Authorization"),
            #[doc = "Cache-Control.\n\nRFC 9111 section 5.2."]
            (CACHE_CONTROL, "Cache-Control"),
            #[doc = "Last-Modified.\n\nRFC 9110 section 8.8.2."]
            (LAST_MODIFIED, "Last-Modified"),
        ],
        14: [
            #[doc = "Content-Length.\n\nRFC 9110 section 8.6."]
            (CONTENT_LENGTH, "Content-Length"),
        ],
        15: [
            #[doc = "Accept-Encoding.\n\nRFC 9110 section 12.5.3."]
            (ACCEPT_ENCODING, "Accept-Encoding"),
            #[doc = "Accept-Language.\n\nRFC 9110 section 12.5.4."]
            (ACCEPT_LANGUAGE, "Accept-Language"),
        ],
        16: [
            #[doc = "Content-Encoding.\n\nRFC 9110 section 8.4."]
            (CONTENT_ENCODING, "Content-Encoding"),
        ],
        17: [
            #[doc = "Transfer-Encoding.\n\nRFC 9112 section 6.1."]
            (TRANSFER_ENCODING, "Transfer-Encoding"),
        ],
    );

    /// Create a new HTTP `HeaderName` from a static string.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid `token`.
    pub const fn from_static(name: &'static str) -> HeaderName {
        assert!(is_token(name), "header name not a token");
        HeaderName {
            inner: Cow::Borrowed(name),
        }
    }

    /// Returns `true` if `self` is heap allocated.
    ///
    /// # Notes
    ///
    /// This is only used to test [`HeaderName::new`], not part of the
    /// stable API.
    #[doc(hidden)]
    pub const fn is_heap_allocated(&self) -> bool {
        matches!(self.inner, Cow::Owned(_))
    }
}

impl TryFrom<&str> for HeaderName {
    type Error = Error;

    fn try_from(name: &str) -> Result<HeaderName, Error> {
        HeaderName::new(name)
    }
}

impl TryFrom<String> for HeaderName {
    type Error = Error;

    fn try_from(name: String) -> Result<HeaderName, Error> {
        if is_token(&name) {
            Ok(HeaderName {
                inner: Cow::Owned(name),
            })
        } else {
            Err(Error::InvalidHeaderName(name))
        }
    }
}

impl TryFrom<&HeaderName> for HeaderName {
    type Error = Error;

    fn try_from(name: &HeaderName) -> Result<HeaderName, Error> {
        Ok(name.clone())
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        self.inner.as_ref()
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &HeaderName) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }
}

impl<'a> PartialEq<&'a str> for HeaderName {
    fn eq(&self, other: &&'a str) -> bool {
        self.eq(*other)
    }
}

impl fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Analogous trait to [`FromStr`].
///
/// The main use case for this trait is [`Headers::get_value`].
///
/// [`FromStr`]: std::str::FromStr
pub trait FromHeaderValue<'a>: Sized {
    /// Error returned by parsing the value.
    type Err;

    /// Parse the `value`.
    fn from_value(value: &'a str) -> Result<Self, Self::Err>;
}

/// Error returned by the [`FromHeaderValue`] implementation for numbers, e.g.
/// `usize`.
#[derive(Debug)]
pub struct ParseIntError;

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid integer")
    }
}

macro_rules! int_impl {
    ($( $ty: ty ),+) => {
        $(
        impl FromHeaderValue<'_> for $ty {
            type Err = ParseIntError;

            fn from_value(src: &str) -> Result<Self, Self::Err> {
                if src.is_empty() {
                    return Err(ParseIntError);
                }

                let mut value: $ty = 0;
                for b in src.bytes() {
                    if b.is_ascii_digit() {
                        match value.checked_mul(10) {
                            Some(v) => value = v,
                            None => return Err(ParseIntError),
                        }
                        match value.checked_add(<$ty>::from(b - b'0')) {
                            Some(v) => value = v,
                            None => return Err(ParseIntError),
                        }
                    } else {
                        return Err(ParseIntError);
                    }
                }
                Ok(value)
            }
        }
        )+
    };
}

int_impl!(u8, u16, u32, u64, usize);

impl<'a> FromHeaderValue<'a> for &'a str {
    type Err = std::convert::Infallible;

    fn from_value(value: &'a str) -> Result<Self, Self::Err> {
        Ok(value)
    }
}

/// Error returned by the [`FromHeaderValue`] implementation for [`SystemTime`].
#[derive(Debug)]
pub struct ParseTimeError;

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid time")
    }
}

/// Parses the value following RFC 9110 section 5.6.7.
impl FromHeaderValue<'_> for SystemTime {
    type Err = ParseTimeError;

    fn from_value(value: &str) -> Result<Self, Self::Err> {
        parse_http_date(value).map_err(|_| ParseTimeError)
    }
}
