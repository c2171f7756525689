//! Immutable HTTP message and URI value types.
//!
//! This crate models the pieces of an HTTP exchange as values:
//!  * [`Uri`]: a RFC 3986 URI reference, validated per component,
//!  * [`Headers`]: a case-insensitive, multi-valued header collection,
//!  * [`Request`] and [`Response`]: HTTP messages sharing the [`HttpMessage`]
//!    capability,
//!  * [`Pipeline`]: an ordered chain of [`Middleware`] ending in a
//!    [`Handler`].
//!
//! All `with_*` methods produce a new value, the original is never modified.
//! Validation happens when a value is created, so it's impossible to hold an
//! invalid URI or a message with an invalid header.
//!
//! ```
//! use heph_message::{HttpMessage, Request};
//!
//! # fn main() -> Result<(), heph_message::Error> {
//! let request = Request::get("http://example.com:8080/search?q=heph")?;
//! assert_eq!(request.header_line("host"), "example.com:8080");
//! assert_eq!(request.request_target(), "/search?q=heph");
//! # Ok(())
//! # }
//! ```
//!
//! No network I/O is done by this crate, parsing raw HTTP messages from bytes
//! is left to the server or client using it.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
// Disallow warnings in examples, we want to set a good example after all.
#![doc(test(attr(deny(warnings))))]

pub mod body;
mod error;
pub mod handler;
pub mod header;
mod message;
pub mod method;
mod request;
mod response;
pub mod server_params;
mod status_code;
pub mod uri;
pub mod version;

#[doc(no_inline)]
pub use body::{MemoryStream, Stream};
pub use error::{Error, UriComponent};
#[doc(no_inline)]
pub use handler::{Handler, Middleware, Pipeline};
#[doc(no_inline)]
pub use header::{HeaderName, Headers};
pub use message::HttpMessage;
#[doc(no_inline)]
pub use method::Method;
pub use request::Request;
pub use response::Response;
#[doc(no_inline)]
pub use server_params::ServerParams;
pub use status_code::{StatusClass, StatusCode};
#[doc(no_inline)]
pub use uri::Uri;
#[doc(no_inline)]
pub use version::Version;

/// Returns `true` if `value` is a `token`.
///
/// RFC 9110 section 5.6.2:
/// > token          = 1*tchar
/// > tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
/// >                / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
/// >                / DIGIT / ALPHA
const fn is_token(value: &str) -> bool {
    let value = value.as_bytes();
    if value.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < value.len() {
        if !is_tchar(value[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `b` is a `tchar`, see [`is_token`].
const fn is_tchar(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
        | b'^' | b'_' | b'`' | b'|' | b'~'
        | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}
