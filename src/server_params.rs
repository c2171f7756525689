//! Module with [`ServerParams`], the parameters a server passes along with a
//! request.
//!
//! The parameters use the CGI style names, e.g. `SERVER_NAME` and
//! `REQUEST_URI`. They can be used to create a [`Uri`] or [`Request`] for the
//! request currently being handled.
//!
//! ```
//! use heph_message::{HttpMessage, Request, ServerParams};
//!
//! # fn main() -> Result<(), heph_message::Error> {
//! let params = ServerParams::from_vars([
//!     ("HTTPS", "on"),
//!     ("SERVER_NAME", "example.com"),
//!     ("SERVER_PORT", "443"),
//!     ("REQUEST_METHOD", "POST"),
//!     ("REQUEST_URI", "/upload?overwrite=true"),
//! ])?;
//!
//! let request = Request::from_server_params(&params)?;
//! assert_eq!(request.method().as_str(), "POST");
//! assert_eq!(request.uri().to_string(), "https://example.com/upload?overwrite=true");
//! assert_eq!(request.header_line("Host"), "example.com");
//! # Ok(())
//! # }
//! ```

use log::debug;

use crate::uri::{component, Parts};
use crate::{Error, Request, Uri, UriComponent};

/// Parameters of the request currently being handled, as provided by the
/// server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerParams {
    /// `HTTPS`, `true` if set to a value other than `off` or empty.
    pub https: bool,
    /// `AUTH_USER`.
    pub auth_user: String,
    /// `AUTH_PW`.
    pub auth_password: String,
    /// `SERVER_NAME`.
    pub server_name: String,
    /// `SERVER_PORT`.
    pub server_port: u16,
    /// `REQUEST_URI`, path with an optional query.
    pub request_uri: String,
    /// `QUERY_STRING`.
    pub query_string: String,
    /// `REQUEST_METHOD`.
    pub request_method: String,
}

impl ServerParams {
    /// Create the parameters from `(name, value)` pairs, e.g. from
    /// [`std::env::vars`].
    ///
    /// Unknown names are ignored and missing parameters use the defaults of
    /// [`ServerParams::default`]. Returns an error if `SERVER_PORT` is not a
    /// valid port number.
    pub fn from_vars<I, N, V>(vars: I) -> Result<ServerParams, Error>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut params = ServerParams::default();
        let mut seen_name = false;
        for (name, value) in vars {
            match name.as_ref() {
                "HTTPS" => {
                    let value: String = value.into();
                    params.https = !(value.is_empty() || value.eq_ignore_ascii_case("off"));
                }
                "AUTH_USER" => params.auth_user = value.into(),
                "AUTH_PW" => params.auth_password = value.into(),
                "SERVER_NAME" => {
                    params.server_name = value.into();
                    seen_name = true;
                }
                "SERVER_PORT" => params.server_port = parse_server_port(value.into())?,
                "REQUEST_URI" => params.request_uri = value.into(),
                "QUERY_STRING" => params.query_string = value.into(),
                "REQUEST_METHOD" => params.request_method = value.into(),
                _ => {}
            }
        }
        if !seen_name {
            debug!(server_name = params.server_name.as_str(); "using default server name");
        }
        Ok(params)
    }

    /// Returns the scheme, `https` or `http`.
    pub const fn scheme(&self) -> &'static str {
        if self.https {
            "https"
        } else {
            "http"
        }
    }
}

fn parse_server_port(value: String) -> Result<u16, Error> {
    match component::parse_port(&value) {
        Ok(Some(port)) if port != 0 => Ok(port),
        _ => Err(Error::component(UriComponent::Port, value)),
    }
}

impl Default for ServerParams {
    /// Parameters for a plain `GET /` request to `localhost:80`.
    fn default() -> ServerParams {
        ServerParams {
            https: false,
            auth_user: String::new(),
            auth_password: String::new(),
            server_name: "localhost".to_owned(),
            server_port: 80,
            request_uri: "/".to_owned(),
            query_string: String::new(),
            request_method: "GET".to_owned(),
        }
    }
}

impl Uri {
    /// Create the URI of the request described by `params`.
    ///
    /// The path is the part of `REQUEST_URI` before the `?`. The query is
    /// `QUERY_STRING`, or if that is empty the part of `REQUEST_URI` after the
    /// `?`.
    pub fn from_server_params(params: &ServerParams) -> Result<Uri, Error> {
        let (path, query) = match params.request_uri.split_once('?') {
            Some((path, query)) => (path, query),
            None => (params.request_uri.as_str(), ""),
        };
        let query = if params.query_string.is_empty() {
            query
        } else {
            &params.query_string
        };
        let password = if params.auth_password.is_empty() {
            None
        } else {
            Some(params.auth_password.as_str())
        };
        Uri::from_parts(Parts {
            scheme: params.scheme(),
            user: &params.auth_user,
            password,
            host: &params.server_name,
            port: Some(params.server_port),
            path,
            query,
            fragment: "",
        })
    }
}

impl Request {
    /// Create the request described by `params`, see
    /// [`Uri::from_server_params`].
    ///
    /// The `Host` header is derived from the URI.
    pub fn from_server_params(params: &ServerParams) -> Result<Request, Error> {
        let uri = Uri::from_server_params(params)?;
        Request::new(params.request_method.as_str(), uri)
    }
}
