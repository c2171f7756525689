use crate::header::HeaderName;
use crate::message::{Message, Sealed};
use crate::{Error, HttpMessage, MemoryStream, StatusCode};

/// HTTP response.
#[derive(Clone, Debug)]
pub struct Response<B = MemoryStream> {
    message: Message<B>,
    status: StatusCode,
    /// Empty means the standard phrase of `status`, if any.
    reason: String,
}

/// Macro to create the [`Response`] constructors for common status codes.
macro_rules! status_constructors {
    ( $( $(#[$meta: meta])* $fn_name: ident -> $status: ident, )+ ) => {
        $(
        $( #[$meta] )*
        pub fn $fn_name() -> Response {
            Response::from_status(StatusCode::$status)
        }
        )+
    };
}

impl Response {
    /// Create a new response with an empty body.
    ///
    /// The `code` must be in the range [100, 599], excluding 306. If `reason`
    /// is empty [`Response::reason_phrase`] returns the standard phrase of
    /// `code`.
    pub fn new<R>(code: u16, reason: R) -> Result<Response, Error>
    where
        R: Into<String>,
    {
        let status = StatusCode::new(code)?;
        Ok(Response::from_status(status).with_reason(reason.into()))
    }

    /// Create a new response with `status`, the standard reason phrase and an
    /// empty body.
    pub fn from_status(status: StatusCode) -> Response {
        Response {
            message: Message::default(),
            status,
            reason: String::new(),
        }
    }

    status_constructors!(
        /// Create a 200 OK response.
        ok -> OK,
        /// Create a 201 Created response.
        created -> CREATED,
        /// Create a 204 No Content response.
        no_content -> NO_CONTENT,
        /// Create a 304 Not Modified response.
        not_modified -> NOT_MODIFIED,
        /// Create a 400 Bad Request response.
        bad_request -> BAD_REQUEST,
        /// Create a 401 Unauthorized response.
        unauthorized -> UNAUTHORIZED,
        /// Create a 403 Forbidden response.
        forbidden -> FORBIDDEN,
        /// Create a 404 Not Found response.
        not_found -> NOT_FOUND,
        /// Create a 405 Method Not Allowed response.
        method_not_allowed -> METHOD_NOT_ALLOWED,
        /// Create a 410 Gone response.
        gone -> GONE,
        /// Create a 411 Length Required response.
        length_required -> LENGTH_REQUIRED,
        /// Create a 500 Internal Server Error response.
        server_error -> INTERNAL_SERVER_ERROR,
        /// Create a 501 Not Implemented response.
        not_implemented -> NOT_IMPLEMENTED,
        /// Create a 502 Bad Gateway response.
        bad_gateway -> BAD_GATEWAY,
        /// Create a 503 Service Unavailable response.
        unavailable -> SERVICE_UNAVAILABLE,
        /// Create a 504 Gateway Timeout response.
        gateway_timeout -> GATEWAY_TIMEOUT,
    );

    /// Create a 301 Moved Permanently response with `location` as
    /// `Location` header.
    pub fn moved(location: &str) -> Result<Response, Error> {
        Response::from_status(StatusCode::MOVED_PERMANENTLY)
            .with_header(HeaderName::LOCATION, location)
    }

    /// Create a 302 Found response with `location` as `Location` header.
    pub fn found(location: &str) -> Result<Response, Error> {
        Response::from_status(StatusCode::FOUND)
            .with_header(HeaderName::LOCATION, location)
    }

    /// Create a 303 See Other response with `location` as `Location` header.
    pub fn see_other(location: &str) -> Result<Response, Error> {
        Response::from_status(StatusCode::SEE_OTHER)
            .with_header(HeaderName::LOCATION, location)
    }
}

impl<B> Response<B> {
    /// Returns the response status.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response with the status replaced.
    ///
    /// `code` is validated as in [`Response::new`] and `reason` is stored as
    /// given.
    pub fn with_status<R>(mut self, code: u16, reason: R) -> Result<Response<B>, Error>
    where
        R: Into<String>,
    {
        self.status = StatusCode::new(code)?;
        Ok(self.with_reason(reason.into()))
    }

    /// Returns the reason phrase.
    ///
    /// Returns the reason phrase set when creating the response (or using
    /// [`Response::with_status`]) if it's not empty, otherwise the standard
    /// phrase of the status code or an empty string if there is none.
    pub fn reason_phrase(&self) -> &str {
        if !self.reason.is_empty() {
            &self.reason
        } else {
            self.status.phrase().unwrap_or("")
        }
    }

    fn with_reason(mut self, reason: String) -> Response<B> {
        self.reason = reason;
        self
    }

    /// Returns the response with the body replaced.
    pub fn with_body<B2>(self, body: B2) -> Response<B2> {
        self.map_body(|_| body)
    }

    /// Map the body from type `B` to `B2`.
    pub fn map_body<F, B2>(self, map: F) -> Response<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Response {
            message: self.message.map_body(map),
            status: self.status,
            reason: self.reason,
        }
    }

    /// Returns the body of the response.
    pub fn into_body(self) -> B {
        self.message.body
    }
}

impl<B> Sealed for Response<B> {
    type Body = B;

    fn message(&self) -> &Message<B> {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message<B> {
        &mut self.message
    }
}

impl<B> HttpMessage for Response<B> {}
