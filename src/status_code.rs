use std::fmt;

use crate::Error;

/// Response Status Code.
///
/// Only codes in the range [100, 599], excluding the unused 306, can be
/// created, see [`StatusCode::new`]. This means every status code belongs to
/// one of the five [`StatusClass`]es.
///
/// RFC 9110 section 15.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

/// Class of a [`StatusCode`], determined by its first digit.
///
/// RFC 9110 section 15.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusClass {
    /// 1xx.
    Informational,
    /// 2xx.
    Successful,
    /// 3xx.
    Redirection,
    /// 4xx.
    ClientError,
    /// 5xx.
    ServerError,
}

/// Macro to create the status code constants and [`StatusCode::phrase`]
/// from a single list of registered codes.
macro_rules! registered_codes {
    ( $( $const_name: ident = $code: literal, $phrase: literal; )+ ) => {
        $(
        #[doc = concat!($phrase, ".")]
        pub const $const_name: StatusCode = StatusCode($code);
        )+

        /// Returns the registered reason phrase, if any.
        ///
        /// See the HTTP Status Code Registry:
        /// <https://www.iana.org/assignments/http-status-codes>.
        pub const fn phrase(self) -> Option<&'static str> {
            match self.0 {
                $( $code => Some($phrase), )+
                _ => None,
            }
        }
    };
}

impl StatusCode {
    registered_codes!(
        CONTINUE = 100, "Continue";
        SWITCHING_PROTOCOLS = 101, "Switching Protocols";
        PROCESSING = 102, "Processing";
        EARLY_HINTS = 103, "Early Hints";
        OK = 200, "OK";
        CREATED = 201, "Created";
        ACCEPTED = 202, "Accepted";
        NON_AUTHORITATIVE_INFORMATION = 203, "Non-Authoritative Information";
        NO_CONTENT = 204, "No Content";
        RESET_CONTENT = 205, "Reset Content";
        PARTIAL_CONTENT = 206, "Partial Content";
        MULTI_STATUS = 207, "Multi-Status";
        ALREADY_REPORTED = 208, "Already Reported";
        IM_USED = 226, "IM Used";
        MULTIPLE_CHOICES = 300, "Multiple Choices";
        MOVED_PERMANENTLY = 301, "Moved Permanently";
        FOUND = 302, "Found";
        SEE_OTHER = 303, "See Other";
        NOT_MODIFIED = 304, "Not Modified";
        USE_PROXY = 305, "Use Proxy";
        TEMPORARY_REDIRECT = 307, "Temporary Redirect";
        PERMANENT_REDIRECT = 308, "Permanent Redirect";
        BAD_REQUEST = 400, "Bad Request";
        UNAUTHORIZED = 401, "Unauthorized";
        PAYMENT_REQUIRED = 402, "Payment Required";
        FORBIDDEN = 403, "Forbidden";
        NOT_FOUND = 404, "Not Found";
        METHOD_NOT_ALLOWED = 405, "Method Not Allowed";
        NOT_ACCEPTABLE = 406, "Not Acceptable";
        PROXY_AUTHENTICATION_REQUIRED = 407, "Proxy Authentication Required";
        REQUEST_TIMEOUT = 408, "Request Timeout";
        CONFLICT = 409, "Conflict";
        GONE = 410, "Gone";
        LENGTH_REQUIRED = 411, "Length Required";
        PRECONDITION_FAILED = 412, "Precondition Failed";
        CONTENT_TOO_LARGE = 413, "Content Too Large";
        URI_TOO_LONG = 414, "URI Too Long";
        UNSUPPORTED_MEDIA_TYPE = 415, "Unsupported Media Type";
        RANGE_NOT_SATISFIABLE = 416, "Range Not Satisfiable";
        EXPECTATION_FAILED = 417, "Expectation Failed";
        MISDIRECTED_REQUEST = 421, "Misdirected Request";
        UNPROCESSABLE_CONTENT = 422, "Unprocessable Content";
        LOCKED = 423, "Locked";
        FAILED_DEPENDENCY = 424, "Failed Dependency";
        TOO_EARLY = 425, "Too Early";
        UPGRADE_REQUIRED = 426, "Upgrade Required";
        PRECONDITION_REQUIRED = 428, "Precondition Required";
        TOO_MANY_REQUESTS = 429, "Too Many Requests";
        REQUEST_HEADER_FIELDS_TOO_LARGE = 431, "Request Header Fields Too Large";
        UNAVAILABLE_FOR_LEGAL_REASONS = 451, "Unavailable For Legal Reasons";
        INTERNAL_SERVER_ERROR = 500, "Internal Server Error";
        NOT_IMPLEMENTED = 501, "Not Implemented";
        BAD_GATEWAY = 502, "Bad Gateway";
        SERVICE_UNAVAILABLE = 503, "Service Unavailable";
        GATEWAY_TIMEOUT = 504, "Gateway Timeout";
        HTTP_VERSION_NOT_SUPPORTED = 505, "HTTP Version Not Supported";
        VARIANT_ALSO_NEGOTIATES = 506, "Variant Also Negotiates";
        INSUFFICIENT_STORAGE = 507, "Insufficient Storage";
        LOOP_DETECTED = 508, "Loop Detected";
        NOT_EXTENDED = 510, "Not Extended";
        NETWORK_AUTHENTICATION_REQUIRED = 511, "Network Authentication Required";
    );

    /// Create a new status code.
    ///
    /// Returns [`Error::InvalidStatusCode`] if `code` is not in the range [100,
    /// 599] or is 306, which is reserved (RFC 9110 section 15.4.7).
    pub const fn new(code: u16) -> Result<StatusCode, Error> {
        if StatusCode::is_valid(code) {
            Ok(StatusCode(code))
        } else {
            Err(Error::InvalidStatusCode(code))
        }
    }

    /// Returns `true` if `code` is a valid status code, see
    /// [`StatusCode::new`].
    pub const fn is_valid(code: u16) -> bool {
        matches!(code, 100..=599) && code != 306
    }

    /// Returns the status code as integer.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns the class of the status code.
    pub const fn class(self) -> StatusClass {
        // `new` only accepts [100, 599].
        match self.0 / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// Returns `true` for 3xx status codes.
    pub const fn is_redirect(self) -> bool {
        matches!(self.class(), StatusClass::Redirection)
    }

    /// Returns `true` for 4xx and 5xx status codes.
    pub const fn is_error(self) -> bool {
        matches!(self.class(), StatusClass::ClientError | StatusClass::ServerError)
    }

    /// Returns `false` if a response with this status MUST NOT include a body,
    /// i.e. 1xx, 204 (No Content) and 304 (Not Modified).
    ///
    /// RFC 9112 section 6.3.
    pub const fn includes_body(self) -> bool {
        !(matches!(self.class(), StatusClass::Informational) || self.0 == 204 || self.0 == 304)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<StatusCode, Error> {
        StatusCode::new(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.0
    }
}

impl PartialEq<u16> for StatusCode {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0))
    }
}
