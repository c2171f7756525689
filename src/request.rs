use log::debug;

use crate::header::HeaderName;
use crate::message::{Message, Sealed};
use crate::{Error, HttpMessage, MemoryStream, Method, Uri};

/// HTTP request.
///
/// The `Host` header mirrors the host and port of the request's [`Uri`]. It's
/// derived when the request is created and whenever the URI is replaced using
/// [`Request::with_uri`], unless the caller opts into preserving it. Setting
/// the `Host` header directly, using [`HttpMessage::with_header`] or
/// [`HttpMessage::with_added_header`], replaces it the same way.
#[derive(Clone, Debug)]
pub struct Request<B = MemoryStream> {
    message: Message<B>,
    method: Method,
    uri: Uri,
    /// Explicit request target, see [`Request::with_request_target`].
    target: Option<String>,
}

/// Macro to create the [`Request`] constructors for the standard methods.
macro_rules! method_constructors {
    ( $( $(#[$meta: meta])* $fn_name: ident -> $method: ident, )+ ) => {
        $(
        $( #[$meta] )*
        pub fn $fn_name<U>(uri: U) -> Result<Request, Error>
        where
            U: TryInto<Uri>,
            Error: From<U::Error>,
        {
            let uri: Uri = uri.try_into()?;
            Ok(Request::from_method_uri(Method::$method, uri))
        }
        )+
    };
}

impl Request {
    /// Create a new request with an empty body.
    ///
    /// `method` must be a standard method or a valid `token`. If `uri` is a
    /// string it's parsed first. The `Host` header is derived from the URI.
    pub fn new<M, U>(method: M, uri: U) -> Result<Request, Error>
    where
        M: TryInto<Method>,
        Error: From<M::Error>,
        U: TryInto<Uri>,
        Error: From<U::Error>,
    {
        let method: Method = method.try_into()?;
        let uri: Uri = uri.try_into()?;
        Ok(Request::from_method_uri(method, uri))
    }

    fn from_method_uri(method: Method, uri: Uri) -> Request {
        let mut request = Request {
            message: Message::default(),
            method,
            uri,
            target: None,
        };
        request.derive_host_header();
        request
    }

    method_constructors!(
        /// Create a new GET request.
        get -> Get,
        /// Create a new HEAD request.
        head -> Head,
        /// Create a new POST request.
        post -> Post,
        /// Create a new PUT request.
        put -> Put,
        /// Create a new DELETE request.
        delete -> Delete,
        /// Create a new OPTIONS request.
        options -> Options,
        /// Create a new PATCH request.
        patch -> Patch,
    );
}

impl<B> Request<B> {
    /// Returns the HTTP method of this request.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request with the method replaced.
    pub fn with_method<M>(mut self, method: M) -> Result<Request<B>, Error>
    where
        M: TryInto<Method>,
        Error: From<M::Error>,
    {
        self.method = method.try_into()?;
        Ok(self)
    }

    /// Returns the URI of this request.
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the request with the URI replaced.
    ///
    /// The `Host` header is derived from the new `uri`, unless `preserve_host`
    /// is true and the request already has a non-empty `Host` header.
    pub fn with_uri(mut self, uri: Uri, preserve_host: bool) -> Request<B> {
        self.uri = uri;
        if preserve_host && !self.header_line(HeaderName::HOST).is_empty() {
            debug!("preserving Host header on URI change");
        } else {
            self.derive_host_header();
        }
        self
    }

    /// Returns the request target.
    ///
    /// If set this returns the target set by [`Request::with_request_target`],
    /// otherwise it's the path (always starting with a single slash) and query
    /// of the URI, i.e. the origin-form (RFC 9112 section 3.2.1).
    pub fn request_target(&self) -> String {
        if let Some(target) = &self.target {
            return target.clone();
        }

        let path = self.uri.path();
        let query = self.uri.query();
        let mut target = String::with_capacity(path.len() + query.len() + 2);
        target.push('/');
        target.push_str(path.trim_start_matches('/'));
        if !query.is_empty() {
            target.push('?');
            target.push_str(&query);
        }
        target
    }

    /// Returns the request with an explicit request target, e.g. `*` or an
    /// absolute URI.
    ///
    /// The target can't contain whitespace or control characters.
    pub fn with_request_target<T>(mut self, target: T) -> Result<Request<B>, Error>
    where
        T: Into<String>,
    {
        let target = target.into();
        if target.is_empty()
            || target
                .bytes()
                .any(|b| b.is_ascii_whitespace() || b.is_ascii_control())
        {
            return Err(Error::MalformedUri(target));
        }
        self.target = Some(target);
        Ok(self)
    }

    /// Returns the request with the body replaced.
    pub fn with_body<B2>(self, body: B2) -> Request<B2> {
        self.map_body(|_| body)
    }

    /// Map the body from type `B` to `B2`.
    pub fn map_body<F, B2>(self, map: F) -> Request<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Request {
            message: self.message.map_body(map),
            method: self.method,
            uri: self.uri,
            target: self.target,
        }
    }

    /// Returns the body of the request.
    pub fn into_body(self) -> B {
        self.message.body
    }

    /// Derive the `Host` header from the URI.
    ///
    /// The value is `host[:port]`, where the port is only included if it's not
    /// the standard port of the scheme. Nothing changes if the URI has no host.
    fn derive_host_header(&mut self) {
        let host = self.uri.host();
        if host.is_empty() {
            return;
        }

        let mut value = host.to_owned();
        if let Some(port) = self.uri.port() {
            value.push(':');
            value.push_str(itoa::Buffer::new().format(port));
        }
        debug!(host = value.as_str(); "deriving Host header from URI");
        self.set_host(vec![value]);
    }

    /// Set the `Host` header to the already validated `values`, making it the
    /// first header. An empty value is ignored.
    fn set_host(&mut self, values: Vec<String>) {
        if values.iter().all(|value| value.is_empty()) {
            return;
        }
        self.message.headers.insert_first(HeaderName::HOST, values);
    }
}

impl<B> Sealed for Request<B> {
    type Body = B;

    fn message(&self) -> &Message<B> {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message<B> {
        &mut self.message
    }

    fn update_header(
        &mut self,
        name: HeaderName,
        values: Vec<String>,
        append: bool,
    ) -> Result<(), Error> {
        if name == HeaderName::HOST {
            // `Host` only has a single value, so appending replaces it.
            self.set_host(values);
            Ok(())
        } else if append {
            self.message.headers.append(name, values)
        } else {
            self.message.headers.insert(name, values)
        }
    }
}

impl<B> HttpMessage for Request<B> {}
