//! Module with the [`Handler`] and [`Middleware`] traits and the [`Pipeline`]
//! that chains them.
//!
//! [`Handler`]s are used to process a single request.
//!
//! [`Middleware`] sits in front of a handler. It can transform the request
//! and/or response, have side effects such as logging the request, or return
//! a response itself without calling the handler at all.
//!
//! ```
//! use heph_message::handler::{middleware_fn, Next, Pipeline};
//! use heph_message::{HttpMessage, Request, Response};
//!
//! # fn main() -> Result<(), heph_message::Error> {
//! let pipeline = Pipeline::new()
//!     // Refuse requests without a `Host` header.
//!     .through(middleware_fn(|request: Request, next: Next<'_, Request, Response>| {
//!         if request.has_header("host") {
//!             next.run(request)
//!         } else {
//!             Response::bad_request()
//!         }
//!     }));
//!
//! let request = Request::get("http://example.com/")?;
//! let response = pipeline.dispatch(request, &|_request: Request| Response::ok());
//! assert_eq!(response.status().as_u16(), 200);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::Error;

/// Handler is the trait that defines how a single request is handled.
///
/// It's basically a function that accepts a request and returns a response.
/// In fact any `Fn(Req) -> Res` is a valid `Handler`.
pub trait Handler<Req> {
    /// Type of response the handler returns.
    type Response;

    /// Handle a single `request`, returning a response.
    fn handle(&self, request: Req) -> Self::Response;
}

impl<F, Req, Res> Handler<Req> for F
where
    F: Fn(Req) -> Res,
{
    type Response = Res;

    fn handle(&self, request: Req) -> Self::Response {
        (self)(request)
    }
}

/// Middleware processes a request before the remainder of the [`Pipeline`]
/// does.
///
/// The middleware decides whether or not to continue by calling
/// [`Next::run`], if it doesn't the rest of the pipeline (including the
/// handler) is never called. Errors can be returned by using a `Result` as
/// response type `Res`.
///
/// Use [`middleware_fn`] to use a function as middleware.
pub trait Middleware<Req, Res> {
    /// Process the `request`, calling `next` to continue processing.
    fn process(&self, request: Req, next: Next<'_, Req, Res>) -> Res;
}

/// Create [`Middleware`] from a function, see [`MiddlewareFn`].
pub const fn middleware_fn<F, Req, Res>(f: F) -> MiddlewareFn<F>
where
    F: for<'a> Fn(Req, Next<'a, Req, Res>) -> Res,
{
    MiddlewareFn { f }
}

/// [`Middleware`] implemented by a function, see [`middleware_fn`].
#[derive(Copy, Clone, Debug)]
pub struct MiddlewareFn<F> {
    f: F,
}

impl<F, Req, Res> Middleware<Req, Res> for MiddlewareFn<F>
where
    F: for<'a> Fn(Req, Next<'a, Req, Res>) -> Res,
{
    fn process(&self, request: Req, next: Next<'_, Req, Res>) -> Res {
        (self.f)(request, next)
    }
}

/// The remainder of a [`Pipeline`], passed to [`Middleware::process`].
pub struct Next<'a, Req, Res> {
    middleware: &'a [Arc<dyn Middleware<Req, Res>>],
    handler: &'a dyn Handler<Req, Response = Res>,
}

impl<'a, Req, Res> Next<'a, Req, Res> {
    /// Run the remainder of the pipeline.
    ///
    /// This calls the next middleware, or the handler if no middleware is
    /// left.
    pub fn run(self, request: Req) -> Res {
        match self.middleware.split_first() {
            Some((middleware, rest)) => {
                trace!(remaining = rest.len(); "calling middleware");
                let next = Next {
                    middleware: rest,
                    handler: self.handler,
                };
                middleware.process(request, next)
            }
            None => {
                trace!("calling handler");
                self.handler.handle(request)
            }
        }
    }

    /// Returns the number of middleware left before the handler is called.
    pub fn remaining(&self) -> usize {
        self.middleware.len()
    }
}

impl<'a, Req, Res> fmt::Debug for Next<'a, Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.middleware.len())
            .finish()
    }
}

/// Ordered list of [`Middleware`] in front of a [`Handler`].
///
/// A pipeline can be used to dispatch any number of requests, see
/// [`Pipeline::dispatch`].
pub struct Pipeline<Req, Res> {
    middleware: Vec<Arc<dyn Middleware<Req, Res>>>,
}

impl<Req, Res> Pipeline<Req, Res> {
    /// Create a new pipeline without middleware.
    pub const fn new() -> Pipeline<Req, Res> {
        Pipeline {
            middleware: Vec::new(),
        }
    }

    /// Add `middleware` to the end of the pipeline.
    pub fn through<M>(mut self, middleware: M) -> Pipeline<Req, Res>
    where
        M: Middleware<Req, Res> + 'static,
    {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Add the middleware registered under `names`, in order, to the end of
    /// the pipeline.
    ///
    /// Returns [`Error::PipelineConfiguration`] if a name isn't registered in
    /// `registry`.
    pub fn through_named<I, N>(
        mut self,
        registry: &MiddlewareRegistry<Req, Res>,
        names: I,
    ) -> Result<Pipeline<Req, Res>, Error>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            match registry.get(name) {
                Some(middleware) => self.middleware.push(middleware),
                None => {
                    return Err(Error::PipelineConfiguration(format!(
                        "no middleware registered as `{name}`"
                    )))
                }
            }
        }
        Ok(self)
    }

    /// Returns the number of middleware in the pipeline.
    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    /// Returns `true` if the pipeline has no middleware.
    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    /// Dispatch `request` through all middleware to `handler`.
    ///
    /// The middleware is called in the order it was added. Without any
    /// middleware this returns `handler.handle(request)`.
    pub fn dispatch<H>(&self, request: Req, handler: &H) -> Res
    where
        H: Handler<Req, Response = Res>,
    {
        trace!(middleware = self.middleware.len(); "dispatching request");
        let next = Next {
            middleware: &self.middleware,
            handler,
        };
        next.run(request)
    }
}

impl<Req, Res> Default for Pipeline<Req, Res> {
    fn default() -> Pipeline<Req, Res> {
        Pipeline::new()
    }
}

impl<Req, Res> Clone for Pipeline<Req, Res> {
    fn clone(&self) -> Pipeline<Req, Res> {
        Pipeline {
            middleware: self.middleware.clone(),
        }
    }
}

impl<Req, Res> fmt::Debug for Pipeline<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// Named [`Middleware`], used to create a [`Pipeline`] from configuration, see
/// [`Pipeline::through_named`].
pub struct MiddlewareRegistry<Req, Res> {
    entries: Vec<(String, Arc<dyn Middleware<Req, Res>>)>,
}

impl<Req, Res> MiddlewareRegistry<Req, Res> {
    /// Create an empty registry.
    pub const fn new() -> MiddlewareRegistry<Req, Res> {
        MiddlewareRegistry {
            entries: Vec::new(),
        }
    }

    /// Register `middleware` as `name`, replacing any middleware already
    /// registered as `name`.
    pub fn register<N, M>(&mut self, name: N, middleware: M)
    where
        N: Into<String>,
        M: Middleware<Req, Res> + 'static,
    {
        let name = name.into();
        let middleware: Arc<dyn Middleware<Req, Res>> = Arc::new(middleware);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = middleware,
            None => self.entries.push((name, middleware)),
        }
    }

    /// Returns the middleware registered as `name`.
    fn get(&self, name: &str) -> Option<Arc<dyn Middleware<Req, Res>>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, middleware)| middleware.clone())
    }
}

impl<Req, Res> Default for MiddlewareRegistry<Req, Res> {
    fn default() -> MiddlewareRegistry<Req, Res> {
        MiddlewareRegistry::new()
    }
}

impl<Req, Res> fmt::Debug for MiddlewareRegistry<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}
