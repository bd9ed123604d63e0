//! Request dispatch.
//!
//! A [`Server`] owns a compiled [`Table`] of handlers. For every request it
//! looks up the method and path, then either runs the matched handler
//! (through the middleware, if one is configured) or answers with one of two
//! fixed plain-text errors:
//!
//! ```ignore
//!  Condition                                   Status  Body
//!  path matches no route                       404     "Path not found\n"
//!  path matches a route, but not this method   405     "Method not allowed\n"
//! ```
//!
//! The server never mutates its table, so one instance can serve any number
//! of concurrent requests from behind an `Arc`.
use crate::context::Context;
use crate::error::MatchError;
use crate::handler::{BoxedHandler, BoxedMiddleware, Handler, Middleware};
use crate::params::Params;
use crate::response::{ResponseRecorder, ResponseWriter};
use crate::tree::Table;

use http::header::{HeaderValue, ALLOW, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Request, Response};
use std::fmt;
use std::sync::Arc;

/// The result of dispatching a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A route matched and its handler (or the middleware) was invoked.
    Handled,
    /// No route matched the path. A 404 response was written.
    NotFound,
    /// The path matched, but not for this method. A 405 response was written.
    MethodNotAllowed,
}

impl From<MatchError> for Outcome {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NotFound => Outcome::NotFound,
            MatchError::MethodNotAllowed => Outcome::MethodNotAllowed,
        }
    }
}

/// Dispatches requests against a compiled table of handlers.
///
/// ```rust
/// use http::{Request, StatusCode};
/// use pathmux::{boxed, Context, Params, ResponseWriter, Route, Server, Table};
///
/// fn hello(_: Context, w: &mut dyn ResponseWriter, _: &Request<()>, params: &Params) {
///     let name = params.get("name").unwrap_or("stranger");
///     w.write(format!("Hello, {}!", name).as_bytes());
/// }
///
/// let server = Server::new(Table::compile([Route::get("/hello/:name", boxed(hello))]));
///
/// let req = Request::get("/hello/ferris").body(()).unwrap();
/// let res = server.respond(&req);
/// assert_eq!(res.status(), StatusCode::OK);
/// assert_eq!(res.body(), b"Hello, ferris!");
/// ```
pub struct Server<B> {
    table: Table<BoxedHandler<B>>,

    /// An optional wrapper invoked instead of the matched handler.
    /// It receives the handler as a continuation.
    pub middleware: Option<BoxedMiddleware<B>>,

    /// If enabled, a request whose path matches a route registered only for
    /// other methods is answered with `405 Method Not Allowed` and an `Allow`
    /// header. If disabled, such requests get the `404 Not Found` response.
    pub handle_method_not_allowed: bool,
}

impl<B> Server<B> {
    /// Creates a server without middleware.
    pub fn new(table: Table<BoxedHandler<B>>) -> Self {
        Self {
            table,
            middleware: None,
            handle_method_not_allowed: true,
        }
    }

    /// Sets the middleware invoked instead of every matched handler.
    ///
    /// Only one middleware is kept. To run several, nest them inside a single
    /// function before registering it.
    pub fn with_middleware<F>(mut self, middleware: F) -> Self
    where
        F: Fn(&mut dyn ResponseWriter, &Request<B>, &Params<'_, '_>, &dyn Handler<B>)
            + Send
            + Sync
            + 'static,
    {
        self.middleware = Some(Arc::new(middleware));
        self
    }

    /// The compiled table this server dispatches against.
    pub fn table(&self) -> &Table<BoxedHandler<B>> {
        &self.table
    }

    /// Handles a request, writing the response to `w`.
    pub fn serve(&self, w: &mut dyn ResponseWriter, req: &Request<B>) {
        self.dispatch(w, req);
    }

    /// Handles a request, writing the response to `w`, and reports how the
    /// request was resolved.
    pub fn dispatch(&self, w: &mut dyn ResponseWriter, req: &Request<B>) -> Outcome {
        let path = req.uri().path();

        let err = match self.table.at(req.method(), path) {
            Ok(matched) => {
                let handler: &dyn Handler<B> = matched.value.as_ref();
                match &self.middleware {
                    Some(middleware) => middleware.call(w, req, &matched.params, handler),
                    None => handler.call(Context::background(), w, req, &matched.params),
                }
                return Outcome::Handled;
            }
            Err(MatchError::MethodNotAllowed) if !self.handle_method_not_allowed => {
                MatchError::NotFound
            }
            Err(err) => err,
        };

        if err == MatchError::MethodNotAllowed {
            let allowed = self
                .table
                .allowed(path)
                .iter()
                .map(|method| method.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            if let Ok(value) = HeaderValue::from_str(&allowed) {
                w.headers_mut().insert(ALLOW, value);
            }
        }

        write_error(w, err);
        err.into()
    }

    /// Handles a request in memory and returns the recorded response.
    pub fn respond(&self, req: &Request<B>) -> Response<Vec<u8>> {
        let mut recorder = ResponseRecorder::new();
        self.serve(&mut recorder, req);
        recorder.into_response()
    }
}

impl<B> fmt::Debug for Server<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("routes", &self.table.len())
            .field("middleware", &self.middleware.is_some())
            .field("handle_method_not_allowed", &self.handle_method_not_allowed)
            .finish()
    }
}

// Replies with the fixed plain-text body for `err`.
fn write_error(w: &mut dyn ResponseWriter, err: MatchError) {
    let headers = w.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    w.write_status(err.status());
    w.write(err.body().as_bytes());
}
