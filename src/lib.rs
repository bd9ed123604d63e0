//! A trie-based HTTP request router.
//!
//! Routes are declared as (method, pattern, handler) tuples and compiled once
//! into an immutable [`Table`]. A [`Server`] then resolves each request against
//! the table in time proportional to the number of path segments, extracts the
//! named path parameters, and runs the handler, optionally through a single
//! [middleware](Server::with_middleware).
//!
//! ```rust
//! use http::{Request, StatusCode};
//! use pathmux::{boxed, Context, Params, ResponseWriter, Route, Server, Table};
//!
//! fn value(_: Context, w: &mut dyn ResponseWriter, _: &Request<()>, params: &Params) {
//!     assert_eq!(params.get("id"), Some("123"));
//!     w.write(b"ACK");
//! }
//!
//! let server = Server::new(Table::compile([
//!     Route::get("/unique/path/:id/value", boxed(value)),
//! ]));
//!
//! let res = server.respond(&Request::get("/unique/path/123/value").body(()).unwrap());
//! assert_eq!(res.status(), StatusCode::OK);
//! assert_eq!(res.body(), b"ACK");
//!
//! // the path exists, but not for POST
//! let res = server.respond(&Request::post("/unique/path/123/value").body(()).unwrap());
//! assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
//! assert_eq!(res.body(), b"Method not allowed\n");
//!
//! // no such path
//! let res = server.respond(&Request::get("/wrongPath").body(()).unwrap());
//! assert_eq!(res.status(), StatusCode::NOT_FOUND);
//! assert_eq!(res.body(), b"Path not found\n");
//! ```
//!
//! Patterns are split on `/`. A segment starting with `:` is a named parameter
//! that matches any non-empty request segment. Literal segments always take
//! precedence over a parameter at the same position:
//!
//! ```ignore
//!  Routes: /users/me, /users/:id
//!
//!  /users/me     match: /users/me
//!  /users/42     match: /users/:id, id="42"
//!  /users/       no match
//! ```
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod context;
mod error;
mod handler;
mod params;
mod path;
mod response;
mod route;
mod server;
#[cfg(feature = "tower")]
mod service;
mod tree;

pub use context::Context;
pub use error::MatchError;
pub use handler::{boxed, BoxedHandler, BoxedMiddleware, Handler, Middleware};
pub use params::{Params, ParamsIter};
pub use response::{ResponseRecorder, ResponseWriter};
pub use route::{Route, Routes};
pub use server::{Outcome, Server};
#[cfg(feature = "tower")]
pub use service::RouterService;
pub use tree::{compile, CompileOptions, Match, Table};
