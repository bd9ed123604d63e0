//! A [`tower::Service`] adapter, enabled by the `tower` feature.
//!
//! The service records each response in memory and resolves immediately,
//! which makes a [`Server`] usable with hyper and the rest of the tower
//! ecosystem:
//!
//! ```rust
//! # async fn run() {
//! use http::{Request, StatusCode};
//! use pathmux::{Server, Table};
//! use tower::ServiceExt;
//!
//! let service = Server::<()>::new(Table::default()).into_service();
//!
//! let req = Request::get("/missing").body(()).unwrap();
//! let res = service.oneshot(req).await.unwrap();
//! assert_eq!(res.status(), StatusCode::NOT_FOUND);
//! # }
//! ```
use crate::server::Server;

use http::{Request, Response};
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

/// A cloneable [`tower::Service`] dispatching requests to a shared [`Server`].
pub struct RouterService<B>(Arc<Server<B>>);

impl<B> Clone for RouterService<B> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<B> From<Arc<Server<B>>> for RouterService<B> {
    fn from(server: Arc<Server<B>>) -> Self {
        Self(server)
    }
}

impl<B> Server<B> {
    /// Converts the server into a `tower::Service`.
    pub fn into_service(self) -> RouterService<B> {
        RouterService(Arc::new(self))
    }
}

impl<B> tower::Service<Request<B>> for RouterService<B> {
    type Response = Response<Vec<u8>>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        ready(Ok(self.0.respond(&req)))
    }
}
