use crate::context::Context;
use crate::params::Params;
use crate::response::ResponseWriter;

use http::Request;
use std::sync::Arc;

/// A request handler.
///
/// Implemented for every `Fn(Context, &mut dyn ResponseWriter, &Request<B>, &Params)`
/// closure or function that is `Send + Sync`.
pub trait Handler<B>: Send + Sync {
    fn call(&self, ctx: Context, w: &mut dyn ResponseWriter, req: &Request<B>, params: &Params<'_, '_>);
}

impl<F, B> Handler<B> for F
where
    F: Fn(Context, &mut dyn ResponseWriter, &Request<B>, &Params<'_, '_>) + Send + Sync,
{
    fn call(&self, ctx: Context, w: &mut dyn ResponseWriter, req: &Request<B>, params: &Params<'_, '_>) {
        (self)(ctx, w, req, params)
    }
}

/// A wrapper invoked in place of the matched handler.
///
/// The middleware receives the handler as a continuation and decides whether
/// to call it, and with which [`Context`]. The handler does not run unless
/// the middleware calls it.
pub trait Middleware<B>: Send + Sync {
    fn call(
        &self,
        w: &mut dyn ResponseWriter,
        req: &Request<B>,
        params: &Params<'_, '_>,
        next: &dyn Handler<B>,
    );
}

impl<F, B> Middleware<B> for F
where
    F: Fn(&mut dyn ResponseWriter, &Request<B>, &Params<'_, '_>, &dyn Handler<B>) + Send + Sync,
{
    fn call(
        &self,
        w: &mut dyn ResponseWriter,
        req: &Request<B>,
        params: &Params<'_, '_>,
        next: &dyn Handler<B>,
    ) {
        (self)(w, req, params, next)
    }
}

pub type BoxedHandler<B> = Arc<dyn Handler<B>>;

pub type BoxedMiddleware<B> = Arc<dyn Middleware<B>>;

/// Type-erases a handler so it can be stored in a route table.
///
/// ```rust
/// use http::Request;
/// use pathmux::{boxed, Context, Params, ResponseWriter, Route};
///
/// fn index(_: Context, w: &mut dyn ResponseWriter, _: &Request<()>, _: &Params) {
///     w.write(b"Hello, World!");
/// }
///
/// let route = Route::get("/", boxed(index));
/// ```
pub fn boxed<B, F>(handler: F) -> BoxedHandler<B>
where
    F: Fn(Context, &mut dyn ResponseWriter, &Request<B>, &Params<'_, '_>) + Send + Sync + 'static,
{
    Arc::new(handler)
}
