use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use pathmux::{boxed, Context, Handler, Params, ResponseWriter, Route, Routes, Server, Table};
use tokio::net::TcpListener;

#[derive(Clone)]
struct RequestId(u64);

// GET /
fn index(_: Context, w: &mut dyn ResponseWriter, _: &Request<Bytes>, _: &Params) {
    w.write(b"Hello, world!\n");
}

// GET /hello/:name
fn hello(ctx: Context, w: &mut dyn ResponseWriter, _: &Request<Bytes>, params: &Params) {
    let name = params.get("name").unwrap_or("stranger");
    let id = ctx.value::<RequestId>().map_or(0, |id| id.0);
    w.write(format!("Hello, {}! (request #{})\n", name, id).as_bytes());
}

// POST /echo
fn echo(_: Context, w: &mut dyn ResponseWriter, req: &Request<Bytes>, _: &Params) {
    w.write(req.body());
}

async fn route(
    server: Arc<Server<Bytes>>,
    req: Request<Incoming>,
) -> hyper::Result<Response<Full<Bytes>>> {
    // the router works on buffered requests
    let (parts, body) = req.into_parts();
    let body = body.collect().await?.to_bytes();
    let req = Request::from_parts(parts, body);

    Ok(server.respond(&req).map(|body| Full::new(Bytes::from(body))))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let mut routes = Routes::new();
    routes
        .get("/", boxed(index))
        .get("/hello/:name", boxed(hello))
        .post("/echo", boxed(echo));
    routes.extend([Route::put("/echo", boxed(echo))]);

    // every matched request gets a sequential id in its context
    let counter = AtomicU64::new(0);
    let server = Server::new(Table::compile(routes)).with_middleware(move |w, req, params, next| {
        let id = counter.fetch_add(1, Ordering::Relaxed) + 1;
        next.call(Context::background().with_value(RequestId(id)), w, req, params);
    });
    let server = Arc::new(server);

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;

    loop {
        let server = server.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| route(server.clone(), request)),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
