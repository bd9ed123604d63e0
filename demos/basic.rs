use http::{Method, Request};
use pathmux::{boxed, Context, Params, ResponseWriter, Route, Server, Table};

fn user(_: Context, w: &mut dyn ResponseWriter, _: &Request<()>, params: &Params) {
    w.write(format!("user {}\n", params.get("id").unwrap_or("?")).as_bytes());
}

fn me(_: Context, w: &mut dyn ResponseWriter, _: &Request<()>, _: &Params) {
    w.write(b"the current user\n");
}

fn main() {
    // RUST_LOG=debug shows every registered route
    env_logger::init();

    let table = Table::compile([
        Route::get("/users/me", boxed(me)),
        Route::get("/users/:id", boxed(user)),
        Route::delete("/users/:id", boxed(user)),
    ]);
    let server = Server::new(table);

    for (method, path) in [
        (Method::GET, "/users/me"),
        (Method::GET, "/users/42"),
        (Method::POST, "/users/42"),
        (Method::GET, "/teams/1"),
    ] {
        let req = Request::builder()
            .method(method.clone())
            .uri(path)
            .body(())
            .expect("valid request");
        let res = server.respond(&req);

        print!(
            "{} {} -> {} {}",
            method,
            path,
            res.status(),
            String::from_utf8_lossy(res.body())
        );
        if let Some(allow) = res.headers().get(http::header::ALLOW) {
            println!("  allow: {:?}", allow);
        }
    }
}
