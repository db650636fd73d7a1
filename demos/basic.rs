mod utils;

use {
    ::axum::{http::header::*, routing::*, *},
    tokio::{net::*, *},
    tower_http::trace::*,
    tower_http_etag::*,
};

// Axum server with our ETag middleware for Tower
//
// Pay attention to the tracing log to see what our middleware is doing!
//
// Some fun examples:
//
//   curl --verbose http://localhost:8080
//
//   curl --verbose --header 'If-None-Match: W/"<copy the ETag here>"' http://localhost:8080
//
//   curl --verbose http://localhost:8080/json
//
//   curl --verbose http://localhost:8080/plain
//
//   curl --verbose http://localhost:8080/public
//
// A browser would be easier for testing client-side caching
// Make sure to turn on the browser's developer tools with F12
// Refresh the page normally by pressing F5 to see 304, or force a refresh with CTRL+F5

#[main]
async fn main() {
    utils::init_tracing();

    let router = Router::default()
        .route(
            "/",
            get((
                [(CONTENT_TYPE, "text/html; charset=utf-8")],
                "<html><body>Hello, world!</body></html>\n",
            )),
        )
        .route(
            "/json",
            get(([(CONTENT_TYPE, "application/json")], "{\"hello\":\"world\"}\n")),
        )
        // Not HTML or JSON, so no ETag
        .route("/plain", get(("Hello, world!\n",)))
        // We will not overwrite an existing Cache-Control
        .route(
            "/public",
            get((
                [
                    (CONTENT_TYPE, "text/html"),
                    (CACHE_CONTROL, "public, max-age=3600"),
                ],
                "<html><body>Hello, public!</body></html>\n",
            )),
        )
        .layer(EtagLayer::<Sha1>::default().max_age(10))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("[::]:8080")
        .await
        .expect("TcpListener::bind");
    // If IPv6 is disabled on your machine (for shame!):
    // let listener = TcpListener::bind("0.0.0.0:8080").await.expect("bind");
    tracing::info!("bound to: {:?}", listener.local_addr());
    serve(listener, router).await.expect("axum::serve");
}
