// Throwaway HTTP server for tests.
//
// `site` turns a table of (path, status, body) into an axum Router; tests can
// add more routes (redirects) before handing it to `serve`, which binds
// 127.0.0.1 on a random port. Unknown paths get axum's 404.

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

pub(crate) fn site(pages: Vec<(&'static str, u16, &'static str)>) -> Router {
    pages
        .into_iter()
        .fold(Router::new(), |router, (path, status, body)| {
            let status = StatusCode::from_u16(status).unwrap();
            router.route(path, get(move || async move { (status, Html(body)) }))
        })
}

/// Starts the server and returns its base URL, e.g. "http://127.0.0.1:41234".
pub(crate) async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}
