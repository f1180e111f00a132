//! Mock quote endpoint for exercising `HttpQuoteSource` over real HTTP.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A local HTTP server with one route per response shape.
pub struct MockQuoteServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

async fn quote() -> impl IntoResponse {
    (
        [("content-type", "application/json")],
        r#"{"quote":"X","author":"Y"}"#,
    )
}

async fn missing_author() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"quote":"X"}"#)
}

async fn empty() -> impl IntoResponse {
    StatusCode::OK
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, r#"{"quote":"X","author":"Y"}"#)
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(2)).await;
    (
        [("content-type", "application/json")],
        r#"{"quote":"late","author":"Y"}"#,
    )
}

impl MockQuoteServer {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/quote", get(quote))
            .route("/missing-author", get(missing_author))
            .route("/empty", get(empty))
            .route("/error", get(server_error))
            .route("/slow", get(slow));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockQuoteServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// URL on a local port nothing listens on, so connecting is refused.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/quote", port)
}
