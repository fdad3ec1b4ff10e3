//! Shared helpers for tests that need a live HTTP upstream.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::Path;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::config::FetcherConfig;
use crate::fetcher::Fetcher;

pub const PRODUCT_PAGE: &str = include_str!("../tests/fixtures/product_page.html");
pub const KNOWN_ID: &str = "B00K19SD8Q";

/// Serves `app` on an ephemeral local port for the rest of the test.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Stand-in for the product site: the fixture page for [`KNOWN_ID`],
/// a page without any movie markup for every other id.
pub fn upstream() -> Router {
    Router::new().route(
        "/gp/product/:id",
        get(|Path(id): Path<String>| async move {
            if id == KNOWN_ID {
                Html(PRODUCT_PAGE.to_string())
            } else {
                Html("<html><body><div id=\"a-page\">Page not found</div></body></html>".to_string())
            }
        }),
    )
}

pub fn fetcher_for(upstream: SocketAddr) -> Fetcher {
    Fetcher::new(&FetcherConfig {
        base_url: format!("http://{upstream}/gp/product/"),
        ..FetcherConfig::default()
    })
    .unwrap()
}

/// An address nothing listens on.
pub fn closed_port_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
