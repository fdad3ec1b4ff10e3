use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::info;

use crate::error::ApiError;
use crate::fetcher::Fetcher;
use crate::models::MoviePayload;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Builds the API routes around `fetcher`.
pub fn router(fetcher: Fetcher) -> Router {
    Router::new()
        .route("/movie/amazon/:amazon_id", get(amazon_movie))
        .with_state(fetcher)
}

pub fn json_response(status: StatusCode, body: impl Into<axum::body::Body>) -> Response {
    let mut resp = (status, body.into()).into_response();
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    resp
}

async fn amazon_movie(
    State(fetcher): State<Fetcher>,
    Path(amazon_id): Path<String>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!(%method, path = %uri.path(), "request");

    let movie = fetcher.fetch_movie(&amazon_id).await?;
    if movie.is_empty() {
        return Err(ApiError::NotFound(amazon_id));
    }

    let body = serde_json::to_vec(&MoviePayload::from(movie))?;
    Ok(json_response(StatusCode::OK, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{KNOWN_ID, closed_port_addr, fetcher_for, spawn_server, upstream};
    use serde_json::Value;
    use std::net::SocketAddr;

    async fn spawn_api(upstream_addr: SocketAddr) -> SocketAddr {
        spawn_server(router(fetcher_for(upstream_addr))).await
    }

    async fn get_movie(api: SocketAddr, id: &str) -> reqwest::Response {
        reqwest::get(format!("http://{api}/movie/amazon/{id}"))
            .await
            .unwrap()
    }

    fn content_type(resp: &reqwest::Response) -> &str {
        resp.headers()[header::CONTENT_TYPE.as_str()].to_str().unwrap()
    }

    #[tokio::test]
    async fn known_movie_is_returned_as_json() {
        let api = spawn_api(spawn_server(upstream()).await).await;

        let resp = get_movie(api, KNOWN_ID).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(content_type(&resp), JSON_CONTENT_TYPE);

        let movie: MoviePayload = resp.json().await.unwrap();
        assert_eq!(movie.title, "Guardians of the Galaxy");
        assert_eq!(movie.release_year, 2014);
        assert_eq!(movie.actors, vec!["Chris Pratt", "Zoe Saldana", "Dave Bautista"]);
        assert!(movie.poster.ends_with("81Zt1t3OHxL._SX300_.jpg"));
        assert_eq!(movie.similar_ids, vec!["B00TQJMR0I", "B01LQ2X0MI", "B00K19SD8Q"]);
    }

    #[tokio::test]
    async fn unknown_movie_is_not_found() {
        let api = spawn_api(spawn_server(upstream()).await).await;

        let resp = get_movie(api, "UNKNOWNID").await;
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        assert_eq!(content_type(&resp), JSON_CONTENT_TYPE);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "message": "Could not find a movie for amazon_id: UNKNOWNID" })
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_is_internal_error() {
        let api = spawn_api(closed_port_addr()).await;

        let resp = get_movie(api, KNOWN_ID).await;
        assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type(&resp), JSON_CONTENT_TYPE);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body["message"],
            format!("Error trying to fetch amazon_id: {KNOWN_ID}")
        );
    }

    #[tokio::test]
    async fn other_methods_are_rejected() {
        let api = spawn_api(spawn_server(upstream()).await).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{api}/movie/amazon/{KNOWN_ID}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    }
}
