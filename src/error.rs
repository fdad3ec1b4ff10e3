use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::server::json_response;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error trying to fetch amazon_id: {id}")]
    Request {
        id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error trying to fetch amazon_id: {id}")]
    Body {
        id: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Everything the movie route can answer with besides a movie.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Could not find a movie for amazon_id: {0}")]
    NotFound(String),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Fetch(_) | ApiError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            let source = std::error::Error::source(&self).map(ToString::to_string);
            error!(error = %self, source = ?source, "request failed");
        }
        let body = serde_json::json!({ "message": self.to_string() }).to_string();
        json_response(status, body)
    }
}
