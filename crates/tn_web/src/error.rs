use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::render;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Article {0} not found")]
    ArticleNotFound(String),

    #[error("Article {0} not found")]
    ApiArticleNotFound(String),

    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        warn!("{}", self);

        match &self {
            WebError::ArticleNotFound(_) | WebError::RouteNotFound(_) => {
                (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
            }
            WebError::ApiArticleNotFound(_) => {
                let payload = Json(json!({ "message": self.to_string() }));
                (StatusCode::NOT_FOUND, payload).into_response()
            }
        }
    }
}
