use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod render;
pub mod state;

pub use error::WebError;
pub use state::AppState;

pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/article/:id", get(handlers::article_detail))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:id", get(handlers::get_article))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use tn_core::{Article, Result, Error};
    pub use crate::{create_app, AppState, WebError};
}
