use axum::{
    extract::{Path, State},
    http::Uri,
    response::Html,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tn_core::Article;

use crate::{render, AppState, WebError};

#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub summary: String,
}

async fn fresh_article(state: &AppState, id: &str) -> Option<Article> {
    state.cache.ensure_fresh().await;
    state.cache.get(id).await
}

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    state.cache.ensure_fresh().await;
    let articles = state.cache.articles_sorted().await;
    Html(render::list_page(&articles))
}

pub async fn article_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let article = fresh_article(&state, &id)
        .await
        .ok_or(WebError::ArticleNotFound(id))?;
    let summary = state.summarizer.summarize(Some(&article.content)).await;
    Ok(Html(render::detail_page(&article, &summary)))
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    state.cache.ensure_fresh().await;
    Json(state.cache.articles_sorted().await)
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ArticleDetail>, WebError> {
    let article = fresh_article(&state, &id)
        .await
        .ok_or(WebError::ApiArticleNotFound(id))?;
    let summary = state.summarizer.summarize(Some(&article.content)).await;
    Ok(Json(ArticleDetail { article, summary }))
}

pub async fn not_found(uri: Uri) -> WebError {
    WebError::RouteNotFound(uri.path().to_string())
}
