// =============================================================================
// ZeroEdge Backend - Public Catalogue API
// =============================================================================
// Games, news and partners
// =============================================================================

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::GameStatus;
use crate::AppState;

const DEFAULT_RELATED_LIMIT: usize = 3;
const MAX_LIMIT: usize = 50;

// =============================================================================
// Request Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    pub status: Option<GameStatus>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

impl LimitQuery {
    fn capped(&self) -> Option<usize> {
        self.limit.map(|limit| limit.min(MAX_LIMIT))
    }
}

// =============================================================================
// Games
// =============================================================================

/// List games, optionally only `live` or `coming-soon`.
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GamesQuery>,
) -> Json<Value> {
    let games = state.store.games(query.status);
    Json(json!({ "games": games }))
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let game = state
        .store
        .game(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("game {}", slug)))?;
    Ok(Json(json!({ "game": game })))
}

/// Games sharing the most mechanics with `slug`.
pub async fn related_games(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Json<Value> {
    let limit = query.capped().unwrap_or(DEFAULT_RELATED_LIMIT);
    let games = state.store.related_games(&slug, limit);
    Json(json!({ "games": games }))
}

// =============================================================================
// News & Partners
// =============================================================================

/// Published posts, newest first.
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Json<Value> {
    let posts = state.store.news(false, None, query.capped());
    Json(json!({ "posts": posts }))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let post = state
        .store
        .news_post(&slug, false)
        .ok_or_else(|| ApiError::NotFound(format!("news post {}", slug)))?;
    Ok(Json(json!({ "post": post })))
}

pub async fn list_partners(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "partners": state.store.partners() }))
}
