// =============================================================================
// ZeroEdge Backend - Admin API
// =============================================================================
// Back-office CRUD over the in-memory store. These endpoints are mock
// surfaces for the admin screens and carry no authentication.
// =============================================================================

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::{Game, MessageStatus, NewsPost};
use crate::AppState;

// =============================================================================
// Request Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub status: Option<MessageStatus>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: MessageStatus,
}

// =============================================================================
// Dashboard
// =============================================================================

pub async fn stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "stats": state.store.stats() }))
}

// =============================================================================
// Games
// =============================================================================

pub async fn create_game(
    State(state): State<AppState>,
    Json(game): Json<Game>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let game = state.store.create_game(game)?;
    Ok((StatusCode::CREATED, Json(json!({ "game": game }))))
}

pub async fn update_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(game): Json<Game>,
) -> Result<Json<Value>, ApiError> {
    let game = state.store.update_game(&slug, game)?;
    Ok(Json(json!({ "game": game })))
}

pub async fn delete_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_game(&slug)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// News
// =============================================================================

/// All posts including drafts, newest first.
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Value> {
    let posts = state.store.news(true, query.q.as_deref(), None);
    Json(json!({ "posts": posts }))
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(post): Json<NewsPost>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let post = state.store.create_news(post)?;
    Ok((StatusCode::CREATED, Json(json!({ "post": post }))))
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(post): Json<NewsPost>,
) -> Result<Json<Value>, ApiError> {
    let post = state.store.update_news(&slug, post)?;
    Ok(Json(json!({ "post": post })))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_news(&slug)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Messages
// =============================================================================

pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Json<Value> {
    let messages = state.store.messages(query.status, query.q.as_deref());
    Json(json!({ "messages": messages }))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let message = state
        .store
        .message(id)
        .ok_or_else(|| ApiError::NotFound(format!("message {}", id)))?;
    Ok(Json(json!({ "message": message })))
}

pub async fn set_message_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Value>, ApiError> {
    let message = state.store.set_message_status(id, update.status)?;
    Ok(Json(json!({ "message": message })))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_message(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::create_router;
    use crate::store::SiteStore;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use axum::response::Response;
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> (Router, AppState) {
        let state = AppState {
            config: Arc::new(Config::from_lookup(|_| None).unwrap()),
            store: SiteStore::from_fixtures().unwrap(),
        };
        (create_router(state.clone()), state)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        app.clone().oneshot(request.unwrap()).await.unwrap()
    }

    async fn json_body(res: Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn game_json(slug: &str) -> Value {
        json!({
            "slug": slug,
            "title": "Test Game",
            "tagline": "A test",
            "thumb": "/t.webp",
            "hero": "/h.webp",
            "status": "coming-soon",
            "mechanics": ["cascades"],
            "rtp_range": "96%",
            "volatility": "Low",
            "max_win": "500x",
            "features": [],
            "demo_url": "",
            "presskit": ""
        })
    }

    #[tokio::test]
    async fn test_game_crud_roundtrip() {
        let (app, state) = test_app();

        let res = call(&app, Method::POST, "/api/admin/games", Some(game_json("test-game"))).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(state.store.game("test-game").is_some());

        let res = call(&app, Method::POST, "/api/admin/games", Some(game_json("test-game"))).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let res = call(&app, Method::PUT, "/api/admin/games/test-game", Some(game_json("test-game-2"))).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["game"]["slug"], "test-game-2");

        let res = call(&app, Method::DELETE, "/api/admin/games/test-game-2", None).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = call(&app, Method::DELETE, "/api/admin/games/test-game-2", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_game_is_bad_request() {
        let (app, _) = test_app();
        let res = call(&app, Method::POST, "/api/admin/games", Some(game_json("Not A Slug"))).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_news_includes_drafts() {
        let (app, _) = test_app();
        let body = json_body(call(&app, Method::GET, "/api/admin/news", None).await).await;
        let posts = body["posts"].as_array().unwrap();
        assert!(posts.iter().any(|p| p["published"] == false));

        let body = json_body(call(&app, Method::GET, "/api/admin/news?q=partnership", None).await).await;
        assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_draft_via_update() {
        let (app, state) = test_app();
        let mut post = serde_json::to_value(state.store.news_post("partnership-announcement", true).unwrap()).unwrap();
        post["published"] = json!(true);

        let res = call(&app, Method::PUT, "/api/admin/news/partnership-announcement", Some(post)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(state.store.news_post("partnership-announcement", false).is_some());
    }

    #[tokio::test]
    async fn test_message_status_flow() {
        let (app, state) = test_app();

        let body = json_body(call(&app, Method::GET, "/api/admin/messages?status=unread", None).await).await;
        let unread = body["messages"].as_array().unwrap();
        assert_eq!(unread.len(), 1);
        let id = unread[0]["id"].as_u64().unwrap();

        let res = call(
            &app,
            Method::PUT,
            &format!("/api/admin/messages/{}/status", id),
            Some(json!({ "status": "read" })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(state.store.message(id).unwrap().status, MessageStatus::Read);

        let res = call(&app, Method::DELETE, &format!("/api/admin/messages/{}", id), None).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let res = call(&app, Method::GET, &format!("/api/admin/messages/{}", id), None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats() {
        let (app, _) = test_app();
        let body = json_body(call(&app, Method::GET, "/api/admin/stats", None).await).await;
        assert_eq!(body["stats"]["games_live"], 2);
        assert_eq!(body["stats"]["news_drafts"], 1);
    }
}
