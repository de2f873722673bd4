// =============================================================================
// ZeroEdge Backend - Site Server Entry Point
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Application State
// 3. Main Entry Point
// 4. Router Setup
// =============================================================================

mod admin;
mod catalog;
mod config;
mod error;
mod geo_gate;
mod inbox;
mod redirects;
mod store;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::store::SiteStore;

// -----------------------------------------------------------------------------
// 2. Application State
// -----------------------------------------------------------------------------

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: SiteStore,
}

// -----------------------------------------------------------------------------
// 3. Main Entry Point
// -----------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try current directory first, then crates/backend/
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("crates/backend/.env");
    }

    let config = Config::from_env()?;
    let bind_addr = config.bind_address.clone();

    if config.is_development() {
        tracing::warn!("running in development mode: ?age=dev bypass and geo override headers are enabled");
    } else if config.geo.trust_override_headers {
        tracing::warn!("geo override headers are trusted outside development; make sure the edge strips them");
    }
    if !config.site_dir.join("index.html").exists() {
        tracing::warn!(site_dir = %config.site_dir.display(), "site build not found; only the API will respond");
    }

    let store = SiteStore::from_fixtures()?;

    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("ZeroEdge site running on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// -----------------------------------------------------------------------------
// 4. Router Setup
// -----------------------------------------------------------------------------

fn api_router() -> Router<AppState> {
    Router::new()
        // Catalogue
        .route("/games", get(catalog::list_games))
        .route("/games/{slug}", get(catalog::get_game))
        .route("/games/{slug}/related", get(catalog::related_games))
        .route("/news", get(catalog::list_news))
        .route("/news/{slug}", get(catalog::get_news))
        .route("/partners", get(catalog::list_partners))
        // Public forms
        .route("/contact", post(inbox::submit_contact))
        .route("/careers", get(inbox::list_openings))
        .route("/careers/apply", post(inbox::submit_application))
        // Admin
        .route("/admin/stats", get(admin::stats))
        .route("/admin/games", post(admin::create_game))
        .route("/admin/games/{slug}", put(admin::update_game).delete(admin::delete_game))
        .route("/admin/news", get(admin::list_news).post(admin::create_news))
        .route("/admin/news/{slug}", put(admin::update_news).delete(admin::delete_news))
        .route("/admin/messages", get(admin::list_messages))
        .route(
            "/admin/messages/{id}",
            get(admin::get_message).delete(admin::delete_message),
        )
        .route("/admin/messages/{id}/status", put(admin::set_message_status))
        .fallback(|| async { ApiError::NotFound("no such endpoint".into()) })
}

pub(crate) fn create_router(state: AppState) -> Router {
    // Client-side routes resolve to index.html
    let site = ServeDir::new(&state.config.site_dir)
        .fallback(ServeFile::new(state.config.site_dir.join("index.html")));

    let mut router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api_router())
        .fallback_service(site)
        // Middleware (last added runs first)
        .layer(middleware::from_fn_with_state(state.clone(), geo_gate::geo_gate))
        .layer(middleware::from_fn(redirects::permanent_redirects))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
