// =============================================================================
// ZeroEdge Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::AgeGate;
use crate::pages::{
    AboutPage, CareersPage, ContactPage, GameDetailPage, GamesPage, HomePage, LegalPage, NewsPage,
    NewsPostPage, NotFoundPage,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::new());

    view! {
        // Mounted once, outside the routes, so navigation never re-shows it
        <AgeGate />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/games") view=GamesPage />
                <Route path=path!("/games/:slug") view=GameDetailPage />
                <Route path=path!("/news") view=NewsPage />
                <Route path=path!("/news/:slug") view=NewsPostPage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/careers") view=CareersPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/legal") view=LegalPage />
            </Routes>
        </Router>
    }
}
