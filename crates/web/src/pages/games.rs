// =============================================================================
// ZeroEdge Web - Games Page
// =============================================================================

use leptos::prelude::*;

use crate::api::{self, ApiClient, Game, GameStatus};
use crate::components::{ErrorDisplay, Footer, GameCard, LoadingSpinner, SiteNav};
use crate::state::AppState;

/// Full catalogue with a status filter.
#[component]
pub fn GamesPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let filter = RwSignal::new(Option::<GameStatus>::None);
    let games = RwSignal::new(Vec::<Game>::new());
    let is_loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    // Re-fetch when the filter changes
    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let status = filter.get();
        let api_url = api_url.clone();
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);
            match api::get_games(&client, status).await {
                Ok(list) => {
                    games.set(list);
                    error_message.set(None);
                }
                Err(e) => error_message.set(Some(format!("Failed to load games: {}", e))),
            }
            is_loading.set(false);
        });
    });

    let filter_button = move |label: &'static str, status: Option<GameStatus>| {
        view! {
            <button
                class="filter-btn"
                class:active=move || filter.get() == status
                on:click=move |_| filter.set(status)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page page-games">
            <SiteNav active="games" />

            <section class="section">
                <h1 class="page-title">"Our Games"</h1>
                <div class="filter-bar">
                    {filter_button("All", None)}
                    {filter_button("Live", Some(GameStatus::Live))}
                    {filter_button("Coming Soon", Some(GameStatus::ComingSoon))}
                </div>

                {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}

                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading games..." /> }
                >
                    <div class="games-grid">
                        <For
                            each=move || games.get()
                            key=|game| game.slug.clone()
                            children=|game| view! { <GameCard game=game /> }
                        />
                    </div>
                </Show>
            </section>

            <Footer />
        </div>
    }
}
