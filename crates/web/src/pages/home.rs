// =============================================================================
// ZeroEdge Web - Home Page
// =============================================================================
// Live games and the latest news
// =============================================================================

use leptos::prelude::*;

use crate::api::{self, ApiClient, Game, GameStatus, NewsPost};
use crate::components::{ErrorDisplay, Footer, GameCard, LoadingSpinner, SiteNav};
use crate::state::AppState;

const LATEST_NEWS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let games = RwSignal::new(Vec::<Game>::new());
    let posts = RwSignal::new(Vec::<NewsPost>::new());
    let is_loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);

            match api::get_games(&client, Some(GameStatus::Live)).await {
                Ok(list) => games.set(list),
                Err(e) => error_message.set(Some(format!("Failed to load games: {}", e))),
            }

            match api::get_news(&client, Some(LATEST_NEWS)).await {
                Ok(list) => posts.set(list),
                Err(e) => log::warn!("Failed to fetch news: {:?}", e),
            }

            is_loading.set(false);
        });
    });

    view! {
        <div class="page page-home">
            <SiteNav active="home" />

            <section class="hero">
                <h1 class="hero-title">"ZeroEdge Studios"</h1>
                <p class="hero-subtitle">"Original casino games, built for Stake."</p>
                <a href="/games" class="btn btn-primary">"Explore Games"</a>
            </section>

            <section class="section">
                <h2 class="section-title">"Live Now"</h2>
                {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
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

            <section class="section">
                <h2 class="section-title">"Latest News"</h2>
                <div class="news-grid">
                    <For
                        each=move || posts.get()
                        key=|post| post.slug.clone()
                        children=|post| {
                            let href = format!("/news/{}", post.slug);
                            view! {
                                <a href=href class="news-card">
                                    <span class="news-date">{post.display_date()}</span>
                                    <h3>{post.title.clone()}</h3>
                                    <p>{post.excerpt.clone()}</p>
                                </a>
                            }
                        }
                    />
                </div>
            </section>

            <Footer />
        </div>
    }
}
