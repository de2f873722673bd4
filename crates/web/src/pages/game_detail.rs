// =============================================================================
// ZeroEdge Web - Game Detail Page
// =============================================================================
// Accessed via /games/:slug
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{self, ApiClient, ApiError, Game, GameStatus};
use crate::components::{ErrorDisplay, Footer, GameCard, LoadingSpinner, SiteNav};
use crate::pages::NotFoundPage;
use crate::state::AppState;

const RELATED_LIMIT: usize = 3;

#[derive(Clone, PartialEq)]
enum Loaded {
    Pending,
    Found(Game),
    Missing,
    Failed(String),
}

#[component]
pub fn GameDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let game = RwSignal::new(Loaded::Pending);
    let related = RwSignal::new(Vec::<Game>::new());

    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let slug = slug();
        let api_url = api_url.clone();
        game.set(Loaded::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);

            let loaded = match api::get_game(&client, &slug).await {
                Ok(found) => Loaded::Found(found),
                Err(ApiError::NotFound) => Loaded::Missing,
                Err(e) => Loaded::Failed(e.to_string()),
            };
            game.set(loaded);

            match api::get_related_games(&client, &slug, RELATED_LIMIT).await {
                Ok(list) => related.set(list),
                Err(e) => log::warn!("Failed to fetch related games: {:?}", e),
            }
        });
    });

    move || match game.get() {
        Loaded::Pending => view! {
            <div class="page page-game-detail">
                <SiteNav active="games" />
                <LoadingSpinner />
            </div>
        }
        .into_any(),
        Loaded::Missing => view! { <NotFoundPage /> }.into_any(),
        Loaded::Failed(message) => view! {
            <div class="page page-game-detail">
                <SiteNav active="games" />
                <ErrorDisplay message=message />
                <Footer />
            </div>
        }
        .into_any(),
        Loaded::Found(game) => view! {
            <div class="page page-game-detail">
                <SiteNav active="games" />
                <GameDetail game=game />
                <section class="section">
                    <h2 class="section-title">"You Might Also Like"</h2>
                    <div class="games-grid">
                        <For
                            each=move || related.get()
                            key=|game| game.slug.clone()
                            children=|game| view! { <GameCard game=game /> }
                        />
                    </div>
                </section>
                <Footer />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn GameDetail(game: Game) -> impl IntoView {
    let is_live = game.status == GameStatus::Live;
    let features = game
        .features
        .iter()
        .map(|feature| view! { <li>{feature.clone()}</li> })
        .collect_view();
    let mechanics = game
        .mechanics
        .iter()
        .map(|mechanic| view! { <span class="tag">{mechanic.clone()}</span> })
        .collect_view();

    view! {
        <section class="game-hero">
            <img src=game.hero.clone() alt=game.title.clone() class="game-hero-img" />
            <div class="game-hero-info">
                <span class="game-badge">{game.status.label()}</span>
                <h1 class="game-title">{game.title.clone()}</h1>
                <p class="game-tagline">{game.tagline.clone()}</p>
                <div class="game-actions">
                    {is_live.then(|| view! {
                        <a href=game.demo_url.clone() target="_blank" rel="noopener" class="btn btn-primary">
                            "Play on Stake"
                        </a>
                    })}
                    <a href=game.presskit.clone() class="btn btn-ghost">"Press Kit"</a>
                </div>
            </div>
        </section>

        <section class="section game-specs">
            <dl class="spec-list">
                <dt>"RTP"</dt>
                <dd>{game.rtp_range.clone()}</dd>
                <dt>"Volatility"</dt>
                <dd>{game.volatility.clone()}</dd>
                <dt>"Max Win"</dt>
                <dd>{game.max_win.clone()}</dd>
            </dl>
            <div class="tag-row">{mechanics}</div>
            <ul class="feature-list">{features}</ul>
        </section>
    }
}
