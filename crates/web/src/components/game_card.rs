// =============================================================================
// ZeroEdge Web - Game Card
// =============================================================================

use leptos::prelude::*;

use crate::api::{Game, GameStatus};

#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let href = format!("/games/{}", game.slug);
    let badge_class = match game.status {
        GameStatus::Live => "game-badge live",
        GameStatus::ComingSoon => "game-badge soon",
    };
    let thumb_style = game.thumb_style();

    view! {
        <a href=href class="game-card">
            <div class="game-card-thumb">
                <img src=game.thumb.clone() alt=game.title.clone() style=thumb_style loading="lazy" />
                <span class=badge_class>{game.status.label()}</span>
            </div>
            <div class="game-card-body">
                <h3 class="game-card-title">{game.title.clone()}</h3>
                <p class="game-card-tagline">{game.tagline.clone()}</p>
            </div>
        </a>
    }
}
