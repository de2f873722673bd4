// =============================================================================
// ZeroEdge Web - News Pages
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{self, ApiClient, ApiError, NewsPost};
use crate::components::{ErrorDisplay, Footer, LoadingSpinner, SiteNav};
use crate::pages::NotFoundPage;
use crate::state::AppState;

/// Published posts, newest first.
#[component]
pub fn NewsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let posts = RwSignal::new(Vec::<NewsPost>::new());
    let is_loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);
            match api::get_news(&client, None).await {
                Ok(list) => posts.set(list),
                Err(e) => error_message.set(Some(format!("Failed to load news: {}", e))),
            }
            is_loading.set(false);
        });
    });

    view! {
        <div class="page page-news">
            <SiteNav active="news" />

            <section class="section">
                <h1 class="page-title">"News"</h1>
                {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <div class="news-list">
                        <For
                            each=move || posts.get()
                            key=|post| post.slug.clone()
                            children=|post| {
                                let href = format!("/news/{}", post.slug);
                                view! {
                                    <a href=href class="news-card wide">
                                        <img src=post.cover.clone() alt="" class="news-cover" loading="lazy" />
                                        <div class="news-card-body">
                                            <span class="news-date">{post.display_date()}</span>
                                            <h2>{post.title.clone()}</h2>
                                            <p>{post.excerpt.clone()}</p>
                                        </div>
                                    </a>
                                }
                            }
                        />
                    </div>
                </Show>
            </section>

            <Footer />
        </div>
    }
}

/// Single post via /news/:slug. The body is trusted HTML from the back office.
#[component]
pub fn NewsPostPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let post = RwSignal::new(Option::<Result<NewsPost, ApiError>>::None);

    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let slug = slug();
        let api_url = api_url.clone();
        post.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);
            post.set(Some(api::get_news_post(&client, &slug).await));
        });
    });

    move || match post.get() {
        None => view! {
            <div class="page page-news-post">
                <SiteNav active="news" />
                <LoadingSpinner />
            </div>
        }
        .into_any(),
        Some(Err(ApiError::NotFound)) => view! { <NotFoundPage /> }.into_any(),
        Some(Err(e)) => view! {
            <div class="page page-news-post">
                <SiteNav active="news" />
                <ErrorDisplay message=e.to_string() />
                <Footer />
            </div>
        }
        .into_any(),
        Some(Ok(post)) => view! {
            <div class="page page-news-post">
                <SiteNav active="news" />
                <article class="section news-article">
                    <img src=post.cover.clone() alt="" class="news-hero" />
                    <span class="news-date">{post.display_date()}" · "{post.author.clone()}</span>
                    <h1 class="page-title">{post.title.clone()}</h1>
                    <div class="news-body" inner_html=post.content_html.clone()></div>
                    <a href="/news" class="btn btn-ghost">"← All News"</a>
                </article>
                <Footer />
            </div>
        }
        .into_any(),
    }
}
