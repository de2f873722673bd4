// =============================================================================
// ZeroEdge Web - About Page
// =============================================================================
// Studio blurb and partners
// =============================================================================

use leptos::prelude::*;

use crate::api::{self, ApiClient, Partner};
use crate::components::{Footer, SiteNav};
use crate::state::AppState;

#[component]
pub fn AboutPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let partners = RwSignal::new(Vec::<Partner>::new());
    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_partners(&ApiClient::new(&api_url)).await {
                Ok(list) => partners.set(list),
                Err(e) => log::warn!("Failed to fetch partners: {:?}", e),
            }
        });
    });

    view! {
        <div class="page page-about">
            <SiteNav active="about" />

            <section class="section">
                <h1 class="page-title">"About ZeroEdge"</h1>
                <p>
                    "ZeroEdge Studios designs and builds casino games exclusively for the Stake "
                    "ecosystem. Every title ships on Stake Engine with published RTP and volatility."
                </p>
                <p>
                    "Our games are intended for adults of legal gambling age in their jurisdiction. "
                    "If gambling stops being fun, take a break and visit our "
                    <a href="/legal">"responsible gaming"</a>
                    " page."
                </p>
            </section>

            <section class="section">
                <h2 class="section-title">"Partners"</h2>
                <div class="partner-row">
                    <For
                        each=move || partners.get()
                        key=|partner| partner.name.clone()
                        children=|partner| view! {
                            <a href=partner.link.clone() target="_blank" rel="noopener" class="partner-logo">
                                <img src=partner.logo.clone() alt=partner.name.clone() />
                            </a>
                        }
                    />
                </div>
            </section>

            <section class="section about-cta">
                <h2 class="section-title">"Work With Us"</h2>
                <div class="cta-row">
                    <a href="/contact" class="btn btn-primary">"Get in Touch"</a>
                    <a href="/careers" class="btn btn-ghost">"Open Positions"</a>
                </div>
            </section>

            <Footer />
        </div>
    }
}
