// =============================================================================
// ZeroEdge Web - Legal / Responsible Gaming Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{Footer, SiteNav};

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="page page-legal">
            <SiteNav />

            <section class="section legal-content">
                <h1 class="page-title">"Responsible Gaming"</h1>

                <h2>"Age requirements"</h2>
                <p>
                    "Access to this site is limited to visitors who meet the legal gambling age "
                    "where they live. That age is 18 in most jurisdictions, 19 in most Canadian "
                    "provinces, 20 in New Zealand and 21 in the United States."
                </p>

                <h2>"Our games"</h2>
                <p>
                    "ZeroEdge does not accept wagers. Our games are operated by Stake, which applies "
                    "its own licensing, verification and responsible gambling controls."
                </p>

                <h2>"Getting help"</h2>
                <ul>
                    <li><a href="https://www.begambleaware.org" target="_blank" rel="noopener">"BeGambleAware"</a></li>
                    <li><a href="https://www.gamblersanonymous.org" target="_blank" rel="noopener">"Gamblers Anonymous"</a></li>
                    <li><a href="https://www.ncpgambling.org" target="_blank" rel="noopener">"National Council on Problem Gambling"</a></li>
                </ul>

                <h2>"Cookies"</h2>
                <p>
                    "We store three cookies to run the age check: your required age and region, "
                    "kept for 14 days, and your acknowledgement, kept for 90 days."
                </p>
            </section>

            <Footer />
        </div>
    }
}
