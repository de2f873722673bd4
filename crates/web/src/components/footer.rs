// =============================================================================
// ZeroEdge Web - Footer Component
// =============================================================================

use leptos::prelude::*;

/// Global footer shown on all pages.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <a href="/" class="footer-logo-link">
                        <img src="/assets/logo.svg" alt="ZeroEdge Studios" class="footer-logo-img" />
                    </a>
                    <p class="footer-tagline">"Casino games built for the Stake ecosystem."</p>
                </div>

                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Studio"</h5>
                        <a href="/games" class="footer-link">"Games"</a>
                        <a href="/news" class="footer-link">"News"</a>
                        <a href="/about" class="footer-link">"About"</a>
                        <a href="/careers" class="footer-link">"Careers"</a>
                        <a href="/contact" class="footer-link">"Contact"</a>
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Legal"</h5>
                        <a href="/legal" class="footer-link">"Responsible Gaming"</a>
                        <a href="https://www.begambleaware.org" target="_blank" rel="noopener" class="footer-link">
                            "BeGambleAware"
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">"© 2025 ZeroEdge Studios. All rights reserved."</p>
                <p class="footer-age-notice">"18+ | Play responsibly"</p>
            </div>
        </footer>
    }
}
