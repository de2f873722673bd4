// =============================================================================
// ZeroEdge Web - Age Gate Overlay
// =============================================================================
// Full-screen age acknowledgement. The server middleware has already written
// `required_age` and `region`; this component only reads them, locks page
// scroll while shown and persists `age_gate_accepted` on accept.
// =============================================================================

use leptos::prelude::*;
use zeroedge_age_gate::ConsentGate;

use crate::browser::{self, BodyScrollLock};

/// Age gate, mounted once at the app root.
#[component]
pub fn AgeGate() -> impl IntoView {
    let gate = ConsentGate::mount(browser::read_gate_cookies(), BodyScrollLock);
    let shown = RwSignal::new(gate.is_shown());

    let headline = gate.headline();
    let accept_label = gate.accept_label();
    let notice = gate.notice();

    let gate = StoredValue::new_local(gate);

    // Leaving the page while shown must give scrolling back
    on_cleanup(move || {
        gate.try_update_value(|gate| gate.release());
    });

    let on_accept = move |_| {
        if let Some(Some(cookie)) = gate.try_update_value(|gate| gate.accept()) {
            browser::write_cookie(&cookie.to_string());
        }
        shown.set(false);
    };

    view! {
        <Show when=move || shown.get()>
            <div
                class="age-gate-backdrop"
                role="dialog"
                aria-modal="true"
                aria-labelledby="age-gate-title"
            >
                <div class="age-gate-panel">
                    <img src="/assets/logo.svg" alt="ZeroEdge Studios" class="age-gate-logo" />
                    <h2 id="age-gate-title" class="age-gate-title">{headline.clone()}</h2>
                    <p class="age-gate-notice">{notice.clone()}</p>
                    <div class="age-gate-actions">
                        <button class="btn btn-primary" on:click=on_accept>
                            {accept_label.clone()}
                        </button>
                        <a href="/about" class="btn btn-ghost">"Learn More"</a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
