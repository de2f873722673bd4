// =============================================================================
// ZeroEdge Web - Site Navigation
// =============================================================================

use leptos::prelude::*;

const LINKS: &[(&str, &str, &str)] = &[
    ("home", "/", "Home"),
    ("games", "/games", "Games"),
    ("news", "/news", "News"),
    ("about", "/about", "About"),
    ("careers", "/careers", "Careers"),
    ("contact", "/contact", "Contact"),
];

/// Top navigation bar.
///
/// # Arguments
/// * `active` - Key of the current page (e.g. "home", "games")
#[component]
pub fn SiteNav(#[prop(optional, into)] active: String) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let links = LINKS
        .iter()
        .map(|(key, href, label)| {
            let class = if *key == active { "nav-link active" } else { "nav-link" };
            view! {
                <a href=*href class=class on:click=move |_| menu_open.set(false)>
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="site-nav">
            <a href="/" class="nav-logo">
                <img src="/assets/logo.svg" alt="ZeroEdge Studios" />
            </a>
            <button
                class="nav-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="nav-links" class:open=move || menu_open.get()>
                {links}
            </div>
        </nav>
    }
}
