// =============================================================================
// ZeroEdge Web - Browser Document Bindings
// =============================================================================
// The age gate reaches the page through two document-wide singletons: the
// cookie string and the body's overflow style. Both are touched only here.
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement};
use zeroedge_age_gate::{GateCookies, ScrollLock};

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Raw `document.cookie`, empty when unavailable.
pub fn read_cookie_header() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

/// Gate cookies as currently stored by the browser.
pub fn read_gate_cookies() -> GateCookies {
    GateCookies::parse(&read_cookie_header())
}

/// Store one `Set-Cookie` style string through `document.cookie`.
pub fn write_cookie(cookie: &str) {
    let Some(doc) = html_document() else {
        log::warn!("no document; cookie not written");
        return;
    };
    if let Err(err) = doc.set_cookie(cookie) {
        log::warn!("failed to write cookie: {:?}", err);
    }
}

// -----------------------------------------------------------------------------
// Scroll lock
// -----------------------------------------------------------------------------

/// Locks page scrolling via `body.style.overflow`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: Option<&str>) {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        let result = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("failed to update body overflow: {:?}", err);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow(Some("hidden"));
    }

    fn unlock(&self) {
        Self::set_overflow(None);
    }
}
