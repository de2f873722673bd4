// =============================================================================
// ZeroEdge Backend - Geo Age Middleware
// =============================================================================
// Table of Contents:
// 1. Route Filter
// 2. Visitor Locale Extraction
// 3. Middleware
// 4. Tests
// =============================================================================
//
// Runs on every page request. Resolves the visitor's required age from edge
// geo headers and keeps the `required_age` / `region` cookies current so the
// browser gate can read them. Never fails and never touches the body.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use zeroedge_age_gate::{
    cookies::{self, REGION_COOKIE, REQUIRED_AGE_COOKIE},
    GateResolution, VisitorLocale,
};

use crate::config::GeoConfig;
use crate::AppState;

/// Country override for local testing.
pub const OVERRIDE_COUNTRY_HEADER: &str = "x-vercel-ip-country";
/// Subdivision override for local testing.
pub const OVERRIDE_REGION_HEADER: &str = "x-vercel-ip-country-region";

// -----------------------------------------------------------------------------
// 1. Route Filter
// -----------------------------------------------------------------------------

/// File extensions served straight from the site build. Trunk emits the
/// hashed `.js`/`_bg.wasm` bundle at the dist root, outside any prefix.
const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    "js", "mjs", "wasm", "css", "map", "ico", "png", "jpg", "jpeg", "gif", "webp", "avif", "svg",
    "woff", "woff2", "ttf", "txt", "xml", "webmanifest", "zip",
];

fn is_static_asset(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty()
            && STATIC_ASSET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Whether the middleware handles `path`. Excluded prefixes are compared
/// against the path without its leading slash.
pub fn applies_to(path: &str, excluded_prefixes: &[String]) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    !is_static_asset(rest) && !excluded_prefixes.iter().any(|prefix| rest.starts_with(prefix.as_str()))
}

fn dev_bypass_requested(query: Option<&str>) -> bool {
    query
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "age" && value == "dev")
}

// -----------------------------------------------------------------------------
// 2. Visitor Locale Extraction
// -----------------------------------------------------------------------------

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Country and subdivision for a request. Edge-provided values win; the
/// override headers fill gaps only when trusted.
pub fn visitor_locale(headers: &HeaderMap, geo: &GeoConfig) -> VisitorLocale {
    let overrides = |name| {
        if geo.trust_override_headers {
            header(headers, name)
        } else {
            None
        }
    };

    let country = header(headers, &geo.country_header).or_else(|| overrides(OVERRIDE_COUNTRY_HEADER));
    let subdivision = header(headers, &geo.region_header).or_else(|| overrides(OVERRIDE_REGION_HEADER));

    VisitorLocale::new(country, subdivision)
}

/// Cookies to send so the client matches `resolution`. Values already held
/// by the client are not re-sent.
fn cookie_updates(jar: &CookieJar, resolution: &GateResolution) -> CookieJar {
    let current = |name| jar.get(name).map(|c| c.value().to_string());
    let mut updates = CookieJar::new();

    let age = resolution.required_age.to_string();
    if current(REQUIRED_AGE_COOKIE).as_deref() != Some(age.as_str()) {
        updates = updates.add(cookies::required_age_cookie(resolution.required_age));
    }
    if current(REGION_COOKIE).as_deref() != Some(resolution.region.as_str()) {
        updates = updates.add(cookies::region_cookie(&resolution.region));
    }
    updates
}

// -----------------------------------------------------------------------------
// 3. Middleware
// -----------------------------------------------------------------------------

/// Geo age middleware. The resolved [`GateResolution`] is also placed in the
/// request extensions for downstream handlers.
pub async fn geo_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let geo = &state.config.geo;
    if !applies_to(req.uri().path(), &geo.excluded_prefixes) {
        return next.run(req).await;
    }

    if state.config.is_development() && dev_bypass_requested(req.uri().query()) {
        tracing::info!(path = %req.uri().path(), "age gate dev bypass");
        let bypass = cookies::development_cookies()
            .into_iter()
            .fold(CookieJar::new(), |jar, cookie| jar.add(cookie));
        req.extensions_mut().insert(GateResolution::development());
        let response = next.run(req).await;
        return (bypass, response).into_response();
    }

    let locale = visitor_locale(req.headers(), geo);
    if !geo.trust_override_headers {
        let headers = req.headers_mut();
        headers.remove(OVERRIDE_COUNTRY_HEADER);
        headers.remove(OVERRIDE_REGION_HEADER);
    }

    let resolution = locale.resolve();
    let updates = cookie_updates(&jar, &resolution);
    tracing::debug!(
        country = locale.country(),
        subdivision = locale.subdivision(),
        required_age = resolution.required_age,
        region = %resolution.region,
        "resolved visitor age requirement"
    );

    req.extensions_mut().insert(resolution);
    let response = next.run(req).await;
    (updates, response).into_response()
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------
