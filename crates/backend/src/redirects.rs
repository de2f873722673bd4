// =============================================================================
// ZeroEdge Backend - Permanent Redirects
// =============================================================================
// Renamed pages keep their old URLs working. Applied before routing and
// before the geo middleware.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// `(source, destination)` pairs, matched on the exact path.
pub const PERMANENT_REDIRECTS: &[(&str, &str)] = &[("/games/mysterious-night", "/games/midnight-prowl")];

pub fn redirect_target(path: &str) -> Option<&'static str> {
    PERMANENT_REDIRECTS
        .iter()
        .find(|(source, _)| *source == path)
        .map(|(_, destination)| *destination)
}

pub async fn permanent_redirects(req: Request, next: Next) -> Response {
    match redirect_target(req.uri().path()) {
        Some(destination) => Redirect::permanent(destination).into_response(),
        None => next.run(req).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_table() {
        assert_eq!(redirect_target("/games/mysterious-night"), Some("/games/midnight-prowl"));
        assert_eq!(redirect_target("/games/mysterious-night/extra"), None);
        assert_eq!(redirect_target("/games/midnight-prowl"), None);
    }
}
