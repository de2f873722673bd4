// =============================================================================
// ZeroEdge Web - Global Application State
// =============================================================================

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API base URL. Empty means same origin as the page.
    pub api_url: String,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        // The production site is served by the API server itself
        let environment = option_env!("ENVIRONMENT").unwrap_or("production");
        let api_url = if environment == "development" {
            "http://localhost:3000".to_string()
        } else {
            String::new()
        };

        Self { api_url }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
