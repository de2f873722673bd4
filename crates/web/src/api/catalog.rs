// =============================================================================
// ZeroEdge Web - Catalogue API
// =============================================================================
// Games, news, partners and contact, mirroring the server's JSON envelopes.
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Live,
    ComingSoon,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Live => "Live",
            GameStatus::ComingSoon => "Coming Soon",
        }
    }

    fn query(&self) -> &'static str {
        match self {
            GameStatus::Live => "live",
            GameStatus::ComingSoon => "coming-soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub thumb: String,
    pub hero: String,
    pub status: GameStatus,
    pub mechanics: Vec<String>,
    pub rtp_range: String,
    pub volatility: String,
    pub max_win: String,
    pub features: Vec<String>,
    pub demo_url: String,
    pub presskit: String,
    #[serde(default)]
    pub thumb_y_position: Option<String>,
}

impl Game {
    /// Inline style positioning the thumbnail crop.
    pub fn thumb_style(&self) -> String {
        format!(
            "object-position: center {}",
            self.thumb_y_position.as_deref().unwrap_or("50%")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsPost {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub cover: String,
    pub content_html: String,
    pub author: String,
}

impl NewsPost {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Partner {
    pub name: String,
    pub logo: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub employment: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub email: String,
    pub position: String,
    pub linkedin: String,
    pub github: String,
    pub message: String,
    pub honeypot: String,
}

#[derive(Debug, Deserialize)]
struct GamesResponse {
    games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
struct GameResponse {
    game: Game,
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<NewsPost>,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    post: NewsPost,
}

#[derive(Debug, Deserialize)]
struct PartnersResponse {
    partners: Vec<Partner>,
}

#[derive(Debug, Deserialize)]
struct OpeningsResponse {
    openings: Vec<JobOpening>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: u64,
}

// -----------------------------------------------------------------------------
// Endpoints
// -----------------------------------------------------------------------------

fn games_endpoint(status: Option<GameStatus>) -> String {
    match status {
        Some(status) => format!("/games?status={}", status.query()),
        None => "/games".to_string(),
    }
}

pub async fn get_games(client: &ApiClient, status: Option<GameStatus>) -> Result<Vec<Game>, ApiError> {
    let response: GamesResponse = client.get(&games_endpoint(status)).await?;
    Ok(response.games)
}

pub async fn get_game(client: &ApiClient, slug: &str) -> Result<Game, ApiError> {
    let response: GameResponse = client.get(&format!("/games/{}", slug)).await?;
    Ok(response.game)
}

pub async fn get_related_games(client: &ApiClient, slug: &str, limit: usize) -> Result<Vec<Game>, ApiError> {
    let response: GamesResponse = client
        .get(&format!("/games/{}/related?limit={}", slug, limit))
        .await?;
    Ok(response.games)
}

pub async fn get_news(client: &ApiClient, limit: Option<usize>) -> Result<Vec<NewsPost>, ApiError> {
    let endpoint = match limit {
        Some(limit) => format!("/news?limit={}", limit),
        None => "/news".to_string(),
    };
    let response: PostsResponse = client.get(&endpoint).await?;
    Ok(response.posts)
}

pub async fn get_news_post(client: &ApiClient, slug: &str) -> Result<NewsPost, ApiError> {
    let response: PostResponse = client.get(&format!("/news/{}", slug)).await?;
    Ok(response.post)
}

pub async fn get_partners(client: &ApiClient) -> Result<Vec<Partner>, ApiError> {
    let response: PartnersResponse = client.get("/partners").await?;
    Ok(response.partners)
}

pub async fn submit_contact(client: &ApiClient, request: &ContactRequest) -> Result<SubmitResponse, ApiError> {
    client.post("/contact", request).await
}

pub async fn get_openings(client: &ApiClient) -> Result<Vec<JobOpening>, ApiError> {
    let response: OpeningsResponse = client.get("/careers").await?;
    Ok(response.openings)
}

pub async fn submit_application(
    client: &ApiClient,
    request: &ApplicationRequest,
) -> Result<SubmitResponse, ApiError> {
    client.post("/careers/apply", request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_endpoint() {
        assert_eq!(games_endpoint(None), "/games");
        assert_eq!(games_endpoint(Some(GameStatus::ComingSoon)), "/games?status=coming-soon");
    }

    #[test]
    fn test_game_envelope_decodes() {
        let body = r#"{"game":{"slug":"neon-drift","title":"Neon Drift","tagline":"t","thumb":"a","hero":"b",
            "status":"live","mechanics":["ways"],"rtp_range":"96%","volatility":"Medium","max_win":"5,000x",
            "features":[],"demo_url":"","presskit":""}}"#;
        let response: GameResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.game.status, GameStatus::Live);
        assert_eq!(response.game.thumb_style(), "object-position: center 50%");
    }

    #[test]
    fn test_news_display_date() {
        let post = NewsPost {
            slug: "s".into(),
            title: "t".into(),
            date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            excerpt: String::new(),
            cover: String::new(),
            content_html: String::new(),
            author: "Admin".into(),
        };
        assert_eq!(post.display_date(), "August 5, 2025");
    }

    #[test]
    fn test_openings_envelope_decodes() {
        let body = r#"{"openings":[{"id":"technical-artist","title":"Technical Artist","department":"Art",
            "type":"Full-time","location":"Remote","description":"d","requirements":["a","b"]}]}"#;
        let response: OpeningsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.openings[0].employment, "Full-time");
        assert_eq!(response.openings[0].requirements.len(), 2);
    }
}
