// =============================================================================
// ZeroEdge Backend - In-Memory Site Store
// =============================================================================
// Table of Contents:
// 1. Models
// 2. Store Errors
// 3. SiteStore (games, news, partners, messages)
// 4. Validation
// =============================================================================
//
// Seeded from the JSON fixtures under `data/`. Mutations live for the
// process lifetime only.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

const GAMES_FIXTURE: &str = include_str!("../data/games.json");
const NEWS_FIXTURE: &str = include_str!("../data/news.json");
const PARTNERS_FIXTURE: &str = include_str!("../data/partners.json");
const MESSAGES_FIXTURE: &str = include_str!("../data/messages.json");

// -----------------------------------------------------------------------------
// 1. Models
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Live,
    ComingSoon,
}

/// Game catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    /// CSS background position for the thumbnail (e.g. "25%", "top")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_y_position: Option<String>,
}

/// News post. The body is editor-produced HTML and is not interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub cover: String,
    pub content_html: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_author() -> String {
    "Admin".to_string()
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub logo: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
    Archived,
}

/// Inbox entry from the contact or careers form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated visitor input for a new inbox entry.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub games_live: usize,
    pub games_coming_soon: usize,
    pub news_published: usize,
    pub news_drafts: usize,
    pub messages_unread: usize,
    pub messages_read: usize,
    pub messages_replied: usize,
    pub messages_archived: usize,
}

// -----------------------------------------------------------------------------
// 2. Store Errors
// -----------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("{kind} already exists: {key}")]
    Duplicate { kind: &'static str, key: String },

    #[error("{0}")]
    Invalid(String),
}

impl StoreError {
    fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    fn duplicate(kind: &'static str, key: impl ToString) -> Self {
        Self::Duplicate {
            kind,
            key: key.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. SiteStore
// -----------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Inner {
    games: Vec<Game>,
    news: Vec<NewsPost>,
    partners: Vec<Partner>,
    messages: Vec<Message>,
    next_message_id: u64,
}

/// Shared handle to the site's content. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SiteStore {
    inner: Arc<RwLock<Inner>>,
}

impl SiteStore {
    /// Store seeded from the bundled fixtures.
    pub fn from_fixtures() -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::from_str(GAMES_FIXTURE)?,
            serde_json::from_str(NEWS_FIXTURE)?,
            serde_json::from_str(PARTNERS_FIXTURE)?,
            serde_json::from_str(MESSAGES_FIXTURE)?,
        ))
    }

    pub fn new(
        games: Vec<Game>,
        news: Vec<NewsPost>,
        partners: Vec<Partner>,
        messages: Vec<Message>,
    ) -> Self {
        let next_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner {
                games,
                news,
                partners,
                messages,
                next_message_id,
            })),
        }
    }

    // --- Games ---------------------------------------------------------------

    /// Games in catalogue order, optionally filtered by status.
    pub fn games(&self, status: Option<GameStatus>) -> Vec<Game> {
        self.inner
            .read()
            .games
            .iter()
            .filter(|g| status.map_or(true, |s| g.status == s))
            .cloned()
            .collect()
    }

    pub fn game(&self, slug: &str) -> Option<Game> {
        self.inner.read().games.iter().find(|g| g.slug == slug).cloned()
    }

    /// Other games ranked by the number of mechanics shared with `slug`.
    /// Ties keep catalogue order. Unknown slugs have no relations.
    pub fn related_games(&self, slug: &str, limit: usize) -> Vec<Game> {
        let inner = self.inner.read();
        let Some(current) = inner.games.iter().find(|g| g.slug == slug) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, &Game)> = inner
            .games
            .iter()
            .filter(|g| g.slug != slug)
            .map(|g| {
                let shared = g.mechanics.iter().filter(|m| current.mechanics.contains(m)).count();
                (shared, g)
            })
            .collect();
        scored.sort_by_key(|(shared, _)| Reverse(*shared));

        scored.into_iter().take(limit).map(|(_, g)| g.clone()).collect()
    }

    pub fn create_game(&self, game: Game) -> Result<Game, StoreError> {
        validate_slug(&game.slug)?;
        validate_title(&game.title)?;

        let mut inner = self.inner.write();
        if inner.games.iter().any(|g| g.slug == game.slug) {
            return Err(StoreError::duplicate("game", &game.slug));
        }
        inner.games.push(game.clone());
        tracing::info!(slug = %game.slug, "game created");
        Ok(game)
    }

    /// Replace a game. The slug may change as long as it stays unique.
    pub fn update_game(&self, slug: &str, game: Game) -> Result<Game, StoreError> {
        validate_slug(&game.slug)?;
        validate_title(&game.title)?;

        let mut inner = self.inner.write();
        if game.slug != slug && inner.games.iter().any(|g| g.slug == game.slug) {
            return Err(StoreError::duplicate("game", &game.slug));
        }
        let existing = inner
            .games
            .iter_mut()
            .find(|g| g.slug == slug)
            .ok_or_else(|| StoreError::not_found("game", slug))?;
        *existing = game.clone();
        tracing::info!(slug, new_slug = %game.slug, "game updated");
        Ok(game)
    }

    pub fn delete_game(&self, slug: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let before = inner.games.len();
        inner.games.retain(|g| g.slug != slug);
        if inner.games.len() == before {
            return Err(StoreError::not_found("game", slug));
        }
        tracing::info!(slug, "game deleted");
        Ok(())
    }

    // --- News ----------------------------------------------------------------

    /// Posts newest first. Drafts are included only when asked for; `query`
    /// matches title or excerpt case-insensitively.
    pub fn news(&self, include_drafts: bool, query: Option<&str>, limit: Option<usize>) -> Vec<NewsPost> {
        let query = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);

        let mut posts: Vec<NewsPost> = self
            .inner
            .read()
            .news
            .iter()
            .filter(|p| include_drafts || p.published)
            .filter(|p| {
                query.as_deref().map_or(true, |q| {
                    p.title.to_lowercase().contains(q) || p.excerpt.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        posts.sort_by_key(|p| Reverse(p.date));

        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        posts
    }

    pub fn news_post(&self, slug: &str, include_drafts: bool) -> Option<NewsPost> {
        self.inner
            .read()
            .news
            .iter()
            .find(|p| p.slug == slug && (include_drafts || p.published))
            .cloned()
    }

    pub fn create_news(&self, post: NewsPost) -> Result<NewsPost, StoreError> {
        validate_slug(&post.slug)?;
        validate_title(&post.title)?;

        let mut inner = self.inner.write();
        if inner.news.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::duplicate("news post", &post.slug));
        }
        inner.news.push(post.clone());
        tracing::info!(slug = %post.slug, published = post.published, "news post created");
        Ok(post)
    }

    pub fn update_news(&self, slug: &str, post: NewsPost) -> Result<NewsPost, StoreError> {
        validate_slug(&post.slug)?;
        validate_title(&post.title)?;

        let mut inner = self.inner.write();
        if post.slug != slug && inner.news.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::duplicate("news post", &post.slug));
        }
        let existing = inner
            .news
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| StoreError::not_found("news post", slug))?;
        *existing = post.clone();
        tracing::info!(slug, new_slug = %post.slug, "news post updated");
        Ok(post)
    }

    pub fn delete_news(&self, slug: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let before = inner.news.len();
        inner.news.retain(|p| p.slug != slug);
        if inner.news.len() == before {
            return Err(StoreError::not_found("news post", slug));
        }
        tracing::info!(slug, "news post deleted");
        Ok(())
    }

    // --- Partners ------------------------------------------------------------

    pub fn partners(&self) -> Vec<Partner> {
        self.inner.read().partners.clone()
    }

    // --- Messages ------------------------------------------------------------

    /// Messages newest first, filtered by status and a name/email/subject search.
    pub fn messages(&self, status: Option<MessageStatus>, query: Option<&str>) -> Vec<Message> {
        let query = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);

        let mut messages: Vec<Message> = self
            .inner
            .read()
            .messages
            .iter()
            .filter(|m| status.map_or(true, |s| m.status == s))
            .filter(|m| {
                query.as_deref().map_or(true, |q| {
                    m.name.to_lowercase().contains(q)
                        || m.email.to_lowercase().contains(q)
                        || m.subject.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        messages.sort_by_key(|m| Reverse(m.created_at));
        messages
    }

    pub fn message(&self, id: u64) -> Option<Message> {
        self.inner.read().messages.iter().find(|m| m.id == id).cloned()
    }

    pub fn add_message(&self, new: NewMessage) -> Message {
        let mut inner = self.inner.write();
        let id = inner.next_message_id;
        inner.next_message_id += 1;

        let message = Message {
            id,
            name: new.name.trim().to_string(),
            email: new.email.trim().to_string(),
            phone: new.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
            company: new.company.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            subject: new.subject.trim().to_string(),
            message: new.message.trim().to_string(),
            status: MessageStatus::Unread,
            created_at: Utc::now(),
        };
        inner.messages.push(message.clone());
        tracing::info!(id, "contact message received");
        message
    }

    pub fn set_message_status(&self, id: u64, status: MessageStatus) -> Result<Message, StoreError> {
        let mut inner = self.inner.write();
        let message = inner
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("message", id))?;
        message.status = status;
        Ok(message.clone())
    }

    pub fn delete_message(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);
        if inner.messages.len() == before {
            return Err(StoreError::not_found("message", id));
        }
        Ok(())
    }

    // --- Stats ---------------------------------------------------------------

    pub fn stats(&self) -> SiteStats {
        let inner = self.inner.read();
        let mut stats = SiteStats::default();

        for game in &inner.games {
            match game.status {
                GameStatus::Live => stats.games_live += 1,
                GameStatus::ComingSoon => stats.games_coming_soon += 1,
            }
        }
        for post in &inner.news {
            if post.published {
                stats.news_published += 1;
            } else {
                stats.news_drafts += 1;
            }
        }
        for message in &inner.messages {
            match message.status {
                MessageStatus::Unread => stats.messages_unread += 1,
                MessageStatus::Read => stats.messages_read += 1,
                MessageStatus::Replied => stats.messages_replied += 1,
                MessageStatus::Archived => stats.messages_archived += 1,
            }
        }
        stats
    }
}

// -----------------------------------------------------------------------------
// 4. Validation
// -----------------------------------------------------------------------------

/// Slugs are URL segments: lowercase ASCII letters, digits and dashes.
fn validate_slug(slug: &str) -> Result<(), StoreError> {
    let valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::Invalid(format!("invalid slug: {:?}", slug)))
    }
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        Err(StoreError::Invalid("title is required".into()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SiteStore {
        SiteStore::from_fixtures().expect("fixtures parse")
    }

    fn sample_game(slug: &str, mechanics: &[&str]) -> Game {
        Game {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            tagline: String::new(),
            thumb: String::new(),
            hero: String::new(),
            status: GameStatus::Live,
            mechanics: mechanics.iter().map(|m| m.to_string()).collect(),
            rtp_range: "96%".into(),
            volatility: "Medium".into(),
            max_win: "1,000x".into(),
            features: Vec::new(),
            demo_url: String::new(),
            presskit: String::new(),
            thumb_y_position: None,
        }
    }

    #[test]
    fn test_fixtures_load() {
        let store = store();
        assert!(store.game("midnight-prowl").is_some());
        assert_eq!(store.partners().len(), 2);
        assert_eq!(store.messages(None, None).len(), 4);
    }

    #[test]
    fn test_games_filter_by_status() {
        let store = store();
        let live = store.games(Some(GameStatus::Live));
        assert!(!live.is_empty());
        assert!(live.iter().all(|g| g.status == GameStatus::Live));
        let soon = store.games(Some(GameStatus::ComingSoon));
        assert_eq!(live.len() + soon.len(), store.games(None).len());
    }

    #[test]
    fn test_related_games_rank_by_shared_mechanics() {
        let store = SiteStore::new(
            vec![
                sample_game("a", &["cascades", "free-spins"]),
                sample_game("b", &["ways"]),
                sample_game("c", &["cascades"]),
                sample_game("d", &["cascades", "free-spins", "ways"]),
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let related: Vec<String> = store.related_games("a", 3).into_iter().map(|g| g.slug).collect();
        assert_eq!(related, vec!["d", "c", "b"]);
        assert_eq!(store.related_games("a", 1).len(), 1);
        assert!(store.related_games("missing", 3).is_empty());
    }

    #[test]
    fn test_game_crud() {
        let store = store();
        store.create_game(sample_game("new-game", &[])).unwrap();
        assert!(matches!(
            store.create_game(sample_game("new-game", &[])),
            Err(StoreError::Duplicate { .. })
        ));

        let renamed = sample_game("renamed-game", &[]);
        store.update_game("new-game", renamed).unwrap();
        assert!(store.game("new-game").is_none());
        assert!(store.game("renamed-game").is_some());

        assert!(matches!(
            store.update_game("renamed-game", sample_game("midnight-prowl", &[])),
            Err(StoreError::Duplicate { .. })
        ));

        store.delete_game("renamed-game").unwrap();
        assert!(matches!(store.delete_game("renamed-game"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_game_validation() {
        let store = store();
        assert!(matches!(store.create_game(sample_game("", &[])), Err(StoreError::Invalid(_))));
        assert!(matches!(store.create_game(sample_game("Bad Slug", &[])), Err(StoreError::Invalid(_))));

        let mut untitled = sample_game("untitled", &[]);
        untitled.title = "  ".into();
        assert!(matches!(store.create_game(untitled), Err(StoreError::Invalid(_))));
    }

    #[test]
    fn test_news_ordering_and_drafts() {
        let store = store();
        let public = store.news(false, None, None);
        assert!(public.iter().all(|p| p.published));
        assert!(public.windows(2).all(|w| w[0].date >= w[1].date));

        let all = store.news(true, None, None);
        assert!(all.len() > public.len());
        assert!(store.news_post("partnership-announcement", false).is_none());
        assert!(store.news_post("partnership-announcement", true).is_some());

        assert_eq!(store.news(false, None, Some(1)).len(), 1);
        assert_eq!(store.news(true, Some("MIDNIGHT"), None).len(), 1);
    }

    #[test]
    fn test_messages_lifecycle() {
        let store = store();
        let message = store.add_message(NewMessage {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            phone: Some("  ".into()),
            company: Some(" ZeroEdge ".into()),
            subject: "Hello".into(),
            message: "Hi there".into(),
        });
        assert_eq!(message.id, 5);
        assert_eq!(message.name, "Ada");
        assert_eq!(message.phone, None);
        assert_eq!(message.company.as_deref(), Some("ZeroEdge"));
        assert_eq!(message.status, MessageStatus::Unread);

        // Newest first
        assert_eq!(store.messages(None, None)[0].id, 5);
        assert_eq!(store.messages(Some(MessageStatus::Unread), None).len(), 2);
        assert_eq!(store.messages(None, Some("sarah")).len(), 1);

        store.set_message_status(5, MessageStatus::Replied).unwrap();
        assert_eq!(store.message(5).unwrap().status, MessageStatus::Replied);

        store.delete_message(5).unwrap();
        assert!(store.message(5).is_none());
        assert!(matches!(
            store.set_message_status(5, MessageStatus::Read),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_stats() {
        let stats = store().stats();
        assert_eq!(stats.games_live, 2);
        assert_eq!(stats.games_coming_soon, 2);
        assert_eq!(stats.news_published, 2);
        assert_eq!(stats.news_drafts, 1);
        assert_eq!(
            stats.messages_unread + stats.messages_read + stats.messages_replied + stats.messages_archived,
            4
        );
    }
}
