// =============================================================================
// ZeroEdge Web - Page Components
// =============================================================================

pub mod about;
pub mod careers;
pub mod contact;
pub mod game_detail;
pub mod games;
pub mod home;
pub mod legal;
pub mod news;
pub mod not_found;

pub use about::AboutPage;
pub use careers::CareersPage;
pub use contact::ContactPage;
pub use game_detail::GameDetailPage;
pub use games::GamesPage;
pub use home::HomePage;
pub use legal::LegalPage;
pub use news::{NewsPage, NewsPostPage};
pub use not_found::NotFoundPage;
