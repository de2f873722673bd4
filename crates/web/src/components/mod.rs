// =============================================================================
// ZeroEdge Web - UI Components
// =============================================================================

pub mod age_gate;
pub mod common;
pub mod footer;
pub mod forms;
pub mod game_card;
pub mod nav;

pub use age_gate::AgeGate;
pub use common::{ErrorDisplay, LoadingSpinner};
pub use footer::Footer;
pub use forms::{HoneypotField, TextArea, TextInput};
pub use game_card::GameCard;
pub use nav::SiteNav;
