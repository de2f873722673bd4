//! # ZeroEdge Age Gate
//!
//! Legal-age resolution and consent state shared by the edge server and the
//! browser frontend.
//!
//! ## Table of Contents
//! - **rules**: static country/region age table and the resolver
//! - **geo**: visitor locale composition from edge geo metadata
//! - **cookies**: cookie names, lifetimes and parsing (the wire format)
//! - **gate**: consent gate state machine and the scroll-lock guard
//!
//! ## Flow
//! ```text
//! request ─► VisitorLocale ─► resolve_required_age ─► required_age / region cookies
//!                                                            │
//!                               browser ◄────────────────────┘
//!                                  │
//!                    GateCookies ─► ConsentGate (Shown ─accept─► Hidden)
//!                                                        │
//!                                              age_gate_accepted cookie
//! ```

pub mod cookies;
pub mod gate;
pub mod geo;
pub mod rules;

pub use cookies::{
    GateCookies, ACCEPTED_COOKIE, ACCEPTED_TTL_DAYS, REGION_COOKIE, REQUIRED_AGE_COOKIE,
    RESOLUTION_TTL_DAYS,
};
pub use gate::{ConsentGate, GateState, ScrollGuard, ScrollLock};
pub use geo::{GateResolution, VisitorLocale};
pub use rules::{resolve_required_age, AgeRule, AgeRules, AGE_RULES, DEFAULT_REQUIRED_AGE};
