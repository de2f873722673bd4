//! Consent gate state machine
//!
//! ## Table of Contents
//! - **ScrollLock**: seam to the page's scroll flag (a document-wide singleton)
//! - **ScrollGuard**: idempotent acquire/release handle, released on drop
//! - **GateState**: `Hidden | Shown`
//! - **ConsentGate**: state decided on mount, one transition on accept

use cookie::Cookie;

use crate::cookies::{self, GateCookies};

// -----------------------------------------------------------------------------
// Scroll lock
// -----------------------------------------------------------------------------

/// Toggles page scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

impl<L: ScrollLock + ?Sized> ScrollLock for &L {
    fn lock(&self) {
        (**self).lock();
    }

    fn unlock(&self) {
        (**self).unlock();
    }
}

/// Owns the scroll lock while held. Acquiring twice locks once, and the
/// lock is released on drop if still held.
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
    held: bool,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn new(lock: L) -> Self {
        Self { lock, held: false }
    }

    pub fn acquire(&mut self) {
        if !self.held {
            self.lock.lock();
            self.held = true;
        }
    }

    pub fn release(&mut self) {
        if self.held {
            self.lock.unlock();
            self.held = false;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.release();
    }
}

// -----------------------------------------------------------------------------
// Gate
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Hidden,
    Shown,
}

/// Full-screen age acknowledgement for one page load.
#[derive(Debug)]
pub struct ConsentGate<L: ScrollLock> {
    state: GateState,
    required_age: u8,
    region: String,
    scroll: ScrollGuard<L>,
}

impl<L: ScrollLock> ConsentGate<L> {
    /// Decide the initial state from persisted cookies. A prior acceptance
    /// keeps the gate hidden for the rest of the page load.
    pub fn mount(cookies: GateCookies, lock: L) -> Self {
        let mut gate = Self {
            state: GateState::Hidden,
            required_age: cookies.required_age,
            region: cookies.region,
            scroll: ScrollGuard::new(lock),
        };

        if !cookies.accepted {
            gate.show();
        }

        tracing::debug!(
            required_age = gate.required_age,
            region = %gate.region,
            state = ?gate.state,
            "age gate mounted"
        );
        gate
    }

    fn show(&mut self) {
        self.state = GateState::Shown;
        self.scroll.acquire();
    }

    /// Record the visitor's acknowledgement. Returns the consent cookie to
    /// persist, or `None` if the gate was not showing.
    pub fn accept(&mut self) -> Option<Cookie<'static>> {
        if self.state != GateState::Shown {
            return None;
        }

        self.scroll.release();
        self.state = GateState::Hidden;
        tracing::debug!(required_age = self.required_age, "age gate accepted");
        Some(cookies::accepted_cookie())
    }

    /// Release the scroll lock without accepting, e.g. on unmount.
    pub fn release(&mut self) {
        self.scroll.release();
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == GateState::Shown
    }

    pub fn required_age(&self) -> u8 {
        self.required_age
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn headline(&self) -> String {
        format!("{}+ Only", self.required_age)
    }

    pub fn accept_label(&self) -> String {
        format!("I'm {}+ — Enter", self.required_age)
    }

    pub fn notice(&self) -> String {
        let region = if self.region.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.region)
        };
        format!(
            "We create casino games exclusively for the Stake ecosystem. By entering, you confirm \
             you meet the legal gambling age for your location{region}."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts lock depth the way a document's overflow flag would see it.
    #[derive(Default)]
    struct FakeScroll {
        locks: Cell<u32>,
        unlocks: Cell<u32>,
    }

    impl FakeScroll {
        fn locked(&self) -> bool {
            self.locks.get() > self.unlocks.get()
        }
    }

    impl ScrollLock for FakeScroll {
        fn lock(&self) {
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    fn cookies(header: &str) -> GateCookies {
        GateCookies::parse(header)
    }

    #[test]
    fn test_guard_is_idempotent() {
        let scroll = FakeScroll::default();
        let mut guard = ScrollGuard::new(&scroll);
        guard.acquire();
        guard.acquire();
        assert_eq!(scroll.locks.get(), 1);

        guard.release();
        guard.release();
        assert_eq!(scroll.unlocks.get(), 1);
        assert!(!guard.is_held());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let scroll = FakeScroll::default();
        {
            let mut guard = ScrollGuard::new(&scroll);
            guard.acquire();
            assert!(scroll.locked());
        }
        assert!(!scroll.locked());
        assert_eq!(scroll.unlocks.get(), 1);
    }

    #[test]
    fn test_new_visitor_sees_gate() {
        let scroll = FakeScroll::default();
        let gate = ConsentGate::mount(cookies("required_age=21; region=US"), &scroll);
        assert_eq!(gate.state(), GateState::Shown);
        assert!(scroll.locked());
        assert_eq!(gate.headline(), "21+ Only");
        assert_eq!(gate.accept_label(), "I'm 21+ — Enter");
        assert!(gate.notice().ends_with("location (US)."));
    }

    #[test]
    fn test_prior_acceptance_skips_gate() {
        let scroll = FakeScroll::default();
        let gate = ConsentGate::mount(cookies("age_gate_accepted=1; required_age=21"), &scroll);
        assert_eq!(gate.state(), GateState::Hidden);
        drop(gate);
        assert_eq!(scroll.locks.get(), 0);
        assert_eq!(scroll.unlocks.get(), 0);
    }

    #[test]
    fn test_accept_persists_consent_and_unlocks() {
        let scroll = FakeScroll::default();
        let mut gate = ConsentGate::mount(cookies(""), &scroll);

        let cookie = gate.accept().expect("consent cookie");
        assert_eq!(cookie.name(), "age_gate_accepted");
        assert_eq!(cookie.value(), "1");
        assert_eq!(cookie.max_age(), Some(time::Duration::days(90)));
        assert_eq!(gate.state(), GateState::Hidden);
        assert!(!scroll.locked());

        assert!(gate.accept().is_none());
        drop(gate);
        assert_eq!(scroll.unlocks.get(), 1);
    }

    #[test]
    fn test_unmount_while_shown_restores_scroll() {
        let scroll = FakeScroll::default();
        let gate = ConsentGate::mount(cookies("required_age=19"), &scroll);
        assert!(scroll.locked());
        drop(gate);
        assert!(!scroll.locked());
    }

    #[test]
    fn test_explicit_release_then_drop_unlocks_once() {
        let scroll = FakeScroll::default();
        let mut gate = ConsentGate::mount(cookies(""), &scroll);
        gate.release();
        drop(gate);
        assert_eq!(scroll.unlocks.get(), 1);
    }

    #[test]
    fn test_defaults_without_cookies() {
        let scroll = FakeScroll::default();
        let gate = ConsentGate::mount(GateCookies::default(), &scroll);
        assert_eq!(gate.required_age(), 18);
        assert_eq!(gate.region(), "");
        assert!(gate.notice().ends_with("your location."));
    }
}
