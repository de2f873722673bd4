//! Visitor locale composition
//!
//! Edge platforms report the visitor's country and subdivision as separate
//! values. The age table keys overrides by the combined `"CC-SUB"` code, and
//! the `region` cookie carries whichever of the two forms is known.

use serde::{Deserialize, Serialize};

use crate::rules::{AgeRules, DEFAULT_REQUIRED_AGE};

/// Country markers some edges send when the lookup failed.
const UNKNOWN_COUNTRY_MARKERS: &[&str] = &["XX", "T1"];

/// Country and subdivision reported for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorLocale {
    country: String,
    subdivision: String,
}

impl VisitorLocale {
    /// Build from raw metadata; blank values and unknown-country markers
    /// are treated as absent.
    pub fn new(country: Option<&str>, subdivision: Option<&str>) -> Self {
        let country = clean(country);
        let country = if UNKNOWN_COUNTRY_MARKERS.contains(&country.as_str()) {
            String::new()
        } else {
            country
        };

        Self {
            country,
            subdivision: clean(subdivision),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    /// `"CC-SUB"` when both parts are known, otherwise empty.
    pub fn region_code(&self) -> String {
        if self.country.is_empty() || self.subdivision.is_empty() {
            String::new()
        } else {
            format!("{}-{}", self.country, self.subdivision)
        }
    }

    /// Value stored in the `region` cookie: the full region code, else the
    /// bare country, else empty.
    pub fn region_cookie_value(&self) -> String {
        let code = self.region_code();
        if code.is_empty() {
            self.country.clone()
        } else {
            code
        }
    }

    /// Resolve against a rule table.
    pub fn resolve_with(&self, rules: &AgeRules<'_>) -> GateResolution {
        let region_code = self.region_code();
        let required_age = rules.resolve(
            Some(self.country.as_str()),
            Some(region_code.as_str()),
        );

        GateResolution {
            required_age,
            region: self.region_cookie_value(),
        }
    }

    /// Resolve against the built-in table.
    pub fn resolve(&self) -> GateResolution {
        self.resolve_with(&AgeRules::default())
    }
}

/// Result of resolving a visitor's locale, as persisted in cookies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResolution {
    pub required_age: u8,
    pub region: String,
}

impl Default for GateResolution {
    fn default() -> Self {
        Self {
            required_age: DEFAULT_REQUIRED_AGE,
            region: String::new(),
        }
    }
}

impl GateResolution {
    /// Fixed resolution used by the development bypass.
    pub fn development() -> Self {
        Self {
            required_age: DEFAULT_REQUIRED_AGE,
            region: "DEV".to_string(),
        }
    }
}

fn clean(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_ascii_uppercase()
}
