//! Legal age rules
//!
//! ## Table of Contents
//! - **AgeRule**: minimum age for one country, with optional subdivision overrides
//! - **AGE_RULES**: the built-in table
//! - **AgeRules**: lookup over any rule slice
//! - **resolve_required_age**: lookup over the built-in table
//!
//! The table is a convenience starting point. Thresholds differ by product
//! and change over time; verify with counsel before enabling a market.

/// Age used when no rule matches the visitor's country.
pub const DEFAULT_REQUIRED_AGE: u8 = 18;

/// Minimum age for unrestricted access in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRule {
    /// ISO 3166-1 alpha-2 code, uppercase.
    pub country: &'static str,
    /// Country-wide minimum age.
    pub required_age: u8,
    /// Subdivision overrides keyed by full code, e.g. `"CA-AB"`.
    pub regions: &'static [(&'static str, u8)],
}

impl AgeRule {
    /// Rule with no subdivision overrides.
    pub const fn country(country: &'static str, required_age: u8) -> Self {
        Self {
            country,
            required_age,
            regions: &[],
        }
    }

    /// Override for an exact subdivision code, if declared.
    pub fn region_age(&self, region: &str) -> Option<u8> {
        self.regions
            .iter()
            .find(|(code, _)| *code == region)
            .map(|(_, age)| *age)
    }
}

/// Built-in table. Lookups stop at the first rule for a country.
pub static AGE_RULES: &[AgeRule] = &[
    // North America
    AgeRule::country("US", 21),
    AgeRule {
        country: "CA",
        required_age: 19,
        // BC, ON, SK, NB, NS, NL, PE stay at 19
        regions: &[("CA-AB", 18), ("CA-MB", 18), ("CA-QC", 18)],
    },
    // Europe
    AgeRule::country("GB", 18),
    AgeRule::country("IE", 18),
    AgeRule::country("MT", 18),
    AgeRule::country("DE", 18),
    AgeRule::country("FR", 18),
    AgeRule::country("ES", 18),
    AgeRule::country("PT", 18),
    AgeRule::country("IT", 18),
    AgeRule::country("NL", 18),
    AgeRule::country("SE", 18),
    AgeRule::country("NO", 18),
    AgeRule::country("FI", 18),
    AgeRule::country("DK", 18),
    // APAC
    AgeRule::country("AU", 18),
    AgeRule::country("NZ", 20),
    // LATAM
    AgeRule::country("BR", 18),
    AgeRule::country("AR", 18),
    AgeRule::country("CL", 18),
    AgeRule::country("CO", 18),
    AgeRule::country("MX", 18),
    // Middle East / Africa
    AgeRule::country("ZA", 18),
];

/// Read-only view over a rule table.
#[derive(Debug, Clone, Copy)]
pub struct AgeRules<'a> {
    rules: &'a [AgeRule],
}

impl Default for AgeRules<'static> {
    fn default() -> Self {
        Self::new(AGE_RULES)
    }
}

impl<'a> AgeRules<'a> {
    pub const fn new(rules: &'a [AgeRule]) -> Self {
        Self { rules }
    }

    /// First rule declared for `country` (case-insensitive).
    pub fn rule_for(&self, country: &str) -> Option<&'a AgeRule> {
        let cc = normalize(country)?;
        self.rules.iter().find(|rule| rule.country == cc)
    }

    /// Minimum age for a country and optional full subdivision code.
    ///
    /// Unknown or empty input falls back to [`DEFAULT_REQUIRED_AGE`]; a
    /// subdivision that is not declared for the matched country falls back
    /// to the country-wide age.
    pub fn resolve(&self, country: Option<&str>, region: Option<&str>) -> u8 {
        let Some(rule) = country.and_then(|c| self.rule_for(c)) else {
            return DEFAULT_REQUIRED_AGE;
        };

        region
            .and_then(normalize)
            .and_then(|rc| rule.region_age(&rc))
            .unwrap_or(rule.required_age)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AgeRule> {
        self.rules.iter()
    }
}

/// Resolve against the built-in [`AGE_RULES`] table.
pub fn resolve_required_age(country: Option<&str>, region: Option<&str>) -> u8 {
    AgeRules::default().resolve(country, region)
}

fn normalize(code: &str) -> Option<String> {
    let code = code.trim();
    (!code.is_empty()).then(|| code.to_ascii_uppercase())
}
