//! Cookie wire format
//!
//! | Name                | Written by | Value              | Lifetime |
//! |---------------------|------------|--------------------|----------|
//! | `required_age`      | edge       | integer            | 14 days  |
//! | `region`            | edge       | `CC`, `CC-SUB`, "" | 14 days  |
//! | `age_gate_accepted` | browser    | `1`                | 90 days  |
//!
//! All cookies use path `/` and `SameSite=Lax`, and stay readable from
//! script (no `HttpOnly`).

use cookie::{Cookie, CookieBuilder, SameSite};
use time::Duration;

use crate::geo::GateResolution;
use crate::rules::DEFAULT_REQUIRED_AGE;

pub const REQUIRED_AGE_COOKIE: &str = "required_age";
pub const REGION_COOKIE: &str = "region";
pub const ACCEPTED_COOKIE: &str = "age_gate_accepted";

/// Short lifetime so legal table updates reach returning visitors quickly.
pub const RESOLUTION_TTL_DAYS: i64 = 14;
pub const ACCEPTED_TTL_DAYS: i64 = 90;

const ACCEPTED_VALUE: &str = "1";

fn base(name: &'static str, value: String) -> CookieBuilder<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(false)
        .secure(false)
}

/// `required_age` cookie with the resolution lifetime.
pub fn required_age_cookie(required_age: u8) -> Cookie<'static> {
    base(REQUIRED_AGE_COOKIE, required_age.to_string())
        .max_age(Duration::days(RESOLUTION_TTL_DAYS))
        .build()
}

/// `region` cookie with the resolution lifetime.
pub fn region_cookie(region: &str) -> Cookie<'static> {
    base(REGION_COOKIE, region.to_string())
        .max_age(Duration::days(RESOLUTION_TTL_DAYS))
        .build()
}

/// Consent cookie written when the visitor accepts the gate.
pub fn accepted_cookie() -> Cookie<'static> {
    base(ACCEPTED_COOKIE, ACCEPTED_VALUE.to_string())
        .max_age(Duration::days(ACCEPTED_TTL_DAYS))
        .build()
}

/// Cookies for the development bypass. Session lifetime.
pub fn development_cookies() -> [Cookie<'static>; 3] {
    let resolution = GateResolution::development();
    [
        base(REQUIRED_AGE_COOKIE, resolution.required_age.to_string()).build(),
        base(ACCEPTED_COOKIE, ACCEPTED_VALUE.to_string()).build(),
        base(REGION_COOKIE, resolution.region).build(),
    ]
}

/// Gate-relevant cookie values as seen by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateCookies {
    pub accepted: bool,
    pub required_age: u8,
    pub region: String,
}

impl Default for GateCookies {
    fn default() -> Self {
        Self {
            accepted: false,
            required_age: DEFAULT_REQUIRED_AGE,
            region: String::new(),
        }
    }
}

impl GateCookies {
    /// Parse a `Cookie` header or `document.cookie` string. Malformed
    /// entries are skipped; missing or unparsable values take defaults.
    /// For repeated names the first entry wins, which is the most
    /// path-specific one in `document.cookie`.
    pub fn parse(header: &str) -> Self {
        let mut accepted = None;
        let mut required_age = None;
        let mut region = None;

        for cookie in Cookie::split_parse(header).filter_map(Result::ok) {
            match cookie.name() {
                ACCEPTED_COOKIE if accepted.is_none() => accepted = Some(cookie.value().to_string()),
                REQUIRED_AGE_COOKIE if required_age.is_none() => {
                    required_age = Some(cookie.value().to_string())
                }
                REGION_COOKIE if region.is_none() => region = Some(cookie.value().to_string()),
                _ => {}
            }
        }

        Self::from_values(accepted.as_deref(), required_age.as_deref(), region.as_deref())
    }

    pub fn from_values(
        accepted: Option<&str>,
        required_age: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        let required_age = required_age
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|age| *age > 0)
            .unwrap_or(DEFAULT_REQUIRED_AGE);

        let region = region
            .map(|v| {
                urlencoding::decode(v)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| v.to_string())
            })
            .unwrap_or_default();

        Self {
            accepted: accepted.is_some_and(|v| !v.is_empty()),
            required_age,
            region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_cookie_attributes() {
        let cookie = required_age_cookie(21);
        assert_eq!(cookie.name(), "required_age");
        assert_eq!(cookie.value(), "21");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(14)));
        assert_ne!(cookie.http_only(), Some(true));
        assert_ne!(cookie.secure(), Some(true));

        let rendered = region_cookie("CA-AB").to_string();
        assert!(rendered.starts_with("region=CA-AB"));
        assert!(rendered.contains("Max-Age=1209600"));
        assert!(!rendered.contains("HttpOnly"));
    }

    #[test]
    fn test_accepted_cookie_lasts_ninety_days() {
        let cookie = accepted_cookie();
        assert_eq!(cookie.name(), ACCEPTED_COOKIE);
        assert_eq!(cookie.value(), "1");
        assert_eq!(cookie.max_age(), Some(Duration::days(90)));
        assert!(cookie.to_string().contains("SameSite=Lax"));
    }

    #[test]
    fn test_development_cookies_are_session_scoped() {
        let cookies = development_cookies();
        let pairs: Vec<_> = cookies.iter().map(|c| (c.name(), c.value())).collect();
        assert_eq!(
            pairs,
            vec![("required_age", "18"), ("age_gate_accepted", "1"), ("region", "DEV")]
        );
        assert!(cookies.iter().all(|c| c.max_age().is_none()));
    }

    #[test]
    fn test_parse_document_cookie_string() {
        let parsed = GateCookies::parse("theme=dark; required_age=21; region=US-CA; age_gate_accepted=1");
        assert!(parsed.accepted);
        assert_eq!(parsed.required_age, 21);
        assert_eq!(parsed.region, "US-CA");
    }

    #[test]
    fn test_parse_defaults_when_missing() {
        assert_eq!(GateCookies::parse(""), GateCookies::default());
        assert_eq!(GateCookies::parse("theme=dark"), GateCookies::default());
    }

    #[test]
    fn test_parse_corrupt_values() {
        let parsed = GateCookies::parse("required_age=abc; region=%E0%A4%A; age_gate_accepted=");
        assert!(!parsed.accepted);
        assert_eq!(parsed.required_age, DEFAULT_REQUIRED_AGE);
        assert_eq!(parsed.region, "%E0%A4%A");

        assert_eq!(GateCookies::parse("required_age=0").required_age, DEFAULT_REQUIRED_AGE);
        assert_eq!(GateCookies::parse("required_age=300").required_age, DEFAULT_REQUIRED_AGE);
    }

    #[test]
    fn test_parse_decodes_region() {
        assert_eq!(GateCookies::parse("region=US%2DCA").region, "US-CA");
    }

    #[test]
    fn test_parse_keeps_first_of_repeated_names() {
        let parsed = GateCookies::parse("required_age=19; region=CA-ON; required_age=21; region=US; age_gate_accepted=1");
        assert_eq!(parsed.required_age, 19);
        assert_eq!(parsed.region, "CA-ON");
        assert!(parsed.accepted);

        assert!(!GateCookies::parse("age_gate_accepted=; age_gate_accepted=1").accepted);
    }
}
