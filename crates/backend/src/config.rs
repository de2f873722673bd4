// =============================================================================
// ZeroEdge Backend - Configuration
// =============================================================================

use std::env;
use std::path::PathBuf;

/// Route prefixes the geo middleware skips (matched after the leading `/`).
/// Bundle files at the site root are skipped by extension in `geo_gate`.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &[
    "pkg",
    "assets",
    "favicon.ico",
    "robots.txt",
    "sitemap.xml",
    "api",
    "health",
];

/// Runtime environment. Development must be selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::Invalid("APP_ENV", value.to_string())),
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

/// Where the geo middleware reads visitor location from.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    /// Country header set by the trusted edge (e.g. Cloudflare's "cf-ipcountry")
    pub country_header: String,

    /// Subdivision header set by the trusted edge
    pub region_header: String,

    /// Honor the `x-vercel-ip-country*` override headers. These are visitor
    /// controllable unless an edge strips them, so keep off in production.
    pub trust_override_headers: bool,

    /// Path prefixes that bypass the middleware
    pub excluded_prefixes: Vec<String>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            country_header: "cf-ipcountry".into(),
            region_header: "cf-region-code".into(),
            trust_override_headers: false,
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:3000")
    pub bind_address: String,

    /// Runtime environment (APP_ENV)
    pub environment: Environment,

    /// Built web frontend served for non-API paths
    pub site_dir: PathBuf,

    /// Allow any origin on API routes
    pub cors_allow_any: bool,

    /// Geo middleware settings
    pub geo: GeoConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Production,
        };
        let dev = environment.is_development();

        let defaults = GeoConfig::default();
        let geo = GeoConfig {
            country_header: lookup("GEO_COUNTRY_HEADER").unwrap_or(defaults.country_header),
            region_header: lookup("GEO_REGION_HEADER").unwrap_or(defaults.region_header),
            trust_override_headers: parse_bool(&lookup, "TRUST_GEO_OVERRIDE_HEADERS")?.unwrap_or(dev),
            excluded_prefixes: lookup("GEO_EXCLUDED_PREFIXES")
                .map(|list| {
                    list.split(',')
                        .map(|p| p.trim().trim_start_matches('/').to_string())
                        .filter(|p| !p.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.excluded_prefixes),
        };

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".into()),
            environment,
            site_dir: lookup("SITE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("crates/web/dist")),
            cors_allow_any: parse_bool(&lookup, "CORS_ALLOW_ANY")?.unwrap_or(dev),
            geo,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Invalid(key, value)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_are_production() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.geo.trust_override_headers);
        assert!(!config.cors_allow_any);
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.geo.country_header, "cf-ipcountry");
        assert!(config.geo.excluded_prefixes.iter().any(|p| p == "api"));
    }

    #[test]
    fn test_env_example_loads_as_production() {
        let vars: HashMap<String, String> = dotenvy::from_read_iter(include_str!("../.env.example").as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.geo.trust_override_headers);
    }

    #[test]
    fn test_development_trusts_overrides_by_default() {
        let config = load(&[("APP_ENV", "development")]).unwrap();
        assert!(config.is_development());
        assert!(config.geo.trust_override_headers);

        let config = load(&[("APP_ENV", "development"), ("TRUST_GEO_OVERRIDE_HEADERS", "false")]).unwrap();
        assert!(!config.geo.trust_override_headers);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("APP_ENV", "staging")]),
            Err(ConfigError::Invalid("APP_ENV", _))
        ));
        assert!(matches!(
            load(&[("CORS_ALLOW_ANY", "maybe")]),
            Err(ConfigError::Invalid("CORS_ALLOW_ANY", _))
        ));
    }

    #[test]
    fn test_excluded_prefixes_list() {
        let config = load(&[("GEO_EXCLUDED_PREFIXES", "/static, api,,health")]).unwrap();
        assert_eq!(config.geo.excluded_prefixes, vec!["static", "api", "health"]);
    }
}
