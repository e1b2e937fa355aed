use std::fmt;
use std::time::Duration;

use axum::http::HeaderValue;
use spacetour_core::retry::RetryPolicy;

/// Configuration could not be resolved at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Optional values have defaults suitable for local development; the
/// database and identity provider settings are required.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Public origin of the site, used to build email redirect links.
    pub site_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database_url: String,
    /// Base URL of the hosted backend; the auth API lives under `/auth/v1`.
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Timeout and retry thresholds for content reads.
    pub content_fetch: RetryPolicy,
    /// Ping the database before reading content.
    pub content_precheck: bool,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
    pub cookie_max_age_secs: i64,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("site_url", &self.site_url)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("database_url", &"[REDACTED]")
            .field("supabase_url", &self.supabase_url)
            .field("content_fetch", &self.content_fetch)
            .field("content_precheck", &self.content_precheck)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_max_age_secs", &self.cookie_max_age_secs)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `DATABASE_URL`               | required                |
    /// | `SUPABASE_URL`               | required                |
    /// | `SUPABASE_ANON_KEY`          | required                |
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `3000`                  |
    /// | `SITE_URL`                   | `http://localhost:5173` |
    /// | `CORS_ORIGINS`               | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                    |
    /// | `CONTENT_FETCH_ATTEMPTS`     | `3`                     |
    /// | `CONTENT_FETCH_DELAY_MS`     | `1000`                  |
    /// | `CONTENT_FETCH_TIMEOUT_SECS` | `5`                     |
    /// | `CONTENT_PRECHECK`           | `true`                  |
    /// | `COOKIE_SECURE`              | `false`                 |
    /// | `COOKIE_MAX_AGE_SECS`        | `604800`                |
    ///
    /// The worst-case content read (precheck, every attempt timing out, and
    /// the delays between) must finish before `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through `lookup`, which returns the raw value
    /// of a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let or_default = |name: &'static str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let cors_origins: Vec<String> = or_default("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins.iter().find(|o| HeaderValue::from_str(o).is_err()) {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: bad.clone(),
            });
        }

        let content_fetch = RetryPolicy {
            max_attempts: parse("CONTENT_FETCH_ATTEMPTS", or_default("CONTENT_FETCH_ATTEMPTS", "3"))?,
            delay: Duration::from_millis(parse(
                "CONTENT_FETCH_DELAY_MS",
                or_default("CONTENT_FETCH_DELAY_MS", "1000"),
            )?),
            timeout: Duration::from_secs(parse(
                "CONTENT_FETCH_TIMEOUT_SECS",
                or_default("CONTENT_FETCH_TIMEOUT_SECS", "5"),
            )?),
        };

        let request_timeout_secs: u64 =
            parse("REQUEST_TIMEOUT_SECS", or_default("REQUEST_TIMEOUT_SECS", "30"))?;
        let content_precheck: bool =
            parse("CONTENT_PRECHECK", or_default("CONTENT_PRECHECK", "true"))?;

        // Content must fall back before the HTTP layer times the request out.
        let mut content_worst_case = content_fetch.worst_case();
        if content_precheck {
            content_worst_case += content_fetch.timeout;
        }
        if content_worst_case >= Duration::from_secs(request_timeout_secs) {
            return Err(ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                value: format!(
                    "{request_timeout_secs} (content reads can take up to {}s)",
                    content_worst_case.as_secs_f64()
                ),
            });
        }

        Ok(Self {
            host: or_default("HOST", "0.0.0.0"),
            port: parse("PORT", or_default("PORT", "3000"))?,
            site_url: or_default("SITE_URL", "http://localhost:5173")
                .trim_end_matches('/')
                .to_string(),
            cors_origins,
            request_timeout_secs,
            database_url: required("DATABASE_URL")?,
            supabase_url: required("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            content_fetch,
            content_precheck,
            cookie_secure: parse("COOKIE_SECURE", or_default("COOKIE_SECURE", "false"))?,
            cookie_max_age_secs: parse("COOKIE_MAX_AGE_SECS", or_default("COOKIE_MAX_AGE_SECS", "604800"))?,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
