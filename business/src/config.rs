//! Admin API location and session, resolved from `MENTORS_*` variables.

use serde::Deserialize;

use crate::session::Session;

/// Where the admin API lives and which session to talk to it with.
#[derive(Debug, Clone, Default)]
pub struct BusinessConfig {
    /// API root, e.g. `https://api.example.com`. The admin endpoints hang off
    /// `{api_base_url}/admin`.
    pub api_base_url: String,

    /// Credentials attached to every admin request.
    pub session: Session,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
    #[error("MENTORS_API_URL is not set")]
    MissingApiUrl,
}

/// Variables understood by [`BusinessConfig::from_vars`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    mentors_api_url: Option<String>,
    mentors_session_cookie: Option<String>,
    mentors_token: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            session: Session::Anonymous,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Base URL for the admin endpoints, without a trailing slash.
    pub fn admin_url(&self) -> String {
        format!("{}/admin", self.api_base_url.trim_end_matches('/'))
    }

    /// Build from `MENTORS_API_URL`, `MENTORS_SESSION_COOKIE` and
    /// `MENTORS_TOKEN` pairs; other keys are ignored.
    ///
    /// A bearer token wins over a cookie when both are set. Empty values count
    /// as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(
            vars.into_iter()
                .filter(|(k, _)| k.as_ref().starts_with("MENTORS_"))
                .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned())),
        )
        .map_err(|e| ConfigError::Env(e.to_string()))?;

        let api_base_url = raw
            .mentors_api_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let session = match (raw.mentors_token, raw.mentors_session_cookie) {
            (Some(token), _) if !token.is_empty() => Session::bearer(token),
            (_, Some(cookie)) if !cookie.is_empty() => Session::from_cookie_str(&cookie),
            _ => Session::Anonymous,
        };

        log::debug!("Loaded admin API configuration for {api_base_url}");

        Ok(Self {
            api_base_url,
            session,
        })
    }
}
