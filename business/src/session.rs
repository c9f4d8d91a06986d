//! Admin session credentials.
//!
//! The admin endpoints authenticate with whatever session the operator already
//! holds. Callers pass it in explicitly; requests never pick up ambient cookies.

/// Cookie name used when no explicit name is configured.
pub const DEFAULT_SESSION_COOKIE: &str = "session";

/// How a request proves it belongs to an admin session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No credentials; the backend decides what to do with the request.
    #[default]
    Anonymous,

    /// A session cookie, sent as `Cookie: {name}={value}`.
    Cookie { name: String, value: String },

    /// A bearer token, sent as `Authorization: Bearer {token}`.
    Bearer(String),
}

impl Session {
    /// Cookie session under the default cookie name.
    pub fn cookie(value: impl Into<String>) -> Self {
        Self::Cookie {
            name: DEFAULT_SESSION_COOKIE.to_owned(),
            value: value.into(),
        }
    }

    /// Parse either `name=value` or a bare value (default cookie name).
    pub fn from_cookie_str(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => Self::Cookie {
                name: name.trim().to_owned(),
                value: value.trim().to_owned(),
            },
            _ => Self::cookie(raw.trim()),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// The header this session contributes to a request, if any.
    pub fn header(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Anonymous => None,
            Self::Cookie { name, value } => Some(("cookie", format!("{name}={value}"))),
            Self::Bearer(token) => Some(("authorization", format!("Bearer {token}"))),
        }
    }
}
