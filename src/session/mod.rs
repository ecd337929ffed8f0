//! Session management
//!
//! The [`SessionManager`] is the only writer of the persisted session and
//! the single answer to "is a user logged in". A session is considered valid
//! for as long as a token is stored; there is no client-side expiry check.

mod store;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::client::models::UserInfo;
use crate::error::Result;
use crate::view::{Route, Surface};

pub use store::{FileSessionStore, SessionStore};

#[cfg(test)]
pub use store::MemorySessionStore;

/// Persisted session data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by the backend
    pub access_token: String,

    /// User metadata returned alongside the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Claims read from a JWT access token, for display only
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT. Returns `None` for opaque tokens.
    pub fn decode(token: &str) -> Option<Self> {
        let mut parts = token.split('.');
        let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Expiry time, if the token carries one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

/// Owner of the persisted session
pub struct SessionManager {
    store: Box<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Read the stored session. An unreadable session counts as absent.
    pub fn session(&self) -> Option<Session> {
        match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session: {}", e);
                None
            }
        }
    }

    /// The stored token, if any
    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.access_token)
    }

    /// The stored user metadata, if any
    pub fn user(&self) -> Option<UserInfo> {
        self.session().and_then(|s| s.user)
    }

    /// Whether a token is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a token (and optional user), replacing any prior session
    pub fn set_session(&self, token: &str, user: Option<UserInfo>) -> Result<()> {
        debug!("Storing session");
        self.store.save(&Session {
            access_token: token.to_string(),
            user,
        })
    }

    /// Remove the stored session. Clearing an absent session succeeds.
    pub fn clear_session(&self) -> Result<()> {
        debug!("Clearing session");
        self.store.clear()
    }

    /// Return the token, or navigate to `target` and return `None` so the
    /// caller can stop.
    pub fn require_session_or_redirect(
        &self,
        surface: &dyn Surface,
        target: Route,
    ) -> Option<String> {
        match self.token() {
            Some(token) => Some(token),
            None => {
                debug!("No session; redirecting to {:?}", target);
                surface.navigate(target);
                None
            }
        }
    }

    /// Claims of the stored token, when it is a readable JWT
    pub fn token_claims(&self) -> Option<TokenClaims> {
        self.token().as_deref().and_then(TokenClaims::decode)
    }
}
