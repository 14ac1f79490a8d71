//! Telegram WebApp identity.
//!
//! The hosting chat app hands the mini app a user object and an opaque
//! `initData` string. Neither is verified here; both are forwarded to the
//! backend, which owns the signature check.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid WebApp user JSON: {0}")]
    UserJson(#[from] serde_json::Error),
}

/// Backend user identifier, echoed back exactly the way it came in.
///
/// Ids read from the WebApp user object are numbers. Ids typed on the
/// command line or read from the state file are text and are never
/// reinterpreted: `007` stays `"007"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl UserId {
    /// Same id, ignoring whether it was carried as a number or as text.
    pub fn same_as(&self, other: &UserId) -> bool {
        self.to_string() == other.to_string()
    }
}

impl From<&str> for UserId {
    fn from(raw: &str) -> Self {
        UserId::Text(raw.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// `Telegram.WebApp.initDataUnsafe.user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Fields this client does not look at, kept so the object reaches the
    /// backend as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebAppUser {
    pub fn from_json(raw: &str) -> Result<Self, IdentityError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn display_name(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(username), _) => format!("@{username}"),
            (None, Some(first)) => match &self.last_name {
                Some(last) => format!("{first} {last}"),
                None => first.clone(),
            },
            (None, None) => self.id.to_string(),
        }
    }
}

/// Raw `Telegram.WebApp.initData` query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitData(String);

impl InitData {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the `user` parameter. This reads the payload only; the `hash`
    /// is never checked on the client.
    pub fn user(&self) -> Result<Option<WebAppUser>, IdentityError> {
        url::form_urlencoded::parse(self.0.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| WebAppUser::from_json(&value))
            .transpose()
    }
}

/// Who the session acts for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub user_id: Option<UserId>,
    pub user: Option<WebAppUser>,
    pub init_data: Option<InitData>,
}

impl Identity {
    /// Combine the available identity sources.
    ///
    /// The user id is taken from, in order: an explicit id, the WebApp user
    /// object, the user embedded in initData, the stored id.
    pub fn resolve(
        explicit: Option<UserId>,
        user: Option<WebAppUser>,
        init_data: Option<InitData>,
        stored: Option<UserId>,
    ) -> Result<Self, IdentityError> {
        let user = match user {
            Some(user) => Some(user),
            None => match &init_data {
                Some(init_data) => init_data.user()?,
                None => None,
            },
        };
        let user_id = explicit
            .or_else(|| user.as_ref().map(|u| UserId::Numeric(u.id)))
            .or(stored);
        Ok(Self {
            user_id,
            user,
            init_data,
        })
    }

    pub fn display_name(&self) -> String {
        match (&self.user, &self.user_id) {
            (Some(user), _) => user.display_name(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "anonymous".to_string(),
        }
    }
}
