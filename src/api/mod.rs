//! Typed client for the Stars backend.
//!
//! Two generations of the mini app talked to the backend with different
//! endpoint names and body shapes. [`ApiVariant`] selects the wire form; the
//! rest of the crate only sees [`StarsApi`].

pub mod http;
pub mod types;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::consts::{
    ENDPOINT_ADD_STARS, ENDPOINT_GET_BALANCE, ENDPOINT_GET_USER_DATA, ENDPOINT_REQUEST_WITHDRAW,
    ENDPOINT_UPDATE_WALLET, ENDPOINT_WITHDRAW_STARS,
};
use crate::identity::Identity;

pub use http::HttpStarsApi;
pub use types::{AckResponse, BalanceResponse, WithdrawResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS or IO failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned HTTP {0}")]
    Http(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The backend answered and said no. Carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// True for failures the backend reported itself, as opposed to the
    /// request not getting through.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Http(status.as_u16())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Endpoint naming and body shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ApiVariant {
    /// `/get_user_data` + `/withdraw_stars`, snake_case `user_id` bodies.
    #[default]
    Legacy,
    /// `/get_balance` + `/request_withdraw`, camelCase bodies carrying the
    /// WebApp user and initData.
    #[value(name = "webapp")]
    #[serde(rename = "webapp")]
    WebApp,
}

impl ApiVariant {
    pub fn balance_path(&self) -> &'static str {
        match self {
            ApiVariant::Legacy => ENDPOINT_GET_USER_DATA,
            ApiVariant::WebApp => ENDPOINT_GET_BALANCE,
        }
    }

    pub fn withdraw_path(&self) -> &'static str {
        match self {
            ApiVariant::Legacy => ENDPOINT_WITHDRAW_STARS,
            ApiVariant::WebApp => ENDPOINT_REQUEST_WITHDRAW,
        }
    }

    pub fn deposit_path(&self) -> &'static str {
        ENDPOINT_ADD_STARS
    }

    pub fn wallet_path(&self) -> &'static str {
        ENDPOINT_UPDATE_WALLET
    }

    /// Text for the balance field: the bare number for the legacy page,
    /// `"N Stars"` for the WebApp page.
    pub fn format_balance(&self, balance: i64) -> String {
        match self {
            ApiVariant::Legacy => balance.to_string(),
            ApiVariant::WebApp => format!("{balance} Stars"),
        }
    }
}

/// The four calls the mini app makes.
///
/// Implementations return `Err(ApiError::Rejected)` when the backend answers
/// with a non-success `status`, so callers only see successful payloads in
/// `Ok`.
#[async_trait]
pub trait StarsApi: Send + Sync {
    fn variant(&self) -> ApiVariant;

    async fn fetch_balance(&self, identity: &Identity) -> Result<BalanceResponse, ApiError>;

    async fn add_stars(&self, identity: &Identity, amount: i64) -> Result<AckResponse, ApiError>;

    async fn withdraw(
        &self,
        identity: &Identity,
        amount: i64,
    ) -> Result<WithdrawResponse, ApiError>;

    async fn update_wallet(
        &self,
        identity: &Identity,
        wallet: &str,
    ) -> Result<AckResponse, ApiError>;
}
