use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::SUCCESS_STATUSES;
use crate::identity::{InitData, UserId, WebAppUser};

use super::ApiError;

// =============================================================================
// Request bodies
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct LegacyBalanceRequest<'a> {
    pub user_id: Option<&'a UserId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WebAppBalanceRequest<'a> {
    pub user_id: Option<&'a UserId>,
    pub user: Option<&'a WebAppUser>,
    pub init_data: Option<&'a InitData>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AmountRequest<'a> {
    pub user_id: Option<&'a UserId>,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WebAppWithdrawRequest<'a> {
    pub user_id: Option<&'a UserId>,
    pub amount: i64,
    pub user: Option<&'a WebAppUser>,
    pub init_data: Option<&'a InitData>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WalletRequest<'a> {
    pub user_id: Option<&'a UserId>,
    pub wallet: &'a str,
}

// =============================================================================
// Responses
// =============================================================================

/// Reply to the balance endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub vip_level: Option<Value>,
    #[serde(default)]
    pub total_deposits: Option<i64>,
    #[serde(default)]
    pub ton_wallet: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to the withdraw endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WithdrawResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub new_balance: Option<i64>,
}

/// Reply to calls whose body the client mostly ignores (deposit, wallet).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Common shape of the `status` / `message` / `error` trio.
pub trait StatusReply {
    fn status(&self) -> Option<&str>;
    fn message(&self) -> Option<&str>;
    fn error(&self) -> Option<&str>;

    /// `Ok` unless `status` is present and not a success value. A missing
    /// status counts as success, since older endpoints never send one.
    fn check_status(&self) -> Result<(), ApiError> {
        match self.status() {
            None => Ok(()),
            Some(status) if SUCCESS_STATUSES.contains(&status) => Ok(()),
            Some(status) => Err(ApiError::Rejected(
                self.message()
                    .or(self.error())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("request failed with status '{status}'")),
            )),
        }
    }
}

macro_rules! impl_status_reply {
    ($($ty:ty),*) => {
        $(impl StatusReply for $ty {
            fn status(&self) -> Option<&str> {
                self.status.as_deref()
            }
            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
            fn error(&self) -> Option<&str> {
                self.error.as_deref()
            }
        })*
    };
}

impl_status_reply!(BalanceResponse, WithdrawResponse, AckResponse);

/// Pull a human-readable message out of an error body, if it has one.
pub(crate) fn error_body_message(body: &str) -> Option<String> {
    let reply: AckResponse = serde_json::from_str(body).ok()?;
    reply.message.or(reply.error)
}
