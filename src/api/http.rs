use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::types::{
    error_body_message, AmountRequest, LegacyBalanceRequest, StatusReply, WalletRequest,
    WebAppBalanceRequest, WebAppWithdrawRequest,
};
use super::{AckResponse, ApiError, ApiVariant, BalanceResponse, StarsApi, WithdrawResponse};
use crate::identity::Identity;

/// [`StarsApi`] over HTTP POST + JSON.
#[derive(Debug, Clone)]
pub struct HttpStarsApi {
    base_url: String,
    variant: ApiVariant,
    http: Client,
}

impl HttpStarsApi {
    /// `timeout` of `None` leaves requests unbounded, like the browser
    /// client did.
    pub fn new(
        base_url: impl Into<String>,
        variant: ApiVariant,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            variant,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` and return the raw response text, mapping non-2xx
    /// replies to `Rejected` when they carry a message and `Http` otherwise.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(url = %url, status = status.as_u16(), "response received");

        if status.is_success() {
            Ok(text)
        } else {
            Err(match error_body_message(&text) {
                Some(message) => ApiError::Rejected(message),
                None => ApiError::Http(status.as_u16()),
            })
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + StatusReply,
    {
        let text = self.post(path, body).await?;
        let reply: R = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        reply.check_status()?;
        Ok(reply)
    }

    /// Like `post_json`, but an empty or non-JSON success body is accepted.
    async fn post_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AckResponse, ApiError> {
        let text = self.post(path, body).await?;
        let reply: AckResponse = serde_json::from_str(&text).unwrap_or_default();
        reply.check_status()?;
        Ok(reply)
    }
}

#[async_trait]
impl StarsApi for HttpStarsApi {
    fn variant(&self) -> ApiVariant {
        self.variant
    }

    async fn fetch_balance(&self, identity: &Identity) -> Result<BalanceResponse, ApiError> {
        let path = self.variant.balance_path();
        match self.variant {
            ApiVariant::Legacy => {
                let body = LegacyBalanceRequest {
                    user_id: identity.user_id.as_ref(),
                };
                self.post_json(path, &body).await
            }
            ApiVariant::WebApp => {
                let body = WebAppBalanceRequest {
                    user_id: identity.user_id.as_ref(),
                    user: identity.user.as_ref(),
                    init_data: identity.init_data.as_ref(),
                };
                self.post_json(path, &body).await
            }
        }
    }

    async fn add_stars(&self, identity: &Identity, amount: i64) -> Result<AckResponse, ApiError> {
        let body = AmountRequest {
            user_id: identity.user_id.as_ref(),
            amount,
        };
        self.post_ack(self.variant.deposit_path(), &body).await
    }

    async fn withdraw(
        &self,
        identity: &Identity,
        amount: i64,
    ) -> Result<WithdrawResponse, ApiError> {
        let path = self.variant.withdraw_path();
        match self.variant {
            ApiVariant::Legacy => {
                let body = AmountRequest {
                    user_id: identity.user_id.as_ref(),
                    amount,
                };
                self.post_json(path, &body).await
            }
            ApiVariant::WebApp => {
                let body = WebAppWithdrawRequest {
                    user_id: identity.user_id.as_ref(),
                    amount,
                    user: identity.user.as_ref(),
                    init_data: identity.init_data.as_ref(),
                };
                self.post_json(path, &body).await
            }
        }
    }

    async fn update_wallet(
        &self,
        identity: &Identity,
        wallet: &str,
    ) -> Result<AckResponse, ApiError> {
        let body = WalletRequest {
            user_id: identity.user_id.as_ref(),
            wallet,
        };
        self.post_ack(self.variant.wallet_path(), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{InitData, UserId};
    use httpmock::prelude::*;
    use serde_json::json;

    fn identity(id: i64) -> Identity {
        Identity {
            user_id: Some(UserId::Numeric(id)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_legacy_fetch_balance() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/get_user_data")
                    .json_body(json!({"user_id": 42}));
                then.status(200).json_body(json!({
                    "balance": 171,
                    "ton_wallet": null,
                    "total_deposits": 300,
                    "vip_level": "Silver"
                }));
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        let reply = api.fetch_balance(&identity(42)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply.balance, Some(171));
        assert_eq!(reply.total_deposits, Some(300));
        assert_eq!(reply.vip_level, Some(json!("Silver")));
        assert_eq!(reply.ton_wallet, None);
    }

    #[tokio::test]
    async fn test_webapp_fetch_balance_forwards_init_data() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/get_balance").json_body(json!({
                    "userId": 7,
                    "user": null,
                    "initData": "query_id=1&hash=ab"
                }));
                then.status(200).json_body(json!({
                    "status": "success",
                    "balance": 42,
                    "vip_level": "Gold",
                    "total_deposits": 5
                }));
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::WebApp, None).unwrap();
        let identity = Identity {
            user_id: Some(UserId::Numeric(7)),
            user: None,
            init_data: Some(InitData::new("query_id=1&hash=ab")),
        };
        let reply = api.fetch_balance(&identity).await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply.balance, Some(42));
    }

    #[tokio::test]
    async fn test_withdraw_rejected_by_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/withdraw_stars");
                then.status(200)
                    .json_body(json!({"status": "error", "message": "Insufficient balance"}));
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        let err = api.withdraw(&identity(1), 10_000).await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "Insufficient balance");
    }

    #[tokio::test]
    async fn test_webapp_withdraw_path_and_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/request_withdraw").json_body(json!({
                    "userId": 3,
                    "amount": 10,
                    "user": null,
                    "initData": null
                }));
                then.status(200)
                    .json_body(json!({"status": "success", "new_balance": 10, "message": "ok"}));
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::WebApp, None).unwrap();
        let reply = api.withdraw(&identity(3), 10).await.unwrap();
        mock.assert_async().await;
        assert_eq!(reply.new_balance, Some(10));
        assert_eq!(reply.message.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_ack_accepts_empty_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/update_wallet")
                    .json_body(json!({"user_id": 5, "wallet": "alice.ton"}));
                then.status(200);
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        api.update_wallet(&identity(5), "alice.ton").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_with_message_is_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/add_stars");
                then.status(400).json_body(json!({"error": "amount too large"}));
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        let err = api.add_stars(&identity(5), 100).await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "amount too large");
    }

    #[tokio::test]
    async fn test_http_error_without_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/get_user_data");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        let err = api.fetch_balance(&identity(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(502)));
    }

    #[tokio::test]
    async fn test_non_json_balance_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/get_user_data");
                then.status(200).body("not json");
            })
            .await;

        let api = HttpStarsApi::new(server.base_url(), ApiVariant::Legacy, None).unwrap();
        let err = api.fetch_balance(&identity(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let api = HttpStarsApi::new("http://127.0.0.1:1", ApiVariant::Legacy, None).unwrap();
        let err = api.fetch_balance(&identity(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpStarsApi::new("http://localhost:5000/", ApiVariant::Legacy, None).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/add_stars"), "http://localhost:5000/add_stars");
    }
}
