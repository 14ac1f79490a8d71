//! The mini app's four user operations.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ApiError, StarsApi};
use crate::sequence::{OperationKind, RequestSequencer, Ticket};
use crate::session::SessionContext;
use crate::validation::{check_deposit, check_wallet, parse_amount, ValidationError};
use crate::view::{Field, View};

pub const NETWORK_ERROR_ALERT: &str = "Network error, please try again.";
pub const BALANCE_ERROR_TEXT: &str = "Error loading balance";
pub const WITHDRAW_PROMPT: &str = "How many Stars do you want to withdraw?";

/// Whether a finished request was shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request of the same kind was issued while this one was in
    /// flight; its response was dropped.
    Stale,
}

/// Why an operation did not succeed. The view has already been told.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("cancelled by user")]
    Cancelled,
}

/// Where a withdrawal amount comes from.
#[derive(Debug, Clone, Copy)]
pub enum AmountSource<'a> {
    /// Text already typed into a form field
    Field(&'a str),
    /// Ask through [`View::prompt`]
    Prompt,
}

pub struct MiniApp<A, V> {
    api: A,
    view: V,
    sequencer: RequestSequencer,
}

impl<A: StarsApi, V: View> MiniApp<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch balance, VIP level and total deposits and render them.
    pub async fn load_balance(&self, session: &SessionContext) -> Result<Outcome, ActionError> {
        let ticket = self.sequencer.issue(OperationKind::LoadBalance);
        info!(user_id = ?session.user_id(), seq = ticket.seq, "Loading balance");

        let result = self.api.fetch_balance(session.identity()).await;
        if self.is_stale(ticket) {
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(reply) => {
                let balance = reply.balance.unwrap_or(0);
                self.view
                    .render(Field::Balance, &self.api.variant().format_balance(balance));
                if let Some(vip_level) = &reply.vip_level {
                    self.view.render(Field::VipLevel, &display_value(vip_level));
                }
                if let Some(total) = reply.total_deposits {
                    self.view.render(Field::TotalDeposits, &total.to_string());
                }
                if let Some(wallet) = &reply.ton_wallet {
                    self.view.render(Field::Wallet, wallet);
                }
                // Fields left out of the reply keep their last value, as on screen.
                session.update(|s| {
                    s.balance = Some(balance);
                    if reply.vip_level.is_some() {
                        s.vip_level = reply.vip_level.clone();
                    }
                    if reply.total_deposits.is_some() {
                        s.total_deposits = reply.total_deposits;
                    }
                    if reply.ton_wallet.is_some() {
                        s.wallet = reply.ton_wallet.clone();
                    }
                });
                info!(balance, "Balance loaded");
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.view.render(Field::Balance, BALANCE_ERROR_TEXT);
                self.report_failure(OperationKind::LoadBalance, &e);
                Err(e.into())
            }
        }
    }

    /// Ask the backend to credit `amount_input` Stars, then reload the
    /// balance.
    pub async fn request_deposit(
        &self,
        session: &SessionContext,
        amount_input: &str,
    ) -> Result<Outcome, ActionError> {
        let amount = self.guard(parse_amount(amount_input).and_then(check_deposit))?;

        let ticket = self.sequencer.issue(OperationKind::Deposit);
        info!(user_id = ?session.user_id(), amount, seq = ticket.seq, "Requesting deposit");

        let result = self.api.add_stars(session.identity(), amount).await;
        if self.is_stale(ticket) {
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(_) => {
                self.view.alert(&format!("Added {amount} Stars!"));
                // The reload reports its own failures.
                let _ = self.load_balance(session).await;
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.report_failure(OperationKind::Deposit, &e);
                Err(e.into())
            }
        }
    }

    /// Ask the backend to pay out. No minimum or sufficiency check happens
    /// here; the backend decides.
    pub async fn request_withdrawal(
        &self,
        session: &SessionContext,
        source: AmountSource<'_>,
    ) -> Result<Outcome, ActionError> {
        let raw = match source {
            AmountSource::Field(text) => text.to_string(),
            AmountSource::Prompt => match self.view.prompt(WITHDRAW_PROMPT) {
                Some(text) => text,
                None => {
                    debug!("Withdrawal prompt cancelled");
                    return Err(ActionError::Cancelled);
                }
            },
        };
        let amount = self.guard(parse_amount(&raw))?;

        let ticket = self.sequencer.issue(OperationKind::Withdraw);
        info!(user_id = ?session.user_id(), amount, seq = ticket.seq, "Requesting withdrawal");

        let result = self.api.withdraw(session.identity(), amount).await;
        if self.is_stale(ticket) {
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(reply) => {
                let message = reply
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Withdraw request sent: {amount} Stars"));
                match reply.new_balance {
                    Some(new_balance) => {
                        self.view.render(
                            Field::Balance,
                            &self.api.variant().format_balance(new_balance),
                        );
                        session.update(|s| s.balance = Some(new_balance));
                        self.view.alert(&message);
                    }
                    None => {
                        // Older backends only acknowledge; ask for the new figure.
                        self.view.alert(&message);
                        let _ = self.load_balance(session).await;
                    }
                }
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.report_failure(OperationKind::Withdraw, &e);
                Err(e.into())
            }
        }
    }

    /// Store a TON payout address with the backend.
    pub async fn update_wallet(
        &self,
        session: &SessionContext,
        wallet: &str,
    ) -> Result<Outcome, ActionError> {
        let wallet = self.guard(check_wallet(wallet))?;

        let ticket = self.sequencer.issue(OperationKind::UpdateWallet);
        info!(user_id = ?session.user_id(), wallet, seq = ticket.seq, "Updating wallet");

        let result = self.api.update_wallet(session.identity(), wallet).await;
        if self.is_stale(ticket) {
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(_) => {
                self.view.render(Field::Wallet, wallet);
                session.update(|s| s.wallet = Some(wallet.to_string()));
                self.view.alert(&format!("Wallet updated to {wallet}"));
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.report_failure(OperationKind::UpdateWallet, &e);
                Err(e.into())
            }
        }
    }

    fn guard<T>(&self, checked: Result<T, ValidationError>) -> Result<T, ActionError> {
        checked.map_err(|e| {
            debug!(error = %e, "Input rejected before sending");
            self.view.alert(&e.to_string());
            ActionError::Invalid(e)
        })
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        let stale = !self.sequencer.is_current(ticket);
        if stale {
            debug!(
                operation = ticket.kind.name(),
                seq = ticket.seq,
                "Discarding response superseded by a newer request"
            );
        }
        stale
    }

    fn report_failure(&self, kind: OperationKind, error: &ApiError) {
        if error.is_rejection() {
            info!(operation = kind.name(), error = %error, "Backend rejected request");
            self.view.alert(&error.to_string());
        } else {
            warn!(operation = kind.name(), error = %error, "Request failed");
            self.view.alert(NETWORK_ERROR_ALERT);
        }
    }
}

/// Strings without their JSON quotes, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AckResponse, ApiVariant, BalanceResponse, WithdrawResponse};
    use crate::identity::{Identity, UserId};
    use crate::view::MemoryView;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Balance,
        AddStars(i64),
        Withdraw(i64),
        Wallet(String),
    }

    type Gate = Option<oneshot::Receiver<()>>;

    /// Scripted backend. Each call pops the next queued reply for its kind.
    struct FakeApi {
        variant: ApiVariant,
        calls: Mutex<Vec<Call>>,
        balances: Mutex<VecDeque<(Gate, Result<BalanceResponse, ApiError>)>>,
        acks: Mutex<VecDeque<Result<AckResponse, ApiError>>>,
        withdrawals: Mutex<VecDeque<Result<WithdrawResponse, ApiError>>>,
    }

    impl FakeApi {
        fn new(variant: ApiVariant) -> Self {
            Self {
                variant,
                calls: Mutex::new(Vec::new()),
                balances: Mutex::new(VecDeque::new()),
                acks: Mutex::new(VecDeque::new()),
                withdrawals: Mutex::new(VecDeque::new()),
            }
        }

        fn balance(self, balance: i64) -> Self {
            self.balance_reply(Ok(BalanceResponse {
                balance: Some(balance),
                ..Default::default()
            }))
        }

        fn balance_reply(self, reply: Result<BalanceResponse, ApiError>) -> Self {
            self.balances.lock().unwrap().push_back((None, reply));
            self
        }

        fn gated_balance(self, gate: oneshot::Receiver<()>, balance: i64) -> Self {
            self.gated_balance_reply(
                gate,
                Ok(BalanceResponse {
                    balance: Some(balance),
                    ..Default::default()
                }),
            )
        }

        /// Reply held back until `gate` fires.
        fn gated_balance_reply(
            self,
            gate: oneshot::Receiver<()>,
            reply: Result<BalanceResponse, ApiError>,
        ) -> Self {
            self.balances.lock().unwrap().push_back((Some(gate), reply));
            self
        }

        fn ack(self, reply: Result<AckResponse, ApiError>) -> Self {
            self.acks.lock().unwrap().push_back(reply);
            self
        }

        fn withdrawal(self, reply: Result<WithdrawResponse, ApiError>) -> Self {
            self.withdrawals.lock().unwrap().push_back(reply);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl StarsApi for FakeApi {
        fn variant(&self) -> ApiVariant {
            self.variant
        }

        async fn fetch_balance(&self, _: &Identity) -> Result<BalanceResponse, ApiError> {
            self.record(Call::Balance);
            let (gate, reply) = self
                .balances
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected balance call");
            if let Some(gate) = gate {
                gate.await.unwrap();
            }
            reply
        }

        async fn add_stars(&self, _: &Identity, amount: i64) -> Result<AckResponse, ApiError> {
            self.record(Call::AddStars(amount));
            self.acks.lock().unwrap().pop_front().expect("unexpected add_stars call")
        }

        async fn withdraw(
            &self,
            _: &Identity,
            amount: i64,
        ) -> Result<WithdrawResponse, ApiError> {
            self.record(Call::Withdraw(amount));
            self.withdrawals
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected withdraw call")
        }

        async fn update_wallet(&self, _: &Identity, wallet: &str) -> Result<AckResponse, ApiError> {
            self.record(Call::Wallet(wallet.to_string()));
            self.acks.lock().unwrap().pop_front().expect("unexpected update_wallet call")
        }
    }

    fn session() -> SessionContext {
        SessionContext::new(Identity {
            user_id: Some(UserId::Numeric(6172153716)),
            ..Default::default()
        })
    }

    fn app(api: FakeApi) -> MiniApp<FakeApi, MemoryView> {
        MiniApp::new(api, MemoryView::new())
    }

    #[tokio::test]
    async fn test_load_balance_renders_fields() {
        let app = app(FakeApi::new(ApiVariant::WebApp).balance_reply(Ok(BalanceResponse {
            status: Some("success".into()),
            balance: Some(42),
            vip_level: Some(json!("Gold")),
            total_deposits: Some(5),
            ..Default::default()
        })));
        let session = session();

        let outcome = app.load_balance(&session).await.unwrap();

        assert_eq!(outcome, Outcome::Applied);
        let view = app.view();
        assert_eq!(view.field(Field::Balance).as_deref(), Some("42 Stars"));
        assert_eq!(view.field(Field::VipLevel).as_deref(), Some("Gold"));
        assert_eq!(view.field(Field::TotalDeposits).as_deref(), Some("5"));
        assert!(view.alerts().is_empty());
        assert_eq!(session.balance(), Some(42));
    }

    #[tokio::test]
    async fn test_load_balance_legacy_format_and_defaults() {
        let app = app(FakeApi::new(ApiVariant::Legacy).balance_reply(Ok(BalanceResponse {
            vip_level: Some(json!(2)),
            ton_wallet: Some("EQwallet".into()),
            ..Default::default()
        })));
        let session = session();

        app.load_balance(&session).await.unwrap();

        let view = app.view();
        assert_eq!(view.field(Field::Balance).as_deref(), Some("0"));
        assert_eq!(view.field(Field::VipLevel).as_deref(), Some("2"));
        assert_eq!(view.field(Field::Wallet).as_deref(), Some("EQwallet"));
        assert_eq!(session.wallet().as_deref(), Some("EQwallet"));
    }

    #[tokio::test]
    async fn test_load_balance_missing_fields_keep_previous() {
        let app = app(FakeApi::new(ApiVariant::WebApp)
            .balance_reply(Ok(BalanceResponse {
                balance: Some(42),
                vip_level: Some(json!("Gold")),
                total_deposits: Some(5),
                ..Default::default()
            }))
            .balance(40));
        let session = session();

        app.load_balance(&session).await.unwrap();
        app.load_balance(&session).await.unwrap();

        let view = app.view();
        assert_eq!(view.field(Field::Balance).as_deref(), Some("40 Stars"));
        assert_eq!(view.field(Field::VipLevel).as_deref(), Some("Gold"));
        assert_eq!(view.field(Field::TotalDeposits).as_deref(), Some("5"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.balance, Some(40));
        assert_eq!(snapshot.vip_level, Some(json!("Gold")));
        assert_eq!(snapshot.total_deposits, Some(5));
    }

    #[tokio::test]
    async fn test_load_balance_network_failure() {
        let app = app(FakeApi::new(ApiVariant::Legacy)
            .balance_reply(Err(ApiError::Transport("connection refused".into()))));
        let session = session();

        let err = app.load_balance(&session).await.unwrap_err();

        assert!(matches!(err, ActionError::Api(ApiError::Transport(_))));
        assert_eq!(
            app.view().field(Field::Balance).as_deref(),
            Some(BALANCE_ERROR_TEXT)
        );
        assert_eq!(app.view().alerts(), vec![NETWORK_ERROR_ALERT.to_string()]);
        assert_eq!(app.api().calls(), vec![Call::Balance]);
        assert_eq!(session.balance(), None);
    }

    #[tokio::test]
    async fn test_load_balance_rejection_shows_backend_message() {
        let app = app(FakeApi::new(ApiVariant::WebApp)
            .balance_reply(Err(ApiError::Rejected("Invalid initData".into()))));

        app.load_balance(&session()).await.unwrap_err();

        assert_eq!(app.view().last_alert().as_deref(), Some("Invalid initData"));
    }

    #[tokio::test]
    async fn test_deposit_below_minimum_makes_no_call() {
        for input in ["99", "0", "-100", "71"] {
            let app = app(FakeApi::new(ApiVariant::Legacy));
            let err = app.request_deposit(&session(), input).await.unwrap_err();

            assert!(matches!(
                err,
                ActionError::Invalid(ValidationError::BelowMinimumDeposit(_))
            ));
            assert!(app.api().calls().is_empty());
            assert_eq!(
                app.view().alerts(),
                vec!["Minimum 100 Stars".to_string()]
            );
        }
    }

    #[tokio::test]
    async fn test_deposit_non_numeric_makes_no_call() {
        let app = app(FakeApi::new(ApiVariant::Legacy));
        let err = app.request_deposit(&session(), "lots").await.unwrap_err();
        assert!(matches!(err, ActionError::Invalid(ValidationError::NotANumber(_))));
        assert!(app.api().calls().is_empty());
        assert_eq!(app.view().alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_deposit_posts_once_then_reloads_once() {
        for amount in [100_i64, 101, 2500] {
            let app = app(FakeApi::new(ApiVariant::Legacy)
                .ack(Ok(AckResponse::default()))
                .balance(amount));
            let session = session();

            let outcome = app
                .request_deposit(&session, &amount.to_string())
                .await
                .unwrap();

            assert_eq!(outcome, Outcome::Applied);
            assert_eq!(app.api().calls(), vec![Call::AddStars(amount), Call::Balance]);
            assert_eq!(app.view().alerts(), vec![format!("Added {amount} Stars!")]);
            assert_eq!(session.balance(), Some(amount));
        }
    }

    #[tokio::test]
    async fn test_deposit_failure_skips_reload() {
        let app = app(FakeApi::new(ApiVariant::Legacy)
            .ack(Err(ApiError::Http(500))));

        app.request_deposit(&session(), "150").await.unwrap_err();

        assert_eq!(app.api().calls(), vec![Call::AddStars(150)]);
        assert_eq!(app.view().alerts(), vec![NETWORK_ERROR_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn test_withdraw_success_replaces_balance() {
        let app = app(FakeApi::new(ApiVariant::Legacy).withdrawal(Ok(WithdrawResponse {
            status: Some("success".into()),
            new_balance: Some(10),
            message: Some("ok".into()),
            error: None,
        })));
        let session = session();

        app.request_withdrawal(&session, AmountSource::Field("30"))
            .await
            .unwrap();

        assert_eq!(app.api().calls(), vec![Call::Withdraw(30)]);
        assert_eq!(app.view().field(Field::Balance).as_deref(), Some("10"));
        assert!(app.view().last_alert().unwrap().contains("ok"));
        assert_eq!(session.balance(), Some(10));
    }

    #[tokio::test]
    async fn test_withdraw_rejection_leaves_balance() {
        let app = app(FakeApi::new(ApiVariant::WebApp)
            .balance(50)
            .withdrawal(Err(ApiError::Rejected("insufficient funds".into()))));
        let session = session();
        app.load_balance(&session).await.unwrap();

        let err = app
            .request_withdrawal(&session, AmountSource::Field("500"))
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Api(ApiError::Rejected(_))));
        assert!(app
            .view()
            .last_alert()
            .unwrap()
            .contains("insufficient funds"));
        assert_eq!(app.view().field(Field::Balance).as_deref(), Some("50 Stars"));
        assert_eq!(session.balance(), Some(50));
        // no re-fetch after a failed withdrawal
        assert_eq!(app.api().calls(), vec![Call::Balance, Call::Withdraw(500)]);
    }

    #[tokio::test]
    async fn test_withdraw_without_new_balance_reloads() {
        let app = app(FakeApi::new(ApiVariant::Legacy)
            .withdrawal(Ok(WithdrawResponse {
                status: Some("ok".into()),
                ..Default::default()
            }))
            .balance(71));
        let session = session();

        app.request_withdrawal(&session, AmountSource::Field("100"))
            .await
            .unwrap();

        assert_eq!(app.api().calls(), vec![Call::Withdraw(100), Call::Balance]);
        assert_eq!(
            app.view().alerts(),
            vec!["Withdraw request sent: 100 Stars".to_string()]
        );
        assert_eq!(app.view().field(Field::Balance).as_deref(), Some("71"));
    }

    #[tokio::test]
    async fn test_withdraw_has_no_client_minimum() {
        let app = app(FakeApi::new(ApiVariant::Legacy).withdrawal(Ok(WithdrawResponse {
            new_balance: Some(0),
            ..Default::default()
        })));
        app.request_withdrawal(&session(), AmountSource::Field("1"))
            .await
            .unwrap();
        assert_eq!(app.api().calls(), vec![Call::Withdraw(1)]);
    }

    #[tokio::test]
    async fn test_withdraw_amount_from_prompt() {
        let app = app(FakeApi::new(ApiVariant::Legacy).withdrawal(Ok(WithdrawResponse {
            new_balance: Some(5),
            ..Default::default()
        })));
        app.view().queue_prompt_answer(Some("25"));

        app.request_withdrawal(&session(), AmountSource::Prompt)
            .await
            .unwrap();

        assert_eq!(app.view().prompts(), vec![WITHDRAW_PROMPT.to_string()]);
        assert_eq!(app.api().calls(), vec![Call::Withdraw(25)]);
    }

    #[tokio::test]
    async fn test_withdraw_prompt_cancelled() {
        let app = app(FakeApi::new(ApiVariant::Legacy));
        app.view().queue_prompt_answer(None);

        let err = app
            .request_withdrawal(&session(), AmountSource::Prompt)
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Cancelled));
        assert!(app.api().calls().is_empty());
        assert!(app.view().alerts().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_accepted_forms_call_backend() {
        for wallet in ["EQabc", "UQabc", "alice.ton"] {
            let app = app(FakeApi::new(ApiVariant::Legacy).ack(Ok(AckResponse::default())));
            let session = session();

            app.update_wallet(&session, wallet).await.unwrap();

            assert_eq!(app.api().calls(), vec![Call::Wallet(wallet.to_string())]);
            assert_eq!(
                app.view().alerts(),
                vec![format!("Wallet updated to {wallet}")]
            );
            assert_eq!(session.wallet().as_deref(), Some(wallet));
            assert_eq!(app.view().field(Field::Balance), None);
        }
    }

    #[tokio::test]
    async fn test_wallet_rejected_forms_make_no_call() {
        for wallet in ["", "0xdeadbeef", "eqabc", "wallet.TON"] {
            let app = app(FakeApi::new(ApiVariant::Legacy));
            app.update_wallet(&session(), wallet).await.unwrap_err();
            assert!(app.api().calls().is_empty());
            assert_eq!(app.view().alerts(), vec!["Invalid TON wallet".to_string()]);
        }
    }

    #[tokio::test]
    async fn test_stale_balance_response_discarded() {
        let (release_first, first_gate) = oneshot::channel();
        let app = app(FakeApi::new(ApiVariant::Legacy)
            .gated_balance(first_gate, 1)
            .balance(2));
        let session = session();

        let (first, second, _) = tokio::join!(
            app.load_balance(&session),
            app.load_balance(&session),
            async {
                release_first.send(()).unwrap();
            }
        );

        assert_eq!(first.unwrap(), Outcome::Stale);
        assert_eq!(second.unwrap(), Outcome::Applied);
        assert_eq!(app.view().field(Field::Balance).as_deref(), Some("2"));
        assert_eq!(session.balance(), Some(2));
    }

    #[tokio::test]
    async fn test_stale_balance_error_discarded() {
        let (release_first, first_gate) = oneshot::channel();
        let app = app(FakeApi::new(ApiVariant::Legacy)
            .gated_balance_reply(
                first_gate,
                Err(ApiError::Transport("connection reset".into())),
            )
            .balance(2));
        let session = session();

        let (first, second, _) = tokio::join!(
            app.load_balance(&session),
            app.load_balance(&session),
            async {
                release_first.send(()).unwrap();
            }
        );

        assert_eq!(first.unwrap(), Outcome::Stale);
        assert_eq!(second.unwrap(), Outcome::Applied);
        assert!(app.view().alerts().is_empty());
        assert_eq!(app.view().field(Field::Balance).as_deref(), Some("2"));
        assert_eq!(session.balance(), Some(2));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Gold")), "Gold");
        assert_eq!(display_value(&json!(3)), "3");
        assert_eq!(display_value(&json!(null)), "null");
    }
}
