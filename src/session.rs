use serde_json::Value;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::identity::{Identity, UserId};

/// Last values the backend reported for this user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSnapshot {
    pub balance: Option<i64>,
    /// Rendered as-is; the tier scheme belongs to the backend.
    pub vip_level: Option<Value>,
    pub total_deposits: Option<i64>,
    pub wallet: Option<String>,
}

/// Per-run session state, created once at startup and handed to every
/// operation.
///
/// The identity never changes after construction. The snapshot is updated
/// from successful, non-stale responses only.
#[derive(Debug)]
pub struct SessionContext {
    identity: Identity,
    snapshot: Mutex<BalanceSnapshot>,
}

impl SessionContext {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            snapshot: Mutex::new(BalanceSnapshot::default()),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.identity.user_id.as_ref()
    }

    pub fn snapshot(&self) -> BalanceSnapshot {
        self.lock().clone()
    }

    pub fn balance(&self) -> Option<i64> {
        self.lock().balance
    }

    pub fn wallet(&self) -> Option<String> {
        self.lock().wallet.clone()
    }

    pub(crate) fn update<F: FnOnce(&mut BalanceSnapshot)>(&self, f: F) {
        f(&mut self.lock());
    }

    fn lock(&self) -> MutexGuard<'_, BalanceSnapshot> {
        // The snapshot holds plain values, so a poisoned lock is still usable.
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
