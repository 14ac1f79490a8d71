use std::sync::atomic::{AtomicU64, Ordering};

/// Operation kinds that are sequenced independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    LoadBalance,
    Deposit,
    Withdraw,
    UpdateWallet,
}

impl OperationKind {
    pub fn all() -> &'static [OperationKind] {
        &[
            OperationKind::LoadBalance,
            OperationKind::Deposit,
            OperationKind::Withdraw,
            OperationKind::UpdateWallet,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::LoadBalance => "load_balance",
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
            OperationKind::UpdateWallet => "update_wallet",
        }
    }

    fn index(&self) -> usize {
        match self {
            OperationKind::LoadBalance => 0,
            OperationKind::Deposit => 1,
            OperationKind::Withdraw => 2,
            OperationKind::UpdateWallet => 3,
        }
    }
}

/// Token handed to a request when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: OperationKind,
    pub seq: u64,
}

/// Hands out increasing per-kind tickets so that only the response to the
/// most recently issued request of a kind gets applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: [AtomicU64; 4],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, kind: OperationKind) -> Ticket {
        let seq = self.latest[kind.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { kind, seq }
    }

    /// Whether no newer request of the same kind has been issued since.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.kind.index()].load(Ordering::SeqCst) == ticket.seq
    }
}
