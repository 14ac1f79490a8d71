//! Client-side input guards.
//!
//! These only save a round trip for obviously bad input. They are not a
//! security boundary: the backend must apply the same rules itself.

use crate::config::consts::{MIN_DEPOSIT_STARS, WALLET_PREFIXES, WALLET_SUFFIX};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter a whole number of Stars")]
    NotANumber(String),
    #[error("Minimum {} Stars", MIN_DEPOSIT_STARS)]
    BelowMinimumDeposit(i64),
    #[error("Invalid TON wallet")]
    InvalidWallet(String),
}

/// Parse an amount typed into a form field or prompt.
pub fn parse_amount(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))
}

pub fn check_deposit(amount: i64) -> Result<i64, ValidationError> {
    if amount < MIN_DEPOSIT_STARS {
        return Err(ValidationError::BelowMinimumDeposit(amount));
    }
    Ok(amount)
}

/// Accepts `EQ…`, `UQ…` or `….ton`.
///
/// Any one condition is enough, so e.g. `garbage.ton` passes. The backend
/// decides what a valid wallet really is.
pub fn check_wallet(wallet: &str) -> Result<&str, ValidationError> {
    let accepted = WALLET_PREFIXES.iter().any(|p| wallet.starts_with(p))
        || wallet.ends_with(WALLET_SUFFIX);
    if accepted {
        Ok(wallet)
    } else {
        Err(ValidationError::InvalidWallet(wallet.to_string()))
    }
}
