//! Centralized constants for the Stars mini app client
//!
//! Endpoint paths, validation limits and persistence keys used across the
//! library and both binaries.

// =============================================================================
// Backend
// =============================================================================

/// Deployment the mini app talks to when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://stars-bot-fwps.onrender.com";

pub const ENDPOINT_GET_USER_DATA: &str = "/get_user_data";
pub const ENDPOINT_GET_BALANCE: &str = "/get_balance";
pub const ENDPOINT_ADD_STARS: &str = "/add_stars";
pub const ENDPOINT_WITHDRAW_STARS: &str = "/withdraw_stars";
pub const ENDPOINT_REQUEST_WITHDRAW: &str = "/request_withdraw";
pub const ENDPOINT_UPDATE_WALLET: &str = "/update_wallet";

/// Response `status` values treated as success
pub const SUCCESS_STATUSES: &[&str] = &["success", "ok"];

// =============================================================================
// Client-side guards
// =============================================================================

/// Smallest deposit the client will forward
pub const MIN_DEPOSIT_STARS: i64 = 100;

/// TON wallet address prefixes (bounceable / non-bounceable)
pub const WALLET_PREFIXES: [&str; 2] = ["EQ", "UQ"];

/// TON DNS suffix
pub const WALLET_SUFFIX: &str = ".ton";

// =============================================================================
// State File
// =============================================================================

pub const STATE_FILE_CLIENT: &str = "stars_miniapp.env";

/// Key holding the persisted user identifier
pub const STATE_KEY_USER_ID: &str = "USER_ID";

// =============================================================================
// Terminal UI
// =============================================================================

/// Input poll interval for the interactive client
pub const TUI_POLL_MS: u64 = 250;

/// How many alerts the interactive client keeps in its history pane
pub const TUI_ALERT_HISTORY: usize = 50;
