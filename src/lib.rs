//! Client for the Telegram "Stars" mini app backend.
//!
//! Reads the user's identity, talks to the backend over HTTP and renders
//! balance, VIP level and deposits into a [`view::View`].

pub mod api;
pub mod app;
pub mod config;
pub mod identity;
pub mod logging;
pub mod sequence;
pub mod session;
pub mod state;
pub mod tui;
pub mod validation;
pub mod view;

pub use api::{ApiError, ApiVariant, HttpStarsApi, StarsApi};
pub use app::{ActionError, AmountSource, MiniApp, Outcome};
pub use identity::{Identity, InitData, UserId, WebAppUser};
pub use session::SessionContext;
