use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use super::consts::{DEFAULT_API_URL, STATE_FILE_CLIENT};
use super::{load_config_from_path, FileConfig};
use crate::api::{ApiVariant, HttpStarsApi};
use crate::identity::{Identity, InitData, UserId, WebAppUser};
use crate::state::StateFile;

/// Connection and identity options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    /// Base URL of the Stars backend
    #[arg(long, env = "STARS_API_URL")]
    pub api_url: Option<String>,

    /// Endpoint naming and body shape the backend expects
    #[arg(long, value_enum, env = "STARS_API_VARIANT")]
    pub variant: Option<ApiVariant>,

    /// Backend user id (overrides the WebApp user and the stored id)
    #[arg(long, env = "STARS_USER_ID")]
    pub user_id: Option<String>,

    /// Telegram WebApp user object as JSON
    #[arg(long, env = "TG_USER")]
    pub tg_user: Option<String>,

    /// Raw Telegram WebApp initData, forwarded to the backend unmodified
    #[arg(long, env = "TG_INIT_DATA")]
    pub init_data: Option<String>,

    /// File the user id is remembered in between runs
    #[arg(long, env = "STARS_STATE_FILE", default_value = STATE_FILE_CLIENT)]
    pub state_file: PathBuf,

    /// Optional TOML config file
    #[arg(long, env = "STARS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (unbounded when unset)
    #[arg(long, env = "STARS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Client configuration with all values resolved
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub variant: ApiVariant,
    pub timeout: Option<Duration>,
    pub identity: Identity,
    pub state_file: StateFile,
}

impl ClientConfig {
    /// Resolve configuration with priority: CLI/env -> state file -> config
    /// file -> defaults. A newly learned user id is written back to the
    /// state file.
    pub fn load(args: ClientArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_config_from_path(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => FileConfig::default(),
        };
        let state_file = StateFile::new(&args.state_file);

        let api_url = args
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let variant = args.variant.or(file.variant).unwrap_or_default();
        let timeout = args
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs);

        let user = args
            .tg_user
            .as_deref()
            .map(WebAppUser::from_json)
            .transpose()
            .context("Failed to parse --tg-user")?;
        let stored = state_file.load_user_id();
        let identity = Identity::resolve(
            args.user_id.as_deref().map(UserId::from),
            user,
            args.init_data.map(InitData::new),
            stored.clone(),
        )
        .context("Failed to read Telegram identity")?;

        if let Some(user_id) = &identity.user_id {
            if !stored.as_ref().is_some_and(|s| s.same_as(user_id)) {
                match state_file.save_user_id(user_id) {
                    Ok(()) => info!(
                        user_id = %user_id,
                        path = %state_file.path().display(),
                        "Remembered user id"
                    ),
                    Err(e) => warn!(error = %e, "Could not persist user id"),
                }
            }
        } else {
            warn!("No user id available; requests will carry a null user id");
        }

        info!(api_url = %api_url, variant = ?variant, "Loaded ClientConfig");
        Ok(Self {
            api_url,
            variant,
            timeout,
            identity,
            state_file,
        })
    }

    pub fn api(&self) -> Result<HttpStarsApi> {
        HttpStarsApi::new(&self.api_url, self.variant, self.timeout)
            .context("Failed to build API client")
    }
}
