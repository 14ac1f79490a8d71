use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;

use stars_miniapp::app::{AmountSource, MiniApp};
use stars_miniapp::config::{ClientArgs, ClientConfig};
use stars_miniapp::logging;
use stars_miniapp::session::SessionContext;
use stars_miniapp::view::ConsoleView;

/// Stars mini app - one-shot commands against the Stars backend
#[derive(Parser, Debug)]
#[command(name = "stars_cli")]
#[command(about = "Check and manage a Telegram Stars balance", long_about = None)]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    /// Log at info level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show balance, VIP level and total deposits
    Balance,
    /// Add Stars (minimum 100)
    Deposit {
        /// Number of Stars
        amount: String,
    },
    /// Request a withdrawal; prompts for the amount when omitted
    Withdraw {
        /// Number of Stars
        amount: Option<String>,
    },
    /// Set the TON wallet withdrawals are paid to
    Wallet {
        /// EQ…/UQ… address or a .ton name
        address: String,
    },
    /// Show which identity requests are sent for
    Whoami,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_stderr(if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    })?;

    let config = ClientConfig::load(cli.client)?;
    let session = SessionContext::new(config.identity.clone());
    let app = MiniApp::new(config.api()?, ConsoleView::new());

    let result = match &cli.command {
        Command::Balance => app.load_balance(&session).await,
        Command::Deposit { amount } => app.request_deposit(&session, amount).await,
        Command::Withdraw { amount } => {
            let source = match amount {
                Some(amount) => AmountSource::Field(amount),
                None => AmountSource::Prompt,
            };
            app.request_withdrawal(&session, source).await
        }
        Command::Wallet { address } => app.update_wallet(&session, address).await,
        Command::Whoami => {
            let identity = session.identity();
            println!("User:      {}", identity.display_name());
            match &identity.user_id {
                Some(id) => println!("User id:   {id}"),
                None => println!("User id:   (none)"),
            }
            println!(
                "initData:  {}",
                if identity.init_data.is_some() { "present" } else { "absent" }
            );
            println!("Backend:   {} ({:?})", config.api_url, config.variant);
            return Ok(ExitCode::SUCCESS);
        }
    };

    app.view().print_summary(&format!("⭐ {} ⭐", session.identity().display_name()));

    match result {
        Ok(outcome) => {
            info!(?outcome, "Done");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            info!(error = %e, "Command failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
