use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use stars_miniapp::app::{ActionError, AmountSource, MiniApp, Outcome};
use stars_miniapp::config::consts::TUI_POLL_MS;
use stars_miniapp::config::{ClientArgs, ClientConfig};
use stars_miniapp::logging;
use stars_miniapp::session::SessionContext;
use stars_miniapp::tui::{self, Action, TuiState};
use stars_miniapp::view::MemoryView;
use stars_miniapp::HttpStarsApi;

/// Stars mini app - interactive terminal client
#[derive(Parser, Debug)]
#[command(name = "stars_app")]
#[command(about = "Stars mini app - interactive terminal client", long_about = None)]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    /// Write logs here; logging is off without it
    #[arg(long, env = "STARS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

type App = MiniApp<HttpStarsApi, Arc<MemoryView>>;
type Pending<'a> = LocalBoxFuture<'a, Result<Outcome, ActionError>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file(path, tracing::Level::INFO)?;
    }

    let config = ClientConfig::load(cli.client)?;
    let session = SessionContext::new(config.identity.clone());
    let view = Arc::new(MemoryView::new());
    let app = MiniApp::new(config.api()?, view.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &app, &session, &view).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Terminal client stopped");
    }
    info!("Shutdown complete");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &App,
    session: &SessionContext,
    view: &MemoryView,
) -> Result<()> {
    let mut state = TuiState::new(session.identity().display_name());
    let mut pending: FuturesUnordered<Pending<'_>> = FuturesUnordered::new();

    // Initial balance load
    pending.push(app.load_balance(session).boxed_local());

    loop {
        for alert in view.take_alerts() {
            state.push_alert(alert);
        }
        state.in_flight = pending.len();
        let fields = view.fields();
        terminal.draw(|f| tui::draw(f, &state, &fields))?;

        // Let in-flight requests progress until the next input poll
        tokio::select! {
            Some(_) = pending.next(), if !pending.is_empty() => {}
            _ = tokio::time::sleep(Duration::from_millis(TUI_POLL_MS)) => {}
        }

        while let Some(event) = tui::poll_event(Duration::ZERO)? {
            let Event::Key(key) = event else { continue };
            let Some(action) = state.handle_key(key) else { continue };
            let request: Pending<'_> = match action {
                Action::Quit => return Ok(()),
                Action::Refresh => app.load_balance(session).boxed_local(),
                Action::Deposit(amount) => {
                    async move { app.request_deposit(session, &amount).await }.boxed_local()
                }
                Action::Withdraw(amount) => async move {
                    app.request_withdrawal(session, AmountSource::Field(&amount))
                        .await
                }
                .boxed_local(),
                Action::UpdateWallet(wallet) => {
                    async move { app.update_wallet(session, &wallet).await }.boxed_local()
                }
            };
            pending.push(request);
        }
    }
}
