use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use sci_client::{HttpClient, TokenResolver};
use sci_config::{AppConfig, Session};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

mod actions;
mod cli;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod view_models;
mod views;

use actions::{Action, TaskDirectoryAction};
use cli::{Cli, Commands};
use dispatcher::Dispatcher;
use domain_models::StatusFilter;
use middleware::{
    Api, KeyboardMiddleware, LoggingMiddleware, PollingMiddleware, SelectionMiddleware,
    SessionMiddleware, SubmissionMiddleware, TaskDirectoryMiddleware,
};
use state::AppState;
use store::Store;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting sci-dashboard, logging to {:?}", log_file);

    let mut config = AppConfig::load();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    let client = HttpClient::new(&config.api_base_url, config.request_timeout())
        .context("Failed to create API client")?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_dashboard(config, client).await,
        Commands::Login { username, password } => cli::login(&client, username, password).await,
        Commands::Signup {
            username,
            email,
            password,
        } => cli::signup(&client, username, email, password).await,
        Commands::Logout => cli::logout(),
        Commands::Whoami => cli::whoami(&client).await,
        Commands::Status { task_id } => cli::status(&client, &task_id).await,
    }
}

async fn run_dashboard(config: AppConfig, client: HttpClient) -> Result<()> {
    let credential = TokenResolver::new().resolve()?;

    let session = Session::load();
    let username = session.auth.as_ref().map(|a| a.username.clone());
    let filter = StatusFilter::parse(
        session
            .status_filter()
            .unwrap_or(config.default_status_filter.as_str()),
    );

    let api = Api::new(Arc::new(client), credential);
    let mut store = Store::new(AppState::new(&config, filter, username));

    // Middleware runs in this order
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(KeyboardMiddleware::new());
    store.add_middleware(TaskDirectoryMiddleware::new(api.clone(), config.cancel_reason.clone()));
    store.add_middleware(PollingMiddleware::new(config.poll_interval()));
    store.add_middleware(SelectionMiddleware::new(api.clone()));
    store.add_middleware(SubmissionMiddleware::new(api));
    store.add_middleware(SessionMiddleware::new(sci_config::session_path()?));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(tx);
    dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut store, &dispatcher, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting sci-dashboard");
    result
}

async fn run_app(
    terminal: &mut Tui,
    store: &mut Store,
    dispatcher: &Dispatcher,
    rx: &mut UnboundedReceiver<Action>,
) -> Result<()> {
    loop {
        // Apply everything queued since the last frame, in order
        while let Ok(action) = rx.try_recv() {
            store.dispatch(action, dispatcher).await;
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch(Action::KeyPressed(key));
                }
            }
        }
    }

    Ok(())
}
