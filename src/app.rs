//! Main application module.
//!
//! This module contains the main `App` struct that coordinates the event
//! loop, state management, and rendering.

use crate::config::Config;
use crate::data::MarketData;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Market data provider.
    provider: Box<dyn MarketData>,
    /// Symbol whose details payload is currently loaded.
    details_symbol: Option<String>,
    /// Whether mouse capture was enabled.
    mouse_capture: bool,
}

impl App {
    /// Create a new application over the given data provider.
    pub fn new(config: Config, provider: Box<dyn MarketData>) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mouse_capture = config.ui.mouse_support;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(action_tx.clone(), config.ui.page_size);

        // Create event handler
        let event_handler = EventHandler::new(
            action_tx,
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            provider,
            details_symbol: None,
            mouse_capture,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Load the sample listings before the first frame
        self.load_all().await;

        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action).await;
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await;
                }
            }

            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Reduce an action, then reconcile anything that needs the provider.
    async fn handle_action(&mut self, action: Action) {
        let refresh = matches!(action, Action::Refresh);
        self.store.reduce(action);

        if refresh {
            self.load_all().await;
        } else {
            self.reconcile_details().await;
        }
    }

    /// Load every listing from the provider, surfacing failures as a
    /// store error.
    async fn load_all(&mut self) {
        self.store.reduce(Action::SetLoading(true));

        match self.provider.list_stocks().await {
            Ok(stocks) => self.store.reduce(Action::StocksLoaded(stocks)),
            Err(e) => {
                tracing::warn!("failed to load stocks: {e}");
                self.store.reduce(Action::SetError(e.to_string()));
            }
        }
        match self.provider.watchlist().await {
            Ok(watchlist) => self.store.reduce(Action::WatchlistLoaded(watchlist)),
            Err(e) => tracing::warn!("failed to load watchlist: {e}"),
        }
        match self.provider.signals().await {
            Ok(signals) => self.store.reduce(Action::SignalsLoaded(signals)),
            Err(e) => tracing::warn!("failed to load signals: {e}"),
        }
        match self.provider.screener_rows().await {
            Ok(rows) => self.store.reduce(Action::ScreenerLoaded(rows)),
            Err(e) => {
                tracing::warn!("failed to load screener rows: {e}");
                self.store.reduce(Action::SetError(e.to_string()));
            }
        }
        match self.provider.latest_news().await {
            Ok(items) => self.store.reduce(Action::NewsLoaded(items)),
            Err(e) => tracing::warn!("failed to load news: {e}"),
        }

        self.details_symbol = None;
        self.reconcile_details().await;
        self.store.reduce(Action::SetLoading(false));
    }

    /// Fetch the details payload when the details symbol has changed,
    /// e.g. after a screener hand-off.
    async fn reconcile_details(&mut self) {
        let wanted = self
            .store
            .details
            .symbol
            .clone()
            .or_else(|| self.store.dashboard.stocks.first().map(|s| s.symbol.clone()));

        let Some(symbol) = wanted else { return };
        if self.details_symbol.as_deref() == Some(symbol.as_str()) {
            return;
        }

        match self.provider.stock_details(&symbol).await {
            Ok(details) => {
                self.store.reduce(Action::DetailsLoaded(details));
                self.details_symbol = Some(symbol);
            }
            Err(e) => {
                tracing::warn!("failed to load details for {symbol}: {e}");
                self.store.reduce(Action::SetError(e.to_string()));
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}
