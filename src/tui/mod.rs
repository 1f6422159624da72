//! Terminal User Interface Module
//!
//! The storefront's visual interface, built with Ratatui.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Storefront   [h] Home  [p] Products                     🛒 3   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ Search [/] ─────────────────────────────────────────────────────│
//! │  All  Audio  Wearables  Accessories  ...          [Tab] category│
//! │  ┌─ Featured Products ───────────────┐┌─ Shopping Cart ──────┐  │
//! │  │ ▶ Crimson Wireless Headphones ... ││ items, qty, total    │  │
//! │  └───────────────────────────────────┘└──────────────────────┘  │
//! │  3 items | $389.98 │ [Enter] Open [a] Add [c] Cart [F1] Help    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, Modal, PaymentStatus};
pub use event::{AppAction, EventHandler};

use crate::catalog::Catalog;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the storefront TUI
pub async fn run(config: crate::config::Config, catalog: Catalog) -> anyhow::Result<()> {
    info!("Starting TUI with {} products", catalog.len());

    let mut terminal = init_terminal()?;
    let mut events = EventHandler::new(config.tui.tick_rate);
    let mut app = App::new(config, catalog);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Payment notifications arrive independently of user input
        app.poll_events();

        // Ticks keep this from blocking longer than the tick rate
        let Some(action) = events.next().await else {
            break;
        };
        match action {
            AppAction::Quit => {
                if app.confirm_quit() {
                    break;
                }
            }
            AppAction::ForceQuit => break,
            _ => app.handle_action(action).await,
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
