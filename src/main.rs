//! Stockroom - actor-based inventory client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - owned state and command handlers
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use stockroom::constants::{APP_NAME, APP_VERSION, LOG_FILE};
use stockroom::messages::ui_events::key_to_ui_event;
use stockroom::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use stockroom::ui::{centered_rect, detail_lines, item_row, render_commands, severity_color};
use stockroom::{AppActor, AppState, Config, InventoryApi, InventoryClient, NetworkActor, WorkflowSettings};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load().context("loading configuration")?;
    let client = InventoryClient::new(config.client_config()).context("building HTTP client")?;
    tracing::info!(base_url = client.base_url(), has_token = config.bearer_token().is_some(), "Starting {}", APP_NAME);

    let api: Arc<dyn InventoryApi> = Arc::new(client);
    let settings = WorkflowSettings {
        quantity_step: config.quantity_step,
        sample_item: config.sample_item.clone(),
    };
    let state = AppState::new(config.base_url.clone(), config.bearer_token().is_some());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(api, settings, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.dialog.is_some(),
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(f, main_chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    draw_item_list(f, state, content[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(content[1]);

    f.render_widget(render_commands(!state.is_loading), side[0]);
    draw_details(f, state, side[1]);

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.dialog.is_some() {
        draw_dialog(f, state, area);
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_item_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.is_loading {
        format!(" Items [{}...] ", state.loading_label.unwrap_or("Working"))
    } else {
        format!(" Items ({}) ", state.items.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if state.items.is_empty() {
        let hint = if state.is_loading {
            "Loading..."
        } else {
            "No items loaded. Press 'f' to fetch."
        };
        let paragraph = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<ListItem> = state.items.iter().map(item_row).collect();
    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(state.selected);

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let paragraph = match state.selected_item() {
        Some(item) => Paragraph::new(detail_lines(item)),
        None => Paragraph::new(Span::styled(
            "Select an item with ↑/↓",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut status = if state.is_loading {
        String::from(" Working... ")
    } else {
        String::from(" f:fetch a:add e:edit d:delete ↑/↓:select ?:help q:quit ")
    };

    status.push_str(&format!("| {} ", state.base_url));
    status.push_str(if state.has_token { "| token set " } else { "| no token " });
    if let Some(at) = state.last_fetched {
        status.push_str(&format!("| fetched {} ", at.format("%H:%M:%S")));
    }

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 STOCKROOM - Keyboard Shortcuts

 COMMANDS
   f / F5             Fetch items
   a                  Add the sample item
   e                  Edit: add stock to the selected item
   d / Delete         Delete the selected item

 NAVIGATION
   ↑ / k, ↓ / j       Move selection
   Home / End         First / last item

 DIALOGS
   Enter / Esc        Dismiss

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Rows marked ! are at or below their minimum quantity.

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_dialog(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(dialog) = &state.dialog else {
        return;
    };
    let popup_area = centered_rect(60, 30, area);
    let color = severity_color(dialog.severity);

    let footer = if state.queued_dialogs > 0 {
        format!(" Enter: OK ({} more) ", state.queued_dialogs)
    } else {
        String::from(" Enter: OK ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", dialog.title))
        .title_style(Style::default().fg(color).bold())
        .title_bottom(Line::from(footer).right_aligned())
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(dialog.message.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}
