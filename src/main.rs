mod app;
mod card;
mod config;
mod save_client;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedSender;

use app::{AccentEntryState, App, LogoPickerState, Row, Screen};
use card::{CardData, Logo};

enum BackgroundMessage {
    LogoLoaded(std::result::Result<Logo, String>),
    SaveFinished(std::result::Result<PathBuf, String>),
}

fn spawn_logo_read(tx: &UnboundedSender<BackgroundMessage>, path: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = save_client::read_logo(&path)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(BackgroundMessage::LogoLoaded(result));
    });
}

fn spawn_save(tx: &UnboundedSender<BackgroundMessage>, card: CardData, dir: PathBuf) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = save_client::save_card(card, dir)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(BackgroundMessage::SaveFinished(result));
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config()?.unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let (bg_tx, mut bg_rx) = tokio::sync::mpsc::unbounded_channel();

    // Main loop
    loop {
        while let Ok(message) = bg_rx.try_recv() {
            match message {
                BackgroundMessage::LogoLoaded(result) => app.finish_logo_load(result),
                BackgroundMessage::SaveFinished(result) => app.finish_submit(result),
            }
        }

        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(key) = event::read()? {
                // Clear flash on any keypress
                app.flash = None;

                if app.show_keybindings {
                    handle_keybindings_keys(&mut app, key.code);
                } else if app.confirm_reset {
                    handle_confirm_reset_keys(&mut app, key.code);
                } else if app.is_logo_picker_open() {
                    handle_logo_picker_keys(&mut app, key.code, &bg_tx);
                } else if app.is_accent_entry_open() {
                    handle_accent_entry_keys(&mut app, key.code);
                } else {
                    match app.screen {
                        Screen::Landing => handle_landing_keys(&mut app, key.code),
                        Screen::Editor if app.editing => handle_editing_keys(&mut app, key.code),
                        Screen::Editor => handle_editor_keys(&mut app, key.code, &bg_tx),
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(f: &mut ratatui::Frame, app: &App) {
    use ratatui::layout::{Constraint, Direction, Layout};
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    match app.screen {
        Screen::Landing => views::landing::render(f, chunks[0]),
        Screen::Editor => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[0]);
            views::editor::render(f, columns[0], app);
            views::preview::render(f, columns[1], app);
        }
    }

    // Status bar: flash, then the persistent save-failure banner, then hints.
    let status_text = if let Some(ref flash) = app.flash {
        Span::styled(flash.as_str(), Style::default().fg(Color::Red))
    } else if let Some(ref form_error) = app.form_error {
        Span::styled(format!(" ⚠ {} ", form_error), Style::default().fg(Color::Red))
    } else {
        let hints = match app.screen {
            Screen::Landing => " Enter: create card  q: quit ",
            Screen::Editor if app.editing => " typing  Enter/Esc: done  Tab: next field ",
            Screen::Editor if app.submitting => " Saving visiting card... ",
            Screen::Editor => {
                " j/k: move  Enter: edit/select  s: save  R: reset  d: details  ?: keys  q: quit "
            }
        };
        Span::styled(hints, Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        ratatui::widgets::Paragraph::new(Line::from(status_text)),
        chunks[1],
    );

    // Modal overlays
    widgets::logo_picker::render(f, app);
    widgets::accent_entry::render(f, app);
    if app.confirm_reset {
        widgets::confirm_reset::render(f);
    }
    if app.show_keybindings {
        widgets::keybindings_help::render(f);
    }
}

fn handle_keybindings_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.close_keybindings(),
        _ => {}
    }
}

fn handle_confirm_reset_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char('y') => {
            app.confirm_reset = false;
            app.reset_all();
            app.flash = Some("Form reset".to_string());
        }
        KeyCode::Esc | KeyCode::Char('n') => app.confirm_reset = false,
        _ => {}
    }
}

fn handle_logo_picker_keys(
    app: &mut App,
    key: KeyCode,
    bg_tx: &UnboundedSender<BackgroundMessage>,
) {
    match key {
        KeyCode::Esc => app.logo_picker = None,
        KeyCode::Enter => {
            if let Some(state) = app.logo_picker.take() {
                if !state.path.trim().is_empty() {
                    app.logo_loading = true;
                    spawn_logo_read(bg_tx, state.path.trim().to_string());
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(ref mut state) = app.logo_picker {
                state.path.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(ref mut state) = app.logo_picker {
                state.path.push(c);
            }
        }
        _ => {}
    }
}

fn handle_accent_entry_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.accent_entry = None,
        KeyCode::Enter => {
            if let Some(state) = app.accent_entry.take() {
                if !app.set_custom_accent(state.hex.trim().to_string()) {
                    app.flash = Some("Invalid hex color (use #rrggbb)".to_string());
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(ref mut state) = app.accent_entry {
                state.hex.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(ref mut state) = app.accent_entry {
                state.hex.push(c);
            }
        }
        _ => {}
    }
}

fn handle_landing_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.screen = Screen::Editor,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_editing_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Esc => app.editing = false,
        KeyCode::Tab => {
            app.editing = false;
            app.next_row();
        }
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

fn handle_editor_keys(app: &mut App, key: KeyCode, bg_tx: &UnboundedSender<BackgroundMessage>) {
    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_keybindings(),
        KeyCode::Char('d') => app.toggle_details(),
        KeyCode::Char('R') => app.confirm_reset = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection_up(),
        KeyCode::Tab => app.next_row(),
        KeyCode::Char('s') => {
            // The save action is disabled while a save is in flight.
            if app.submitting {
                app.flash = Some("Save already in progress...".to_string());
            } else if app.begin_submit() {
                match save_client::save_dir(&app.config) {
                    Ok(dir) => spawn_save(bg_tx, app.card.clone(), dir),
                    Err(e) => {
                        app.finish_submit(Err(e.to_string()));
                    }
                }
            }
        }
        KeyCode::Enter => match app.selected_row_kind() {
            Row::Field(_) => app.editing = true,
            Row::Accent => app.cycle_accent_next(),
            Row::Logo => app.logo_picker = Some(LogoPickerState::default()),
            Row::QrCode => app.toggle_qr(),
        },
        KeyCode::Left if app.selected_row_kind() == Row::Accent => app.cycle_accent_prev(),
        KeyCode::Right if app.selected_row_kind() == Row::Accent => app.cycle_accent_next(),
        KeyCode::Char('c') if app.selected_row_kind() == Row::Accent => {
            app.accent_entry = Some(AccentEntryState::default());
        }
        KeyCode::Char('x') if app.selected_row_kind() == Row::Logo => {
            if app.card.logo.is_some() {
                app.clear_logo();
                app.flash = Some("Logo removed".to_string());
            }
        }
        KeyCode::Char(' ') if app.selected_row_kind() == Row::QrCode => app.toggle_qr(),
        _ => {}
    }
}
