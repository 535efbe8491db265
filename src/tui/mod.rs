pub mod app;
pub mod event;
pub mod rows;
pub mod theme;
pub mod ui;

pub use app::{App, InputMode, LoadRequest};
pub use rows::RosterView;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::roster::{Action, Score};

/// Run the terminal UI until the user quits.
///
/// Key events are handled one at a time to completion. A name-list load runs
/// as a background task; its result is merged between events, so it never
/// interleaves with a score mutation.
pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(app.config.tick_rate_ms);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Resize => {}
            Event::Tick => app.on_tick(),
        }

        app.merge_finished_load().await;
        app.start_requested_load();

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Global adjust: selection, or everyone when nothing is selected
                KeyCode::Up => app.apply(Action::Increment, false),
                KeyCode::Down => app.apply(Action::Decrement, false),

                // Navigation
                KeyCode::Char('j') => app.next_row(),
                KeyCode::Char('k') => app.previous_row(),

                // Row buttons: selection, or the cursor row when nothing is selected
                KeyCode::Char('+') | KeyCode::Char('=') => app.apply(Action::Increment, true),
                KeyCode::Char('-') => app.apply(Action::Decrement, true),
                KeyCode::Char('r') => app.apply(Action::ResetTo(Score::MAX), true),

                // Scoped resets
                KeyCode::Char('0') => app.apply(Action::ResetTo(Score::MIN), false),
                KeyCode::Char('5') => app.apply(Action::ResetTo(Score::MID), false),
                KeyCode::Char('1') => app.apply(Action::ResetTo(Score::MAX), false),

                // Reset everyone, selection or not
                KeyCode::Char('R') => app.reset_all(Score::MAX),
                KeyCode::Char('M') => app.reset_all(Score::MID),
                KeyCode::Char('Z') => app.reset_all(Score::MIN),

                // Selection
                KeyCode::Char(' ') => app.toggle_cursor_selection(),
                KeyCode::Char('s') => app.select_only_cursor(),
                KeyCode::Char('a') => app.toggle_select_all(),
                KeyCode::Esc => app.clear_selection(),

                // Inline edit
                KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),

                // Loading
                KeyCode::Char('l') => app.request_reload(false),
                KeyCode::Char('o') => app.start_path_input(),

                // Theme
                KeyCode::Char('t') => app.toggle_theme(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => app.edit.pop(),
            KeyCode::Char(c) => app.edit.push(c),
            // Ignore all other keys (don't propagate to Normal mode)
            _ => {}
        },
        InputMode::PathInput => match key.code {
            KeyCode::Enter => app.confirm_path_input(),
            KeyCode::Esc => app.cancel_path_input(),
            KeyCode::Backspace => {
                app.path_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.path_input.push(c);
            }
            _ => {}
        },
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
