use std::path::PathBuf;
use std::time::Instant;

use tokio::task::{JoinError, JoinHandle};

use crate::config::Config;
use crate::loader::{LoadError, NameSource};
use crate::prefs::{save_preferences, Preferences, ThemeMode};
use crate::roster::{Action, EditState, Roster, Score};
use crate::tui::rows::RosterView;
use crate::tui::theme::ThemeColors;

/// How long a status message stays in the status bar
const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Inline edit of the row under the cursor
    Editing,
    /// Typing the path of a local name list
    PathInput,
    Help,
}

/// A name-list load the event loop should start
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub source: NameSource,
    /// Automatic load at launch; failure shows a hint rather than an error
    pub startup: bool,
}

/// Background task reading a name list
pub type LoadTask = JoinHandle<Result<Vec<String>, LoadError>>;

pub struct App {
    pub roster: Roster,
    pub view: RosterView,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub edit: EditState,
    pub path_input: String,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub config: Config,
    pub theme_mode: ThemeMode,
    pub theme: ThemeColors,
    pub prefs_path: PathBuf,
    pub load_request: Option<LoadRequest>,
    /// At most one load runs at a time
    pub pending_load: Option<(LoadTask, LoadRequest)>,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(config: Config, theme_mode: ThemeMode, prefs_path: PathBuf) -> Self {
        Self {
            roster: Roster::new(),
            view: RosterView::new(),
            table_state: ratatui::widgets::TableState::default(),
            input_mode: InputMode::Normal,
            edit: EditState::default(),
            path_input: String::new(),
            flash_message: None,
            should_quit: false,
            config,
            theme_mode,
            theme: ThemeColors::for_mode(theme_mode),
            prefs_path,
            load_request: None,
            pending_load: None,
            is_loading: false,
            spinner_frame: 0,
        }
    }

    // ---- cursor ----

    pub fn next_row(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < self.view.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.view.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Name of the row under the cursor
    pub fn cursor_name(&self) -> Option<String> {
        self.table_state
            .selected()
            .and_then(|i| self.view.get(i))
            .map(|row| row.name.clone())
    }

    /// Put the cursor back on `previous` after the rows were rebuilt.
    /// Falls back to the nearest valid row when that name is gone.
    fn restore_cursor(&mut self, previous: Option<String>) {
        match previous.and_then(|name| self.view.position(&name)) {
            Some(i) => self.table_state.select(Some(i)),
            None => self.fix_cursor(),
        }
    }

    /// Keep the cursor on a valid row after the row list changes
    fn fix_cursor(&mut self) {
        if self.view.is_empty() {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.view.len() {
                self.table_state.select(Some(self.view.len() - 1));
            }
        } else {
            self.table_state.select(Some(0));
        }
    }

    // ---- mutations ----

    /// Apply `action`; `at_cursor` makes the cursor row the origin entity
    pub fn apply(&mut self, action: Action, at_cursor: bool) {
        let origin = if at_cursor { self.cursor_name() } else { None };
        let report = self.roster.apply(&action, origin.as_deref(), &mut self.view);
        if !report.skipped.is_empty() {
            self.show_flash(format!(
                "Error: {} entries were not found and were skipped",
                report.skipped.len()
            ));
        }
    }

    /// Set every score to `score`, ignoring the selection
    pub fn reset_all(&mut self, score: Score) {
        let previous = self.cursor_name();
        self.roster.reset_all(score, &mut self.view);
        self.restore_cursor(previous);
        self.show_flash(format!("All scores reset to {:.0}.", score.value()));
    }

    // ---- selection ----

    pub fn toggle_cursor_selection(&mut self) {
        if let Some(name) = self.cursor_name() {
            self.roster.toggle_selected(&name);
        }
    }

    pub fn select_only_cursor(&mut self) {
        if let Some(name) = self.cursor_name() {
            self.roster.select_only(&name);
        }
    }

    pub fn toggle_select_all(&mut self) {
        self.roster.toggle_select_all();
    }

    pub fn clear_selection(&mut self) {
        self.roster.clear_selection();
    }

    // ---- inline edit ----

    pub fn begin_edit(&mut self) {
        let Some(name) = self.cursor_name() else {
            return;
        };
        if let Ok(current) = self.roster.store().get(&name) {
            self.edit.begin(&name, current);
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn commit_edit(&mut self) {
        if let Some(action) = self.edit.commit() {
            self.apply(action, false);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
        self.input_mode = InputMode::Normal;
    }

    // ---- loading ----

    /// Ask the event loop to (re)load the configured name list
    pub fn request_reload(&mut self, startup: bool) {
        self.load_request = Some(LoadRequest {
            source: NameSource::Configured(self.config.names_source.clone()),
            startup,
        });
    }

    pub fn start_path_input(&mut self) {
        self.input_mode = InputMode::PathInput;
        self.path_input.clear();
    }

    pub fn confirm_path_input(&mut self) {
        let path = self.path_input.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.path_input.clear();
        if path.is_empty() {
            return;
        }
        self.load_request = Some(LoadRequest {
            source: NameSource::LocalFile(PathBuf::from(path)),
            startup: false,
        });
    }

    pub fn cancel_path_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.path_input.clear();
    }

    /// Spawn the requested load, unless one is still running.
    pub fn start_requested_load(&mut self) {
        let Some(request) = self.load_request.take() else {
            return;
        };
        if self.pending_load.is_some() {
            self.show_flash("A name list is already loading.".to_string());
            return;
        }
        tracing::debug!(source = %request.source, "spawning name list load");
        let source = request.source.clone();
        let handle = tokio::spawn(async move { crate::loader::load_names(&source).await });
        self.pending_load = Some((handle, request));
        self.is_loading = true;
    }

    /// Merge the pending load if its task has finished. Never waits on a
    /// running task.
    pub async fn merge_finished_load(&mut self) {
        let finished = self
            .pending_load
            .as_ref()
            .is_some_and(|(handle, _)| handle.is_finished());
        if !finished {
            return;
        }
        if let Some((handle, request)) = self.pending_load.take() {
            let joined = handle.await;
            self.finish_load_task(&request, joined);
        }
    }

    /// Handle the outcome of a joined load task
    pub fn finish_load_task(
        &mut self,
        request: &LoadRequest,
        joined: Result<Result<Vec<String>, LoadError>, JoinError>,
    ) {
        match joined {
            Ok(result) => self.finish_load(request, result),
            Err(e) => {
                self.is_loading = false;
                tracing::warn!(source = %request.source, "name list task failed: {}", e);
                self.show_flash(format!("Error: load task failed: {}", e));
            }
        }
    }

    /// Merge a finished load into the roster, or report why it failed.
    /// A failed load leaves the roster untouched.
    pub fn finish_load(&mut self, request: &LoadRequest, result: Result<Vec<String>, LoadError>) {
        self.is_loading = false;
        match result {
            Ok(names) => {
                let previous = self.cursor_name();
                let summary = self.roster.load_names(&names, &mut self.view);
                self.restore_cursor(previous);
                let origin = if request.source.is_local_file() {
                    " from local file"
                } else {
                    ""
                };
                self.show_flash(format!("Loaded {} names{}.", summary.read, origin));
            }
            Err(e) => {
                tracing::warn!(source = %request.source, "name list load failed: {}", e);
                let msg = if request.startup {
                    format!(
                        "Tip: put a {} next to the app or press 'o' to open a local file.",
                        request.source
                    )
                } else if request.source.is_local_file() {
                    format!("Failed to read local file: {}", e)
                } else {
                    format!("Failed to load {}. Press 'o' to open a local file.", request.source)
                };
                self.show_flash(msg);
            }
        }
    }

    // ---- theme ----

    /// Switch theme and persist the choice
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = ThemeColors::for_mode(self.theme_mode);
        let prefs = Preferences {
            theme: Some(self.theme_mode),
        };
        if let Err(e) = save_preferences(&self.prefs_path, &prefs) {
            self.show_flash(format!("Failed to save theme preference: {}", e));
        }
    }

    // ---- help ----

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // ---- status ----

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Periodic housekeeping driven by the tick event
    pub fn on_tick(&mut self) {
        self.update_flash();
        self.view.expire_pulses(Instant::now());
        if self.is_loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
