//! Main application state and egui integration

mod dialogs;
mod file_ops;
mod input;
mod menu_bar;
mod toolbar;

use crate::ai::AiClient;
use crate::config::ConfigFile;
use crate::editor::buffer::LineCol;
use crate::editor::{HistoryLog, PatternError, Position, SearchState, SearchStatus, TextBuffer};
use crate::ui::{ai_sidebar, ai_sidebar::AiSidebarState, history_panel, text_view};
use dialogs::DialogState;
use eframe::egui;
use std::path::PathBuf;

/// Base window title
const APP_TITLE: &str = "Regex Editor";

/// Main application state
///
/// Everything the editing session needs lives here and is handed to the
/// components that act on it: the document, the search state over it, the
/// replace history, the AI sidebar and the config file it persists to.
#[derive(Default)]
pub struct RegexEditorApp {
    /// The document being edited
    pub buffer: TextBuffer,

    /// Pattern, flags, incremental search position and highlights
    pub search: SearchState,

    /// Log of replace actions
    pub history: HistoryLog,

    /// Path the document was opened from / saved to
    pub current_file: Option<PathBuf>,

    /// Status line text
    pub status: String,

    /// Error and close-confirmation dialogs
    pub dialogs: DialogState,

    /// AI assistant sidebar
    pub ai: AiSidebarState,

    /// Chat-completion client used by the sidebar
    ai_client: AiClient,

    /// Where the AI credential is persisted
    config: ConfigFile,

    /// Window title last sent to the viewport
    shown_title: Option<String>,

    /// Status bar position, keyed by edit generation and cursor
    cursor_line_col: Option<(u64, Position, LineCol)>,
}

impl RegexEditorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ConfigFile) -> Self {
        Self {
            ai: AiSidebarState::with_credential(&config),
            config,
            status: "Ready".to_string(),
            ..Default::default()
        }
    }

    /// Window title for the current file
    pub fn window_title(&self) -> String {
        match self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy())
        {
            Some(name) => format!("{} - {}", APP_TITLE, name),
            None => APP_TITLE.to_string(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Find the next match from the last search position
    pub fn find_next(&mut self) {
        let result = self.search.find_next(&mut self.buffer);
        self.report_search(result);
    }

    /// Highlight all matches
    pub fn find_all(&mut self) {
        let result = self.search.find_all(&mut self.buffer);
        self.report_search(result);
    }

    /// Replace the highlighted match
    pub fn replace_current(&mut self) {
        let result = self.search.replace_current(&mut self.buffer, &mut self.history);
        self.report_search(result);
    }

    /// Replace every match
    pub fn replace_all(&mut self) {
        let result = self.search.replace_all(&mut self.buffer, &mut self.history);
        self.report_search(result);
    }

    fn report_search(&mut self, result: Result<SearchStatus, PatternError>) {
        self.search.report(&result);
        match result {
            Ok(status) => self.set_status(status.to_string()),
            Err(e) => {
                log::warn!("Search failed: {}", e);
                self.set_status(e.to_string());
            }
        }
    }

    /// Run an AI request queued on the previous frame
    fn run_pending_ai_request(&mut self) {
        let Some(result) = self.ai.run_pending(&self.ai_client, &mut self.config) else {
            return;
        };
        match result {
            Ok(()) => self.set_status("AI response received."),
            Err(e) if e.is_validation() => self.set_status(e.to_string()),
            Err(e) => {
                log::error!("AI request failed: {}", e);
                self.set_status("AI request failed.");
                self.dialogs.show_error("AI Error", e.to_string());
            }
        }
    }

    /// Keep the native window title in sync with the current file
    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if self.shown_title.as_ref() != Some(&title) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = Some(title);
        }
    }

    /// Line/column of the cursor, recomputed only after an edit or cursor move
    fn cursor_line_col(&mut self) -> LineCol {
        let generation = self.buffer.edit_generation();
        let cursor = self.buffer.cursor();
        match self.cursor_line_col {
            Some((g, c, line_col)) if g == generation && c == cursor => line_col,
            _ => {
                let line_col = self.buffer.line_col(cursor);
                self.cursor_line_col = Some((generation, cursor, line_col));
                line_col
            }
        }
    }

    /// Render the status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let line_col = self.cursor_line_col();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.buffer.is_modified() {
                    ui.colored_label(egui::Color32::from_rgb(255, 180, 0), "\u{25CF} Modified");
                    ui.separator();
                }
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(line_col.to_string());
                });
            });
        });
    }

    /// Render the document area
    fn render_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if text_view::show(ui, &mut self.buffer, self.search.highlights()) {
                self.buffer.mark_edited();
                self.search.reset();
            }
        });
    }
}

impl eframe::App for RegexEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle close confirmation
        if self.dialogs.pending_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) && self.buffer.is_modified() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.dialogs.show_close = true;
        }

        self.run_pending_ai_request();

        // Handle input and process actions
        let input_actions = self.handle_input(ctx);
        self.process_input_actions(ctx, input_actions);

        // Render UI components
        self.show_close_dialog(ctx);
        self.show_error_dialog(ctx);
        self.render_menu_bar(ctx);
        let toolbar_actions = self.render_toolbar(ctx);
        self.process_input_actions(ctx, toolbar_actions);
        self.render_status_bar(ctx);
        history_panel::show(ctx, &self.history);
        ai_sidebar::show(ctx, self);
        self.render_main_content(ctx);

        self.sync_window_title(ctx);
    }
}
