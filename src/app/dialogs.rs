use eframe::egui;

use super::RegexEditorApp;

/// An error waiting to be acknowledged
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

/// State for the error and close confirmation dialogs
#[derive(Default)]
pub struct DialogState {
    /// Whether the close confirmation dialog is showing
    pub show_close: bool,
    /// Pending close action (true = confirmed close)
    pub pending_close: bool,
    /// Error dialog currently showing
    pub error: Option<ErrorDialog>,
}

impl DialogState {
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error = Some(ErrorDialog {
            title: title.into(),
            message: message.into(),
        });
    }
}

impl RegexEditorApp {
    /// Ask to exit, confirming first if there are unsaved changes
    pub(super) fn request_exit(&mut self, ctx: &egui::Context) {
        if self.buffer.is_modified() {
            self.dialogs.show_close = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Show the error dialog, if any
    pub(super) fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.dialogs.error else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(error.title.as_str())
            .id(egui::Id::new("error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("\u{26A0}")
                            .size(32.0)
                            .color(egui::Color32::YELLOW),
                    );
                    ui.label(error.message.as_str());
                });
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dialogs.error = None;
        }
    }

    /// Show the close confirmation dialog
    pub(super) fn show_close_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialogs.show_close {
            return;
        }

        egui::Window::new("Unsaved Changes")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("You have unsaved changes. Are you sure you want to exit?");
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        self.dialogs.show_close = false;
                        if self.save_file() {
                            self.dialogs.pending_close = true;
                        }
                    }
                    if ui.button("Discard & Exit").clicked() {
                        self.dialogs.pending_close = true;
                        self.dialogs.show_close = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.dialogs.show_close = false;
                    }
                });
            });
    }
}
