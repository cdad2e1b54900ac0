use eframe::egui;

use super::toolbar::InputActions;
use super::RegexEditorApp;

impl RegexEditorApp {
    /// Handle dropped files and keyboard shortcuts
    /// Returns flags for deferred actions
    pub(super) fn handle_input(&mut self, ctx: &egui::Context) -> InputActions {
        let mut actions = InputActions::default();

        ctx.input(|i| {
            // Only the first dropped file is opened
            if let Some(path) = i.raw.dropped_files.iter().find_map(|f| f.path.clone()) {
                actions.open_path = Some(path);
            }

            // Global keyboard shortcuts
            let ctrl = i.modifiers.ctrl || i.modifiers.mac_cmd;
            let shift = i.modifiers.shift;
            if ctrl && i.key_pressed(egui::Key::O) {
                actions.open = true;
            }
            // Save: Ctrl+S / Cmd+S, Save As: Ctrl+Shift+S / Cmd+Shift+S
            if ctrl && i.key_pressed(egui::Key::S) {
                if shift {
                    actions.save_as = true;
                } else {
                    actions.save = true;
                }
            }
        });

        actions
    }
}
