use eframe::egui;

use crate::editor::SearchMessage;

use super::RegexEditorApp;

/// Width of the pattern and replacement fields
const FIELD_WIDTH: f32 = 260.0;

/// Actions triggered by keyboard/mouse input, processed after input handling
#[derive(Default)]
pub(super) struct InputActions {
    pub open: bool,
    pub open_path: Option<std::path::PathBuf>,
    pub save: bool,
    pub save_as: bool,
    pub exit: bool,
    pub find_next: bool,
    pub find_all: bool,
    pub replace: bool,
    pub replace_all: bool,
    pub toggle_ai: bool,
}

impl RegexEditorApp {
    /// Render the search/replace toolbar and return deferred action flags
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) -> InputActions {
        let mut actions = InputActions::default();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("search_controls")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Regex Pattern:");
                    ui.horizontal(|ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.search.pattern)
                                .font(egui::TextStyle::Monospace)
                                .hint_text("e.g. \\d{3}-\\d{4}")
                                .desired_width(FIELD_WIDTH),
                        );
                        if response.changed() {
                            self.search.reset();
                        }
                        // Enter in the pattern field finds the next match
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            actions.find_next = true;
                            response.request_focus();
                        }

                        ui.separator();
                        let mut flags_changed = false;
                        flags_changed |= ui
                            .checkbox(&mut self.search.ignore_case, "Ignore Case")
                            .changed();
                        flags_changed |= ui
                            .checkbox(&mut self.search.multiline, "Multiline")
                            .on_hover_text("^ and $ match at line breaks")
                            .changed();
                        flags_changed |= ui
                            .checkbox(&mut self.search.dot_all, "Dotall")
                            .on_hover_text(". also matches newlines")
                            .changed();
                        if flags_changed {
                            self.search.reset();
                        }
                    });
                    ui.end_row();

                    ui.label("Replacement:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.search.replacement)
                            .font(egui::TextStyle::Monospace)
                            .hint_text("$1, ${name}")
                            .desired_width(FIELD_WIDTH),
                    );
                    ui.end_row();
                });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Find Next").clicked() {
                    actions.find_next = true;
                }
                if ui.button("Find All").clicked() {
                    actions.find_all = true;
                }
                if ui.button("Replace").clicked() {
                    actions.replace = true;
                }
                if ui.button("Replace All").clicked() {
                    actions.replace_all = true;
                }

                ui.separator();

                if ui
                    .add(egui::SelectableLabel::new(self.ai.visible, "AI Pane"))
                    .on_hover_text("Show or hide the AI assistant")
                    .clicked()
                {
                    actions.toggle_ai = true;
                }

                if let Some(SearchMessage::Error(msg)) = &self.search.message {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(255, 100, 100), msg);
                }
            });
            ui.add_space(4.0);
        });

        actions
    }

    /// Process input actions (deferred to avoid borrow conflicts)
    pub(super) fn process_input_actions(&mut self, ctx: &egui::Context, actions: InputActions) {
        if let Some(path) = actions.open_path {
            self.open_file(path);
        }
        if actions.open {
            self.open_file_dialog();
        }
        if actions.save {
            self.save_file();
        }
        if actions.save_as {
            self.save_file_as_dialog();
        }
        if actions.find_next {
            self.find_next();
        }
        if actions.find_all {
            self.find_all();
        }
        if actions.replace {
            self.replace_current();
        }
        if actions.replace_all {
            self.replace_all();
        }
        if actions.toggle_ai {
            self.ai.toggle();
        }
        if actions.exit {
            self.request_exit(ctx);
        }
    }
}
