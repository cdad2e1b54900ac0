use eframe::egui;

use super::RegexEditorApp;

/// Returns the platform-appropriate modifier key text for shortcuts
fn modifier_key() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘ " // space to give the character that follows more breathing room
    } else {
        "Ctrl+"
    }
}

/// Menu item with shortcut hint that has better contrast than egui's default.
/// Shortcut text is dimmer when not hovered, brighter when hovered.
fn menu_item_with_shortcut(ui: &mut egui::Ui, label: &str, shortcut: &str) -> bool {
    let label_width = ui
        .painter()
        .layout_no_wrap(label.to_string(), egui::FontId::default(), egui::Color32::WHITE)
        .size()
        .x;
    let shortcut_width = ui
        .painter()
        .layout_no_wrap(shortcut.to_string(), egui::FontId::default(), egui::Color32::WHITE)
        .size()
        .x;

    // Width = label + gap + shortcut + padding
    let desired_width = label_width + 40.0 + shortcut_width + 8.0;
    let response = ui.add(egui::Button::new(label).min_size(egui::vec2(desired_width, 0.0)));

    if !shortcut.is_empty() {
        let shortcut_color = if response.hovered() {
            egui::Color32::from_gray(200)
        } else {
            egui::Color32::from_gray(120)
        };
        let galley = ui.painter().layout_no_wrap(
            shortcut.to_string(),
            egui::FontId::default(),
            shortcut_color,
        );
        let pos = egui::pos2(
            response.rect.right() - galley.size().x - 8.0,
            response.rect.center().y - galley.size().y / 2.0,
        );
        ui.painter().galley(pos, galley, shortcut_color);
    }

    response.clicked()
}

impl RegexEditorApp {
    /// Render the top menu bar
    pub(super) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| self.render_file_menu(ui, ctx));
                ui.menu_button("View", |ui| self.render_view_menu(ui));
            });
        });
    }

    /// Render the File menu contents
    fn render_file_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mod_str = modifier_key();

        if menu_item_with_shortcut(ui, "Open...", &format!("{}O", mod_str)) {
            ui.close_menu();
            self.open_file_dialog();
        }
        if menu_item_with_shortcut(ui, "Save", &format!("{}S", mod_str)) {
            ui.close_menu();
            self.save_file();
        }
        if menu_item_with_shortcut(ui, "Save As...", &format!("{}Shift+S", mod_str)) {
            ui.close_menu();
            self.save_file_as_dialog();
        }
        ui.separator();
        if ui.button("Exit").clicked() {
            ui.close_menu();
            self.request_exit(ctx);
        }
    }

    /// Render the View menu contents
    fn render_view_menu(&mut self, ui: &mut egui::Ui) {
        if ui
            .checkbox(&mut self.ai.visible, "Show AI Sidebar")
            .clicked()
        {
            ui.close_menu();
        }
    }
}
