//! Replace history panel

use crate::editor::HistoryLog;
use eframe::egui;

/// Height of the history list
const HISTORY_HEIGHT: f32 = 100.0;

/// Show the history log as a bottom panel, newest entry in view
pub fn show(ctx: &egui::Context, history: &HistoryLog) {
    egui::TopBottomPanel::bottom("history_panel")
        .resizable(true)
        .default_height(HISTORY_HEIGHT)
        .show(ctx, |ui| {
            ui.label("History:");
            egui::ScrollArea::vertical()
                .id_salt("history_scroll")
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if history.is_empty() {
                        ui.label(
                            egui::RichText::new("No replacements yet")
                                .small()
                                .color(egui::Color32::GRAY),
                        );
                    }
                    for entry in history.entries() {
                        ui.label(entry.to_string());
                    }
                });
        });
}
