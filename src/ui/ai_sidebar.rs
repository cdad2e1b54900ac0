//! AI assistant sidebar

use crate::ai::{self, AiAnswer, AiClient, AiError};
use crate::app::RegexEditorApp;
use crate::config::CredentialStore;
use eframe::egui;

/// Shown while a request is queued or in flight
const ASKING_TEXT: &str = "Asking AI...";

/// Shown when the service answered with nothing
const EMPTY_RESPONSE_TEXT: &str = "AI returned an empty response.";

/// State for the AI assistant sidebar
#[derive(Default)]
pub struct AiSidebarState {
    /// Whether the sidebar is visible
    pub visible: bool,
    /// API key field
    pub api_key: String,
    /// Question field
    pub query: String,
    /// Response area content
    pub response: String,
    /// A request is queued for the next frame
    pending: bool,
}

impl AiSidebarState {
    /// Sidebar state with the saved credential filled in
    pub fn with_credential(store: &dyn CredentialStore) -> Self {
        Self {
            api_key: store.load_credential().unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Queue a request after checking the inputs
    pub fn request(&mut self) -> Result<(), AiError> {
        ai::validate_input(&self.api_key, &self.query)?;
        self.pending = true;
        self.response = ASKING_TEXT.to_string();
        Ok(())
    }

    /// Run a queued request, if any
    pub fn run_pending(
        &mut self,
        client: &AiClient,
        store: &mut dyn CredentialStore,
    ) -> Option<Result<(), AiError>> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.ask(client, store))
    }

    /// Ask the question now; the credential is saved only if the call succeeds
    pub fn ask(
        &mut self,
        client: &AiClient,
        store: &mut dyn CredentialStore,
    ) -> Result<(), AiError> {
        match client.ask(&self.api_key, &self.query) {
            Ok(answer) => {
                self.response = match answer {
                    AiAnswer::Text(text) => text,
                    AiAnswer::Empty => EMPTY_RESPONSE_TEXT.to_string(),
                };
                store.save_credential(self.api_key.trim());
                Ok(())
            }
            Err(e) => {
                if !e.is_validation() {
                    self.response = format!("Error:\n{}", e);
                }
                Err(e)
            }
        }
    }
}

/// Show the sidebar (right-hand panel)
pub fn show(ctx: &egui::Context, app: &mut RegexEditorApp) {
    if !app.ai.visible {
        return;
    }

    let mut ask_clicked = false;
    let mut copy_clicked = false;

    egui::SidePanel::right("ai_sidebar")
        .resizable(true)
        .default_width(ctx.screen_rect().width() / 3.0)
        .min_width(250.0)
        .show(ctx, |ui| {
            ui.heading("AI Assistant");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("OpenRouter API Key:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.ai.api_key)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(10.0);
            ui.label("Ask the AI Assistant:");
            ui.add(
                egui::TextEdit::multiline(&mut app.ai.query)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add_enabled(!app.ai.is_pending(), egui::Button::new("Ask AI"))
                    .clicked()
                {
                    ask_clicked = true;
                }
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label("AI Response:");
                if ui
                    .add_enabled(!app.ai.response.is_empty(), egui::Button::new("Copy"))
                    .clicked()
                {
                    copy_clicked = true;
                }
            });
            egui::ScrollArea::vertical()
                .id_salt("ai_response_scroll")
                .show(ui, |ui| {
                    // Read-only but still selectable
                    let mut response = app.ai.response.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut response)
                            .desired_rows(10)
                            .desired_width(f32::INFINITY),
                    );
                });
        });

    if ask_clicked {
        match app.ai.request() {
            Ok(()) => ctx.request_repaint(),
            Err(e) => app.set_status(e.to_string()),
        }
    }

    if copy_clicked {
        copy_to_clipboard(&app.ai.response);
    }
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => log::info!("Copied AI response to clipboard"),
        Err(e) => log::warn!("Failed to copy to clipboard: {}", e),
    }
}
