//! regex-editor: a desktop text editor with regular-expression search and replace
//!
//! Documents are searched and rewritten with Rust regex syntax, every replace
//! is logged, and an optional AI sidebar suggests patterns from plain-language
//! requests.

mod ai;
mod app;
mod config;
mod editor;
mod ui;

use app::RegexEditorApp;
use config::ConfigFile;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigFile::user();
    if let Some(path) = config.path() {
        log::debug!("Config file: {}", path.display());
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1200.0, 800.0])
        .with_min_inner_size([800.0, 600.0])
        .with_maximized(true)
        .with_drag_and_drop(true);

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Regex Editor",
        options,
        Box::new(|cc| Ok(Box::new(RegexEditorApp::new(cc, config)))),
    )
}
