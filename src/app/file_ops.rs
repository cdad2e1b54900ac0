//! Opening and saving documents

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::RegexEditorApp;

/// Name suggested by Save As when the document has no file yet
const UNTITLED_NAME: &str = "untitled.txt";

/// Failure reading or writing a document
#[derive(Debug, Error)]
pub enum FileIoError {
    #[error("Failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a document as UTF-8 text
fn read_document(path: &Path) -> Result<String, FileIoError> {
    std::fs::read_to_string(path).map_err(|source| FileIoError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document as UTF-8 text
fn write_document(path: &Path, text: &str) -> Result<(), FileIoError> {
    std::fs::write(path, text).map_err(|source| FileIoError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Add a `.txt` extension if the path has none
fn with_txt_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}

impl RegexEditorApp {
    /// Load a file into the editor
    pub fn open_file(&mut self, path: PathBuf) {
        match read_document(&path) {
            Ok(text) => {
                log::info!("Loaded file: {} ({} bytes)", path.display(), text.len());
                self.buffer.load(text);
                self.search.reset();
                self.set_status(format!("Opened {}", path.display()));
                self.current_file = Some(path);
            }
            Err(e) => {
                log::error!("{}", e);
                self.current_file = None;
                self.set_status("Failed to open file.");
                self.dialogs.show_error("Error", e.to_string());
            }
        }
    }

    /// Write the document to `path` and make it the current file
    pub fn save_to(&mut self, path: PathBuf) -> bool {
        match write_document(&path, self.buffer.text()) {
            Ok(()) => {
                log::info!("Saved file: {}", path.display());
                self.buffer.mark_saved();
                self.set_status(format!("Saved {}", path.display()));
                self.current_file = Some(path);
                true
            }
            Err(e) => {
                log::error!("{}", e);
                self.set_status("Failed to save file.");
                self.dialogs.show_error("Error", e.to_string());
                false
            }
        }
    }

    /// Save to the current file, or ask for a path if there is none
    pub fn save_file(&mut self) -> bool {
        match self.current_file.clone() {
            Some(path) => self.save_to(path),
            None => self.save_file_as_dialog(),
        }
    }

    /// Ask for a path and save there
    pub fn save_file_as_dialog(&mut self) -> bool {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_NAME.to_string());

        let mut dialog = rfd::AsyncFileDialog::new()
            .add_filter("Text Files", &["txt"])
            .add_filter("All Files", &["*"])
            .set_file_name(file_name);
        if let Some(dir) = self.current_file.as_ref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        match pollster::block_on(dialog.save_file()) {
            Some(handle) => self.save_to(with_txt_extension(handle.path().to_path_buf())),
            None => false,
        }
    }

    /// Open file dialog and load selected file
    pub fn open_file_dialog(&mut self) {
        let dialog = rfd::AsyncFileDialog::new()
            .add_filter("Text Files", &["txt"])
            .add_filter("All Files", &["*"]);

        if let Some(handle) = pollster::block_on(dialog.pick_file()) {
            self.open_file(handle.path().to_path_buf());
        }
    }
}
