//! UI components for the regex editor

pub mod ai_sidebar;
pub mod history_panel;
pub mod text_view;
