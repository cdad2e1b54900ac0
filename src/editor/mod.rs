//! Editor module: text buffer, regex search/replace, and replace history

pub mod buffer;
mod flags;
mod history;
pub mod search;

pub use buffer::{Position, Span, TextBuffer};
pub use history::HistoryLog;
pub use search::{PatternError, SearchMessage, SearchState, SearchStatus};
