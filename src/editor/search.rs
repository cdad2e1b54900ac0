//! Regex search and replace over the text buffer
//!
//! `SearchState` carries the incremental search cursor (`last_search_end`) and
//! the highlighted spans. Positions are only meaningful for the buffer content
//! they were computed against, so the state is reset whenever the buffer
//! generation, the pattern, or the flags differ from the last search.

use std::fmt;
use std::ops::Range;

use regex::Regex;
use thiserror::Error;

use super::buffer::{Position, Span, TextBuffer};
use super::flags::RegexFlags;
use super::history::{HistoryEntry, HistoryLog};

/// A pattern that could not be used
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Enter a pattern first")]
    Empty,

    #[error("Invalid regular expression: {0}")]
    Invalid(String),
}

/// Outcome of a search/replace command that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// find-next highlighted a match
    Found(Span),
    /// find-next ran off the end; the next call starts from the top
    NoMoreMatches,
    /// Nothing matched anywhere
    NotFound,
    /// find-all highlighted this many matches
    FoundAll(usize),
    /// replace-current replaced the highlight; span covers the inserted text
    Replaced(Span),
    /// replace-current was called without a highlight
    NothingSelected,
    /// replace-all made this many replacements
    ReplacedAll(usize),
    /// replace-all found nothing to replace
    NoMatchesToReplace,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Found(_) => write!(f, "Match found."),
            SearchStatus::NoMoreMatches => write!(f, "No more matches found. Search reset."),
            SearchStatus::NotFound => write!(f, "Pattern not found."),
            SearchStatus::FoundAll(count) => write!(f, "Found {} matches.", count),
            SearchStatus::Replaced(_) => write!(f, "Replaced 1 match."),
            SearchStatus::NothingSelected => {
                write!(f, "No match selected. Use 'Find Next' first.")
            }
            SearchStatus::ReplacedAll(count) => write!(f, "Made {} replacements.", count),
            SearchStatus::NoMatchesToReplace => write!(f, "No matches found to replace."),
        }
    }
}

/// A message from a search/replace operation, either an error or informational
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMessage {
    /// The pattern was empty or did not compile
    Error(String),
    /// An informational status (counts, "not found", ...)
    Info(String),
}

/// Search inputs, incremental cursor and highlights
pub struct SearchState {
    /// The current pattern
    pub pattern: String,
    /// Replacement text
    pub replacement: String,
    /// Case-insensitive matching
    pub ignore_case: bool,
    /// Line-anchored `^`/`$`
    pub multiline: bool,
    /// `.` matches newlines
    pub dot_all: bool,
    /// Last search/replace message (error or informational)
    pub message: Option<SearchMessage>,
    /// Where the next find-next starts
    last_search_end: Position,
    /// Currently highlighted matches, in buffer order
    highlights: Vec<Span>,
    /// Pattern that produced the current position/highlights
    last_searched_pattern: String,
    /// Flags that produced the current position/highlights
    last_searched_flags: RegexFlags,
    /// Buffer generation when the search was last executed
    searched_at_generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            replacement: String::new(),
            ignore_case: false,
            multiline: true,
            dot_all: false,
            message: None,
            last_search_end: Position::START,
            highlights: Vec::new(),
            last_searched_pattern: String::new(),
            last_searched_flags: RegexFlags::empty(),
            searched_at_generation: 0,
        }
    }
}

impl SearchState {
    /// Flag set from the three toggles
    pub fn flags(&self) -> RegexFlags {
        RegexFlags::resolve(self.ignore_case, self.multiline, self.dot_all)
    }

    /// Where the next find-next starts
    #[cfg(test)]
    pub fn last_search_end(&self) -> Position {
        self.last_search_end
    }

    /// Highlighted spans, in buffer order
    pub fn highlights(&self) -> &[Span] {
        &self.highlights
    }

    /// The span replace-current acts on
    pub fn current_highlight(&self) -> Option<Span> {
        self.highlights.first().copied()
    }

    /// Forget the search position and all highlights
    pub fn reset(&mut self) {
        if !self.last_search_end.is_start() || !self.highlights.is_empty() {
            log::debug!("Search state reset");
        }
        self.last_search_end = Position::START;
        self.highlights.clear();
    }

    /// Check if the pattern/flags have changed since the last search
    pub fn query_changed_since_search(&self) -> bool {
        self.pattern != self.last_searched_pattern || self.flags() != self.last_searched_flags
    }

    /// Check if positions may be stale due to buffer edits since the search
    pub fn positions_may_be_stale(&self, current_generation: u64) -> bool {
        self.searched_at_generation != current_generation
    }

    /// Record the result of a command as the status message
    pub fn report(&mut self, result: &Result<SearchStatus, PatternError>) {
        self.message = Some(match result {
            Ok(status) => SearchMessage::Info(status.to_string()),
            Err(e) => SearchMessage::Error(e.to_string()),
        });
    }

    /// Find the next match after `last_search_end`
    pub fn find_next(&mut self, buffer: &mut TextBuffer) -> Result<SearchStatus, PatternError> {
        self.invalidate_if_stale(buffer);
        let regex = self.compile()?;
        self.highlights.clear();

        // Past the end once an empty match at the very end was reported
        let hit = if self.last_search_end > buffer.end() {
            None
        } else {
            // Take the next match of the engine's own enumeration so find-next
            // visits exactly the spans find-all highlights.
            let from = buffer.byte_offset(self.last_search_end);
            regex
                .find_iter(buffer.text())
                .find(|m| m.start() >= from)
                .map(|m| m.range())
        };

        let Some(range) = hit else {
            return Ok(if self.last_search_end.is_start() {
                SearchStatus::NotFound
            } else {
                self.reset();
                SearchStatus::NoMoreMatches
            });
        };

        let span = Span::new(
            buffer.position_of_byte(range.start),
            buffer.position_of_byte(range.end),
        );
        self.highlights.push(span);
        self.last_search_end = if span.is_empty() {
            span.end.advance(1)
        } else {
            span.end
        };
        buffer.set_cursor(span.start);
        buffer.reveal(span.start);
        log::debug!(
            "find-next: match {:?}..{:?}, next search from {:?}",
            span.start,
            span.end,
            self.last_search_end
        );
        Ok(SearchStatus::Found(span))
    }

    /// Highlight every match in the buffer
    pub fn find_all(&mut self, buffer: &mut TextBuffer) -> Result<SearchStatus, PatternError> {
        self.invalidate_if_stale(buffer);
        let regex = self.compile()?;

        let text = buffer.text();
        self.highlights = to_spans(text, regex.find_iter(text).map(|m| m.range()));
        self.last_search_end = Position::START;

        match self.highlights.first() {
            Some(first) => {
                buffer.reveal(first.start);
                Ok(SearchStatus::FoundAll(self.highlights.len()))
            }
            None => Ok(SearchStatus::NotFound),
        }
    }

    /// Replace the highlighted match with the literal replacement text
    ///
    /// The highlight is trusted as-is; it is only dropped when the buffer,
    /// pattern or flags changed after it was produced.
    pub fn replace_current(
        &mut self,
        buffer: &mut TextBuffer,
        history: &mut HistoryLog,
    ) -> Result<SearchStatus, PatternError> {
        if self.pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        self.invalidate_if_stale(buffer);
        // An empty highlight has nothing to replace
        let Some(span) = self.current_highlight().filter(|span| !span.is_empty()) else {
            return Ok(SearchStatus::NothingSelected);
        };

        let old_text = buffer.slice(span).to_string();
        let at = buffer.line_col(span.start);
        buffer.replace_span(span, &self.replacement);

        let inserted = Span::new(
            span.start,
            span.start.advance(self.replacement.chars().count()),
        );
        buffer.set_cursor(inserted.end);
        self.reset();

        history.push(HistoryEntry::ReplacedOne {
            old_text,
            new_text: self.replacement.clone(),
            at,
        });
        Ok(SearchStatus::Replaced(inserted))
    }

    /// Replace every match, expanding `$1`/`${name}` group references
    pub fn replace_all(
        &mut self,
        buffer: &mut TextBuffer,
        history: &mut HistoryLog,
    ) -> Result<SearchStatus, PatternError> {
        self.invalidate_if_stale(buffer);
        let regex = self.compile()?;

        let (new_text, count) = substitute_all(&regex, buffer.text(), &self.replacement);
        if count == 0 {
            return Ok(SearchStatus::NoMatchesToReplace);
        }

        let cursor = buffer.cursor();
        buffer.set_text(new_text);
        let restored = if buffer.contains(cursor) {
            cursor
        } else {
            Position::START
        };
        buffer.set_cursor(restored);
        self.reset();

        history.push(HistoryEntry::ReplacedAll {
            pattern: self.pattern.clone(),
            replacement: self.replacement.clone(),
            count,
        });
        Ok(SearchStatus::ReplacedAll(count))
    }

    /// Compile the current pattern; a failure resets the search
    fn compile(&mut self) -> Result<Regex, PatternError> {
        let result = if self.pattern.is_empty() {
            Err(PatternError::Empty)
        } else {
            self.flags()
                .compile(&self.pattern)
                .map_err(|e| PatternError::Invalid(e.to_string()))
        };
        if result.is_err() {
            self.reset();
        }
        result
    }

    /// Reset if the buffer, pattern or flags moved on since the last search,
    /// then remember the current ones
    fn invalidate_if_stale(&mut self, buffer: &TextBuffer) {
        let generation = buffer.edit_generation();
        if self.positions_may_be_stale(generation) || self.query_changed_since_search() {
            self.reset();
        }
        self.last_searched_pattern = self.pattern.clone();
        self.last_searched_flags = self.flags();
        self.searched_at_generation = generation;
    }
}

/// Convert increasing, non-overlapping byte ranges to character spans
fn to_spans(text: &str, ranges: impl Iterator<Item = Range<usize>>) -> Vec<Span> {
    let mut byte = 0;
    let mut chars = 0;
    ranges
        .map(|range| {
            chars += text[byte..range.start].chars().count();
            let start = chars;
            chars += text[range.start..range.end].chars().count();
            byte = range.end;
            Span::new(Position::new(start), Position::new(chars))
        })
        .collect()
}

/// Substitute every match, returning the new text and the replacement count
fn substitute_all(regex: &Regex, text: &str, replacement: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..m.start()]);
        caps.expand(replacement, &mut out);
        last = m.end();
        count += 1;
    }
    out.push_str(&text[last..]);
    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(text: &str, pattern: &str) -> (SearchState, TextBuffer) {
        let state = SearchState {
            pattern: pattern.to_string(),
            ..Default::default()
        };
        (state, TextBuffer::new(text.to_string()))
    }

    fn found(result: Result<SearchStatus, PatternError>) -> Span {
        match result {
            Ok(SearchStatus::Found(span)) => span,
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let state = SearchState::default();
        assert!(state.multiline);
        assert!(!state.ignore_case);
        assert!(!state.dot_all);
        assert_eq!(state.last_search_end(), Position::START);
        assert!(state.highlights().is_empty());
    }

    #[test]
    fn test_find_next_visits_matches_in_order_then_resets() {
        let (mut state, mut buffer) = setup("cat bat cat", "cat");

        let first = found(state.find_next(&mut buffer));
        assert_eq!((first.start.offset(), first.end.offset()), (0, 3));
        assert_eq!(buffer.cursor(), Position::new(0));
        assert_eq!(state.last_search_end(), Position::new(3));

        let second = found(state.find_next(&mut buffer));
        assert_eq!((second.start.offset(), second.end.offset()), (8, 11));
        assert_eq!(state.highlights(), &[second]);

        assert_eq!(state.find_next(&mut buffer), Ok(SearchStatus::NoMoreMatches));
        assert_eq!(state.last_search_end(), Position::START);
        assert!(state.highlights().is_empty());

        // Starts over from the top on the next call
        let again = found(state.find_next(&mut buffer));
        assert_eq!(again, first);
    }

    #[test]
    fn test_find_next_not_found_leaves_state() {
        let (mut state, mut buffer) = setup("hello", "xyz");
        assert_eq!(state.find_next(&mut buffer), Ok(SearchStatus::NotFound));
        assert_eq!(state.last_search_end(), Position::START);
    }

    #[test]
    fn test_find_next_empty_pattern_is_error() {
        let (mut state, mut buffer) = setup("hello", "");
        assert_eq!(state.find_next(&mut buffer), Err(PatternError::Empty));
    }

    #[test]
    fn test_find_next_invalid_pattern_resets() {
        let (mut state, mut buffer) = setup("abc abc", "abc");
        found(state.find_next(&mut buffer));

        state.pattern = "(abc".to_string();
        let result = state.find_next(&mut buffer);
        assert!(matches!(result, Err(PatternError::Invalid(_))));
        assert_eq!(state.last_search_end(), Position::START);
        assert!(state.highlights().is_empty());
    }

    #[test]
    fn test_find_next_after_edit_starts_from_top() {
        let (mut state, mut buffer) = setup("one two one two", "one");
        found(state.find_next(&mut buffer));
        found(state.find_next(&mut buffer));
        assert_eq!(state.last_search_end(), Position::new(11));

        buffer.text_mut().push('!');
        buffer.mark_edited();

        let span = found(state.find_next(&mut buffer));
        assert_eq!(span.start, Position::START);
    }

    #[test]
    fn test_flag_change_resets_position() {
        let (mut state, mut buffer) = setup("Abc abc", "abc");
        let span = found(state.find_next(&mut buffer));
        assert_eq!(span.start.offset(), 4);

        state.ignore_case = true;
        let span = found(state.find_next(&mut buffer));
        assert_eq!(span.start.offset(), 0);
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let (mut state, mut buffer) = setup("abc", "x*");
        let mut starts = Vec::new();
        for _ in 0..10 {
            match state.find_next(&mut buffer) {
                Ok(SearchStatus::Found(span)) => {
                    assert!(span.is_empty());
                    starts.push(span.start.offset());
                }
                Ok(SearchStatus::NoMoreMatches) => break,
                other => panic!("Unexpected {:?}", other),
            }
        }
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_length_match_on_empty_buffer() {
        let (mut state, mut buffer) = setup("", "x*");
        let span = found(state.find_next(&mut buffer));
        assert_eq!(span, Span::new(Position::START, Position::START));
        assert_eq!(state.find_next(&mut buffer), Ok(SearchStatus::NoMoreMatches));
    }

    fn spans_of(highlights: &[Span]) -> Vec<(usize, usize)> {
        highlights
            .iter()
            .map(|s| (s.start.offset(), s.end.offset()))
            .collect()
    }

    #[test]
    fn test_find_next_visits_same_spans_as_find_all() {
        for (text, pattern) in [("abc", "$"), ("baab", "a*"), ("abc", "x*"), ("a1 b22", r"\d*")] {
            let (mut state, mut buffer) = setup(text, pattern);
            state.find_all(&mut buffer).unwrap();
            let all = spans_of(state.highlights());

            let mut visited = Vec::new();
            loop {
                match state.find_next(&mut buffer) {
                    Ok(SearchStatus::Found(span)) => visited.extend(spans_of(&[span])),
                    Ok(SearchStatus::NoMoreMatches) => break,
                    other => panic!("Unexpected {:?} for {:?} on {:?}", other, pattern, text),
                }
                assert!(visited.len() <= all.len(), "{:?} on {:?} ran past find-all", pattern, text);
            }
            assert_eq!(visited, all, "{:?} on {:?}", pattern, text);
        }
    }

    #[test]
    fn test_end_anchor_found_by_find_next() {
        let (mut state, mut buffer) = setup("abc", "$");
        let span = found(state.find_next(&mut buffer));
        assert_eq!((span.start.offset(), span.end.offset()), (3, 3));
        assert_eq!(state.find_next(&mut buffer), Ok(SearchStatus::NoMoreMatches));
    }

    #[test]
    fn test_find_next_uses_real_line_context() {
        let (mut state, mut buffer) = setup("aa\naa", "^aa");
        let first = found(state.find_next(&mut buffer));
        assert_eq!(first.start.offset(), 0);
        let second = found(state.find_next(&mut buffer));
        assert_eq!(second.start.offset(), 3);
        assert_eq!(state.find_next(&mut buffer), Ok(SearchStatus::NoMoreMatches));
    }

    #[test]
    fn test_find_next_multibyte_positions() {
        let (mut state, mut buffer) = setup("größe größe", "größe");
        found(state.find_next(&mut buffer));
        let span = found(state.find_next(&mut buffer));
        assert_eq!((span.start.offset(), span.end.offset()), (6, 11));
        assert_eq!(buffer.slice(span), "größe");
    }

    #[test]
    fn test_find_all_counts_engine_matches() {
        let (mut state, mut buffer) = setup("a1 b22 c333", r"\d+");
        assert_eq!(state.find_all(&mut buffer), Ok(SearchStatus::FoundAll(3)));

        let spans: Vec<(usize, usize)> = state
            .highlights()
            .iter()
            .map(|s| (s.start.offset(), s.end.offset()))
            .collect();
        assert_eq!(spans, vec![(1, 2), (4, 6), (8, 11)]);
        for pair in state.highlights().windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(buffer.take_reveal_request(), Some(Position::new(1)));
    }

    #[test]
    fn test_find_all_resets_find_next_position() {
        let (mut state, mut buffer) = setup("x y x", "x");
        found(state.find_next(&mut buffer));
        assert_eq!(state.last_search_end(), Position::new(1));

        state.find_all(&mut buffer).unwrap();
        assert_eq!(state.last_search_end(), Position::START);

        // find-next begins at the first match again
        let span = found(state.find_next(&mut buffer));
        assert_eq!(span.start, Position::START);
    }

    #[test]
    fn test_find_all_not_found_is_status() {
        let (mut state, mut buffer) = setup("hello", "z");
        assert_eq!(state.find_all(&mut buffer), Ok(SearchStatus::NotFound));
    }

    #[test]
    fn test_replace_current_without_highlight_is_noop() {
        let (mut state, mut buffer) = setup("keep me", "me");
        state.replacement = "you".to_string();
        let mut history = HistoryLog::new();

        let result = state.replace_current(&mut buffer, &mut history);
        assert_eq!(result, Ok(SearchStatus::NothingSelected));
        assert_eq!(buffer.text(), "keep me");
        assert!(history.is_empty());
    }

    #[test]
    fn test_replace_current_replaces_highlight_literally() {
        let (mut state, mut buffer) = setup("one two one", "o(n)e");
        state.replacement = "$1!".to_string();
        let mut history = HistoryLog::new();

        found(state.find_next(&mut buffer));
        let result = state.replace_current(&mut buffer, &mut history);
        assert!(matches!(result, Ok(SearchStatus::Replaced(_))));
        assert_eq!(buffer.text(), "$1! two one");
        assert_eq!(state.last_search_end(), Position::START);
        assert!(state.highlights().is_empty());

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.entries()[0].to_string(),
            "Replaced 'one' with '$1!' at Ln 1, Col 1."
        );
    }

    #[test]
    fn test_replace_current_ignores_empty_highlight() {
        let (mut state, mut buffer) = setup("abc", "x*");
        state.replacement = "Z".to_string();
        let mut history = HistoryLog::new();

        let span = found(state.find_next(&mut buffer));
        assert!(span.is_empty());

        let result = state.replace_current(&mut buffer, &mut history);
        assert_eq!(result, Ok(SearchStatus::NothingSelected));
        assert_eq!(buffer.text(), "abc");
        assert!(history.is_empty());
    }

    #[test]
    fn test_replace_current_after_find_all_uses_first_span() {
        let (mut state, mut buffer) = setup("ab ab", "ab");
        state.replacement = "X".to_string();
        let mut history = HistoryLog::new();

        state.find_all(&mut buffer).unwrap();
        state.replace_current(&mut buffer, &mut history).unwrap();
        assert_eq!(buffer.text(), "X ab");
    }

    #[test]
    fn test_replace_current_drops_highlight_after_edit() {
        let (mut state, mut buffer) = setup("cat", "cat");
        state.replacement = "dog".to_string();
        let mut history = HistoryLog::new();

        found(state.find_next(&mut buffer));
        buffer.text_mut().insert(0, ' ');
        buffer.mark_edited();

        let result = state.replace_current(&mut buffer, &mut history);
        assert_eq!(result, Ok(SearchStatus::NothingSelected));
        assert_eq!(buffer.text(), " cat");
    }

    #[test]
    fn test_replace_current_drops_highlight_after_pattern_change() {
        let (mut state, mut buffer) = setup("cat dog", "cat");
        state.replacement = "X".to_string();
        let mut history = HistoryLog::new();

        found(state.find_next(&mut buffer));
        state.pattern = "dog".to_string();

        let result = state.replace_current(&mut buffer, &mut history);
        assert_eq!(result, Ok(SearchStatus::NothingSelected));
        assert_eq!(buffer.text(), "cat dog");
    }

    #[test]
    fn test_replace_all_is_idempotent() {
        let (mut state, mut buffer) = setup("aaa bbb aaa", "a+");
        state.replacement = "X".to_string();
        let mut history = HistoryLog::new();

        assert_eq!(
            state.replace_all(&mut buffer, &mut history),
            Ok(SearchStatus::ReplacedAll(2))
        );
        assert_eq!(buffer.text(), "X bbb X");

        assert_eq!(
            state.replace_all(&mut buffer, &mut history),
            Ok(SearchStatus::NoMatchesToReplace)
        );
        assert_eq!(buffer.text(), "X bbb X");
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.entries()[0].to_string(),
            "Replaced all occurrences of pattern 'a+' with 'X' (2 replacements)."
        );
    }

    #[test]
    fn test_replace_all_expands_groups() {
        let (mut state, mut buffer) = setup("John Smith\nJane Doe", r"(?P<first>\w+) (\w+)");
        state.replacement = "$2, ${first}".to_string();
        let mut history = HistoryLog::new();

        state.replace_all(&mut buffer, &mut history).unwrap();
        assert_eq!(buffer.text(), "Smith, John\nDoe, Jane");
    }

    #[test]
    fn test_replace_all_restores_cursor_or_falls_back() {
        let (mut state, mut buffer) = setup("aaaa bbbb", "b+");
        state.replacement = "c".to_string();
        let mut history = HistoryLog::new();

        buffer.sync_cursor(Position::new(3));
        state.replace_all(&mut buffer, &mut history).unwrap();
        assert_eq!(buffer.cursor(), Position::new(3));

        // Cursor beyond the shortened text goes back to the start
        state.pattern = "a+ c".to_string();
        state.replacement = "z".to_string();
        buffer.sync_cursor(Position::new(6));
        state.replace_all(&mut buffer, &mut history).unwrap();
        assert_eq!(buffer.text(), "z");
        assert_eq!(buffer.cursor(), Position::START);
    }

    #[test]
    fn test_replace_all_invalid_pattern() {
        let (mut state, mut buffer) = setup("text", "[");
        let mut history = HistoryLog::new();
        let result = state.replace_all(&mut buffer, &mut history);
        assert!(matches!(result, Err(PatternError::Invalid(_))));
        assert_eq!(buffer.text(), "text");
        assert!(history.is_empty());
    }

    #[test]
    fn test_report_sets_message() {
        let mut state = SearchState::default();
        state.report(&Ok(SearchStatus::FoundAll(4)));
        assert_eq!(
            state.message,
            Some(SearchMessage::Info("Found 4 matches.".to_string()))
        );

        state.report(&Err(PatternError::Empty));
        assert!(matches!(state.message, Some(SearchMessage::Error(_))));
    }

    #[test]
    fn test_query_changed_since_search() {
        let (mut state, mut buffer) = setup("hello", "hello");
        assert!(state.query_changed_since_search());

        state.find_all(&mut buffer).unwrap();
        assert!(!state.query_changed_since_search());

        state.dot_all = true;
        assert!(state.query_changed_since_search());
    }
}
