//! Text buffer with position tracking
//!
//! ## Addressing
//!
//! The document is held as a single `String`. Positions are character offsets
//! wrapped in [`Position`], which is what the text view and the search engine
//! exchange. The regex engine works on byte offsets, so the buffer provides the
//! conversions in both directions.
//!
//! Every edit bumps an edit generation counter. Anything that remembers a
//! position (the search state in particular) records the generation it was
//! computed at and treats itself as stale once the generation moves on.

use std::fmt;

/// A character offset into the buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The start of the buffer
    pub const START: Position = Position(0);

    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Character offset from the start of the buffer
    pub fn offset(self) -> usize {
        self.0
    }

    /// Move forward by `chars` characters
    pub fn advance(self, chars: usize) -> Self {
        Self(self.0.saturating_add(chars))
    }

    pub fn is_start(self) -> bool {
        self.0 == 0
    }
}

/// Human-facing line/column pair (both 1-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// A half-open range of positions `[start, end)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The document being edited
#[derive(Default)]
pub struct TextBuffer {
    /// Document content
    text: String,

    /// Insertion cursor
    cursor: Position,

    /// Cursor move requested by a command, applied by the text view
    pending_cursor: Option<Position>,

    /// Position the text view should scroll into view
    pending_reveal: Option<Position>,

    /// Whether the content differs from what was last loaded/saved
    modified: bool,

    /// Incremented on every edit
    generation: u64,
}

impl TextBuffer {
    #[cfg(test)]
    pub fn new(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text view; call [`TextBuffer::mark_edited`]
    /// afterwards if the view reports a change
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Number of characters in the buffer
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Position just past the last character
    pub fn end(&self) -> Position {
        Position(self.char_len())
    }

    /// Whether `pos` addresses a location inside (or at the end of) the buffer
    pub fn contains(&self, pos: Position) -> bool {
        pos.offset() <= self.char_len()
    }

    pub fn edit_generation(&self) -> u64 {
        self.generation
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record that the content was saved
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Record an edit made directly through [`TextBuffer::text_mut`]
    pub fn mark_edited(&mut self) {
        self.generation += 1;
        self.modified = true;
        if !self.contains(self.cursor) {
            self.cursor = self.end();
        }
    }

    /// Replace the whole content (file open). Not counted as a modification.
    pub fn load(&mut self, text: String) {
        self.text = text;
        self.generation += 1;
        self.modified = false;
        self.cursor = Position::START;
        self.request_cursor(Position::START);
        self.pending_reveal = Some(Position::START);
    }

    /// Replace the whole content as an edit
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.mark_edited();
    }

    /// Delete `span` and insert `text` in its place
    pub fn replace_span(&mut self, span: Span, text: &str) {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        self.text.replace_range(start..end, text);
        self.mark_edited();
    }

    /// Text covered by `span`
    pub fn slice(&self, span: Span) -> &str {
        &self.text[self.byte_offset(span.start)..self.byte_offset(span.end)]
    }

    /// Byte offset of a position, clamped to the end of the buffer
    pub fn byte_offset(&self, pos: Position) -> usize {
        self.text
            .char_indices()
            .nth(pos.offset())
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Position of a byte offset (which must be on a char boundary)
    pub fn position_of_byte(&self, byte: usize) -> Position {
        Position(self.text[..byte.min(self.text.len())].chars().count())
    }

    /// Line/column of a position for display
    pub fn line_col(&self, pos: Position) -> LineCol {
        let mut line = 1;
        let mut column = 1;
        for ch in self.text.chars().take(pos.offset()) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        LineCol { line, column }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Track the cursor as reported by the text view
    pub fn sync_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Move the cursor and ask the text view to follow
    pub fn set_cursor(&mut self, pos: Position) {
        let pos = if self.contains(pos) { pos } else { self.end() };
        self.cursor = pos;
        self.request_cursor(pos);
    }

    fn request_cursor(&mut self, pos: Position) {
        self.pending_cursor = Some(pos);
    }

    /// Ask the text view to scroll `pos` into view
    pub fn reveal(&mut self, pos: Position) {
        self.pending_reveal = Some(pos);
    }

    pub fn take_cursor_request(&mut self) -> Option<Position> {
        self.pending_cursor.take()
    }

    pub fn take_reveal_request(&mut self) -> Option<Position> {
        self.pending_reveal.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_and_advance() {
        let a = Position::START;
        let b = a.advance(3);
        assert!(a < b);
        assert_eq!(b.offset(), 3);
        assert!(a.is_start());
        assert!(!b.is_start());
    }

    #[test]
    fn test_byte_offsets_with_multibyte_text() {
        let buffer = TextBuffer::new("héllo wörld".to_string());
        assert_eq!(buffer.char_len(), 11);
        assert_eq!(buffer.byte_offset(Position::new(2)), 3);
        assert_eq!(buffer.position_of_byte(3), Position::new(2));
        // Past the end clamps
        assert_eq!(buffer.byte_offset(Position::new(50)), buffer.text().len());
    }

    #[test]
    fn test_line_col() {
        let buffer = TextBuffer::new("ab\ncd\nef".to_string());
        assert_eq!(buffer.line_col(Position::START), LineCol { line: 1, column: 1 });
        assert_eq!(buffer.line_col(Position::new(4)), LineCol { line: 2, column: 2 });
        assert_eq!(buffer.line_col(Position::new(6)), LineCol { line: 3, column: 1 });
        assert_eq!(buffer.line_col(Position::new(4)).to_string(), "Ln 2, Col 2");
    }

    #[test]
    fn test_replace_span_bumps_generation() {
        let mut buffer = TextBuffer::new("hello world".to_string());
        let gen = buffer.edit_generation();
        let span = Span::new(Position::new(6), Position::new(11));
        assert_eq!(buffer.slice(span), "world");

        buffer.replace_span(span, "there");
        assert_eq!(buffer.text(), "hello there");
        assert!(buffer.edit_generation() > gen);
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_load_is_not_a_modification() {
        let mut buffer = TextBuffer::new("old".to_string());
        buffer.set_text("edited".to_string());
        assert!(buffer.is_modified());

        buffer.load("fresh".to_string());
        assert!(!buffer.is_modified());
        assert_eq!(buffer.cursor(), Position::START);
        assert_eq!(buffer.take_cursor_request(), Some(Position::START));
        assert_eq!(buffer.take_cursor_request(), None);
    }

    #[test]
    fn test_set_cursor_clamps_to_end() {
        let mut buffer = TextBuffer::new("abc".to_string());
        buffer.set_cursor(Position::new(10));
        assert_eq!(buffer.cursor(), Position::new(3));
    }

    #[test]
    fn test_edit_that_shrinks_buffer_clamps_cursor() {
        let mut buffer = TextBuffer::new("abcdef".to_string());
        buffer.sync_cursor(Position::new(6));
        buffer.text_mut().truncate(2);
        buffer.mark_edited();
        assert_eq!(buffer.cursor(), Position::new(2));
    }
}
