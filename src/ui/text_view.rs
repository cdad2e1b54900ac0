//! Document text view with match highlighting

use std::ops::Range;

use crate::editor::{Position, Span, TextBuffer};
use eframe::egui;
use egui::text::{CCursor, CCursorRange, LayoutJob, TextFormat};

/// Font size for the document text
const TEXT_SIZE: f32 = 15.0;

/// Background color for highlighted matches
const HIGHLIGHT_COLOR: egui::Color32 = egui::Color32::YELLOW;

/// Show the editable document. Returns true if the user changed the text.
pub fn show(ui: &mut egui::Ui, buffer: &mut TextBuffer, highlights: &[Span]) -> bool {
    let id = egui::Id::new("document_text");

    // Apply a cursor move requested by a command (find-next, replace, open)
    if let Some(pos) = buffer.take_cursor_request() {
        let mut state = egui::text_edit::TextEditState::load(ui.ctx(), id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(pos.offset()))));
        state.store(ui.ctx(), id);
    }
    let reveal = buffer.take_reveal_request();

    let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
        let mut job = highlight_job(text, highlights, ui.visuals().text_color());
        job.wrap.max_width = wrap_width;
        ui.fonts(|f| f.layout_job(job))
    };

    let output = egui::ScrollArea::both()
        .id_salt("document_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let output = egui::TextEdit::multiline(buffer.text_mut())
                .id(id)
                .desired_width(f32::INFINITY)
                .desired_rows(30)
                .lock_focus(true)
                .layouter(&mut layouter)
                .show(ui);

            if let Some(pos) = reveal {
                let cursor = output.galley.from_ccursor(CCursor::new(pos.offset()));
                let rect = output
                    .galley
                    .pos_from_cursor(&cursor)
                    .translate(output.galley_pos.to_vec2());
                ui.scroll_to_rect(rect, Some(egui::Align::Center));
            }
            output
        })
        .inner;

    if let Some(range) = output.cursor_range {
        buffer.sync_cursor(Position::new(range.primary.ccursor.index));
    }

    output.response.changed()
}

/// Byte ranges of character spans within `text`, clamped to its end
fn byte_ranges(text: &str, spans: &[Span]) -> Vec<Range<usize>> {
    if spans.is_empty() {
        return Vec::new();
    }
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let byte_at = |pos: Position| boundaries.get(pos.offset()).copied().unwrap_or(text.len());
    spans
        .iter()
        .map(|span| byte_at(span.start)..byte_at(span.end))
        .collect()
}

/// Lay out `text`, painting the highlighted spans
fn highlight_job(text: &str, highlights: &[Span], color: egui::Color32) -> LayoutJob {
    let normal = TextFormat {
        font_id: egui::FontId::monospace(TEXT_SIZE),
        color,
        ..Default::default()
    };
    let highlighted = TextFormat {
        background: HIGHLIGHT_COLOR,
        color: egui::Color32::BLACK,
        ..normal.clone()
    };

    let mut job = LayoutJob::default();
    let mut last = 0;
    for range in byte_ranges(text, highlights) {
        // Spans from a stale frame may overlap or run backwards
        if range.start < last || range.end < range.start {
            continue;
        }
        if range.start > last {
            job.append(&text[last..range.start], 0.0, normal.clone());
        }
        if !range.is_empty() {
            job.append(&text[range.clone()], 0.0, highlighted.clone());
        }
        last = range.end;
    }
    if last < text.len() || job.sections.is_empty() {
        job.append(&text[last..], 0.0, normal);
    }
    job
}
