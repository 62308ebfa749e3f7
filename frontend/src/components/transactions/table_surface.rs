use shared::{DisplayRow, PresentationSurface};
use yew::NodeRef;

use super::bar_chart::{draw_placeholder, mounted_canvas};

/// Retained table state read by the view, plus the chart canvas for
/// placeholder text.
///
/// Yew re-renders the table from `rows` and `active_row` after every
/// update, so clearing and rendering here only replaces the model.
pub struct DomSurface {
    rows: Vec<DisplayRow>,
    active_row: Option<usize>,
    canvas_ref: NodeRef,
}

impl DomSurface {
    pub fn new(canvas_ref: NodeRef) -> Self {
        Self {
            rows: Vec::new(),
            active_row: None,
            canvas_ref,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }
}

impl PresentationSurface for DomSurface {
    fn render_rows(&mut self, rows: &[DisplayRow]) {
        self.rows.extend_from_slice(rows);
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
        self.active_row = None;
    }

    fn draw_placeholder_text(&mut self, text: &str) {
        let drawn = mounted_canvas(&self.canvas_ref).and_then(|canvas| draw_placeholder(&canvas, text));
        if let Err(e) = drawn {
            log::warn!("Could not draw chart placeholder: {}", e);
        }
    }

    fn highlight_row(&mut self, row: usize) {
        self.active_row = Some(row);
    }
}
