use std::cell::Cell;

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub highlighted: usize,
    pub scrub_area: Cell<Rect>,
}

impl UiState {
    pub fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = self
            .highlighted
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    pub fn scrub_percent(&self, column: u16, row: u16) -> Option<f64> {
        let area = self.scrub_area.get();
        if area.width == 0 || !area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = f64::from(column - area.x);
        let span = f64::from(area.width.saturating_sub(1).max(1));
        Some((offset / span * 100.0).clamp(0.0, 100.0))
    }
}
