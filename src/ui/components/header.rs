use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors::Palette;

pub struct HeaderWidget<'a> {
    palette: &'a Palette,
    dark: bool,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(palette: &'a Palette, dark: bool) -> Self {
        Self { palette, dark }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(self.palette.muted));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, toggle_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(20)]).areas(inner);

        Paragraph::new(Line::from(Span::styled(
            " ♫ Music Player",
            Style::new()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        )))
        .render(title_area, buf);

        // Names the mode the toggle switches to.
        let label = if self.dark {
            "☀ Light Mode [d] "
        } else {
            "☾ Dark Mode [d] "
        };
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::new().fg(self.palette.text).bg(self.palette.surface),
        )))
        .alignment(Alignment::Right)
        .render(toggle_area, buf);
    }
}
