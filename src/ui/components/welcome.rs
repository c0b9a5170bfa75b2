use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors::Palette;

const WIDTH: u16 = 44;
const HEIGHT: u16 = 9;

pub struct WelcomeWidget<'a> {
    palette: &'a Palette,
}

impl<'a> WelcomeWidget<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for WelcomeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, card, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(WIDTH),
            Constraint::Fill(1),
        ])
        .areas(row);

        let text = vec![
            Line::default(),
            Line::from(Span::styled(
                "♫ Welcome to ditty",
                Style::new()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your songs, one keypress away.",
                Style::new().fg(self.palette.muted),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to start",
                Style::new().fg(self.palette.text),
            )),
            Line::from(Span::styled(
                "d dark mode · q quit",
                Style::new().fg(self.palette.muted),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(self.palette.muted))
                    .style(Style::new().bg(self.palette.surface)),
            )
            .render(card, buf);
    }
}
