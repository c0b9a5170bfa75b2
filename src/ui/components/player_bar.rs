use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::{self, border},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{
    audio::{progress::format_time, state::PlayerState},
    catalog::Track,
    util::colors::Palette,
};

pub const BAR_HEIGHT: u16 = 6;

struct BarLayout {
    cover: Rect,
    title: Rect,
    artist: Rect,
    elapsed: Rect,
    scrub: Rect,
    total: Rect,
    transport: Rect,
    volume: Rect,
}

fn split(area: Rect) -> BarLayout {
    let inner = Block::default().borders(Borders::TOP).inner(area);
    let [info, center, volume] = Layout::horizontal([
        Constraint::Length(26),
        Constraint::Min(20),
        Constraint::Length(16),
    ])
    .areas(inner);

    let [cover, title, artist] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(info);

    let [_, timeline, _, transport] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(center);

    let [elapsed, scrub, total] = Layout::horizontal([
        Constraint::Length(7),
        Constraint::Min(4),
        Constraint::Length(7),
    ])
    .areas(timeline);

    let [_, volume] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(volume);

    BarLayout {
        cover,
        title,
        artist,
        elapsed,
        scrub,
        total,
        transport,
        volume,
    }
}

pub struct PlayerBarWidget<'a> {
    track: &'a Track,
    state: &'a PlayerState,
    palette: &'a Palette,
}

impl<'a> PlayerBarWidget<'a> {
    pub fn new(track: &'a Track, state: &'a PlayerState, palette: &'a Palette) -> Self {
        Self {
            track,
            state,
            palette,
        }
    }

    pub fn scrub_area(area: Rect) -> Rect {
        split(area).scrub
    }

    fn cover(&self) -> Paragraph<'a> {
        let initials: String = self
            .track
            .title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();

        Paragraph::new(Line::from(Span::styled(
            initials,
            Style::new()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::new().fg(self.palette.muted))
                .title_bottom(Span::styled(
                    self.track.image_name(),
                    Style::new().fg(self.palette.muted),
                )),
        )
    }

    fn transport(&self) -> Line<'static> {
        let toggle = if self.state.is_playing() { "⏸" } else { "▶" };
        let key = Style::new().fg(self.palette.muted);
        let icon = Style::new().fg(self.palette.text).add_modifier(Modifier::BOLD);

        Line::from(vec![
            Span::styled("⏮ ", icon),
            Span::styled("p   ", key),
            Span::styled("⏪ ", icon),
            Span::styled("←   ", key),
            Span::styled(format!("{toggle} "), icon.fg(self.palette.accent)),
            Span::styled("space   ", key),
            Span::styled("⏩ ", icon),
            Span::styled("→   ", key),
            Span::styled("⏭ ", icon),
            Span::styled("n", key),
        ])
    }
}

impl Widget for PlayerBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(self.palette.surface));
        Block::default()
            .borders(Borders::TOP)
            .border_set(border::Set {
                top_left: symbols::line::ROUNDED.horizontal,
                top_right: symbols::line::ROUNDED.horizontal,
                ..border::ROUNDED
            })
            .border_style(Style::new().fg(self.palette.muted))
            .render(area, buf);

        let layout = split(area);

        self.cover().render(layout.cover, buf);
        Paragraph::new(Span::styled(
            self.track.title.as_str(),
            Style::new()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .render(layout.title, buf);
        Paragraph::new(Span::styled(
            self.track.artist.as_str(),
            Style::new().fg(self.palette.muted),
        ))
        .render(layout.artist, buf);

        Paragraph::new(format_time(self.state.elapsed))
            .alignment(Alignment::Center)
            .render(layout.elapsed, buf);
        Gauge::default()
            .gauge_style(Style::new().fg(self.palette.accent).bg(self.palette.background))
            .ratio((self.state.progress_percent / 100.0).clamp(0.0, 1.0))
            .label("")
            .use_unicode(true)
            .render(layout.scrub, buf);
        Paragraph::new(format_time(self.state.duration))
            .alignment(Alignment::Center)
            .render(layout.total, buf);

        Paragraph::new(self.transport())
            .alignment(Alignment::Center)
            .render(layout.transport, buf);

        let volume_label = format!("🔊 {:.0}%", self.state.volume * 100.0);
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(self.palette.muted)),
            )
            .gauge_style(Style::new().fg(self.palette.accent).bg(self.palette.background))
            .ratio(f64::from(self.state.volume).clamp(0.0, 1.0))
            .label(Span::styled(volume_label, Style::new().fg(self.palette.text)))
            .render(layout.volume, buf);
    }
}
