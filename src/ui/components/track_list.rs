use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    audio::state::PlaybackState,
    catalog::Track,
    ui::util::get_active_track_icon,
    util::colors::Palette,
};

const HIGHLIGHT_SYMBOL: &str = "> ";

pub struct TrackListWidget<'a> {
    tracks: &'a [Track],
    playback: PlaybackState,
    highlighted: usize,
    palette: &'a Palette,
}

impl<'a> TrackListWidget<'a> {
    pub fn new(
        tracks: &'a [Track],
        playback: PlaybackState,
        highlighted: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            tracks,
            playback,
            highlighted,
            palette,
        }
    }

    fn button(&self, track: &Track) -> Span<'static> {
        match self.playback {
            PlaybackState::Playing(id) if id == track.id => Span::styled(
                " ⏸ Pause ",
                Style::new().fg(self.palette.background).bg(self.palette.active),
            ),
            PlaybackState::Loading(id) if id == track.id => Span::styled(
                " … Loading ",
                Style::new().fg(self.palette.background).bg(self.palette.muted),
            ),
            _ => Span::styled(
                " ▶ Play ",
                Style::new().fg(self.palette.background).bg(self.palette.accent),
            ),
        }
    }

    fn row(&self, track: &Track, width: usize) -> ListItem<'static> {
        let is_selected = self.playback.track_id() == Some(track.id);
        let marker = if is_selected {
            get_active_track_icon(self.playback.is_playing())
        } else {
            " "
        };

        let head = format!("{marker} {}", track.title);
        let button = self.button(track);
        let padding = width.saturating_sub(head.width() + button.content.width());

        let title_style = if is_selected {
            Style::new()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(self.palette.text)
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(head, title_style),
                Span::raw(" ".repeat(padding)),
                button,
            ]),
            Line::from(Span::styled(
                format!("  {} · {}", track.artist, track.image_name()),
                Style::new().fg(self.palette.muted),
            )),
        ])
    }
}

impl Widget for TrackListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.muted))
            .title(" Your Songs ");
        let inner = block.inner(area);

        if self.tracks.is_empty() {
            Widget::render(
                List::new(vec![ListItem::new("No tracks")]).block(block),
                area,
                buf,
            );
            return;
        }

        let width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
        let items: Vec<ListItem> = self.tracks.iter().map(|t| self.row(t, width)).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::new().bg(self.palette.surface))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut state =
            ListState::default().with_selected(Some(self.highlighted.min(self.tracks.len() - 1)));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
