use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Widget,
};

use crate::{
    audio::traits::MediaBackend,
    ui::{
        app::App,
        components::{
            header::HeaderWidget,
            player_bar::{BAR_HEIGHT, PlayerBarWidget},
            track_list::TrackListWidget,
            welcome::WelcomeWidget,
        },
    },
    util::colors,
};

impl<B: MediaBackend> Widget for &App<B> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let state = self.controller.state();
        let palette = colors::palette(state.ui.dark);
        buf.set_style(area, Style::new().bg(palette.background).fg(palette.text));

        if state.ui.welcome {
            self.ui.scrub_area.set(Rect::default());
            WelcomeWidget::new(palette).render(area, buf);
            return;
        }

        let current = self.controller.current_track();
        let bar_height = if current.is_some() { BAR_HEIGHT } else { 0 };

        let [header_area, list_area, bar_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(bar_height),
        ])
        .areas(area);

        HeaderWidget::new(palette, state.ui.dark).render(header_area, buf);
        TrackListWidget::new(
            self.controller.catalog().tracks(),
            state.playback,
            self.ui.highlighted,
            palette,
        )
        .render(list_area, buf);

        match current {
            Some(track) => {
                self.ui
                    .scrub_area
                    .set(PlayerBarWidget::scrub_area(bar_area));
                PlayerBarWidget::new(track, state, palette).render(bar_area, buf);
            }
            None => self.ui.scrub_area.set(Rect::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        audio::{config::AudioConfig, testing::RecordingBackend},
        catalog::{Catalog, TrackId},
        ui::app::App,
    };
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app() -> App<RecordingBackend> {
        let (tx, rx) = flume::unbounded();
        App::with_backend(
            RecordingBackend::default(),
            Catalog::builtin(),
            AudioConfig::default(),
            tx,
            rx,
        )
    }

    fn draw(app: &App<RecordingBackend>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
        terminal
            .draw(|f| f.render_widget(app, f.area()))
            .expect("draw");
        text(terminal.backend().buffer())
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn welcome_gate_is_shown_first() {
        let app = app();
        let screen = draw(&app);
        assert!(screen.contains("Welcome to ditty"));
        assert!(!screen.contains("Your Songs"));
    }

    #[test]
    fn list_without_selection_hides_player_bar() {
        let mut app = app();
        app.controller.dismiss_welcome();
        let screen = draw(&app);
        assert!(screen.contains("Your Songs"));
        assert!(screen.contains("Phir Mohabbat"));
        assert!(screen.contains("Dark Mode"));
        assert!(!screen.contains("space"));
        assert_eq!(app.ui.scrub_area.get().width, 0);
    }

    #[test]
    fn selection_shows_player_bar() {
        let mut app = app();
        app.controller.dismiss_welcome();
        app.controller.toggle_dark();
        app.controller.select(TrackId(3));
        let screen = draw(&app);
        assert!(screen.contains("Light Mode"));
        assert!(screen.contains("Ravi Basrur"));
        assert!(screen.contains("sultan.jpg"));
        assert!(screen.contains("0:00"));
        assert!(app.ui.scrub_area.get().width > 0);
    }
}
