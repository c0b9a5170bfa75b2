use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::info;

use crate::{
    audio::{
        config::AudioConfig, controller::AudioController, playback::RodioBackend,
        traits::MediaBackend,
    },
    catalog::Catalog,
    event::events::Event,
};

use super::{message::AppMessage, state::UiState, tui, util::handler::EventHandler};

pub struct App<B: MediaBackend> {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub controller: AudioController<B>,
    pub ui: UiState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App<RodioBackend> {
    pub fn new() -> color_eyre::Result<Self> {
        let config = AudioConfig::from_env();
        info!(media_root = %config.media_root.display(), "starting");

        let (event_tx, event_rx) = flume::unbounded();
        let backend = RodioBackend::new(event_tx.clone(), config.tick)?;

        Ok(Self::with_backend(
            backend,
            Catalog::builtin(),
            config,
            event_tx,
            event_rx,
        ))
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.render_frame(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }
}

impl<B: MediaBackend> App<B> {
    pub fn with_backend(
        backend: B,
        catalog: Catalog,
        config: AudioConfig,
        event_tx: Sender<Event>,
        event_rx: Receiver<Event>,
    ) -> Self {
        let controller = AudioController::new(backend, catalog, config, event_tx.clone());

        Self {
            event_rx,
            event_tx,
            controller,
            ui: UiState::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Audio(cmd) => self.controller.handle_command(cmd),
            AppMessage::ToggleDark => self.controller.toggle_dark(),
            AppMessage::DismissWelcome => self.controller.dismiss_welcome(),
            AppMessage::MoveHighlight(delta) => {
                let len = self.controller.catalog().len();
                self.ui.move_highlight(delta, len);
            }
            AppMessage::ActivateHighlighted => {
                if let Some(id) = self.controller.catalog().at(self.ui.highlighted).map(|t| t.id) {
                    self.controller.select(id);
                }
            }
        }
    }

    fn render_frame(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}
