use ratatui::crossterm::event::{
    KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    audio::{commands::AudioCommand, traits::MediaBackend},
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events<B: MediaBackend>(
        app: &mut App<B>,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await
            && Self::handle_event(app, evt, tui)?
        {
            should_render = true;
        }

        Self::drain(app);
        Ok(should_render)
    }

    pub fn drain<B: MediaBackend>(app: &mut App<B>) {
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }
    }

    pub fn handle_event<B: MediaBackend>(
        app: &mut App<B>,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => return Ok(app.has_focus),
        }

        Ok(true)
    }

    pub fn handle_action<B: MediaBackend>(app: &mut App<B>, evt: Event) {
        app.controller.handle_event(evt);
    }

    pub fn handle_key_event<B: MediaBackend>(app: &mut App<B>, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        let welcome = app.controller.state().ui.welcome;
        let seek_step = i64::try_from(app.controller.config().seek_step_secs).unwrap_or(i64::MAX);
        if let Some(msg) = InputHandler::handle_key(evt, welcome, seek_step) {
            app.update(msg);
        }
    }

    pub fn handle_mouse_event<B: MediaBackend>(app: &mut App<B>, evt: MouseEvent) {
        if app.controller.state().ui.welcome {
            return;
        }

        match evt.kind {
            MouseEventKind::ScrollUp => app.update(AudioCommand::VolumeUp.into()),
            MouseEventKind::ScrollDown => app.update(AudioCommand::VolumeDown.into()),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(percent) = app.ui.scrub_percent(evt.column, evt.row) {
                    app.update(AudioCommand::SeekAbsolute(percent).into());
                }
            }
            _ => {}
        }
    }
}
