use crate::{audio::commands::AudioCommand, ui::message::AppMessage};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, welcome: bool, seek_step: i64) -> Option<AppMessage> {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Some(AppMessage::Quit);
        }

        if welcome {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(AppMessage::DismissWelcome),
                KeyCode::Char('q') => Some(AppMessage::Quit),
                KeyCode::Char('d') => Some(AppMessage::ToggleDark),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char(' ') => Some(AudioCommand::Toggle.into()),
            KeyCode::Right => Some(AudioCommand::SeekRelative(seek_step).into()),
            KeyCode::Left => Some(AudioCommand::SeekRelative(-seek_step).into()),
            KeyCode::Char('n') => Some(AudioCommand::Next.into()),
            KeyCode::Char('p') => Some(AudioCommand::Previous.into()),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(AudioCommand::VolumeUp.into()),
            KeyCode::Char('-') => Some(AudioCommand::VolumeDown.into()),
            KeyCode::Char('d') => Some(AppMessage::ToggleDark),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveHighlight(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveHighlight(1)),
            KeyCode::Enter => Some(AppMessage::ActivateHighlighted),
            KeyCode::Char(c @ '0'..='9') => {
                let tenth = c.to_digit(10).unwrap_or(0);
                Some(AudioCommand::SeekAbsolute(f64::from(tenth) * 10.0).into())
            }
            _ => None,
        }
    }
}
