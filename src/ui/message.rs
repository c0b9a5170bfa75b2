use crate::audio::commands::AudioCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    Audio(AudioCommand),

    // Screen
    ToggleDark,
    DismissWelcome,

    // List
    MoveHighlight(isize),
    ActivateHighlighted,
}

impl From<AudioCommand> for AppMessage {
    fn from(cmd: AudioCommand) -> Self {
        Self::Audio(cmd)
    }
}
