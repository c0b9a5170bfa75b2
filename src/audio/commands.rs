use crate::catalog::TrackId;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Select(TrackId),
    Toggle,
    Pause,
    Next,
    Previous,
    SeekRelative(i64),
    SeekAbsolute(f64),
    SetVolume(f32),
    VolumeUp,
    VolumeDown,
}
