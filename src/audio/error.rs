use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Seek failed: {0}")]
    Seek(String),

    #[error("Audio output device error: {0}")]
    Device(String),
}
