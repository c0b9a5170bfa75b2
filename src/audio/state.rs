use std::time::Duration;

use crate::catalog::TrackId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading(TrackId),
    Playing(TrackId),
    Paused(TrackId),
}

impl PlaybackState {
    pub fn track_id(&self) -> Option<TrackId> {
        match self {
            Self::Idle => None,
            Self::Loading(id) | Self::Playing(id) | Self::Paused(id) => Some(*id),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiMode {
    pub dark: bool,
    pub welcome: bool,
}

impl Default for UiMode {
    fn default() -> Self {
        Self {
            dark: false,
            welcome: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub playback: PlaybackState,
    pub volume: f32,
    pub progress_percent: f64,
    pub elapsed: Duration,
    pub duration: Duration,
    pub ui: UiMode,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playback: PlaybackState::Idle,
            volume: 1.0,
            progress_percent: 0.0,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            ui: UiMode::default(),
        }
    }
}

impl PlayerState {
    pub fn selected(&self) -> Option<TrackId> {
        self.playback.track_id()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub(crate) fn reset_position(&mut self) {
        self.progress_percent = 0.0;
        self.elapsed = Duration::ZERO;
        self.duration = Duration::ZERO;
    }
}
