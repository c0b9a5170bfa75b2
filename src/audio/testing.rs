use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::audio::{
    error::AudioError,
    subscription::{Listeners, PlayRequest, Subscription, Ticket},
    traits::MediaBackend,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(Ticket, PathBuf),
    Play(PlayRequest),
    Pause,
    Stop,
    Seek(Duration),
    Volume(f32),
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    pub listeners: Listeners,
    pub position: Duration,
    pub reject_seeks: bool,
}

impl RecordingBackend {
    pub fn last_play(&self) -> Option<PlayRequest> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Play(request) => Some(*request),
            _ => None,
        })
    }

    pub fn last_load(&self) -> Option<(Ticket, PathBuf)> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Load(ticket, path) => Some((*ticket, path.clone())),
            _ => None,
        })
    }

    pub fn load_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Load(..)))
            .count()
    }
}

impl MediaBackend for RecordingBackend {
    fn subscribe(&mut self, ticket: Ticket) -> Subscription {
        self.listeners.subscribe(ticket)
    }

    fn load(&mut self, ticket: Ticket, source: &Path) {
        self.position = Duration::ZERO;
        self.calls.push(Call::Load(ticket, source.to_path_buf()));
    }

    fn play(&mut self, request: PlayRequest) {
        self.calls.push(Call::Play(request));
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn stop(&mut self) {
        self.position = Duration::ZERO;
        self.calls.push(Call::Stop);
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.calls.push(Call::Seek(position));
        if self.reject_seeks {
            return Err(AudioError::Seek("source is not seekable".into()));
        }
        self.position = position;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::Volume(volume));
    }

    fn position(&self) -> Duration {
        self.position
    }
}
