use std::time::Duration;

use crate::audio::{
    error::AudioError,
    subscription::{PlayRequest, Ticket},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BeginLoad(Ticket),
    Media(MediaEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { ticket: Ticket, duration: Duration },
    CanPlay { ticket: Ticket },
    TimeUpdated { ticket: Ticket, elapsed: Duration },
    Ended { ticket: Ticket },
    LoadFailed { ticket: Ticket, error: AudioError },
    PlayResolved {
        request: PlayRequest,
        result: Result<(), AudioError>,
    },
}

impl MediaEvent {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::MetadataLoaded { ticket, .. }
            | Self::CanPlay { ticket }
            | Self::TimeUpdated { ticket, .. }
            | Self::Ended { ticket }
            | Self::LoadFailed { ticket, .. } => *ticket,
            Self::PlayResolved { request, .. } => request.ticket,
        }
    }
}

impl From<MediaEvent> for Event {
    fn from(event: MediaEvent) -> Self {
        Self::Media(event)
    }
}
