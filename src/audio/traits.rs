use crate::audio::{
    error::AudioError,
    subscription::{PlayRequest, Subscription, Ticket},
};
use std::{path::Path, time::Duration};

/// Load and play results arrive later as events tagged with their ticket, and
/// only while that ticket's [`Subscription`] is alive.
pub trait MediaBackend {
    fn subscribe(&mut self, ticket: Ticket) -> Subscription;
    fn load(&mut self, ticket: Ticket, source: &Path);
    fn play(&mut self, request: PlayRequest);
    fn pause(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, position: Duration) -> Result<(), AudioError>;
    fn set_volume(&mut self, volume: f32);
    fn position(&self) -> Duration;
}
