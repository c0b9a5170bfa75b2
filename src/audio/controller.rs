use flume::Sender;
use tracing::{debug, error, info, trace, warn};

use crate::{
    audio::{
        commands::AudioCommand,
        config::AudioConfig,
        progress,
        state::{PlaybackState, PlayerState},
        subscription::{PlayRequest, Subscription, Ticket},
        traits::MediaBackend,
    },
    catalog::{Catalog, Step, Track, TrackId},
    event::events::{Event, MediaEvent},
};

pub struct AudioController<B: MediaBackend> {
    backend: B,
    catalog: Catalog,
    config: AudioConfig,
    state: PlayerState,
    event_tx: Sender<Event>,
    generation: u64,
    ticket: Option<Ticket>,
    subscription: Option<Subscription>,
    play_seq: u64,
    pending_play: Option<PlayRequest>,
}

impl<B: MediaBackend> AudioController<B> {
    pub fn new(
        backend: B,
        catalog: Catalog,
        config: AudioConfig,
        event_tx: Sender<Event>,
    ) -> Self {
        let mut controller = Self {
            backend,
            catalog,
            state: PlayerState::default(),
            event_tx,
            generation: 0,
            ticket: None,
            subscription: None,
            play_seq: 0,
            pending_play: None,
            config,
        };

        controller.set_volume(controller.config.volume);
        controller
    }

    pub fn handle_command(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::Select(id) => self.select(id),
            AudioCommand::Toggle => self.toggle(),
            AudioCommand::Pause => self.pause(),
            AudioCommand::Next => self.next(),
            AudioCommand::Previous => self.previous(),
            AudioCommand::SeekRelative(delta) => self.seek_relative(delta),
            AudioCommand::SeekAbsolute(percent) => self.seek_absolute(percent),
            AudioCommand::SetVolume(volume) => self.set_volume(volume),
            AudioCommand::VolumeUp => self.set_volume(self.state.volume + self.config.volume_step),
            AudioCommand::VolumeDown => {
                self.set_volume(self.state.volume - self.config.volume_step)
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::BeginLoad(ticket) => self.begin_load(ticket),
            Event::Media(media) => self.handle_media(media),
        }
    }

    pub fn select(&mut self, id: TrackId) {
        if self.catalog.get(id).is_none() {
            warn!(id = id.0, "select_unknown_track");
            return;
        }

        match self.state.playback {
            PlaybackState::Playing(current) | PlaybackState::Paused(current) if current == id => {
                self.toggle()
            }
            PlaybackState::Loading(current) if current == id => {}
            _ => self.load_track(id),
        }
    }

    pub fn toggle(&mut self) {
        match self.state.playback {
            PlaybackState::Playing(_) => self.pause(),
            PlaybackState::Paused(_) => self.request_play(),
            PlaybackState::Idle | PlaybackState::Loading(_) => {
                debug!(state = ?self.state.playback, "toggle_ignored");
            }
        }
    }

    pub fn pause(&mut self) {
        let id = match self.state.playback {
            PlaybackState::Playing(id) | PlaybackState::Loading(id) | PlaybackState::Paused(id) => {
                id
            }
            PlaybackState::Idle => return,
        };

        self.pending_play = None;
        self.backend.pause();
        self.state.playback = PlaybackState::Paused(id);
    }

    pub fn next(&mut self) {
        self.step(Step::Forward);
    }

    pub fn previous(&mut self) {
        self.step(Step::Backward);
    }

    pub fn seek_relative(&mut self, delta_secs: i64) {
        if !self.is_seekable() {
            return;
        }

        let target = progress::offset(self.backend.position(), delta_secs, self.state.duration);
        self.apply_seek(target);
    }

    pub fn seek_absolute(&mut self, percent: f64) {
        if !self.is_seekable() {
            return;
        }
        if self.state.duration.is_zero() {
            debug!("seek_absolute_without_duration");
            return;
        }

        let target = progress::position_at(percent, self.state.duration);
        self.apply_seek(target);
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = progress::clamp_volume(volume);
        self.state.volume = volume;
        self.backend.set_volume(volume);
    }

    pub fn toggle_dark(&mut self) {
        self.state.ui.dark = !self.state.ui.dark;
    }

    pub fn dismiss_welcome(&mut self) {
        self.state.ui.welcome = false;
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.selected().and_then(|id| self.catalog.get(id))
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn step(&mut self, step: Step) {
        let Some(current) = self.state.selected() else {
            return;
        };
        if let Some(target) = self.catalog.neighbor(current, step).map(|t| t.id) {
            self.load_track(target);
        }
    }

    fn load_track(&mut self, id: TrackId) {
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            track_id: id,
        };

        self.backend.stop();
        self.subscription = None;
        self.pending_play = None;
        self.ticket = Some(ticket);
        self.state.playback = PlaybackState::Loading(id);
        self.state.reset_position();

        info!(id = id.0, generation = ticket.generation, "track_selected");

        // The load runs one event-loop turn later, after the selection is visible.
        if self.event_tx.send(Event::BeginLoad(ticket)).is_err() {
            self.begin_load(ticket);
        }
    }

    fn begin_load(&mut self, ticket: Ticket) {
        if self.ticket != Some(ticket) {
            trace!(generation = ticket.generation, "stale_load_dropped");
            return;
        }
        let Some(track) = self.catalog.get(ticket.track_id) else {
            return;
        };

        let source = track.audio_path(&self.config.media_root);
        debug!(id = ticket.track_id.0, source = %source.display(), "track_load_started");

        self.subscription = Some(self.backend.subscribe(ticket));
        self.backend.set_volume(self.state.volume);
        self.backend.load(ticket, &source);
    }

    fn handle_media(&mut self, event: MediaEvent) {
        if self.ticket != Some(event.ticket()) {
            trace!(event = ?event, "stale_media_event_dropped");
            return;
        }

        match event {
            MediaEvent::MetadataLoaded { duration, .. } => {
                if self.state.duration.is_zero() {
                    self.state.duration = duration;
                    self.state.progress_percent =
                        progress::percent(self.state.elapsed, self.state.duration);
                }
            }
            MediaEvent::CanPlay { .. } => {
                if matches!(self.state.playback, PlaybackState::Loading(_)) {
                    self.request_play();
                }
            }
            MediaEvent::TimeUpdated { elapsed, .. } => {
                self.state.elapsed = elapsed;
                self.state.progress_percent = progress::percent(elapsed, self.state.duration);
            }
            MediaEvent::Ended { ticket } => {
                info!(id = ticket.track_id.0, "track_ended");
                self.next();
            }
            MediaEvent::LoadFailed { ticket, error } => {
                error!(id = ticket.track_id.0, error = %error, "track_load_failed");
                self.pending_play = None;
                self.state.playback = PlaybackState::Paused(ticket.track_id);
            }
            MediaEvent::PlayResolved { request, result } => {
                if self.pending_play != Some(request) {
                    trace!(seq = request.seq, "stale_play_resolution_dropped");
                    return;
                }
                self.pending_play = None;

                let id = request.ticket.track_id;
                match result {
                    Ok(()) => {
                        info!(id = id.0, "playback_started");
                        self.state.playback = PlaybackState::Playing(id);
                    }
                    Err(error) => {
                        warn!(id = id.0, error = %error, "playback_start_failed");
                        self.state.playback = PlaybackState::Paused(id);
                    }
                }
            }
        }
    }

    fn request_play(&mut self) {
        let Some(ticket) = self.ticket else {
            return;
        };

        self.play_seq += 1;
        let request = PlayRequest {
            ticket,
            seq: self.play_seq,
        };
        self.pending_play = Some(request);
        self.backend.play(request);
    }

    fn is_seekable(&self) -> bool {
        matches!(
            self.state.playback,
            PlaybackState::Playing(_) | PlaybackState::Paused(_)
        )
    }

    fn apply_seek(&mut self, target: std::time::Duration) {
        let reached = match self.backend.seek(target) {
            Ok(()) => target,
            Err(error) => {
                warn!(error = %error, target_ms = target.as_millis() as u64, "seek_failed");
                self.backend.position()
            }
        };

        self.state.elapsed = reached;
        self.state.progress_percent = progress::percent(reached, self.state.duration);
    }
}

impl<B: MediaBackend> Drop for AudioController<B> {
    fn drop(&mut self) {
        self.subscription = None;
        self.backend.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{
        error::AudioError,
        testing::{Call, RecordingBackend},
    };
    use flume::Receiver;
    use std::time::Duration;

    struct Harness {
        controller: AudioController<RecordingBackend>,
        rx: Receiver<Event>,
    }

    impl Harness {
        fn new() -> Self {
            let (tx, rx) = flume::unbounded();
            let controller = AudioController::new(
                RecordingBackend::default(),
                Catalog::builtin(),
                AudioConfig::default(),
                tx,
            );
            Self { controller, rx }
        }

        fn pump(&mut self) {
            while let Ok(event) = self.rx.try_recv() {
                self.controller.handle_event(event);
            }
        }

        fn media(&mut self, event: MediaEvent) {
            self.controller.handle_event(event.into());
        }

        fn ready(&mut self, secs: u64) -> Ticket {
            self.pump();
            let ticket = self.controller.ticket().expect("ticket");
            self.media(MediaEvent::MetadataLoaded {
                ticket,
                duration: Duration::from_secs(secs),
            });
            self.media(MediaEvent::CanPlay { ticket });
            ticket
        }

        fn resolve(&mut self, result: Result<(), AudioError>) {
            let request = self.controller.backend().last_play().expect("play request");
            self.media(MediaEvent::PlayResolved { request, result });
        }

        fn state(&self) -> PlaybackState {
            self.controller.state().playback
        }
    }

    #[test]
    fn starts_idle_with_defaults() {
        let h = Harness::new();
        let state = h.controller.state();
        assert_eq!(state.playback, PlaybackState::Idle);
        assert_eq!(state.volume, 1.0);
        assert_eq!(state.progress_percent, 0.0);
        assert!(state.ui.welcome);
        assert!(!state.ui.dark);
    }

    #[test]
    fn load_is_deferred_until_next_turn() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        assert_eq!(h.state(), PlaybackState::Loading(TrackId(1)));
        assert!(h.controller.backend().last_load().is_none());

        h.pump();
        let (ticket, path) = h.controller.backend().last_load().expect("load");
        assert_eq!(ticket.track_id, TrackId(1));
        assert!(path.ends_with("audio/Hale Dil.mp3"));
    }

    #[test]
    fn superseded_load_never_reaches_backend() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.controller.select(TrackId(2));
        h.pump();

        let loads: Vec<_> = h
            .controller
            .backend()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(ticket, _) => Some(ticket.track_id),
                _ => None,
            })
            .collect();
        assert_eq!(loads, vec![TrackId(2)]);
    }

    #[test]
    fn late_callbacks_for_previous_track_are_ignored() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        let first = h.ready(100);
        let first_play = h.controller.backend().last_play().expect("play");

        h.controller.select(TrackId(2));
        h.media(MediaEvent::PlayResolved {
            request: first_play,
            result: Ok(()),
        });
        h.media(MediaEvent::TimeUpdated {
            ticket: first,
            elapsed: Duration::from_secs(40),
        });
        h.media(MediaEvent::Ended { ticket: first });

        assert_eq!(h.state(), PlaybackState::Loading(TrackId(2)));
        assert_eq!(h.controller.state().elapsed, Duration::ZERO);
    }

    #[test]
    fn rejected_play_leaves_player_paused() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.ready(100);
        h.resolve(Err(AudioError::PlaybackRejected("autoplay".into())));

        assert_eq!(h.state(), PlaybackState::Paused(TrackId(1)));
        assert!(!h.controller.state().is_playing());
    }

    #[test]
    fn load_failure_leaves_player_paused() {
        let mut h = Harness::new();
        h.controller.select(TrackId(3));
        h.pump();
        let ticket = h.controller.ticket().expect("ticket");
        h.media(MediaEvent::LoadFailed {
            ticket,
            error: AudioError::SourceUnavailable("missing".into()),
        });
        assert_eq!(h.state(), PlaybackState::Paused(TrackId(3)));
    }

    #[test]
    fn pause_abandons_pending_play() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.ready(100);
        h.resolve(Ok(()));

        h.controller.toggle();
        h.controller.toggle();
        let resume = h.controller.backend().last_play().expect("resume");
        h.controller.pause();
        h.media(MediaEvent::PlayResolved {
            request: resume,
            result: Ok(()),
        });

        assert_eq!(h.state(), PlaybackState::Paused(TrackId(1)));
    }

    #[test]
    fn selecting_current_row_toggles() {
        let mut h = Harness::new();
        h.controller.select(TrackId(2));
        h.ready(100);
        h.resolve(Ok(()));

        h.controller.select(TrackId(2));
        assert_eq!(h.state(), PlaybackState::Paused(TrackId(2)));
        assert_eq!(h.controller.backend().load_count(), 1);
    }

    #[test]
    fn selecting_loading_row_is_noop() {
        let mut h = Harness::new();
        h.controller.select(TrackId(2));
        let ticket = h.controller.ticket();
        h.controller.select(TrackId(2));
        assert_eq!(h.controller.ticket(), ticket);
    }

    #[test]
    fn unknown_track_is_ignored() {
        let mut h = Harness::new();
        h.controller.select(TrackId(42));
        assert_eq!(h.state(), PlaybackState::Idle);
    }

    #[test]
    fn transport_without_selection_is_noop() {
        let mut h = Harness::new();
        h.controller.toggle();
        h.controller.next();
        h.controller.previous();
        h.controller.seek_relative(10);
        h.controller.seek_absolute(50.0);
        assert_eq!(h.state(), PlaybackState::Idle);
        assert!(
            h.controller
                .backend()
                .calls
                .iter()
                .all(|c| matches!(c, Call::Volume(_)))
        );
    }

    #[test]
    fn progress_is_zero_until_duration_known() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.pump();
        let ticket = h.controller.ticket().expect("ticket");
        h.media(MediaEvent::TimeUpdated {
            ticket,
            elapsed: Duration::from_secs(5),
        });
        assert_eq!(h.controller.state().progress_percent, 0.0);

        h.media(MediaEvent::MetadataLoaded {
            ticket,
            duration: Duration::from_secs(20),
        });
        assert_eq!(h.controller.state().progress_percent, 25.0);
    }

    #[test]
    fn duration_is_set_once_per_load() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        let ticket = h.ready(100);
        h.media(MediaEvent::MetadataLoaded {
            ticket,
            duration: Duration::from_secs(7),
        });
        assert_eq!(h.controller.state().duration, Duration::from_secs(100));
    }

    #[test]
    fn seek_absolute_is_optimistic() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.ready(200);
        h.resolve(Ok(()));

        h.controller.seek_absolute(75.0);
        assert_eq!(h.controller.state().progress_percent, 75.0);
        assert_eq!(h.controller.backend().position, Duration::from_secs(150));
    }

    #[test]
    fn failed_seek_keeps_real_position() {
        let mut h = Harness::new();
        h.controller.select(TrackId(1));
        h.ready(200);
        h.resolve(Ok(()));
        h.controller.pause();

        h.controller.backend_mut().position = Duration::from_secs(50);
        h.controller.backend_mut().reject_seeks = true;
        h.controller.seek_absolute(75.0);
        assert_eq!(h.controller.state().elapsed, Duration::from_secs(50));
        assert_eq!(h.controller.state().progress_percent, 25.0);

        h.controller.seek_relative(10);
        assert_eq!(h.controller.state().elapsed, Duration::from_secs(50));
        assert_eq!(
            h.controller.backend().calls.last(),
            Some(&Call::Seek(Duration::from_secs(60)))
        );
    }

    #[test]
    fn volume_is_clamped_and_applied() {
        let mut h = Harness::new();
        h.controller.set_volume(-0.5);
        assert_eq!(h.controller.state().volume, 0.0);
        h.controller.set_volume(1.7);
        assert_eq!(h.controller.state().volume, 1.0);
        assert_eq!(h.controller.backend().calls.last(), Some(&Call::Volume(1.0)));

        h.controller.handle_command(AudioCommand::VolumeDown);
        assert!((h.controller.state().volume - 0.95).abs() < 1e-6);
    }

    #[test]
    fn ui_flags_do_not_touch_playback() {
        let mut h = Harness::new();
        let calls = h.controller.backend().calls.len();
        h.controller.toggle_dark();
        h.controller.dismiss_welcome();
        assert!(h.controller.state().ui.dark);
        assert!(!h.controller.state().ui.welcome);
        assert_eq!(h.controller.backend().calls.len(), calls);
    }

    #[test]
    fn subscription_released_on_track_change_and_drop() {
        let mut h = Harness::new();
        let listeners = h.controller.backend().listeners.clone();

        h.controller.select(TrackId(1));
        h.pump();
        let first = h.controller.ticket();
        assert_eq!(listeners.current(), first);

        h.controller.select(TrackId(2));
        assert_eq!(listeners.current(), None);
        h.pump();
        assert_eq!(listeners.current(), h.controller.ticket());

        drop(h);
        assert_eq!(listeners.current(), None);
    }
}
