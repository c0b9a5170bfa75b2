use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use flume::Sender;
use rodio::{OutputStream, Sink, Source};
use tracing::debug;

use crate::{
    audio::{
        error::AudioError,
        subscription::{Listener, Listeners, PlayRequest, Subscription, Ticket},
        traits::MediaBackend,
        util::{construct_sink, open_source},
    },
    event::events::{Event, MediaEvent},
};

pub struct RodioBackend {
    _stream: OutputStream,
    sink: Arc<Sink>,
    listeners: Listeners,
    event_tx: Sender<Event>,
    running: Arc<AtomicBool>,
}

impl RodioBackend {
    pub fn new(event_tx: Sender<Event>, tick: Duration) -> color_eyre::Result<Self> {
        let (stream, sink) = construct_sink()?;
        sink.pause();

        let backend = Self {
            _stream: stream,
            sink: Arc::new(sink),
            listeners: Listeners::new(),
            event_tx,
            running: Arc::new(AtomicBool::new(true)),
        };

        backend.start_monitor(tick)?;
        Ok(backend)
    }

    fn start_monitor(&self, tick: Duration) -> std::io::Result<()> {
        let sink = self.sink.clone();
        let listeners = self.listeners.clone();
        let event_tx = self.event_tx.clone();
        let running = self.running.clone();

        thread::Builder::new()
            .name("ditty-monitor".into())
            .spawn(move || {
                while running.load(Ordering::Relaxed) {
                    thread::sleep(tick);

                    let event = listeners
                        .with_active(|listener| {
                            sample(listener, sink.is_paused(), sink.empty(), sink.get_pos())
                        })
                        .flatten();

                    if let Some(event) = event
                        && event_tx.send(event.into()).is_err()
                    {
                        break;
                    }
                }
            })?;

        Ok(())
    }

    fn emit(&self, event: MediaEvent) {
        if self.listeners.current() == Some(event.ticket()) {
            let _ = self.event_tx.send(event.into());
        }
    }
}

// One monitor tick: at most one `Ended` per subscription, nothing while paused.
fn sample(
    listener: &mut Listener,
    paused: bool,
    empty: bool,
    position: Duration,
) -> Option<MediaEvent> {
    if listener.ended || paused {
        return None;
    }
    if empty {
        listener.ended = true;
        return Some(MediaEvent::Ended {
            ticket: listener.ticket,
        });
    }

    Some(MediaEvent::TimeUpdated {
        ticket: listener.ticket,
        elapsed: position,
    })
}

impl MediaBackend for RodioBackend {
    fn subscribe(&mut self, ticket: Ticket) -> Subscription {
        self.listeners.subscribe(ticket)
    }

    fn load(&mut self, ticket: Ticket, source: &Path) {
        self.sink.clear();

        match open_source(source) {
            Ok(decoder) => {
                let duration = decoder.total_duration();
                self.sink.append(decoder);

                if let Some(duration) = duration {
                    self.emit(MediaEvent::MetadataLoaded { ticket, duration });
                }
                self.emit(MediaEvent::CanPlay { ticket });
            }
            Err(error) => self.emit(MediaEvent::LoadFailed { ticket, error }),
        }
    }

    fn play(&mut self, request: PlayRequest) {
        let result = if self.sink.empty() {
            Err(AudioError::PlaybackRejected("no source loaded".into()))
        } else {
            self.sink.play();
            Ok(())
        };

        self.emit(MediaEvent::PlayResolved { request, result });
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.clear();
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.sink
            .try_seek(position)
            .map_err(|e| AudioError::Seek(e.to_string()))
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        debug!("rodio_backend_shutdown");
        self.running.store(false, Ordering::Relaxed);
        self.sink.stop();
    }
}
