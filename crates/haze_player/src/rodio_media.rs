//! rodio-backed media element

use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::media::{MediaElement, MediaError, MediaEvent};

/// Minimum position change reported as a time update (seconds)
const TIME_UPDATE_STEP: f64 = 0.25;

/// Plays tracks from the site's content directory through the default output
pub struct RodioMedia {
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    sink: Sink,
    root: PathBuf,
    loaded: Option<PathBuf>,
    events: VecDeque<MediaEvent>,
    last_reported: f64,
    ended_reported: bool,
}

impl RodioMedia {
    /// Open the default output device; tracks resolve against `root`
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| MediaError::NoOutput(e.to_string()))?;
        let sink = Sink::try_new(&stream_handle).map_err(|e| MediaError::NoOutput(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            _stream_handle: stream_handle,
            sink,
            root: root.into(),
            loaded: None,
            events: VecDeque::new(),
            last_reported: 0.0,
            ended_reported: false,
        })
    }

    fn resolve(&self, src: &str) -> PathBuf {
        self.root.join(src.trim_start_matches('/'))
    }

    /// Decode `path` into the sink, paused
    fn queue(&mut self, path: &Path) -> Result<(), MediaError> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| MediaError::Decode(e.to_string()))?;
        let duration = source
            .total_duration()
            .map(|d| d.as_secs_f64())
            .unwrap_or(f64::NAN);

        self.sink.stop();
        self.sink.append(source);
        self.sink.pause();
        self.last_reported = 0.0;
        self.ended_reported = false;
        self.events.push_back(MediaEvent::LoadedMetadata(duration));
        Ok(())
    }
}

impl MediaElement for RodioMedia {
    fn load(&mut self, src: &str) -> Result<(), MediaError> {
        let path = self.resolve(src);
        log::debug!("Loading track {}", path.display());
        self.loaded = Some(path.clone());
        self.queue(&path)
    }

    fn unload(&mut self) {
        self.sink.stop();
        self.loaded = None;
        self.events.clear();
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let path = self.loaded.clone().ok_or(MediaError::NoSource)?;
        // Ended tracks leave the sink empty; restart from the top
        if self.sink.empty() {
            self.queue(&path)?;
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn seek(&mut self, seconds: f64) {
        if let Err(err) = self.sink.try_seek(Duration::from_secs_f64(seconds.max(0.0))) {
            log::warn!("Seek to {:.1}s failed: {}", seconds, err);
        }
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        if let Some(event) = self.events.pop_front() {
            return Some(event);
        }
        if self.loaded.is_none() || self.sink.is_paused() {
            return None;
        }
        if self.sink.empty() {
            if self.ended_reported {
                return None;
            }
            self.ended_reported = true;
            return Some(MediaEvent::Ended);
        }
        let position = self.sink.get_pos().as_secs_f64();
        if (position - self.last_reported).abs() >= TIME_UPDATE_STEP {
            self.last_reported = position;
            return Some(MediaEvent::TimeUpdate(position));
        }
        None
    }
}
