//! Playlist player state

use haze_content::Song;

use crate::media::{MediaElement, MediaEvent};

/// What has already been pushed to the media element
#[derive(Debug, Clone, Default)]
struct Pushed {
    source: Option<(u64, String)>,
    playing: bool,
    volume: Option<f32>,
}

/// Audio player state machine
///
/// Track changes, play/pause and volume are plain state updates; nothing
/// reaches the media element until [`sync`](Self::sync) is called.
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    songs: Vec<Song>,
    current_index: usize,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: f32,
    is_visible: bool,
    is_loading: bool,
    /// Bumped on every track change so re-selecting the same index reloads
    track_serial: u64,
    pending_seek: Option<f64>,
    pushed: Pushed,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    /// A visible, paused player waiting for its song list
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            current_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            is_visible: true,
            is_loading: true,
            track_serial: 0,
            pending_seek: None,
            pushed: Pushed::default(),
        }
    }

    /// Builder: initial volume (clamped)
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.set_volume(volume);
        self
    }

    /// Builder: start playing as soon as a track is available
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.is_playing = autoplay;
        self
    }

    /// Install the song list and finish loading
    pub fn load_songs(&mut self, songs: Vec<Song>) {
        log::info!("Player loaded {} songs", songs.len());
        self.songs = songs;
        if self.current_index >= self.songs.len() {
            self.current_index = 0;
        }
        self.is_loading = false;
    }

    /// Finish loading without songs; the player stays hidden
    pub fn fail_loading(&mut self) {
        log::debug!("Player has no songs to show");
        self.is_loading = false;
    }

    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Advance one track, wrapping from the last to the first
    pub fn next(&mut self) {
        if self.songs.is_empty() {
            return;
        }
        let next = if self.current_index + 1 < self.songs.len() {
            self.current_index + 1
        } else {
            0
        };
        self.select(next);
    }

    /// Go back one track, wrapping from the first to the last
    pub fn previous(&mut self) {
        if self.songs.is_empty() {
            return;
        }
        let previous = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.songs.len() - 1
        };
        self.select(previous);
    }

    fn select(&mut self, index: usize) {
        self.current_index = index;
        self.current_time = 0.0;
        self.pending_seek = None;
        self.track_serial += 1;
        log::debug!("Selected track {}", index);
    }

    /// Jump to `seconds`, clamped to the track when its duration is known
    pub fn seek(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let mut target = seconds.max(0.0);
        if self.duration.is_finite() && self.duration > 0.0 {
            target = target.min(self.duration);
        }
        self.current_time = target;
        self.pending_seek = Some(target);
    }

    /// Set volume, clamped to `[0, 1]`; NaN is ignored
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Hide the player; playback stops on the next sync
    pub fn close(&mut self) {
        self.is_visible = false;
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Track finished: advance like [`next`](Self::next)
    pub fn on_ended(&mut self) {
        self.next();
    }

    /// Swap in `fresh` as the mounted player
    ///
    /// The media element still holds what this player pushed, so that state
    /// carries over and the next [`sync`](Self::sync) unloads the old track.
    pub fn remount(&mut self, fresh: AudioPlayer) {
        let pushed = std::mem::take(&mut self.pushed);
        let serial = self.track_serial.wrapping_add(1);
        *self = fresh;
        self.pushed = pushed;
        self.track_serial = serial;
    }

    fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(seconds) => self.on_time_update(seconds),
            MediaEvent::LoadedMetadata(duration) => self.on_loaded_metadata(duration),
            MediaEvent::Ended => self.on_ended(),
        }
    }

    /// Push pending state to `media`, then apply the events it reports
    pub fn sync(&mut self, media: &mut dyn MediaElement) {
        let wanted = if self.is_visible && !self.is_loading {
            self.current_song()
                .map(|song| (self.track_serial, song.file.clone()))
        } else {
            None
        };

        let mut reloaded = false;
        if wanted != self.pushed.source {
            match &wanted {
                Some((_, src)) => {
                    if let Err(err) = media.load(src) {
                        log::error!("Failed to load track {}: {}", src, err);
                    }
                    self.duration = 0.0;
                }
                None => media.unload(),
            }
            self.pushed = Pushed {
                source: wanted,
                ..Pushed::default()
            };
            reloaded = true;
        }

        if self.pushed.source.is_none() {
            return;
        }

        if self.pushed.volume != Some(self.volume) {
            media.set_volume(self.volume);
            self.pushed.volume = Some(self.volume);
        }

        if reloaded || self.pushed.playing != self.is_playing {
            if self.is_playing {
                if let Err(err) = media.play() {
                    log::error!("Playback failed: {}", err);
                }
            } else {
                media.pause();
            }
            self.pushed.playing = self.is_playing;
        }

        if let Some(target) = self.pending_seek.take() {
            media.seek(target);
        }

        while let Some(event) = media.poll_event() {
            self.handle_event(event);
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Display model, or `None` when there is nothing to show
    pub fn view(&self) -> Option<PlayerView> {
        if !self.is_visible || self.is_loading {
            return None;
        }
        let song = self.current_song()?;

        let max = if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            100.0
        };
        let progress = (self.current_time / max).clamp(0.0, 1.0) as f32;

        Some(PlayerView {
            playing: self.is_playing,
            title: song.title.clone(),
            artist: song.artist.clone(),
            elapsed: format_time(self.current_time),
            duration: format_time(self.duration),
            progress,
            volume: self.volume,
        })
    }
}

/// Rendered state of a visible player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub playing: bool,
    pub title: String,
    pub artist: String,
    /// Formatted position (`m:ss`)
    pub elapsed: String,
    /// Formatted duration (`m:ss`)
    pub duration: String,
    /// Position as a fraction of the progress bar
    pub progress: f32,
    pub volume: f32,
}

impl PlayerView {
    /// `playing : Title - Artist` or `paused : Title - Artist`
    pub fn status_line(&self) -> String {
        let status = if self.playing { "playing" } else { "paused" };
        format!("{} : {} - {}", status, self.title, self.artist)
    }
}

/// Format seconds as `m:ss`; NaN, infinite and negative values give `0:00`
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
