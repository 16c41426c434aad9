//! Media element seam

use std::collections::VecDeque;
use std::fmt;

/// Playback notifications raised by a media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position moved (seconds)
    TimeUpdate(f64),
    /// Duration became known (seconds, NaN if unknown)
    LoadedMetadata(f64),
    /// Current track reached its end
    Ended,
}

/// Error type for media operations
#[derive(Debug)]
pub enum MediaError {
    /// No audio output device
    NoOutput(String),
    /// Track file could not be opened
    Io(std::io::Error),
    /// Track could not be decoded
    Decode(String),
    /// Nothing loaded to play
    NoSource,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NoOutput(msg) => write!(f, "No audio output: {}", msg),
            MediaError::Io(err) => write!(f, "Media IO error: {}", err),
            MediaError::Decode(msg) => write!(f, "Media decode error: {}", msg),
            MediaError::NoSource => write!(f, "No media source loaded"),
        }
    }
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        MediaError::Io(err)
    }
}

/// A single audio element the player drives
pub trait MediaElement {
    /// Point the element at a new source (site-relative path)
    fn load(&mut self, src: &str) -> Result<(), MediaError>;
    /// Drop the current source and stop output
    fn unload(&mut self);
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Volume in `[0, 1]`
    fn set_volume(&mut self, volume: f32);
    /// Jump to a position in seconds
    fn seek(&mut self, seconds: f64);
    /// Next pending playback event, if any
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

/// Commands recorded by [`NullMedia`]
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load(String),
    Unload,
    Play,
    Pause,
    SetVolume(f32),
    Seek(f64),
}

/// Silent media element that records the commands it receives
///
/// Used when no audio output is available, and to drive the player in tests.
#[derive(Debug, Default)]
pub struct NullMedia {
    commands: Vec<MediaCommand>,
    events: VecDeque<MediaEvent>,
    fail_play: bool,
}

impl NullMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `play` call fail, like a blocked autoplay
    pub fn with_failing_play(mut self) -> Self {
        self.fail_play = true;
        self
    }

    /// Queue an event to be reported on the next poll
    pub fn push_event(&mut self, event: MediaEvent) {
        self.events.push_back(event);
    }

    pub fn commands(&self) -> &[MediaCommand] {
        &self.commands
    }

    /// Take and clear the recorded commands
    pub fn take_commands(&mut self) -> Vec<MediaCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl MediaElement for NullMedia {
    fn load(&mut self, src: &str) -> Result<(), MediaError> {
        self.commands.push(MediaCommand::Load(src.to_string()));
        Ok(())
    }

    fn unload(&mut self) {
        self.commands.push(MediaCommand::Unload);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.commands.push(MediaCommand::Play);
        if self.fail_play {
            Err(MediaError::NoOutput("playback blocked".to_string()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.commands.push(MediaCommand::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.commands.push(MediaCommand::SetVolume(volume));
    }

    fn seek(&mut self, seconds: f64) {
        self.commands.push(MediaCommand::Seek(seconds));
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_media_records_commands() {
        let mut media = NullMedia::new();
        media.load("/a.mp3").unwrap();
        media.play().unwrap();
        media.set_volume(0.5);
        assert_eq!(
            media.take_commands(),
            vec![
                MediaCommand::Load("/a.mp3".into()),
                MediaCommand::Play,
                MediaCommand::SetVolume(0.5),
            ]
        );
        assert!(media.commands().is_empty());
    }

    #[test]
    fn test_null_media_events_fifo() {
        let mut media = NullMedia::new();
        media.push_event(MediaEvent::LoadedMetadata(120.0));
        media.push_event(MediaEvent::Ended);
        assert_eq!(media.poll_event(), Some(MediaEvent::LoadedMetadata(120.0)));
        assert_eq!(media.poll_event(), Some(MediaEvent::Ended));
        assert_eq!(media.poll_event(), None);
    }

    #[test]
    fn test_failing_play() {
        let mut media = NullMedia::new().with_failing_play();
        assert!(media.play().is_err());
    }

    #[test]
    fn test_error_display() {
        assert!(format!("{}", MediaError::NoSource).contains("No media source"));
        assert!(format!("{}", MediaError::Decode("bad header".into())).contains("bad header"));
    }
}
