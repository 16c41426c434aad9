//! Audio player for the site's music library
//!
//! [`AudioPlayer`] holds the playlist state (current track, play/pause,
//! position, volume, visibility) and pushes changes to a [`MediaElement`]
//! on [`sync`](AudioPlayer::sync). The element reports playback back as
//! [`MediaEvent`]s.

mod player;
mod media;
#[cfg(feature = "audio")]
mod rodio_media;

pub use player::{AudioPlayer, PlayerView, format_time};
pub use media::{MediaElement, MediaEvent, MediaError, MediaCommand, NullMedia};
#[cfg(feature = "audio")]
pub use rodio_media::RodioMedia;
