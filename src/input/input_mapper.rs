//! Input mapping from raw events to site actions
//!
//! The window has no pointer UI, so every link and button on a page is
//! reachable from the keyboard instead.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::router::Route;

/// What a key press asks the site to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiteAction {
    /// Follow a header link (1-4)
    Navigate(Route),
    /// Re-fetch the current page's documents (R)
    Refresh,
    /// Toggle the music player (Space)
    PlayPause,
    /// Skip to the next track (N)
    NextTrack,
    /// Back to the previous track (P)
    PreviousTrack,
    /// Change volume by a step (Up / Down)
    Volume(f32),
    /// Seek by a number of seconds (Left / Right)
    Seek(f64),
    /// Hide the music player (C)
    ClosePlayer,
    /// "Refresh Page" on the error screen (F5)
    Reload,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to site actions
pub struct InputMapper;

impl InputMapper {
    /// Seconds skipped per Left/Right press
    pub const SEEK_STEP: f64 = 5.0;

    /// Map keyboard input to an action
    ///
    /// `volume_step` is the volume change for Up/Down.
    pub fn map_keyboard(key: KeyCode, state: ElementState, volume_step: f32) -> Option<SiteAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit1 => Some(SiteAction::Navigate(Route::Home)),
            KeyCode::Digit2 => Some(SiteAction::Navigate(Route::FavoriteMusic)),
            KeyCode::Digit3 => Some(SiteAction::Navigate(Route::FavoriteGames)),
            KeyCode::Digit4 => Some(SiteAction::Navigate(Route::FavoriteMovies)),
            KeyCode::KeyR => Some(SiteAction::Refresh),
            KeyCode::Space => Some(SiteAction::PlayPause),
            KeyCode::KeyN => Some(SiteAction::NextTrack),
            KeyCode::KeyP => Some(SiteAction::PreviousTrack),
            KeyCode::ArrowUp => Some(SiteAction::Volume(volume_step)),
            KeyCode::ArrowDown => Some(SiteAction::Volume(-volume_step)),
            KeyCode::ArrowRight => Some(SiteAction::Seek(Self::SEEK_STEP)),
            KeyCode::ArrowLeft => Some(SiteAction::Seek(-Self::SEEK_STEP)),
            KeyCode::KeyC => Some(SiteAction::ClosePlayer),
            KeyCode::F5 => Some(SiteAction::Reload),
            KeyCode::KeyF => Some(SiteAction::ToggleFullscreen),
            KeyCode::Escape => Some(SiteAction::Exit),
            _ => None,
        }
    }
}
