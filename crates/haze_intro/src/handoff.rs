//! Intro handoff
//!
//! The view that hosts the sequencer. When the sequencer signals completion
//! the handoff deactivates it, fades the intro out over the configured
//! buffer delay, then reports `Done` so the caller can unmount the intro and
//! show the main content. The sequencer keeps rendering during the fade.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::{IntroConfig, IntroError};
use crate::sequencer::IntroSequencer;
use crate::transition::FadeTransition;

/// Where the intro is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffState {
    /// Animation running, completion not yet signalled
    Playing,
    /// Completion received; fading out before unmount
    FadingOut,
    /// Fade finished; the intro should be unmounted
    Done,
}

/// Hosts an [`IntroSequencer`] and drives the fade-out after completion
pub struct IntroHandoff {
    sequencer: IntroSequencer,
    completed: Rc<Cell<bool>>,
    fade: FadeTransition,
    state: HandoffState,
}

impl IntroHandoff {
    /// Mount a new intro run
    pub fn new(config: IntroConfig) -> Result<Self, IntroError> {
        let fade = FadeTransition::new(config.handoff_delay());
        let completed = Rc::new(Cell::new(false));
        let flag = completed.clone();
        let sequencer = IntroSequencer::new(config)?.with_on_complete(move || flag.set(true));

        Ok(Self {
            sequencer,
            completed,
            fade,
            state: HandoffState::Playing,
        })
    }

    /// Advance one frame
    pub fn frame(&mut self, delta: f32) -> HandoffState {
        match self.state {
            HandoffState::Playing => {
                self.sequencer.advance(delta);
                if self.completed.get() {
                    self.sequencer.set_active(false);
                    self.state = HandoffState::FadingOut;
                    log::debug!("Intro fading out over {:?}", self.fade.duration());
                }
            }
            HandoffState::FadingOut => {
                self.sequencer.advance(delta);
                if self.fade.update(delta) {
                    self.state = HandoffState::Done;
                    log::info!("Intro handoff done");
                }
            }
            HandoffState::Done => {}
        }
        self.state
    }

    /// Current lifecycle state
    pub fn state(&self) -> HandoffState {
        self.state
    }

    /// True once the intro should be unmounted
    pub fn is_done(&self) -> bool {
        self.state == HandoffState::Done
    }

    /// Opacity of the intro layer (1.0 while playing, fading to 0.0)
    pub fn overlay_alpha(&self) -> f32 {
        match self.state {
            HandoffState::Playing => 1.0,
            HandoffState::FadingOut => self.fade.alpha(),
            HandoffState::Done => 0.0,
        }
    }

    /// The hosted sequencer
    pub fn sequencer(&self) -> &IntroSequencer {
        &self.sequencer
    }
}
