//! Application systems
//!
//! Pieces of the app loop kept out of main.rs so they can be tested on
//! their own.

mod window;
mod intro;
mod render;

pub use window::{WindowSystem, WindowError, WindowMode, format_title, window_attributes};
pub use intro::IntroSystem;
pub use render::RenderSystem;
