//! Input handling module
//!
//! Maps raw key events to site actions.

mod input_mapper;

pub use input_mapper::{InputMapper, SiteAction};
