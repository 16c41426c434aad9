//! Haze's site
//!
//! A personal site: a particle intro that hands off to a profile page with
//! a music player, plus favorite music, games and movies pages. Content
//! comes from static JSON documents.
//!
//! - [`config`] - Layered TOML + environment configuration
//! - [`router`] - Routes under a deployment basename
//! - [`site`] - Route state, mounted views and their document loads
//! - [`pages`] - Page view trees and their terminal rendering
//! - [`boundary`] - Error boundary around page rendering
//! - [`error_policy`] - Process-wide filter for unhandled failures
//! - [`input`] - Key bindings
//! - [`systems`] - Window, intro and GPU systems for the app loop

pub mod config;
pub mod router;
pub mod site;
pub mod pages;
pub mod boundary;
pub mod error_policy;
pub mod input;
pub mod systems;

pub use config::AppConfig;
pub use router::{Route, Router};
pub use site::Site;
