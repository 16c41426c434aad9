//! Intro render pipeline

pub mod types;
pub mod intro_pipeline;

pub use types::{Vertex, IntroUniforms};
pub use intro_pipeline::{IntroPipeline, perspective_matrix, look_at_matrix};
