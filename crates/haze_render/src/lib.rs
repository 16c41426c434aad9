//! Intro rendering
//!
//! wgpu renderer for the particle intro: every particle is one instance of
//! a small cube, lit by a fixed rig of red/orange/white lights and faded
//! out during the handoff.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - auto-rotating camera orbiting the origin
//! - [`pipeline::IntroPipeline`] - instanced cube pipeline with fade uniform
//! - [`geometry`] - cube mesh

pub mod context;
pub mod camera;
pub mod geometry;
pub mod pipeline;

pub use context::{RenderContext, RenderError};
pub use camera::OrbitCamera;
pub use pipeline::{IntroPipeline, IntroUniforms, Vertex, perspective_matrix, look_at_matrix};
