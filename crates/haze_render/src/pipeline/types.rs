//! GPU-compatible data types for the intro pipeline
//!
//! These types match the layouts in `shaders/intro.wgsl`.

use bytemuck::{Pod, Zeroable};
use haze_math::mat4;

/// Cube mesh vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-frame uniforms
/// Layout: 176 bytes total (must match intro.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct IntroUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Eye position + ambient strength (16 bytes)
    pub eye: [f32; 3],
    pub ambient_strength: f32,
    /// Emissive color + strength (16 bytes)
    pub emissive: [f32; 3],
    pub emissive_strength: f32,
    /// Overall opacity of the intro, 1 -> 0 during the handoff (16 bytes)
    pub fade: f32,
    pub _padding: [f32; 3],
}

impl Default for IntroUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            eye: [0.0, 0.0, 10.0],
            ambient_strength: 0.3,
            emissive: [1.0, 0.0, 0.0],
            emissive_strength: 0.5,
            fade: 1.0,
            _padding: [0.0; 3],
        }
    }
}
