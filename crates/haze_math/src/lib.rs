//! 3D Mathematics Library
//!
//! This crate provides the small amount of linear algebra the intro animation needs.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler`] - XYZ-ordered Euler rotation
//! - [`Mat4`] - 4x4 column-major matrix for instance transforms
//!
//! ## Easing
//!
//! - [`easing`] - Normalized easing curves used by the particle phases

mod vec3;
mod euler;
pub mod mat4;
pub mod easing;

pub use vec3::Vec3;
pub use euler::Euler;
pub use mat4::Mat4;
