//! Euler rotation in XYZ order

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};

/// Rotation expressed as three angles in radians, applied X then Y then Z
/// in the intrinsic sense (matrix = Rx * Ry * Rz).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same angle on all three axes
    #[inline]
    pub const fn uniform(angle: f32) -> Self {
        Self { x: angle, y: angle, z: angle }
    }

    /// Rotation matrix for these angles
    pub fn to_matrix(&self) -> Mat4 {
        mat4::mul(
            mat4::rotation_x(self.x),
            mat4::mul(mat4::rotation_y(self.y), mat4::rotation_z(self.z)),
        )
    }
}
