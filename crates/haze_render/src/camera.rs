//! Auto-rotating orbit camera

use haze_math::{mat4, Mat4, Vec3};

use crate::pipeline::{look_at_matrix, perspective_matrix};

/// Radians per second for an auto-rotate speed of 1 (one orbit per minute)
const AUTO_ROTATE_UNIT: f32 = std::f32::consts::TAU / 60.0;

/// Camera orbiting the origin at a fixed distance and height
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Horizontal distance from the Y axis
    radius: f32,
    height: f32,
    azimuth: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Orbit speed; 2.0 is one revolution every 30 seconds
    pub auto_rotate_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), 75.0, 0.1, 1000.0)
    }
}

impl OrbitCamera {
    /// Place the camera at `position`, looking at the origin
    pub fn new(position: Vec3, fov: f32, near: f32, far: f32) -> Self {
        Self {
            radius: (position.x * position.x + position.z * position.z).sqrt(),
            height: position.y,
            azimuth: position.x.atan2(position.z),
            fov,
            near,
            far,
            auto_rotate_speed: 2.0,
        }
    }

    pub fn with_auto_rotate(mut self, speed: f32) -> Self {
        self.auto_rotate_speed = speed;
        self
    }

    /// Advance the orbit by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.azimuth = (self.azimuth + self.auto_rotate_speed * AUTO_ROTATE_UNIT * dt)
            .rem_euclid(std::f32::consts::TAU);
    }

    /// Current eye position
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.azimuth.sin(),
            self.height,
            self.radius * self.azimuth.cos(),
        )
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at_matrix(self.eye().to_array(), [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_matrix(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// Combined projection * view
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_default_eye() {
        let camera = OrbitCamera::default();
        let eye = camera.eye();
        assert!(eye.x.abs() < EPSILON);
        assert!(eye.y.abs() < EPSILON);
        assert!((eye.z - 10.0).abs() < EPSILON);
        assert_eq!(camera.fov, 75.0);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = OrbitCamera::default();
        camera.update(7.5);
        assert!((camera.eye().length() - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_auto_rotate_speed_two_is_thirty_second_orbit() {
        let mut camera = OrbitCamera::default();
        camera.update(15.0);
        assert!((camera.azimuth() - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn test_update_ignores_bad_delta() {
        let mut camera = OrbitCamera::default();
        camera.update(-1.0);
        camera.update(f32::NAN);
        assert_eq!(camera.azimuth(), 0.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = OrbitCamera::default();
        let vp = camera.view_projection(16.0 / 9.0);
        // clip = vp * (0,0,0,1) is the last column
        let clip = vp[3];
        assert!(clip[3] > 0.0);
        assert!((clip[0] / clip[3]).abs() < EPSILON);
        assert!((clip[1] / clip[3]).abs() < EPSILON);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }
}
