use glam::{Mat4, Vec3};

/// Pitch stops just short of straight up/down so the view basis stays
/// well formed under arbitrary accumulated mouse input.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Free-look camera: a position plus accumulated yaw/pitch, with a
/// cached left-handed view matrix.
///
/// Yaw accumulates without bounds (wrapping past 2π has no observable
/// effect on the matrix); pitch is clamped to `PITCH_LIMIT`. The view
/// matrix is deterministic given the same sequence of rotations.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    up: Vec3,
    view: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            view: Mat4::IDENTITY,
        };
        camera.update();
        camera
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the camera at `target` from `eye`. After `update`, the view
    /// matrix matches `Mat4::look_at_lh(eye, target, up)` for the same
    /// arguments. Degenerate input (eye == target, a zero up vector, or
    /// an up vector parallel to the look direction) falls back to +Z
    /// forward / +Y up instead of producing NaNs.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.position = eye;

        let dir = target - eye;
        let forward = if dir.length_squared() > f32::EPSILON {
            dir.normalize()
        } else {
            tracing::warn!("look_at target coincides with eye, facing +Z");
            Vec3::Z
        };

        self.yaw = forward.x.atan2(forward.z);
        self.pitch = (-forward.y).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.up = if up.length_squared() > f32::EPSILON
            && forward.cross(up).length_squared() > 1e-6
        {
            up.normalize()
        } else {
            tracing::warn!("degenerate up vector in look_at, falling back to +Y");
            Vec3::Y
        };

        self.update();
    }

    /// Increment yaw by `angle` radians (positive turns the view right).
    pub fn rotate_right(&mut self, angle: f32) {
        self.yaw += angle;
    }

    /// Increment pitch by `angle` radians (positive tilts the view down),
    /// clamped to just under ±π/2.
    pub fn rotate_down(&mut self, angle: f32) {
        self.pitch = (self.pitch + angle).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Recompute the cached view matrix from position, yaw, and pitch.
    /// Pure function of internal state; call once per frame before
    /// consuming `view`.
    pub fn update(&mut self) {
        let forward = self.forward();
        let up = if forward.cross(self.up).length_squared() > 1e-6 {
            self.up
        } else {
            // Stored up became parallel to the look direction.
            Vec3::Y
        };
        self.view = Mat4::look_to_lh(self.position, forward, up);
    }

    /// Unit look direction derived from yaw/pitch. Yaw 0, pitch 0 faces +Z.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            -self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// The view matrix cached by the last `update`.
    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn assert_mat4_close(a: Mat4, b: Mat4, tolerance: f32) {
        let a = a.to_cols_array();
        let b = b.to_cols_array();
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (x - y).abs() < tolerance,
                "matrices differ at element {i}: {x} vs {y}"
            );
        }
    }

    #[test]
    fn look_at_reproduces_reference_matrix() {
        let eye = Vec3::new(0.0, 3.0, -5.0);
        let target = Vec3::ZERO;
        let up = Vec3::Y;

        let mut camera = Camera::new();
        camera.look_at(eye, target, up);
        camera.update();

        let expected = Mat4::look_at_lh(eye, target, up);
        assert_mat4_close(camera.view(), expected, 1e-5);
    }

    #[test]
    fn view_is_pure_function_of_rotation_sequence() {
        let increments = [0.13_f32, -0.07, 0.4, 0.002, -0.3, 1.1];

        let mut a = Camera::new();
        let mut b = Camera::new();
        a.look_at(Vec3::new(0.0, 3.0, -5.0), Vec3::ZERO, Vec3::Y);
        b.look_at(Vec3::new(0.0, 3.0, -5.0), Vec3::ZERO, Vec3::Y);

        for step in increments {
            a.rotate_right(step);
            a.rotate_down(step * 0.5);
            b.rotate_right(step);
            b.rotate_down(step * 0.5);
        }
        a.update();
        b.update();

        // Replaying the same increments must yield a bit-identical matrix.
        assert_eq!(a.view().to_cols_array(), b.view().to_cols_array());
    }

    #[test]
    fn yaw_wrap_has_no_observable_effect() {
        let mut a = Camera::new();
        let mut b = Camera::new();
        a.rotate_right(0.3);
        b.rotate_right(0.3 + TAU);
        a.update();
        b.update();
        assert_mat4_close(a.view(), b.view(), 1e-4);
    }

    #[test]
    fn pitch_is_clamped_under_sustained_input() {
        let mut camera = Camera::new();
        for _ in 0..10_000 {
            camera.rotate_down(0.05);
        }
        camera.update();
        assert!(camera.pitch() < std::f32::consts::FRAC_PI_2);
        assert!(camera.forward().is_finite());
        assert!(camera.view().is_finite());

        for _ in 0..20_000 {
            camera.rotate_down(-0.05);
        }
        camera.update();
        assert!(camera.pitch() > -std::f32::consts::FRAC_PI_2);
        assert!(camera.view().is_finite());
    }

    #[test]
    fn degenerate_look_at_does_not_produce_nans() {
        let mut camera = Camera::new();
        camera.look_at(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        assert!(camera.view().is_finite());

        // Up parallel to the look direction.
        let mut camera = Camera::new();
        camera.look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), Vec3::Z);
        assert!(camera.view().is_finite());
    }

    #[test]
    fn rotate_right_turns_the_forward_vector() {
        let mut camera = Camera::new();
        camera.rotate_right(std::f32::consts::FRAC_PI_2);
        camera.update();
        let forward = camera.forward();
        assert!((forward.x - 1.0).abs() < 1e-5);
        assert!(forward.z.abs() < 1e-5);
    }
}
