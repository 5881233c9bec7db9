use glam::Mat4;
use std::f32::consts::FRAC_PI_4;

/// Perspective projection parameters.
///
/// The defaults keep the demo's fixed 1.0 aspect ratio
/// regardless of the actual window size; embedders that want a correct
/// aspect may overwrite the field from their viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: FRAC_PI_4,
            aspect: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Left-handed perspective matrix for the current parameters.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_demo_parameters() {
        let p = Projection::default();
        assert_eq!(p.fov_y, FRAC_PI_4);
        assert_eq!(p.aspect, 1.0);
        assert_eq!(p.near, 1.0);
        assert_eq!(p.far, 100.0);
    }

    #[test]
    fn matrix_is_finite() {
        assert!(Projection::default().matrix().is_finite());
    }
}
