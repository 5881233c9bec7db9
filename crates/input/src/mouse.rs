use glam::Vec2;

/// Converts absolute pointer samples into per-frame relative motion.
///
/// Units are whatever the pointer source reports (typically pixels); the
/// consumer applies its own sensitivity scale before use.
#[derive(Debug, Default)]
pub struct MouseSampler {
    last: Option<Vec2>,
}

impl MouseSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta from the previously recorded position to `current`, which
    /// becomes the new recorded position. `None` (pointer unavailable)
    /// and the very first sample both report zero motion; neither
    /// disturbs the recorded position except to establish it.
    pub fn sample(&mut self, current: Option<Vec2>) -> Vec2 {
        let Some(position) = current else {
            tracing::trace!("pointer position unavailable, reporting zero delta");
            return Vec2::ZERO;
        };
        let delta = match self.last {
            Some(previous) => position - previous,
            None => Vec2::ZERO,
        };
        self.last = Some(position);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_reports_zero_motion() {
        let mut sampler = MouseSampler::new();
        assert_eq!(sampler.sample(Some(Vec2::new(400.0, 300.0))), Vec2::ZERO);
    }

    #[test]
    fn stationary_pointer_reads_zero_on_second_sample() {
        let mut sampler = MouseSampler::new();
        let pos = Vec2::new(123.0, 456.0);
        sampler.sample(Some(pos));
        assert_eq!(sampler.sample(Some(pos)), Vec2::ZERO);
    }

    #[test]
    fn motion_produces_the_position_difference() {
        let mut sampler = MouseSampler::new();
        sampler.sample(Some(Vec2::new(100.0, 100.0)));
        let delta = sampler.sample(Some(Vec2::new(110.0, 92.0)));
        assert_eq!(delta, Vec2::new(10.0, -8.0));
    }

    #[test]
    fn unavailable_pointer_reads_zero_and_keeps_the_recorded_position() {
        let mut sampler = MouseSampler::new();
        sampler.sample(Some(Vec2::new(50.0, 50.0)));
        assert_eq!(sampler.sample(None), Vec2::ZERO);
        // The next real sample is still measured from the last position.
        let delta = sampler.sample(Some(Vec2::new(53.0, 50.0)));
        assert_eq!(delta, Vec2::new(3.0, 0.0));
    }
}
