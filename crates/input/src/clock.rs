use std::time::Instant;

/// Per-frame delta-time source.
///
/// The first tick returns 0 (no prior reference), and a timestamp that
/// steps backwards clamps to 0 rather than going negative.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous tick. Call exactly once per
    /// rendered frame.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance using an explicit timestamp. Exposed for tests and for
    /// embedders with their own time source.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last {
            Some(prev) => now
                .checked_duration_since(prev)
                .map(|d| d.as_secs_f32())
                .unwrap_or(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }
}
