use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The first tick is measured against the instant the clock was created, so the
/// first delta covers all setup work done in between.
///
/// Delta time is passed through unmodified unless clamps are configured with
/// [`FrameClock::with_clamps`].
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    clamps: Option<(Duration, Duration)>,
}

impl FrameClock {
    /// Creates an unclamped clock whose baseline is now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates an unclamped clock with an explicit baseline.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            clamps: None,
        }
    }

    /// Creates a clock with delta-time clamps.
    ///
    /// - minimum avoids zero-dt frames from tight loops on some platforms
    /// - maximum bounds the step after debugger pauses or long stalls
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            clamps: Some((dt_min, dt_max)),
            ..Self::new()
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// Instants earlier than the previous tick produce a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        if let Some((dt_min, dt_max)) = self.clamps {
            dt = dt.clamp(dt_min, dt_max);
        }

        self.last = now.max(self.last);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_measured_from_creation() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let ft = clock.tick_at(start + Duration::from_millis(1500));
        assert!((ft.dt - 1.5).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn delta_is_time_since_previous_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        clock.tick_at(start + Duration::from_millis(100));
        let ft = clock.tick_at(start + Duration::from_millis(116));

        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn unclamped_clock_reports_long_stalls() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start + Duration::from_secs(10));
        assert!((ft.dt - 10.0).abs() < 1e-5);
    }

    #[test]
    fn clamps_bound_the_delta() {
        let mut clock =
            FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(250));
        let base = clock.last;

        let ft = clock.tick_at(base + Duration::from_secs(3));
        assert!((ft.dt - 0.25).abs() < 1e-6);

        let ft = clock.tick_at(base + Duration::from_secs(3));
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn backwards_instant_yields_zero_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        clock.tick_at(start + Duration::from_secs(1));

        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, 0.0);
    }
}
