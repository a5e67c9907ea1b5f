#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Host-side time services the quick menu consumes.
///
/// The menu freezes gameplay by setting the global time scale to zero, but its
/// own logic always runs on the unscaled delta so it stays interactive.
pub trait MenuHost {
    /// Unscaled delta time of the current frame, in seconds.
    fn unscaled_delta(&self) -> f32;

    /// Current global time scale.
    fn time_scale(&self) -> f32;

    /// Sets the global time scale (0 pauses gameplay).
    fn set_time_scale(&mut self, scale: f32);
}

/// Frame clock tracking both scaled (gameplay) and unscaled (UI) time.
pub struct GameClock {
    last_update: Instant,
    /// Real time since last tick
    pub unscaled_delta: Duration,
    /// Real time since last tick multiplied by `time_scale`
    pub delta: Duration,
    /// Accumulated scaled time (what gameplay sees as "now")
    pub time: f32,
    /// Accumulated real time
    pub unscaled_time: f32,
    /// Total number of ticks
    pub frame_count: u64,
    time_scale: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Creates a new clock starting from now with a time scale of 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            unscaled_delta: Duration::ZERO,
            delta: Duration::ZERO,
            time: 0.0,
            unscaled_time: 0.0,
            frame_count: 0,
            time_scale: 1.0,
        }
    }

    /// Samples the wall clock and advances by the elapsed real time.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_update;
        self.last_update = now;
        self.advance(elapsed);
    }

    /// Advances by an explicit real-time step.
    ///
    /// Used by fixed-step hosts and by tests that need deterministic frames.
    pub fn advance(&mut self, real: Duration) {
        self.unscaled_delta = real;
        self.delta = real.mul_f32(self.time_scale);
        self.unscaled_time += self.unscaled_delta.as_secs_f32();
        self.time += self.delta.as_secs_f32();
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl MenuHost for GameClock {
    fn unscaled_delta(&self) -> f32 {
        self.unscaled_delta.as_secs_f32()
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}
