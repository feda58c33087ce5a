use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How many recent frames the wall-clock statistics cover.
pub const CLOCK_WINDOW: usize = 60;

/// Wall-clock timing of the frame loop.
///
/// This is independent of the simulated time, which always advances by the
/// fixed timestep. It only reports how fast frames are actually produced.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
    recent: VecDeque<Duration>,
    total: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            recent: VecDeque::with_capacity(CLOCK_WINDOW),
            total: Duration::ZERO,
        }
    }

    /// Marks the start of a new frame and returns the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.record(delta);
        delta
    }

    /// Adds a frame duration to the window, dropping the oldest once it is full.
    pub fn record(&mut self, delta: Duration) {
        if self.recent.len() == CLOCK_WINDOW {
            if let Some(oldest) = self.recent.pop_front() {
                self.total -= oldest;
            }
        }
        self.recent.push_back(delta);
        self.total += delta;
    }

    /// Duration of the most recent frame, zero before the first tick.
    pub fn delta(&self) -> Duration {
        self.recent.back().copied().unwrap_or_default()
    }

    pub fn mean_delta(&self) -> Duration {
        match self.recent.len() {
            0 => Duration::ZERO,
            n => self.total / n as u32,
        }
    }

    pub fn fps(&self) -> u32 {
        let mean = self.mean_delta().as_secs_f64();
        if mean > 0.0 { (1.0 / mean).round() as u32 } else { 0 }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
