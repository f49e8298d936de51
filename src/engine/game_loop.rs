/// Frame clock and pause control
///
/// The simulation steps once per rendered frame with the real frame time.
/// Long frames (window drags, breakpoints) are clamped so a single tick never
/// jumps the fight forward by more than `MAX_FRAME_DELTA`.
use std::time::{Duration, Instant};

/// Longest step a single frame may feed the simulation (seconds)
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Weight of the newest frame in the smoothed frame time
const FPS_SMOOTHING: f32 = 0.1;

pub struct GameLoop {
    started: Instant,
    last_frame: Instant,
    paused: bool,
    frames: u64,
    ticks: u64,
    /// Exponentially smoothed frame time (seconds)
    smoothed_frame_time: f32,
    last_delta: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            paused: false,
            frames: 0,
            ticks: 0,
            smoothed_frame_time: 0.0,
            last_delta: 0.0,
        }
    }

    /// Start a frame. Returns the delta to tick the simulation with, or
    /// `None` while paused.
    pub fn begin_frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(frame_time)
    }

    fn advance(&mut self, frame_time: Duration) -> Option<f32> {
        let seconds = frame_time.as_secs_f32();
        self.frames += 1;
        self.smoothed_frame_time = if self.frames == 1 {
            seconds
        } else {
            self.smoothed_frame_time + (seconds - self.smoothed_frame_time) * FPS_SMOOTHING
        };

        if self.paused {
            return None;
        }

        let delta = seconds.min(MAX_FRAME_DELTA);
        self.last_delta = delta;
        self.ticks += 1;
        Some(delta)
    }

    /// Delta handed to the most recent tick (seconds)
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    pub fn fps(&self) -> f32 {
        if self.smoothed_frame_time > 0.0 {
            1.0 / self.smoothed_frame_time
        } else {
            0.0
        }
    }

    /// Wall-clock time since the loop was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Frames that actually ticked the simulation
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Paused time must not land in the next delta
            self.last_frame = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
