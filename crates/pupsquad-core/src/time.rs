// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Frame timing: the per-frame delta clock and the periodic frame summary.

use std::time::{Duration, Instant};

/// Measures the wall-clock time delta between consecutive frames.
///
/// The very first tick yields zero so physics sees no motion before a real
/// frame interval has been measured.
#[derive(Debug)]
pub struct FrameClock {
    previous: Option<Instant>,
}

impl FrameClock {
    /// Creates a clock that has not yet ticked.
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Returns the seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.previous {
            Some(previous) => (now - previous).as_secs_f32(),
            None => 0.0,
        };
        self.previous = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates frame counts and logs a once-per-interval summary.
#[derive(Debug)]
pub struct FrameStats {
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    /// Creates a stats accumulator that reports every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: Instant::now(),
            frames: 0,
        }
    }

    /// Records one frame. When a full interval has elapsed, logs the frame
    /// rate and average frame time, then starts a new window.
    pub fn record_frame(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= self.interval {
            let secs = elapsed.as_secs_f32();
            let fps = self.frames as f32 / secs;
            log::info!(
                "{} frames in {:.2}s ({:.1} FPS, {:.2} ms/frame)",
                self.frames,
                secs,
                fps,
                1000.0 / fps.max(f32::MIN_POSITIVE),
            );
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_subsequent_ticks_measure_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        std::thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();
        assert!(dt >= 0.010);
        assert!(dt < 1.0);
    }

    #[test]
    fn test_frame_stats_counts_frames() {
        // A long interval so the summary never fires during the test.
        let mut stats = FrameStats::new(Duration::from_secs(3600));
        for _ in 0..5 {
            stats.record_frame();
        }
        assert_eq!(stats.frames, 5);
    }
}
