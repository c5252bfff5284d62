use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping out whatever is left of each frame's budget.
/// Slow frames are not made up for; the simulation just runs slower.
pub struct FramePacer {
    budget: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / target_fps.max(1),
            last_tick: Instant::now(),
        }
    }

    /// Time still to wait after a frame that took `elapsed`; zero once the budget is spent.
    fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Blocks until one budget has passed since the previous tick.
    pub fn tick(&mut self) {
        let wait = self.remaining(self.last_tick.elapsed());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_sixty_fps() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.budget, Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.budget, Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_fills_out_fast_frames() {
        let pacer = FramePacer::new(100);
        assert_eq!(pacer.remaining(Duration::ZERO), Duration::from_millis(10));
        assert_eq!(pacer.remaining(Duration::from_millis(4)), Duration::from_millis(6));
    }

    #[test]
    fn test_slow_frame_is_not_padded() {
        let pacer = FramePacer::new(10);
        assert_eq!(pacer.remaining(Duration::from_millis(100)), Duration::ZERO);
        assert_eq!(pacer.remaining(Duration::from_millis(250)), Duration::ZERO);
    }

    #[test]
    fn test_tick_waits_out_the_budget() {
        let mut pacer = FramePacer::new(100);
        let started = pacer.last_tick;
        pacer.tick();
        assert!(pacer.last_tick - started >= Duration::from_millis(10));
    }
}
