// Sortscope Shared Types - Pace Control
//
// Live speed control shared between the interactive side (writer) and the
// sort worker (reader). One atomic scalar; a change takes effect on the
// next emission's delay, never retroactively.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;

/// Cloneable handle to the current animation speed.
///
/// Clones share the same underlying scalar, so a slider on the interactive
/// thread and the worker polling before each delay observe the same value.
#[derive(Debug, Clone)]
pub struct PaceSource {
    speed: Arc<AtomicU8>,
}

impl PaceSource {
    pub fn new(speed: u8) -> Self {
        Self {
            speed: Arc::new(AtomicU8::new(clamp(speed))),
        }
    }

    /// Current speed in [1, 100].
    pub fn speed(&self) -> u8 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Update the speed; out-of-range values clamp to [1, 100].
    pub fn set_speed(&self, speed: u8) {
        self.speed.store(clamp(speed), Ordering::Relaxed);
    }

    /// Delay applied after each forwarded snapshot: 105 - speed
    /// milliseconds, so speed 100 paces at 5ms and speed 1 at 104ms.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(105 - u64::from(self.speed()))
    }
}

impl Default for PaceSource {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

fn clamp(speed: u8) -> u8 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_endpoints() {
        assert_eq!(PaceSource::new(100).delay(), Duration::from_millis(5));
        assert_eq!(PaceSource::new(1).delay(), Duration::from_millis(104));
    }

    #[test]
    fn test_delay_formula() {
        for speed in MIN_SPEED..=MAX_SPEED {
            let pace = PaceSource::new(speed);
            assert_eq!(pace.delay(), Duration::from_millis(105 - u64::from(speed)));
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(PaceSource::new(0).speed(), MIN_SPEED);
        assert_eq!(PaceSource::new(200).speed(), MAX_SPEED);

        let pace = PaceSource::new(50);
        pace.set_speed(0);
        assert_eq!(pace.speed(), MIN_SPEED);
        pace.set_speed(255);
        assert_eq!(pace.speed(), MAX_SPEED);
    }

    #[test]
    fn test_clones_share_the_scalar() {
        let pace = PaceSource::default();
        let reader = pace.clone();
        assert_eq!(reader.speed(), DEFAULT_SPEED);

        pace.set_speed(90);
        assert_eq!(reader.speed(), 90);
        assert_eq!(reader.delay(), Duration::from_millis(15));
    }
}
