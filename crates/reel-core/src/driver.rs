//! Continuous auto-scroll driver.

use crate::constants::MAX_TICK_SEC;
use crate::track::TrackRing;
use std::time::Duration;

/// Lifecycle of the auto-scroll driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Not moving the track; may be started.
    Idle,
    /// Moving the track on every tick.
    Running,
    /// Torn down. Never moves the track again.
    Released,
}

/// Linear, repeating translation of the track by one cycle per `duration`.
///
/// The driver does not own a timer. The caller invokes `tick()` from its frame
/// loop with the elapsed time, and applies the returned offset.
///
/// ```rust
/// use reel_core::{AutoScrollDriver, TrackRing};
/// use std::time::Duration;
///
/// let ring = TrackRing::new(4, 400.0);
/// let mut driver = AutoScrollDriver::new(Duration::from_secs(4));
/// driver.start(0.0, &ring);
/// let offset = driver.tick(Duration::from_millis(100), &ring).unwrap();
/// assert!((offset + 10.0).abs() < 1e-9);
/// assert!(driver.stop());
/// assert_eq!(driver.tick(Duration::from_millis(100), &ring), None);
/// ```
#[derive(Clone, Debug)]
pub struct AutoScrollDriver {
    state: DriverState,
    offset: f64,
    duration: Duration,
}

impl AutoScrollDriver {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: DriverState::Idle,
            offset: 0.0,
            duration,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Begin moving from `from`, mapped onto the ring so that an offset left
    /// behind by a drag continues without a jump.
    pub fn start(&mut self, from: f64, ring: &TrackRing) {
        if self.state == DriverState::Released {
            return;
        }
        self.offset = ring.wrap(from);
        self.state = DriverState::Running;
    }

    /// Cancel if running. Returns true if the driver was running.
    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Running {
            self.state = DriverState::Idle;
            true
        } else {
            false
        }
    }

    /// Permanently stop the driver.
    pub fn release(&mut self) {
        self.state = DriverState::Released;
    }

    /// Pixels travelled per second for the given ring.
    pub fn speed(&self, ring: &TrackRing) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            ring.cycle_width() / secs
        }
    }

    /// Advance by `dt`. Returns the new offset while running.
    ///
    /// Steps longer than a quarter second (a backgrounded tab, a debugger
    /// pause) are clamped so the track does not lurch on resume.
    pub fn tick(&mut self, dt: Duration, ring: &TrackRing) -> Option<f64> {
        if self.state != DriverState::Running || ring.cycle_width() <= 0.0 {
            return None;
        }
        let dt_sec = dt.as_secs_f64().min(MAX_TICK_SEC);
        self.offset = ring.wrap(self.offset - self.speed(ring) * dt_sec);
        Some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> TrackRing {
        TrackRing::new(8, 800.0)
    }

    #[test]
    fn moves_linearly_and_wraps() {
        let ring = ring();
        let mut d = AutoScrollDriver::new(Duration::from_secs(8));
        d.start(0.0, &ring);
        // 100 px/s
        let a = d.tick(Duration::from_millis(200), &ring).unwrap();
        let b = d.tick(Duration::from_millis(200), &ring).unwrap();
        assert!((a + 20.0).abs() < 1e-9);
        assert!((b + 40.0).abs() < 1e-9);

        d.start(-790.0, &ring);
        let c = d.tick(Duration::from_millis(200), &ring).unwrap();
        assert!((c + 10.0).abs() < 1e-9, "wrapped to {c}");
    }

    #[test]
    fn stop_is_idempotent() {
        let mut d = AutoScrollDriver::new(Duration::from_secs(40));
        assert!(!d.stop());
        d.start(0.0, &ring());
        assert!(d.stop());
        assert!(!d.stop());
        assert_eq!(d.state(), DriverState::Idle);
    }

    #[test]
    fn released_driver_ignores_start() {
        let ring = ring();
        let mut d = AutoScrollDriver::new(Duration::from_secs(40));
        d.start(0.0, &ring);
        d.release();
        d.start(0.0, &ring);
        assert_eq!(d.state(), DriverState::Released);
        assert_eq!(d.tick(Duration::from_millis(16), &ring), None);
    }

    #[test]
    fn long_stall_is_clamped() {
        let ring = ring();
        let mut d = AutoScrollDriver::new(Duration::from_secs(8));
        d.start(0.0, &ring);
        let off = d.tick(Duration::from_secs(5), &ring).unwrap();
        assert!((off + 25.0).abs() < 1e-9);
    }
}
