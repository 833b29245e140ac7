//! Orientation events and a simulated sensor for the desktop host.
//!
//! On a desktop there is no orientation hardware, so the window binary feeds
//! the app from [`SimulatedSensor`]: three sine waves with different periods,
//! spanning the ranges real devices report.

/// One orientation event, angles in degrees.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct OrientationEvent {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// Time advance per generated event.
const TIME_STEP: f32 = 0.05;

/// Sine wave oscillating between `min` and `max`.
///
/// # Parameters
/// - `t`: Time parameter (advances each event)
/// - `min`, `max`: Output range
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn sweep_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Smoothly varying orientation source.
#[derive(Debug, Default)]
pub struct SimulatedSensor {
    t: f32,
}

impl SimulatedSensor {
    pub const fn new() -> Self { Self { t: 0.0 } }

    /// Produce the next event and advance time.
    pub fn next_event(&mut self) -> OrientationEvent {
        let event = OrientationEvent {
            alpha: sweep_signal(self.t, 0.0, 360.0, 0.05),
            beta: sweep_signal(self.t, -180.0, 180.0, 0.08),
            gamma: sweep_signal(self.t, -90.0, 90.0, 0.11),
        };
        self.t += TIME_STEP;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_mid_range() {
        let mut sensor = SimulatedSensor::new();
        let event = sensor.next_event();
        assert!((event.alpha - 180.0).abs() < 1e-3);
        assert!(event.beta.abs() < 1e-3);
        assert!(event.gamma.abs() < 1e-3);
    }

    #[test]
    fn test_events_stay_in_device_ranges() {
        let mut sensor = SimulatedSensor::new();
        for _ in 0..5000 {
            let e = sensor.next_event();
            assert!((0.0..=360.0).contains(&e.alpha));
            assert!((-180.0..=180.0).contains(&e.beta));
            assert!((-90.0..=90.0).contains(&e.gamma));
        }
    }

    #[test]
    fn test_events_change_over_time() {
        let mut sensor = SimulatedSensor::new();
        let first = sensor.next_event();
        let second = sensor.next_event();
        assert_ne!(first, second);
    }
}
