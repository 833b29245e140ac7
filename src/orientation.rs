//! Orientation store: the latest alpha/beta/gamma reading.
//!
//! The store is a plain owned value. The app holds the only instance and lends
//! it out by reference; there is no global state and no locking, since sensor
//! events and redraws are delivered on the same thread.
//!
//! Values are stored exactly as received. Negative, huge or non-finite angles
//! are kept and echoed back; the renderer decides what to make of them.

use core::fmt;

/// One of the three orientation axes, in reporting order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Rotation around the z axis (compass heading), usually 0..360.
    Alpha,
    /// Front-to-back tilt, usually -180..180.
    Beta,
    /// Left-to-right tilt, usually -90..90.
    Gamma,
}

impl Axis {
    /// All axes in reporting order.
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::Gamma];

    /// Lowercase axis name as reported by orientation events.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three orientation angles in degrees.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct OrientationReading {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl OrientationReading {
    /// Value for a single axis.
    #[inline]
    pub const fn get(
        &self,
        axis: Axis,
    ) -> f32 {
        match axis {
            Axis::Alpha => self.alpha,
            Axis::Beta => self.beta,
            Axis::Gamma => self.gamma,
        }
    }
}

/// Holds the most recent reading. No history is kept.
#[derive(Debug, Default)]
pub struct OrientationStore {
    reading: OrientationReading,
}

impl OrientationStore {
    /// Create a store with all angles at zero.
    pub const fn new() -> Self {
        Self {
            reading: OrientationReading {
                alpha: 0.0,
                beta: 0.0,
                gamma: 0.0,
            },
        }
    }

    /// Overwrite all three angles.
    pub fn set_values(
        &mut self,
        alpha: f32,
        beta: f32,
        gamma: f32,
    ) {
        self.reading = OrientationReading { alpha, beta, gamma };
    }

    /// Snapshot as `(axis, value)` pairs in the order alpha, beta, gamma.
    pub fn get_values(&self) -> [(Axis, f32); 3] { Axis::ALL.map(|axis| (axis, self.reading.get(axis))) }

    /// Borrow the current reading.
    #[inline]
    pub const fn reading(&self) -> &OrientationReading { &self.reading }
}
