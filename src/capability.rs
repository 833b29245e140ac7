//! Startup capability check.
//!
//! Whether the orientation view is offered at all depends on two facts known
//! once at startup: the device form factor, answered by an injected
//! [`FormFactorProbe`], and whether the runtime delivers orientation events.
//! Both are folded into an [`Availability`] that the app keeps for the session.

/// Answers "is this a handheld (phone/tablet) device".
///
/// The detection mechanism is up to the host; the app only needs the answer.
pub trait FormFactorProbe {
    fn is_handheld(&self) -> bool;
}

/// Probe with a fixed answer, chosen by configuration or tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedFormFactor {
    handheld: bool,
}

impl FixedFormFactor {
    pub const fn new(handheld: bool) -> Self { Self { handheld } }
}

impl FormFactorProbe for FixedFormFactor {
    fn is_handheld(&self) -> bool { self.handheld }
}

/// Whether orientation data can be shown, and why not.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Availability {
    /// Handheld device with orientation events: attach the listener.
    Available,
    /// Not a handheld device.
    HandheldOnly,
    /// Handheld, but the runtime has no orientation events.
    SensorUnsupported,
}

impl Availability {
    /// Resolve availability. The probe is consulted exactly once.
    ///
    /// A non-handheld device reports [`Availability::HandheldOnly`] even when
    /// the sensor is also missing.
    pub fn resolve<P>(
        probe: &P,
        sensor_supported: bool,
    ) -> Self
    where
        P: FormFactorProbe + ?Sized,
    {
        if !probe.is_handheld() {
            Self::HandheldOnly
        } else if sensor_supported {
            Self::Available
        } else {
            Self::SensorUnsupported
        }
    }

    #[inline]
    pub const fn is_available(self) -> bool { matches!(self, Self::Available) }

    /// Explanatory message lines shown in place of the drawing surface.
    pub fn notice(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Available => None,
            Self::HandheldOnly => Some(&[
                "Note: orientation data is only",
                "available on handheld devices.",
            ]),
            Self::SensorUnsupported => Some(&[
                "Note: orientation sensor is not",
                "supported by this runtime.",
            ]),
        }
    }
}
