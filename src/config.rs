//! Application configuration.
//!
//! Layout is fixed at compile time as `const` values. The only runtime
//! configuration is the [`DeviceProfile`], read once from the environment by
//! the binary before anything is drawn.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `ORIENTATION_VIEWER_DEVICE` | `handheld`, `desktop` | `handheld` |
//! | `ORIENTATION_VIEWER_SENSOR` | `on`, `off` | `on` |
//! | `ORIENTATION_VIEWER_BARS` | `pass-through`, `clamp` | `pass-through` |

use std::time::Duration;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::renderer::BarScaling;

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels (portrait phone-sized page).
pub const SCREEN_WIDTH: u32 = 360;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 560;

/// Header bar height (title and toggle button).
pub const HEADER_HEIGHT: u32 = 40;

/// Drawing surface size: everything below the header.
pub const SURFACE_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT);

/// Where the drawing surface sits on the page.
pub const SURFACE_ORIGIN: Point = Point::new(0, HEADER_HEIGHT as i32);

/// Output scale of the simulator window.
pub const WINDOW_SCALE: u32 = 1;

// =============================================================================
// Toggle Button
// =============================================================================

/// Center of the round toggle button in the header.
pub const TOGGLE_CENTER: Point = Point::new((SCREEN_WIDTH - 24) as i32, (HEADER_HEIGHT / 2) as i32);

/// Toggle button diameter.
pub const TOGGLE_DIAMETER: u32 = 28;

/// Clickable area of the toggle button.
pub const TOGGLE_AREA: Rectangle = Rectangle::new(
    Point::new(TOGGLE_CENTER.x - (TOGGLE_DIAMETER / 2) as i32, TOGGLE_CENTER.y - (TOGGLE_DIAMETER / 2) as i32),
    Size::new(TOGGLE_DIAMETER, TOGGLE_DIAMETER),
);

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). Stands in for the display refresh the redraw
/// loop is scheduled against.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Orientation Layout (surface coordinates)
// =============================================================================

/// Alpha label baseline position.
pub const ALPHA_LABEL_POS: Point = Point::new(10, 20);

/// Alpha sector center.
pub const ALPHA_CENTER: Point = Point::new(180, 75);

/// Alpha sector radius.
pub const ALPHA_RADIUS: u32 = 60;

/// Beta label baseline position.
pub const BETA_LABEL_POS: Point = Point::new(10, 140);

/// Beta bar origin. Width follows beta.
pub const BETA_BAR_ORIGIN: Point = Point::new(180, 150);

/// Beta bar fixed height.
pub const BETA_BAR_HEIGHT: f32 = 90.0;

/// Gamma label baseline position.
pub const GAMMA_LABEL_POS: Point = Point::new(10, 270);

/// Gamma bar origin. Height follows gamma.
pub const GAMMA_BAR_ORIGIN: Point = Point::new(90, 340);

/// Gamma bar fixed width.
pub const GAMMA_BAR_WIDTH: f32 = 180.0;

/// Bar dimension limit used when clamping is selected.
pub const BAR_CLAMP_LIMIT: u32 = 180;

// =============================================================================
// Startup Profile
// =============================================================================

/// Environment variable selecting the device form factor.
pub const ENV_DEVICE: &str = "ORIENTATION_VIEWER_DEVICE";

/// Environment variable switching the orientation sensor off.
pub const ENV_SENSOR: &str = "ORIENTATION_VIEWER_SENSOR";

/// Environment variable selecting bar scaling.
pub const ENV_BARS: &str = "ORIENTATION_VIEWER_BARS";

/// What the host looks like at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeviceProfile {
    /// Handheld (phone/tablet) form factor.
    pub handheld: bool,
    /// Runtime delivers orientation events.
    pub sensor_supported: bool,
    /// How bar dimensions are derived from raw readings.
    pub bar_scaling: BarScaling,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            handheld: true,
            sensor_supported: true,
            bar_scaling: BarScaling::PassThrough,
        }
    }
}

impl DeviceProfile {
    /// Build a profile from raw variable values. Unknown values keep the default.
    pub fn parse(
        device: Option<&str>,
        sensor: Option<&str>,
        bars: Option<&str>,
    ) -> Self {
        let mut profile = Self::default();

        match device.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("desktop") => profile.handheld = false,
            Some(v) if v.eq_ignore_ascii_case("handheld") => profile.handheld = true,
            _ => {}
        }

        match sensor.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("off") => profile.sensor_supported = false,
            Some(v) if v.eq_ignore_ascii_case("on") => profile.sensor_supported = true,
            _ => {}
        }

        if let Some(v) = bars.map(str::trim)
            && v.eq_ignore_ascii_case("clamp")
        {
            profile.bar_scaling = BarScaling::Clamp { limit: BAR_CLAMP_LIMIT };
        }

        profile
    }

    /// Read the profile from the process environment.
    pub fn from_env() -> Self {
        let device = std::env::var(ENV_DEVICE).ok();
        let sensor = std::env::var(ENV_SENSOR).ok();
        let bars = std::env::var(ENV_BARS).ok();
        Self::parse(device.as_deref(), sensor.as_deref(), bars.as_deref())
    }
}
