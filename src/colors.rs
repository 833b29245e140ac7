//! Color constants for the orientation viewer.
//!
//! Standard colors come from the `RgbColor` trait constants; the three reading
//! colors are the page's original hex colors converted to RGB565
//! (red/blue keep the top 5 bits, green the top 6).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Surface and page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Body text and the toggle button outline.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Dark gray for separators and secondary text.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Header bar fill.
pub const HEADER_BLUE: Rgb565 = Rgb565::new(2, 12, 14);

/// Notice text (feature unavailable).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Reading Colors
// =============================================================================

/// Alpha sector, `#FF7777`.
pub const ALPHA_COLOR: Rgb565 = Rgb565::new(31, 29, 14);

/// Beta bar, `#FF6600`.
pub const BETA_COLOR: Rgb565 = Rgb565::new(31, 25, 0);

/// Gamma bar, `#FF0000`.
pub const GAMMA_COLOR: Rgb565 = Rgb565::RED;
