//! Renderer: paints the current orientation reading onto the drawing surface.
//!
//! The renderer owns its surface. The surface size is read once in
//! [`Renderer::new`] and never re-queried; clearing and clipping use that
//! stored area.
//!
//! # Layout
//!
//! ```text
//! Alpha: 87        ◔  filled sector, sweep = alpha degrees, center (180, 75)
//!
//! Beta: -12     ███   bar at (180, 150), width = beta, height 90
//!
//! Gamma: 30   ██████  bar at (90, 340), width 180, height = gamma
//! ```
//!
//! # Geometry Rules
//!
//! Shapes follow 2D canvas conventions, so readings look the same as on a
//! browser canvas:
//! - Sector angles are radians, 0 at 3 o'clock, positive clockwise (y down).
//!   A difference of a full turn or more draws the whole disc, anything else
//!   sweeps `(end - start) mod 2π` clockwise.
//! - Bars take signed dimensions. Negative width extends left of the origin,
//!   negative height extends up.
//! - Non-finite bar dimensions draw nothing.
//!
//! Bars are driven by the raw reading. [`BarScaling`] selects whether that
//! value passes through untouched or is clamped to a limit. Either way the
//! rectangle is clipped to the surface before filling, so a wild reading never
//! costs more than one surface worth of pixels.

use core::f32::consts::{PI, TAU};
use core::fmt::Write;

use embedded_graphics::{
    geometry::Angle,
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Sector},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{ALPHA_COLOR, BETA_COLOR, BLACK, GAMMA_COLOR},
    config::{
        ALPHA_CENTER, ALPHA_LABEL_POS, ALPHA_RADIUS, BETA_BAR_HEIGHT, BETA_BAR_ORIGIN, BETA_LABEL_POS,
        GAMMA_BAR_ORIGIN, GAMMA_BAR_WIDTH, GAMMA_LABEL_POS,
    },
    orientation::OrientationReading,
    styles::{LEFT_ALIGNED, READING_FONT},
};

/// Label buffer size. Fits the longest label plus any `f32` printed without
/// decimals (39 digits and a sign).
pub const LABEL_CAPACITY: usize = 48;

/// Surface background color.
const BACKGROUND: Rgb565 = BLACK;

// =============================================================================
// Bar Scaling
// =============================================================================

/// How a raw reading becomes a bar dimension.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BarScaling {
    /// Use the reading as-is, showing its true magnitude.
    #[default]
    PassThrough,
    /// Clamp each signed dimension to `[-limit, limit]` pixels.
    Clamp { limit: u32 },
}

impl BarScaling {
    /// Apply the scaling rule to one signed dimension.
    #[inline]
    pub fn apply(
        self,
        dimension: f32,
    ) -> f32 {
        match self {
            Self::PassThrough => dimension,
            Self::Clamp { limit } => {
                let limit = limit as f32;
                dimension.clamp(-limit, limit)
            }
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Round half toward positive infinity, so `2.5 -> 3` and `-2.5 -> -2`.
///
/// `value - floor` is exact in `f32`, so large odd integers and values just
/// below one half round correctly. NaN and infinities pass through.
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Build `label + rounded value` without heap allocation.
///
/// Non-finite values use the browser spellings `NaN`, `Infinity` and
/// `-Infinity`, and negative zero prints as `0`.
pub fn format_label(
    label: &str,
    value: f32,
) -> String<LABEL_CAPACITY> {
    let mut text: String<LABEL_CAPACITY> = String::new();
    let _ = match value {
        v if v.is_nan() => write!(text, "{label}NaN"),
        v if v.is_infinite() && v > 0.0 => write!(text, "{label}Infinity"),
        v if v.is_infinite() => write!(text, "{label}-Infinity"),
        // `+ 0.0` turns -0 into +0
        v => write!(text, "{label}{:.0}", round_half_up(v) + 0.0),
    };
    text
}

/// Degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 { degrees * PI / 180.0 }

/// Clockwise sweep from `start` to `end`, or `None` when nothing is drawn.
fn clockwise_sweep(
    start: f32,
    end: f32,
) -> Option<f32> {
    let diff = end - start;
    if !diff.is_finite() {
        return None;
    }
    let sweep = if diff >= TAU { TAU } else { diff.rem_euclid(TAU) };
    (sweep > 0.0).then_some(sweep)
}

/// Ordered `(low, high)` edges of a signed span, or `None` for non-finite length.
fn signed_span(
    start: f32,
    length: f32,
) -> Option<(f32, f32)> {
    if !length.is_finite() {
        return None;
    }
    if length < 0.0 {
        Some((start + length, start))
    } else {
        Some((start, start + length))
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Draws readings onto an owned surface.
pub struct Renderer<D> {
    surface: D,
    /// Surface area captured at construction.
    area: Rectangle,
    bar_scaling: BarScaling,
    visible: bool,
}

impl<D> Renderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Take ownership of `surface` and record its size.
    pub fn new(surface: D) -> Self {
        let area = surface.bounding_box();
        Self {
            surface,
            area,
            bar_scaling: BarScaling::default(),
            visible: true,
        }
    }

    /// Select how bar dimensions are derived from readings.
    #[must_use]
    pub fn with_bar_scaling(
        mut self,
        bar_scaling: BarScaling,
    ) -> Self {
        self.bar_scaling = bar_scaling;
        self
    }

    /// The surface, for compositing into the page.
    #[inline]
    pub const fn surface(&self) -> &D { &self.surface }

    /// Hide the surface. Used when orientation data is unavailable.
    pub fn hide(&mut self) { self.visible = false; }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    /// Erase the whole surface.
    pub fn clear_frame(&mut self) { self.surface.fill_solid(&self.area, BACKGROUND).ok(); }

    /// Draw a label with the rounded value, then a filled sector.
    ///
    /// `start_angle` and `end_angle` are radians; see the module docs for the
    /// sweep rule.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        label: &str,
        label_pos: Point,
        center: Point,
        radius: u32,
        start_angle: f32,
        end_angle: f32,
        value: f32,
        color: Rgb565,
    ) {
        self.draw_label(label, label_pos, value, color);

        let Some(sweep) = clockwise_sweep(start_angle, end_angle) else {
            return;
        };
        Sector::with_center(
            center,
            radius.saturating_mul(2),
            Angle::from_radians(start_angle),
            Angle::from_radians(sweep),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut self.surface)
        .ok();
    }

    /// Draw a label with the rounded value, then a filled rectangle with signed
    /// dimensions. Both dimensions go through the configured [`BarScaling`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bar(
        &mut self,
        label: &str,
        label_pos: Point,
        origin: Point,
        width: f32,
        height: f32,
        value: f32,
        color: Rgb565,
    ) {
        self.draw_label(label, label_pos, value, color);

        let width = self.bar_scaling.apply(width);
        let height = self.bar_scaling.apply(height);
        if let Some(rect) = self.clipped_rect(origin, width, height) {
            self.surface.fill_solid(&rect, color).ok();
        }
    }

    /// Draw the full orientation layout for one reading.
    pub fn draw_orientation(
        &mut self,
        reading: &OrientationReading,
    ) {
        self.draw_arc(
            "Alpha: ",
            ALPHA_LABEL_POS,
            ALPHA_CENTER,
            ALPHA_RADIUS,
            0.0,
            to_radians(reading.alpha),
            reading.alpha,
            ALPHA_COLOR,
        );
        self.draw_bar(
            "Beta: ",
            BETA_LABEL_POS,
            BETA_BAR_ORIGIN,
            reading.beta,
            BETA_BAR_HEIGHT,
            reading.beta,
            BETA_COLOR,
        );
        self.draw_bar(
            "Gamma: ",
            GAMMA_LABEL_POS,
            GAMMA_BAR_ORIGIN,
            GAMMA_BAR_WIDTH,
            reading.gamma,
            reading.gamma,
            GAMMA_COLOR,
        );
    }

    fn draw_label(
        &mut self,
        label: &str,
        pos: Point,
        value: f32,
        color: Rgb565,
    ) {
        let text = format_label(label, value);
        Text::with_text_style(&text, pos, MonoTextStyle::new(READING_FONT, color), LEFT_ALIGNED)
            .draw(&mut self.surface)
            .ok();
    }

    /// Rectangle for a signed bar, clipped to the surface. Edges are computed
    /// in `f32` so huge dimensions cannot overflow pixel coordinates.
    fn clipped_rect(
        &self,
        origin: Point,
        width: f32,
        height: f32,
    ) -> Option<Rectangle> {
        let (x0, x1) = signed_span(origin.x as f32, width)?;
        let (y0, y1) = signed_span(origin.y as f32, height)?;

        let left_edge = self.area.top_left.x as f32;
        let top_edge = self.area.top_left.y as f32;
        let right_edge = left_edge + self.area.size.width as f32;
        let bottom_edge = top_edge + self.area.size.height as f32;

        let left = x0.max(left_edge).round() as i32;
        let right = x1.min(right_edge).round() as i32;
        let top = y0.max(top_edge).round() as i32;
        let bottom = y1.min(bottom_edge).round() as i32;

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rectangle::new(
            Point::new(left, top),
            Size::new((right - left) as u32, (bottom - top) as u32),
        ))
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::SURFACE_SIZE;

    fn renderer() -> Renderer<SimulatorDisplay<Rgb565>> { Renderer::new(SimulatorDisplay::new(SURFACE_SIZE)) }

    fn draw(
        renderer: &mut Renderer<SimulatorDisplay<Rgb565>>,
        alpha: f32,
        beta: f32,
        gamma: f32,
    ) {
        renderer.clear_frame();
        renderer.draw_orientation(&OrientationReading { alpha, beta, gamma });
    }

    fn pixel(
        renderer: &Renderer<SimulatorDisplay<Rgb565>>,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        renderer.surface().get_pixel(Point::new(x, y))
    }

    // Sector probe points: 20px right/left and above/below the alpha center
    const LOWER_RIGHT: (i32, i32) = (200, 95);
    const LOWER_LEFT: (i32, i32) = (160, 95);
    const UPPER_LEFT: (i32, i32) = (160, 55);
    const UPPER_RIGHT: (i32, i32) = (200, 55);

    fn alpha_pixel(
        renderer: &Renderer<SimulatorDisplay<Rgb565>>,
        probe: (i32, i32),
    ) -> Rgb565 {
        pixel(renderer, probe.0, probe.1)
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.4), 0.0);
        assert_eq!(round_half_up(0.499_999_97), 0.0);
        assert_eq!(round_half_up(8_388_609.0), 8_388_609.0);
        assert_eq!(round_half_up(-8_388_609.0), -8_388_609.0);
        assert!(round_half_up(f32::NAN).is_nan());
        assert_eq!(round_half_up(f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("Alpha: ", 12.5).as_str(), "Alpha: 13");
        assert_eq!(format_label("Beta: ", -2.5).as_str(), "Beta: -2");
        assert_eq!(format_label("Beta: ", -0.2).as_str(), "Beta: 0");
        assert_eq!(format_label("Beta: ", -0.0).as_str(), "Beta: 0");
        assert_eq!(format_label("Beta: ", 0.499_999_97).as_str(), "Beta: 0");
        assert_eq!(format_label("Beta: ", 8_388_609.0).as_str(), "Beta: 8388609");
    }

    #[test]
    fn test_format_label_non_finite_spelling() {
        assert_eq!(format_label("Gamma: ", f32::NAN).as_str(), "Gamma: NaN");
        assert_eq!(format_label("Gamma: ", f32::INFINITY).as_str(), "Gamma: Infinity");
        assert_eq!(format_label("Gamma: ", f32::NEG_INFINITY).as_str(), "Gamma: -Infinity");
    }

    #[test]
    fn test_format_label_fits_extreme_values() {
        let text = format_label("Gamma: ", -f32::MAX);
        assert!(text.starts_with("Gamma: -340282"));
    }

    #[test]
    fn test_clockwise_sweep() {
        assert_eq!(clockwise_sweep(0.0, 0.0), None);
        assert_eq!(clockwise_sweep(0.0, f32::NAN), None);
        assert_eq!(clockwise_sweep(0.0, 10.0), Some(TAU));
        let wrapped = clockwise_sweep(0.0, -PI / 2.0).unwrap();
        assert!((wrapped - 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(BarScaling::PassThrough.apply(1e9), 1e9);
        assert_eq!(BarScaling::Clamp { limit: 100 }.apply(1e9), 100.0);
        assert_eq!(BarScaling::Clamp { limit: 100 }.apply(-250.0), -100.0);
        assert_eq!(BarScaling::Clamp { limit: 100 }.apply(f32::NEG_INFINITY), -100.0);
    }

    #[test]
    fn test_zero_alpha_draws_no_sector() {
        let mut r = renderer();
        draw(&mut r, 0.0, 0.0, 0.0);
        assert_eq!(alpha_pixel(&r, LOWER_RIGHT), BLACK);
        assert_eq!(alpha_pixel(&r, UPPER_LEFT), BLACK);
    }

    #[test]
    fn test_quarter_alpha_fills_lower_right() {
        let mut r = renderer();
        draw(&mut r, 90.0, 0.0, 0.0);
        assert_eq!(alpha_pixel(&r, LOWER_RIGHT), ALPHA_COLOR);
        assert_eq!(alpha_pixel(&r, LOWER_LEFT), BLACK);
        assert_eq!(alpha_pixel(&r, UPPER_RIGHT), BLACK);
    }

    #[test]
    fn test_negative_alpha_wraps_clockwise() {
        let mut r = renderer();
        draw(&mut r, -90.0, 0.0, 0.0);
        assert_eq!(alpha_pixel(&r, LOWER_RIGHT), ALPHA_COLOR);
        assert_eq!(alpha_pixel(&r, LOWER_LEFT), ALPHA_COLOR);
        assert_eq!(alpha_pixel(&r, UPPER_LEFT), ALPHA_COLOR);
        assert_eq!(alpha_pixel(&r, UPPER_RIGHT), BLACK);
    }

    #[test]
    fn test_beta_bar_follows_sign() {
        let mut r = renderer();
        draw(&mut r, 0.0, 50.0, 0.0);
        assert_eq!(pixel(&r, 200, 200), BETA_COLOR);
        assert_eq!(pixel(&r, 240, 200), BLACK);
        assert_eq!(pixel(&r, 150, 200), BLACK);

        draw(&mut r, 0.0, -50.0, 0.0);
        assert_eq!(pixel(&r, 150, 200), BETA_COLOR);
        assert_eq!(pixel(&r, 200, 200), BLACK);
    }

    #[test]
    fn test_gamma_bar_follows_sign() {
        let mut r = renderer();
        draw(&mut r, 0.0, 0.0, 45.0);
        assert_eq!(pixel(&r, 180, 360), GAMMA_COLOR);
        assert_eq!(pixel(&r, 180, 400), BLACK);

        draw(&mut r, 0.0, 0.0, -45.0);
        assert_eq!(pixel(&r, 180, 320), GAMMA_COLOR);
        assert_eq!(pixel(&r, 180, 360), BLACK);
    }

    #[test]
    fn test_huge_pass_through_bar_is_clipped() {
        let mut r = renderer();
        draw(&mut r, 0.0, 1e9, 0.0);
        let right = SURFACE_SIZE.width as i32 - 1;
        assert_eq!(pixel(&r, right, 200), BETA_COLOR);
        assert_eq!(pixel(&r, 200, 200), BETA_COLOR);
    }

    #[test]
    fn test_clamped_bar() {
        let mut r = Renderer::new(SimulatorDisplay::new(SURFACE_SIZE)).with_bar_scaling(BarScaling::Clamp { limit: 100 });
        draw(&mut r, 0.0, 1000.0, 0.0);
        assert_eq!(pixel(&r, 270, 200), BETA_COLOR);
        assert_eq!(pixel(&r, 290, 200), BLACK);
    }

    #[test]
    fn test_non_finite_bar_draws_nothing() {
        let mut r = renderer();
        draw(&mut r, 0.0, f32::NAN, f32::INFINITY);
        assert_eq!(pixel(&r, 200, 200), BLACK);
        assert_eq!(pixel(&r, 180, 360), BLACK);
    }

    #[test]
    fn test_clear_frame_erases_shapes() {
        let mut r = renderer();
        draw(&mut r, 90.0, 50.0, 45.0);
        assert_eq!(pixel(&r, 200, 200), BETA_COLOR);

        r.clear_frame();
        assert_eq!(pixel(&r, 200, 200), BLACK);
        assert_eq!(alpha_pixel(&r, LOWER_RIGHT), BLACK);
        assert_eq!(pixel(&r, 180, 360), BLACK);
    }

    #[test]
    fn test_clear_frame_covers_recorded_area() {
        let mut r = renderer();
        assert!(r.is_visible());

        // Both bars run off the surface: beta to the right edge, gamma to the bottom
        draw(&mut r, 0.0, 1e9, 1e9);
        let right = SURFACE_SIZE.width as i32 - 1;
        let bottom = SURFACE_SIZE.height as i32 - 1;
        assert_eq!(pixel(&r, right, 200), BETA_COLOR);
        assert_eq!(pixel(&r, 200, bottom), GAMMA_COLOR);

        r.clear_frame();
        assert_eq!(pixel(&r, right, 200), BLACK);
        assert_eq!(pixel(&r, 200, bottom), BLACK);
    }
}
