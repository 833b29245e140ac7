//! Page composition: header, text panel and graphical panel.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Orientation                     (→)  │  40px header, toggle button right
//! ├──────────────────────────────────────┤
//! │                                      │
//! │  text panel: readings, notice, log   │
//! │            - or -                    │
//! │  graphical panel: drawing surface    │  520px
//! │  (or the notice when it is hidden)   │
//! │                                      │
//! └──────────────────────────────────────┘
//! ```
//!
//! The drawing surface is a separate display owned by the renderer. It is
//! copied onto the page at [`SURFACE_ORIGIN`] only while the graphical view is
//! shown and the surface is not hidden.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, ContainsPoint, Line, PointsIter, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    app::App,
    colors::{BLACK, GRAY, HEADER_BLUE, WHITE},
    config::{HEADER_HEIGHT, SCREEN_WIDTH, SURFACE_ORIGIN, TOGGLE_AREA, TOGGLE_CENTER, TOGGLE_DIAMETER},
    styles::{BODY_STYLE, LEFT_ALIGNED, NOTICE_STYLE, SMALL_STYLE, TITLE_STYLE},
    view::View,
};

/// The app as hosted in the desktop window.
pub type WindowApp = App<SimulatorDisplay<Rgb565>>;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header title baseline.
const TITLE_POS: Point = Point::new(10, 26);

/// Left margin of the content panels.
const PANEL_X: i32 = 12;

/// First text panel baseline.
const PANEL_TOP: i32 = HEADER_HEIGHT as i32 + 32;

/// Line height for reading lines.
const READING_LINE_HEIGHT: i32 = 24;

/// Line height for small text (notice, log).
const SMALL_LINE_HEIGHT: i32 = 13;

/// Half length of the arrow inside the toggle button.
const ARROW_HALF: i32 = 7;

/// Arrowhead size.
const ARROW_HEAD: i32 = 4;

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_BLUE);
const BUTTON_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);
const ARROW_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);
const SEPARATOR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Input
// =============================================================================

/// Whether a click at `point` (page coordinates) hits the toggle button.
#[inline]
pub fn hits_toggle(point: Point) -> bool { TOGGLE_AREA.contains(point) }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the full page for the current app state.
pub fn draw_page(
    display: &mut SimulatorDisplay<Rgb565>,
    app: &WindowApp,
) {
    display.clear(BLACK).ok();
    draw_header(display, app.view());

    match app.view() {
        View::Text => draw_text_panel(display, app),
        View::Graphical => draw_graphical_panel(display, app),
    }
}

/// Header bar with title and toggle button.
///
/// The arrow points right while the text view is shown (toward the drawing)
/// and left while the graphical view is shown.
pub fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    view: View,
) {
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT))
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("Orientation", TITLE_POS, TITLE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Circle::with_center(TOGGLE_CENTER, TOGGLE_DIAMETER)
        .into_styled(BUTTON_STYLE)
        .draw(display)
        .ok();

    draw_arrow(display, TOGGLE_CENTER, view == View::Text);
}

/// Horizontal arrow: one shaft, two head segments.
fn draw_arrow(
    display: &mut SimulatorDisplay<Rgb565>,
    center: Point,
    pointing_right: bool,
) {
    let dir = if pointing_right { 1 } else { -1 };
    let tip = Point::new(center.x + dir * ARROW_HALF, center.y);
    let tail = Point::new(center.x - dir * ARROW_HALF, center.y);
    let head_x = tip.x - dir * ARROW_HEAD;

    Line::new(tail, tip).into_styled(ARROW_STYLE).draw(display).ok();
    Line::new(Point::new(head_x, center.y - ARROW_HEAD), tip)
        .into_styled(ARROW_STYLE)
        .draw(display)
        .ok();
    Line::new(Point::new(head_x, center.y + ARROW_HEAD), tip)
        .into_styled(ARROW_STYLE)
        .draw(display)
        .ok();
}

/// Text view: readings, availability notice, redraw count and event log.
fn draw_text_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    app: &WindowApp,
) {
    let mut y = PANEL_TOP;

    for (axis, value) in app.store().get_values() {
        let mut line: String<48> = String::new();
        let _ = write!(line, "{axis}: {value:.1} deg");
        Text::with_text_style(&line, Point::new(PANEL_X, y), BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += READING_LINE_HEIGHT;
    }

    y += SMALL_LINE_HEIGHT;
    if let Some(notice) = app.availability().notice() {
        y = draw_notice(display, notice, y) + SMALL_LINE_HEIGHT;
    }

    let mut status: String<48> = String::new();
    let _ = write!(
        status,
        "view: {}  redraws: {}",
        app.view().name(),
        app.display_loop().frames_drawn()
    );
    Text::with_text_style(&status, Point::new(PANEL_X, y), SMALL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    y += SMALL_LINE_HEIGHT;

    Text::with_text_style("Press T or click (->) to switch views", Point::new(PANEL_X, y), SMALL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    y += SMALL_LINE_HEIGHT / 2;

    Line::new(Point::new(PANEL_X, y), Point::new(SCREEN_WIDTH as i32 - PANEL_X, y))
        .into_styled(SEPARATOR_STYLE)
        .draw(display)
        .ok();
    y += SMALL_LINE_HEIGHT;

    for entry in app.log().iter() {
        let mut line: String<52> = String::new();
        let _ = write!(line, "> {entry}");
        Text::with_text_style(&line, Point::new(PANEL_X, y), SMALL_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += SMALL_LINE_HEIGHT;
    }
}

/// Graphical view: the drawing surface, or the notice when it is hidden.
fn draw_graphical_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    app: &WindowApp,
) {
    let renderer = app.renderer();
    if renderer.is_visible() {
        composite_surface(display, renderer.surface(), SURFACE_ORIGIN);
    } else if let Some(notice) = app.availability().notice() {
        draw_notice(display, notice, PANEL_TOP);
    }
}

/// Draw notice lines from baseline `y`; returns the baseline after the last line.
fn draw_notice(
    display: &mut SimulatorDisplay<Rgb565>,
    lines: &[&str],
    mut y: i32,
) -> i32 {
    for line in lines {
        Text::with_text_style(line, Point::new(PANEL_X, y), NOTICE_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += SMALL_LINE_HEIGHT;
    }
    y
}

/// Copy every surface pixel onto the page, offset by `origin`.
pub fn composite_surface(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &SimulatorDisplay<Rgb565>,
    origin: Point,
) {
    let pixels = surface
        .bounding_box()
        .points()
        .map(|p| Pixel(p + origin, surface.get_pixel(p)));
    display.draw_iter(pixels).ok();
}
