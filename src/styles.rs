//! Pre-computed text styles.
//!
//! All styles are `const`, built at compile time and shared by reference, so
//! no draw function constructs a style per frame.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{GRAY, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned text. Reading labels and text panel lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Fonts
// =============================================================================

/// Reading label font (`ProFont` 14pt). Color varies per reading, so callers
/// build `MonoTextStyle::new(READING_FONT, color)`.
pub const READING_FONT: &MonoFont = &PROFONT_14_POINT;

// =============================================================================
// Text Styles
// =============================================================================

/// Header title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Text panel readings.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Small secondary text (counters, log lines).
pub const SMALL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Availability notice.
pub const NOTICE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, YELLOW);
