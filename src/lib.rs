//! Orientation viewer library - testable modules for the viewer.
//!
//! Reads device orientation (alpha, beta, gamma) and presents it either as
//! text or as a live drawing: a sector for alpha and two bars for beta and
//! gamma. The binary (`main.rs`) hosts the app in a desktop window and feeds
//! it from a simulated sensor; everything else lives here and builds headless.
//!
//! # Testing
//!
//! ```bash
//! cargo test                        # headless, no SDL2 needed
//! cargo run --features window       # desktop window
//! ```
//!
//! # Modules
//!
//! - [`orientation`]: latest reading, get/set
//! - [`renderer`]: draws a reading onto the owned surface
//! - [`display_loop`]: per-frame redraw loop, active while the drawing is shown
//! - [`view`]: text/graphical toggle
//! - [`capability`]: form-factor probe and sensor availability
//! - [`app`]: owns all of the above and routes input to it
//! - [`page`]: header, text panel and surface compositing
//! - [`sensor`]: orientation events and the simulated sensor
//! - [`event_log`]: ring buffer of recent events
//! - [`config`], [`colors`], [`styles`]: constants and startup profile

// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // f32 -> i32 pixel math
#![allow(clippy::cast_precision_loss)] // i32/u32 -> f32 in geometry
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod capability;
pub mod colors;
pub mod config;
pub mod display_loop;
pub mod event_log;
pub mod orientation;
pub mod page;
pub mod renderer;
pub mod sensor;
pub mod styles;
pub mod view;

pub use app::App;
pub use orientation::{Axis, OrientationReading, OrientationStore};
pub use view::View;
