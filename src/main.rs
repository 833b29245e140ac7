//! Orientation viewer in a desktop window.
//!
//! The window stands in for a phone screen. A simulated sensor delivers one
//! orientation event per frame, and the frame tick drives the redraw loop the
//! way a display refresh would.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | `T` | Toggle text / graphical view |
//! | Click the header button | Toggle text / graphical view |
//!
//! Key repeat is ignored so holding a key does not flicker the view.
//!
//! # Environment
//!
//! See [`orientation_viewer::config`] for `ORIENTATION_VIEWER_*` variables that
//! select the form factor, sensor support and bar scaling.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use orientation_viewer::App;
use orientation_viewer::capability::FixedFormFactor;
use orientation_viewer::colors::BLACK;
use orientation_viewer::config::{DeviceProfile, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SURFACE_SIZE, WINDOW_SCALE};
use orientation_viewer::page::{draw_page, hits_toggle};
use orientation_viewer::sensor::SimulatedSensor;

fn main() {
    let profile = DeviceProfile::from_env();

    // Surface sized once to its container: the page area below the header
    let surface: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(SURFACE_SIZE);
    let probe = FixedFormFactor::new(profile.handheld);
    let mut app = App::start(surface, &probe, profile.sensor_supported, profile.bar_scaling);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Device Orientation", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut sensor = SimulatedSensor::new();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::T {
                        app.on_toggle();
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } if hits_toggle(point) => app.on_toggle(),
                _ => {}
            }
        }

        // Sensor events arrive independently of the redraw loop
        if app.is_listening() {
            app.on_orientation(sensor.next_event());
        }

        app.on_frame();

        draw_page(&mut display, &app);
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
